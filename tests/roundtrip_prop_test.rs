use proptest::prelude::*;

use paseto4::prelude::*;

fn random_local_key() -> PasetoSymmetricKey<V4, Local> {
    PasetoSymmetricKey::<V4, Local>::from(Key::try_new_random().unwrap_or_default())
}

fn flip_char(token: &str, index: usize) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    chars.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn local_tokens_roundtrip_arbitrary_bytes(
        content in proptest::collection::vec(any::<u8>(), 0..512),
        footer in proptest::collection::vec(any::<u8>(), 0..64),
        implicit in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let key = random_local_key();
        let nonce = Key::<32>::try_new_random().unwrap_or_default();
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        let token = Paseto::<V4, Local>::builder()
            .set_payload(Payload::from(content.as_slice()))
            .set_footer(Footer::from(footer.as_slice()))
            .set_implicit_assertion(ImplicitAssertion::from(implicit.as_slice()))
            .try_encrypt(&key, &nonce)
            .unwrap();

        let plaintext = Paseto::<V4, Local>::try_decrypt(
            &token,
            &key,
            Footer::from(footer.as_slice()),
            ImplicitAssertion::from(implicit.as_slice()),
        )
        .unwrap();

        prop_assert_eq!(content, plaintext);
    }

    #[test]
    fn public_tokens_roundtrip_arbitrary_bytes(
        seed in any::<[u8; 32]>(),
        content in proptest::collection::vec(any::<u8>(), 0..512),
        footer in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
        let keypair = Key::<64>::from(signing_key.to_keypair_bytes());
        let private_key = PasetoAsymmetricPrivateKey::<V4, Public>::from(&keypair);
        let public_bytes = Key::<32>::from(signing_key.verifying_key().to_bytes());
        let public_key = PasetoAsymmetricPublicKey::<V4, Public>::from(&public_bytes);

        let token = Paseto::<V4, Public>::builder()
            .set_payload(Payload::from(content.as_slice()))
            .set_footer(Footer::from(footer.as_slice()))
            .try_sign(&private_key)
            .unwrap();

        let message = Paseto::<V4, Public>::try_verify(
            &token,
            &public_key,
            Footer::from(footer.as_slice()),
            None,
        )
        .unwrap();

        prop_assert_eq!(content, message);
    }

    #[test]
    fn any_change_to_a_local_payload_is_detected(index in 0usize..4096) {
        let key = random_local_key();
        let nonce = Key::<32>::try_new_random().unwrap_or_default();
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        let token = Paseto::<V4, Local>::builder()
            .set_payload(Payload::from("a message whose integrity matters"))
            .try_encrypt(&key, &nonce)
            .unwrap();

        // tamper inside the encoded payload segment, past the "v4.local." prefix
        let prefix_len = "v4.local.".len();
        let target = prefix_len + (index % (token.len() - prefix_len));
        let tampered = flip_char(&token, target);
        prop_assume!(tampered != token);

        prop_assert!(Paseto::<V4, Local>::try_decrypt(&tampered, &key, None, None).is_err());
    }

    #[test]
    fn any_change_to_a_signed_payload_is_detected(index in 0usize..4096) {
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&[0x24; 32]);
        let keypair = Key::<64>::from(signing_key.to_keypair_bytes());
        let private_key = PasetoAsymmetricPrivateKey::<V4, Public>::from(&keypair);
        let public_bytes = Key::<32>::from(signing_key.verifying_key().to_bytes());
        let public_key = PasetoAsymmetricPublicKey::<V4, Public>::from(&public_bytes);

        let token = Paseto::<V4, Public>::builder()
            .set_payload(Payload::from("a message whose integrity matters"))
            .try_sign(&private_key)
            .unwrap();

        let prefix_len = "v4.public.".len();
        let target = prefix_len + (index % (token.len() - prefix_len));
        let tampered = flip_char(&token, target);
        prop_assume!(tampered != token);

        prop_assert!(Paseto::<V4, Public>::try_verify(&tampered, &public_key, None, None).is_err());
    }

    #[test]
    fn a_different_implicit_assertion_is_rejected(assertion in "[a-z]{1,32}") {
        let key = random_local_key();
        let nonce = Key::<32>::try_new_random().unwrap_or_default();
        let nonce = PasetoNonce::<V4, Local>::from(&nonce);

        let token = Paseto::<V4, Local>::builder()
            .set_payload(Payload::from("bound to a context"))
            .set_implicit_assertion(ImplicitAssertion::from("the real context"))
            .try_encrypt(&key, &nonce)
            .unwrap();

        prop_assert!(Paseto::<V4, Local>::try_decrypt(
            &token,
            &key,
            None,
            ImplicitAssertion::from(assertion.as_str())
        )
        .is_err());
    }

    #[test]
    fn paserk_local_encoding_is_the_identity_on_bytes(bytes in any::<[u8; 32]>()) {
        let key = PasetoSymmetricKey::<V4, Local>::from(Key::from(bytes));
        let encoded = key.to_paserk_string();
        let decoded = PasetoSymmetricKey::<V4, Local>::try_from_paserk_str(&encoded).unwrap();
        prop_assert_eq!(&bytes, decoded.as_ref());
    }
}
