mod local;
mod public;
