pub mod commands;
pub mod vocab_source;
