pub mod settings;
pub mod suggest;
