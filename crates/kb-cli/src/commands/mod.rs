pub mod config_ops;
pub mod query_ops;
