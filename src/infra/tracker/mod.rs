pub mod env_config;

pub use env_config::{token_from_env, tracker_config_from_env};
