use thiserror::Error;

/// Where the tracker lives and who may administer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub panel_channel_id: u64,
    pub leaderboard_channel_id: u64,
    pub log_channel_id: u64,
    pub admin_role_id: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable")]
    Missing(&'static str),
    #[error("{name} must be a numeric Discord ID, got {value:?}")]
    Invalid { name: &'static str, value: String },
    #[error("{0} must not be zero")]
    Zero(&'static str),
}
