// Loads the tracker configuration from environment variables.
//
// The parsing works on a lookup closure so tests don't have to touch the
// real process environment.

use crate::core::tracker::{ConfigError, TrackerConfig};

pub const PANEL_CHANNEL_VAR: &str = "PANEL_CHANNEL_ID";
pub const LEADERBOARD_CHANNEL_VAR: &str = "LEADERBOARD_CHANNEL_ID";
pub const LOG_CHANNEL_VAR: &str = "LOG_CHANNEL_ID";
pub const ADMIN_ROLE_VAR: &str = "ADMIN_ROLE_ID";

const TOKEN_VARS: [&str; 2] = ["DISCORD_BOT_TOKEN", "DISCORD_TOKEN"];

pub fn tracker_config_from_env() -> Result<TrackerConfig, ConfigError> {
    tracker_config_from_lookup(|name| std::env::var(name).ok())
}

pub fn tracker_config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TrackerConfig, ConfigError> {
    Ok(TrackerConfig {
        panel_channel_id: read_id(&lookup, PANEL_CHANNEL_VAR)?,
        leaderboard_channel_id: read_id(&lookup, LEADERBOARD_CHANNEL_VAR)?,
        log_channel_id: read_id(&lookup, LOG_CHANNEL_VAR)?,
        admin_role_id: read_id(&lookup, ADMIN_ROLE_VAR)?,
    })
}

/// The bot token, preferring `DISCORD_BOT_TOKEN` over `DISCORD_TOKEN`.
pub fn token_from_env() -> Result<String, ConfigError> {
    token_from_lookup(|name| std::env::var(name).ok())
}

pub fn token_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    TOKEN_VARS
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
        .ok_or(ConfigError::Missing(TOKEN_VARS[0]))
}

fn read_id(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<u64, ConfigError> {
    let raw = lookup(name).ok_or(ConfigError::Missing(name))?;
    let value = raw.trim();

    let id = value.parse::<u64>().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })?;

    if id == 0 {
        return Err(ConfigError::Zero(name));
    }

    Ok(id)
}
