// The seam between the tracker and whatever is displaying it.
//
// The controller only ever asks for three things: post-or-edit a message,
// append a log line, and look up a display name. The Discord implementation
// lives in `discord::panel::serenity_sync`.

use super::tracker_models::Ledger;
use async_trait::async_trait;
use thiserror::Error;

/// Discord caps a select menu at 25 options.
pub const MAX_SELECT_OPTIONS: usize = 25;

/// Discord caps a select option label at 100 characters.
pub const MAX_OPTION_LABEL_LEN: usize = 100;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// A message we previously posted and can edit in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    pub channel_id: u64,
    pub message_id: u64,
}

/// One entry in the "Mark user as Paid" choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidOption {
    pub user_id: u64,
    pub label: String,
}

/// The controls rendered under the panel. The buttons are always present;
/// the choice list only when someone has contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelControls {
    pub mark_paid_options: Vec<PaidOption>,
}

impl PanelControls {
    /// Build the choice list from the ledger, highest contributors first.
    pub fn for_ledger(ledger: &Ledger, resolve_name: impl Fn(u64) -> Option<String>) -> Self {
        let mark_paid_options = ledger
            .ranked()
            .into_iter()
            .take(MAX_SELECT_OPTIONS)
            .map(|entry| {
                let label = resolve_name(entry.user_id)
                    .unwrap_or_else(|| entry.user_id.to_string())
                    .chars()
                    .take(MAX_OPTION_LABEL_LEN)
                    .collect();
                PaidOption {
                    user_id: entry.user_id,
                    label,
                }
            })
            .collect();

        Self { mark_paid_options }
    }

    pub fn has_mark_paid(&self) -> bool {
        !self.mark_paid_options.is_empty()
    }
}

/// Handles of the two live messages. Empty until the first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub panel: Option<MessageHandle>,
    pub leaderboard: Option<MessageHandle>,
}

#[async_trait]
pub trait LiveSync: Send + Sync {
    /// Edit `existing` if given, otherwise post a new message to `channel_id`.
    /// Returns the handle to reuse next time.
    async fn send_or_update_message(
        &self,
        channel_id: u64,
        existing: Option<MessageHandle>,
        content: String,
        controls: Option<PanelControls>,
    ) -> Result<MessageHandle, SyncError>;

    async fn append_log_line(&self, channel_id: u64, text: String) -> Result<(), SyncError>;

    /// Best-effort display name; `None` on a lookup miss.
    fn display_name(&self, user_id: u64) -> Option<String>;
}
