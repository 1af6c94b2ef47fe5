// LiveSync backed by serenity's HTTP client and cache.

use super::controls::build_components;
use crate::core::tracker::{LiveSync, MessageHandle, PanelControls, SyncError};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

pub struct SerenitySync {
    http: Arc<serenity::Http>,
    cache: Arc<serenity::Cache>,
}

impl SerenitySync {
    pub fn new(http: Arc<serenity::Http>, cache: Arc<serenity::Cache>) -> Self {
        Self { http, cache }
    }
}

fn delivery(err: serenity::Error) -> SyncError {
    SyncError::Delivery(err.to_string())
}

#[async_trait]
impl LiveSync for SerenitySync {
    async fn send_or_update_message(
        &self,
        channel_id: u64,
        existing: Option<MessageHandle>,
        content: String,
        controls: Option<PanelControls>,
    ) -> Result<MessageHandle, SyncError> {
        let components = controls.as_ref().map(build_components);

        if let Some(handle) = existing {
            let mut edit = serenity::EditMessage::new().content(content);
            if let Some(components) = components {
                edit = edit.components(components);
            }

            serenity::ChannelId::new(handle.channel_id)
                .edit_message(
                    self.http.as_ref(),
                    serenity::MessageId::new(handle.message_id),
                    edit,
                )
                .await
                .map_err(delivery)?;

            tracing::debug!(
                channel_id = handle.channel_id,
                message_id = handle.message_id,
                "Edited live message"
            );
            return Ok(handle);
        }

        let mut message = serenity::CreateMessage::new().content(content);
        if let Some(components) = components {
            message = message.components(components);
        }

        let sent = serenity::ChannelId::new(channel_id)
            .send_message(self.http.as_ref(), message)
            .await
            .map_err(delivery)?;

        tracing::info!(
            channel_id,
            message_id = sent.id.get(),
            "Posted live message"
        );

        Ok(MessageHandle {
            channel_id,
            message_id: sent.id.get(),
        })
    }

    async fn append_log_line(&self, channel_id: u64, text: String) -> Result<(), SyncError> {
        serenity::ChannelId::new(channel_id)
            .say(self.http.as_ref(), text)
            .await
            .map_err(delivery)?;
        Ok(())
    }

    fn display_name(&self, user_id: u64) -> Option<String> {
        // Cache only; an HTTP fetch per leaderboard line would be far too slow.
        self.cache
            .user(serenity::UserId::new(user_id))
            .map(|user| user.global_name.clone().unwrap_or_else(|| user.name.clone()))
    }
}
