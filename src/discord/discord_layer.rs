// Discord layer - commands, panel components and event handlers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

pub mod panel;

use crate::core::tracker::TrackerController;
use panel::SerenitySync;
use std::sync::Arc;

/// Shared state handed to every command and event.
pub struct Data {
    pub tracker: Arc<TrackerController<SerenitySync>>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
