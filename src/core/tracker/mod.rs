// Food & drink stock tracker - domain logic.

pub mod ledger_export;
pub mod live_sync;
pub mod presentation;
pub mod tracker_actions;
pub mod tracker_config;
pub mod tracker_controller;
pub mod tracker_models;
pub mod valuation;

pub use live_sync::{LiveSync, MessageHandle, PanelControls, SyncError};
pub use tracker_actions::Action;
pub use tracker_config::{ConfigError, TrackerConfig};
pub use tracker_controller::TrackerController;
pub use tracker_models::Actor;
