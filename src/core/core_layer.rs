// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "tracker/mod.rs"]
pub mod tracker;
