// The infra module contains implementations of core concerns that touch the
// outside world. Each feature goes in its own submodule.

#[path = "tracker/mod.rs"]
pub mod tracker;
