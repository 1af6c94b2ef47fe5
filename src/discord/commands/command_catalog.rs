// Discord commands module.
// Each feature gets its own command file.

pub mod tracker;

// Bot presence management
pub mod presence;
