// The live panel: component builders, the serenity-backed sync, and the
// router for button/select presses.

pub mod controls;
pub mod interactions;
pub mod serenity_sync;

pub use interactions::handle_component;
pub use serenity_sync::SerenitySync;
