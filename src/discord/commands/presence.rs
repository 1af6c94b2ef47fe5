// Bot presence.
//
// Discord-layer glue only: we work with SDK types (Context, ActivityData,
// OnlineStatus) and keep it short.

use poise::serenity_prelude as serenity;

/// Called once the bot is ready so the member list shows what we're for.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::watching("the stock");
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
