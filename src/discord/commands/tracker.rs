// Admin slash commands for the stock tracker.
//
// The panel buttons cover day-to-day use; these exist for recovering a live
// message that fell out of sync and for pulling a copy of the numbers.

use crate::core::tracker::ledger_export::export_json;
use crate::core::tracker::Actor;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Stock tracker maintenance.
#[poise::command(
    slash_command,
    guild_only,
    subcommands("refresh", "export"),
    check = "is_tracker_admin"
)]
pub async fn tracker(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Re-post or re-edit the panel and leaderboard from the current numbers.
#[poise::command(slash_command, guild_only, ephemeral, check = "is_tracker_admin")]
pub async fn refresh(ctx: Context<'_>) -> Result<(), Error> {
    ctx.defer_ephemeral().await?;
    ctx.data().tracker.refresh_all().await?;

    tracing::info!(user_id = ctx.author().id.get(), "Live messages refreshed");
    ctx.say("🔄 Panel and leaderboard refreshed.").await?;
    Ok(())
}

/// Get a JSON copy of every contribution and payment.
#[poise::command(slash_command, guild_only, ephemeral, check = "is_tracker_admin")]
pub async fn export(ctx: Context<'_>) -> Result<(), Error> {
    let ledger = ctx.data().tracker.snapshot().await;
    let json = export_json(&ledger, chrono::Utc::now())?;

    let attachment = serenity::CreateAttachment::bytes(json.into_bytes(), "ledger.json");
    ctx.send(
        poise::CreateReply::default()
            .content("📄 Current ledger")
            .attachment(attachment)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}

/// Passes only for members holding the configured admin role.
async fn is_tracker_admin(ctx: Context<'_>) -> Result<bool, Error> {
    let role_ids: Vec<u64> = ctx
        .author_member()
        .await
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    let actor = Actor::new(ctx.author().id.get(), role_ids);
    Ok(ctx.data().tracker.is_admin(&actor))
}
