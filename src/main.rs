// This is the entry point of the stock tracker bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Environment-facing implementations (configuration)
// - `discord/` = Discord-specific adapters (panel, commands, events)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands and event handlers

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with a handful of mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

use crate::core::tracker::tracker_actions::NO_PERMISSION_REPLY;
use crate::core::tracker::TrackerController;
use crate::discord::commands::presence;
use crate::discord::panel::{handle_component, SerenitySync};
use crate::discord::{Data, Error};
use crate::infra::tracker::{token_from_env, tracker_config_from_env};
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Event handler for non-command Discord events.
/// Panel button and select presses arrive here as component interactions.
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::InteractionCreate {
        interaction: serenity::Interaction::Component(component),
    } = event
    {
        if let Err(e) = handle_component(ctx, data, component).await {
            // The ledger change (if any) stays applied; the next successful
            // refresh brings the live messages back in line.
            tracing::error!(
                user_id = component.user.id.get(),
                custom_id = %component.data.custom_id,
                "Error handling panel interaction: {}",
                e
            );
        }
    }

    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::CommandCheckFailed { ctx, .. } => {
            let reply = poise::CreateReply::default()
                .content(NO_PERMISSION_REPLY)
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::warn!("Failed to send permission denial: {}", e);
            }
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(command = %ctx.command().name, "Command failed: {}", error);
            let reply = poise::CreateReply::default()
                .content("Something went wrong, check the bot logs.")
                .ephemeral(true);
            let _ = ctx.send(reply).await;
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let token = token_from_env().context("Create a .env file with your bot token")?;
    let config = tracker_config_from_env().context("Invalid tracker configuration")?;

    tracing::info!(
        panel_channel_id = config.panel_channel_id,
        leaderboard_channel_id = config.leaderboard_channel_id,
        log_channel_id = config.log_channel_id,
        admin_role_id = config.admin_role_id,
        "Loaded tracker configuration"
    );

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================
    // GUILD_MEMBERS keeps the user cache warm for leaderboard display names.

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![discord::commands::tracker::tracker()],
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!(bot = %ready.user.name, "Bot is starting up");

                poise::builtins::register_globally(ctx, &framework.options().commands).await?;

                // This is the composition root: the controller owns all tracker
                // state and talks to Discord through the sync adapter.
                let sync = SerenitySync::new(ctx.http.clone(), ctx.cache.clone());
                let tracker = Arc::new(TrackerController::new(config, sync));

                presence::on_ready(ctx);

                // Post (or re-post) both live messages straight away.
                if let Err(e) = tracker.refresh_all().await {
                    tracing::error!("Failed to render live messages on startup: {}", e);
                }

                tracing::info!("Bot is ready");
                Ok(Data { tracker })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
