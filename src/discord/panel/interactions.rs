// Routes panel button/select presses to the tracker.
//
// Same pattern as the commands: pull primitives out of the interaction, call
// the core, then answer the interaction.

use crate::core::tracker::tracker_actions::CONTROL_PREFIX;
use crate::core::tracker::{Action, Actor};
use crate::discord::{Data, Error};
use poise::serenity_prelude as serenity;

pub async fn handle_component(
    ctx: &serenity::Context,
    data: &Data,
    component: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    let custom_id = component.data.custom_id.as_str();
    if !custom_id.starts_with(CONTROL_PREFIX) || component.user.bot {
        return Ok(());
    }

    let selected: &[String] = match &component.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => values,
        _ => &[],
    };

    let Some(action) = Action::from_control(custom_id, selected) else {
        tracing::warn!(custom_id, ?selected, "Unrecognised tracker control");
        component.defer(ctx).await?;
        return Ok(());
    };

    let actor = actor_from_component(component);
    let reply = data.tracker.handle(&actor, action).await?;

    match reply {
        Some(text) => {
            component
                .create_response(
                    ctx,
                    serenity::CreateInteractionResponse::Message(
                        serenity::CreateInteractionResponseMessage::new()
                            .content(text)
                            .ephemeral(true),
                    ),
                )
                .await?
        }
        None => component.defer(ctx).await?,
    }

    Ok(())
}

fn actor_from_component(component: &serenity::ComponentInteraction) -> Actor {
    let role_ids: Vec<u64> = component
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    Actor::new(component.user.id.get(), role_ids)
}
