// Builds the action rows shown under the panel message.

use crate::core::tracker::tracker_actions::{
    ADD_DRINK_ID, ADD_FOOD_ID, MARK_PAID_ID, REMOVE_DRINK_ID, REMOVE_FOOD_ID, RESET_ALL_ID,
};
use crate::core::tracker::PanelControls;
use poise::serenity_prelude as serenity;

/// Contribution buttons, the optional "Mark user as Paid" list, then reset.
/// Select menus need a row to themselves, hence three rows.
pub fn build_components(controls: &PanelControls) -> Vec<serenity::CreateActionRow> {
    let mut rows = vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(ADD_FOOD_ID)
            .label("Add 50 Food")
            .style(serenity::ButtonStyle::Success),
        serenity::CreateButton::new(ADD_DRINK_ID)
            .label("Add 50 Drink")
            .style(serenity::ButtonStyle::Primary),
        serenity::CreateButton::new(REMOVE_FOOD_ID)
            .label("Remove 50 Food")
            .style(serenity::ButtonStyle::Danger),
        serenity::CreateButton::new(REMOVE_DRINK_ID)
            .label("Remove 50 Drink")
            .style(serenity::ButtonStyle::Danger),
    ])];

    if controls.has_mark_paid() {
        let options = controls
            .mark_paid_options
            .iter()
            .map(|option| {
                serenity::CreateSelectMenuOption::new(
                    option.label.clone(),
                    option.user_id.to_string(),
                )
            })
            .collect();

        rows.push(serenity::CreateActionRow::SelectMenu(
            serenity::CreateSelectMenu::new(
                MARK_PAID_ID,
                serenity::CreateSelectMenuKind::String { options },
            )
            .placeholder("Mark user as Paid"),
        ));
    }

    rows.push(serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(RESET_ALL_ID)
            .label("Reset All Data")
            .style(serenity::ButtonStyle::Secondary),
    ]));

    rows
}
