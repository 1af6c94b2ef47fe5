// Action handlers for the panel controls.
//
// Each handler takes the ledger, the actor and the action, applies the
// mutation, and hands back a list of effects for the caller to run. Nothing
// here talks to Discord, which keeps every rule directly testable.

use super::live_sync::SyncError;
use super::tracker_config::TrackerConfig;
use super::tracker_models::{Actor, Consumable, Ledger};
use super::valuation::{owed, CONTRIBUTION_STEP};
use thiserror::Error;

// ============================================================================
// CONTROL IDENTIFIERS
// ============================================================================

/// Every tracker control ID starts with this.
pub const CONTROL_PREFIX: &str = "tracker:";

pub const ADD_FOOD_ID: &str = "tracker:add_food";
pub const ADD_DRINK_ID: &str = "tracker:add_drink";
pub const REMOVE_FOOD_ID: &str = "tracker:remove_food";
pub const REMOVE_DRINK_ID: &str = "tracker:remove_drink";
pub const MARK_PAID_ID: &str = "tracker:mark_paid";
pub const RESET_ALL_ID: &str = "tracker:reset_all";

pub const NO_PERMISSION_REPLY: &str = "❌ No permission.";
pub const RESET_ACK_REPLY: &str = "✅ Data reset.";

// ============================================================================
// DOMAIN TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add(Consumable),
    Remove(Consumable),
    MarkPaid { user_id: u64 },
    ResetAll,
}

impl Action {
    /// Map a control's custom ID (plus any selected values) to an action.
    ///
    /// Returns `None` for controls that don't belong to the tracker, or for a
    /// mark-paid selection that doesn't carry a parseable user ID.
    pub fn from_control(custom_id: &str, selected: &[String]) -> Option<Self> {
        match custom_id {
            ADD_FOOD_ID => Some(Action::Add(Consumable::Food)),
            ADD_DRINK_ID => Some(Action::Add(Consumable::Drink)),
            REMOVE_FOOD_ID => Some(Action::Remove(Consumable::Food)),
            REMOVE_DRINK_ID => Some(Action::Remove(Consumable::Drink)),
            MARK_PAID_ID => selected
                .first()
                .and_then(|value| value.parse::<u64>().ok())
                .map(|user_id| Action::MarkPaid { user_id }),
            RESET_ALL_ID => Some(Action::ResetAll),
            _ => None,
        }
    }

    /// Adds are open to everyone; everything else needs the admin role.
    pub fn requires_admin(&self) -> bool {
        !matches!(self, Action::Add(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(Consumable::Food) => "add_food",
            Action::Add(Consumable::Drink) => "add_drink",
            Action::Remove(Consumable::Food) => "remove_food",
            Action::Remove(Consumable::Drink) => "remove_drink",
            Action::MarkPaid { .. } => "mark_paid",
            Action::ResetAll => "reset_all",
        }
    }
}

/// A line destined for the audit log channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Added {
        actor_id: u64,
        kind: Consumable,
        amount: u64,
        total: u64,
    },
    Removed {
        actor_id: u64,
        kind: Consumable,
        amount: u64,
        total: u64,
    },
    MarkedPaid {
        actor_id: u64,
        target_id: u64,
        amount: u64,
    },
    Reset {
        actor_id: u64,
    },
}

/// Side effects requested by a handler, run in order by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RefreshPanel,
    RefreshLeaderboard,
    Log(LogEntry),
}

/// What a handler produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub effects: Vec<Effect>,
    /// Private message for the actor, if any.
    pub reply: Option<&'static str>,
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Actor lacks the admin role")]
    Unauthorized,
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Run a single action against the ledger.
///
/// Unauthorized admin actions return `TrackerError::Unauthorized` before the
/// ledger is touched.
pub fn dispatch(
    ledger: &mut Ledger,
    actor: &Actor,
    action: Action,
    config: &TrackerConfig,
) -> Result<Outcome, TrackerError> {
    if action.requires_admin() && !actor.has_role(config.admin_role_id) {
        return Err(TrackerError::Unauthorized);
    }

    let outcome = match action {
        Action::Add(kind) => add(ledger, actor, kind),
        Action::Remove(kind) => remove(ledger, actor, kind),
        Action::MarkPaid { user_id } => mark_paid(ledger, actor, user_id),
        Action::ResetAll => reset_all(ledger, actor),
    };

    Ok(outcome)
}

fn add(ledger: &mut Ledger, actor: &Actor, kind: Consumable) -> Outcome {
    let total = ledger.add(actor.user_id, kind, CONTRIBUTION_STEP);

    Outcome {
        effects: vec![
            Effect::RefreshPanel,
            Effect::RefreshLeaderboard,
            Effect::Log(LogEntry::Added {
                actor_id: actor.user_id,
                kind,
                amount: CONTRIBUTION_STEP,
                total,
            }),
        ],
        reply: None,
    }
}

// Only the global total moves here and only the panel is refreshed.
fn remove(ledger: &mut Ledger, actor: &Actor, kind: Consumable) -> Outcome {
    let total = ledger.remove_from_total(kind, CONTRIBUTION_STEP);

    Outcome {
        effects: vec![
            Effect::RefreshPanel,
            Effect::Log(LogEntry::Removed {
                actor_id: actor.user_id,
                kind,
                amount: CONTRIBUTION_STEP,
                total,
            }),
        ],
        reply: None,
    }
}

// Accumulates: pressing it twice with no new contributions pays twice.
fn mark_paid(ledger: &mut Ledger, actor: &Actor, user_id: u64) -> Outcome {
    let Some(amount) = ledger.record(user_id).map(|r| owed(r.food, r.drink)) else {
        return Outcome::default();
    };
    ledger.credit_paid(user_id, amount);

    Outcome {
        effects: vec![
            Effect::RefreshLeaderboard,
            Effect::Log(LogEntry::MarkedPaid {
                actor_id: actor.user_id,
                target_id: user_id,
                amount,
            }),
        ],
        reply: None,
    }
}

fn reset_all(ledger: &mut Ledger, actor: &Actor) -> Outcome {
    ledger.clear();

    Outcome {
        effects: vec![
            Effect::RefreshPanel,
            Effect::RefreshLeaderboard,
            Effect::Log(LogEntry::Reset {
                actor_id: actor.user_id,
            }),
        ],
        reply: Some(RESET_ACK_REPLY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::tracker_models::ContributionRecord;

    const ADMIN_ROLE: u64 = 900;

    fn config() -> TrackerConfig {
        TrackerConfig {
            panel_channel_id: 1,
            leaderboard_channel_id: 2,
            log_channel_id: 3,
            admin_role_id: ADMIN_ROLE,
        }
    }

    fn admin(user_id: u64) -> Actor {
        Actor::new(user_id, vec![5, ADMIN_ROLE])
    }

    fn member(user_id: u64) -> Actor {
        Actor::new(user_id, vec![5])
    }

    #[test]
    fn test_from_control() {
        assert_eq!(
            Action::from_control(ADD_FOOD_ID, &[]),
            Some(Action::Add(Consumable::Food))
        );
        assert_eq!(
            Action::from_control(REMOVE_DRINK_ID, &[]),
            Some(Action::Remove(Consumable::Drink))
        );
        assert_eq!(
            Action::from_control(MARK_PAID_ID, &["42".to_string()]),
            Some(Action::MarkPaid { user_id: 42 })
        );
        assert_eq!(Action::from_control(MARK_PAID_ID, &[]), None);
        assert_eq!(
            Action::from_control(MARK_PAID_ID, &["not-a-user".to_string()]),
            None
        );
        assert_eq!(Action::from_control("prev", &[]), None);
    }

    #[test]
    fn test_control_ids_share_prefix() {
        for id in [
            ADD_FOOD_ID,
            ADD_DRINK_ID,
            REMOVE_FOOD_ID,
            REMOVE_DRINK_ID,
            MARK_PAID_ID,
            RESET_ALL_ID,
        ] {
            assert!(id.starts_with(CONTROL_PREFIX));
        }
    }

    #[test]
    fn test_add_food_only_touches_actor_food() {
        let mut ledger = Ledger::new();
        ledger.add(2, Consumable::Drink, 50);
        ledger.credit_paid(2, 100_000);
        let other_before = *ledger.record(2).unwrap();

        let outcome = dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config())
            .unwrap();

        assert_eq!(
            ledger.record(1),
            Some(&ContributionRecord {
                food: 50,
                drink: 0,
                paid: 0
            })
        );
        assert_eq!(ledger.total(Consumable::Food), 50);
        assert_eq!(ledger.record(2), Some(&other_before));
        assert_eq!(
            outcome.effects,
            vec![
                Effect::RefreshPanel,
                Effect::RefreshLeaderboard,
                Effect::Log(LogEntry::Added {
                    actor_id: 1,
                    kind: Consumable::Food,
                    amount: 50,
                    total: 50,
                }),
            ]
        );
        assert_eq!(outcome.reply, None);
    }

    #[test]
    fn test_add_drink_keeps_existing_food() {
        let mut ledger = Ledger::new();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config()).unwrap();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Drink), &config()).unwrap();

        let record = ledger.record(1).unwrap();
        assert_eq!((record.food, record.drink), (50, 50));
        assert_eq!(ledger.total(Consumable::Drink), 50);
    }

    #[test]
    fn test_remove_never_goes_below_zero() {
        let mut ledger = Ledger::new();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config()).unwrap();

        for _ in 0..5 {
            dispatch(&mut ledger, &admin(9), Action::Remove(Consumable::Food), &config())
                .unwrap();
        }

        assert_eq!(ledger.total(Consumable::Food), 0);
        // the contributor's own record is left alone
        assert_eq!(ledger.record(1).map(|r| r.food), Some(50));
    }

    #[test]
    fn test_remove_refreshes_panel_only() {
        let mut ledger = Ledger::new();
        let outcome =
            dispatch(&mut ledger, &admin(9), Action::Remove(Consumable::Drink), &config())
                .unwrap();

        assert_eq!(outcome.effects[0], Effect::RefreshPanel);
        assert!(!outcome.effects.contains(&Effect::RefreshLeaderboard));
    }

    #[test]
    fn test_mark_paid_accumulates() {
        let mut ledger = Ledger::new();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config()).unwrap();

        let action = Action::MarkPaid { user_id: 1 };
        let outcome = dispatch(&mut ledger, &admin(9), action, &config()).unwrap();
        assert_eq!(ledger.record(1).map(|r| r.paid), Some(100_000));
        assert_eq!(
            outcome.effects,
            vec![
                Effect::RefreshLeaderboard,
                Effect::Log(LogEntry::MarkedPaid {
                    actor_id: 9,
                    target_id: 1,
                    amount: 100_000,
                }),
            ]
        );

        dispatch(&mut ledger, &admin(9), action, &config()).unwrap();
        assert_eq!(ledger.record(1).map(|r| r.paid), Some(200_000));
    }

    #[test]
    fn test_mark_paid_unknown_user_is_a_no_op() {
        let mut ledger = Ledger::new();
        let outcome =
            dispatch(&mut ledger, &admin(9), Action::MarkPaid { user_id: 3 }, &config()).unwrap();

        assert_eq!(outcome, Outcome::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_reset_all_clears_and_acknowledges() {
        let mut ledger = Ledger::new();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config()).unwrap();
        dispatch(&mut ledger, &member(2), Action::Add(Consumable::Drink), &config()).unwrap();

        let outcome = dispatch(&mut ledger, &admin(9), Action::ResetAll, &config()).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(ledger.total(Consumable::Food), 0);
        assert_eq!(ledger.total(Consumable::Drink), 0);
        assert_eq!(outcome.reply, Some(RESET_ACK_REPLY));
        assert!(outcome
            .effects
            .contains(&Effect::Log(LogEntry::Reset { actor_id: 9 })));
    }

    #[test]
    fn test_non_admin_cannot_run_admin_actions() {
        let mut ledger = Ledger::new();
        dispatch(&mut ledger, &member(1), Action::Add(Consumable::Food), &config()).unwrap();
        let before = ledger.clone();

        for action in [
            Action::Remove(Consumable::Food),
            Action::Remove(Consumable::Drink),
            Action::MarkPaid { user_id: 1 },
            Action::ResetAll,
        ] {
            let result = dispatch(&mut ledger, &member(1), action, &config());
            assert!(matches!(result, Err(TrackerError::Unauthorized)));
            assert_eq!(ledger, before);
        }
    }
}
