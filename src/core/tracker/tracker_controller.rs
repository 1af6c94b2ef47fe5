// The single owner of all tracker state.
//
// Every interaction locks the state for its whole duration, including the
// outbound sends, so events are applied and displayed one at a time.

use super::live_sync::{DisplayState, LiveSync, PanelControls};
use super::presentation::{render_leaderboard, render_ledger_stock, render_log_line};
use super::tracker_actions::{dispatch, Action, Effect, TrackerError, NO_PERMISSION_REPLY};
use super::tracker_config::TrackerConfig;
use super::tracker_models::{Actor, Ledger};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct ControllerState {
    ledger: Ledger,
    display: DisplayState,
}

pub struct TrackerController<S: LiveSync> {
    config: TrackerConfig,
    sync: S,
    state: Mutex<ControllerState>,
}

impl<S: LiveSync> TrackerController<S> {
    pub fn new(config: TrackerConfig, sync: S) -> Self {
        Self {
            config,
            sync,
            state: Mutex::new(ControllerState::default()),
        }
    }

    pub fn is_admin(&self, actor: &Actor) -> bool {
        actor.has_role(self.config.admin_role_id)
    }

    /// Apply one user action and run its effects.
    ///
    /// Returns the private reply for the actor, if there is one. A denied
    /// admin action comes back as the "no permission" reply with nothing
    /// mutated or logged. If a send fails the ledger change stays applied and
    /// the remaining effects are skipped.
    pub async fn handle(
        &self,
        actor: &Actor,
        action: Action,
    ) -> Result<Option<&'static str>, TrackerError> {
        let mut state = self.state.lock().await;

        let outcome = match dispatch(&mut state.ledger, actor, action, &self.config) {
            Ok(outcome) => outcome,
            Err(TrackerError::Unauthorized) => {
                tracing::warn!(
                    user_id = actor.user_id,
                    action = action.name(),
                    "Denied tracker action"
                );
                return Ok(Some(NO_PERMISSION_REPLY));
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            user_id = actor.user_id,
            action = action.name(),
            effects = outcome.effects.len(),
            "Applied tracker action"
        );

        for effect in &outcome.effects {
            self.run_effect(&mut state, effect).await?;
        }

        Ok(outcome.reply)
    }

    /// Re-render both live messages from the current ledger.
    pub async fn refresh_all(&self) -> Result<(), TrackerError> {
        let mut state = self.state.lock().await;
        self.run_effect(&mut state, &Effect::RefreshPanel).await?;
        self.run_effect(&mut state, &Effect::RefreshLeaderboard).await
    }

    /// A copy of the ledger as it is right now.
    pub async fn snapshot(&self) -> Ledger {
        self.state.lock().await.ledger.clone()
    }

    #[allow(dead_code)]
    pub async fn display_state(&self) -> DisplayState {
        self.state.lock().await.display
    }

    async fn run_effect(
        &self,
        state: &mut ControllerState,
        effect: &Effect,
    ) -> Result<(), TrackerError> {
        let resolve = |user_id| self.sync.display_name(user_id);

        match effect {
            Effect::RefreshPanel => {
                let content = render_ledger_stock(&state.ledger);
                let controls = PanelControls::for_ledger(&state.ledger, resolve);
                let handle = self
                    .sync
                    .send_or_update_message(
                        self.config.panel_channel_id,
                        state.display.panel,
                        content,
                        Some(controls),
                    )
                    .await?;
                state.display.panel = Some(handle);
            }
            Effect::RefreshLeaderboard => {
                let content = render_leaderboard(&state.ledger, resolve);
                let handle = self
                    .sync
                    .send_or_update_message(
                        self.config.leaderboard_channel_id,
                        state.display.leaderboard,
                        content,
                        None,
                    )
                    .await?;
                state.display.leaderboard = Some(handle);
            }
            Effect::Log(entry) => {
                self.sync
                    .append_log_line(self.config.log_channel_id, render_log_line(entry))
                    .await?;
            }
        }

        Ok(())
    }
}
