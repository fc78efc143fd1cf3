use crate::navigation::error::NavError;
use crate::navigation::event::NavEvent;
use crate::navigation::key::KeyChord;
use crate::navigation::registry::ActionRegistry;
use crate::navigation::snapshot::DashboardSnapshot;
use crate::navigation::state::ActionApplied;
use crate::navigation::state::Dashboard;
use tracing::debug;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    Consumed {
        action: String,
        applied: ActionApplied,
    },
    Failed {
        action: String,
        error: NavError,
    },
    Unhandled,
}

/// Routes key chords to the handler bound for the focused panel and runs it
/// against the dashboard state.
#[derive(Debug, Clone)]
pub struct Navigator {
    dashboard: Dashboard,
    registry: ActionRegistry,
}

impl Navigator {
    pub fn new(dashboard: Dashboard, registry: ActionRegistry) -> Self {
        Self {
            dashboard,
            registry,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.dashboard.snapshot()
    }

    pub fn take_events(&mut self) -> Vec<NavEvent> {
        self.dashboard.take_events()
    }

    pub fn handle_key(&mut self, chord: KeyChord) -> DispatchOutcome {
        let current = self.dashboard.current_view().clone();
        match self.dispatch(current.as_str(), chord) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(panel = %current, %error, "dispatch failed");
                DispatchOutcome::Failed {
                    action: String::from("dispatch"),
                    error,
                }
            }
        }
    }

    /// Runs the handler bound to `chord` as seen from `panel`. Fails with
    /// `UnknownPanel` without touching any state when `panel` is not
    /// registered.
    pub fn dispatch(&mut self, panel: &str, chord: KeyChord) -> Result<DispatchOutcome, NavError> {
        let Some(action) = self.registry.dispatch(panel, chord)? else {
            debug!(panel, %chord, "no binding");
            return Ok(DispatchOutcome::Unhandled);
        };
        let name = action.name.clone();
        let handler = action.handler().clone();
        debug!(panel, %chord, action = %name, "dispatch");
        let outcome = match handler.call(&mut self.dashboard, chord) {
            Ok(applied) => DispatchOutcome::Consumed {
                action: name,
                applied,
            },
            Err(error) => {
                warn!(action = %name, %error, "handler failed");
                DispatchOutcome::Failed {
                    action: name,
                    error,
                }
            }
        };
        Ok(outcome)
    }
}
