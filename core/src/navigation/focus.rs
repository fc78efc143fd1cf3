use crate::navigation::error::NavError;
use crate::navigation::panel::PanelId;
use crate::navigation::panel::PanelSet;
use tracing::debug;

pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Result of the "back" transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackOutcome {
    Returned(PanelId),
    FellBackToDefault(PanelId),
}

/// Owns the focused panel and the back-navigation stack.
///
/// The top of `history` is never the current panel: pushing the panel onto
/// itself is skipped and a non-pushing focus onto the top entry consumes it.
#[derive(Debug, Clone)]
pub struct FocusController {
    panels: PanelSet,
    current: PanelId,
    history: Vec<PanelId>,
    history_limit: usize,
    default_view: PanelId,
}

impl FocusController {
    pub fn new(panels: PanelSet, initial: &str) -> Result<Self, NavError> {
        let current = panels.resolve(initial)?.clone();
        Ok(Self {
            panels,
            default_view: current.clone(),
            current,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        })
    }

    /// Panel the "back" action lands on when history is empty. Defaults to
    /// the initial panel.
    pub fn with_default_view(mut self, name: &str) -> Result<Self, NavError> {
        self.default_view = self.panels.resolve(name)?.clone();
        Ok(self)
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn current_view(&self) -> &PanelId {
        &self.current
    }

    pub fn history(&self) -> &[PanelId] {
        &self.history
    }

    pub fn has_previous_view(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn focus_view(&mut self, name: &str, push_history: bool) -> Result<(), NavError> {
        let target = self.panels.resolve(name)?.clone();
        debug!(from = %self.current, to = %target, push_history, "focus view");
        if push_history {
            if target != self.current {
                let previous = std::mem::replace(&mut self.current, target);
                self.history.push(previous);
                if self.history.len() > self.history_limit {
                    let excess = self.history.len() - self.history_limit;
                    self.history.drain(0..excess);
                }
            }
        } else {
            self.current = target;
            if self.history.last() == Some(&self.current) {
                self.history.pop();
            }
        }
        Ok(())
    }

    pub fn return_previous_view(&mut self) -> Result<(), NavError> {
        let previous = self.history.pop().ok_or(NavError::EmptyHistory)?;
        debug!(from = %self.current, to = %previous, "return to previous view");
        self.current = previous;
        Ok(())
    }

    /// Returns to the previous view, or focuses the default view without
    /// touching history when there is nothing to return to.
    pub fn back(&mut self) -> Result<BackOutcome, NavError> {
        match self.return_previous_view() {
            Ok(()) => Ok(BackOutcome::Returned(self.current.clone())),
            Err(NavError::EmptyHistory) => {
                let fallback = self.default_view.clone();
                self.focus_view(fallback.as_str(), false)?;
                Ok(BackOutcome::FellBackToDefault(fallback))
            }
            Err(err) => Err(err),
        }
    }
}
