//! Mutable dashboard state lent to handlers during dispatch.

use crate::navigation::cyclic::CyclicNavigator;
use crate::navigation::error::NavError;
use crate::navigation::error::ViewportError;
use crate::navigation::event::NavEvent;
use crate::navigation::focus::BackOutcome;
use crate::navigation::focus::FocusController;
use crate::navigation::menu::MenuMove;
use crate::navigation::menu::NavigationMenu;
use crate::navigation::panel::PanelId;
use crate::navigation::scroll::ScrollController;
use crate::navigation::scroll::ScrollState;
use crate::navigation::scroll::Viewport;
use crate::navigation::snapshot::DashboardSnapshot;
use crate::navigation::snapshot::MenuSnapshot;
use crate::navigation::snapshot::ViewportSnapshot;
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionApplied {
    NoChange,
    StateChanged,
}

impl ActionApplied {
    pub fn changed(self) -> bool {
        self == ActionApplied::StateChanged
    }
}

/// Panels with a structural role in the layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutRoles {
    pub navigation: Option<PanelId>,
    pub detail: Option<PanelId>,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    focus: FocusController,
    cyclic: CyclicNavigator,
    menu: NavigationMenu,
    scroll: ScrollController,
    viewports: IndexMap<PanelId, ScrollState>,
    roles: LayoutRoles,
    events: Vec<NavEvent>,
    quit_requested: bool,
}

impl Dashboard {
    pub fn new(focus: FocusController, cyclic: CyclicNavigator, roles: LayoutRoles) -> Self {
        let mut menu = NavigationMenu::new(focus.panels());
        menu.follow(focus.current_view());
        let viewports = focus
            .panels()
            .iter()
            .filter(|panel| panel.scrollable)
            .map(|panel| (panel.id.clone(), ScrollState::default()))
            .collect();
        Self {
            focus,
            cyclic,
            menu,
            scroll: ScrollController,
            viewports,
            roles,
            events: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn menu(&self) -> &NavigationMenu {
        &self.menu
    }

    pub fn current_view(&self) -> &PanelId {
        self.focus.current_view()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn viewport(&self, panel: &str) -> Option<&ScrollState> {
        self.viewports.get(panel)
    }

    /// Lets the rendering shell keep a panel's viewport in sync with the
    /// area and content it actually draws.
    pub fn viewport_mut(&mut self, panel: &str) -> Option<&mut ScrollState> {
        self.viewports.get_mut(panel)
    }

    pub fn take_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn focus_view(&mut self, name: &str, push_history: bool) -> Result<ActionApplied, NavError> {
        let from = self.focus.current_view().clone();
        self.focus.focus_view(name, push_history)?;
        Ok(self.after_focus_change(from, push_history))
    }

    pub fn next_cyclic_view(&mut self) -> Result<ActionApplied, NavError> {
        let from = self.focus.current_view().clone();
        match self.cyclic.next_cyclic_view(&mut self.focus)? {
            Some(_) => Ok(self.after_focus_change(from, true)),
            None => Ok(ActionApplied::NoChange),
        }
    }

    pub fn previous_cyclic_view(&mut self) -> Result<ActionApplied, NavError> {
        let from = self.focus.current_view().clone();
        match self.cyclic.previous_cyclic_view(&mut self.focus)? {
            Some(_) => Ok(self.after_focus_change(from, true)),
            None => Ok(ActionApplied::NoChange),
        }
    }

    /// The "back" action: previous view if any, else the default view.
    pub fn back(&mut self) -> Result<ActionApplied, NavError> {
        let from = self.focus.current_view().clone();
        let outcome = self.focus.back()?;
        self.record_back(outcome);
        Ok(self.after_focus_change(from, false))
    }

    pub fn to_navigation(&mut self) -> Result<ActionApplied, NavError> {
        let target = self.role_panel(self.roles.navigation.clone(), "to-navigation")?;
        self.focus_view(target.as_str(), true)
    }

    pub fn descend_to_detail(&mut self) -> Result<ActionApplied, NavError> {
        let target = self.role_panel(self.roles.detail.clone(), "navigation-down")?;
        self.focus_view(target.as_str(), false)
    }

    pub fn return_to_navigation(&mut self) -> Result<ActionApplied, NavError> {
        let target = self.role_panel(self.roles.navigation.clone(), "detail-up")?;
        self.focus_view(target.as_str(), false)
    }

    pub fn navigation_right(&mut self) -> ActionApplied {
        match self.menu.move_right() {
            MenuMove::Selected(_) => {
                self.record_menu_switch();
                ActionApplied::StateChanged
            }
            MenuMove::Unchanged | MenuMove::Exited(_) => ActionApplied::NoChange,
        }
    }

    pub fn navigation_left(&mut self) -> Result<ActionApplied, NavError> {
        let from = self.focus.current_view().clone();
        match self.menu.move_left(&mut self.focus)? {
            MenuMove::Selected(_) => {
                self.record_menu_switch();
                Ok(ActionApplied::StateChanged)
            }
            MenuMove::Exited(outcome) => {
                self.record_back(outcome);
                Ok(self.after_focus_change(from, false))
            }
            MenuMove::Unchanged => Ok(ActionApplied::NoChange),
        }
    }

    pub fn scroll_up(&mut self) -> Result<ActionApplied, NavError> {
        self.scroll_current(|scroll, view| scroll.scroll_up(view))
    }

    pub fn scroll_down(&mut self) -> Result<ActionApplied, NavError> {
        self.scroll_current(|scroll, view| scroll.scroll_down(view))
    }

    pub fn scroll_to_top(&mut self) -> Result<ActionApplied, NavError> {
        self.scroll_current(|scroll, view| scroll.scroll_to_top(view))
    }

    pub fn follow_tail(&mut self) -> Result<ActionApplied, NavError> {
        self.scroll_current(|scroll, view| scroll.follow_tail(view))
    }

    pub fn request_quit(&mut self) -> ActionApplied {
        if self.quit_requested {
            return ActionApplied::NoChange;
        }
        self.quit_requested = true;
        self.events.push(NavEvent::QuitRequested);
        ActionApplied::StateChanged
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            current: self.focus.current_view().clone(),
            history: self.focus.history().to_vec(),
            cyclic_order: self.cyclic.order().to_vec(),
            navigation_panel: self.roles.navigation.clone(),
            detail_panel: self.roles.detail.clone(),
            menu: MenuSnapshot {
                panel: self.menu.active_panel().cloned(),
                options: self.menu.options().to_vec(),
                index: self.menu.index(),
            },
            viewports: self
                .viewports
                .iter()
                .map(|(panel, state)| {
                    let (origin_x, origin_y) = state.origin();
                    let (_, height) = state.size();
                    (
                        panel.clone(),
                        ViewportSnapshot {
                            origin_x,
                            origin_y,
                            height,
                            content_length: state.content_length(),
                            autoscroll: state.autoscroll(),
                        },
                    )
                })
                .collect(),
            quit_requested: self.quit_requested,
        }
    }

    fn role_panel(&self, role: Option<PanelId>, action: &str) -> Result<PanelId, NavError> {
        role.ok_or_else(|| NavError::handler(action, "no panel is assigned to this role"))
    }

    fn after_focus_change(&mut self, from: PanelId, history_pushed: bool) -> ActionApplied {
        let to = self.focus.current_view().clone();
        if to == from {
            return ActionApplied::NoChange;
        }
        self.events.push(NavEvent::FocusChanged {
            from,
            to: to.clone(),
            history_pushed,
        });
        if self.menu.follow(&to) {
            self.record_menu_switch();
        }
        ActionApplied::StateChanged
    }

    fn record_back(&mut self, outcome: BackOutcome) {
        let event = match outcome {
            BackOutcome::Returned(to) => NavEvent::HistoryRestored { to },
            BackOutcome::FellBackToDefault(to) => NavEvent::FellBackToDefault { to },
        };
        self.events.push(event);
    }

    fn record_menu_switch(&mut self) {
        let Some(panel) = self.menu.active_panel().cloned() else {
            return;
        };
        self.events.push(NavEvent::MenuSwitched {
            panel,
            index: self.menu.index(),
            option: self.menu.selected().map(str::to_string),
        });
    }

    fn scroll_current<F>(&mut self, op: F) -> Result<ActionApplied, NavError>
    where
        F: FnOnce(&ScrollController, &mut ScrollState) -> Result<ActionApplied, ViewportError>,
    {
        let panel = self.focus.current_view().clone();
        let Some(view) = self.viewports.get_mut(&panel) else {
            debug!(panel = %panel, "scroll ignored on panel without viewport");
            return Ok(ActionApplied::NoChange);
        };
        let applied = op(&self.scroll, view)?;
        if applied.changed() {
            let (_, origin) = view.origin();
            self.events.push(NavEvent::Scrolled { panel, origin });
        }
        Ok(applied)
    }
}

