//! Focus and navigation state machine for the dashboard.
//!
//! Input arrives as [`KeyChord`] values. The [`Navigator`] resolves each chord
//! through the two-tier [`ActionRegistry`] (focused panel first, then global
//! bindings) and runs the bound [`Handler`] against the [`Dashboard`], which
//! owns focus history, the cyclic panel ring, the navigation sub-menu and the
//! per-panel scroll state. Renderers read the resulting
//! [`DashboardSnapshot`] and drain [`NavEvent`]s; nothing in here performs
//! I/O.

mod action;
mod cyclic;
mod error;
mod event;
mod focus;
mod key;
mod menu;
mod navigator;
mod panel;
mod registry;
mod scroll;
mod snapshot;
mod state;

pub use action::Action;
pub use action::BuiltinAction;
pub use action::Handler;
pub use cyclic::CyclicNavigator;
pub use error::NavError;
pub use error::ViewportError;
pub use event::NavEvent;
pub use focus::BackOutcome;
pub use focus::DEFAULT_HISTORY_LIMIT;
pub use focus::FocusController;
pub use key::Key;
pub use key::KeyChord;
pub use key::KeyParseError;
pub use key::Modifier;
pub use menu::MenuMove;
pub use menu::NavigationMenu;
pub use navigator::DispatchOutcome;
pub use navigator::Navigator;
pub use panel::Panel;
pub use panel::PanelId;
pub use panel::PanelSet;
pub use registry::ActionRegistry;
pub use registry::Scope;
pub use scroll::SCROLL_STEP;
pub use scroll::ScrollController;
pub use scroll::ScrollState;
pub use scroll::Viewport;
pub use snapshot::DashboardSnapshot;
pub use snapshot::MenuSnapshot;
pub use snapshot::ViewportSnapshot;
pub use state::ActionApplied;
pub use state::Dashboard;
pub use state::LayoutRoles;

#[cfg(test)]
mod tests;
