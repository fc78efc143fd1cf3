use crate::navigation::error::NavError;
use crate::navigation::key::Key;
use crate::navigation::key::KeyChord;
use crate::navigation::key::Modifier;
use crate::navigation::state::ActionApplied;
use crate::navigation::state::Dashboard;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

type HandlerFn = dyn Fn(&mut Dashboard, KeyChord) -> Result<ActionApplied, NavError> + Send + Sync;

/// Opaque callable bound to an [`Action`] at registration time. Handlers get
/// the dashboard state by reference and never capture it.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut Dashboard, KeyChord) -> Result<ActionApplied, NavError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, dashboard: &mut Dashboard, chord: KeyChord) -> Result<ActionApplied, NavError> {
        (self.0)(dashboard, chord)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Named binding of one or more keys (sharing a modifier) to a handler.
#[derive(Debug, Clone)]
pub struct Action {
    pub name: String,
    pub keys: Vec<Key>,
    pub modifier: Modifier,
    handler: Handler,
}

impl Action {
    pub fn new(
        name: impl Into<String>,
        keys: impl IntoIterator<Item = Key>,
        modifier: Modifier,
        handler: Handler,
    ) -> Self {
        Self {
            name: name.into(),
            keys: keys.into_iter().collect(),
            modifier,
            handler,
        }
    }

    pub fn builtin(
        builtin: BuiltinAction,
        keys: impl IntoIterator<Item = Key>,
        modifier: Modifier,
    ) -> Self {
        Self::new(builtin.to_string(), keys, modifier, builtin.handler())
    }

    pub fn chords(&self) -> impl Iterator<Item = KeyChord> + '_ {
        self.keys
            .iter()
            .map(|key| KeyChord::new(*key, self.modifier))
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// Handlers shipped with the dashboard, addressable by name from
/// configuration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinAction {
    NextCyclicView,
    PreviousCyclicView,
    BackToPreviousView,
    ToNavigation,
    NavigationLeft,
    NavigationRight,
    NavigationDown,
    DetailUp,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    FollowTail,
    Quit,
}

impl BuiltinAction {
    pub fn handler(self) -> Handler {
        Handler::new(move |dashboard, _chord| match self {
            BuiltinAction::NextCyclicView => dashboard.next_cyclic_view(),
            BuiltinAction::PreviousCyclicView => dashboard.previous_cyclic_view(),
            BuiltinAction::BackToPreviousView => dashboard.back(),
            BuiltinAction::ToNavigation => dashboard.to_navigation(),
            BuiltinAction::NavigationLeft => dashboard.navigation_left(),
            BuiltinAction::NavigationRight => Ok(dashboard.navigation_right()),
            BuiltinAction::NavigationDown => dashboard.descend_to_detail(),
            BuiltinAction::DetailUp => dashboard.return_to_navigation(),
            BuiltinAction::ScrollUp => dashboard.scroll_up(),
            BuiltinAction::ScrollDown => dashboard.scroll_down(),
            BuiltinAction::ScrollToTop => dashboard.scroll_to_top(),
            BuiltinAction::FollowTail => dashboard.follow_tail(),
            BuiltinAction::Quit => Ok(dashboard.request_quit()),
        })
    }
}
