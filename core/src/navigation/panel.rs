use crate::navigation::error::NavError;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;

/// Stable name of a focusable panel, e.g. `"namespace"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PanelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: PanelId,
    /// Member of the Tab/Up/Down traversal ring.
    pub cyclic: bool,
    /// Sub-menu options shown in the navigation bar while this panel is the
    /// menu's active panel. Empty when the panel has no menu variant.
    pub menu: Vec<String>,
    pub scrollable: bool,
}

impl Panel {
    pub fn new(id: impl Into<PanelId>) -> Self {
        Self {
            id: id.into(),
            cyclic: false,
            menu: Vec::new(),
            scrollable: false,
        }
    }

    pub fn with_menu<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    pub fn has_menu(&self) -> bool {
        !self.menu.is_empty()
    }
}

/// Immutable, insertion-ordered set of every panel known to the dashboard.
#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    panels: IndexMap<PanelId, Panel>,
}

impl PanelSet {
    pub fn new<I>(panels: I) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = Panel>,
    {
        let mut set = IndexMap::new();
        for panel in panels {
            if set.contains_key(&panel.id) {
                return Err(NavError::InvalidConfig(format!(
                    "panel '{}' is declared twice",
                    panel.id
                )));
            }
            set.insert(panel.id.clone(), panel);
        }
        if set.is_empty() {
            return Err(NavError::InvalidConfig(
                "at least one panel must be declared".to_string(),
            ));
        }
        Ok(Self { panels: set })
    }

    pub fn get(&self, name: &str) -> Option<&Panel> {
        self.panels.get(name)
    }

    /// Resolves `name` to its registered id or fails with `UnknownPanel`.
    pub fn resolve(&self, name: &str) -> Result<&PanelId, NavError> {
        self.panels
            .get_key_value(name)
            .map(|(id, _)| id)
            .ok_or_else(|| NavError::UnknownPanel(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.values()
    }

    pub(crate) fn mark_cyclic(&mut self, order: &[PanelId]) {
        for panel in self.panels.values_mut() {
            panel.cyclic = order.contains(&panel.id);
        }
    }
}
