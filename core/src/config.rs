//! Startup configuration: the panel table, the cyclic order and the key
//! bindings. Everything is validated in [`NavigationConfig::build`], so a
//! broken table is rejected before the event loop accepts any input.

use crate::navigation::Action;
use crate::navigation::ActionRegistry;
use crate::navigation::BuiltinAction;
use crate::navigation::CyclicNavigator;
use crate::navigation::Dashboard;
use crate::navigation::FocusController;
use crate::navigation::Key;
use crate::navigation::LayoutRoles;
use crate::navigation::Modifier;
use crate::navigation::NavError;
use crate::navigation::Navigator;
use crate::navigation::Panel;
use crate::navigation::PanelId;
use crate::navigation::PanelSet;
use crate::navigation::DEFAULT_HISTORY_LIMIT;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<String>,
    #[serde(default)]
    pub scrollable: bool,
}

impl PanelConfig {
    fn new(name: &str, menu: &[&str], scrollable: bool) -> Self {
        Self {
            name: name.to_string(),
            menu: menu.iter().map(ToString::to_string).collect(),
            scrollable,
        }
    }

    fn to_panel(&self) -> Panel {
        let panel = Panel::new(self.name.as_str()).with_menu(self.menu.iter().cloned());
        if self.scrollable {
            panel.scrollable()
        } else {
            panel
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    /// Diagnostic name; defaults to the handler name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub keys: Vec<Key>,
    #[serde(default)]
    pub modifier: Modifier,
    pub handler: BuiltinAction,
}

impl ActionConfig {
    fn new(handler: BuiltinAction, keys: &[Key]) -> Self {
        Self {
            name: None,
            keys: keys.to_vec(),
            modifier: Modifier::None,
            handler,
        }
    }

    fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }

    fn to_action(&self) -> Action {
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| self.handler.to_string());
        Action::new(
            name,
            self.keys.iter().copied(),
            self.modifier,
            self.handler.handler(),
        )
    }
}

/// Static description of the dashboard. Fields omitted from a config file
/// keep their stock values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub initial_panel: String,
    /// Target of the back action when there is no history.
    pub default_panel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_panel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_panel: Option<String>,
    pub history_limit: usize,
    pub cyclic: Vec<String>,
    pub panels: Vec<PanelConfig>,
    pub global_actions: Vec<ActionConfig>,
    pub panel_actions: IndexMap<String, Vec<ActionConfig>>,
}

const CLUSTER_INFO: &str = "cluster-info";
const NAMESPACE: &str = "namespace";
const SERVICE: &str = "service";
const DEPLOYMENT: &str = "deployment";
const POD: &str = "pod";
const NAVIGATION: &str = "navigation";
const DETAIL: &str = "detail";

impl Default for NavigationConfig {
    fn default() -> Self {
        use BuiltinAction::*;

        let cyclic = [CLUSTER_INFO, NAMESPACE, SERVICE, DEPLOYMENT, POD];
        let mut panel_actions = IndexMap::new();
        for panel in cyclic {
            panel_actions.insert(
                panel.to_string(),
                vec![
                    ActionConfig::new(ToNavigation, &[Key::Enter, Key::Right]),
                    ActionConfig::new(NextCyclicView, &[Key::Tab, Key::Down]),
                    ActionConfig::new(PreviousCyclicView, &[Key::Up, Key::BackTab]),
                ],
            );
        }
        panel_actions.insert(
            NAVIGATION.to_string(),
            vec![
                ActionConfig::new(NavigationLeft, &[Key::Left]),
                ActionConfig::new(NavigationRight, &[Key::Right]),
                ActionConfig::new(NavigationDown, &[Key::Down]),
            ],
        );
        panel_actions.insert(
            DETAIL.to_string(),
            vec![ActionConfig::new(DetailUp, &[Key::Up])],
        );

        Self {
            initial_panel: CLUSTER_INFO.to_string(),
            default_panel: NAMESPACE.to_string(),
            navigation_panel: Some(NAVIGATION.to_string()),
            detail_panel: Some(DETAIL.to_string()),
            history_limit: DEFAULT_HISTORY_LIMIT,
            cyclic: cyclic.iter().map(ToString::to_string).collect(),
            panels: vec![
                PanelConfig::new(CLUSTER_INFO, &["Nodes", "Top Nodes"], true),
                PanelConfig::new(NAMESPACE, &["Config", "Deployments", "Pods"], true),
                PanelConfig::new(SERVICE, &["Config", "Pods", "Pods Log", "Top Pods"], true),
                PanelConfig::new(
                    DEPLOYMENT,
                    &["Config", "Pods", "Describe", "Top Pods"],
                    true,
                ),
                PanelConfig::new(POD, &["Log", "Config", "Top", "Describe"], true),
                PanelConfig::new(NAVIGATION, &[], false),
                PanelConfig::new(DETAIL, &[], true),
            ],
            global_actions: vec![
                ActionConfig::new(BackToPreviousView, &[Key::Esc]),
                ActionConfig::new(ScrollUp, &[Key::PageUp]),
                ActionConfig::new(ScrollDown, &[Key::PageDown]),
                ActionConfig::new(ScrollToTop, &[Key::Home]),
                ActionConfig::new(FollowTail, &[Key::End]),
                ActionConfig::new(Quit, &[Key::Char('c')]).with_modifier(Modifier::Ctrl),
                ActionConfig {
                    name: Some("quit-key".to_string()),
                    ..ActionConfig::new(Quit, &[Key::Char('q')])
                },
            ],
            panel_actions,
        }
    }
}

impl NavigationConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validates the table and assembles a ready-to-run [`Navigator`].
    pub fn build(&self) -> Result<Navigator, NavError> {
        let mut panels = PanelSet::new(self.panels.iter().map(PanelConfig::to_panel))?;
        let order: Vec<&str> = self.cyclic.iter().map(String::as_str).collect();
        let cyclic = CyclicNavigator::new(&panels, &order)?;
        panels.mark_cyclic(cyclic.order());

        let roles = LayoutRoles {
            navigation: resolve_role(&panels, self.navigation_panel.as_deref())?,
            detail: resolve_role(&panels, self.detail_panel.as_deref())?,
        };
        let focus = FocusController::new(panels.clone(), &self.initial_panel)?
            .with_default_view(&self.default_panel)?
            .with_history_limit(self.history_limit);

        let mut registry = ActionRegistry::new(panels);
        for action in &self.global_actions {
            registry.register_global(action.to_action())?;
        }
        for (panel, actions) in &self.panel_actions {
            for action in actions {
                registry.register_panel(panel, action.to_action())?;
            }
        }

        info!(
            panels = self.panels.len(),
            cyclic = self.cyclic.len(),
            initial = %self.initial_panel,
            "navigation table loaded"
        );
        Ok(Navigator::new(Dashboard::new(focus, cyclic, roles), registry))
    }
}

fn resolve_role(panels: &PanelSet, name: Option<&str>) -> Result<Option<PanelId>, NavError> {
    name.map(|name| panels.resolve(name).cloned()).transpose()
}
