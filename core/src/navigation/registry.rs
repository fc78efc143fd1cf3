use crate::navigation::action::Action;
use crate::navigation::error::NavError;
use crate::navigation::key::KeyChord;
use crate::navigation::panel::PanelId;
use crate::navigation::panel::PanelSet;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Global,
    Panel(PanelId),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Panel(panel) => write!(f, "{panel}"),
        }
    }
}

#[derive(Debug, Default, Clone)]
struct Tier {
    actions: Vec<Action>,
    index: HashMap<KeyChord, usize>,
}

impl Tier {
    fn insert(&mut self, scope: &Scope, action: Action) -> Result<(), NavError> {
        let mut chords: Vec<KeyChord> = Vec::new();
        for chord in action.chords() {
            if let Some(existing) = self.index.get(&chord) {
                return Err(NavError::DuplicateBinding {
                    scope: scope.to_string(),
                    chord,
                    existing: self.actions[*existing].name.clone(),
                    incoming: action.name.clone(),
                });
            }
            if chords.contains(&chord) {
                return Err(NavError::DuplicateBinding {
                    scope: scope.to_string(),
                    chord,
                    existing: action.name.clone(),
                    incoming: action.name.clone(),
                });
            }
            chords.push(chord);
        }
        let slot = self.actions.len();
        self.actions.push(action);
        for chord in chords {
            self.index.insert(chord, slot);
        }
        Ok(())
    }

    fn get(&self, chord: &KeyChord) -> Option<&Action> {
        self.index.get(chord).map(|slot| &self.actions[*slot])
    }

    fn bindings(&self) -> impl Iterator<Item = (KeyChord, &str)> + '_ {
        self.actions.iter().flat_map(|action| {
            action
                .chords()
                .map(move |chord| (chord, action.name.as_str()))
        })
    }
}

/// Two-tier key binding table: panel-scoped actions first, then global ones.
///
/// Conflicts are rejected when an action is registered, so resolution never
/// has to choose between two candidates.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    panels: PanelSet,
    global: Tier,
    scoped: HashMap<PanelId, Tier>,
}

impl ActionRegistry {
    pub fn new(panels: PanelSet) -> Self {
        Self {
            panels,
            global: Tier::default(),
            scoped: HashMap::new(),
        }
    }

    pub fn register(&mut self, scope: Scope, action: Action) -> Result<(), NavError> {
        match &scope {
            Scope::Global => self.global.insert(&scope, action),
            Scope::Panel(panel) => {
                let panel = self.panels.resolve(panel.as_str())?.clone();
                self.scoped
                    .entry(panel)
                    .or_default()
                    .insert(&scope, action)
            }
        }
    }

    pub fn register_global(&mut self, action: Action) -> Result<(), NavError> {
        self.register(Scope::Global, action)
    }

    pub fn register_panel(&mut self, panel: &str, action: Action) -> Result<(), NavError> {
        self.register(Scope::Panel(PanelId::new(panel)), action)
    }

    /// Resolves the action bound to `chord` while `panel` is focused.
    pub fn dispatch(&self, panel: &str, chord: KeyChord) -> Result<Option<&Action>, NavError> {
        let panel = self.panels.resolve(panel)?;
        let scoped = self.scoped.get(panel).and_then(|tier| tier.get(&chord));
        Ok(scoped.or_else(|| self.global.get(&chord)))
    }

    /// Effective bindings for `panel`: its own, then the globals it does not
    /// shadow.
    pub fn bindings(&self, panel: &str) -> Result<Vec<(KeyChord, &str)>, NavError> {
        let panel = self.panels.resolve(panel)?;
        let scoped = self.scoped.get(panel);
        let mut out: Vec<(KeyChord, &str)> = scoped
            .map(|tier| tier.bindings().collect())
            .unwrap_or_default();
        out.extend(
            self.global
                .bindings()
                .filter(|(chord, _)| scoped.is_none_or(|tier| tier.get(chord).is_none())),
        );
        Ok(out)
    }
}
