use crate::navigation::error::NavError;
use crate::navigation::focus::FocusController;
use crate::navigation::panel::PanelId;
use crate::navigation::panel::PanelSet;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Wrap-around traversal over the fixed ring of primary panels.
#[derive(Debug, Clone)]
pub struct CyclicNavigator {
    order: Vec<PanelId>,
}

impl CyclicNavigator {
    pub fn new(panels: &PanelSet, order: &[&str]) -> Result<Self, NavError> {
        if order.is_empty() {
            return Err(NavError::InvalidConfig(
                "cyclic order must name at least one panel".to_string(),
            ));
        }
        let mut resolved: Vec<PanelId> = Vec::with_capacity(order.len());
        for name in order {
            let id = panels.resolve(name)?;
            if resolved.contains(id) {
                return Err(NavError::InvalidConfig(format!(
                    "panel '{id}' appears twice in the cyclic order"
                )));
            }
            resolved.push(id.clone());
        }
        Ok(Self { order: resolved })
    }

    pub fn order(&self) -> &[PanelId] {
        &self.order
    }

    /// Focuses the panel after the current one. Returns the new panel, or
    /// `None` when the current panel is not part of the ring.
    pub fn next_cyclic_view(
        &self,
        focus: &mut FocusController,
    ) -> Result<Option<PanelId>, NavError> {
        self.step(focus, Direction::Forward)
    }

    pub fn previous_cyclic_view(
        &self,
        focus: &mut FocusController,
    ) -> Result<Option<PanelId>, NavError> {
        self.step(focus, Direction::Backward)
    }

    fn step(
        &self,
        focus: &mut FocusController,
        direction: Direction,
    ) -> Result<Option<PanelId>, NavError> {
        let len = self.order.len();
        let Some(idx) = self
            .order
            .iter()
            .position(|panel| panel == focus.current_view())
        else {
            return Ok(None);
        };
        let next_idx = match direction {
            Direction::Forward => (idx + 1) % len,
            Direction::Backward => (idx + len - 1) % len,
        };
        let target = self.order[next_idx].clone();
        debug!(?direction, target = %target, "cyclic view");
        focus.focus_view(target.as_str(), true)?;
        Ok(Some(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::panel::Panel;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    const RING: [&str; 5] = ["a", "b", "c", "d", "e"];

    fn setup(initial: &str) -> (CyclicNavigator, FocusController) {
        let panels = PanelSet::new(
            RING.iter()
                .copied()
                .chain(["outside"])
                .map(Panel::new),
        )
        .unwrap();
        let navigator = CyclicNavigator::new(&panels, &RING).unwrap();
        let focus = FocusController::new(panels, initial).unwrap();
        (navigator, focus)
    }

    #[test]
    fn steps_through_the_middle() {
        let (nav, mut focus) = setup("c");
        nav.next_cyclic_view(&mut focus).unwrap();
        assert_eq!(focus.current_view().as_str(), "d");

        let (nav, mut focus) = setup("c");
        nav.previous_cyclic_view(&mut focus).unwrap();
        assert_eq!(focus.current_view().as_str(), "b");
    }

    #[test]
    fn wraps_at_both_ends() {
        let (nav, mut focus) = setup("e");
        nav.next_cyclic_view(&mut focus).unwrap();
        assert_eq!(focus.current_view().as_str(), "a");

        let (nav, mut focus) = setup("a");
        nav.previous_cyclic_view(&mut focus).unwrap();
        assert_eq!(focus.current_view().as_str(), "e");
    }

    #[test]
    fn next_and_previous_are_inverse() {
        for start in RING {
            let (nav, mut focus) = setup(start);
            nav.previous_cyclic_view(&mut focus).unwrap();
            nav.next_cyclic_view(&mut focus).unwrap();
            assert_eq!(focus.current_view().as_str(), start);

            nav.next_cyclic_view(&mut focus).unwrap();
            nav.previous_cyclic_view(&mut focus).unwrap();
            assert_eq!(focus.current_view().as_str(), start);
        }
    }

    #[test]
    fn traversal_pushes_history() {
        let (nav, mut focus) = setup("a");
        nav.next_cyclic_view(&mut focus).unwrap();
        focus.return_previous_view().unwrap();
        assert_eq!(focus.current_view().as_str(), "a");
    }

    #[test]
    fn inert_outside_the_ring() {
        let (nav, mut focus) = setup("outside");
        assert_eq!(nav.next_cyclic_view(&mut focus).unwrap(), None);
        assert_eq!(nav.previous_cyclic_view(&mut focus).unwrap(), None);
        assert_eq!(focus.current_view().as_str(), "outside");
        assert!(!focus.has_previous_view());
    }

    #[test]
    fn rejects_bad_orders() {
        let panels = PanelSet::new(RING.map(Panel::new)).unwrap();
        assert_matches!(
            CyclicNavigator::new(&panels, &[]),
            Err(NavError::InvalidConfig(_))
        );
        assert_matches!(
            CyclicNavigator::new(&panels, &["a", "zz"]),
            Err(NavError::UnknownPanel(name)) if name == "zz"
        );
        assert_matches!(
            CyclicNavigator::new(&panels, &["a", "a"]),
            Err(NavError::InvalidConfig(_))
        );
    }
}
