#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hover {
    #[default]
    Idle,
    Hovered,
}

/// Pointer transition produced by [`Interaction::pointer_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(usize),
    Leave(usize),
}

/// Per-item hover state, index-aligned with the render items. Never touches
/// layout; the renderer reads it to pick a scale.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    states: Vec<Hover>,
}

impl Interaction {
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![Hover::Idle; count],
        }
    }

    /// New keyword set: everything starts idle again.
    pub fn reset(&mut self, count: usize) {
        self.states.clear();
        self.states.resize(count, Hover::Idle);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Out-of-range indices are ignored.
    pub fn pointer_enter(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            *state = Hover::Hovered;
        }
    }

    pub fn pointer_leave(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            *state = Hover::Idle;
        }
    }

    pub fn state(&self, index: usize) -> Hover {
        self.states.get(index).copied().unwrap_or_default()
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.state(index) == Hover::Hovered
    }

    /// Makes `target` the only hovered item and returns the transitions that
    /// took (every leave before the enter). Items hovered through
    /// [`pointer_enter`](Self::pointer_enter) are left here too.
    pub fn pointer_move(&mut self, target: Option<usize>) -> Vec<PointerEvent> {
        let target = target.filter(|&i| i < self.states.len());
        let mut events = Vec::new();

        for (i, state) in self.states.iter_mut().enumerate() {
            if *state == Hover::Hovered && Some(i) != target {
                *state = Hover::Idle;
                events.push(PointerEvent::Leave(i));
            }
        }

        if let Some(next) = target {
            if self.states[next] == Hover::Idle {
                self.states[next] = Hover::Hovered;
                events.push(PointerEvent::Enter(next));
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_then_leave_restores_idle() {
        let mut ix = Interaction::new(3);
        let before = ix.state(1);

        ix.pointer_enter(1);
        assert!(ix.is_hovered(1));
        assert!(!ix.is_hovered(0) && !ix.is_hovered(2));

        ix.pointer_leave(1);
        assert_eq!(ix.state(1), before);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut ix = Interaction::new(2);
        ix.pointer_enter(5);
        ix.pointer_leave(9);

        assert_eq!(ix.state(5), Hover::Idle);
        assert!(ix.pointer_move(Some(7)).is_empty());
    }

    #[test]
    fn pointer_move_emits_transitions() {
        let mut ix = Interaction::new(4);

        assert_eq!(ix.pointer_move(Some(2)), vec![PointerEvent::Enter(2)]);
        assert!(ix.pointer_move(Some(2)).is_empty());
        assert_eq!(
            ix.pointer_move(Some(0)),
            vec![PointerEvent::Leave(2), PointerEvent::Enter(0)]
        );
        assert_eq!(ix.pointer_move(None), vec![PointerEvent::Leave(0)]);
        assert!((0..4).all(|i| !ix.is_hovered(i)));
    }

    #[test]
    fn pointer_move_leaves_directly_entered_item() {
        let mut ix = Interaction::new(3);

        ix.pointer_enter(1);
        assert_eq!(ix.pointer_move(None), vec![PointerEvent::Leave(1)]);
        assert!(!ix.is_hovered(1));

        ix.pointer_enter(1);
        assert_eq!(
            ix.pointer_move(Some(2)),
            vec![PointerEvent::Leave(1), PointerEvent::Enter(2)]
        );
        assert!(!ix.is_hovered(1) && ix.is_hovered(2));
    }

    #[test]
    fn pointer_move_onto_entered_item_is_quiet() {
        let mut ix = Interaction::new(2);
        ix.pointer_enter(0);

        assert!(ix.pointer_move(Some(0)).is_empty());
        assert!(ix.is_hovered(0));
    }

    #[test]
    fn direct_leave_then_move_reenters() {
        let mut ix = Interaction::new(2);
        ix.pointer_move(Some(1));
        ix.pointer_leave(1);

        assert_eq!(ix.pointer_move(Some(1)), vec![PointerEvent::Enter(1)]);
    }

    #[test]
    fn reset_clears_hover() {
        let mut ix = Interaction::new(2);
        ix.pointer_move(Some(1));
        ix.reset(5);

        assert_eq!(ix.len(), 5);
        assert!((0..5).all(|i| !ix.is_hovered(i)));
        assert_eq!(ix.pointer_move(Some(1)), vec![PointerEvent::Enter(1)]);
    }
}
