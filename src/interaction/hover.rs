use std::rc::Rc;
use yew::prelude::*;

/// Which gallery card currently has the pointer, by flavour name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverAction {
    Enter(&'static str),
    Exit(&'static str),
}

impl HoverState {
    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered == Some(id)
    }

    pub fn apply(self, action: HoverAction) -> Self {
        match action {
            HoverAction::Enter(id) => Self { hovered: Some(id) },
            // A late exit from a card the pointer already left must not
            // clear the card it moved onto.
            HoverAction::Exit(id) if self.is_hovered(id) => Self { hovered: None },
            HoverAction::Exit(_) => self,
        }
    }
}

impl Reducible for HoverState {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_sets_hovered_item() {
        let state = HoverState::default().apply(HoverAction::Enter("Mango Twist"));
        assert_eq!(state.hovered(), Some("Mango Twist"));
        assert!(state.is_hovered("Mango Twist"));
    }

    #[test]
    fn entering_another_item_replaces_the_first() {
        let state = HoverState::default()
            .apply(HoverAction::Enter("Classic Vanilla"))
            .apply(HoverAction::Enter("Chocolate Heaven"));
        assert_eq!(state.hovered(), Some("Chocolate Heaven"));
        assert!(!state.is_hovered("Classic Vanilla"));
    }

    #[test]
    fn exit_of_hovered_item_clears() {
        let state = HoverState::default()
            .apply(HoverAction::Enter("Ultimate Swirl"))
            .apply(HoverAction::Exit("Ultimate Swirl"));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn stale_exit_is_ignored() {
        // Pointer slides from A onto B and A's exit arrives after B's enter.
        let state = HoverState::default()
            .apply(HoverAction::Enter("Ultimate Swirl"))
            .apply(HoverAction::Enter("Mango Twist"))
            .apply(HoverAction::Exit("Ultimate Swirl"));
        assert_eq!(state.hovered(), Some("Mango Twist"));
    }

    #[test]
    fn exit_with_nothing_hovered_is_noop() {
        let state = HoverState::default().apply(HoverAction::Exit("Pistachio Madness"));
        assert_eq!(state, HoverState::default());
    }

    #[test]
    fn reducer_keeps_allocation_when_unchanged() {
        let state = Rc::new(HoverState::default().apply(HoverAction::Enter("Mango Twist")));
        let same = state.clone().reduce(HoverAction::Exit("Classic Vanilla"));
        assert!(Rc::ptr_eq(&state, &same));

        let cleared = state.reduce(HoverAction::Exit("Mango Twist"));
        assert_eq!(cleared.hovered(), None);
    }
}
