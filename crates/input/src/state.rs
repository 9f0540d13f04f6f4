use crate::action::{Action, Key, NUDGE_PIXELS};
use lightbox_camera::Direction;
use std::collections::{BTreeMap, BTreeSet};

/// Key to action table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    bindings: BTreeMap<Key, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = BTreeMap::from([
            (Key::W, Action::Move(Direction::Forward)),
            (Key::S, Action::Move(Direction::Backward)),
            (Key::A, Action::Move(Direction::Left)),
            (Key::D, Action::Move(Direction::Right)),
            (Key::Space, Action::Move(Direction::Up)),
            (Key::X, Action::Move(Direction::Down)),
            (Key::ArrowUp, Action::Nudge { dx: 0.0, dy: -NUDGE_PIXELS }),
            (Key::ArrowDown, Action::Nudge { dx: 0.0, dy: NUDGE_PIXELS }),
            (Key::ArrowLeft, Action::Nudge { dx: -NUDGE_PIXELS, dy: 0.0 }),
            (Key::ArrowRight, Action::Nudge { dx: NUDGE_PIXELS, dy: 0.0 }),
            (Key::U, Action::ToggleDebugPanel),
            (Key::Escape, Action::Quit),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn action(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Rebind a key, returning the action it had before.
    pub fn bind(&mut self, key: Key, action: Action) -> Option<Action> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: Key) -> Option<Action> {
        self.bindings.remove(&key)
    }
}

/// Held-key tracker polled once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    held: BTreeSet<Key>,
}

impl InputState {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: BTreeSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Record a key press. Returns the bound one-shot action on the press
    /// edge; auto-repeat presses of a held key return `None`.
    pub fn press(&mut self, key: Key) -> Option<Action> {
        if !self.held.insert(key) {
            return None;
        }
        self.bindings
            .action(key)
            .filter(|action| !action.is_continuous())
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        if !self.held.is_empty() {
            tracing::debug!(count = self.held.len(), "released held keys");
        }
        self.held.clear();
    }

    /// Continuous actions for every held key, in key order.
    pub fn held_actions(&self) -> Vec<Action> {
        self.held
            .iter()
            .filter_map(|key| self.bindings.action(*key))
            .filter(Action::is_continuous)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_movement() {
        let b = KeyBindings::default();
        assert_eq!(b.action(Key::W), Some(Action::Move(Direction::Forward)));
        assert_eq!(b.action(Key::X), Some(Action::Move(Direction::Down)));
        assert_eq!(b.action(Key::Space), Some(Action::Move(Direction::Up)));
        assert_eq!(b.action(Key::U), Some(Action::ToggleDebugPanel));
    }

    #[test]
    fn arrow_up_nudges_pointer_up() {
        let b = KeyBindings::default();
        assert_eq!(
            b.action(Key::ArrowUp),
            Some(Action::Nudge { dx: 0.0, dy: -NUDGE_PIXELS })
        );
    }

    #[test]
    fn one_shot_fires_on_press_edge_only() {
        let mut input = InputState::default();
        assert_eq!(input.press(Key::U), Some(Action::ToggleDebugPanel));
        assert_eq!(input.press(Key::U), None);
        input.release(Key::U);
        assert_eq!(input.press(Key::U), Some(Action::ToggleDebugPanel));
    }

    #[test]
    fn continuous_press_returns_nothing() {
        let mut input = InputState::default();
        assert_eq!(input.press(Key::W), None);
        assert!(input.is_held(Key::W));
    }

    #[test]
    fn held_actions_repeat_until_release() {
        let mut input = InputState::default();
        input.press(Key::W);
        input.press(Key::D);
        input.press(Key::Escape);
        let actions = input.held_actions();
        assert_eq!(
            actions,
            vec![
                Action::Move(Direction::Forward),
                Action::Move(Direction::Right),
            ]
        );
        assert_eq!(input.held_actions(), actions);

        input.release(Key::W);
        assert_eq!(input.held_actions(), vec![Action::Move(Direction::Right)]);
    }

    #[test]
    fn clear_drops_held_keys() {
        let mut input = InputState::default();
        input.press(Key::A);
        input.press(Key::ArrowLeft);
        input.clear();
        assert!(input.held_actions().is_empty());
    }

    #[test]
    fn rebinding_changes_actions() {
        let mut bindings = KeyBindings::default();
        let old = bindings.bind(Key::X, Action::Quit);
        assert_eq!(old, Some(Action::Move(Direction::Down)));
        bindings.unbind(Key::Escape);

        let mut input = InputState::new(bindings);
        assert_eq!(input.press(Key::X), Some(Action::Quit));
        assert_eq!(input.press(Key::Escape), None);
    }
}
