use lightbox_camera::Direction;

/// Virtual pointer distance one arrow-key frame turns the view by.
pub const NUDGE_PIXELS: f64 = 10.0;

/// Keys the viewer reacts to. The windowing layer maps its own key codes
/// onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    X,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    U,
    Escape,
}

/// A high-level request produced by input and consumed by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the camera for this frame.
    Move(Direction),
    /// Shift the virtual pointer, turning the view as if the mouse moved.
    Nudge { dx: f64, dy: f64 },
    /// Show or hide the debug panel.
    ToggleDebugPanel,
    /// Close the viewer.
    Quit,
}

impl Action {
    /// Continuous actions repeat every frame while their key is held.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Action::Move(_) | Action::Nudge { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_and_nudge_are_continuous() {
        assert!(Action::Move(Direction::Up).is_continuous());
        assert!(Action::Nudge { dx: 0.0, dy: NUDGE_PIXELS }.is_continuous());
    }

    #[test]
    fn toggle_and_quit_are_one_shot() {
        assert!(!Action::ToggleDebugPanel.is_continuous());
        assert!(!Action::Quit.is_continuous());
    }
}
