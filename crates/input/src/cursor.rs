use glam::DVec2;

/// Unbounded pointer position built by summing relative mouse motion.
///
/// A captured pointer reports motion deltas, not positions. Accumulating
/// them gives the camera the absolute coordinates its look contract expects,
/// with no edge of the window to stop at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VirtualCursor {
    position: DVec2,
}

impl VirtualCursor {
    pub fn new(start: DVec2) -> Self {
        Self { position: start }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Apply raw motion and return the new position.
    pub fn accumulate(&mut self, dx: f64, dy: f64) -> DVec2 {
        self.position += DVec2::new(dx, dy);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_motion() {
        let mut cursor = VirtualCursor::new(DVec2::new(400.0, 300.0));
        cursor.accumulate(10.0, -5.0);
        let p = cursor.accumulate(2.5, 0.5);
        assert_eq!(p, DVec2::new(412.5, 295.5));
        assert_eq!(cursor.position(), p);
    }

    #[test]
    fn is_unbounded() {
        let mut cursor = VirtualCursor::default();
        for _ in 0..1000 {
            cursor.accumulate(-100.0, 100.0);
        }
        assert_eq!(cursor.position(), DVec2::new(-100_000.0, 100_000.0));
    }
}
