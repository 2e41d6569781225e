use crate::motion::spring::{Spring, SpringConfig};

/// Pointer coordinates in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer position filtered through one spring per axis, so the follower
/// trails the raw input instead of snapping to it.
#[derive(Debug, Clone)]
pub struct SmoothedPointer {
    x: Spring,
    y: Spring,
    primed: bool,
}

impl SmoothedPointer {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            x: Spring::new(config, 0.0),
            y: Spring::new(config, 0.0),
            primed: false,
        }
    }

    /// Whether any pointer sample has arrived yet.
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Feeds a raw sample. The first one places the follower directly under
    /// the pointer; later ones only move the springs' targets.
    pub fn set_target(&mut self, position: PointerPosition) {
        if self.primed {
            self.x.set_target(position.x);
            self.y.set_target(position.y);
        } else {
            self.x.jump(position.x);
            self.y.jump(position.y);
            self.primed = true;
        }
    }

    /// Returns `true` while either axis is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }

    pub fn position(&self) -> PointerPosition {
        PointerPosition::new(self.x.value(), self.y.value())
    }

    #[cfg(test)]
    pub fn target(&self) -> PointerPosition {
        PointerPosition::new(self.x.target(), self.y.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn starts_unprimed_at_origin() {
        let pointer = SmoothedPointer::new(SpringConfig::CURSOR);
        assert!(!pointer.is_primed());
        assert_eq!(pointer.position(), PointerPosition::default());
    }

    #[test]
    fn first_sample_snaps_into_place() {
        let mut pointer = SmoothedPointer::new(SpringConfig::CURSOR);
        pointer.set_target(PointerPosition::new(320.0, 200.0));

        assert!(pointer.is_primed());
        assert_eq!(pointer.position(), PointerPosition::new(320.0, 200.0));
        assert!(!pointer.step(FRAME));
    }

    #[test]
    fn follower_lags_then_catches_up() {
        let mut pointer = SmoothedPointer::new(SpringConfig::CURSOR);
        pointer.set_target(PointerPosition::new(0.0, 0.0));
        pointer.set_target(PointerPosition::new(400.0, 300.0));

        pointer.step(FRAME);
        let after_one = pointer.position();
        assert!(after_one.x > 0.0 && after_one.x < 400.0);
        assert!(after_one.y > 0.0 && after_one.y < 300.0);

        let mut frames = 0;
        while pointer.step(FRAME) {
            frames += 1;
            assert!(frames < 600, "follower never settled");
        }
        assert_eq!(pointer.position(), pointer.target());
        assert_eq!(pointer.position(), PointerPosition::new(400.0, 300.0));
    }

    #[test]
    fn distance_to_target_shrinks_over_time() {
        let mut pointer = SmoothedPointer::new(SpringConfig::CURSOR);
        pointer.set_target(PointerPosition::new(0.0, 0.0));
        pointer.set_target(PointerPosition::new(0.0, 250.0));

        let distance = |p: &SmoothedPointer| (p.target().y - p.position().y).abs();
        let start = distance(&pointer);
        for _ in 0..30 {
            pointer.step(FRAME);
        }
        let half_second = distance(&pointer);
        for _ in 0..30 {
            pointer.step(FRAME);
        }
        let one_second = distance(&pointer);

        assert!(half_second < start / 10.0);
        assert!(one_second < 0.5);
    }
}
