//! Scroll progress and the per-layer offsets derived from it.

/// Document-relative vertical extent of the tracked container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub top: f64,
    pub height: f64,
}

/// Normalised progress of `scroll_y` through the container: 0 when its top
/// edge meets the top of the viewport, 1 when its bottom edge does.
pub fn scroll_progress(scroll_y: f64, bounds: ContainerBounds) -> f64 {
    if !(bounds.height > 0.0) || !scroll_y.is_finite() {
        return 0.0;
    }
    ((scroll_y - bounds.top) / bounds.height).clamp(0.0, 1.0)
}

/// Linear map from progress in [0, 1] onto a fixed output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerRange {
    pub start: f64,
    pub end: f64,
}

impl LayerRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn at(&self, progress: f64) -> f64 {
        self.start + (self.end - self.start) * progress
    }
}

/// Layers that travel at their own rate for the same scroll delta. Offsets
/// are percentages of the layer's own height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxLayer {
    Background,
    Text,
    Mascot,
}

impl ParallaxLayer {
    pub const fn range(self) -> LayerRange {
        match self {
            ParallaxLayer::Background => LayerRange::new(0.0, 50.0),
            ParallaxLayer::Text => LayerRange::new(0.0, 200.0),
            ParallaxLayer::Mascot => LayerRange::new(0.0, 150.0),
        }
    }

    pub fn offset_percent(self, progress: f64) -> f64 {
        self.range().at(progress)
    }

    /// Inline style placing the layer for `progress`.
    pub fn style(self, progress: f64) -> String {
        format!(
            "transform: translate3d(0, {}%, 0);",
            super::css::css_number(self.offset_percent(progress))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: ContainerBounds = ContainerBounds {
        top: 0.0,
        height: 4000.0,
    };

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let mut last = -1.0;
        let mut y = -500.0;
        while y <= 5000.0 {
            let p = scroll_progress(y, PAGE);
            assert!((0.0..=1.0).contains(&p), "progress {} at {}", p, y);
            assert!(p >= last, "progress fell from {} to {} at {}", last, p, y);
            last = p;
            y += 37.0;
        }
    }

    #[test]
    fn progress_follows_container_offset() {
        let bounds = ContainerBounds {
            top: 1000.0,
            height: 500.0,
        };
        assert_eq!(scroll_progress(900.0, bounds), 0.0);
        assert_eq!(scroll_progress(1000.0, bounds), 0.0);
        assert_eq!(scroll_progress(1250.0, bounds), 0.5);
        assert_eq!(scroll_progress(1500.0, bounds), 1.0);
        assert_eq!(scroll_progress(9000.0, bounds), 1.0);
    }

    #[test]
    fn degenerate_container_yields_zero() {
        let collapsed = ContainerBounds {
            top: 0.0,
            height: 0.0,
        };
        assert_eq!(scroll_progress(300.0, collapsed), 0.0);
        assert_eq!(scroll_progress(f64::NAN, PAGE), 0.0);
    }

    #[test]
    fn layers_move_at_different_rates() {
        assert_eq!(ParallaxLayer::Background.offset_percent(1.0), 50.0);
        assert_eq!(ParallaxLayer::Text.offset_percent(1.0), 200.0);
        assert_eq!(ParallaxLayer::Mascot.offset_percent(1.0), 150.0);

        assert_eq!(ParallaxLayer::Background.offset_percent(0.5), 25.0);
        assert_eq!(ParallaxLayer::Text.offset_percent(0.5), 100.0);
        assert_eq!(ParallaxLayer::Mascot.offset_percent(0.5), 75.0);

        for layer in [ParallaxLayer::Background, ParallaxLayer::Text, ParallaxLayer::Mascot] {
            assert_eq!(layer.offset_percent(0.0), 0.0);
        }
    }

    #[test]
    fn layer_offset_is_reproducible() {
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let first = ParallaxLayer::Text.style(p);
            assert_eq!(first, ParallaxLayer::Text.style(p));
        }
        assert_eq!(
            ParallaxLayer::Mascot.style(0.25),
            "transform: translate3d(0, 37.5%, 0);"
        );
    }
}
