//! Motion values expressed as inline CSS.

/// Formats a number for CSS: at most three decimals, no trailing zeros.
pub fn css_number(value: f64) -> String {
    let rounded = format!("{:.3}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// A visual pose: opacity plus a 2D transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl MotionFrame {
    pub const REST: MotionFrame = MotionFrame {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    /// Invisible, otherwise at rest.
    pub const fn hidden() -> Self {
        Self::REST.opacity(0.0)
    }

    pub const fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub const fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub const fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub const fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}) rotate({}deg);",
            css_number(self.opacity),
            css_number(self.x),
            css_number(self.y),
            css_number(self.scale),
            css_number(self.rotate),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Overshooting curve standing in for a physical spring.
    Spring,
}

impl Easing {
    pub const fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
        }
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Delay for the `index`-th child of a staggered group.
    pub fn stagger(self, base: f64, step: f64, index: usize) -> Self {
        self.delay(base + step * index as f64)
    }

    pub fn to_css(&self) -> String {
        let timing = format!(
            "{}s {} {}s",
            css_number(self.duration),
            self.easing.css(),
            css_number(self.delay)
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Looping background motion, backed by keyframes in the global stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ambient {
    /// Vertical bob with a slight sway.
    Float { duration: f64, delay: f64 },
    /// Full turn.
    Spin { duration: f64 },
    /// Grow and brighten, then back.
    Pulse { duration: f64, delay: f64 },
    /// Short horizontal nudge.
    Nudge { duration: f64 },
    /// Gentle rock used on the hero mascot.
    Sway { duration: f64 },
}

impl Ambient {
    pub fn to_css(&self) -> String {
        let (name, duration, delay, easing) = match *self {
            Ambient::Float { duration, delay } => ("jc-float", duration, delay, Easing::EaseInOut),
            Ambient::Spin { duration } => ("jc-spin", duration, 0.0, Easing::Linear),
            Ambient::Pulse { duration, delay } => ("jc-pulse", duration, delay, Easing::EaseInOut),
            Ambient::Nudge { duration } => ("jc-nudge", duration, 0.0, Easing::EaseInOut),
            Ambient::Sway { duration } => ("jc-sway", duration, 0.0, Easing::EaseInOut),
        };
        format!(
            "animation: {} {}s {} {}s infinite;",
            name,
            css_number(duration),
            easing.css(),
            css_number(delay)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(-30.0), "-30");
        assert_eq!(css_number(0.1 * 3.0), "0.3");
        assert_eq!(css_number(37.5), "37.5");
        assert_eq!(css_number(-0.0001), "0");
        assert_eq!(css_number(0.0), "0");
    }

    #[test]
    fn frame_serialises_every_channel() {
        let frame = MotionFrame::hidden().y(-30.0).scale(0.8).rotate(-180.0);
        assert_eq!(
            frame.to_css(),
            "opacity: 0; transform: translate(0px, -30px) scale(0.8) rotate(-180deg);"
        );
        assert_eq!(
            MotionFrame::REST.to_css(),
            "opacity: 1; transform: translate(0px, 0px) scale(1) rotate(0deg);"
        );
    }

    #[test]
    fn stagger_spaces_children() {
        let base = Transition::new(0.8, Easing::EaseOut);
        let delays: Vec<String> = (0..4)
            .map(|i| css_number(base.stagger(0.0, 0.1, i).delay))
            .collect();
        assert_eq!(delays, ["0", "0.1", "0.2", "0.3"]);
    }

    #[test]
    fn transition_covers_opacity_and_transform() {
        let css = Transition::new(1.2, Easing::EaseOut).delay(0.5).to_css();
        assert_eq!(
            css,
            "transition: opacity 1.2s cubic-bezier(0, 0, 0.58, 1) 0.5s, \
             transform 1.2s cubic-bezier(0, 0, 0.58, 1) 0.5s;"
        );
    }

    #[test]
    fn ambient_loops_forever() {
        let css = Ambient::Spin { duration: 20.0 }.to_css();
        assert_eq!(css, "animation: jc-spin 20s linear 0s infinite;");
        assert!(Ambient::Float { duration: 6.0, delay: 2.0 }
            .to_css()
            .starts_with("animation: jc-float 6s"));
    }
}
