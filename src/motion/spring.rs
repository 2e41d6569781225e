//! Damped spring used to smooth continuous inputs.
//!
//! The spring pulls `value` toward `target` with force
//! `-stiffness * (value - target) - damping * velocity` and is integrated
//! with semi-implicit Euler in fixed sub-steps so large frame gaps stay stable.

/// Largest frame delta fed to the integrator; longer gaps (background tabs,
/// debugger pauses) are treated as this long.
pub const MAX_FRAME_DT: f64 = 1.0 / 15.0;

/// Upper bound on a single integration step.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Displacement below which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Custom cursor follower.
    pub const CURSOR: SpringConfig = SpringConfig {
        stiffness: 700.0,
        damping: 25.0,
        mass: 1.0,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    /// `damping / (2 * sqrt(stiffness * mass))`; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Moves straight to `value` and rests there.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds. Returns `true` while it is still
    /// moving and needs another frame.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() {
            return false;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        if dt > 0.0 {
            let steps = (dt / MAX_SUBSTEP).ceil().max(1.0);
            let h = dt / steps;
            for _ in 0..steps as u32 {
                let displacement = self.value - self.target;
                let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
                self.velocity += force / self.config.mass * h;
                self.value += self.velocity * h;
            }
        }

        if (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
        !self.is_at_rest()
    }
}
