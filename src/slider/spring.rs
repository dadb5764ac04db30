//! Damped spring used for the knob's return-to-rest animation.
//!
//! The spring integrates `m * x'' = -k * (x - target) - c * x'` with RK4 in
//! fixed sub-steps, so the result does not depend on the frame rate beyond
//! the last partial step.

use super::error::SliderConfigError;

/// Largest integration step, in seconds.
const MAX_STEP: f32 = 1.0 / 120.0;

/// Physical parameters of a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass attached to the spring.
    pub mass: f32,
    /// Velocity-proportional friction.
    pub damping: f32,
    /// Displacement-proportional restoring force.
    pub stiffness: f32,
    /// When set, the spring stops the moment it reaches its target instead of
    /// oscillating past it.
    pub overshoot_clamping: bool,
    /// Distance from the target below which the spring may come to rest (px).
    pub rest_displacement_threshold: f32,
    /// Speed below which the spring may come to rest (px/s).
    pub rest_speed_threshold: f32,
}

impl SpringConfig {
    /// Heavy, loosely damped spring with overshoot disabled. Used when the
    /// knob is released.
    pub const RELEASE: Self = Self {
        mass: 11.0,
        damping: 10.0,
        stiffness: 100.0,
        overshoot_clamping: true,
        rest_displacement_threshold: 0.01,
        rest_speed_threshold: 2.0,
    };

    /// Checks that the parameters describe a physically meaningful spring.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(SliderConfigError::NonPositiveMass(self.mass));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SliderConfigError::NonPositiveStiffness(self.stiffness));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(SliderConfigError::NegativeDamping(self.damping));
        }
        Ok(())
    }

    /// Damping ratio: below 1 the spring oscillates, above 1 it creeps.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::RELEASE
    }
}

/// A single animated value pulled toward a target.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    start: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    /// Creates a spring at rest at `from`, heading for `to`.
    pub fn new(config: SpringConfig, from: f32, to: f32) -> Self {
        Self {
            config,
            value: from,
            velocity: 0.0,
            start: from,
            target: to,
            settled: from == to,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    pub fn step(&mut self, dt: f32) -> f32 {
        let mut remaining = dt.max(0.0);
        while !self.settled && remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            remaining -= h;
            self.integrate(h);
            self.check_rest();
        }
        self.value
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            mass,
            damping,
            stiffness,
            ..
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn integrate(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let (k1x, k1v) = (v, self.acceleration(x, v));
        let (k2x, k2v) = {
            let (x2, v2) = (x + k1x * h / 2.0, v + k1v * h / 2.0);
            (v2, self.acceleration(x2, v2))
        };
        let (k3x, k3v) = {
            let (x3, v3) = (x + k2x * h / 2.0, v + k2v * h / 2.0);
            (v3, self.acceleration(x3, v3))
        };
        let (k4x, k4v) = {
            let (x4, v4) = (x + k3x * h, v + k3v * h);
            (v4, self.acceleration(x4, v4))
        };

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }

    fn check_rest(&mut self) {
        let displacement = self.value - self.target;

        // Reached or crossed the target since the animation started.
        let overshot = displacement * (self.start - self.target) <= 0.0;
        let resting = displacement.abs() < self.config.rest_displacement_threshold
            && self.velocity.abs() < self.config.rest_speed_threshold;

        if (self.config.overshoot_clamping && overshot) || resting {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}
