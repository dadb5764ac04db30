//! Per-slider animation state and the gesture state machine.
//!
//! [`SliderState`] lives on the track entity. It is written by the gesture
//! observers and the spring-back system, and read by the style systems. The
//! ECS scheduler never runs those concurrently on the same component, so the
//! render path cannot observe a half-applied sample.

use bevy::prelude::*;

use super::config::SliderConfig;
use super::spring::Spring;

/// Where the slider is in its drag lifecycle.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SliderPhase {
    /// At rest, nothing animating.
    #[default]
    Idle,
    /// A drag is active and its last sample was within the track.
    Dragging,
    /// A drag is active but its last sample was beyond half the track height.
    /// No state is updated until the pointer comes back in range.
    Frozen,
    /// Released; the knob is springing back to rest.
    Releasing,
}

/// Measured layout sizes, in logical pixels.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub struct SliderLayout {
    /// Width of the knob's container.
    pub track_width: f32,
    /// Height of the knob's container.
    pub track_height: f32,
    /// Height of the enclosing track.
    pub wrapper_height: f32,
}

/// Shared animation state of one slider.
#[derive(Component, Default, Clone, Debug)]
pub struct SliderState {
    /// Vertical displacement of the knob from rest.
    pub offset_y: f32,
    /// Gradient fade amount. Not clamped here; the style path saturates it.
    pub opacity: f32,
    /// Gradient top edge offset.
    pub top_inset: f32,
    /// Gradient bottom edge offset.
    pub bottom_inset: f32,
    /// Set after the first completed drag; enables knob and opacity updates.
    pub latched: bool,
    pub layout: SliderLayout,
    pub phase: SliderPhase,
    /// Spring-back in flight, if any.
    pub knob_spring: Option<Spring>,
}

impl SliderState {
    /// Starts a drag. A running spring-back keeps going until a sample moves
    /// the knob.
    pub fn begin_drag(&mut self) {
        self.phase = SliderPhase::Dragging;
    }

    /// Applies one drag sample with cumulative vertical translation `t`.
    pub fn apply_drag(&mut self, t: f32, config: &SliderConfig) {
        let half_height = self.layout.wrapper_height / 2.0;
        let distance = t.abs();

        if self.latched && distance <= half_height - config.knob_guard_margin {
            self.opacity = distance / config.opacity_distance;
            self.offset_y = t;
            self.knob_spring = None;
        }

        if distance <= half_height {
            let wrapper_height = self.layout.wrapper_height;
            if t < 0.0 {
                self.bottom_inset = (wrapper_height + t * config.inset_gain).max(0.0);
                self.top_inset = 0.0;
            } else {
                self.top_inset = (wrapper_height - t * config.inset_gain).max(0.0);
                self.bottom_inset = 0.0;
            }
            self.phase = SliderPhase::Dragging;
        } else {
            self.phase = SliderPhase::Frozen;
        }
    }

    /// Releases the knob: springs it back to rest and resets the gradient.
    pub fn end_drag(&mut self, config: &SliderConfig) {
        let spring = Spring::new(config.release_spring, self.offset_y, 0.0);
        if spring.is_settled() {
            self.knob_spring = None;
            self.phase = SliderPhase::Idle;
        } else {
            self.knob_spring = Some(spring);
            self.phase = SliderPhase::Releasing;
        }

        self.opacity = 0.0;
        self.top_inset = 0.0;
        self.bottom_inset = 0.0;
        self.latched = true;
    }

    /// Advances the spring-back by `dt` seconds. Returns true while still
    /// animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(spring) = self.knob_spring.as_mut() else {
            return false;
        };

        self.offset_y = spring.step(dt);
        if !spring.is_settled() {
            return true;
        }

        self.knob_spring = None;
        if self.phase == SliderPhase::Releasing {
            self.phase = SliderPhase::Idle;
        }
        false
    }
}
