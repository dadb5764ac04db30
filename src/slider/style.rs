//! Style derivation: maps slider state to visual properties each frame.

use bevy::prelude::*;
use bevy::ui::{BackgroundGradient, ColorStop, Gradient, LinearGradient, UiTransform, Val2};

use super::config::SliderConfig;
use super::state::SliderState;
use super::widget::{SliderGradient, SliderKnob};

/// What [`interpolate`] does with inputs outside the input range.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Extrapolation {
    /// Continue the linear mapping past the range.
    #[default]
    Extend,
    /// Pin to the nearest end of the output range.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Extrapolation for each side of the input range.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExtrapolationConfig {
    pub left: Extrapolation,
    pub right: Extrapolation,
}

impl ExtrapolationConfig {
    pub const EXTEND: Self = Self {
        left: Extrapolation::Extend,
        right: Extrapolation::Extend,
    };
}

/// Linearly maps `value` from `input` to `output`.
///
/// A degenerate input range maps everything to `output[0]`.
pub fn interpolate(
    value: f32,
    input: [f32; 2],
    output: [f32; 2],
    extrapolation: ExtrapolationConfig,
) -> f32 {
    let [in_start, in_end] = input;
    let [out_start, out_end] = output;

    if (in_end - in_start).abs() <= f32::EPSILON {
        return out_start;
    }

    let (low, high) = if in_start <= in_end {
        (in_start, in_end)
    } else {
        (in_end, in_start)
    };

    let mode = if value < low {
        Some(extrapolation.left)
    } else if value > high {
        Some(extrapolation.right)
    } else {
        None
    };

    match mode {
        Some(Extrapolation::Identity) => return value,
        Some(Extrapolation::Clamp) => {
            let edge = if value < low { low } else { high };
            return lerp(edge, in_start, in_end, out_start, out_end);
        }
        Some(Extrapolation::Extend) | None => {}
    }

    lerp(value, in_start, in_end, out_start, out_end)
}

fn lerp(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    out_start + (value - in_start) / (in_end - in_start) * (out_end - out_start)
}

/// Knob properties for one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct KnobStyle {
    pub translate_y: f32,
}

/// Gradient overlay properties for one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GradientStyle {
    pub opacity: f32,
    pub top: f32,
    pub bottom: f32,
}

pub fn knob_style(state: &SliderState) -> KnobStyle {
    KnobStyle {
        translate_y: state.offset_y,
    }
}

/// Opacity saturates above 1 and extrapolates below 0. The insets pass
/// through unchanged.
pub fn gradient_style(state: &SliderState) -> GradientStyle {
    let opacity = interpolate(
        state.opacity,
        [0.0, 1.0],
        [0.0, 1.0],
        ExtrapolationConfig {
            left: Extrapolation::Extend,
            right: Extrapolation::Clamp,
        },
    );

    GradientStyle {
        opacity,
        bottom: interpolate(
            state.bottom_inset,
            [0.0, 1.0],
            [0.0, 1.0],
            ExtrapolationConfig::EXTEND,
        ),
        top: interpolate(
            state.top_inset,
            [0.0, 1.0],
            [0.0, 1.0],
            ExtrapolationConfig::EXTEND,
        ),
    }
}

/// Builds the backdrop fill at the given opacity.
pub fn gradient_fill(config: &SliderConfig, opacity: f32) -> BackgroundGradient {
    // Colors have no negative alpha; anything below zero is fully transparent.
    let alpha = opacity.clamp(0.0, 1.0);
    let stops = config
        .gradient_colors
        .iter()
        .map(|color| ColorStop::auto(color.with_alpha(color.alpha() * alpha)))
        .collect();

    BackgroundGradient(vec![Gradient::Linear(LinearGradient::new(
        config.gradient_angle,
        stops,
    ))])
}

/// System: moves each knob to its slider's offset.
///
/// Translation is applied after layout, so a moving knob never re-runs it.
pub fn sync_knob_style(
    sliders: Query<Ref<SliderState>>,
    mut knobs: Query<(&SliderKnob, &mut UiTransform)>,
) {
    for (knob, mut transform) in &mut knobs {
        let Ok(state) = sliders.get(knob.slider) else {
            continue;
        };
        if !state.is_changed() {
            continue;
        }

        let style = knob_style(&state);
        transform.translation = Val2::px(0.0, style.translate_y);
    }
}

/// System: resizes and fades each gradient backdrop.
pub fn sync_gradient_style(
    config: Res<SliderConfig>,
    sliders: Query<Ref<SliderState>>,
    mut gradients: Query<(&SliderGradient, &mut Node, &mut BackgroundGradient)>,
) {
    for (gradient, mut node, mut fill) in &mut gradients {
        let Ok(state) = sliders.get(gradient.slider) else {
            continue;
        };
        if !state.is_changed() && !config.is_changed() {
            continue;
        }

        let style = gradient_style(&state);
        node.top = Val::Px(style.top);
        node.bottom = Val::Px(style.bottom);
        *fill = gradient_fill(&config, style.opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLAMP_RIGHT: ExtrapolationConfig = ExtrapolationConfig {
        left: Extrapolation::Extend,
        right: Extrapolation::Clamp,
    };

    #[test]
    fn interpolates_inside_range() {
        assert_eq!(
            interpolate(5.0, [0.0, 10.0], [100.0, 200.0], ExtrapolationConfig::EXTEND),
            150.0
        );
    }

    #[test]
    fn right_clamp_pins_and_left_extends() {
        assert_eq!(interpolate(1.7, [0.0, 1.0], [0.0, 1.0], CLAMP_RIGHT), 1.0);
        assert_eq!(interpolate(-0.4, [0.0, 1.0], [0.0, 1.0], CLAMP_RIGHT), -0.4);
    }

    #[test]
    fn identity_returns_input_outside_range() {
        let identity = ExtrapolationConfig {
            left: Extrapolation::Identity,
            right: Extrapolation::Identity,
        };
        assert_eq!(interpolate(42.0, [0.0, 1.0], [10.0, 20.0], identity), 42.0);
        assert_eq!(interpolate(0.5, [0.0, 1.0], [10.0, 20.0], identity), 15.0);
    }

    #[test]
    fn clamp_on_reversed_range() {
        let clamp = ExtrapolationConfig {
            left: Extrapolation::Clamp,
            right: Extrapolation::Clamp,
        };
        assert_eq!(interpolate(5.0, [1.0, 0.0], [0.0, 10.0], clamp), 0.0);
        assert_eq!(interpolate(-5.0, [1.0, 0.0], [0.0, 10.0], clamp), 10.0);
    }

    #[test]
    fn degenerate_range_maps_to_first_output() {
        assert_eq!(
            interpolate(3.0, [2.0, 2.0], [7.0, 9.0], ExtrapolationConfig::EXTEND),
            7.0
        );
    }

    #[test]
    fn gradient_opacity_saturates() {
        let state = SliderState {
            opacity: 1.4,
            top_inset: 225.0,
            bottom_inset: 0.0,
            ..default()
        };

        let style = gradient_style(&state);

        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.top, 225.0);
        assert_eq!(style.bottom, 0.0);
    }

    #[test]
    fn knob_follows_offset() {
        let state = SliderState {
            offset_y: -37.5,
            ..default()
        };
        assert_eq!(knob_style(&state).translate_y, -37.5);
    }

    #[test]
    fn fill_scales_stop_alpha() {
        let config = SliderConfig::default();
        let BackgroundGradient(gradients) = gradient_fill(&config, 0.25);

        let [Gradient::Linear(linear)] = gradients.as_slice() else {
            panic!("expected a single linear gradient");
        };
        assert_eq!(linear.stops.len(), 2);
        for stop in &linear.stops {
            assert!((stop.color.alpha() - 0.25).abs() < 1e-6);
        }
    }
}
