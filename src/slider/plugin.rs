//! Drag slider plugin and system ordering.

use bevy::prelude::*;

use super::config::{SliderConfig, check_slider_config};
use super::gesture::SliderGesturePlugin;
use super::layout::{measure_knob_area, measure_track};
use super::state::SliderState;
use super::style::{sync_gradient_style, sync_knob_style};

/// System sets for organizing slider systems.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SliderSet {
    /// Copy measured layout into slider state.
    Measure,
    /// Advance spring-back animations.
    Animate,
    /// Derive styles and write them to the UI tree.
    Style,
}

/// Plugin that drives every [`DragSlider`](super::DragSlider) in the app.
pub struct DragSliderPlugin;

impl Plugin for DragSliderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SliderGesturePlugin)
            .init_resource::<SliderConfig>()
            // System ordering
            .configure_sets(
                Update,
                (SliderSet::Measure, SliderSet::Animate, SliderSet::Style).chain(),
            )
            // Startup
            .add_systems(Startup, check_slider_config)
            // Update systems
            .add_systems(
                Update,
                (
                    (measure_track, measure_knob_area).in_set(SliderSet::Measure),
                    animate_sliders.in_set(SliderSet::Animate),
                    (sync_knob_style, sync_gradient_style).in_set(SliderSet::Style),
                ),
            );
    }
}

/// Steps in-flight spring-backs by the frame time.
pub fn animate_sliders(time: Res<Time>, mut sliders: Query<&mut SliderState>) {
    let dt = time.delta_secs();
    for mut state in &mut sliders {
        if state.knob_spring.is_none() {
            continue;
        }
        state.tick(dt);
    }
}
