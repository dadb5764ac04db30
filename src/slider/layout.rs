//! Copies measured node sizes into slider state.

use bevy::prelude::*;

use super::state::{SliderLayout, SliderState};
use super::widget::{DragSlider, SliderKnobArea};

/// Converts a computed node size from physical to logical pixels.
pub fn logical_size(computed: &ComputedNode) -> Vec2 {
    computed.size() * computed.inverse_scale_factor()
}

impl SliderLayout {
    /// Records the track height. Returns true if it changed.
    pub fn record_wrapper(&mut self, height: f32) -> bool {
        if self.wrapper_height == height {
            return false;
        }
        self.wrapper_height = height;
        true
    }

    /// Records the knob area size. Returns true if it changed.
    pub fn record_track(&mut self, size: Vec2) -> bool {
        if self.track_width == size.x && self.track_height == size.y {
            return false;
        }
        self.track_width = size.x;
        self.track_height = size.y;
        true
    }
}

/// System: stores the track height whenever layout recomputes it.
pub fn measure_track(
    mut sliders: Query<
        (Entity, &ComputedNode, &mut SliderState),
        (With<DragSlider>, Changed<ComputedNode>),
    >,
) {
    for (entity, computed, mut state) in &mut sliders {
        let height = logical_size(computed).y;
        if state.bypass_change_detection().layout.record_wrapper(height) {
            state.set_changed();
            debug!("Slider {:?} track height: {}", entity, height);
        }
    }
}

/// System: stores the knob area size whenever layout recomputes it.
pub fn measure_knob_area(
    areas: Query<(&SliderKnobArea, &ComputedNode), Changed<ComputedNode>>,
    mut sliders: Query<&mut SliderState>,
) {
    for (area, computed) in &areas {
        let Ok(mut state) = sliders.get_mut(area.slider) else {
            continue;
        };
        if state
            .bypass_change_detection()
            .layout
            .record_track(logical_size(computed))
        {
            state.set_changed();
        }
    }
}
