//! Gesture recognizer: turns pointer drags on the knob into slider updates.
//!
//! Picking observers translate `Pointer<DragStart | Drag | DragEnd | Cancel>` on a
//! knob into [`SliderGesture`] events, which a second observer applies to the
//! slider's [`SliderState`]. Only one pointer and button drive a knob at a
//! time; a cancelled pointer ends its drag like a release.

use bevy::ecs::entity::Entity;
use bevy::ecs::event::Event;
use bevy::ecs::observer::On;
use bevy::picking::events::{Cancel, Drag, DragEnd, DragStart, Pointer};
use bevy::prelude::*;

use super::config::SliderConfig;
use super::state::SliderState;
use super::widget::SliderKnob;

/// A gesture step for one slider.
#[derive(Event, Clone, Debug)]
pub struct SliderGesture {
    /// Track entity carrying the [`SliderState`].
    pub slider: Entity,
    pub kind: GestureKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    Begin,
    /// Cumulative vertical translation from where the drag started, in
    /// logical pixels, positive downward.
    Update { translation_y: f32 },
    End,
}

// Observer: claim the knob for the first primary-button pointer
fn knob_on_drag_start(
    mut drag_start: On<Pointer<DragStart>>,
    mut q_knob: Query<&mut SliderKnob>,
    mut commands: Commands,
) {
    let Ok(mut knob) = q_knob.get_mut(drag_start.entity) else {
        return;
    };
    drag_start.propagate(false);

    if !knob.claim(drag_start.pointer_id, drag_start.button) {
        return;
    }

    commands.trigger(SliderGesture {
        slider: knob.slider,
        kind: GestureKind::Begin,
    });
}

// Observer: forward movement samples from the owning pointer and button
fn knob_on_drag(
    mut drag: On<Pointer<Drag>>,
    q_knob: Query<&SliderKnob>,
    mut commands: Commands,
) {
    let Ok(knob) = q_knob.get(drag.entity) else {
        return;
    };
    drag.propagate(false);

    if !knob.is_held_by(drag.pointer_id, drag.button) {
        return;
    }

    commands.trigger(SliderGesture {
        slider: knob.slider,
        kind: GestureKind::Update {
            translation_y: drag.distance.y,
        },
    });
}

// Observer: release the knob
fn knob_on_drag_end(
    mut drag_end: On<Pointer<DragEnd>>,
    mut q_knob: Query<&mut SliderKnob>,
    mut commands: Commands,
) {
    let Ok(mut knob) = q_knob.get_mut(drag_end.entity) else {
        return;
    };
    drag_end.propagate(false);

    if !knob.is_held_by(drag_end.pointer_id, drag_end.button) {
        return;
    }

    knob.active_pointer = None;
    commands.trigger(SliderGesture {
        slider: knob.slider,
        kind: GestureKind::End,
    });
}

// Observer: a cancelled pointer gets no DragEnd, so release here instead
fn knob_on_cancel(
    mut cancel: On<Pointer<Cancel>>,
    mut q_knob: Query<&mut SliderKnob>,
    mut commands: Commands,
) {
    let Ok(mut knob) = q_knob.get_mut(cancel.entity) else {
        return;
    };
    cancel.propagate(false);

    if !knob
        .active_pointer
        .is_some_and(|(pointer, _)| pointer == cancel.pointer_id)
    {
        return;
    }

    debug!("Pointer {:?} cancelled on knob {:?}", cancel.pointer_id, cancel.entity);
    knob.active_pointer = None;
    commands.trigger(SliderGesture {
        slider: knob.slider,
        kind: GestureKind::End,
    });
}

/// Observer: applies a gesture step to the slider state.
pub fn apply_slider_gesture(
    gesture: On<SliderGesture>,
    config: Res<SliderConfig>,
    mut q_slider: Query<&mut SliderState>,
) {
    let Ok(mut state) = q_slider.get_mut(gesture.slider) else {
        warn!("Gesture for {:?}, which is not a slider", gesture.slider);
        return;
    };

    match gesture.kind {
        GestureKind::Begin => {
            state.begin_drag();
            debug!("Slider {:?} drag started", gesture.slider);
        }
        GestureKind::Update { translation_y } => {
            state.apply_drag(translation_y, &config);
        }
        GestureKind::End => {
            debug!(
                "Slider {:?} released at offset {}",
                gesture.slider, state.offset_y
            );
            state.end_drag(&config);
        }
    }
}

/// Plugin that adds the knob gesture observers.
pub struct SliderGesturePlugin;

impl Plugin for SliderGesturePlugin {
    fn build(&self, app: &mut App) {
        app
            // Pointer input
            .add_observer(knob_on_drag_start)
            .add_observer(knob_on_drag)
            .add_observer(knob_on_drag_end)
            .add_observer(knob_on_cancel)
            // State updates
            .add_observer(apply_slider_gesture);
    }
}
