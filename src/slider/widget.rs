//! Slider entity hierarchy: track, gradient backdrop, knob area and knob.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::picking::Pickable;
use bevy::picking::pointer::{PointerButton, PointerId};
use bevy::prelude::*;
use bevy::ui::Val::*;

use super::config::SliderConfig;
use super::state::SliderState;
use super::style::gradient_fill;

/// Marker for the track entity. Carries the slider's [`SliderState`].
#[derive(Component)]
#[require(SliderState)]
pub struct DragSlider;

/// The draggable knob.
#[derive(Component, Debug)]
pub struct SliderKnob {
    /// Track entity this knob belongs to.
    pub slider: Entity,
    /// Pointer and button currently dragging the knob.
    pub active_pointer: Option<(PointerId, PointerButton)>,
}

impl SliderKnob {
    /// Claims the knob for a primary-button drag. Fails while another drag
    /// holds it.
    pub fn claim(&mut self, pointer: PointerId, button: PointerButton) -> bool {
        if button != PointerButton::Primary || self.active_pointer.is_some() {
            return false;
        }
        self.active_pointer = Some((pointer, button));
        true
    }

    /// Whether this exact pointer and button own the current drag.
    pub fn is_held_by(&self, pointer: PointerId, button: PointerButton) -> bool {
        self.active_pointer == Some((pointer, button))
    }
}

/// The gradient backdrop layer.
#[derive(Component, Debug)]
pub struct SliderGradient {
    pub slider: Entity,
}

/// The container centering the knob inside the track.
#[derive(Component, Debug)]
pub struct SliderKnobArea {
    pub slider: Entity,
}

/// Spawns a slider under `parent` and returns the track entity.
pub fn spawn_drag_slider(parent: &mut ChildSpawnerCommands<'_>, config: &SliderConfig) -> Entity {
    let mut track = parent.spawn((
        Node {
            height: config.track_height,
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            padding: config.track_padding,
            ..default()
        },
        BackgroundColor(config.track_color),
        BorderRadius::MAX,
        DragSlider,
    ));
    let slider = track.id();

    track.with_children(|track| {
        // Gradient backdrop, faded out until the first knob drag.
        track.spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Px(0.0),
                right: Px(0.0),
                top: Px(0.0),
                bottom: Px(0.0),
                ..default()
            },
            gradient_fill(config, 0.0),
            BorderRadius::MAX,
            Pickable::IGNORE,
            SliderGradient { slider },
        ));

        track
            .spawn((
                Node {
                    flex_grow: 1.0,
                    width: Percent(100.0),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    justify_content: JustifyContent::Center,
                    ..default()
                },
                Pickable::IGNORE,
                SliderKnobArea { slider },
            ))
            .with_children(|area| {
                area.spawn((
                    Node {
                        width: Px(config.knob_diameter),
                        height: Px(config.knob_diameter),
                        ..default()
                    },
                    UiTransform::IDENTITY,
                    BackgroundColor(config.knob_color),
                    BorderRadius::MAX,
                    SliderKnob {
                        slider,
                        active_pointer: None,
                    },
                ));
            });
    });

    info!("Drag slider spawned: {:?}", slider);
    slider
}
