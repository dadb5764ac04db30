//! Demonstrates the drag slider.
//!
//! Drag the white knob up or down. The first drag only reveals the gradient;
//! later drags also move the knob, which springs back when released.

use bevy::prelude::*;
use drag_slider::{DragSliderPlugin, SliderConfig, spawn_drag_slider};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Drag Slider".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DragSliderPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands, config: Res<SliderConfig>) {
    commands.spawn(Camera2d);

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(config.backdrop_color),
        ))
        .with_children(|root| {
            spawn_drag_slider(root, &config);
        });
}
