//! An animated vertical drag slider for Bevy UI.
//!
//! Built on bevy_ui and bevy_picking.

pub mod slider;

// Re-export the main plugin for convenience
pub use slider::{DragSliderPlugin, SliderConfig, spawn_drag_slider};
