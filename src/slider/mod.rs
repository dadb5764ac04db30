//! Drag slider widget.
//!
//! A circular knob dragged vertically inside a rounded track, over a gradient
//! backdrop whose visible window follows the drag. Releasing the knob springs
//! it back to rest.

pub mod config;
pub mod error;
pub mod gesture;
pub mod layout;
pub mod plugin;
pub mod spring;
pub mod state;
pub mod style;
pub mod widget;

pub use config::SliderConfig;
pub use error::SliderConfigError;
pub use gesture::{GestureKind, SliderGesture, SliderGesturePlugin};
pub use plugin::{DragSliderPlugin, SliderSet};
pub use spring::{Spring, SpringConfig};
pub use state::{SliderLayout, SliderPhase, SliderState};
pub use style::{Extrapolation, ExtrapolationConfig, GradientStyle, KnobStyle, interpolate};
pub use widget::{DragSlider, SliderGradient, SliderKnob, SliderKnobArea, spawn_drag_slider};
