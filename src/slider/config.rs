//! Configuration for slider layout, styling and gesture response.

use bevy::prelude::*;
use bevy::ui::{LinearGradient, Val};

use super::error::SliderConfigError;
use super::spring::SpringConfig;

/// Configuration for the drag slider.
///
/// Insert a customised copy before adding
/// [`DragSliderPlugin`](super::DragSliderPlugin) to override the defaults.
#[derive(Resource, Clone, Debug)]
pub struct SliderConfig {
    // Layout
    /// Height of the track relative to its parent.
    pub track_height: Val,
    /// Padding inside the track.
    pub track_padding: UiRect,
    /// Diameter of the knob.
    pub knob_diameter: f32,

    // Colors
    /// Track fill behind the gradient.
    pub track_color: Color,
    /// Knob fill.
    pub knob_color: Color,
    /// First and last stop of the gradient backdrop.
    pub gradient_colors: [Color; 2],
    /// Direction of the gradient, in radians (see [`LinearGradient`]).
    pub gradient_angle: f32,
    /// Fill of the area around the slider in the demo.
    pub backdrop_color: Color,

    // Gesture response
    /// Distance kept between the knob travel limit and the half-track height.
    pub knob_guard_margin: f32,
    /// Pixels of gradient inset removed per pixel of drag.
    pub inset_gain: f32,
    /// Drag distance that maps to full gradient opacity.
    pub opacity_distance: f32,
    /// Spring used to return the knob to rest after release.
    pub release_spring: SpringConfig,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            // Layout
            track_height: Val::Percent(40.0),
            track_padding: UiRect::horizontal(Val::Px(8.0)),
            knob_diameter: 44.0,

            // Colors
            track_color: Color::srgb_u8(0x44, 0x40, 0x3c),
            knob_color: Color::WHITE,
            gradient_colors: [
                Color::srgb_u8(0x4a, 0x90, 0xe2),
                Color::srgb_u8(0xf7, 0x6d, 0x57),
            ],
            gradient_angle: LinearGradient::TO_BOTTOM_RIGHT,
            backdrop_color: Color::BLACK,

            // Gesture response
            knob_guard_margin: 28.0,
            inset_gain: 2.5,
            opacity_distance: 100.0,
            release_spring: SpringConfig::RELEASE,
        }
    }
}

impl SliderConfig {
    /// Checks every numeric field the gesture and animation paths rely on.
    pub fn validate(&self) -> Result<(), SliderConfigError> {
        self.release_spring.validate()?;

        if !self.opacity_distance.is_finite() || self.opacity_distance <= 0.0 {
            return Err(SliderConfigError::NonPositiveOpacityDistance(
                self.opacity_distance,
            ));
        }

        for (field, value) in [
            ("inset gain", self.inset_gain),
            ("knob guard margin", self.knob_guard_margin),
            ("knob diameter", self.knob_diameter),
            ("gradient angle", self.gradient_angle),
        ] {
            if !value.is_finite() {
                return Err(SliderConfigError::NonFinite { field, value });
            }
        }

        Ok(())
    }
}

/// Replaces an invalid [`SliderConfig`] with the default one.
pub(crate) fn check_slider_config(mut config: ResMut<SliderConfig>) {
    if let Err(err) = config.validate() {
        error!("Invalid slider config, falling back to defaults: {err}");
        *config = SliderConfig::default();
    }
    debug!(
        "Release spring damping ratio: {:.2}",
        config.release_spring.damping_ratio()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SliderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_opacity_distance() {
        let config = SliderConfig {
            opacity_distance: 0.0,
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(SliderConfigError::NonPositiveOpacityDistance(0.0))
        );
    }

    #[test]
    fn rejects_non_finite_gain() {
        let config = SliderConfig {
            inset_gain: f32::INFINITY,
            ..default()
        };
        assert!(matches!(
            config.validate(),
            Err(SliderConfigError::NonFinite {
                field: "inset gain",
                ..
            })
        ));
    }

    #[test]
    fn rejects_bad_spring() {
        let config = SliderConfig {
            release_spring: SpringConfig {
                stiffness: 0.0,
                ..SpringConfig::RELEASE
            },
            ..default()
        };
        assert_eq!(
            config.validate(),
            Err(SliderConfigError::NonPositiveStiffness(0.0))
        );
    }

    #[test]
    fn invalid_config_is_replaced_at_startup() {
        let mut app = App::new();
        app.insert_resource(SliderConfig {
            opacity_distance: -5.0,
            ..default()
        })
        .add_systems(Startup, check_slider_config);

        app.update();

        let config = app.world().resource::<SliderConfig>();
        assert_eq!(config.opacity_distance, 100.0);
    }
}
