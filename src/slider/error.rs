//! Errors reported when validating slider configuration.

use thiserror::Error;

/// A [`SliderConfig`](super::SliderConfig) value that cannot drive the widget.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SliderConfigError {
    #[error("spring mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),

    #[error("spring stiffness must be positive and finite, got {0}")]
    NonPositiveStiffness(f32),

    #[error("spring damping must be non-negative and finite, got {0}")]
    NegativeDamping(f32),

    #[error("opacity distance must be positive and finite, got {0}")]
    NonPositiveOpacityDistance(f32),

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
}
