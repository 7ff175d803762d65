//! Animation configuration

use crate::{AnimError, AnimResult};
use rotopix_transform::{RenderOptions, SampleFill};

/// Default angle step: one full turn every 30 frames.
pub const DEGREES_PER_FRAME: f64 = 360.0 / 30.0;

/// Options for an animation run
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Angle added after every frame, in degrees
    pub degrees_per_frame: f64,
    /// Out-of-range sampling policy
    pub fill: SampleFill,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            degrees_per_frame: DEGREES_PER_FRAME,
            fill: SampleFill::Black,
        }
    }
}

impl AnimationConfig {
    /// Set the angle step
    pub fn degrees_per_frame(mut self, degrees: f64) -> Self {
        self.degrees_per_frame = degrees;
        self
    }

    /// Set the out-of-range sampling policy
    pub fn fill(mut self, fill: SampleFill) -> Self {
        self.fill = fill;
        self
    }

    /// Check that the step is finite and non-negative.
    ///
    /// A negative step would leave the wrapped angle below 0.
    pub fn validate(&self) -> AnimResult<()> {
        if !self.degrees_per_frame.is_finite() || self.degrees_per_frame < 0.0 {
            return Err(AnimError::InvalidConfig(format!(
                "degrees_per_frame must be finite and >= 0, got {}",
                self.degrees_per_frame
            )));
        }
        Ok(())
    }

    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions::with_fill(self.fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twelve_degrees() {
        let config = AnimationConfig::default();
        assert_eq!(config.degrees_per_frame, 12.0);
        assert_eq!(config.fill, SampleFill::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = AnimationConfig::default()
            .degrees_per_frame(5.0)
            .fill(SampleFill::Clamp);
        assert_eq!(config.degrees_per_frame, 5.0);
        assert_eq!(config.render_options().fill, SampleFill::Clamp);
    }

    #[test]
    fn test_validate_rejects_bad_steps() {
        for step in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                AnimationConfig::default().degrees_per_frame(step).validate(),
                Err(AnimError::InvalidConfig(_))
            ));
        }
    }
}
