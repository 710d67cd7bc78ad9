//! Parameter definitions with units and documented semantics.
//!
//! A [`PhyllotaxisConfig`] is built once, validated, and handed to an
//! [`crate::controller::AnimationController`]; it never changes afterwards.

mod lerp;
mod phyllotaxis;
mod scale;

pub use lerp::LerpParams;
pub use phyllotaxis::SpiralParams;
pub use scale::ScaleAnimParams;

use crate::curve::Curve;
use crate::error::ConfigError;
use crate::sink::TrailColor;

/// Complete configuration of one animated trail
#[derive(Debug, Clone, Default)]
pub struct PhyllotaxisConfig {
    pub spiral: SpiralParams,
    pub lerp: LerpParams,
    pub scale: ScaleAnimParams,

    /// Applied to the sink once at activation
    pub trail_color: TrailColor,
}

impl PhyllotaxisConfig {
    /// Reject configurations the controller cannot run meaningfully
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("angle_increment_deg", self.spiral.angle_increment_deg)?;
        check_finite("base_scale", self.spiral.base_scale)?;

        if self.lerp.enabled {
            if self.spiral.max_iteration <= 0 {
                return Err(ConfigError::MaxIterationNotPositive(
                    self.spiral.max_iteration,
                ));
            }
            let (min, max) = self.lerp.speed_range;
            check_finite("lerp speed_range.0", min)?;
            check_finite("lerp speed_range.1", max)?;
            if min < 0.0 || max < 0.0 {
                return Err(ConfigError::NegativeLerpSpeed(min, max));
            }
            if self.lerp.rate_curve.is_none() {
                return Err(ConfigError::MissingCurve { which: "lerp rate" });
            }
        }

        if self.scale.enabled {
            check_finite("scale range.0", self.scale.range.0)?;
            check_finite("scale range.1", self.scale.range.1)?;
            if self.scale.use_curve {
                check_finite("scale anim_rate", self.scale.anim_rate)?;
                if self.scale.curve.is_none() {
                    return Err(ConfigError::MissingCurve {
                        which: "scale animation",
                    });
                }
            }
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

/// Ready-made configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Jump to the next point every frame, spiralling outward forever
    Sunflower,

    /// Lerp out to `max_iteration` and back, indefinitely
    Oscillate,

    /// Lerp out to `max_iteration`, then restart from the start index
    Sawtooth,

    /// Lerp out once and stop
    OneShot,
}

impl Preset {
    pub fn config(self) -> PhyllotaxisConfig {
        let mut config = PhyllotaxisConfig::default();
        match self {
            Preset::Sunflower => {
                config.lerp.enabled = false;
                config.scale.enabled = true;
                config.scale.range = (0.8, 1.2);
            }
            Preset::Oscillate => {
                config.spiral.max_iteration = 64;
                config.lerp.repeat = true;
                config.lerp.invert = true;
                config.scale.enabled = true;
                config.scale.use_curve = true;
                config.scale.curve = Some(Curve::SmoothStep.shared());
            }
            Preset::Sawtooth => {
                config.spiral.max_iteration = 96;
                config.lerp.repeat = true;
                config.lerp.invert = false;
                config.lerp.rate_curve = Some(Curve::SmoothStep.shared());
            }
            Preset::OneShot => {
                config.spiral.max_iteration = 128;
                config.lerp.repeat = false;
                config.lerp.invert = false;
            }
        }
        config
    }
}
