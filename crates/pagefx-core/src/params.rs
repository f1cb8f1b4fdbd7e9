//! Tunable parameters for each effect.
//!
//! Every struct defaults to the values in [`crate::constants`]. The web
//! front-end validates them once at startup before wiring anything.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamsError {
    #[error("particle target count must be non-zero")]
    ZeroTargetCount,
    #[error("opacity decay must be positive and finite, got {0}")]
    InvalidDecay(f64),
    #[error("particle radius range is invalid: min={min} span={span}")]
    InvalidRadius { min: f64, span: f64 },
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("reveal threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
}

/// Particle field tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub target_count: usize,
    pub pointer_spawn: usize,
    pub touch_spawn: usize,
    pub radius_min: f64,
    pub radius_span: f64,
    pub speed_span: f64,
    pub opacity_decay: f64,
    pub glow_blur: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            target_count: PARTICLE_TARGET_COUNT,
            pointer_spawn: POINTER_SPAWN_COUNT,
            touch_spawn: TOUCH_SPAWN_COUNT,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_span: PARTICLE_RADIUS_SPAN,
            speed_span: PARTICLE_SPEED_SPAN,
            opacity_decay: PARTICLE_OPACITY_DECAY,
            glow_blur: PARTICLE_GLOW_BLUR,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.target_count == 0 {
            return Err(ParamsError::ZeroTargetCount);
        }
        if !(self.opacity_decay.is_finite() && self.opacity_decay > 0.0) {
            return Err(ParamsError::InvalidDecay(self.opacity_decay));
        }
        if !(self.radius_min.is_finite() && self.radius_span.is_finite())
            || self.radius_min <= 0.0
            || self.radius_span < 0.0
        {
            return Err(ParamsError::InvalidRadius {
                min: self.radius_min,
                span: self.radius_span,
            });
        }
        finite("speed_span", self.speed_span)?;
        finite("glow_blur", self.glow_blur)
    }
}

/// Parallax speed multipliers.
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxParams {
    pub geometry_speed: f64,
    pub default_speed: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            geometry_speed: PARALLAX_SPEED_GEOMETRY,
            default_speed: PARALLAX_SPEED_DEFAULT,
        }
    }
}

impl ParallaxParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        finite("geometry_speed", self.geometry_speed)?;
        finite("default_speed", self.default_speed)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealParams {
    pub threshold: f64,
}

impl Default for RevealParams {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
        }
    }
}

impl RevealParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ParamsError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }
}

#[inline]
fn finite(name: &'static str, value: f64) -> Result<(), ParamsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParamsError::NonFinite { name, value })
    }
}
