//! Tunables for a controller.
//!
//! Both structs here load from partial JSON: missing fields take their defaults.
use raykin_physics::{LayerMask, V2};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// When a controller may jump.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum JumpBehavior {
    #[default]
    CanJumpOnGround,
    CanJumpAnywhere,
    CantJump,
}

impl JumpBehavior {
    pub fn allows_jump(self, grounded: bool) -> bool {
        match self {
            JumpBehavior::CanJumpOnGround => grounded,
            JumpBehavior::CanJumpAnywhere => true,
            JumpBehavior::CantJump => false,
        }
    }
}

/// How a controller moves.  Changes take effect on the next step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerParameters {
    /// Velocity is clamped to `-max_velocity..=max_velocity` on each axis after gravity is applied.
    pub max_velocity: V2,

    /// Steepest walkable surface, in degrees.
    pub slope_limit: f64,

    /// Vertical acceleration in units per second squared.  Negative is down.
    pub gravity: f64,

    pub jump_behavior: JumpBehavior,

    /// Minimum number of seconds between two jumps.
    pub jump_frequency: f64,

    /// Vertical velocity given by [crate::CharacterController::jump].
    pub jump_magnitude: f64,
}

impl Default for ControllerParameters {
    fn default() -> Self {
        ControllerParameters {
            max_velocity: V2::new(f64::MAX, f64::MAX),
            slope_limit: 30.0,
            gravity: -25.0,
            jump_behavior: JumpBehavior::CanJumpOnGround,
            jump_frequency: 0.25,
            jump_magnitude: 12.0,
        }
    }
}

impl ControllerParameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Written so that NaN fails.
        if !(0.0..=90.0).contains(&self.slope_limit) {
            return Err(ConfigError::SlopeLimitOutOfRange(self.slope_limit));
        }

        if !(self.max_velocity.x > 0.0 && self.max_velocity.y > 0.0) {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity));
        }

        if !(self.jump_frequency >= 0.0 && self.jump_frequency.is_finite()) {
            return Err(ConfigError::InvalidJumpFrequency(self.jump_frequency));
        }

        check_finite("gravity", self.gravity)?;
        check_finite("jump_magnitude", self.jump_magnitude)?;
        Ok(())
    }
}

/// How the sweeps place and interpret rays.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastSettings {
    /// How far inside the box rays start.
    pub skin_width: f64,

    /// Rays along the leading vertical edge.
    pub horizontal_rays: usize,

    /// Rays along the leading horizontal edge.
    pub vertical_rays: usize,

    /// Layers which block movement.  Anything else is only reported as an overlap.
    pub platform_mask: LayerMask,

    /// Surfaces at or below this angle in degrees are flat ground.
    pub flat_ground_epsilon: f64,

    /// Tolerance in degrees when comparing a surface against the slope limit.
    pub slope_limit_epsilon: f64,

    /// How far past the box's footprint the slope probe reaches.
    pub slope_probe_extra: f64,
}

impl Default for RaycastSettings {
    fn default() -> Self {
        RaycastSettings {
            skin_width: 0.02,
            horizontal_rays: 8,
            vertical_rays: 4,
            platform_mask: LayerMask::DEFAULT,
            flat_ground_epsilon: 0.0001,
            slope_limit_epsilon: 0.01,
            slope_probe_extra: 0.05,
        }
    }
}

impl RaycastSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.skin_width >= 0.0 && self.skin_width.is_finite()) {
            return Err(ConfigError::InvalidSkinWidth(self.skin_width));
        }

        if self.horizontal_rays < 2 {
            return Err(ConfigError::TooFewRays {
                axis: "Horizontal",
                count: self.horizontal_rays,
            });
        }

        if self.vertical_rays < 2 {
            return Err(ConfigError::TooFewRays {
                axis: "Vertical",
                count: self.vertical_rays,
            });
        }

        check_tolerance("flat_ground_epsilon", self.flat_ground_epsilon)?;
        check_tolerance("slope_limit_epsilon", self.slope_limit_epsilon)?;
        check_tolerance("slope_probe_extra", self.slope_probe_extra)?;
        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}

fn check_tolerance(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}
