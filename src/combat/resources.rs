//! Combat domain: tuning resources.
//!
//! Reach zones are in screen space relative to the player's feet: positive x
//! is in front when facing right, negative y is above the feet.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Rectangular zone in front of the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxReach {
    /// Forward extent.
    pub reach: f32,
    /// How far behind the origin still counts.
    pub back_tolerance: f32,
    /// Highest point of the band (most negative y).
    pub top: f32,
    /// Lowest point of the band.
    pub bottom: f32,
}

/// Circular zone centred above the feet, cut to the forward half.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialReach {
    pub radius: f32,
    /// Height of the circle centre above the feet.
    pub center_height: f32,
    /// How far behind the origin still counts as in front.
    pub back_tolerance: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    pub small_cooldown_ms: f32,
    pub air_cooldown_ms: f32,
    pub small: BoxReach,
    pub big: RadialReach,
    pub air: RadialReach,
    /// Horizontal knockback magnitude, applied in the facing direction.
    pub knockback_x: f32,
    /// Vertical knockback in screen space (negative launches upward).
    pub knockback_y: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            small_cooldown_ms: 200.0,
            air_cooldown_ms: 300.0,
            small: BoxReach {
                reach: 55.0,
                back_tolerance: 5.0,
                top: -50.0,
                bottom: -10.0,
            },
            big: RadialReach {
                radius: 65.0,
                center_height: 30.0,
                back_tolerance: 10.0,
            },
            air: RadialReach {
                radius: 50.0,
                center_height: 18.0,
                back_tolerance: 10.0,
            },
            knockback_x: 500.0,
            knockback_y: -350.0,
        }
    }
}

/// Hit feedback on the target.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTuning {
    /// Number of tint toggles per hit.
    pub blink_steps: u32,
    pub blink_interval_ms: f32,
}

impl Default for FeedbackTuning {
    fn default() -> Self {
        Self {
            blink_steps: 10,
            blink_interval_ms: 50.0,
        }
    }
}
