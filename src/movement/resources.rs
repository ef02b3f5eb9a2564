//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Locomotion constants. Speeds are pixels per second.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub walk_speed: f32,
    /// Upward speed applied on jump; the controller emits it as `-jump_speed`
    /// in screen space.
    pub jump_speed: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 100.0,
            jump_speed: 420.0,
            gravity: 800.0,
        }
    }
}

/// Player collision box templates, in sprite-frame pixels.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    pub frame_size: f32,
    pub width: f32,
    pub ground_height: f32,
    pub air_height: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            frame_size: 96.0,
            width: 22.0,
            ground_height: 55.0,
            air_height: 35.0,
        }
    }
}

/// Keyboard state sampled once per frame. Directions are held-state, attacks
/// are edges (pressed this frame only).
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub small_attack_pressed: bool,
    pub big_attack_pressed: bool,
}
