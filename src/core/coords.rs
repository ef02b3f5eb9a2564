//! Core domain: conversions between world space and playfield screen space.
//!
//! Gameplay rules (reach zones, jump and knockback velocities) are authored in
//! screen space: x grows right, y grows *down*, units are playfield pixels.
//! Bevy and avian work in world space with y growing up. The world origin is
//! the bottom-left corner of the playfield.

use bevy::prelude::*;

/// Logical size of the playfield in pixels.
pub const PLAYFIELD: Vec2 = Vec2::new(480.0, 270.0);

/// Convert a screen-space vector (offset or velocity) into world space.
pub fn screen_to_world(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Convert a world-space vector (offset or velocity) into screen space.
pub fn world_to_screen(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// World position of a point given in playfield screen coordinates.
pub fn playfield_point(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, PLAYFIELD.y - y)
}
