//! Arena domain: components for the practice target.

use bevy::prelude::*;

/// The practice target. `drag` slows its horizontal motion, px/s^2.
#[derive(Component, Debug, Clone, Copy)]
pub struct Dummy {
    pub drag: f32,
}

impl Dummy {
    /// Horizontal speed after `dt` seconds of drag. Never overshoots zero.
    pub fn dragged(&self, vx: f32, dt: f32) -> f32 {
        let slowed = vx.abs() - self.drag * dt;
        if slowed <= 0.0 { 0.0 } else { slowed * vx.signum() }
    }
}
