//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::state::AttackKind;

/// Emitted on the frame an attack connects with the target.
#[derive(Debug)]
pub struct HitLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub attack: AttackKind,
    /// Target velocity to apply, screen space.
    pub knockback: Vec2,
}

impl Message for HitLanded {}
