//! Combat domain: per-attack hit geometry.

use bevy::prelude::*;

use crate::combat::resources::{AttackTuning, BoxReach, RadialReach};
use crate::combat::state::AttackKind;
use crate::movement::Facing;

/// A landed hit. `knockback` is the target's new velocity in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub attack: AttackKind,
    pub knockback: Vec2,
}

impl BoxReach {
    pub fn contains(&self, offset: Vec2, facing: Facing) -> bool {
        let in_front = match facing {
            Facing::Right => offset.x >= -self.back_tolerance && offset.x <= self.reach,
            Facing::Left => offset.x <= self.back_tolerance && offset.x >= -self.reach,
        };
        let in_band = offset.y >= self.top && offset.y <= self.bottom;

        in_front && in_band
    }
}

impl RadialReach {
    pub fn contains(&self, offset: Vec2, facing: Facing) -> bool {
        let from_center = offset + Vec2::new(0.0, self.center_height);
        let in_front = match facing {
            Facing::Right => offset.x >= -self.back_tolerance,
            Facing::Left => offset.x <= self.back_tolerance,
        };

        from_center.length() <= self.radius && in_front
    }
}

/// Whether a target at `offset` (target minus player, screen space) is inside
/// the zone of `attack`.
pub fn in_reach(attack: AttackKind, offset: Vec2, facing: Facing, tuning: &AttackTuning) -> bool {
    match attack {
        AttackKind::Small => tuning.small.contains(offset, facing),
        AttackKind::Big => tuning.big.contains(offset, facing),
        AttackKind::Air => tuning.air.contains(offset, facing),
    }
}

pub fn knockback(facing: Facing, tuning: &AttackTuning) -> Vec2 {
    Vec2::new(facing.sign() * tuning.knockback_x, tuning.knockback_y)
}

pub fn resolve_hit(
    attack: AttackKind,
    offset: Vec2,
    facing: Facing,
    tuning: &AttackTuning,
) -> Option<HitOutcome> {
    in_reach(attack, offset, facing, tuning).then(|| HitOutcome {
        attack,
        knockback: knockback(facing, tuning),
    })
}
