//! Combat domain: the player's discrete state and attack kinds.

use crate::sprites::AnimationClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerState {
    #[default]
    Idle,
    Walking,
    Jumping,
    InAir,
    SmallAttack,
    BigAttack,
    AirAttack,
}

impl PlayerState {
    pub fn attack_kind(self) -> Option<AttackKind> {
        match self {
            PlayerState::SmallAttack => Some(AttackKind::Small),
            PlayerState::BigAttack => Some(AttackKind::Big),
            PlayerState::AirAttack => Some(AttackKind::Air),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Small,
    Big,
    Air,
}

impl AttackKind {
    pub fn state(self) -> PlayerState {
        match self {
            AttackKind::Small => PlayerState::SmallAttack,
            AttackKind::Big => PlayerState::BigAttack,
            AttackKind::Air => PlayerState::AirAttack,
        }
    }

    pub fn clip(self) -> AnimationClip {
        match self {
            AttackKind::Small => AnimationClip::SmallAttack,
            AttackKind::Big => AnimationClip::BigAttack,
            AttackKind::Air => AnimationClip::AirAttack,
        }
    }

    /// The attack whose animation is `clip`, if any.
    pub fn from_clip(clip: AnimationClip) -> Option<Self> {
        match clip {
            AnimationClip::SmallAttack => Some(AttackKind::Small),
            AnimationClip::BigAttack => Some(AttackKind::Big),
            AnimationClip::AirAttack => Some(AttackKind::Air),
            _ => None,
        }
    }
}
