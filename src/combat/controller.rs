//! Combat domain: the player's frame-stepped state machine.
//!
//! `PlayerController::step` is pure with respect to the engine: everything it
//! needs arrives in a `Frame`, and every side effect it wants leaves in a
//! `FrameOutcome`. Velocities in both are screen space (y down).

use bevy::prelude::*;

use crate::combat::hit::{HitOutcome, resolve_hit};
use crate::combat::resources::AttackTuning;
use crate::combat::state::{AttackKind, PlayerState};
use crate::movement::{BodyProfile, BodyTuning, Facing, MovementTuning, PlayerInput};
use crate::sprites::{AnimationClip, PlayMode};

/// Engine facts sampled for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Frame {
    pub delta_ms: f32,
    pub on_ground: bool,
    pub input: PlayerInput,
    /// Attack animation that completed since the previous frame.
    pub finished: Option<AttackKind>,
    pub facing: Facing,
    /// Target position minus player feet, screen space.
    pub target_offset: Option<Vec2>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequest {
    pub clip: AnimationClip,
    pub mode: PlayMode,
}

/// Side effects requested by one controller step. `None` means "leave as is".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub body: BodyProfile,
    pub velocity_x: Option<f32>,
    pub velocity_y: Option<f32>,
    pub facing: Option<Facing>,
    pub animation: Option<AnimationRequest>,
    pub hit: Option<HitOutcome>,
}

impl FrameOutcome {
    fn new(body: BodyProfile) -> Self {
        Self {
            body,
            velocity_x: None,
            velocity_y: None,
            facing: None,
            animation: None,
            hit: None,
        }
    }

    fn play(&mut self, clip: AnimationClip, mode: PlayMode) {
        self.animation = Some(AnimationRequest { clip, mode });
    }
}

/// Borrowed view over the tuning resources the controller reads.
#[derive(Debug, Clone, Copy)]
pub struct ControllerTuning<'a> {
    pub movement: &'a MovementTuning,
    pub body: &'a BodyTuning,
    pub attacks: &'a AttackTuning,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PlayerController {
    state: PlayerState,
    has_hit_this_attack: bool,
    /// Milliseconds; may dip below zero, gating only checks `<= 0`.
    small_attack_cooldown: f32,
    air_attack_cooldown: f32,
}

impl PlayerController {
    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn has_hit_this_attack(&self) -> bool {
        self.has_hit_this_attack
    }

    pub fn small_attack_cooldown(&self) -> f32 {
        self.small_attack_cooldown
    }

    pub fn air_attack_cooldown(&self) -> f32 {
        self.air_attack_cooldown
    }

    pub fn step(&mut self, frame: &Frame, tuning: &ControllerTuning) -> FrameOutcome {
        let mut out = FrameOutcome::new(BodyProfile::for_contact(frame.on_ground, tuning.body));

        if let Some(kind) = frame.finished {
            self.finish_attack(kind, frame.on_ground);
        }

        self.tick_cooldowns(frame.delta_ms);

        if let Some(kind) = self.state.attack_kind() {
            if !self.has_hit_this_attack {
                out.hit = self.check_hit(kind, frame, tuning.attacks);
            }
        }

        let input = frame.input;
        match self.state {
            PlayerState::Idle | PlayerState::Walking => {
                if input.small_attack_pressed && self.small_attack_cooldown <= 0.0 {
                    self.start_small_attack(tuning.attacks, &mut out);
                    return out;
                }
                if input.big_attack_pressed {
                    self.start_big_attack(&mut out);
                    return out;
                }
                if input.up {
                    self.start_jump(tuning.movement, &mut out);
                    return out;
                }
                self.ground_movement(input, tuning.movement, &mut out);
            }
            PlayerState::Jumping | PlayerState::InAir => {
                if input.small_attack_pressed && self.air_attack_cooldown <= 0.0 {
                    self.start_air_attack(tuning.attacks, &mut out);
                    return out;
                }
                self.air_movement(input, tuning.movement, &mut out);
                if frame.on_ground {
                    self.transition(PlayerState::Idle);
                }
            }
            PlayerState::SmallAttack | PlayerState::BigAttack => {
                out.velocity_x = Some(0.0);
            }
            PlayerState::AirAttack => {
                self.air_movement(input, tuning.movement, &mut out);
            }
        }

        out
    }

    /// Apply an attack-animation completion signal. Trusted even when the
    /// state has already moved on.
    pub fn finish_attack(&mut self, kind: AttackKind, on_ground: bool) {
        let next = match kind {
            AttackKind::Small | AttackKind::Big => PlayerState::Idle,
            AttackKind::Air if on_ground => PlayerState::Idle,
            AttackKind::Air => PlayerState::InAir,
        };
        self.transition(next);
    }

    fn tick_cooldowns(&mut self, delta_ms: f32) {
        if self.small_attack_cooldown > 0.0 {
            self.small_attack_cooldown -= delta_ms;
        }
        if self.air_attack_cooldown > 0.0 {
            self.air_attack_cooldown -= delta_ms;
        }
    }

    fn check_hit(
        &mut self,
        kind: AttackKind,
        frame: &Frame,
        tuning: &AttackTuning,
    ) -> Option<HitOutcome> {
        let offset = frame.target_offset?;
        let hit = resolve_hit(kind, offset, frame.facing, tuning)?;
        self.has_hit_this_attack = true;
        Some(hit)
    }

    fn transition(&mut self, next: PlayerState) {
        if self.state != next {
            debug!("Player state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    fn enter_attack(&mut self, kind: AttackKind, out: &mut FrameOutcome) {
        self.transition(kind.state());
        self.has_hit_this_attack = false;
        out.play(kind.clip(), PlayMode::Restart);
    }

    fn start_small_attack(&mut self, tuning: &AttackTuning, out: &mut FrameOutcome) {
        self.enter_attack(AttackKind::Small, out);
        self.small_attack_cooldown = tuning.small_cooldown_ms;
        out.velocity_x = Some(0.0);
    }

    fn start_big_attack(&mut self, out: &mut FrameOutcome) {
        self.enter_attack(AttackKind::Big, out);
        out.velocity_x = Some(0.0);
    }

    fn start_air_attack(&mut self, tuning: &AttackTuning, out: &mut FrameOutcome) {
        self.enter_attack(AttackKind::Air, out);
        self.air_attack_cooldown = tuning.air_cooldown_ms;
    }

    fn start_jump(&mut self, tuning: &MovementTuning, out: &mut FrameOutcome) {
        self.transition(PlayerState::Jumping);
        out.velocity_y = Some(-tuning.jump_speed);
    }

    /// Horizontal steering shared by ground and air. Left wins over right.
    fn steer(input: PlayerInput, tuning: &MovementTuning, out: &mut FrameOutcome) -> bool {
        let facing = if input.left {
            Facing::Left
        } else if input.right {
            Facing::Right
        } else {
            return false;
        };

        out.velocity_x = Some(facing.sign() * tuning.walk_speed);
        out.facing = Some(facing);
        true
    }

    fn ground_movement(&mut self, input: PlayerInput, tuning: &MovementTuning, out: &mut FrameOutcome) {
        if Self::steer(input, tuning, out) {
            self.transition(PlayerState::Walking);
            out.play(AnimationClip::Walk, PlayMode::Continue);
        } else {
            out.velocity_x = Some(0.0);
            self.transition(PlayerState::Idle);
            out.play(AnimationClip::Idle, PlayMode::Continue);
        }
    }

    /// No vertical control; horizontal speed is kept when no direction is held.
    fn air_movement(&mut self, input: PlayerInput, tuning: &MovementTuning, out: &mut FrameOutcome) {
        Self::steer(input, tuning, out);

        if self.state != PlayerState::AirAttack {
            self.transition(PlayerState::InAir);
            out.play(AnimationClip::InAir, PlayMode::Continue);
        }
    }
}
