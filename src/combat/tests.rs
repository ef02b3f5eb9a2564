//! Combat domain: tests for the controller, hit geometry and blink schedule.

use bevy::prelude::{Color, Vec2};

use super::{
    AttackKind, AttackTuning, BlinkSchedule, ControllerTuning, Frame, FrameOutcome,
    PlayerController, PlayerState, TintAction, in_reach, knockback, resolve_hit, tinted_color,
};
use crate::movement::{BodyTuning, Facing, MovementTuning, PlayerInput};
use crate::sprites::{AnimationClip, PlayMode};

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

struct Rig {
    movement: MovementTuning,
    body: BodyTuning,
    attacks: AttackTuning,
    controller: PlayerController,
}

impl Rig {
    fn new() -> Self {
        Self {
            movement: MovementTuning::default(),
            body: BodyTuning::default(),
            attacks: AttackTuning::default(),
            controller: PlayerController::default(),
        }
    }

    fn step(&mut self, frame: Frame) -> FrameOutcome {
        let tuning = ControllerTuning {
            movement: &self.movement,
            body: &self.body,
            attacks: &self.attacks,
        };
        self.controller.step(&frame, &tuning)
    }

    fn state(&self) -> PlayerState {
        self.controller.state()
    }
}

fn grounded(input: PlayerInput) -> Frame {
    Frame {
        delta_ms: 16.0,
        on_ground: true,
        input,
        ..Default::default()
    }
}

fn airborne(input: PlayerInput) -> Frame {
    Frame {
        on_ground: false,
        ..grounded(input)
    }
}

fn small_press() -> PlayerInput {
    PlayerInput {
        small_attack_pressed: true,
        ..Default::default()
    }
}

fn big_press() -> PlayerInput {
    PlayerInput {
        big_attack_pressed: true,
        ..Default::default()
    }
}

fn up_held() -> PlayerInput {
    PlayerInput {
        up: true,
        ..Default::default()
    }
}

/// Put the rig airborne in `InAir`.
fn launch(rig: &mut Rig) {
    rig.step(grounded(up_held()));
    rig.step(airborne(PlayerInput::default()));
    assert_eq!(rig.state(), PlayerState::InAir);
}

// -----------------------------------------------------------------------------
// Hit geometry
// -----------------------------------------------------------------------------

#[test]
fn test_small_attack_reach_facing_right() {
    let tuning = AttackTuning::default();
    let hits = |x: f32, y: f32| in_reach(AttackKind::Small, Vec2::new(x, y), Facing::Right, &tuning);

    assert!(hits(30.0, -30.0));
    assert!(!hits(60.0, -30.0));
    assert!(!hits(-10.0, -30.0));
    assert!(hits(-5.0, -30.0));
    assert!(hits(55.0, -50.0));
    assert!(hits(55.0, -10.0));
    assert!(!hits(30.0, -51.0));
    assert!(!hits(30.0, -9.0));
}

#[test]
fn test_small_attack_reach_is_mirrored_facing_left() {
    let tuning = AttackTuning::default();
    let hits = |x: f32, y: f32| in_reach(AttackKind::Small, Vec2::new(x, y), Facing::Left, &tuning);

    assert!(hits(-30.0, -30.0));
    assert!(hits(5.0, -30.0));
    assert!(!hits(10.0, -30.0));
    assert!(!hits(-60.0, -30.0));
}

#[test]
fn test_big_attack_radius_is_inclusive() {
    let tuning = AttackTuning::default();

    // Centre is 30 above the feet; 65 further up is exactly on the edge.
    assert!(in_reach(AttackKind::Big, Vec2::new(0.0, -95.0), Facing::Right, &tuning));
    assert!(!in_reach(AttackKind::Big, Vec2::new(0.0, -96.0), Facing::Right, &tuning));
    assert!(in_reach(AttackKind::Big, Vec2::new(0.0, 35.0), Facing::Left, &tuning));
    assert!(!in_reach(AttackKind::Big, Vec2::new(0.0, 36.0), Facing::Left, &tuning));
}

#[test]
fn test_big_attack_excludes_targets_behind() {
    let tuning = AttackTuning::default();

    assert!(in_reach(AttackKind::Big, Vec2::new(-10.0, -30.0), Facing::Right, &tuning));
    assert!(!in_reach(AttackKind::Big, Vec2::new(-11.0, -30.0), Facing::Right, &tuning));
    assert!(in_reach(AttackKind::Big, Vec2::new(10.0, -30.0), Facing::Left, &tuning));
    assert!(!in_reach(AttackKind::Big, Vec2::new(11.0, -30.0), Facing::Left, &tuning));
}

#[test]
fn test_air_attack_zone_is_smaller_and_lower() {
    let tuning = AttackTuning::default();

    assert!(in_reach(AttackKind::Air, Vec2::new(0.0, -68.0), Facing::Right, &tuning));
    assert!(!in_reach(AttackKind::Air, Vec2::new(0.0, -69.0), Facing::Right, &tuning));
    assert!(in_reach(AttackKind::Air, Vec2::new(50.0, -18.0), Facing::Right, &tuning));
    assert!(!in_reach(AttackKind::Air, Vec2::new(60.0, -30.0), Facing::Right, &tuning));
    // Same offset is inside the big swing.
    assert!(in_reach(AttackKind::Big, Vec2::new(60.0, -30.0), Facing::Right, &tuning));
}

#[test]
fn test_knockback_follows_facing() {
    let tuning = AttackTuning::default();
    assert_eq!(knockback(Facing::Right, &tuning), Vec2::new(500.0, -350.0));
    assert_eq!(knockback(Facing::Left, &tuning), Vec2::new(-500.0, -350.0));
}

#[test]
fn test_resolve_hit_reports_attack_and_knockback() {
    let tuning = AttackTuning::default();

    let hit = resolve_hit(AttackKind::Small, Vec2::new(-20.0, -20.0), Facing::Left, &tuning)
        .expect("target is in reach");
    assert_eq!(hit.attack, AttackKind::Small);
    assert_eq!(hit.knockback, Vec2::new(-500.0, -350.0));

    assert!(resolve_hit(AttackKind::Small, Vec2::new(200.0, 0.0), Facing::Left, &tuning).is_none());
}

// -----------------------------------------------------------------------------
// Ground states
// -----------------------------------------------------------------------------

#[test]
fn test_idle_without_input_stops_and_plays_idle() {
    let mut rig = Rig::new();
    let out = rig.step(grounded(PlayerInput::default()));

    assert_eq!(rig.state(), PlayerState::Idle);
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.animation.map(|a| a.clip), Some(AnimationClip::Idle));
    assert_eq!(out.animation.map(|a| a.mode), Some(PlayMode::Continue));
}

#[test]
fn test_walking_sets_speed_and_facing() {
    let mut rig = Rig::new();

    let out = rig.step(grounded(PlayerInput {
        left: true,
        ..Default::default()
    }));
    assert_eq!(rig.state(), PlayerState::Walking);
    assert_eq!(out.velocity_x, Some(-100.0));
    assert_eq!(out.facing, Some(Facing::Left));
    assert_eq!(out.animation.map(|a| a.clip), Some(AnimationClip::Walk));

    let out = rig.step(grounded(PlayerInput {
        right: true,
        ..Default::default()
    }));
    assert_eq!(out.velocity_x, Some(100.0));
    assert_eq!(out.facing, Some(Facing::Right));

    let out = rig.step(grounded(PlayerInput::default()));
    assert_eq!(rig.state(), PlayerState::Idle);
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.facing, None);
}

#[test]
fn test_left_wins_when_both_directions_held() {
    let mut rig = Rig::new();
    let out = rig.step(grounded(PlayerInput {
        left: true,
        right: true,
        ..Default::default()
    }));

    assert_eq!(out.velocity_x, Some(-100.0));
}

#[test]
fn test_jump_sets_exact_vertical_velocity() {
    let mut rig = Rig::new();
    let out = rig.step(grounded(PlayerInput {
        up: true,
        right: true,
        ..Default::default()
    }));

    assert_eq!(rig.state(), PlayerState::Jumping);
    assert_eq!(out.velocity_y, Some(-420.0));
    // Jump returns before ground movement.
    assert_eq!(out.velocity_x, None);
    assert_eq!(out.animation, None);
}

#[test]
fn test_small_attack_entry() {
    let mut rig = Rig::new();
    let out = rig.step(grounded(small_press()));

    assert_eq!(rig.state(), PlayerState::SmallAttack);
    assert!(!rig.controller.has_hit_this_attack());
    assert_eq!(rig.controller.small_attack_cooldown(), 200.0);
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.animation.map(|a| a.clip), Some(AnimationClip::SmallAttack));
    assert_eq!(out.animation.map(|a| a.mode), Some(PlayMode::Restart));
}

#[test]
fn test_big_attack_entry_has_no_cooldown() {
    let mut rig = Rig::new();
    rig.step(grounded(big_press()));
    assert_eq!(rig.state(), PlayerState::BigAttack);

    rig.step(Frame {
        finished: Some(AttackKind::Big),
        ..grounded(big_press())
    });
    assert_eq!(rig.state(), PlayerState::BigAttack);
}

#[test]
fn test_simultaneous_presses_prefer_small_attack() {
    let mut rig = Rig::new();
    rig.step(grounded(PlayerInput {
        small_attack_pressed: true,
        big_attack_pressed: true,
        up: true,
        ..Default::default()
    }));

    assert_eq!(rig.state(), PlayerState::SmallAttack);
}

#[test]
fn test_small_attack_is_gated_by_cooldown() {
    let mut rig = Rig::new();
    rig.step(grounded(small_press()));

    // Swing ends; 100ms of cooldown remain after this frame.
    rig.step(Frame {
        delta_ms: 100.0,
        finished: Some(AttackKind::Small),
        ..grounded(PlayerInput::default())
    });
    assert_eq!(rig.state(), PlayerState::Idle);

    rig.step(Frame {
        delta_ms: 50.0,
        ..grounded(small_press())
    });
    assert_eq!(rig.state(), PlayerState::Idle);
    assert_eq!(rig.controller.small_attack_cooldown(), 50.0);

    rig.step(Frame {
        delta_ms: 50.0,
        ..grounded(small_press())
    });
    assert_eq!(rig.state(), PlayerState::SmallAttack);
}

#[test]
fn test_cooldown_may_go_negative_but_never_rises_on_its_own() {
    let mut rig = Rig::new();
    rig.step(grounded(small_press()));

    let mut previous = rig.controller.small_attack_cooldown();
    for _ in 0..20 {
        rig.step(Frame {
            delta_ms: 33.0,
            ..grounded(PlayerInput::default())
        });
        let current = rig.controller.small_attack_cooldown();
        assert!(current <= previous);
        previous = current;
    }

    // 200 - 7 * 33 = -31: stops ticking once it crossed zero.
    assert_eq!(previous, -31.0);
}

#[test]
fn test_attack_states_lock_horizontal_velocity_and_ignore_input() {
    let mut rig = Rig::new();
    rig.step(grounded(big_press()));

    let out = rig.step(grounded(PlayerInput {
        left: true,
        up: true,
        small_attack_pressed: true,
        ..Default::default()
    }));

    assert_eq!(rig.state(), PlayerState::BigAttack);
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.velocity_y, None);
    assert_eq!(out.facing, None);
    assert_eq!(out.animation, None);
}

// -----------------------------------------------------------------------------
// Air states
// -----------------------------------------------------------------------------

#[test]
fn test_jumping_becomes_in_air_then_lands() {
    let mut rig = Rig::new();
    rig.step(grounded(up_held()));

    let out = rig.step(airborne(PlayerInput::default()));
    assert_eq!(rig.state(), PlayerState::InAir);
    assert_eq!(out.animation.map(|a| a.clip), Some(AnimationClip::InAir));
    // No direction held: horizontal speed is left alone.
    assert_eq!(out.velocity_x, None);

    rig.step(grounded(PlayerInput::default()));
    assert_eq!(rig.state(), PlayerState::Idle);
}

#[test]
fn test_air_steering_has_no_vertical_control() {
    let mut rig = Rig::new();
    launch(&mut rig);

    let out = rig.step(airborne(PlayerInput {
        up: true,
        right: true,
        ..Default::default()
    }));

    assert_eq!(out.velocity_x, Some(100.0));
    assert_eq!(out.velocity_y, None);
    assert_eq!(rig.state(), PlayerState::InAir);
}

#[test]
fn test_air_attack_entry_and_steering() {
    let mut rig = Rig::new();
    launch(&mut rig);

    let out = rig.step(airborne(small_press()));
    assert_eq!(rig.state(), PlayerState::AirAttack);
    assert_eq!(rig.controller.air_attack_cooldown(), 300.0);
    assert_eq!(out.animation.map(|a| a.clip), Some(AnimationClip::AirAttack));
    assert_eq!(out.velocity_x, None);

    let out = rig.step(airborne(PlayerInput {
        left: true,
        ..Default::default()
    }));
    assert_eq!(rig.state(), PlayerState::AirAttack);
    assert_eq!(out.velocity_x, Some(-100.0));
    assert_eq!(out.facing, Some(Facing::Left));
    assert_eq!(out.animation, None);
}

#[test]
fn test_air_attack_does_not_end_on_landing() {
    let mut rig = Rig::new();
    launch(&mut rig);
    rig.step(airborne(small_press()));

    rig.step(grounded(PlayerInput::default()));
    assert_eq!(rig.state(), PlayerState::AirAttack);
}

#[test]
fn test_air_attack_is_gated_by_its_own_cooldown() {
    let mut rig = Rig::new();
    launch(&mut rig);
    rig.step(airborne(small_press()));
    rig.step(Frame {
        finished: Some(AttackKind::Air),
        ..airborne(PlayerInput::default())
    });
    assert_eq!(rig.state(), PlayerState::InAir);

    rig.step(airborne(small_press()));
    assert_eq!(rig.state(), PlayerState::InAir);
}

// -----------------------------------------------------------------------------
// Completion signals
// -----------------------------------------------------------------------------

#[test]
fn test_ground_attack_completion_returns_to_idle() {
    for (press, kind) in [(small_press(), AttackKind::Small), (big_press(), AttackKind::Big)] {
        let mut rig = Rig::new();
        rig.step(grounded(press));

        rig.step(Frame {
            finished: Some(kind),
            ..grounded(PlayerInput::default())
        });
        assert_eq!(rig.state(), PlayerState::Idle);
    }
}

#[test]
fn test_air_attack_completion_depends_on_ground_contact() {
    let mut rig = Rig::new();
    rig.controller.finish_attack(AttackKind::Air, true);
    assert_eq!(rig.state(), PlayerState::Idle);

    rig.controller.finish_attack(AttackKind::Air, false);
    assert_eq!(rig.state(), PlayerState::InAir);
}

#[test]
fn test_completion_signal_is_trusted_out_of_order() {
    let mut rig = Rig::new();
    launch(&mut rig);

    // A stale small-attack completion still forces Idle.
    rig.controller.finish_attack(AttackKind::Small, false);
    assert_eq!(rig.state(), PlayerState::Idle);
}

// -----------------------------------------------------------------------------
// Hit flag and body box
// -----------------------------------------------------------------------------

#[test]
fn test_one_hit_per_swing() {
    let mut rig = Rig::new();
    let in_reach = Some(Vec2::new(30.0, -30.0));
    let with_target = |input| Frame {
        target_offset: in_reach,
        ..grounded(input)
    };

    // Entry frame: the hit check ran before the state changed.
    let out = rig.step(with_target(small_press()));
    assert_eq!(out.hit, None);
    assert!(!rig.controller.has_hit_this_attack());

    let out = rig.step(with_target(PlayerInput::default()));
    let hit = out.hit.expect("target is in reach");
    assert_eq!(hit.attack, AttackKind::Small);
    assert_eq!(hit.knockback, Vec2::new(500.0, -350.0));
    assert!(rig.controller.has_hit_this_attack());

    let out = rig.step(with_target(PlayerInput::default()));
    assert_eq!(out.hit, None);

    // A new swing resets the flag.
    rig.step(Frame {
        finished: Some(AttackKind::Small),
        ..with_target(PlayerInput::default())
    });
    rig.step(with_target(big_press()));
    assert_eq!(rig.state(), PlayerState::BigAttack);
    assert!(!rig.controller.has_hit_this_attack());
    assert!(rig.step(with_target(PlayerInput::default())).hit.is_some());
}

#[test]
fn test_miss_keeps_checking_until_target_enters_reach() {
    let mut rig = Rig::new();
    rig.step(grounded(small_press()));

    let out = rig.step(Frame {
        target_offset: Some(Vec2::new(120.0, -30.0)),
        ..grounded(PlayerInput::default())
    });
    assert_eq!(out.hit, None);
    assert!(!rig.controller.has_hit_this_attack());

    let out = rig.step(Frame {
        target_offset: Some(Vec2::new(50.0, -30.0)),
        ..grounded(PlayerInput::default())
    });
    assert!(out.hit.is_some());
}

#[test]
fn test_body_box_follows_contact_in_every_state() {
    let mut rig = Rig::new();
    assert_eq!(rig.step(grounded(PlayerInput::default())).body.size.y, 55.0);

    rig.step(grounded(small_press()));
    assert_eq!(rig.state(), PlayerState::SmallAttack);
    assert_eq!(rig.step(airborne(PlayerInput::default())).body.size.y, 35.0);
    assert_eq!(rig.step(grounded(PlayerInput::default())).body.size.y, 55.0);
}

// -----------------------------------------------------------------------------
// Blink schedule
// -----------------------------------------------------------------------------

#[test]
fn test_blink_alternates_and_ends_tinted() {
    let mut blink = BlinkSchedule::default();
    blink.schedule(10, 50.0);
    assert_eq!(blink.pending(), 10);

    let mut fired = Vec::new();
    for _ in 0..10 {
        fired.push(blink.advance(50.0));
    }

    for (index, action) in fired.iter().enumerate() {
        let expected = if (index + 1) % 2 == 0 {
            TintAction::Apply
        } else {
            TintAction::Clear
        };
        assert_eq!(*action, Some(expected));
    }
    assert_eq!(blink.pending(), 0);
    assert_eq!(blink.advance(50.0), None);
}

#[test]
fn test_blink_waits_between_steps() {
    let mut blink = BlinkSchedule::default();
    blink.schedule(10, 50.0);

    assert_eq!(blink.advance(49.0), None);
    assert_eq!(blink.advance(1.0), Some(TintAction::Clear));
    assert_eq!(blink.advance(20.0), None);
}

#[test]
fn test_blink_long_frame_fires_everything_due() {
    let mut blink = BlinkSchedule::default();
    blink.schedule(10, 50.0);

    assert_eq!(blink.advance(500.0), Some(TintAction::Apply));
    assert_eq!(blink.pending(), 0);
}

#[test]
fn test_overlapping_blinks_run_independently() {
    let mut blink = BlinkSchedule::default();
    blink.schedule(10, 50.0);
    blink.advance(25.0);
    blink.schedule(10, 50.0);
    assert_eq!(blink.pending(), 20);

    // First run's step 1 at 50ms, second run's step 1 at 75ms.
    assert_eq!(blink.advance(25.0), Some(TintAction::Clear));
    assert_eq!(blink.pending(), 19);
    assert_eq!(blink.advance(25.0), Some(TintAction::Clear));
    assert_eq!(blink.pending(), 18);
    // First run's step 2 at 100ms.
    assert_eq!(blink.advance(25.0), Some(TintAction::Apply));

    blink.advance(1_000.0);
    assert_eq!(blink.pending(), 0);
}

#[test]
fn test_tinted_color_multiplies_channels() {
    let base = Color::srgb(0.8, 0.2, 0.2);
    let red = Color::srgb(1.0, 0.0, 0.0);
    assert_eq!(tinted_color(base, red), Color::srgba(0.8, 0.0, 0.0, 1.0));
}
