//! Combat domain: systems that bridge the controller to the engine.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::arena::Dummy;
use crate::combat::controller::{ControllerTuning, Frame, PlayerController};
use crate::combat::events::HitLanded;
use crate::combat::feedback::{BlinkSchedule, Tint, TintPalette};
use crate::combat::resources::{AttackTuning, FeedbackTuning};
use crate::combat::state::AttackKind;
use crate::core::{screen_to_world, world_to_screen};
use crate::movement::{
    BodyProfile, BodyTuning, Facing, GroundContact, MovementTuning, Player, PlayerInput,
};
use crate::sprites::{AnimationFinished, AnimationPlayer};

#[allow(clippy::too_many_arguments)]
pub(crate) fn drive_player_controller(
    time: Res<Time>,
    input: Res<PlayerInput>,
    movement: Res<MovementTuning>,
    body: Res<BodyTuning>,
    attacks: Res<AttackTuning>,
    mut finished_events: MessageReader<AnimationFinished>,
    mut hit_events: MessageWriter<HitLanded>,
    targets: Query<(Entity, &Transform), (With<Dummy>, Without<Player>)>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &GroundContact,
            &mut PlayerController,
            &mut Facing,
            &mut BodyProfile,
            &mut LinearVelocity,
            &mut Sprite,
            &mut AnimationPlayer,
        ),
        With<Player>,
    >,
) {
    let tuning = ControllerTuning {
        movement: &movement,
        body: &body,
        attacks: &attacks,
    };
    let delta_ms = time.delta_secs() * 1000.0;
    let finished: Vec<_> = finished_events
        .read()
        .map(|event| (event.entity, event.clip))
        .collect();
    let target = targets.single().ok();

    for (
        entity,
        transform,
        contact,
        mut controller,
        mut facing,
        mut profile,
        mut velocity,
        mut sprite,
        mut animation,
    ) in &mut players
    {
        let feet = transform.translation.truncate();
        let frame = Frame {
            delta_ms,
            on_ground: contact.on_ground,
            input: *input,
            finished: finished
                .iter()
                .filter(|(source, _)| *source == entity)
                .filter_map(|(_, clip)| AttackKind::from_clip(*clip))
                .last(),
            facing: *facing,
            target_offset: target.map(|(_, target_transform)| {
                world_to_screen(target_transform.translation.truncate() - feet)
            }),
        };

        let outcome = controller.step(&frame, &tuning);

        profile.set_if_neq(outcome.body);
        if let Some(vx) = outcome.velocity_x {
            velocity.x = vx;
        }
        if let Some(vy) = outcome.velocity_y {
            velocity.y = screen_to_world(Vec2::new(0.0, vy)).y;
        }
        if let Some(new_facing) = outcome.facing {
            *facing = new_facing;
            sprite.flip_x = new_facing == Facing::Left;
        }
        if let Some(request) = outcome.animation {
            animation.play(request.clip, request.mode);
        }

        if let (Some(hit), Some((target_entity, _))) = (outcome.hit, target) {
            info!(
                "{:?} attack hit {:?}, knockback={:?}",
                hit.attack, target_entity, hit.knockback
            );
            hit_events.write(HitLanded {
                attacker: entity,
                target: target_entity,
                attack: hit.attack,
                knockback: hit.knockback,
            });
        }
    }
}

pub(crate) fn apply_hit_feedback(
    mut hit_events: MessageReader<HitLanded>,
    feedback: Res<FeedbackTuning>,
    mut targets: Query<(&mut LinearVelocity, &mut BlinkSchedule)>,
) {
    for event in hit_events.read() {
        let Ok((mut velocity, mut blink)) = targets.get_mut(event.target) else {
            continue;
        };

        velocity.0 = screen_to_world(event.knockback);
        blink.schedule(feedback.blink_steps, feedback.blink_interval_ms);

        debug!(
            "Blink scheduled on {:?}: {} pending toggles",
            event.target,
            blink.pending()
        );
    }
}

pub(crate) fn advance_blink_schedules(
    time: Res<Time>,
    mut query: Query<(&mut BlinkSchedule, &mut Tint)>,
) {
    let delta_ms = time.delta_secs() * 1000.0;

    for (mut blink, mut tint) in &mut query {
        if let Some(action) = blink.advance(delta_ms) {
            let mut next = *tint;
            next.apply(action);
            tint.set_if_neq(next);
        }
    }
}

pub(crate) fn apply_tint_materials(
    mut query: Query<(&Tint, &TintPalette, &mut MeshMaterial2d<ColorMaterial>), Changed<Tint>>,
) {
    for (tint, palette, mut material) in &mut query {
        material.0 = if tint.active {
            palette.tinted.clone()
        } else {
            palette.base.clone()
        };
    }
}
