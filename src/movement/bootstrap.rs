//! Movement domain: player spawn and world gravity setup.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::combat::PlayerController;
use crate::core::playfield_point;
use crate::movement::{
    BodyProfile, BodyTuning, Facing, GameLayer, GroundContact, MovementTuning, Player,
    player_surface,
};
use crate::sprites::{AnimationClip, AnimationPlayer, SpriteSheets};

/// Playfield position of the player's feet at spawn.
const PLAYER_SPAWN: (f32, f32) = (240.0, 238.0);

pub(crate) fn apply_world_gravity(mut commands: Commands, tuning: Res<MovementTuning>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));
    debug!("World gravity set to {}", tuning.gravity);
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    body_tuning: Res<BodyTuning>,
    sheets: Res<SpriteSheets>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // The player spawns standing on the ground slab.
    let body = BodyProfile::for_contact(true, &body_tuning);
    let sprite = sheets.sprite_for(AnimationClip::Idle).unwrap_or_else(|| {
        warn!("Idle sprite sheet missing, player will render without art");
        Sprite::default()
    });
    let spawn = playfield_point(PLAYER_SPAWN.0, PLAYER_SPAWN.1);

    info!("Spawning player at {:?}", spawn);

    commands.spawn((
        // Identity & control
        (
            Player,
            PlayerController::default(),
            Facing::default(),
            GroundContact::default(),
            body,
        ),
        // Rendering: the entity origin is the feet
        (
            sprite,
            Anchor::BOTTOM_CENTER,
            AnimationPlayer::new(AnimationClip::Idle),
        ),
        Transform::from_translation(spawn.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            body.collider(),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            player_surface(),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Dummy],
            ),
        ),
    ));
}
