//! Arena domain: level geometry, target spawn and target drag.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::arena::components::Dummy;
use crate::combat::{BlinkSchedule, Tint, TintPalette, tinted_color};
use crate::core::{PLAYFIELD, playfield_point};
use crate::movement::{GameLayer, Ground, Wall};

const SLAB_HEIGHT: f32 = 32.0;
/// Playfield y of the slab centre; its top is the player's spawn height.
const SLAB_CENTER_Y: f32 = 254.0;
const BOUND_THICKNESS: f32 = 32.0;

const DUMMY_RADIUS: f32 = 16.0;
const DUMMY_SPAWN: (f32, f32) = (380.0, 200.0);
const DUMMY_BOUNCE: f32 = 0.8;
const DUMMY_DRAG: f32 = 50.0;

/// Level geometry restitution. Multiplied by the dummy's bounce, and ignored
/// by the player's `Min` rule.
const LEVEL_RESTITUTION: f32 = 1.0;

/// Frictionless, non-rotating contact for the dummy. `Multiply` outranks the
/// player's `Min` rule, so player contacts stay dead (`0 * bounce`) while
/// level contacts keep the full bounce.
pub(crate) fn dummy_body() -> (LockedAxes, Friction, Restitution) {
    (
        LockedAxes::ROTATION_LOCKED,
        Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
        Restitution::new(DUMMY_BOUNCE).with_combine_rule(CoefficientCombine::Multiply),
    )
}

pub(crate) fn level_restitution() -> Restitution {
    Restitution::new(LEVEL_RESTITUTION)
}

pub(crate) fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.2, 0.2, 0.3);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Dummy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Dummy]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(PLAYFIELD.x, SLAB_HEIGHT)),
            ..default()
        },
        Transform::from_translation(playfield_point(PLAYFIELD.x / 2.0, SLAB_CENTER_Y).extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(PLAYFIELD.x, SLAB_HEIGHT),
        level_restitution(),
        ground_layers,
    ));

    // Bounds: left, right, ceiling. Invisible, just outside the playfield.
    let half = BOUND_THICKNESS / 2.0;
    let bounds = [
        (
            Vec2::new(-half, PLAYFIELD.y / 2.0),
            Vec2::new(BOUND_THICKNESS, PLAYFIELD.y * 2.0),
        ),
        (
            Vec2::new(PLAYFIELD.x + half, PLAYFIELD.y / 2.0),
            Vec2::new(BOUND_THICKNESS, PLAYFIELD.y * 2.0),
        ),
        (
            Vec2::new(PLAYFIELD.x / 2.0, PLAYFIELD.y + half),
            Vec2::new(PLAYFIELD.x * 2.0, BOUND_THICKNESS),
        ),
    ];
    for (center, size) in bounds {
        commands.spawn((
            Wall,
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            level_restitution(),
            wall_layers,
        ));
    }

    info!("Arena spawned ({}x{})", PLAYFIELD.x, PLAYFIELD.y);
}

pub(crate) fn spawn_dummy(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let base_color = Color::srgb_u8(0xcc, 0x33, 0x33);
    let flash_color = Color::srgb_u8(0xff, 0x00, 0x00);

    let palette = TintPalette {
        base: materials.add(base_color),
        tinted: materials.add(tinted_color(base_color, flash_color)),
    };
    let spawn = playfield_point(DUMMY_SPAWN.0, DUMMY_SPAWN.1);

    commands.spawn((
        // Identity & feedback
        (
            Dummy { drag: DUMMY_DRAG },
            Tint::default(),
            BlinkSchedule::default(),
        ),
        // Rendering
        (
            Mesh2d(meshes.add(Circle::new(DUMMY_RADIUS))),
            MeshMaterial2d(palette.base.clone()),
            palette,
        ),
        Transform::from_translation(spawn.extend(0.5)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::circle(DUMMY_RADIUS),
            LinearVelocity::default(),
            dummy_body(),
            CollisionLayers::new(
                GameLayer::Dummy,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Player],
            ),
        ),
    ));

    debug!("Dummy spawned at {:?}", spawn);
}

pub(crate) fn apply_dummy_drag(time: Res<Time>, mut query: Query<(&Dummy, &mut LinearVelocity)>) {
    let dt = time.delta_secs();
    for (dummy, mut velocity) in &mut query {
        velocity.x = dummy.dragged(velocity.x, dt);
    }
}
