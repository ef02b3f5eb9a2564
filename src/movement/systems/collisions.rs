//! Movement domain: ground detection and body-box syncing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyProfile, GameLayer, GroundContact, Player};

/// How far above the feet the ground probe starts.
const PROBE_LIFT: f32 = 2.0;
/// How far below the feet the ground probe still counts as contact.
const PROBE_DEPTH: f32 = 2.0;
/// Upward speed (world px/s) above which the feet count as leaving the ground.
const RISING_SPEED: f32 = 1.0;

/// Grounded when the probe hits and the body is not moving up. Physics steps
/// on its own clock, so the probe can still see the slab on the frame after a
/// jump impulse.
pub(crate) fn is_grounded(probe_hit: bool, vertical_velocity: f32) -> bool {
    probe_hit && vertical_velocity <= RISING_SPEED
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &LinearVelocity, &mut GroundContact), With<Player>>,
) {
    // Only Ground-layer colliders block the feet; the dummy and walls do not.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, velocity, mut contact) in &mut query {
        let ray_origin = transform.translation.truncate() + Vec2::new(0.0, PROBE_LIFT);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            PROBE_LIFT + PROBE_DEPTH,
            true,
            &ground_filter,
        );

        let on_ground = is_grounded(hit.is_some(), velocity.y);
        if on_ground != contact.on_ground {
            debug!("Ground contact changed: on_ground={}", on_ground);
        }
        contact.on_ground = on_ground;
    }
}

/// Rebuild the player's collider whenever the controller picked a different
/// box template.
pub(crate) fn sync_body_collider(
    mut query: Query<(&BodyProfile, &mut Collider), (With<Player>, Changed<BodyProfile>)>,
) {
    for (profile, mut collider) in &mut query {
        *collider = profile.collider();
    }
}
