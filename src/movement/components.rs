//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::BodyTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces the player can stand on
    Ground,
    /// Walls and ceiling bounding the playfield
    Wall,
    /// Player character
    Player,
    /// Practice target
    Dummy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 when facing right, -1 when facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Whether the player's feet rest on a `Ground` collider this frame.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundContact {
    pub on_ground: bool,
}

/// The player's collision box, expressed the way the sprite sheet sees it:
/// `size` is the box, `offset` is its top-left corner inside a square frame
/// whose bottom-centre is the entity origin (the feet).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub size: Vec2,
    pub offset: Vec2,
    pub frame_size: f32,
}

impl BodyProfile {
    /// Box template for the given ground-contact flag. Nothing else feeds in.
    pub fn for_contact(on_ground: bool, tuning: &BodyTuning) -> Self {
        let height = if on_ground {
            tuning.ground_height
        } else {
            tuning.air_height
        };

        Self {
            size: Vec2::new(tuning.width, height),
            offset: Vec2::new(
                (tuning.frame_size - tuning.width) / 2.0,
                tuning.frame_size - height,
            ),
            frame_size: tuning.frame_size,
        }
    }

    /// Centre of the box relative to the feet, in world space (y up).
    pub fn local_center(&self) -> Vec2 {
        Vec2::new(
            self.offset.x + self.size.x / 2.0 - self.frame_size / 2.0,
            self.frame_size - self.offset.y - self.size.y / 2.0,
        )
    }

    pub fn collider(&self) -> Collider {
        let center = self.local_center();
        Collider::compound(vec![(
            Position::from_xy(center.x, center.y),
            Rotation::default(),
            Collider::rectangle(self.size.x, self.size.y),
        )])
    }
}

/// Player contact response: no friction and no bounce against anything.
pub fn player_surface() -> (Friction, Restitution) {
    (
        Friction::ZERO.with_combine_rule(CoefficientCombine::Min),
        Restitution::ZERO.with_combine_rule(CoefficientCombine::Min),
    )
}
