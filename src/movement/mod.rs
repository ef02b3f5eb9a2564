//! Movement domain: player body, ground sensing and input sampling.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{
    BodyProfile, Facing, GameLayer, Ground, GroundContact, Player, Wall, player_surface,
};
pub use resources::{BodyTuning, MovementTuning, PlayerInput};

use bevy::prelude::*;

use crate::core::{FrameSet, GameState};
use crate::movement::bootstrap::{apply_world_gravity, spawn_player};
use crate::movement::systems::{detect_ground, read_input, sync_body_collider};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<BodyTuning>()
            .init_resource::<PlayerInput>()
            .add_systems(OnEnter(GameState::Run), (apply_world_gravity, spawn_player))
            .add_systems(
                Update,
                read_input
                    .in_set(FrameSet::Input)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                detect_ground
                    .in_set(FrameSet::Sense)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                sync_body_collider
                    .in_set(FrameSet::Feedback)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
