//! Arena domain: the playfield geometry and the practice target.

mod components;
mod systems;


pub use components::Dummy;

use bevy::prelude::*;

use crate::arena::systems::{apply_dummy_drag, spawn_arena, spawn_dummy};
use crate::core::{FrameSet, GameState};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), (spawn_arena, spawn_dummy))
            .add_systems(
                Update,
                apply_dummy_drag
                    .in_set(FrameSet::Feedback)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
