//! Core domain: app state, frame ordering, camera and coordinate helpers.

pub mod coords;
mod state;
mod systems;


pub use coords::{PLAYFIELD, playfield_point, screen_to_world, world_to_screen};
pub use state::{FrameSet, GameState};

use bevy::prelude::*;

use crate::core::systems::{despawn_loading_text, finish_boot, setup_camera, spawn_loading_text};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(ClearColor(Color::srgb_u8(0x1a, 0x1a, 0x2e)))
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Sense,
                    FrameSet::Animate,
                    FrameSet::Control,
                    FrameSet::Feedback,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Boot), spawn_loading_text)
            .add_systems(OnExit(GameState::Boot), despawn_loading_text)
            .add_systems(Update, finish_boot.run_if(in_state(GameState::Boot)));
    }
}
