//! Debug tooling, compiled with the `dev-tools` feature.
//!
//! - Collider outlines via avian's debug renderer
//! - F1 toggles a controller info overlay

mod state;
mod systems;
mod ui;

use avian2d::prelude::PhysicsDebugPlugin;
use bevy::prelude::*;

pub use state::DebugState;

use crate::core::{FrameSet, GameState};
use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin::default())
            .init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_info, update_debug_info_overlay)
                    .chain()
                    .in_set(FrameSet::Present)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
