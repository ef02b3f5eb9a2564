//! Sprites module: sprite sheet registration and animation playback.

pub mod animation;
pub mod sheets;


use bevy::prelude::*;

pub use animation::*;
pub use animation::{AnimationClip, AnimationPlayer};
pub use sheets::*;

use crate::core::{FrameSet, GameState};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_systems(Startup, load_sprite_sheets)
            .add_systems(
                Update,
                update_animation_frames
                    .in_set(FrameSet::Animate)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                sync_sprite_frames
                    .in_set(FrameSet::Present)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
