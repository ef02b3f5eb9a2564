//! Combat domain: player state machine, hit resolution and hit feedback.

mod controller;
mod events;
mod feedback;
mod hit;
mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use controller::{AnimationRequest, ControllerTuning, Frame, FrameOutcome, PlayerController};
pub use events::HitLanded;
pub use feedback::{BlinkSchedule, Tint, TintAction, TintPalette, tinted_color};
pub use hit::{HitOutcome, in_reach, knockback, resolve_hit};
pub use resources::{AttackTuning, BoxReach, FeedbackTuning, RadialReach};
pub use state::{AttackKind, PlayerState};

use bevy::prelude::*;

use crate::combat::systems::{
    advance_blink_schedules, apply_hit_feedback, apply_tint_materials, drive_player_controller,
};
use crate::core::{FrameSet, GameState};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .init_resource::<FeedbackTuning>()
            .add_message::<HitLanded>()
            .add_systems(
                Update,
                drive_player_controller
                    .in_set(FrameSet::Control)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                (apply_hit_feedback, advance_blink_schedules)
                    .chain()
                    .in_set(FrameSet::Feedback)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                apply_tint_materials
                    .in_set(FrameSet::Present)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
