//! Core domain: app state and per-frame system ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Tuning and sprite sheets are being loaded.
    #[default]
    Boot,
    /// The arena is live and the player is controllable.
    Run,
}

/// Stages of a single rendered frame, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Poll the keyboard into `PlayerInput`.
    Input,
    /// Sample physics-derived facts (ground contact).
    Sense,
    /// Advance sprite animations and emit completion messages.
    Animate,
    /// Step the player state machine.
    Control,
    /// Apply hit consequences and timed effects to the target.
    Feedback,
    /// Push state into render components.
    Present,
}
