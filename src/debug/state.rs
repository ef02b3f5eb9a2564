//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the controller info overlay is visible
    pub show_info: bool,
}
