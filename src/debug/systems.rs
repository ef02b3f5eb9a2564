//! Debug domain: overlay toggle and refresh.

use bevy::prelude::*;

use crate::combat::PlayerController;
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, overlay_text, spawn_debug_info_overlay};
use crate::movement::{GroundContact, Player};

pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", if debug_state.show_info { "ON" } else { "OFF" });
    }
}

/// Update the debug info overlay with current controller state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&PlayerController, &GroundContact), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((controller, contact)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        **text = overlay_text(controller, contact);
    }
}
