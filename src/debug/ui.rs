//! Debug domain: overlay components and layout helpers.

use bevy::prelude::*;

use crate::combat::PlayerController;
use crate::movement::GroundContact;

/// Marker for the controller info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            padding: UiRect::all(Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.8)),
        ZIndex(500),
    ));
}

pub(crate) fn overlay_text(controller: &PlayerController, contact: &GroundContact) -> String {
    format!(
        "State: {:?}\nSmall CD: {:.0}ms\nAir CD: {:.0}ms\nHit this attack: {}\nOn ground: {}",
        controller.state(),
        controller.small_attack_cooldown().max(0.0),
        controller.air_attack_cooldown().max(0.0),
        controller.has_hit_this_attack(),
        contact.on_ground
    )
}
