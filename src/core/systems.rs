//! Core domain: camera setup and boot flow.

use bevy::asset::LoadState;
use bevy::camera::ScalingMode;
use bevy::prelude::*;

use crate::core::coords::PLAYFIELD;
use crate::core::state::GameState;
use crate::sprites::SpriteSheets;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: PLAYFIELD.x,
                min_height: PLAYFIELD.y,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation((PLAYFIELD * 0.5).extend(0.0)),
    ));
}

/// Marker for the boot-time loading label
#[derive(Component, Debug)]
pub struct LoadingText;

pub(crate) fn spawn_loading_text(mut commands: Commands) {
    commands.spawn((
        LoadingText,
        Text::new("Loading..."),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
    ));
}

pub(crate) fn despawn_loading_text(mut commands: Commands, query: Query<Entity, With<LoadingText>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// A load that will not change any more. Failed sheets count so missing art
/// cannot hold the game in `Boot`.
pub(crate) fn load_settled(state: &LoadState) -> bool {
    matches!(state, LoadState::Loaded | LoadState::Failed(_))
}

/// Leave `Boot` once every sprite sheet image has finished loading.
pub(crate) fn finish_boot(
    sheets: Option<Res<SpriteSheets>>,
    asset_server: Res<AssetServer>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let Some(sheets) = sheets else {
        return;
    };

    let mut failed = 0;
    for image in sheets.images() {
        let state = asset_server.load_state(image.id());
        if !load_settled(&state) {
            return;
        }
        if matches!(state, LoadState::Failed(_)) {
            failed += 1;
        }
    }

    if failed > 0 {
        warn!("{} sprite sheets failed to load, continuing without them", failed);
    }
    info!("Boot complete ({} sprite sheets), entering arena", sheets.len());
    game_state.set(GameState::Run);
}
