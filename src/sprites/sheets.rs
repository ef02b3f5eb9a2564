//! Sprite sheet registry: one image and atlas layout per animation clip.

use std::collections::HashMap;

use bevy::prelude::*;

use super::AnimationClip;

/// Edge length of a square animation frame in pixels.
pub const FRAME_SIZE: u32 = 96;

#[derive(Debug, Clone)]
pub struct SheetHandles {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

#[derive(Resource, Debug, Default)]
pub struct SpriteSheets {
    sheets: HashMap<AnimationClip, SheetHandles>,
}

impl SpriteSheets {
    pub fn insert(&mut self, clip: AnimationClip, handles: SheetHandles) {
        self.sheets.insert(clip, handles);
    }

    pub fn get(&self, clip: AnimationClip) -> Option<&SheetHandles> {
        self.sheets.get(&clip)
    }

    pub fn images(&self) -> impl Iterator<Item = &Handle<Image>> {
        self.sheets.values().map(|sheet| &sheet.image)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Sprite showing the first frame of `clip`.
    pub fn sprite_for(&self, clip: AnimationClip) -> Option<Sprite> {
        let sheet = self.get(clip)?;
        Some(Sprite::from_atlas_image(
            sheet.image.clone(),
            TextureAtlas {
                layout: sheet.layout.clone(),
                index: 0,
            },
        ))
    }
}

pub(crate) fn load_sprite_sheets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let mut sheets = SpriteSheets::default();

    for clip in AnimationClip::ALL {
        let layout = TextureAtlasLayout::from_grid(
            UVec2::splat(FRAME_SIZE),
            clip.frame_count(),
            1,
            None,
            None,
        );
        debug!("Sheet {} -> {}", clip.key(), clip.sheet_path());
        sheets.insert(
            clip,
            SheetHandles {
                image: asset_server.load(clip.sheet_path()),
                layout: layouts.add(layout),
            },
        );
    }

    info!("Registered {} sprite sheets", sheets.len());
    commands.insert_resource(sheets);
}
