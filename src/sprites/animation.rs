//! Animation clips and playback.
//!
//! Each clip is a single-row sprite sheet of square frames. Looping clips
//! cycle forever; one-shot clips hold their last frame and fire a single
//! `AnimationFinished` message.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use super::SpriteSheets;

/// Named animation clips for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Walk,
    SmallAttack,
    BigAttack,
    InAir,
    AirAttack,
}

impl AnimationClip {
    pub const ALL: [AnimationClip; 6] = [
        AnimationClip::Idle,
        AnimationClip::Walk,
        AnimationClip::SmallAttack,
        AnimationClip::BigAttack,
        AnimationClip::InAir,
        AnimationClip::AirAttack,
    ];

    pub fn key(self) -> &'static str {
        match self {
            AnimationClip::Idle => "idle",
            AnimationClip::Walk => "walk",
            AnimationClip::SmallAttack => "small-attack",
            AnimationClip::BigAttack => "big-attack",
            AnimationClip::InAir => "in-air",
            AnimationClip::AirAttack => "air-attack",
        }
    }

    /// Sheet path relative to the asset root.
    pub fn sheet_path(self) -> &'static str {
        match self {
            AnimationClip::Idle => "sprites/idle-Sheet.png",
            AnimationClip::Walk => "sprites/walk-Sheet.png",
            AnimationClip::SmallAttack => "sprites/small_attack-Sheet.png",
            AnimationClip::BigAttack => "sprites/big_attack-Sheet.png",
            AnimationClip::InAir => "sprites/in_air-Sheet.png",
            AnimationClip::AirAttack => "sprites/attack_air-Sheet.png",
        }
    }

    pub fn frame_count(self) -> u32 {
        match self {
            AnimationClip::Idle | AnimationClip::InAir => 1,
            AnimationClip::Walk => 8,
            AnimationClip::SmallAttack | AnimationClip::AirAttack => 2,
            AnimationClip::BigAttack => 3,
        }
    }

    /// Frames per second.
    pub fn frame_rate(self) -> f32 {
        match self {
            AnimationClip::Idle | AnimationClip::InAir => 1.0,
            AnimationClip::Walk | AnimationClip::BigAttack => 10.0,
            AnimationClip::SmallAttack | AnimationClip::AirAttack => 16.0,
        }
    }

    pub fn looping(self) -> bool {
        matches!(
            self,
            AnimationClip::Idle | AnimationClip::Walk | AnimationClip::InAir
        )
    }
}

/// How `AnimationPlayer::play` treats a request for the clip already playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Always rewind to the first frame.
    Restart,
    /// Keep going if the same clip is still playing.
    Continue,
}

/// Playback cursor for one sprite.
#[derive(Component, Debug, Clone)]
pub struct AnimationPlayer {
    clip: AnimationClip,
    frame: u32,
    frame_timer: f32,
    finished: bool,
    clip_changed: bool,
}

impl AnimationPlayer {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            frame: 0,
            frame_timer: 0.0,
            finished: false,
            clip_changed: true,
        }
    }

    pub fn clip(&self) -> AnimationClip {
        self.clip
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn play(&mut self, clip: AnimationClip, mode: PlayMode) {
        if mode == PlayMode::Continue && self.clip == clip && !self.finished {
            return;
        }

        if self.clip != clip {
            self.clip_changed = true;
        }
        self.clip = clip;
        self.frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    /// Advance by `dt` seconds. Returns true on the call that completes a
    /// one-shot clip.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        let frame_duration = 1.0 / self.clip.frame_rate();
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration {
            self.frame_timer -= frame_duration;

            if self.frame + 1 < self.clip.frame_count() {
                self.frame += 1;
            } else if self.clip.looping() {
                self.frame = 0;
            } else {
                self.finished = true;
                return true;
            }
        }

        false
    }

    /// Returns true once after the clip switched, for sheet swapping.
    pub fn take_clip_change(&mut self) -> bool {
        std::mem::take(&mut self.clip_changed)
    }
}

/// Message fired when a one-shot clip completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub clip: AnimationClip,
}

impl Message for AnimationFinished {}

pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationPlayer)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    let dt = time.delta_secs();

    for (entity, mut player) in &mut query {
        if player.advance(dt) {
            finished_events.write(AnimationFinished {
                entity,
                clip: player.clip(),
            });
        }
    }
}

/// Push the playback cursor into the sprite's atlas, swapping sheets when the
/// clip changed.
pub fn sync_sprite_frames(
    sheets: Res<SpriteSheets>,
    mut query: Query<(&mut AnimationPlayer, &mut Sprite)>,
) {
    for (mut player, mut sprite) in &mut query {
        if player.take_clip_change() {
            if let Some(sheet_sprite) = sheets.sprite_for(player.clip()) {
                sprite.image = sheet_sprite.image;
                sprite.texture_atlas = sheet_sprite.texture_atlas;
            }
        }

        let index = player.frame() as usize;
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            if atlas.index != index {
                atlas.index = index;
            }
        }
    }
}
