//! Movement domain: input sampling.

use bevy::prelude::*;

use crate::movement::PlayerInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.left = keyboard.pressed(KeyCode::ArrowLeft) || keyboard.pressed(KeyCode::KeyA);
    input.right = keyboard.pressed(KeyCode::ArrowRight) || keyboard.pressed(KeyCode::KeyD);
    input.up = keyboard.pressed(KeyCode::ArrowUp) || keyboard.pressed(KeyCode::KeyW);

    input.small_attack_pressed = keyboard.just_pressed(KeyCode::KeyZ);
    input.big_attack_pressed = keyboard.just_pressed(KeyCode::KeyX);
}
