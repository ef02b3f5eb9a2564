//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;

pub(crate) use collisions::{detect_ground, sync_body_collider};
pub(crate) use input::read_input;
