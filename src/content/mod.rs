//! Content domain: tuning loaded from RON at startup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::TuningFile;
pub use loader::{TuningLoadError, load_tuning, parse_tuning};

use bevy::prelude::*;
use std::path::Path;

/// Tuning file, relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_tuning_resources);
    }
}

/// Replace the default tuning resources with the file's values. On failure
/// the defaults stay in place.
fn load_tuning_resources(mut commands: Commands) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            info!("Loaded tuning from {}", TUNING_PATH);
            commands.insert_resource(tuning.movement);
            commands.insert_resource(tuning.body);
            commands.insert_resource(tuning.attacks);
            commands.insert_resource(tuning.feedback);
        }
        Err(e) => {
            warn!("{}; using built-in tuning", e);
        }
    }
}
