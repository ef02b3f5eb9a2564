//! Data definitions for the tuning file.
//!
//! These structs mirror the structure of assets/data/tuning.ron. Every
//! section is optional; missing sections and fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::combat::{AttackTuning, FeedbackTuning};
use crate::movement::{BodyTuning, MovementTuning};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementTuning,
    pub body: BodyTuning,
    pub attacks: AttackTuning,
    pub feedback: FeedbackTuning,
}
