//! Combat domain: timed blink tint on a struck target.
//!
//! Each hit schedules its own run of tint toggles on the target's
//! `BlinkSchedule`. Runs from overlapping hits interleave; none is cancelled.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintAction {
    Apply,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TintTask {
    fire_at_ms: f32,
    action: TintAction,
}

/// Pending tint toggles, advanced by the frame clock. Kept sorted by fire
/// time; equal times fire in scheduling order.
#[derive(Component, Debug, Default, Clone)]
pub struct BlinkSchedule {
    clock_ms: f32,
    tasks: Vec<TintTask>,
}

impl BlinkSchedule {
    /// Queue `steps` toggles, `interval_ms` apart, starting one interval from
    /// now. Odd steps clear the tint, even steps apply it.
    pub fn schedule(&mut self, steps: u32, interval_ms: f32) {
        for step in 1..=steps {
            let task = TintTask {
                fire_at_ms: self.clock_ms + interval_ms * step as f32,
                action: if step % 2 == 0 {
                    TintAction::Apply
                } else {
                    TintAction::Clear
                },
            };
            let index = self
                .tasks
                .partition_point(|queued| queued.fire_at_ms <= task.fire_at_ms);
            self.tasks.insert(index, task);
        }
    }

    /// Advance the clock and fire every due task. Returns the action of the
    /// last task fired, which is the tint state the target ends up in.
    pub fn advance(&mut self, delta_ms: f32) -> Option<TintAction> {
        if self.tasks.is_empty() {
            return None;
        }

        self.clock_ms += delta_ms;
        let due = self
            .tasks
            .partition_point(|task| task.fire_at_ms <= self.clock_ms);
        let last = self.tasks.drain(..due).last().map(|task| task.action);

        if self.tasks.is_empty() {
            self.clock_ms = 0.0;
        }

        last
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }
}

/// Whether the flash tint is currently on.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub active: bool,
}

impl Tint {
    pub fn apply(&mut self, action: TintAction) {
        self.active = action == TintAction::Apply;
    }
}

/// Materials for the untinted and tinted looks of a target.
#[derive(Component, Debug, Clone)]
pub struct TintPalette {
    pub base: Handle<ColorMaterial>,
    pub tinted: Handle<ColorMaterial>,
}

/// Multiplicative tint, channel by channel.
pub fn tinted_color(base: Color, tint: Color) -> Color {
    let base = base.to_srgba();
    let tint = tint.to_srgba();
    Color::srgba(
        base.red * tint.red,
        base.green * tint.green,
        base.blue * tint.blue,
        base.alpha * tint.alpha,
    )
}
