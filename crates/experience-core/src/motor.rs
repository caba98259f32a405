//! Motor challenge: jittering checkboxes and touch-target expansion.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

pub const CHECKBOX_COUNT: usize = 6;
pub const TOUCH_PADDING_PX: i32 = 100;
pub const JITTER_MAX_X: f32 = 150.0;
pub const JITTER_MAX_Y: f32 = 50.0;
/// Duration of one jitter leg; each leg runs out and back.
pub const JITTER_DURATION_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TouchRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Hit area delegated to a checkbox: grown when accessible, shrunk otherwise.
pub fn expand_touch_area(rect: TouchRect, accessible: bool) -> TouchRect {
    let padding = if accessible {
        TOUCH_PADDING_PX
    } else {
        -TOUCH_PADDING_PX
    };
    TouchRect {
        left: rect.left - padding,
        top: rect.top - padding,
        right: rect.right + padding,
        bottom: rect.bottom + padding,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct JitterOffset {
    pub checkbox: usize,
    pub translate_x: f32,
    pub translate_y: f32,
}

#[derive(Debug, Clone)]
pub struct CheckboxJitter {
    checkboxes: usize,
    running: bool,
}

impl Default for CheckboxJitter {
    fn default() -> Self {
        Self::new(CHECKBOX_COUNT)
    }
}

impl CheckboxJitter {
    pub fn new(checkboxes: usize) -> Self {
        Self {
            checkboxes,
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        debug!(checkboxes = self.checkboxes, "Checkbox jitter started");
        self.running = true;
    }

    /// The leg in flight finishes; no new targets are produced afterwards.
    pub fn stop(&mut self) {
        debug!("Checkbox jitter stopped");
        self.running = false;
    }

    /// Targets for the next leg, or nothing once stopped.
    pub fn next_offsets<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<JitterOffset> {
        if !self.running {
            return Vec::new();
        }
        (0..self.checkboxes)
            .map(|checkbox| JitterOffset {
                checkbox,
                translate_x: JITTER_MAX_X * (rng.random::<f32>() * 2.0 - 1.0),
                translate_y: JITTER_MAX_Y * (rng.random::<f32>() * 2.0 - 1.0),
            })
            .collect()
    }
}

/// Where each checkbox label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LabelPlacement {
    /// Label is part of the checkbox, so tapping it toggles the box.
    OnCheckbox,
    /// Label sits in a separate text view that ignores taps.
    Detached,
}

impl LabelPlacement {
    pub fn for_switch(accessible: bool) -> Self {
        if accessible {
            LabelPlacement::OnCheckbox
        } else {
            LabelPlacement::Detached
        }
    }
}
