//! Spoken-word highlighting kept in step with narration progress.
//!
//! The tracker only keeps indices; the host paints them. All calls must come
//! from the thread the UI observes, so narration callbacks are redispatched
//! by the host before they reach this type.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use ts_rs::TS;

pub const DEFAULT_UTTERANCE_PREFIX: &str = "U";

/// Identifier handed to the narration engine for one utterance.
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UtteranceId(String);

impl UtteranceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UtteranceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Highlighted span; `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub active: bool,
}

impl HighlightRange {
    pub const INACTIVE: HighlightRange = HighlightRange {
        start: 0,
        end: 0,
        active: false,
    };
}

/// Engine failure reported for an utterance; the host decides what to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct NarrationFailure {
    pub utterance_id: UtteranceId,
    pub stale: bool,
}

#[derive(Debug)]
pub struct UtteranceHighlightTracker {
    prefix: String,
    next_seq: u64,
    current: Option<UtteranceId>,
    highlight_enabled: bool,
    range: HighlightRange,
}

impl Default for UtteranceHighlightTracker {
    fn default() -> Self {
        Self::new(DEFAULT_UTTERANCE_PREFIX)
    }
}

impl UtteranceHighlightTracker {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_seq: 0,
            current: None,
            highlight_enabled: false,
            range: HighlightRange::INACTIVE,
        }
    }

    pub fn range(&self) -> HighlightRange {
        self.range
    }

    pub fn current_utterance(&self) -> Option<&UtteranceId> {
        self.current.as_ref()
    }

    pub fn highlight_enabled(&self) -> bool {
        self.highlight_enabled
    }

    /// Issues the next id; events for earlier ids become stale.
    pub fn start_utterance(&mut self) -> UtteranceId {
        let id = UtteranceId(format!("{}-{}", self.prefix, self.next_seq));
        self.next_seq += 1;
        debug!(utterance = %id, "Starting utterance");
        self.current = Some(id.clone());
        id
    }

    pub fn on_start(&mut self, id: &UtteranceId) {
        trace!(utterance = %id, "Utterance started");
    }

    /// Returns whether the range changed.
    pub fn on_range_start(&mut self, id: &UtteranceId, start: usize, end: usize) -> bool {
        if !self.is_current(id) {
            trace!(utterance = %id, "Ignoring stale range event");
            return false;
        }
        let next = if self.highlight_enabled {
            // The engine reports the last character of the word; extend by
            // one so the span covers it.
            HighlightRange {
                start,
                end: end.saturating_add(1),
                active: true,
            }
        } else {
            HighlightRange::INACTIVE
        };
        let changed = next != self.range;
        self.range = next;
        changed
    }

    /// Clears the range for any id, current or not.
    pub fn on_done(&mut self, id: &UtteranceId) {
        trace!(utterance = %id, "Utterance done");
        self.range = HighlightRange::INACTIVE;
    }

    pub fn on_error(&mut self, id: &UtteranceId) -> NarrationFailure {
        let stale = !self.is_current(id);
        warn!(utterance = %id, stale, "Utterance listener error");
        NarrationFailure {
            utterance_id: id.clone(),
            stale,
        }
    }

    /// Applies from the next range event; an active span stays until then.
    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.highlight_enabled = enabled;
    }

    pub fn reset(&mut self) {
        self.range = HighlightRange::INACTIVE;
    }

    fn is_current(&self, id: &UtteranceId) -> bool {
        self.current.as_ref() == Some(id)
    }
}
