//! Narration driver over an external text-to-speech engine.

use crate::error::NarrationError;
use crate::highlight::{HighlightRange, NarrationFailure, UtteranceHighlightTracker, UtteranceId};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

/// Fixed id for one-off announcements that are never highlighted.
pub const ANNOUNCEMENT_UTTERANCE_ID: &str = "ContentDescriptionId";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InitStatus {
    Success,
    Failed,
}

/// Outcome of selecting the narration language on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LanguageSupport {
    Available,
    MissingData,
    NotSupported,
}

/// The speech engine as seen by the core. Queueing is always flush-first.
pub trait NarrationEngine {
    fn speak(&mut self, text: &str, utterance_id: &UtteranceId) -> Result<(), NarrationError>;
    fn stop(&mut self);
}

/// Checks the engine init callback and the outcome of selecting `language`.
pub fn check_engine_ready(
    status: InitStatus,
    language: &str,
    support: LanguageSupport,
) -> Result<(), NarrationError> {
    if status == InitStatus::Failed {
        return Err(NarrationError::InitFailed);
    }
    match support {
        LanguageSupport::Available => Ok(()),
        LanguageSupport::MissingData | LanguageSupport::NotSupported => {
            Err(NarrationError::LanguageUnavailable {
                language: language.to_string(),
            })
        }
    }
}

/// Text as handed to the engine. Range callbacks stop at full stops on some
/// engines, so they become semicolons; the length is unchanged, which keeps
/// reported offsets valid for the displayed text.
pub fn speakable_text(text: &str) -> String {
    text.replace('.', ";")
}

pub struct Narrator<E> {
    engine: E,
    tracker: UtteranceHighlightTracker,
}

impl<E: NarrationEngine> Narrator<E> {
    pub fn new(engine: E, tracker: UtteranceHighlightTracker) -> Self {
        Self { engine, tracker }
    }

    pub fn tracker(&self) -> &UtteranceHighlightTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut UtteranceHighlightTracker {
        &mut self.tracker
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn highlight(&self) -> HighlightRange {
        self.tracker.range()
    }

    /// Speaks `text` as a fresh highlighted utterance.
    pub fn speak(&mut self, text: &str) -> Result<UtteranceId, NarrationError> {
        let id = self.tracker.start_utterance();
        let prepared = speakable_text(text);
        if let Err(err) = self.engine.speak(&prepared, &id) {
            warn!(utterance = %id, "TTS error in converting text to speech: {err}");
            return Err(err);
        }
        info!(utterance = %id, chars = prepared.chars().count(), "Narration queued");
        Ok(id)
    }

    /// Speaks a short label without touching the highlight session.
    pub fn announce(&mut self, text: &str) -> Result<(), NarrationError> {
        let id = UtteranceId::from(ANNOUNCEMENT_UTTERANCE_ID);
        self.engine.speak(text, &id).inspect_err(|err| {
            warn!(utterance = %id, "TTS error in converting text to speech: {err}");
        })
    }

    /// Stops the engine. The engine will not report completion for the
    /// flushed utterance, so the range is cleared here.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.tracker.reset();
    }

    pub fn on_range_start(&mut self, id: &UtteranceId, start: usize, end: usize) -> bool {
        self.tracker.on_range_start(id, start, end)
    }

    pub fn on_done(&mut self, id: &UtteranceId) {
        self.tracker.on_done(id);
    }

    pub fn on_error(&mut self, id: &UtteranceId) -> NarrationFailure {
        self.tracker.on_error(id)
    }
}
