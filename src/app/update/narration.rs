use super::Effect;
use crate::app::state::App;
use experience_core::narration::check_engine_ready;
use experience_core::{ChallengeKind, HighlightRange, InitStatus, LanguageSupport, UtteranceId};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_speech_engine_ready(
        &mut self,
        status: InitStatus,
        support: LanguageSupport,
        effects: &mut Vec<Effect>,
    ) {
        let language = &self.config.narration_language;
        match check_engine_ready(status, language, support) {
            Ok(()) => info!(%language, "Speech engine ready"),
            Err(err) => {
                warn!(%language, "Speech engine unavailable: {err}");
                effects.push(Effect::Toast {
                    text: err.to_string(),
                });
            }
        }
    }

    pub(super) fn handle_speak_pressed(&mut self) {
        if self.open_challenge_kind() != Some(ChallengeKind::LearningDisability) {
            return;
        }
        let text = self.learning_text().to_string();
        if let Err(err) = self.narrator.speak(&text) {
            debug!("Speak request dropped: {err}");
        }
    }

    /// Stops the engine and tells the host to drop any painted span.
    pub(super) fn stop_narration(&mut self, effects: &mut Vec<Effect>) {
        let was_active = self.narrator.highlight().active;
        self.narrator.stop();
        if was_active {
            effects.push(Effect::Highlight {
                range: HighlightRange::INACTIVE,
            });
        }
    }

    /// Each learning visit starts from the configured highlight setting.
    pub(super) fn reset_narration_session(&mut self) {
        let tracker = self.narrator.tracker_mut();
        tracker.set_highlight_enabled(self.config.highlight_enabled);
        tracker.reset();
    }

    pub(super) fn handle_highlight_toggled(&mut self, enabled: bool) {
        self.narrator.tracker_mut().set_highlight_enabled(enabled);
    }

    pub(super) fn handle_narration_started(&mut self, utterance_id: &UtteranceId) {
        self.narrator.tracker_mut().on_start(utterance_id);
    }

    pub(super) fn handle_narration_range(
        &mut self,
        utterance_id: &UtteranceId,
        start: usize,
        end: usize,
        effects: &mut Vec<Effect>,
    ) {
        if self.narrator.on_range_start(utterance_id, start, end) {
            effects.push(Effect::Highlight {
                range: self.narrator.highlight(),
            });
        }
    }

    pub(super) fn handle_narration_done(
        &mut self,
        utterance_id: &UtteranceId,
        effects: &mut Vec<Effect>,
    ) {
        let was_active = self.narrator.highlight().active;
        self.narrator.on_done(utterance_id);
        if was_active {
            effects.push(Effect::Highlight {
                range: self.narrator.highlight(),
            });
        }
    }

    pub(super) fn handle_narration_error(
        &mut self,
        utterance_id: &UtteranceId,
        effects: &mut Vec<Effect>,
    ) {
        let failure = self.narrator.on_error(utterance_id);
        effects.push(Effect::NarrationFailed { failure });
    }
}
