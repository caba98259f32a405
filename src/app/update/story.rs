use super::Effect;
use crate::app::engines::HostPlayer;
use crate::app::state::{App, ChallengeState, Screen, deaf_challenge_asset};
use experience_core::motor::{JITTER_DURATION_MS, LabelPlacement};
use experience_core::vision::AccessibleContent;
use experience_core::{ChallengeKind, PlaybackController, PlayerState};

impl App {
    pub(super) fn handle_player_state_changed(
        &mut self,
        state: PlayerState,
        effects: &mut Vec<Effect>,
    ) {
        if !matches!(self.screen, Screen::Story { .. }) {
            return;
        }
        let next = self
            .playback
            .as_mut()
            .and_then(|playback| playback.on_state_changed(state));
        if let Some(kind) = next {
            self.open_challenge(kind, effects);
        }
    }

    pub(super) fn handle_next_pressed(&mut self, effects: &mut Vec<Effect>) {
        if !matches!(self.screen, Screen::Story { .. }) {
            return;
        }
        if let Some(kind) = self.playback.as_ref().map(|playback| playback.next()) {
            self.open_challenge(kind, effects);
        }
    }

    pub(super) fn handle_mute_toggled(&mut self, muted: bool) {
        if let Some(playback) = self.playback.as_mut() {
            playback.set_muted(muted);
        }
    }

    pub(super) fn handle_pause_toggled(&mut self, paused: bool, effects: &mut Vec<Effect>) {
        if let Some(playback) = self.playback.as_mut() {
            let label = playback.set_paused(paused);
            effects.push(Effect::PlayPauseLabel { label });
        }
    }

    pub(super) fn handle_resumed(&mut self) {
        if let Some(playback) = self.playback.as_mut() {
            playback.resume();
        }
    }

    pub(super) fn handle_suspended(&mut self, effects: &mut Vec<Effect>) {
        if let Some(playback) = self.playback.as_mut() {
            playback.suspend();
        }
        if self.open_challenge_kind() == Some(ChallengeKind::LearningDisability) {
            self.stop_narration(effects);
        }
    }

    pub(super) fn handle_back_to_menu(&mut self, effects: &mut Vec<Effect>) {
        if matches!(self.screen, Screen::Splash | Screen::Landing) {
            return;
        }
        self.leave_current_screen(effects);
        self.navigate(Screen::Landing, effects);
    }

    /// Releases whatever the current screen owns, flushing pending engine
    /// commands first so none are lost with the engine.
    fn leave_current_screen(&mut self, effects: &mut Vec<Effect>) {
        if let Some(mut playback) = self.playback.take() {
            playback.suspend();
            effects.extend(playback.engine_mut().drain().into_iter().map(Effect::Media));
        }
        if matches!(
            self.open_challenge_kind(),
            Some(ChallengeKind::Vision | ChallengeKind::LearningDisability)
        ) {
            self.stop_narration(effects);
        }
        self.challenge.jitter.stop();
    }

    pub(super) fn open_challenge(&mut self, kind: ChallengeKind, effects: &mut Vec<Effect>) {
        self.leave_current_screen(effects);
        self.challenge = ChallengeState::default();
        self.navigate(Screen::Challenge { challenge: kind }, effects);

        match kind {
            ChallengeKind::Vision => {
                effects.push(Effect::VisionRender {
                    render: self.challenge.vision.render(),
                });
                effects.push(Effect::AccessibleContent {
                    content: AccessibleContent::for_switch(false),
                });
            }
            ChallengeKind::Deaf => {
                let mut playback =
                    PlaybackController::new(HostPlayer::default(), &deaf_challenge_asset());
                playback.set_repeat(true);
                playback.resume();
                self.playback = Some(playback);
            }
            ChallengeKind::MotorImpairment => {
                effects.push(Effect::CheckboxLabels {
                    placement: LabelPlacement::for_switch(false),
                });
                self.challenge.jitter.start();
                let offsets = self.challenge.jitter.next_offsets(&mut self.rng);
                effects.push(Effect::MoveCheckboxes {
                    offsets,
                    duration_ms: JITTER_DURATION_MS,
                });
            }
            ChallengeKind::LearningDisability => {
                self.reset_narration_session();
                effects.push(Effect::BodyText {
                    text: self.learning_text().to_string(),
                });
            }
        }
    }
}
