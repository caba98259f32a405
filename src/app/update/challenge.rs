use super::Effect;
use crate::app::state::App;
use experience_core::ChallengeKind;
use experience_core::motor::{JITTER_DURATION_MS, LabelPlacement, TouchRect, expand_touch_area};
use experience_core::vision::{AccessibleContent, ChipToggle, VisionChip, VisionIcon};
use tracing::{debug, warn};

impl App {
    pub(super) fn handle_accessible_switch(&mut self, accessible: bool, effects: &mut Vec<Effect>) {
        let Some(kind) = self.open_challenge_kind() else {
            return;
        };
        self.challenge.accessible = accessible;
        debug!(challenge = ?kind, accessible, "Accessible switch changed");

        match kind {
            ChallengeKind::Vision => effects.push(Effect::AccessibleContent {
                content: AccessibleContent::for_switch(accessible),
            }),
            ChallengeKind::Deaf => {
                if let Some(playback) = self.playback.as_mut() {
                    playback.set_subtitles(accessible);
                }
            }
            ChallengeKind::MotorImpairment => {
                effects.push(Effect::CheckboxLabels {
                    placement: LabelPlacement::for_switch(accessible),
                });
                for (checkbox, rect) in self.challenge.checkbox_rects.iter().enumerate() {
                    if let Some(rect) = rect {
                        effects.push(Effect::TouchDelegate {
                            checkbox,
                            rect: expand_touch_area(*rect, accessible),
                        });
                    }
                }
            }
            ChallengeKind::LearningDisability => {
                self.stop_narration(effects);
                effects.push(Effect::BodyText {
                    text: self.learning_text().to_string(),
                });
            }
        }
    }

    pub(super) fn handle_vision_chip_toggled(
        &mut self,
        chip: VisionChip,
        checked: bool,
        effects: &mut Vec<Effect>,
    ) {
        if self.open_challenge_kind() != Some(ChallengeKind::Vision) {
            return;
        }
        self.challenge.vision = self.challenge.vision.reduce(ChipToggle { chip, checked });
        effects.push(Effect::VisionRender {
            render: self.challenge.vision.render(),
        });
    }

    pub(super) fn handle_icon_tapped(&mut self, icon: VisionIcon, effects: &mut Vec<Effect>) {
        if self.open_challenge_kind() != Some(ChallengeKind::Vision) {
            return;
        }
        let content = AccessibleContent::for_switch(self.challenge.accessible);
        let text = content.description(icon).to_string();
        if let Err(err) = self.narrator.announce(&text) {
            debug!(?icon, "Announcement dropped: {err}");
        }
        effects.push(Effect::Toast { text });
    }

    pub(super) fn handle_motor_chip_toggled(&mut self, checked: bool, effects: &mut Vec<Effect>) {
        if self.open_challenge_kind() != Some(ChallengeKind::MotorImpairment) {
            return;
        }
        if checked {
            self.challenge.jitter.start();
            self.push_jitter_leg(effects);
        } else {
            self.challenge.jitter.stop();
        }
    }

    pub(super) fn handle_checkbox_measured(
        &mut self,
        checkbox: usize,
        rect: TouchRect,
        effects: &mut Vec<Effect>,
    ) {
        if self.open_challenge_kind() != Some(ChallengeKind::MotorImpairment) {
            return;
        }
        let Some(slot) = self.challenge.checkbox_rects.get_mut(checkbox) else {
            warn!(checkbox, "Measured checkbox out of range");
            return;
        };
        *slot = Some(rect);
        effects.push(Effect::TouchDelegate {
            checkbox,
            rect: expand_touch_area(rect, self.challenge.accessible),
        });
    }

    pub(super) fn handle_jitter_leg_finished(&mut self, effects: &mut Vec<Effect>) {
        if self.open_challenge_kind() != Some(ChallengeKind::MotorImpairment) {
            return;
        }
        self.push_jitter_leg(effects);
    }

    fn push_jitter_leg(&mut self, effects: &mut Vec<Effect>) {
        let offsets = self.challenge.jitter.next_offsets(&mut self.rng);
        if offsets.is_empty() {
            return;
        }
        effects.push(Effect::MoveCheckboxes {
            offsets,
            duration_ms: JITTER_DURATION_MS,
        });
    }
}
