use super::engines::{MediaCommand, SpeechCommand};
use super::messages::HostEvent;
use super::state::{App, Screen};
use experience_core::motor::{JitterOffset, LabelPlacement, TouchRect};
use experience_core::playback::PlayPauseLabel;
use experience_core::vision::{AccessibleContent, VisionRender};
use experience_core::{HighlightRange, NarrationFailure, StoryId, TransformResult};
use serde::Serialize;
use tracing::trace;

mod challenge;
mod landing;
mod narration;
mod story;

/// Describes work the host must perform after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    Navigate {
        screen: Screen,
    },
    /// Deliver `SplashElapsed` after this delay.
    SplashTimer {
        timeout_ms: u64,
    },
    TransformPage {
        page: usize,
        transform: TransformResult,
    },
    /// Page is off-screen: keep scale and translation, update elevation only.
    SetElevation {
        page: usize,
        elevation: f32,
    },
    SlideArmed {
        index: usize,
        story_id: StoryId,
    },
    Media(MediaCommand),
    Speech(SpeechCommand),
    PlayPauseLabel {
        label: PlayPauseLabel,
    },
    Highlight {
        range: HighlightRange,
    },
    NarrationFailed {
        failure: NarrationFailure,
    },
    Toast {
        text: String,
    },
    VisionRender {
        render: VisionRender,
    },
    AccessibleContent {
        content: AccessibleContent,
    },
    TouchDelegate {
        checkbox: usize,
        rect: TouchRect,
    },
    MoveCheckboxes {
        offsets: Vec<JitterOffset>,
        duration_ms: u64,
    },
    CheckboxLabels {
        placement: LabelPlacement,
    },
    BodyText {
        text: String,
    },
}

impl App {
    /// Effects for the first frame, before any host event arrives.
    pub fn start(&mut self) -> Vec<Effect> {
        vec![
            Effect::Navigate {
                screen: self.screen,
            },
            Effect::SplashTimer {
                timeout_ms: self.config.splash_timeout_ms,
            },
        ]
    }

    pub fn reduce(&mut self, event: HostEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        trace!(event = event.name(), screen = ?self.screen, "Reducing host event");

        match event {
            HostEvent::SplashElapsed => self.handle_splash_elapsed(&mut effects),
            HostEvent::Layout { page, geometry } => {
                self.handle_layout(page, &geometry, &mut effects)
            }
            HostEvent::DragStarted => self.handle_drag_started(),
            HostEvent::PageSettled { index } => self.handle_page_settled(index, &mut effects),
            HostEvent::SlideTapped => self.handle_slide_tapped(&mut effects),
            HostEvent::PlayerStateChanged { state } => {
                self.handle_player_state_changed(state, &mut effects)
            }
            HostEvent::NextPressed => self.handle_next_pressed(&mut effects),
            HostEvent::MuteToggled { muted } => self.handle_mute_toggled(muted),
            HostEvent::PauseToggled { paused } => self.handle_pause_toggled(paused, &mut effects),
            HostEvent::Resumed => self.handle_resumed(),
            HostEvent::Suspended => self.handle_suspended(&mut effects),
            HostEvent::BackToMenu => self.handle_back_to_menu(&mut effects),
            HostEvent::AccessibleSwitchChanged { accessible } => {
                self.handle_accessible_switch(accessible, &mut effects)
            }
            HostEvent::VisionChipToggled { chip, checked } => {
                self.handle_vision_chip_toggled(chip, checked, &mut effects)
            }
            HostEvent::IconTapped { icon } => self.handle_icon_tapped(icon, &mut effects),
            HostEvent::MotorChipToggled { checked } => {
                self.handle_motor_chip_toggled(checked, &mut effects)
            }
            HostEvent::CheckboxMeasured { checkbox, rect } => {
                self.handle_checkbox_measured(checkbox, rect, &mut effects)
            }
            HostEvent::JitterLegFinished => self.handle_jitter_leg_finished(&mut effects),
            HostEvent::SpeechEngineReady { status, support } => {
                self.handle_speech_engine_ready(status, support, &mut effects)
            }
            HostEvent::SpeakPressed => self.handle_speak_pressed(),
            HostEvent::HighlightToggled { enabled } => self.handle_highlight_toggled(enabled),
            HostEvent::NarrationStarted { utterance_id } => {
                self.handle_narration_started(&utterance_id)
            }
            HostEvent::NarrationRange {
                utterance_id,
                start,
                end,
            } => self.handle_narration_range(&utterance_id, start, end, &mut effects),
            HostEvent::NarrationDone { utterance_id } => {
                self.handle_narration_done(&utterance_id, &mut effects)
            }
            HostEvent::NarrationError { utterance_id } => {
                self.handle_narration_error(&utterance_id, &mut effects)
            }
        }

        self.flush_engine_commands(&mut effects);
        effects
    }

    fn flush_engine_commands(&mut self, effects: &mut Vec<Effect>) {
        effects.extend(
            self.narrator
                .engine_mut()
                .drain()
                .into_iter()
                .map(Effect::Speech),
        );
        if let Some(playback) = self.playback.as_mut() {
            effects.extend(playback.engine_mut().drain().into_iter().map(Effect::Media));
        }
    }

    pub(super) fn navigate(&mut self, screen: Screen, effects: &mut Vec<Effect>) {
        tracing::info!(from = ?self.screen, to = ?screen, "Navigating");
        self.screen = screen;
        effects.push(Effect::Navigate { screen });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use experience_core::vision::VisionChip;
    use experience_core::{
        ChallengeKind, InitStatus, LanguageSupport, PlayerState, UtteranceId, ViewportGeometry,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App {
        App::bootstrap_with_rng(AppConfig::default(), StdRng::seed_from_u64(1)).unwrap()
    }

    fn open_story(app: &mut App, index: usize) -> Vec<Effect> {
        app.reduce(HostEvent::SplashElapsed);
        app.reduce(HostEvent::DragStarted);
        app.reduce(HostEvent::PageSettled { index });
        app.reduce(HostEvent::SlideTapped)
    }

    fn open_challenge(app: &mut App, index: usize) -> Vec<Effect> {
        open_story(app, index);
        app.reduce(HostEvent::NextPressed)
    }

    #[test]
    fn splash_arms_first_slide() {
        let mut app = app();
        let effects = app.reduce(HostEvent::SplashElapsed);
        assert_eq!(
            effects,
            vec![
                Effect::Navigate {
                    screen: Screen::Landing
                },
                Effect::SlideArmed {
                    index: 0,
                    story_id: StoryId::Blindness
                },
            ]
        );
    }

    #[test]
    fn layout_reports_transform_or_elevation() {
        let mut app = app();
        app.reduce(HostEvent::SplashElapsed);

        let centred = app.reduce(HostEvent::Layout {
            page: 0,
            geometry: ViewportGeometry {
                viewport_width: 1000.0,
                viewport_left_scroll: 0.0,
                page_left: 0.0,
                page_width: 1000.0,
            },
        });
        assert!(matches!(
            centred.as_slice(),
            [Effect::TransformPage { page: 0, transform }] if transform.scale_factor == 1.0
        ));

        let far = app.reduce(HostEvent::Layout {
            page: 3,
            geometry: ViewportGeometry {
                viewport_width: 1000.0,
                viewport_left_scroll: 0.0,
                page_left: 3000.0,
                page_width: 1000.0,
            },
        });
        assert!(matches!(far.as_slice(), [Effect::SetElevation { page: 3, .. }]));
    }

    #[test]
    fn settling_twice_on_same_page_rearms() {
        let mut app = app();
        app.reduce(HostEvent::SplashElapsed);
        let first = app.reduce(HostEvent::PageSettled { index: 2 });
        let second = app.reduce(HostEvent::PageSettled { index: 2 });
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![Effect::SlideArmed {
                index: 2,
                story_id: StoryId::MotorImpairment
            }]
        );
        assert!(app.reduce(HostEvent::PageSettled { index: 9 }).is_empty());
    }

    #[test]
    fn tapping_slide_plays_story_until_it_ends() {
        let mut app = app();
        let effects = open_story(&mut app, 1);
        assert_eq!(
            effects,
            vec![
                Effect::Navigate {
                    screen: Screen::Story {
                        story: StoryId::Deafness
                    }
                },
                Effect::Media(MediaCommand::Play),
            ]
        );

        let muted = app.reduce(HostEvent::MuteToggled { muted: true });
        assert_eq!(muted, vec![Effect::Media(MediaCommand::SetVolume { volume: 0.0 })]);

        assert!(app
            .reduce(HostEvent::PlayerStateChanged {
                state: PlayerState::Ready
            })
            .is_empty());
        let ended = app.reduce(HostEvent::PlayerStateChanged {
            state: PlayerState::Ended,
        });
        assert_eq!(
            ended,
            vec![
                Effect::Media(MediaCommand::Pause),
                Effect::Navigate {
                    screen: Screen::Challenge {
                        challenge: ChallengeKind::Deaf
                    }
                },
                Effect::Media(MediaCommand::SetRepeat { repeat: true }),
                Effect::Media(MediaCommand::Play),
            ]
        );

        let subtitles = app.reduce(HostEvent::AccessibleSwitchChanged { accessible: true });
        assert_eq!(
            subtitles,
            vec![Effect::Media(MediaCommand::SetTextLanguage {
                language: Some("en".to_string())
            })]
        );
    }

    #[test]
    fn learning_challenge_highlights_spoken_words() {
        let mut app = app();
        open_challenge(&mut app, 3);
        app.reduce(HostEvent::HighlightToggled { enabled: true });

        let spoken = app.reduce(HostEvent::SpeakPressed);
        let [Effect::Speech(SpeechCommand::Speak { text, utterance_id })] = spoken.as_slice() else {
            panic!("expected a single speak command, got {spoken:?}");
        };
        assert_eq!(utterance_id.as_str(), "U-0");
        assert!(!text.contains('.'));

        let range = app.reduce(HostEvent::NarrationRange {
            utterance_id: utterance_id.clone(),
            start: 5,
            end: 9,
        });
        assert_eq!(
            range,
            vec![Effect::Highlight {
                range: HighlightRange {
                    start: 5,
                    end: 10,
                    active: true
                }
            }]
        );

        let stale = app.reduce(HostEvent::NarrationRange {
            utterance_id: UtteranceId::from("U-7"),
            start: 20,
            end: 24,
        });
        assert!(stale.is_empty());

        let done = app.reduce(HostEvent::NarrationDone {
            utterance_id: utterance_id.clone(),
        });
        assert_eq!(
            done,
            vec![Effect::Highlight {
                range: HighlightRange::INACTIVE
            }]
        );
    }

    fn speak_and_paint_first_word(app: &mut App) -> UtteranceId {
        app.reduce(HostEvent::HighlightToggled { enabled: true });
        let spoken = app.reduce(HostEvent::SpeakPressed);
        let [Effect::Speech(SpeechCommand::Speak { utterance_id, .. })] = spoken.as_slice() else {
            panic!("expected a single speak command, got {spoken:?}");
        };
        let utterance_id = utterance_id.clone();
        app.reduce(HostEvent::NarrationRange {
            utterance_id: utterance_id.clone(),
            start: 0,
            end: 4,
        });
        utterance_id
    }

    #[test]
    fn suspending_learning_challenge_clears_painted_span() {
        let mut app = app();
        open_challenge(&mut app, 3);
        let utterance_id = speak_and_paint_first_word(&mut app);

        let suspended = app.reduce(HostEvent::Suspended);
        assert_eq!(
            suspended,
            vec![
                Effect::Highlight {
                    range: HighlightRange::INACTIVE
                },
                Effect::Speech(SpeechCommand::Stop),
            ]
        );
        assert!(app
            .reduce(HostEvent::NarrationDone { utterance_id })
            .is_empty());
    }

    #[test]
    fn leaving_mid_narration_clears_span_before_navigating() {
        let mut app = app();
        open_challenge(&mut app, 3);
        speak_and_paint_first_word(&mut app);

        let effects = app.reduce(HostEvent::BackToMenu);
        assert_eq!(
            effects,
            vec![
                Effect::Highlight {
                    range: HighlightRange::INACTIVE
                },
                Effect::Navigate {
                    screen: Screen::Landing
                },
                Effect::Speech(SpeechCommand::Stop),
            ]
        );
    }

    #[test]
    fn return_visit_starts_with_configured_highlight() {
        let mut app = app();
        open_challenge(&mut app, 3);
        speak_and_paint_first_word(&mut app);
        assert!(app.narrator.tracker().highlight_enabled());

        app.reduce(HostEvent::BackToMenu);
        open_challenge(&mut app, 3);
        assert!(!app.narrator.tracker().highlight_enabled());
        assert_eq!(app.narrator.highlight(), HighlightRange::INACTIVE);

        let spoken = app.reduce(HostEvent::SpeakPressed);
        let [Effect::Speech(SpeechCommand::Speak { utterance_id, .. })] = spoken.as_slice() else {
            panic!("expected a single speak command, got {spoken:?}");
        };
        let range = app.reduce(HostEvent::NarrationRange {
            utterance_id: utterance_id.clone(),
            start: 0,
            end: 4,
        });
        assert!(range.is_empty());
    }

    #[test]
    fn learning_switch_stops_speech_and_swaps_text() {
        let mut app = app();
        open_challenge(&mut app, 3);
        let effects = app.reduce(HostEvent::AccessibleSwitchChanged { accessible: true });
        assert_eq!(
            effects,
            vec![
                Effect::BodyText {
                    text: AppConfig::default().learning_easy_text
                },
                Effect::Speech(SpeechCommand::Stop),
            ]
        );
    }

    #[test]
    fn speech_engine_language_failure_is_toasted() {
        let mut app = app();
        assert!(app
            .reduce(HostEvent::SpeechEngineReady {
                status: InitStatus::Success,
                support: LanguageSupport::Available,
            })
            .is_empty());
        let effects = app.reduce(HostEvent::SpeechEngineReady {
            status: InitStatus::Success,
            support: LanguageSupport::MissingData,
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::Toast { text }] if text.contains("en-US")
        ));
    }

    #[test]
    fn narration_error_is_surfaced() {
        let mut app = app();
        let effects = app.reduce(HostEvent::NarrationError {
            utterance_id: UtteranceId::from("U-3"),
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::NarrationFailed { failure }] if failure.stale
        ));
    }

    #[test]
    fn vision_chips_render_filters() {
        let mut app = app();
        let effects = open_challenge(&mut app, 0);
        assert!(effects.contains(&Effect::Navigate {
            screen: Screen::Challenge {
                challenge: ChallengeKind::Vision
            }
        }));

        let effects = app.reduce(HostEvent::VisionChipToggled {
            chip: VisionChip::Contrast,
            checked: true,
        });
        let [Effect::VisionRender { render }] = effects.as_slice() else {
            panic!("expected a render, got {effects:?}");
        };
        assert_eq!(render.content_alpha, 0.2);
        assert!(!render.healthy_checked);

        let toast = app.reduce(HostEvent::IconTapped {
            icon: experience_core::vision::VisionIcon::Share,
        });
        assert_eq!(
            toast,
            vec![
                Effect::Toast {
                    text: "Button".to_string()
                },
                Effect::Speech(SpeechCommand::Speak {
                    text: "Button".to_string(),
                    utterance_id: UtteranceId::from("ContentDescriptionId"),
                }),
            ]
        );
    }

    #[test]
    fn motor_jitter_runs_until_chip_is_cleared() {
        let mut app = app();
        let effects = open_challenge(&mut app, 2);
        assert!(effects.iter().any(|effect| matches!(
            effect,
            Effect::MoveCheckboxes { offsets, .. } if offsets.len() == 6
        )));

        assert_eq!(app.reduce(HostEvent::JitterLegFinished).len(), 1);
        app.reduce(HostEvent::MotorChipToggled { checked: false });
        assert!(app.reduce(HostEvent::JitterLegFinished).is_empty());
    }

    #[test]
    fn measured_checkbox_gets_touch_delegate() {
        let mut app = app();
        open_challenge(&mut app, 2);
        let rect = experience_core::motor::TouchRect {
            left: 200,
            top: 200,
            right: 260,
            bottom: 260,
        };
        app.reduce(HostEvent::CheckboxMeasured { checkbox: 1, rect });
        let effects = app.reduce(HostEvent::AccessibleSwitchChanged { accessible: true });
        assert!(effects.contains(&Effect::TouchDelegate {
            checkbox: 1,
            rect: experience_core::motor::TouchRect {
                left: 100,
                top: 100,
                right: 360,
                bottom: 360,
            },
        }));
    }

    #[test]
    fn back_to_menu_releases_player() {
        let mut app = app();
        open_story(&mut app, 0);
        let effects = app.reduce(HostEvent::BackToMenu);
        assert_eq!(
            effects,
            vec![
                Effect::Media(MediaCommand::Pause),
                Effect::Navigate {
                    screen: Screen::Landing
                },
            ]
        );
        assert!(app.playback.is_none());
        assert!(app.reduce(HostEvent::MuteToggled { muted: true }).is_empty());
    }
}
