use experience_core::motor::TouchRect;
use experience_core::vision::{VisionChip, VisionIcon};
use experience_core::{InitStatus, LanguageSupport, PlayerState, UtteranceId, ViewportGeometry};
use serde::Deserialize;

/// Events delivered by the host, one per script line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    SplashElapsed,
    Layout {
        page: usize,
        geometry: ViewportGeometry,
    },
    DragStarted,
    PageSettled {
        index: usize,
    },
    SlideTapped,
    PlayerStateChanged {
        state: PlayerState,
    },
    NextPressed,
    MuteToggled {
        muted: bool,
    },
    PauseToggled {
        paused: bool,
    },
    Resumed,
    Suspended,
    BackToMenu,
    AccessibleSwitchChanged {
        accessible: bool,
    },
    VisionChipToggled {
        chip: VisionChip,
        checked: bool,
    },
    IconTapped {
        icon: VisionIcon,
    },
    MotorChipToggled {
        checked: bool,
    },
    CheckboxMeasured {
        checkbox: usize,
        rect: TouchRect,
    },
    JitterLegFinished,
    /// Engine init callback plus the result of selecting the configured language.
    SpeechEngineReady {
        status: InitStatus,
        support: LanguageSupport,
    },
    SpeakPressed,
    HighlightToggled {
        enabled: bool,
    },
    NarrationStarted {
        utterance_id: UtteranceId,
    },
    NarrationRange {
        utterance_id: UtteranceId,
        start: usize,
        end: usize,
    },
    NarrationDone {
        utterance_id: UtteranceId,
    },
    NarrationError {
        utterance_id: UtteranceId,
    },
}

impl HostEvent {
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::SplashElapsed => "splash_elapsed",
            HostEvent::Layout { .. } => "layout",
            HostEvent::DragStarted => "drag_started",
            HostEvent::PageSettled { .. } => "page_settled",
            HostEvent::SlideTapped => "slide_tapped",
            HostEvent::PlayerStateChanged { .. } => "player_state_changed",
            HostEvent::NextPressed => "next_pressed",
            HostEvent::MuteToggled { .. } => "mute_toggled",
            HostEvent::PauseToggled { .. } => "pause_toggled",
            HostEvent::Resumed => "resumed",
            HostEvent::Suspended => "suspended",
            HostEvent::BackToMenu => "back_to_menu",
            HostEvent::AccessibleSwitchChanged { .. } => "accessible_switch_changed",
            HostEvent::VisionChipToggled { .. } => "vision_chip_toggled",
            HostEvent::IconTapped { .. } => "icon_tapped",
            HostEvent::MotorChipToggled { .. } => "motor_chip_toggled",
            HostEvent::CheckboxMeasured { .. } => "checkbox_measured",
            HostEvent::JitterLegFinished => "jitter_leg_finished",
            HostEvent::SpeechEngineReady { .. } => "speech_engine_ready",
            HostEvent::SpeakPressed => "speak_pressed",
            HostEvent::HighlightToggled { .. } => "highlight_toggled",
            HostEvent::NarrationStarted { .. } => "narration_started",
            HostEvent::NarrationRange { .. } => "narration_range",
            HostEvent::NarrationDone { .. } => "narration_done",
            HostEvent::NarrationError { .. } => "narration_error",
        }
    }
}
