use super::engines::{HostPlayer, HostSpeech};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use experience_core::motor::{CHECKBOX_COUNT, CheckboxJitter, TouchRect};
use experience_core::vision::VisionFilters;
use experience_core::{
    CarouselController, CarouselEvent, ChallengeKind, Narrator, PlaybackController, Slide,
    StoryAsset, StoryCatalog, StoryId, UtteranceHighlightTracker,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::sync::mpsc::Receiver;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Splash,
    Landing,
    Story { story: StoryId },
    Challenge { challenge: ChallengeKind },
}

/// Looping clip shown in the deaf challenge.
pub(super) fn deaf_challenge_asset() -> StoryAsset {
    StoryAsset {
        subtitles_path: "file:///android_asset/deaf_challenge_subtitles.srt".to_string(),
        video_resource: "raw/deaf_challenge_video".to_string(),
        challenge: ChallengeKind::Deaf,
    }
}

/// Per-visit state of the open challenge; rebuilt every time one opens.
#[derive(Debug)]
pub struct ChallengeState {
    pub(in crate::app) accessible: bool,
    pub(in crate::app) vision: VisionFilters,
    pub(in crate::app) jitter: CheckboxJitter,
    pub(in crate::app) checkbox_rects: Vec<Option<TouchRect>>,
}

impl Default for ChallengeState {
    fn default() -> Self {
        Self {
            accessible: false,
            vision: VisionFilters::default(),
            jitter: CheckboxJitter::new(CHECKBOX_COUNT),
            checkbox_rects: vec![None; CHECKBOX_COUNT],
        }
    }
}

/// Core host state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) screen: Screen,
    pub(super) carousel: CarouselController,
    pub(super) selections: Receiver<CarouselEvent>,
    pub(super) armed_slide: Option<Slide>,
    pub(super) catalog: StoryCatalog,
    pub(super) playback: Option<PlaybackController<HostPlayer>>,
    pub(super) narrator: Narrator<HostSpeech>,
    pub(super) challenge: ChallengeState,
    pub(super) rng: StdRng,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        Self::bootstrap_with_rng(config, StdRng::from_os_rng())
    }

    pub fn bootstrap_with_rng(config: AppConfig, rng: StdRng) -> Result<Self> {
        let transform = config.page_transform();
        let mut carousel = CarouselController::new(config.slides.clone(), transform)
            .context("building landing carousel")?;
        let selections = carousel.subscribe();
        let catalog = config.story_catalog();

        let mut tracker = UtteranceHighlightTracker::new(config.utterance_prefix.clone());
        tracker.set_highlight_enabled(config.highlight_enabled);

        info!(
            slides = carousel.len(),
            stories = catalog.len(),
            max_offset_px = transform.max_offset_px(),
            "Host bootstrapped"
        );

        Ok(App {
            config,
            screen: Screen::Splash,
            carousel,
            selections,
            armed_slide: None,
            catalog,
            playback: None,
            narrator: Narrator::new(HostSpeech::default(), tracker),
            challenge: ChallengeState::default(),
            rng,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub(super) fn open_challenge_kind(&self) -> Option<ChallengeKind> {
        match self.screen {
            Screen::Challenge { challenge } => Some(challenge),
            _ => None,
        }
    }

    /// Instruction text currently shown in the learning challenge.
    pub(super) fn learning_text(&self) -> &str {
        if self.challenge.accessible {
            &self.config.learning_easy_text
        } else {
            &self.config.learning_difficult_text
        }
    }
}
