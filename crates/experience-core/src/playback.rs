//! Story video controls over an external media engine.

use crate::story::{ChallengeKind, StoryAsset};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

pub const SUBTITLE_LANGUAGE: &str = "en";

/// The media player as seen by the core.
pub trait MediaEngine {
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// `None` disables the text track.
    fn set_preferred_text_language(&mut self, language: Option<&str>);
    fn set_repeat(&mut self, repeat: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlayerState {
    Idle,
    Buffering,
    Ready,
    Ended,
}

/// Label the play/pause control should carry after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PlayPauseLabel {
    PlayVideo,
    PauseVideo,
}

pub struct PlaybackController<E> {
    engine: E,
    challenge: ChallengeKind,
    muted: bool,
    paused: bool,
}

impl<E: MediaEngine> PlaybackController<E> {
    pub fn new(engine: E, asset: &StoryAsset) -> Self {
        debug!(
            video = %asset.video_resource,
            subtitles = %asset.subtitles_path,
            "Story playback prepared"
        );
        Self {
            engine,
            challenge: asset.challenge,
            muted: false,
            paused: false,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.engine.set_volume(if muted { 0.0 } else { 1.0 });
    }

    pub fn set_paused(&mut self, paused: bool) -> PlayPauseLabel {
        self.paused = paused;
        if paused {
            self.engine.pause();
            PlayPauseLabel::PlayVideo
        } else {
            self.engine.play();
            PlayPauseLabel::PauseVideo
        }
    }

    pub fn set_subtitles(&mut self, visible: bool) {
        let language = visible.then_some(SUBTITLE_LANGUAGE);
        self.engine.set_preferred_text_language(language);
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.engine.set_repeat(repeat);
    }

    /// Host came to the foreground.
    pub fn resume(&mut self) {
        self.engine.play();
    }

    /// Host went to the background.
    pub fn suspend(&mut self) {
        self.engine.pause();
    }

    /// Returns the challenge to open once the story video finishes.
    pub fn on_state_changed(&mut self, state: PlayerState) -> Option<ChallengeKind> {
        if state != PlayerState::Ended {
            return None;
        }
        info!(challenge = ?self.challenge, "Story finished");
        Some(self.challenge)
    }

    pub fn next(&self) -> ChallengeKind {
        self.challenge
    }
}
