//! Engine stand-ins for the headless host. Calls are queued as commands and
//! flushed to the output after every event.

use experience_core::{MediaEngine, NarrationEngine, NarrationError, UtteranceId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SpeechCommand {
    Speak {
        text: String,
        utterance_id: UtteranceId,
    },
    Stop,
}

#[derive(Debug, Default)]
pub struct HostSpeech {
    queued: Vec<SpeechCommand>,
}

impl HostSpeech {
    pub fn drain(&mut self) -> Vec<SpeechCommand> {
        std::mem::take(&mut self.queued)
    }
}

impl NarrationEngine for HostSpeech {
    fn speak(&mut self, text: &str, utterance_id: &UtteranceId) -> Result<(), NarrationError> {
        self.queued.push(SpeechCommand::Speak {
            text: text.to_string(),
            utterance_id: utterance_id.clone(),
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.queued.push(SpeechCommand::Stop);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MediaCommand {
    Play,
    Pause,
    SetVolume { volume: f32 },
    SetTextLanguage { language: Option<String> },
    SetRepeat { repeat: bool },
}

#[derive(Debug, Default)]
pub struct HostPlayer {
    queued: Vec<MediaCommand>,
}

impl HostPlayer {
    pub fn drain(&mut self) -> Vec<MediaCommand> {
        std::mem::take(&mut self.queued)
    }
}

impl MediaEngine for HostPlayer {
    fn play(&mut self) {
        self.queued.push(MediaCommand::Play);
    }

    fn pause(&mut self) {
        self.queued.push(MediaCommand::Pause);
    }

    fn set_volume(&mut self, volume: f32) {
        self.queued.push(MediaCommand::SetVolume { volume });
    }

    fn set_preferred_text_language(&mut self, language: Option<&str>) {
        self.queued.push(MediaCommand::SetTextLanguage {
            language: language.map(str::to_string),
        });
    }

    fn set_repeat(&mut self, repeat: bool) {
        self.queued.push(MediaCommand::SetRepeat { repeat });
    }
}
