use crate::story::StoryId;

/// Failures surfaced by the narration engine seam.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NarrationError {
    #[error("text to speech failed to initialise")]
    InitFailed,
    #[error("text to speech language {language} is not supported")]
    LanguageUnavailable { language: String },
    #[error("engine rejected utterance {utterance_id}")]
    SpeakRejected { utterance_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("carousel requires at least one slide")]
    EmptySlides,
    #[error("slide index {index} out of range for {len} slides")]
    SlideIndexOutOfRange { index: usize, len: usize },
    #[error("no story registered for {0}")]
    UnknownStory(StoryId),
    #[error(transparent)]
    Narration(#[from] NarrationError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
