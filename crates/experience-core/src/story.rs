//! Story catalogue: which video, subtitles and challenge belong to a story.
//!
//! The catalogue is built by the caller (usually from config) and handed to
//! whoever needs to resolve a story; there is no process-wide registry.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum StoryId {
    Blindness,
    Deafness,
    MotorImpairment,
    LearningDisability,
}

impl StoryId {
    pub const ALL: [StoryId; 4] = [
        StoryId::Blindness,
        StoryId::Deafness,
        StoryId::MotorImpairment,
        StoryId::LearningDisability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoryId::Blindness => "blindness",
            StoryId::Deafness => "deafness",
            StoryId::MotorImpairment => "motorImpairment",
            StoryId::LearningDisability => "learningDisability",
        }
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interactive challenge shown after a story video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ChallengeKind {
    Vision,
    Deaf,
    MotorImpairment,
    LearningDisability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoryAsset {
    pub subtitles_path: String,
    pub video_resource: String,
    pub challenge: ChallengeKind,
}

#[derive(Debug, Clone, Default)]
pub struct StoryCatalog {
    stories: HashMap<StoryId, StoryAsset>,
}

impl StoryCatalog {
    pub fn new(stories: HashMap<StoryId, StoryAsset>) -> Self {
        Self { stories }
    }

    pub fn get(&self, id: StoryId) -> Result<&StoryAsset> {
        self.stories.get(&id).ok_or(CoreError::UnknownStory(id))
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl FromIterator<(StoryId, StoryAsset)> for StoryCatalog {
    fn from_iter<I: IntoIterator<Item = (StoryId, StoryAsset)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
