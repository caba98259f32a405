use experience_core::{PageGeometryTransform, Slide, StoryAsset, StoryCatalog, StoryId};
use serde::Deserialize;

/// Flattened runtime configuration; the on-disk form lives in `tables`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub density: f32,
    pub max_offset_dip: f32,
    pub splash_timeout_ms: u64,
    pub utterance_prefix: String,
    pub highlight_enabled: bool,
    pub narration_language: String,
    pub learning_difficult_text: String,
    pub learning_easy_text: String,
    pub log_level: LogLevel,
    pub slides: Vec<Slide>,
    pub stories: Vec<StoryEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            density: crate::config::defaults::default_density(),
            max_offset_dip: crate::config::defaults::default_max_offset_dip(),
            splash_timeout_ms: crate::config::defaults::default_splash_timeout_ms(),
            utterance_prefix: crate::config::defaults::default_utterance_prefix(),
            highlight_enabled: crate::config::defaults::default_highlight_enabled(),
            narration_language: crate::config::defaults::default_narration_language(),
            learning_difficult_text: crate::config::defaults::default_learning_difficult_text(),
            learning_easy_text: crate::config::defaults::default_learning_easy_text(),
            log_level: crate::config::defaults::default_log_level(),
            slides: crate::config::defaults::default_slides(),
            stories: crate::config::defaults::default_stories(),
        }
    }
}

impl AppConfig {
    pub fn page_transform(&self) -> PageGeometryTransform {
        PageGeometryTransform::from_density(self.max_offset_dip, self.density)
    }

    /// Later entries for the same story replace earlier ones.
    pub fn story_catalog(&self) -> StoryCatalog {
        self.stories
            .iter()
            .map(|entry| (entry.id, entry.asset.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct StoryEntry {
    pub id: StoryId,
    #[serde(flatten)]
    pub asset: StoryAsset,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
