use super::defaults;
use super::models::{AppConfig, LogLevel, StoryEntry};
use experience_core::Slide;
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    display: DisplayConfig,
    #[serde(default)]
    splash: SplashConfig,
    #[serde(default)]
    narration: NarrationConfig,
    #[serde(default)]
    learning: LearningConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default = "defaults::default_slides")]
    slides: Vec<Slide>,
    #[serde(default = "defaults::default_stories")]
    stories: Vec<StoryEntry>,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            density: tables.display.density,
            max_offset_dip: tables.display.max_offset_dip,
            splash_timeout_ms: tables.splash.timeout_ms,
            utterance_prefix: tables.narration.utterance_prefix,
            highlight_enabled: tables.narration.highlight_enabled,
            narration_language: tables.narration.language,
            learning_difficult_text: tables.learning.difficult_text,
            learning_easy_text: tables.learning.easy_text,
            log_level: tables.logging.log_level,
            slides: tables.slides,
            stories: tables.stories,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            display: DisplayConfig {
                density: config.density,
                max_offset_dip: config.max_offset_dip,
            },
            splash: SplashConfig {
                timeout_ms: config.splash_timeout_ms,
            },
            narration: NarrationConfig {
                utterance_prefix: config.utterance_prefix.clone(),
                highlight_enabled: config.highlight_enabled,
                language: config.narration_language.clone(),
            },
            learning: LearningConfig {
                difficult_text: config.learning_difficult_text.clone(),
                easy_text: config.learning_easy_text.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            slides: config.slides.clone(),
            stories: config.stories.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct DisplayConfig {
    #[serde(default = "defaults::default_density")]
    density: f32,
    #[serde(default = "defaults::default_max_offset_dip")]
    max_offset_dip: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            density: defaults::default_density(),
            max_offset_dip: defaults::default_max_offset_dip(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SplashConfig {
    #[serde(default = "defaults::default_splash_timeout_ms")]
    timeout_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        SplashConfig {
            timeout_ms: defaults::default_splash_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NarrationConfig {
    #[serde(default = "defaults::default_utterance_prefix")]
    utterance_prefix: String,
    #[serde(default = "defaults::default_highlight_enabled")]
    highlight_enabled: bool,
    #[serde(default = "defaults::default_narration_language")]
    language: String,
}

impl Default for NarrationConfig {
    fn default() -> Self {
        NarrationConfig {
            utterance_prefix: defaults::default_utterance_prefix(),
            highlight_enabled: defaults::default_highlight_enabled(),
            language: defaults::default_narration_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LearningConfig {
    #[serde(default = "defaults::default_learning_difficult_text")]
    difficult_text: String,
    #[serde(default = "defaults::default_learning_easy_text")]
    easy_text: String,
}

impl Default for LearningConfig {
    fn default() -> Self {
        LearningConfig {
            difficult_text: defaults::default_learning_difficult_text(),
            easy_text: defaults::default_learning_easy_text(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
