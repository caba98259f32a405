use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!(
                slides = cfg.slides.len(),
                stories = cfg.stories.len(),
                "Parsed configuration from disk"
            );
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config tables")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("serializing config tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use experience_core::{ChallengeKind, ImageRef, StoryId};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.slides.len(), 4);
        assert_eq!(config.story_catalog().len(), 4);
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse_config(
            r#"
            [display]
            density = 3.0

            [narration]
            utterance_prefix = "LearningDisabilityId"
            highlight_enabled = true

            [logging]
            log_level = "warn"

            [[slides]]
            title = "Deafness"
            body = "Captions matter."
            image_ref = "black-background"
            story_id = "deafness"

            [[stories]]
            id = "deafness"
            subtitles_path = "subs/deaf.srt"
            video_resource = "raw/deaf"
            challenge = "deaf"
            "#,
        )
        .unwrap();

        assert_eq!(config.density, 3.0);
        assert_eq!(config.max_offset_dip, 180.0);
        assert_eq!(config.page_transform().max_offset_px(), 540.0);
        assert_eq!(config.utterance_prefix, "LearningDisabilityId");
        assert!(config.highlight_enabled);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.slides.len(), 1);
        assert_eq!(config.slides[0].image_ref, ImageRef::BlackBackground);
        let catalog = config.story_catalog();
        assert_eq!(
            catalog.get(StoryId::Deafness).map(|asset| asset.challenge),
            Ok(ChallengeKind::Deaf)
        );
        assert!(catalog.get(StoryId::Blindness).is_err());
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"\n").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let config = AppConfig::default();
        let encoded = serialize_config(&config).unwrap();
        assert_eq!(parse_config(&encoded).unwrap(), config);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Path::new("does/not/exist.toml"));
        assert_eq!(config, AppConfig::default());
    }
}
