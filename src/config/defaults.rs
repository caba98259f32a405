use experience_core::{ChallengeKind, ImageRef, Slide, StoryAsset, StoryId};

pub(crate) fn default_density() -> f32 {
    2.0
}

pub(crate) fn default_max_offset_dip() -> f32 {
    experience_core::geometry::MAX_TRANSLATE_OFFSET_X_DIP
}

pub(crate) fn default_splash_timeout_ms() -> u64 {
    2000
}

pub(crate) fn default_utterance_prefix() -> String {
    experience_core::highlight::DEFAULT_UTTERANCE_PREFIX.to_string()
}

pub(crate) fn default_highlight_enabled() -> bool {
    false
}

pub(crate) fn default_narration_language() -> String {
    "en-US".to_string()
}

pub(crate) fn default_learning_difficult_text() -> String {
    "Prior to commencing the assessment, participants are required to peruse the \
     accompanying documentation in its entirety. Subsequently, they must ascertain \
     the appropriate response for each enumerated item and indicate their selection \
     accordingly."
        .to_string()
}

pub(crate) fn default_learning_easy_text() -> String {
    "Before you start, read the guide. Then pick one answer for each question.".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            title: "Blindness".to_string(),
            body: "Follow a day with little or no sight and try an app built without a \
                   screen reader in mind."
                .to_string(),
            image_ref: ImageRef::Drawable("blindness".to_string()),
            story_id: StoryId::Blindness,
        },
        Slide {
            title: "Deafness".to_string(),
            body: "Watch a story without sound and see what captions change.".to_string(),
            image_ref: ImageRef::Drawable("deafness".to_string()),
            story_id: StoryId::Deafness,
        },
        Slide {
            title: "Motor impairment".to_string(),
            body: "Try to tick small, moving targets with an unsteady hand.".to_string(),
            image_ref: ImageRef::Drawable("motor_impairment".to_string()),
            story_id: StoryId::MotorImpairment,
        },
        Slide {
            title: "Learning disabilities".to_string(),
            body: "Read dense instructions, then listen to them with highlighting.".to_string(),
            image_ref: ImageRef::Drawable("learning_disability".to_string()),
            story_id: StoryId::LearningDisability,
        },
    ]
}

pub(crate) fn default_stories() -> Vec<crate::config::StoryEntry> {
    let entry = |id: StoryId, stem: &str, challenge: ChallengeKind| crate::config::StoryEntry {
        id,
        asset: StoryAsset {
            subtitles_path: format!("file:///android_asset/{stem}_story_subtitles.srt"),
            video_resource: format!("raw/{stem}_story_video"),
            challenge,
        },
    };
    vec![
        entry(StoryId::Blindness, "blind", ChallengeKind::Vision),
        entry(StoryId::Deafness, "deaf", ChallengeKind::Deaf),
        entry(
            StoryId::MotorImpairment,
            "motor_impairment",
            ChallengeKind::MotorImpairment,
        ),
        entry(
            StoryId::LearningDisability,
            "learning_disability",
            ChallengeKind::LearningDisability,
        ),
    ]
}
