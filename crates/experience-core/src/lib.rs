//! Core logic for the accessibility experience: the landing carousel, spoken
//! word highlighting and the impairment challenges.
//!
//! Nothing here talks to a UI toolkit or a media/speech engine directly.
//! Hosts feed geometry and callbacks in, and implement [`MediaEngine`] and
//! [`NarrationEngine`] for the engines they own.

pub mod carousel;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod motor;
pub mod narration;
pub mod playback;
pub mod story;
pub mod vision;

pub use carousel::{CarouselController, CarouselEvent, CarouselState, ImageRef, Slide};
pub use error::{CoreError, NarrationError, Result};
pub use geometry::{PageGeometryTransform, TransformResult, ViewportGeometry};
pub use highlight::{HighlightRange, NarrationFailure, UtteranceHighlightTracker, UtteranceId};
pub use narration::{InitStatus, LanguageSupport, NarrationEngine, Narrator};
pub use playback::{MediaEngine, PlaybackController, PlayerState};
pub use story::{ChallengeKind, StoryAsset, StoryCatalog, StoryId};

use std::fs;
use std::path::Path;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> std::result::Result<(), String> {
    T::export_all_to(out_dir).map_err(|err| err.to_string())
}

/// Writes TypeScript definitions for every host-facing type into `out_dir`,
/// replacing any `.ts` files already there.
pub fn export_ts_bindings(out_dir: &Path) -> std::result::Result<(), String> {
    fs::create_dir_all(out_dir)
        .map_err(|err| format!("Failed to create {}: {err}", out_dir.display()))?;

    for entry in fs::read_dir(out_dir)
        .map_err(|err| format!("Failed to list {}: {err}", out_dir.display()))?
    {
        let entry = entry.map_err(|err| format!("Failed to read entry: {err}"))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .map_err(|err| format!("Failed to remove {}: {err}", path.display()))?;
        }
    }

    export_single_type::<ViewportGeometry>(out_dir)?;
    export_single_type::<TransformResult>(out_dir)?;
    export_single_type::<CarouselEvent>(out_dir)?;
    export_single_type::<HighlightRange>(out_dir)?;
    export_single_type::<NarrationFailure>(out_dir)?;
    export_single_type::<InitStatus>(out_dir)?;
    export_single_type::<LanguageSupport>(out_dir)?;
    export_single_type::<StoryAsset>(out_dir)?;
    export_single_type::<PlayerState>(out_dir)?;
    export_single_type::<playback::PlayPauseLabel>(out_dir)?;
    export_single_type::<vision::ChipToggle>(out_dir)?;
    export_single_type::<vision::VisionRender>(out_dir)?;
    export_single_type::<vision::AccessibleContent>(out_dir)?;
    export_single_type::<motor::TouchRect>(out_dir)?;
    export_single_type::<motor::JitterOffset>(out_dir)?;
    export_single_type::<motor::LabelPlacement>(out_dir)?;
    Ok(())
}
