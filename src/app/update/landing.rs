use super::Effect;
use crate::app::engines::HostPlayer;
use crate::app::state::{App, Screen};
use experience_core::{CarouselEvent, PlaybackController, ViewportGeometry};
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_splash_elapsed(&mut self, effects: &mut Vec<Effect>) {
        if self.screen != Screen::Splash {
            return;
        }
        self.navigate(Screen::Landing, effects);
        // The first page never settles, so arm it explicitly.
        self.carousel.select_current();
        self.drain_selections(effects);
    }

    pub(super) fn handle_layout(
        &mut self,
        page: usize,
        geometry: &ViewportGeometry,
        effects: &mut Vec<Effect>,
    ) {
        if self.screen != Screen::Landing {
            return;
        }
        let transform = self.carousel.layout_page(geometry);
        if transform.is_visible() {
            effects.push(Effect::TransformPage { page, transform });
        } else {
            effects.push(Effect::SetElevation {
                page,
                elevation: transform.elevation,
            });
        }
    }

    pub(super) fn handle_drag_started(&mut self) {
        if self.screen == Screen::Landing {
            self.carousel.begin_drag();
        }
    }

    pub(super) fn handle_page_settled(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if self.screen != Screen::Landing {
            return;
        }
        if let Err(err) = self.carousel.settle(index) {
            warn!(index, "Ignoring settle: {err}");
            return;
        }
        self.drain_selections(effects);
    }

    fn drain_selections(&mut self, effects: &mut Vec<Effect>) {
        while let Ok(CarouselEvent::SlideSelected { index, slide }) = self.selections.try_recv() {
            debug!(index, story = %slide.story_id, "Slide armed");
            effects.push(Effect::SlideArmed {
                index,
                story_id: slide.story_id,
            });
            self.armed_slide = Some(slide);
        }
    }

    pub(super) fn handle_slide_tapped(&mut self, effects: &mut Vec<Effect>) {
        if self.screen != Screen::Landing {
            return;
        }
        let Some(story_id) = self.armed_slide.as_ref().map(|slide| slide.story_id) else {
            return;
        };
        let asset = match self.catalog.get(story_id) {
            Ok(asset) => asset.clone(),
            Err(err) => {
                warn!("Cannot open story: {err}");
                return;
            }
        };
        info!(story = %story_id, video = %asset.video_resource, "Opening story");
        let mut playback = PlaybackController::new(HostPlayer::default(), &asset);
        playback.resume();
        self.playback = Some(playback);
        self.navigate(Screen::Story { story: story_id }, effects);
    }
}
