//! Landing carousel: slides bound to a swipeable viewport.
//!
//! The host owns the actual widget. It tells the controller when a drag
//! begins, asks it for page transforms on every layout pass and reports the
//! index the viewport settled on. Subscribers receive a
//! [`CarouselEvent::SlideSelected`] for every settle over an mpsc channel.

use crate::error::{CoreError, Result};
use crate::geometry::{PageGeometryTransform, TransformResult, ViewportGeometry};
use crate::story::StoryId;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, trace};
use ts_rs::TS;

/// Background shown behind a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ImageRef {
    Drawable(String),
    /// No artwork; the page is painted solid black.
    BlackBackground,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Slide {
    pub title: String,
    pub body: String,
    pub image_ref: ImageRef,
    pub story_id: StoryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Idle(usize),
    Dragging { from: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CarouselEvent {
    SlideSelected { index: usize, slide: Slide },
}

pub struct CarouselController {
    slides: Vec<Slide>,
    state: CarouselState,
    transform: PageGeometryTransform,
    subscribers: Vec<Sender<CarouselEvent>>,
}

impl CarouselController {
    pub fn new(slides: Vec<Slide>, transform: PageGeometryTransform) -> Result<Self> {
        if slides.is_empty() {
            return Err(CoreError::EmptySlides);
        }
        debug!(slides = slides.len(), "Carousel bound to slides");
        Ok(Self {
            slides,
            state: CarouselState::Idle(0),
            transform,
            subscribers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self) -> Receiver<CarouselEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        match self.state {
            CarouselState::Idle(idx) => idx,
            CarouselState::Dragging { from } => from,
        }
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_index()]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; construction rejects an empty slide list.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Label for the page indicator dot at `index`.
    pub fn page_title(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(|slide| slide.title.as_str())
    }

    pub fn begin_drag(&mut self) {
        if let CarouselState::Idle(from) = self.state {
            trace!(from, "Carousel drag started");
            self.state = CarouselState::Dragging { from };
        }
    }

    /// Transform for one page during a layout pass. Never changes the index.
    pub fn layout_page(&self, geom: &ViewportGeometry) -> TransformResult {
        self.transform.compute(geom)
    }

    /// Enters `Idle(index)` and publishes one selection event.
    pub fn settle(&mut self, index: usize) -> Result<()> {
        if index >= self.slides.len() {
            return Err(CoreError::SlideIndexOutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        debug!(from = self.current_index(), to = index, "Carousel settled");
        self.state = CarouselState::Idle(index);
        self.publish_selected(index);
        Ok(())
    }

    /// Publishes a selection for the resting page without a gesture, used
    /// once the landing screen is first shown.
    pub fn select_current(&mut self) {
        let index = self.current_index();
        self.state = CarouselState::Idle(index);
        self.publish_selected(index);
    }

    fn publish_selected(&mut self, index: usize) {
        let slide = self.slides[index].clone();
        self.subscribers.retain(|tx| {
            tx.send(CarouselEvent::SlideSelected {
                index,
                slide: slide.clone(),
            })
            .is_ok()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str, story_id: StoryId) -> Slide {
        Slide {
            title: title.to_string(),
            body: format!("{title} body"),
            image_ref: ImageRef::Drawable(title.to_ascii_lowercase()),
            story_id,
        }
    }

    fn controller() -> CarouselController {
        CarouselController::new(
            vec![
                slide("Blind", StoryId::Blindness),
                slide("Deaf", StoryId::Deafness),
                slide("Motor", StoryId::MotorImpairment),
            ],
            PageGeometryTransform::new(360.0),
        )
        .unwrap()
    }

    #[test]
    fn empty_slides_are_rejected() {
        let result = CarouselController::new(Vec::new(), PageGeometryTransform::new(360.0));
        assert!(matches!(result, Err(CoreError::EmptySlides)));
    }

    #[test]
    fn settle_emits_exactly_one_selection() {
        let mut carousel = controller();
        let events = carousel.subscribe();

        carousel.begin_drag();
        assert_eq!(carousel.state(), CarouselState::Dragging { from: 0 });
        assert!(events.try_recv().is_err());

        carousel.settle(2).unwrap();
        assert_eq!(carousel.state(), CarouselState::Idle(2));
        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(received.len(), 1);
        let CarouselEvent::SlideSelected { index, slide } = &received[0];
        assert_eq!(*index, 2);
        assert_eq!(slide.story_id, StoryId::MotorImpairment);
    }

    #[test]
    fn settling_on_same_index_reemits() {
        let mut carousel = controller();
        let events = carousel.subscribe();
        carousel.settle(1).unwrap();
        carousel.begin_drag();
        carousel.settle(1).unwrap();
        assert_eq!(events.try_iter().count(), 2);
    }

    #[test]
    fn dragging_keeps_current_index() {
        let mut carousel = controller();
        carousel.settle(1).unwrap();
        carousel.begin_drag();
        let geom = ViewportGeometry {
            viewport_width: 1000.0,
            viewport_left_scroll: 1300.0,
            page_left: 1000.0,
            page_width: 1000.0,
        };
        let _ = carousel.layout_page(&geom);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.current_slide().title, "Deaf");
    }

    #[test]
    fn out_of_range_settle_is_rejected_without_event() {
        let mut carousel = controller();
        let events = carousel.subscribe();
        assert_eq!(
            carousel.settle(3),
            Err(CoreError::SlideIndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.current_index(), 0);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn initial_selection_targets_first_page() {
        let mut carousel = controller();
        let events = carousel.subscribe();
        carousel.select_current();
        let received: Vec<_> = events.try_iter().collect();
        assert_eq!(received.len(), 1);
        let CarouselEvent::SlideSelected { index, .. } = &received[0];
        assert_eq!(*index, 0);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut carousel = controller();
        drop(carousel.subscribe());
        let live = carousel.subscribe();
        carousel.settle(1).unwrap();
        assert_eq!(carousel.subscribers.len(), 1);
        assert_eq!(live.try_iter().count(), 1);
    }

    #[test]
    fn page_titles_follow_slide_order() {
        let carousel = controller();
        assert_eq!(carousel.page_title(1), Some("Deaf"));
        assert_eq!(carousel.page_title(7), None);
    }
}
