//! In-memory `Surface` and `EventSource` for driving the page without a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::components::gallery::GalleryImage;
use crate::error::PageError;
use crate::utils::events::{EventKind, EventOutcome, EventSource, Handler, PageEvent};
use crate::utils::surface::{Surface, Viewport};

/// Records every write and serves scripted reads. Writes that never
/// happened read back as `None`.
pub struct RecordingSurface {
    viewport: Cell<Viewport>,
    reveal_tops: RefCell<Vec<f64>>,
    navbar_height: f64,
    elements: HashMap<String, f64>,
    hero: bool,
    year: i32,

    pub navbar_scrolled: Cell<Option<bool>>,
    pub lightbox_active: Cell<Option<bool>>,
    pub image: RefCell<Option<GalleryImage>>,
    pub body_locked: Cell<Option<bool>>,
    pub candidates_marked: Cell<bool>,
    pub revealed: RefCell<Vec<usize>>,
    pub hero_offset: Cell<Option<f64>>,
    pub scrolled_to: RefCell<Vec<f64>>,
    pub menu_closes: Cell<usize>,
    pub footer_year: Cell<Option<i32>>,
    pub preloaded: RefCell<Vec<String>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            viewport: Cell::new(Viewport {
                scroll_y: 0.0,
                width: 1280.0,
                height: 800.0,
            }),
            reveal_tops: RefCell::new(Vec::new()),
            navbar_height: 0.0,
            elements: HashMap::new(),
            hero: false,
            year: 2024,
            navbar_scrolled: Cell::new(None),
            lightbox_active: Cell::new(None),
            image: RefCell::new(None),
            body_locked: Cell::new(None),
            candidates_marked: Cell::new(false),
            revealed: RefCell::new(Vec::new()),
            hero_offset: Cell::new(None),
            scrolled_to: RefCell::new(Vec::new()),
            menu_closes: Cell::new(0),
            footer_year: Cell::new(None),
            preloaded: RefCell::new(Vec::new()),
        }
    }

    pub fn with_scroll_y(self, scroll_y: f64) -> Self {
        self.set_scroll_y(scroll_y);
        self
    }

    pub fn with_size(self, width: f64, height: f64) -> Self {
        let mut viewport = self.viewport.get();
        viewport.width = width;
        viewport.height = height;
        self.viewport.set(viewport);
        self
    }

    pub fn with_reveal_tops(self, tops: &[f64]) -> Self {
        self.set_reveal_tops(tops);
        self
    }

    pub fn with_navbar_height(mut self, height: f64) -> Self {
        self.navbar_height = height;
        self
    }

    pub fn with_element(mut self, id: &str, top: f64) -> Self {
        self.elements.insert(id.to_string(), top);
        self
    }

    pub fn with_hero(mut self) -> Self {
        self.hero = true;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        let mut viewport = self.viewport.get();
        viewport.scroll_y = scroll_y;
        self.viewport.set(viewport);
    }

    pub fn set_reveal_tops(&self, tops: &[f64]) {
        *self.reveal_tops.borrow_mut() = tops.to_vec();
    }

    pub fn shown_alt(&self) -> Option<String> {
        self.image.borrow().as_ref().map(|image| image.alt.clone())
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn reveal_tops(&self) -> Vec<f64> {
        self.reveal_tops.borrow().clone()
    }

    fn navbar_height(&self) -> f64 {
        self.navbar_height
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).copied()
    }

    fn has_hero(&self) -> bool {
        self.hero
    }

    fn current_year(&self) -> i32 {
        self.year
    }

    fn set_navbar_scrolled(&self, scrolled: bool) {
        self.navbar_scrolled.set(Some(scrolled));
    }

    fn set_lightbox_active(&self, active: bool) {
        self.lightbox_active.set(Some(active));
    }

    fn set_lightbox_image(&self, image: &GalleryImage) {
        *self.image.borrow_mut() = Some(image.clone());
    }

    fn set_body_scroll_locked(&self, locked: bool) {
        self.body_locked.set(Some(locked));
    }

    fn mark_reveal_candidates(&self) {
        self.candidates_marked.set(true);
    }

    fn reveal(&self, index: usize) {
        self.revealed.borrow_mut().push(index);
    }

    fn set_hero_offset(&self, offset: f64) {
        self.hero_offset.set(Some(offset));
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }

    fn close_mobile_menu(&self) {
        self.menu_closes.set(self.menu_closes.get() + 1);
    }

    fn set_footer_year(&self, year: i32) {
        self.footer_year.set(Some(year));
    }

    fn preload(&self, images: &[GalleryImage]) {
        self.preloaded
            .borrow_mut()
            .extend(images.iter().map(|image| image.src.clone()));
    }
}

/// Event source whose events are pushed by the test.
#[derive(Default)]
pub struct SyntheticEvents {
    handlers: Vec<(EventKind, Handler)>,
}

impl SyntheticEvents {
    /// Runs every handler subscribed to the event's kind, in subscription
    /// order. Any handler asking to prevent the default wins.
    pub fn dispatch(&mut self, event: PageEvent) -> EventOutcome {
        let kind = event.kind();
        let mut outcome = EventOutcome::Continue;
        for (_, handler) in self.handlers.iter_mut().filter(|(k, _)| *k == kind) {
            if handler(event.clone()) == EventOutcome::PreventDefault {
                outcome = EventOutcome::PreventDefault;
            }
        }
        outcome
    }

    pub fn subscribed(&self) -> Vec<EventKind> {
        self.handlers.iter().map(|(kind, _)| *kind).collect()
    }
}

impl EventSource for SyntheticEvents {
    fn subscribe(&mut self, kind: EventKind, handler: Handler) -> Result<(), PageError> {
        self.handlers.push((kind, handler));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handlers_run_in_subscription_order() {
        let order = std::rc::Rc::new(RefCell::new(Vec::new()));
        let mut events = SyntheticEvents::default();
        for label in ["first", "second"] {
            let order = order.clone();
            events
                .subscribe(
                    EventKind::Scroll,
                    Box::new(move |_| {
                        order.borrow_mut().push(label);
                        EventOutcome::Continue
                    }),
                )
                .expect("subscribe");
        }
        events.dispatch(PageEvent::Scroll);
        events.dispatch(PageEvent::Load);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
