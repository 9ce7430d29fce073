use std::cell::RefCell;
use std::rc::Rc;

use crate::components::anchor_nav::{anchor_id, scroll_target};
use crate::components::gallery::Gallery;
use crate::components::lightbox::{Lightbox, LightboxCommand};
use crate::components::scroll_effects::{
    navbar_scrolled, parallax_enabled, parallax_offset, RevealTracker,
};
use crate::components::swipe::{SwipeDirection, SwipeTracker};
use crate::config::PageConfig;
use crate::error::PageError;
use crate::utils::events::{ClickTarget, EventKind, EventOutcome, EventSource, PageEvent};
use crate::utils::surface::Surface;

/// Behavior controller for the landing page.
///
/// Owns every piece of page state and routes each `PageEvent` to the
/// matching handler. All document access goes through `S`.
pub struct LandingPage<S: Surface> {
    config: PageConfig,
    surface: S,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    reveal: RevealTracker,
    parallax: bool,
}

impl<S: Surface> LandingPage<S> {
    pub fn new(config: PageConfig, surface: S) -> Self {
        let lightbox = Lightbox::new(Gallery::new(config.gallery.clone()));
        let swipe = SwipeTracker::new(config.swipe_threshold);
        Self {
            config,
            surface,
            lightbox,
            swipe,
            reveal: RevealTracker::default(),
            parallax: false,
        }
    }

    /// One-time setup that does not depend on any event.
    pub fn init(&mut self) {
        self.surface.set_footer_year(self.surface.current_year());

        self.surface.mark_reveal_candidates();
        self.reveal = RevealTracker::new(
            self.surface.reveal_tops().len(),
            self.config.reveal_offset,
        );

        // Width is only sampled here; resizing later does not toggle parallax.
        let viewport = self.surface.viewport();
        self.parallax = parallax_enabled(
            self.surface.has_hero(),
            viewport.width,
            self.config.parallax_min_width,
        );

        self.update_navbar();
        log::info!(
            "Landing page ready: {} gallery images, {} reveal elements, parallax {}",
            self.lightbox.gallery().len(),
            self.reveal.len(),
            if self.parallax { "on" } else { "off" }
        );
    }

    pub fn handle(&mut self, event: PageEvent) -> EventOutcome {
        match event {
            PageEvent::Scroll => {
                self.update_navbar();
                self.check_reveal();
                self.update_parallax();
                EventOutcome::Continue
            }
            PageEvent::Key(key) => {
                self.handle_key(&key);
                EventOutcome::Continue
            }
            PageEvent::Click(target) => self.handle_click(target),
            PageEvent::TouchStart(x) => {
                self.swipe.touch_start(x);
                EventOutcome::Continue
            }
            PageEvent::TouchEnd(x) => {
                match self.swipe.touch_end(x) {
                    Some(SwipeDirection::Left) => self.show_next_image(),
                    Some(SwipeDirection::Right) => self.show_prev_image(),
                    None => {}
                }
                EventOutcome::Continue
            }
            PageEvent::Load => {
                self.surface.preload(self.lightbox.gallery().images());
                EventOutcome::Continue
            }
            PageEvent::RevealTimer => {
                self.check_reveal();
                EventOutcome::Continue
            }
        }
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn reveal_state(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn parallax_enabled(&self) -> bool {
        self.parallax
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn open_lightbox(&mut self, index: usize) {
        let Some(image) = self.lightbox.open(index) else {
            log::warn!("No gallery image at index {}", index);
            return;
        };
        self.surface.set_lightbox_image(image);
        self.surface.set_lightbox_active(true);
        self.surface.set_body_scroll_locked(true);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.surface.set_lightbox_active(false);
        self.surface.set_body_scroll_locked(false);
    }

    pub fn show_prev_image(&mut self) {
        if let Some(image) = self.lightbox.prev() {
            self.surface.set_lightbox_image(image);
        }
    }

    pub fn show_next_image(&mut self) {
        if let Some(image) = self.lightbox.next() {
            self.surface.set_lightbox_image(image);
        }
    }

    fn handle_key(&mut self, key: &str) {
        match self.lightbox.key_command(key) {
            Some(LightboxCommand::Close) => self.close_lightbox(),
            Some(LightboxCommand::Previous) => self.show_prev_image(),
            Some(LightboxCommand::Next) => self.show_next_image(),
            None => {}
        }
    }

    fn handle_click(&mut self, target: ClickTarget) -> EventOutcome {
        match target {
            ClickTarget::GalleryItem(index) => self.open_lightbox(index),
            ClickTarget::LightboxClose | ClickTarget::LightboxBackdrop => self.close_lightbox(),
            ClickTarget::LightboxPrev => self.show_prev_image(),
            ClickTarget::LightboxNext => self.show_next_image(),
            ClickTarget::Anchor(href) => return self.navigate_to_anchor(&href),
        }
        EventOutcome::Continue
    }

    fn navigate_to_anchor(&mut self, href: &str) -> EventOutcome {
        let Some(id) = anchor_id(href) else {
            return EventOutcome::Continue;
        };
        if let Some(top) = self.surface.element_top(id) {
            let viewport = self.surface.viewport();
            let target = scroll_target(top, viewport.scroll_y, self.surface.navbar_height());
            self.surface.smooth_scroll_to(target);
            self.surface.close_mobile_menu();
        }
        EventOutcome::PreventDefault
    }

    fn update_navbar(&self) {
        let viewport = self.surface.viewport();
        self.surface.set_navbar_scrolled(navbar_scrolled(
            viewport.scroll_y,
            self.config.navbar_scroll_threshold,
        ));
    }

    fn check_reveal(&mut self) {
        if self.reveal.revealed_count() == self.reveal.len() {
            return;
        }
        let viewport = self.surface.viewport();
        let tops = self.surface.reveal_tops();
        for index in self.reveal.check(&tops, viewport.height) {
            self.surface.reveal(index);
        }
    }

    fn update_parallax(&self) {
        if !self.parallax {
            return;
        }
        let viewport = self.surface.viewport();
        if let Some(offset) =
            parallax_offset(viewport.scroll_y, viewport.height, self.config.parallax_speed)
        {
            self.surface.set_hero_offset(offset);
        }
    }
}

/// Subscribes the page to every event kind the source offers.
pub fn attach<S, E>(page: &Rc<RefCell<LandingPage<S>>>, source: &mut E) -> Result<(), PageError>
where
    S: Surface + 'static,
    E: EventSource,
{
    for kind in EventKind::ALL {
        let page = Rc::clone(page);
        source.subscribe(
            kind,
            Box::new(move |event| match page.try_borrow_mut() {
                Ok(mut page) => page.handle(event),
                Err(_) => {
                    log::warn!("Dropped {:?} while another handler was running", event.kind());
                    EventOutcome::Continue
                }
            }),
        )?;
    }
    Ok(())
}
