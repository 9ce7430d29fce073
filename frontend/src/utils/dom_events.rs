use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, TouchEvent, Window};

use crate::components::gallery::gallery_index;
use crate::error::PageError;
use crate::utils::dom_surface::{
    query, query_all, GALLERY_ITEMS, LIGHTBOX_CLOSE, LIGHTBOX_ID, LIGHTBOX_NEXT, LIGHTBOX_PREV,
    NAV_LINKS,
};
use crate::utils::events::{ClickTarget, EventKind, EventOutcome, EventSource, Handler, PageEvent};

type SharedHandler = Rc<RefCell<Handler>>;

/// Browser-backed event source. Listeners stay attached for as long as this
/// value is alive.
pub struct DomEvents {
    window: Window,
    document: Document,
    lightbox: Option<Element>,
    reveal_delay_ms: u32,
    listeners: Vec<EventListener>,
    timers: Vec<Timeout>,
}

impl DomEvents {
    pub fn new(window: Window, reveal_delay_ms: u32) -> Result<Self, PageError> {
        let document = window.document().ok_or(PageError::NoWindow)?;
        Ok(Self {
            lightbox: document.get_element_by_id(LIGHTBOX_ID),
            window,
            document,
            reveal_delay_ms,
            listeners: Vec::new(),
            timers: Vec::new(),
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn listen<F>(&mut self, target: &EventTarget, event_type: &'static str, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners
            .push(EventListener::new(target, event_type, callback));
    }

    fn listen_click(&mut self, target: &EventTarget, handler: &SharedHandler, click: ClickTarget) {
        let handler = Rc::clone(handler);
        let listener = EventListener::new_with_options(
            target,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let outcome = (*handler.borrow_mut())(PageEvent::Click(click.clone()));
                if outcome == EventOutcome::PreventDefault {
                    event.prevent_default();
                }
            },
        );
        self.listeners.push(listener);
    }

    fn subscribe_clicks(&mut self, handler: Handler) -> Result<(), PageError> {
        let handler: SharedHandler = Rc::new(RefCell::new(handler));

        for item in query_all(&self.document, GALLERY_ITEMS)? {
            let raw = item.get_attribute("data-index");
            match gallery_index(raw.as_deref()) {
                Some(index) => {
                    self.listen_click(&item, &handler, ClickTarget::GalleryItem(index))
                }
                None => log::warn!("Gallery item without a usable data-index: {:?}", raw),
            }
        }

        let controls = [
            (LIGHTBOX_CLOSE, ClickTarget::LightboxClose),
            (LIGHTBOX_PREV, ClickTarget::LightboxPrev),
            (LIGHTBOX_NEXT, ClickTarget::LightboxNext),
        ];
        for (selector, click) in controls {
            if let Some(control) = query(&self.document, selector) {
                self.listen_click(&control, &handler, click);
            }
        }

        if let Some(lightbox) = self.lightbox.clone() {
            let handler = Rc::clone(&handler);
            let backdrop: JsValue = lightbox.clone().into();
            self.listen(&lightbox, "click", move |event| {
                let on_backdrop = event
                    .target()
                    .is_some_and(|target| JsValue::from(target) == backdrop);
                if on_backdrop {
                    (*handler.borrow_mut())(PageEvent::Click(ClickTarget::LightboxBackdrop));
                }
            });
        }

        for link in query_all(&self.document, NAV_LINKS)? {
            let Some(href) = link.get_attribute("href") else {
                continue;
            };
            self.listen_click(&link, &handler, ClickTarget::Anchor(href));
        }
        Ok(())
    }

    fn subscribe_touch(&mut self, kind: EventKind, mut handler: Handler) {
        let Some(lightbox) = self.lightbox.clone() else {
            return;
        };
        let (event_type, to_event): (&'static str, fn(f64) -> PageEvent) = match kind {
            EventKind::TouchStart => ("touchstart", PageEvent::TouchStart),
            _ => ("touchend", PageEvent::TouchEnd),
        };
        self.listen(&lightbox, event_type, move |event| {
            let x = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| touch.changed_touches().get(0))
                .map(|touch| f64::from(touch.screen_x()));
            if let Some(x) = x {
                handler(to_event(x));
            }
        });
    }

    fn subscribe_load(&mut self, mut handler: Handler) {
        // The module can finish loading after the window did.
        if self.document.ready_state() == "complete" {
            handler(PageEvent::Load);
            return;
        }
        let window = self.window.clone();
        self.listen(&window, "load", move |_| {
            handler(PageEvent::Load);
        });
    }
}

impl EventSource for DomEvents {
    fn subscribe(&mut self, kind: EventKind, mut handler: Handler) -> Result<(), PageError> {
        match kind {
            EventKind::Scroll => {
                let window = self.window.clone();
                self.listen(&window, "scroll", move |_| {
                    handler(PageEvent::Scroll);
                });
            }
            EventKind::Key => {
                let document = self.document.clone();
                self.listen(&document, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        handler(PageEvent::Key(event.key()));
                    }
                });
            }
            EventKind::Click => self.subscribe_clicks(handler)?,
            EventKind::TouchStart | EventKind::TouchEnd => self.subscribe_touch(kind, handler),
            EventKind::Load => self.subscribe_load(handler),
            EventKind::RevealTimer => {
                let timeout = Timeout::new(self.reveal_delay_ms, move || {
                    handler(PageEvent::RevealTimer);
                });
                self.timers.push(timeout);
            }
        }
        Ok(())
    }
}
