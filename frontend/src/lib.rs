//! Interactive behavior for the Imprint chair landing page: navbar styling,
//! the gallery lightbox, scroll reveals, anchor scrolling and hero parallax.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Window;

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod utils;

use config::PageConfig;
use error::PageError;
use pages::landing::{attach, LandingPage};
use utils::dom_events::DomEvents;
use utils::dom_surface::DomSurface;

/// Page state and listeners, kept alive until the page unloads.
struct Session {
    _page: Rc<RefCell<LandingPage<DomSurface>>>,
    _events: DomEvents,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    if let Err(e) = boot() {
        log::error!("Page behavior not started: {}", e);
    }
}

fn boot() -> Result<(), PageError> {
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoWindow)?;

    if document.ready_state() != "loading" {
        return run(window);
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| {
        if let Err(e) = run(window) {
            log::error!("Page behavior not started: {}", e);
        }
    })
    .forget();
    Ok(())
}

fn run(window: Window) -> Result<(), PageError> {
    let document = window.document().ok_or(PageError::NoWindow)?;
    let config = PageConfig::from_document(&document);
    let reveal_delay_ms = config.reveal_initial_delay_ms;

    let surface = DomSurface::new(window.clone())?;
    let page = Rc::new(RefCell::new(LandingPage::new(config, surface)));
    page.borrow_mut().init();

    let mut events = DomEvents::new(window, reveal_delay_ms)?;
    attach(&page, &mut events)?;
    log::debug!("Attached {} listeners", events.listener_count());

    SESSION.with(|session| {
        *session.borrow_mut() = Some(Session {
            _page: page,
            _events: events,
        });
    });
    Ok(())
}
