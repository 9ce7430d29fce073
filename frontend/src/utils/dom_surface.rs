use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::components::gallery::GalleryImage;
use crate::components::scroll_effects::translate_y;
use crate::error::PageError;
use crate::utils::surface::{Surface, Viewport};

pub const NAVBAR: &str = ".navbar";
pub const NAVBAR_COLLAPSE: &str = ".navbar-collapse";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub const LIGHTBOX_CLOSE: &str = ".lightbox-close";
pub const LIGHTBOX_PREV: &str = ".lightbox-prev";
pub const LIGHTBOX_NEXT: &str = ".lightbox-next";
pub const GALLERY_ITEMS: &str = ".gallery-item";
pub const CURRENT_YEAR_ID: &str = "current-year";
pub const HERO_IMAGE: &str = ".hero-image";
pub const NAV_LINKS: &str = ".nav-link, a[href^=\"#\"]";
pub const REVEAL_ELEMENTS: &str = ".feature-item, .spec-item, .gallery-item, .story-content, \
                                   .features-image-wrapper, .specs-image-wrapper";

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::debug!("Could not toggle .{}: {:?}", class, e);
    }
}

/// The live document, with every element the page needs looked up once.
pub struct DomSurface {
    window: Window,
    document: Document,
    navbar: Option<HtmlElement>,
    navbar_collapse: Option<Element>,
    lightbox: Option<Element>,
    lightbox_img: Option<HtmlImageElement>,
    current_year: Option<Element>,
    hero_image: Option<HtmlElement>,
    reveal_elements: Vec<Element>,
}

impl DomSurface {
    pub fn new(window: Window) -> Result<Self, PageError> {
        let document = window.document().ok_or(PageError::NoWindow)?;
        let surface = Self {
            navbar: query(&document, NAVBAR).and_then(|el| el.dyn_into().ok()),
            navbar_collapse: query(&document, NAVBAR_COLLAPSE),
            lightbox: document.get_element_by_id(LIGHTBOX_ID),
            lightbox_img: document
                .get_element_by_id(LIGHTBOX_IMG_ID)
                .and_then(|el| el.dyn_into().ok()),
            current_year: document.get_element_by_id(CURRENT_YEAR_ID),
            hero_image: query(&document, HERO_IMAGE).and_then(|el| el.dyn_into().ok()),
            reveal_elements: query_all(&document, REVEAL_ELEMENTS)?,
            window,
            document,
        };
        if surface.lightbox.is_none() {
            log::info!("No #{} on this page, gallery viewer disabled", LIGHTBOX_ID);
        }
        Ok(surface)
    }

    fn hide_bootstrap_collapse(&self, collapse: &Element) -> Result<(), JsValue> {
        let bootstrap = js_sys::Reflect::get(&self.window, &"bootstrap".into())?;
        if bootstrap.is_undefined() {
            return Ok(());
        }
        let collapse_class = js_sys::Reflect::get(&bootstrap, &"Collapse".into())?;
        let get_instance: js_sys::Function =
            js_sys::Reflect::get(&collapse_class, &"getInstance".into())?.dyn_into()?;
        let instance = get_instance.call1(&collapse_class, collapse)?;
        if instance.is_null() || instance.is_undefined() {
            return Ok(());
        }
        let hide: js_sys::Function = js_sys::Reflect::get(&instance, &"hide".into())?.dyn_into()?;
        hide.call0(&instance)?;
        Ok(())
    }
}

impl Surface for DomSurface {
    fn viewport(&self) -> Viewport {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Viewport {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
        }
    }

    fn reveal_tops(&self) -> Vec<f64> {
        self.reveal_elements
            .iter()
            .map(|el| el.get_bounding_client_rect().top())
            .collect()
    }

    fn navbar_height(&self) -> f64 {
        self.navbar
            .as_ref()
            .map_or(0.0, |navbar| f64::from(navbar.offset_height()))
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        if id.is_empty() {
            return None;
        }
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn has_hero(&self) -> bool {
        self.hero_image.is_some()
    }

    fn current_year(&self) -> i32 {
        js_sys::Date::new_0().get_full_year() as i32
    }

    fn set_navbar_scrolled(&self, scrolled: bool) {
        if let Some(navbar) = &self.navbar {
            set_class(navbar, "scrolled", scrolled);
        }
    }

    fn set_lightbox_active(&self, active: bool) {
        if let Some(lightbox) = &self.lightbox {
            set_class(lightbox, "active", active);
        }
    }

    fn set_lightbox_image(&self, image: &GalleryImage) {
        if let Some(img) = &self.lightbox_img {
            img.set_src(&image.src);
            img.set_alt(&image.alt);
        }
    }

    fn set_body_scroll_locked(&self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::debug!("Could not update body overflow: {:?}", e);
        }
    }

    fn mark_reveal_candidates(&self) {
        for el in &self.reveal_elements {
            set_class(el, "reveal", true);
        }
    }

    fn reveal(&self, index: usize) {
        if let Some(el) = self.reveal_elements.get(index) {
            set_class(el, "revealed", true);
        }
    }

    fn set_hero_offset(&self, offset: f64) {
        if let Some(hero) = &self.hero_image {
            if let Err(e) = hero.style().set_property("transform", &translate_y(offset)) {
                log::debug!("Could not move hero image: {:?}", e);
            }
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn close_mobile_menu(&self) {
        let Some(collapse) = &self.navbar_collapse else {
            return;
        };
        if !collapse.class_list().contains("show") {
            return;
        }
        if let Err(e) = self.hide_bootstrap_collapse(collapse) {
            log::warn!("Could not close mobile menu: {:?}", e);
        }
    }

    fn set_footer_year(&self, year: i32) {
        if let Some(span) = &self.current_year {
            span.set_text_content(Some(&year.to_string()));
        }
    }

    fn preload(&self, images: &[GalleryImage]) {
        for image in images {
            match HtmlImageElement::new() {
                Ok(img) => img.set_src(&image.src),
                Err(e) => log::warn!("Could not preload {}: {:?}", image.src, e),
            }
        }
        log::debug!("Preloading {} gallery images", images.len());
    }
}
