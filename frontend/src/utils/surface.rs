use crate::components::gallery::GalleryImage;

/// Scroll position and window size at the moment of reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the page controller reads from or writes to the document.
///
/// Writes aimed at an element the page does not have are silent no-ops.
pub trait Surface {
    fn viewport(&self) -> Viewport;
    /// Bounding-rect tops of the reveal candidates, in document order.
    fn reveal_tops(&self) -> Vec<f64>;
    fn navbar_height(&self) -> f64;
    /// Bounding-rect top of the element with this id, if it exists.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn has_hero(&self) -> bool;
    fn current_year(&self) -> i32;

    fn set_navbar_scrolled(&self, scrolled: bool);
    fn set_lightbox_active(&self, active: bool);
    fn set_lightbox_image(&self, image: &GalleryImage);
    fn set_body_scroll_locked(&self, locked: bool);
    fn mark_reveal_candidates(&self);
    fn reveal(&self, index: usize);
    fn set_hero_offset(&self, offset: f64);
    fn smooth_scroll_to(&self, top: f64);
    fn close_mobile_menu(&self);
    fn set_footer_year(&self, year: i32);
    fn preload(&self, images: &[GalleryImage]);
}
