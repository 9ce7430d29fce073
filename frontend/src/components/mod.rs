pub mod anchor_nav;
pub mod gallery;
pub mod lightbox;
pub mod scroll_effects;
pub mod swipe;
