use crate::components::gallery::{wrap_next, wrap_prev, Gallery, GalleryImage};

/// Visibility of the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

/// What a key press asks of an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Previous,
    Next,
}

impl LightboxCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Gallery viewer state: the image being shown and whether the overlay is up.
///
/// The index is always inside the gallery (or 0 for an empty gallery), so
/// rendering never has to bounds-check.
#[derive(Debug, Clone)]
pub struct Lightbox {
    gallery: Gallery,
    index: usize,
    overlay: Overlay,
}

impl Lightbox {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            index: 0,
            overlay: Overlay::Closed,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.gallery.get(self.index)
    }

    /// Shows the image at `index`. Indices outside the gallery leave the
    /// lightbox untouched and return `None`.
    pub fn open(&mut self, index: usize) -> Option<&GalleryImage> {
        if index >= self.gallery.len() {
            return None;
        }
        self.index = index;
        self.overlay = Overlay::Open;
        self.current()
    }

    pub fn close(&mut self) {
        self.overlay = Overlay::Closed;
    }

    pub fn next(&mut self) -> Option<&GalleryImage> {
        self.index = wrap_next(self.index, self.gallery.len());
        self.current()
    }

    pub fn prev(&mut self) -> Option<&GalleryImage> {
        self.index = wrap_prev(self.index, self.gallery.len());
        self.current()
    }

    /// Maps a key to a command, but only while the overlay is open.
    pub fn key_command(&self, key: &str) -> Option<LightboxCommand> {
        if !self.is_open() {
            return None;
        }
        LightboxCommand::from_key(key)
    }
}
