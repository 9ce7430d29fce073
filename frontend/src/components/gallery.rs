use serde::Deserialize;

/// One lightbox picture: where to load it from and what to announce for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// The chair photos shown on the page, in gallery order.
pub fn default_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(
            "img/imprint-chair-modern-handcrafted-oak-leather-lounge-chair.jpg",
            "Modern handcrafted oak and leather lounge chair",
        ),
        GalleryImage::new(
            "img/indoor-outdoor-folding-chair-handcrafted-imprint_chair.jpg",
            "Indoor outdoor folding chair handcrafted",
        ),
        GalleryImage::new(
            "img/handmade-folding-camp-chair-natural-wood-imprint_chair.jpg",
            "Handmade folding camp chair with natural wood",
        ),
        GalleryImage::new(
            "img/artisan-handmade-folding-chair-legacy-design-earthy-leather-imprint_chair.jpg",
            "Artisan handmade folding chair with legacy design",
        ),
    ]
}

/// Read-only, ordered list of gallery images fixed at page load.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
}

impl Gallery {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(default_images())
    }
}

/// Reads a thumbnail's `data-index` the way `parseInt` would: leading
/// whitespace and an optional `+` are skipped, then the leading digits are
/// taken and anything after them ignored. Negative or digit-less values
/// give `None`.
pub fn gallery_index(raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let digits = raw
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(raw, |(end, _)| &raw[..end]);
    digits.parse().ok()
}

/// Index after `index`, wrapping to the first image. An empty list stays at 0.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + 1) % len
}

/// Index before `index`, wrapping to the last image. An empty list stays at 0.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - 1) % len
}
