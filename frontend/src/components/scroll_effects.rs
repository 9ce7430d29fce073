/// Whether the navbar should carry its `scrolled` style at this offset.
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Hero translation for the current scroll position, or `None` once the
/// hero has scrolled a full viewport away and should be left where it is.
pub fn parallax_offset(scroll_y: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    if scroll_y < viewport_height {
        Some(scroll_y * speed)
    } else {
        None
    }
}

/// Parallax only runs on wide layouts that actually have a hero image.
pub fn parallax_enabled(has_hero: bool, viewport_width: f64, min_width: f64) -> bool {
    has_hero && viewport_width >= min_width
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

/// One-way reveal state for the page's reveal candidates.
///
/// Candidate `i` is revealed the first time its top edge is above
/// `viewport_height - offset`; it stays revealed afterwards.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    offset: f64,
}

impl RevealTracker {
    pub fn new(count: usize, offset: f64) -> Self {
        Self {
            revealed: vec![false; count],
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|revealed| **revealed).count()
    }

    /// Marks every candidate that has entered the viewport and returns the
    /// indices that were revealed by this call.
    pub fn check(&mut self, tops: &[f64], viewport_height: f64) -> Vec<usize> {
        let reveal_line = viewport_height - self.offset;
        let mut newly_revealed = Vec::new();
        for (index, (revealed, top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*revealed && *top < reveal_line {
                *revealed = true;
                newly_revealed.push(index);
            }
        }
        newly_revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(50.5, 50.0));
        assert!(navbar_scrolled(900.0, 50.0));
    }

    #[test]
    fn parallax_tracks_scroll_within_first_viewport() {
        assert_eq!(parallax_offset(100.0, 800.0, 0.3), Some(100.0 * 0.3));
        assert_eq!(parallax_offset(0.0, 800.0, 0.3), Some(0.0));
        assert_eq!(parallax_offset(800.0, 800.0, 0.3), None);
        assert_eq!(parallax_offset(1200.0, 800.0, 0.3), None);
    }

    #[test]
    fn parallax_needs_hero_and_wide_viewport() {
        assert!(parallax_enabled(true, 992.0, 992.0));
        assert!(!parallax_enabled(true, 991.0, 992.0));
        assert!(!parallax_enabled(false, 1400.0, 992.0));
    }

    #[test]
    fn translate_y_formats_pixels() {
        assert_eq!(translate_y(30.0), "translateY(30px)");
        assert_eq!(translate_y(12.5), "translateY(12.5px)");
    }

    #[test]
    fn reveals_elements_above_the_reveal_line() {
        let mut tracker = RevealTracker::new(3, 100.0);
        let revealed = tracker.check(&[50.0, 699.0, 700.0], 800.0);
        assert_eq!(revealed, vec![0, 1]);
        assert!(!tracker.is_revealed(2));
    }

    #[test]
    fn revealed_elements_never_unreveal() {
        let mut tracker = RevealTracker::new(2, 100.0);
        tracker.check(&[10.0, 2000.0], 800.0);
        assert!(tracker.is_revealed(0));

        // Scrolling back up pushes the element far below the viewport.
        let revealed = tracker.check(&[5000.0, 4000.0], 800.0);
        assert!(revealed.is_empty());
        assert!(tracker.is_revealed(0));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn each_element_is_reported_once() {
        let mut tracker = RevealTracker::new(1, 100.0);
        assert_eq!(tracker.check(&[0.0], 800.0), vec![0]);
        assert!(tracker.check(&[0.0], 800.0).is_empty());
    }

    #[test]
    fn missing_tops_are_skipped() {
        let mut tracker = RevealTracker::new(3, 100.0);
        assert_eq!(tracker.check(&[0.0], 800.0), vec![0]);
        assert!(!tracker.is_revealed(1));
    }
}
