/// Horizontal direction of a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved toward the left edge; shows the next image.
    Left,
    /// Finger moved toward the right edge; shows the previous image.
    Right,
}

/// Turns touch-start/touch-end pairs into swipe gestures.
///
/// The start coordinate is consumed by the matching touch-end, so an end
/// without a fresh start never reuses an old gesture's origin.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Travel must exceed the threshold; landing exactly on it is not a swipe.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let diff = start - x;
        if diff.abs() <= self.threshold {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
