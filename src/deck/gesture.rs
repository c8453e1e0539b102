use super::SwipeDirection;

/// Drag distance, in logical units, a card must travel to count as a swipe
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

/// Turns the end of a horizontal drag into a swipe decision
pub trait SwipeGesture {
    /// `None` means the card springs back and the deck is untouched
    fn on_drag_end(&self, offset: f64) -> Option<SwipeDirection>;
}

/// Swipes once the absolute offset strictly exceeds a fixed distance
#[derive(Debug, Clone, Copy)]
pub struct ThresholdGesture {
    threshold: f64,
}

impl ThresholdGesture {
    pub fn new(threshold: f64) -> Self {
        ThresholdGesture {
            threshold: threshold.abs(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ThresholdGesture {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeGesture for ThresholdGesture {
    fn on_drag_end(&self, offset: f64) -> Option<SwipeDirection> {
        if offset.is_nan() {
            None
        } else if offset > self.threshold {
            Some(SwipeDirection::Right)
        } else if offset < -self.threshold {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }
}
