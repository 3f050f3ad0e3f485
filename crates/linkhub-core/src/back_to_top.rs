use crate::throttle::ThrottleGate;

/// Scroll-driven visibility of the back-to-top button.
#[derive(Debug, Clone)]
pub struct BackToTop {
    threshold_px: f64,
    gate: ThrottleGate,
}

impl BackToTop {
    pub fn new(threshold_px: f64, throttle_ms: u32) -> Self {
        Self {
            threshold_px,
            gate: ThrottleGate::new(throttle_ms),
        }
    }

    pub fn is_visible_at(&self, offset_px: f64) -> bool {
        offset_px > self.threshold_px
    }

    /// Returns the visibility to apply, or `None` while throttled.
    pub fn on_scroll(&mut self, now_ms: f64, offset_px: f64) -> Option<bool> {
        if !self.gate.try_acquire(now_ms) {
            return None;
        }
        Some(self.is_visible_at(offset_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_only_strictly_past_threshold() {
        let control = BackToTop::new(300.0, 100);
        assert!(!control.is_visible_at(0.0));
        assert!(!control.is_visible_at(300.0));
        assert!(control.is_visible_at(300.5));
        assert!(control.is_visible_at(2_000.0));
    }

    #[test]
    fn scroll_updates_are_throttled() {
        let mut control = BackToTop::new(300.0, 100);
        assert_eq!(control.on_scroll(0.0, 500.0), Some(true));
        assert_eq!(control.on_scroll(50.0, 0.0), None);
        assert_eq!(control.on_scroll(100.0, 0.0), Some(false));
        assert_eq!(control.on_scroll(260.0, 301.0), Some(true));
    }
}
