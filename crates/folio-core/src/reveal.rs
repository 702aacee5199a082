//! Scroll-triggered reveal bookkeeping.
//!
//! Elements start hidden and fade in the first time enough of them scrolls
//! into view. Once revealed they stay revealed and are no longer observed.

use std::collections::HashSet;

/// Fraction of an element that must be visible before it is revealed
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Slack below the threshold still accepted; browsers may report a ratio
/// a hair under the threshold they just crossed
pub const REVEAL_RATIO_TOLERANCE: f64 = 0.01;

/// CSS class added to revealed elements
pub const VISIBLE_CLASS: &str = "visible";

/// Tracks which observed elements have been revealed
#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    observed: HashSet<String>,
    revealed: HashSet<String>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

impl RevealTracker {
    /// Create a tracker; `threshold` is clamped to `[0, 1]`
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Start watching an element
    ///
    /// Returns `false` if the element was already revealed, in which case
    /// there is nothing to watch.
    pub fn observe(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.revealed.contains(&id) {
            return false;
        }
        self.observed.insert(id)
    }

    /// Report an intersection change for `id`
    ///
    /// Returns `true` only the first time an observed element intersects
    /// at or above the threshold, within [`REVEAL_RATIO_TOLERANCE`]. The
    /// element is unobserved at that point.
    pub fn on_intersection(&mut self, id: &str, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + REVEAL_RATIO_TOLERANCE < self.threshold {
            return false;
        }
        if !self.observed.remove(id) {
            return false;
        }
        self.revealed.insert(id.to_string());
        tracing::debug!(id, ratio, "Revealing element");
        true
    }

    /// Whether `id` has been revealed
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Whether `id` is still being watched
    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.contains(id)
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Class list for an element: `base` plus the visible marker once revealed
    pub fn class_for(&self, id: &str, base: &str) -> String {
        if self.is_revealed(id) {
            format!("{} {}", base, VISIBLE_CLASS)
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::default();
        tracker.observe("about");

        assert!(tracker.on_intersection("about", true, 0.5));
        assert!(!tracker.on_intersection("about", true, 0.9));
        assert!(tracker.is_revealed("about"));
        assert!(!tracker.is_observed("about"));
    }

    #[test]
    fn test_below_threshold_keeps_observing() {
        let mut tracker = RevealTracker::new(0.25);
        tracker.observe("gallery");

        assert!(!tracker.on_intersection("gallery", true, 0.1));
        assert!(tracker.is_observed("gallery"));
        assert!(tracker.on_intersection("gallery", true, 0.25));
    }

    #[test]
    fn test_ratio_just_under_threshold_reveals() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.observe("gallery");

        assert!(tracker.on_intersection("gallery", true, 0.099_999));
        assert!(tracker.is_revealed("gallery"));
        assert!(!tracker.on_intersection("gallery", true, 0.5));
    }

    #[test]
    fn test_not_intersecting_is_ignored() {
        let mut tracker = RevealTracker::default();
        tracker.observe("contact");
        assert!(!tracker.on_intersection("contact", false, 1.0));
        assert!(!tracker.is_revealed("contact"));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut tracker = RevealTracker::default();
        assert!(!tracker.on_intersection("ghost", true, 1.0));
    }

    #[test]
    fn test_observe_after_reveal() {
        let mut tracker = RevealTracker::default();
        tracker.observe("hero");
        tracker.on_intersection("hero", true, 1.0);
        assert!(!tracker.observe("hero"));
        assert!(!tracker.is_observed("hero"));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(RevealTracker::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTracker::new(f64::NAN).threshold(), DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn test_class_for() {
        let mut tracker = RevealTracker::default();
        tracker.observe("card-1");
        assert_eq!(tracker.class_for("card-1", "project-card"), "project-card");
        tracker.on_intersection("card-1", true, 0.3);
        assert_eq!(tracker.class_for("card-1", "project-card"), "project-card visible");
    }
}
