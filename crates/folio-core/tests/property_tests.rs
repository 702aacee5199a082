//! Property-based tests for the modal and reveal state machines
//!
//! Uses proptest to check that arbitrary event sequences keep the
//! invariants: one unlock per removal, one reveal per element.

use folio_core::{ClickTarget, ModalController, ModalId, ProjectSummary, RevealTracker, ScrollSurface};
use proptest::prelude::*;

#[derive(Debug, Default)]
struct Counting {
    locked: bool,
    locks: usize,
    unlocks: usize,
}

impl ScrollSurface for Counting {
    fn lock(&mut self) {
        self.locked = true;
        self.locks += 1;
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.unlocks += 1;
    }
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events the page can deliver to the modal controller
#[derive(Debug, Clone)]
enum ModalEvent {
    Open,
    Click(usize, ClickTarget),
    AnimationEnd(usize),
}

fn click_target_strategy() -> impl Strategy<Value = ClickTarget> {
    prop_oneof![
        Just(ClickTarget::Backdrop),
        Just(ClickTarget::Content),
        Just(ClickTarget::CloseControl),
    ]
}

fn modal_events_strategy(max_events: usize) -> impl Strategy<Value = Vec<ModalEvent>> {
    prop::collection::vec(
        prop_oneof![
            1 => Just(ModalEvent::Open),
            3 => (0..8usize, click_target_strategy()).prop_map(|(i, t)| ModalEvent::Click(i, t)),
            3 => (0..8usize).prop_map(ModalEvent::AnimationEnd),
        ],
        0..max_events,
    )
}

/// Intersection reports: (element index, intersecting, ratio)
fn intersections_strategy() -> impl Strategy<Value = Vec<(usize, bool, f64)>> {
    prop::collection::vec((0..6usize, any::<bool>(), 0.0..=1.0f64), 0..60)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every removal releases the lock exactly once, and the body is
    /// locked exactly when some modal remains
    #[test]
    fn scroll_lock_tracks_open_modals(events in modal_events_strategy(80)) {
        let mut modals = ModalController::new(Counting::default());
        let mut opened: Vec<ModalId> = Vec::new();
        let mut removals = 0usize;

        for event in events {
            match event {
                ModalEvent::Open => opened.push(modals.open(ProjectSummary::default())),
                ModalEvent::Click(i, target) => {
                    if let Some(id) = opened.get(i) {
                        modals.handle_click(*id, target);
                    }
                }
                ModalEvent::AnimationEnd(i) => {
                    if let Some(id) = opened.get(i) {
                        if modals.finish_close(*id) {
                            removals += 1;
                        }
                    }
                }
            }

            prop_assert_eq!(modals.surface().locked, !modals.instances().is_empty());
            prop_assert_eq!(modals.instances().len(), opened.len() - removals);
        }

        prop_assert!(modals.surface().unlocks <= modals.surface().locks);
    }

    /// Elements are revealed at most once no matter how often they re-enter
    #[test]
    fn reveal_fires_at_most_once(reports in intersections_strategy()) {
        let mut tracker = RevealTracker::default();
        for i in 0..6 {
            tracker.observe(format!("section-{}", i));
        }

        let mut fired = [0usize; 6];
        for (i, intersecting, ratio) in reports {
            if tracker.on_intersection(&format!("section-{}", i), intersecting, ratio) {
                fired[i] += 1;
            }
        }

        for (i, count) in fired.iter().enumerate() {
            prop_assert!(*count <= 1);
            prop_assert_eq!(*count == 1, tracker.is_revealed(&format!("section-{}", i)));
        }
    }
}
