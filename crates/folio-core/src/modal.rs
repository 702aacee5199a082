//! Project lightbox lifecycle.
//!
//! Each modal moves through `Open -> Closing -> Removed`. Closing starts the
//! exit animation; removal happens when the front-end reports that the
//! animation ended. Both transitions are guarded by the current state, so
//! any number of close triggers or animation-end signals for the same
//! instance produce exactly one removal and one scroll-lock release.
//!
//! ## Usage
//!
//! ```ignore
//! let mut modals = ModalController::new(BodyScroll);
//! let id = modals.open(summary);
//! modals.handle_click(id, ClickTarget::Backdrop); // starts closing
//! modals.finish_close(id);                        // animation ended
//! ```

use crate::scroll::{ScrollLock, ScrollSurface};
use crate::types::{ModalId, ProjectSummary};

/// Lifecycle state of a modal instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    /// Visible and accepting close triggers
    Open,
    /// Exit animation running; further close triggers are ignored
    Closing,
    /// Gone from the document
    Removed,
}

impl ModalState {
    /// CSS class applied to the overlay for this state
    pub fn class(&self) -> &'static str {
        match self {
            ModalState::Open | ModalState::Removed => "modal-overlay",
            ModalState::Closing => "modal-overlay closing",
        }
    }
}

/// Where inside a modal a click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The translucent overlay itself, outside the content panel
    Backdrop,
    /// Anywhere inside the content panel
    Content,
    /// The explicit close control
    CloseControl,
}

/// One lightbox on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInstance {
    /// Identifier scoped to this instance
    pub id: ModalId,
    /// Project shown in the lightbox, captured at open time
    pub summary: ProjectSummary,
    /// Current lifecycle state
    pub state: ModalState,
}

/// Owns the open modals and the background scroll lock
#[derive(Debug)]
pub struct ModalController<S> {
    instances: Vec<ModalInstance>,
    scroll: ScrollLock<S>,
    next_id: u64,
}

impl<S: ScrollSurface> ModalController<S> {
    /// Create a controller with no open modals
    pub fn new(surface: S) -> Self {
        Self {
            instances: Vec::new(),
            scroll: ScrollLock::new(surface),
            next_id: 1,
        }
    }

    /// Open a new modal showing `summary` on top of any existing ones
    pub fn open(&mut self, summary: ProjectSummary) -> ModalId {
        let id = ModalId(self.next_id);
        self.next_id += 1;

        tracing::info!(%id, title = %summary.title, "Opening project modal");
        self.instances.push(ModalInstance {
            id,
            summary,
            state: ModalState::Open,
        });
        self.scroll.acquire();
        id
    }

    /// Start closing a modal
    ///
    /// Returns `true` if the instance moved from `Open` to `Closing`.
    /// Closing an instance that is already closing, removed, or unknown
    /// does nothing.
    pub fn close(&mut self, id: ModalId) -> bool {
        match self.instance_mut(id) {
            Some(instance) if instance.state == ModalState::Open => {
                instance.state = ModalState::Closing;
                tracing::debug!(%id, "Modal closing");
                true
            }
            Some(instance) => {
                tracing::debug!(%id, state = ?instance.state, "Ignoring close for modal not open");
                false
            }
            None => {
                tracing::debug!(%id, "Ignoring close for unknown modal");
                false
            }
        }
    }

    /// Complete a close once the exit animation has ended
    ///
    /// Returns `true` exactly once per instance: when it leaves `Closing`.
    /// The instance is dropped and its scroll-lock reference released.
    pub fn finish_close(&mut self, id: ModalId) -> bool {
        let Some(index) = self
            .instances
            .iter()
            .position(|m| m.id == id && m.state == ModalState::Closing)
        else {
            return false;
        };

        let mut instance = self.instances.remove(index);
        instance.state = ModalState::Removed;
        self.scroll.release();
        tracing::info!(%id, remaining = self.instances.len(), "Modal removed");
        true
    }

    /// Route a click inside modal `id`
    ///
    /// Backdrop and close-control clicks both start closing; content
    /// clicks are ignored.
    pub fn handle_click(&mut self, id: ModalId, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl => self.close(id),
            ClickTarget::Content => false,
        }
    }

    /// Modals currently in the document, bottom-most first
    pub fn instances(&self) -> &[ModalInstance] {
        &self.instances
    }

    /// Look up one instance
    pub fn get(&self, id: ModalId) -> Option<&ModalInstance> {
        self.instances.iter().find(|m| m.id == id)
    }

    /// State of an instance; ids no longer present report `Removed`
    pub fn state(&self, id: ModalId) -> ModalState {
        self.get(id).map(|m| m.state).unwrap_or(ModalState::Removed)
    }

    /// Whether any modal still holds the scroll lock
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    /// Access the scroll surface
    pub fn surface(&self) -> &S {
        self.scroll.surface()
    }

    fn instance_mut(&mut self, id: ModalId) -> Option<&mut ModalInstance> {
        self.instances.iter_mut().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Flag {
        locked: bool,
        unlocks: usize,
    }

    impl ScrollSurface for Flag {
        fn lock(&mut self) {
            self.locked = true;
        }
        fn unlock(&mut self) {
            self.locked = false;
            self.unlocks += 1;
        }
    }

    fn summary() -> ProjectSummary {
        ProjectSummary::new("Weather App", "Forecasts", "img/weather.png")
    }

    #[test]
    fn test_open_locks_scroll_and_appends() {
        let mut modals = ModalController::new(Flag::default());
        let id = modals.open(summary());

        assert!(modals.surface().locked);
        assert_eq!(modals.instances().len(), 1);
        assert_eq!(modals.state(id), ModalState::Open);
    }

    #[test]
    fn test_close_then_finish() {
        let mut modals = ModalController::new(Flag::default());
        let id = modals.open(summary());

        assert!(modals.close(id));
        assert_eq!(modals.state(id), ModalState::Closing);
        assert!(modals.surface().locked, "still locked while animating");

        assert!(modals.finish_close(id));
        assert_eq!(modals.state(id), ModalState::Removed);
        assert!(!modals.surface().locked);
        assert!(modals.instances().is_empty());
    }

    #[test]
    fn test_content_click_does_not_close() {
        let mut modals = ModalController::new(Flag::default());
        let id = modals.open(summary());

        assert!(!modals.handle_click(id, ClickTarget::Content));
        assert_eq!(modals.state(id), ModalState::Open);
    }

    #[test]
    fn test_finish_without_close_is_ignored() {
        let mut modals = ModalController::new(Flag::default());
        let id = modals.open(summary());

        assert!(!modals.finish_close(id));
        assert_eq!(modals.state(id), ModalState::Open);
        assert_eq!(modals.surface().unlocks, 0);
    }

    #[test]
    fn test_state_classes() {
        assert_eq!(ModalState::Open.class(), "modal-overlay");
        assert_eq!(ModalState::Closing.class(), "modal-overlay closing");
        assert_eq!(ModalState::Removed.class(), "modal-overlay");
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut modals = ModalController::new(Flag::default());
        let first = modals.open(summary());
        modals.close(first);
        modals.finish_close(first);
        let second = modals.open(summary());
        assert_ne!(first, second);
    }
}
