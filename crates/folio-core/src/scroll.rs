//! Ref-counted background scroll lock.
//!
//! The page has one scrollable body. Every open modal holds one reference;
//! the body is locked when the first reference is taken and unlocked only
//! when the last one is released.

/// Something whose scrolling can be suspended (the document body in the
/// browser, a recorder in tests).
pub trait ScrollSurface {
    /// Suspend background scrolling
    fn lock(&mut self);
    /// Restore background scrolling
    fn unlock(&mut self);
}

/// Reference counter in front of a [`ScrollSurface`]
#[derive(Debug)]
pub struct ScrollLock<S> {
    surface: S,
    holders: usize,
}

impl<S: ScrollSurface> ScrollLock<S> {
    /// Wrap a surface; starts unlocked with no holders
    pub fn new(surface: S) -> Self {
        Self { surface, holders: 0 }
    }

    /// Take one reference, locking the surface on the first one
    pub fn acquire(&mut self) {
        self.holders += 1;
        if self.holders == 1 {
            tracing::debug!("Locking background scroll");
            self.surface.lock();
        }
    }

    /// Drop one reference, unlocking the surface on the last one
    ///
    /// Releasing with no holders is ignored.
    pub fn release(&mut self) {
        match self.holders {
            0 => tracing::warn!("Scroll lock released with no holders"),
            1 => {
                self.holders = 0;
                tracing::debug!("Unlocking background scroll");
                self.surface.unlock();
            }
            _ => self.holders -= 1,
        }
    }

    /// Number of outstanding references
    pub fn holders(&self) -> usize {
        self.holders
    }

    /// Whether the surface is currently locked
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    /// Access the wrapped surface
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
