use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts in-flight operations of one kind.
///
/// The flag reads as busy while at least one [`BusyGuard`] is alive, so
/// overlapping operations keep it raised until the last one finishes.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicUsize);

impl BusyFlag {
    pub fn enter(&self) -> BusyGuard<'_> {
        self.0.fetch_add(1, Ordering::SeqCst);
        BusyGuard(&self.0)
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

/// Lowers the flag on drop, whichever way the operation exits.
#[must_use = "the flag drops back immediately if the guard is not held"]
pub struct BusyGuard<'a>(&'a AtomicUsize);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
