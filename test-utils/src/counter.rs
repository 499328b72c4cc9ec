use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Shared counter of statements executed on a test database.
///
/// Installed through [`crate::context::TestContext::count_queries`]. Clones share the
/// same count, so the handle kept by a test observes every statement the repository
/// under test issues.
#[derive(Debug, Clone, Default)]
pub struct QueryCounter {
    count: Arc<AtomicUsize>,
}

impl QueryCounter {
    /// Records one executed statement.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of statements executed since creation or the last `reset`.
    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Zeroes the count, typically after fixtures have been inserted.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
