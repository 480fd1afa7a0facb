//! Append-only classification history

use crate::statistics::Statistics;
use claimcheck_domain::ClassificationResult;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory record of every classification, oldest first
///
/// Entries are never removed or reordered. A poisoned lock is recovered since
/// a panic cannot leave a half-written append behind.
#[derive(Debug, Default)]
pub struct History {
    entries: RwLock<Vec<ClassificationResult>>,
}

impl History {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ClassificationResult>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ClassificationResult>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a result
    pub fn record(&self, result: ClassificationResult) {
        self.write().push(result);
    }

    /// Copy of every result, oldest first
    pub fn snapshot(&self) -> Vec<ClassificationResult> {
        self.read().clone()
    }

    /// The last `limit` results, most recent first
    pub fn recent(&self, limit: usize) -> Vec<ClassificationResult> {
        self.read().iter().rev().take(limit).cloned().collect()
    }

    /// Number of recorded results
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Verdict counts over every recorded result
    pub fn statistics(&self) -> Statistics {
        Statistics::from_results(&self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn entry(claim: &str) -> ClassificationResult {
        ClassificationResult::unverified(claim, 0)
    }

    #[test]
    fn test_record_keeps_order() {
        let history = History::new();
        history.record(entry("first"));
        history.record(entry("second"));

        let claims: Vec<_> = history.snapshot().into_iter().map(|r| r.claim).collect();
        assert_eq!(claims, vec!["first", "second"]);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let history = History::new();
        for claim in ["a", "b", "c"] {
            history.record(entry(claim));
        }

        let recent: Vec<_> = history.recent(2).into_iter().map(|r| r.claim).collect();
        assert_eq!(recent, vec!["c", "b"]);
        assert_eq!(history.recent(10).len(), 3);
        assert!(history.recent(0).is_empty());
    }

    #[test]
    fn test_concurrent_appends() {
        let history = Arc::new(History::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let history = Arc::clone(&history);
                thread::spawn(move || {
                    for i in 0..50 {
                        history.record(entry(&format!("{}-{}", t, i)));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.len(), 400);
        // per-thread order survives interleaving
        let snapshot = history.snapshot();
        let thread_three: Vec<_> = snapshot
            .iter()
            .filter(|r| r.claim.starts_with("3-"))
            .map(|r| r.claim.clone())
            .collect();
        let expected: Vec<_> = (0..50).map(|i| format!("3-{}", i)).collect();
        assert_eq!(thread_three, expected);
    }
}
