//! Aggregate total shared by all source tasks.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free running sum of per-source counts.
#[derive(Debug, Default)]
pub struct Tally {
    total: AtomicU64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one source's count. Safe from any number of tasks at once.
    pub fn add(&self, n: u64) {
        self.total.fetch_add(n, Ordering::Relaxed);
    }

    /// Current sum. Read after the completion barrier for the final total.
    pub fn get(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_adds_are_not_lost() {
        let tally = Arc::new(Tally::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let tally = Arc::clone(&tally);
                std::thread::spawn(move || {
                    for _ in 0..10_000 {
                        tally.add(1);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(tally.get(), 80_000);
    }
}
