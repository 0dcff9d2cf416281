//! Bounded fan-out of source tasks.
//!
//! Every submitted source becomes a tokio task at once (pending tasks are
//! unbounded); a semaphore keeps at most `workers` of them fetching and
//! counting. `finish` is the completion barrier: it drains every task, then
//! reports the total exactly once.

mod tally;
mod task;

pub use tally::Tally;
pub use task::TaskState;

use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::fetch::Fetch;
use crate::report::Report;
use crate::source::Source;
use task::SourceTask;

/// Outcome of a whole run, available once every task is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Sum of the counts of every successfully fetched source.
    pub total: u64,
    /// Sources fetched and counted.
    pub counted: usize,
    /// Sources whose fetch failed.
    pub failed: usize,
}

pub struct Dispatcher {
    workers: usize,
    slots: Arc<Semaphore>,
    fetcher: Arc<dyn Fetch>,
    report: Arc<dyn Report>,
    tally: Arc<Tally>,
    tasks: JoinSet<Result<TaskState>>,
}

impl Dispatcher {
    /// `workers` is clamped to at least 1.
    pub fn new(workers: usize, fetcher: Arc<dyn Fetch>, report: Arc<dyn Report>) -> Self {
        let workers = workers.max(1);
        Self {
            workers,
            slots: Arc::new(Semaphore::new(workers)),
            fetcher,
            report,
            tally: Arc::new(Tally::new()),
            tasks: JoinSet::new(),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Tasks registered and not yet collected by `finish`.
    pub fn outstanding(&self) -> usize {
        self.tasks.len()
    }

    /// Register a task for `source` and start it. Never waits: the task itself
    /// waits for a free slot. Must be called from within a tokio runtime.
    pub fn submit(&mut self, source: Source) {
        let task = SourceTask {
            source,
            slots: Arc::clone(&self.slots),
            fetcher: Arc::clone(&self.fetcher),
            report: Arc::clone(&self.report),
            tally: Arc::clone(&self.tally),
        };
        self.tasks.spawn(task.run());
    }

    /// Wait for every submitted task, then report and return the total.
    pub async fn finish(mut self) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        while let Some(res) = self.tasks.join_next().await {
            match res.map_err(|e| anyhow::anyhow!("source task join: {}", e))?? {
                TaskState::Counted => summary.counted += 1,
                _ => summary.failed += 1,
            }
        }

        summary.total = self.tally.get();
        self.report.total(summary.total);
        tracing::info!(
            total = summary.total,
            counted = summary.counted,
            failed = summary.failed,
            "run complete"
        );
        Ok(summary)
    }
}
