//! One source's lifecycle: pending → fetching → counted|failed → done.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::tally::Tally;
use crate::counter;
use crate::fetch::Fetch;
use crate::report::Report;
use crate::source::Source;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Fetching,
    Counted,
    Failed,
    Done,
}

pub(super) struct SourceTask {
    pub source: Source,
    pub slots: Arc<Semaphore>,
    pub fetcher: Arc<dyn Fetch>,
    pub report: Arc<dyn Report>,
    pub tally: Arc<Tally>,
}

impl SourceTask {
    /// Runs to completion; returns `Counted` or `Failed`. A fetch failure is
    /// reported, not propagated. `Err` only means the pool or the blocking
    /// fetch thread itself broke.
    pub async fn run(self) -> Result<TaskState> {
        let SourceTask {
            source,
            slots,
            fetcher,
            report,
            tally,
        } = self;
        tracing::trace!(source = %source, state = ?TaskState::Pending);

        let permit = slots.acquire_owned().await.context("worker pool closed")?;
        tracing::debug!(source = %source, state = ?TaskState::Fetching);

        let fetch_source = source.clone();
        let result = tokio::task::spawn_blocking(move || {
            fetcher
                .fetch(&fetch_source)
                .map(|bytes| counter::count(&bytes))
        })
        .await
        .with_context(|| format!("fetch of {} did not complete", source))?;

        let state = match result {
            Ok(n) => {
                report.counted(&source, n);
                tally.add(n);
                tracing::debug!(source = %source, count = n, state = ?TaskState::Counted);
                TaskState::Counted
            }
            Err(e) => {
                report.failed(&source, &e);
                tracing::debug!(source = %source, error = %e, state = ?TaskState::Failed);
                TaskState::Failed
            }
        };

        drop(permit);
        tracing::trace!(source = %source, state = ?TaskState::Done);
        Ok(state)
    }
}
