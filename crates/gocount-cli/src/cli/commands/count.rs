//! `gocount count` – read sources from stdin and count the pattern in each.

use anyhow::Result;
use gocount_core::config::{self, GocountConfig};
use gocount_core::fetch::SourceFetcher;
use gocount_core::report::ConsoleReport;
use gocount_core::Dispatcher;
use std::path::PathBuf;
use std::sync::Arc;

/// Config and worker count for a run. `config_path` is the lookup result for
/// the config file; any failure there falls back to defaults.
pub fn count_settings(
    config_path: Result<Option<PathBuf>>,
    workers: Option<usize>,
) -> (GocountConfig, usize) {
    let cfg = config::load_or_default(config_path);
    tracing::debug!("loaded config: {:?}", cfg);
    let workers = cfg.workers_with_override(workers);
    (cfg, workers)
}

pub async fn run_count(config_path: Result<Option<PathBuf>>, workers: Option<usize>) -> Result<()> {
    let (cfg, workers) = count_settings(config_path, workers);
    tracing::info!(workers, "counting sources from stdin");

    let fetcher = Arc::new(SourceFetcher::new(cfg.http.clone()));
    let dispatcher = Dispatcher::new(workers, fetcher, Arc::new(ConsoleReport));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());

    gocount_core::count_sources(stdin, dispatcher).await?;
    Ok(())
}
