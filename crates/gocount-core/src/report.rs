//! Result lines: per-source counts and errors, and the final total.

use std::sync::Mutex;

use crate::fetch::FetchError;
use crate::source::Source;

pub fn count_line(source: &Source, count: u64) -> String {
    format!("Count for {}: {}", source, count)
}

pub fn error_line(source: &Source, error: &FetchError) -> String {
    format!("Error for {}: {}", source, error)
}

pub fn total_line(total: u64) -> String {
    format!("Total: {}", total)
}

/// Sink for the three kinds of result lines. Called concurrently from tasks;
/// each call must emit one whole line.
pub trait Report: Send + Sync + 'static {
    fn counted(&self, source: &Source, count: u64);
    fn failed(&self, source: &Source, error: &FetchError);
    fn total(&self, total: u64);
}

/// Counts and the total go to stdout, errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport;

impl Report for ConsoleReport {
    fn counted(&self, source: &Source, count: u64) {
        println!("{}", count_line(source, count));
    }

    fn failed(&self, source: &Source, error: &FetchError) {
        eprintln!("{}", error_line(source, error));
    }

    fn total(&self, total: u64) {
        println!("{}", total_line(total));
    }
}

/// Which stream a captured line would have gone to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportLine {
    Stdout(String),
    Stderr(String),
}

/// In-memory report that keeps lines in emission order.
#[derive(Debug, Default)]
pub struct CapturedReport {
    lines: Mutex<Vec<ReportLine>>,
}

impl CapturedReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: ReportLine) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(line);
    }

    /// All lines emitted so far, in order.
    pub fn lines(&self) -> Vec<ReportLine> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn stdout(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Stdout(s) => Some(s),
                ReportLine::Stderr(_) => None,
            })
            .collect()
    }

    pub fn stderr(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                ReportLine::Stderr(s) => Some(s),
                ReportLine::Stdout(_) => None,
            })
            .collect()
    }
}

impl Report for CapturedReport {
    fn counted(&self, source: &Source, count: u64) {
        self.push(ReportLine::Stdout(count_line(source, count)));
    }

    fn failed(&self, source: &Source, error: &FetchError) {
        self.push(ReportLine::Stderr(error_line(source, error)));
    }

    fn total(&self, total: u64) {
        self.push(ReportLine::Stdout(total_line(total)));
    }
}
