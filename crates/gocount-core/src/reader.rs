//! Source reader: streams newline-delimited identifiers into the dispatcher.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::dispatcher::{Dispatcher, RunSummary};
use crate::source::Source;

/// Read identifiers from `input` line by line, submitting each as soon as it
/// is read, then wait for all of them and report the total.
///
/// Lines are raw bytes: a trailing `\n` and then a trailing `\r` are stripped,
/// nothing else is trimmed, and empty lines are submitted as-is. Bytes that are
/// not UTF-8 stay part of the path. Only an I/O error on `input` ends the run
/// with `Err`, without waiting for in-flight sources.
pub async fn count_sources<R>(mut input: R, mut dispatcher: Dispatcher) -> Result<RunSummary>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();
    loop {
        let n = input
            .read_until(b'\n', &mut line)
            .await
            .context("reading input")?;
        if n == 0 {
            break;
        }
        strip_line_ending(&mut line);
        dispatcher.submit(Source::from_bytes(std::mem::take(&mut line)));
    }
    tracing::debug!(
        submitted = dispatcher.outstanding(),
        "end of input, waiting for sources"
    );
    dispatcher.finish().await
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}
