//! Progress reporting module

use fsplit_core::OutputSink;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::time::Duration;

/// Progress reporter for a running split
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Show a spinner for the named strategy
    pub fn start(&mut self, strategy: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        let style =
            ProgressStyle::default_spinner().template("{spinner} [{elapsed_precise}] {pos} chunks {msg}");
        match style {
            Ok(style) => pb.set_style(style),
            Err(e) => log::debug!("falling back to the default spinner: {e}"),
        }
        pb.set_message(format!("splitting by {strategy}"));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record that a chunk was opened
    pub fn chunk_started(&self, name: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("writing {name}"));
            pb.inc(1);
        }
    }

    /// Number of chunks reported so far
    pub fn chunks(&self) -> u64 {
        self.progress_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("complete");
        }
    }

    /// Stop the spinner after a failure
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message("failed");
        }
    }
}

/// Output sink that reports every created chunk to a [`ProgressReporter`]
pub struct ProgressSink<'a, S> {
    inner: S,
    reporter: &'a ProgressReporter,
}

impl<'a, S: OutputSink> ProgressSink<'a, S> {
    /// Wrap `inner`
    pub fn new(inner: S, reporter: &'a ProgressReporter) -> Self {
        Self { inner, reporter }
    }
}

impl<S: OutputSink> OutputSink for ProgressSink<'_, S> {
    type Writer = S::Writer;
    type Reader = S::Reader;

    fn create(&mut self, name: &str) -> io::Result<Self::Writer> {
        let writer = self.inner.create(name)?;
        self.reporter.chunk_started(name);
        Ok(writer)
    }

    fn open(&mut self, name: &str) -> io::Result<Self::Reader> {
        self.inner.open(name)
    }
}
