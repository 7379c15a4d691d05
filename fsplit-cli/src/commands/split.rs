//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputFile;
use crate::output::{write_report, ReportFormat};
use crate::progress::{ProgressReporter, ProgressSink};
use anyhow::{Context, Result};
use clap::Parser;
use fsplit_core::{FileSink, NameGenerator, SplitStrategy, SuffixStyle};
use std::io;
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Split a file into pieces
///
/// Output files are written to the current directory and named PREFIX
/// followed by a generated suffix: `xaa`, `xab`, ... by default.
#[derive(Debug, Parser)]
#[command(name = "fsplit", version, about, long_about = None)]
pub struct SplitArgs {
    /// Input file (`-` reads standard input)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Prefix for output file names [default: x]
    #[arg(value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Put N lines per output file
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub lines: Option<u64>,

    /// Put SIZE bytes per output file (e.g. 100, 1k, 2MB)
    #[arg(short, long, value_name = "SIZE")]
    pub bytes: Option<String>,

    /// Generate CHUNKS output files (N, K/N, l/N, l/K/N, r/N, r/K/N)
    #[arg(short, long, value_name = "CHUNKS")]
    pub number: Option<String>,

    /// Use numeric suffixes instead of alphabetic
    #[arg(short = 'd', long)]
    pub numeric_suffixes: bool,

    /// Generate suffixes of length N [default: 2]
    #[arg(short = 'a', long, value_name = "N")]
    pub suffix_length: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a per-chunk summary to stderr
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub report: Option<ReportFormat>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;

        // Reject bad descriptors and suffix widths before touching the input
        let strategy = self.strategy(&config)?;
        let names = self.names(&config);
        names.validate()?;

        let input = InputFile::open(&self.input)?;
        log::info!(
            "splitting {} by {} into {}{}",
            self.input.display(),
            strategy.name(),
            names.prefix(),
            "?".repeat(names.width())
        );

        let mut progress = ProgressReporter::new(self.quiet || !config.output.progress);
        progress.start(strategy.name());

        let sink = ProgressSink::new(FileSink::new(), &progress);
        let mut echo = io::stdout().lock();
        let report = match strategy.run(&input, &names, sink, &mut echo) {
            Ok(report) => report,
            Err(e) => {
                progress.abandon();
                return Err(e)
                    .with_context(|| format!("Failed to split {}", self.input.display()));
            }
        };
        progress.finish();

        log::info!(
            "split complete: {} chunks, {} bytes",
            report.len(),
            report.total_bytes()
        );

        if let Some(format) = self.report.or(config.output.report) {
            write_report(format, &report, io::stderr().lock())?;
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under a test harness
        let env = env_logger::Env::default().default_filter_or(log_level);
        let _ = env_logger::Builder::from_env(env).try_init();
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                CliConfig::from_file(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Strategy selected by `-l`, `-b` or `-n`, defaulting to lines
    pub fn strategy(&self, config: &CliConfig) -> Result<SplitStrategy> {
        let selected = [
            self.lines.is_some(),
            self.bytes.is_some(),
            self.number.is_some(),
        ]
        .into_iter()
        .filter(|&given| given)
        .count();
        if selected > 1 {
            return Err(
                CliError::InvalidOption("only one of -l, -n, -b can be used".to_string()).into(),
            );
        }

        if let Some(size) = &self.bytes {
            return Ok(SplitStrategy::bytes(size)?);
        }
        if let Some(descriptor) = &self.number {
            return Ok(SplitStrategy::pieces(descriptor)?);
        }

        let lines = self.lines.unwrap_or(config.split.default_lines);
        let lines = NonZeroU64::new(lines).ok_or_else(|| {
            CliError::ConfigError("default_lines must be greater than 0".to_string())
        })?;
        Ok(SplitStrategy::lines(lines))
    }

    /// Name generator from the flags, falling back to the config file
    pub fn names(&self, config: &CliConfig) -> NameGenerator {
        let prefix = self
            .prefix
            .clone()
            .or_else(|| config.naming.prefix.clone())
            .unwrap_or_default();
        let width = self.suffix_length.unwrap_or(config.naming.suffix_length);
        let style = if self.numeric_suffixes || config.naming.numeric_suffixes {
            SuffixStyle::Numeric
        } else {
            SuffixStyle::Alphabetic
        };

        NameGenerator::new(prefix, width, style)
    }
}
