//! Writes the header that gives each build of the Audio Unit Cocoa wrapper
//! its own Objective-C class namespace.
//!
//! The output is a single line:
//!
//! ```text
//! #define SMTG_AU_NAMESPACE\tSMTGAUCocoa1467000000_
//! ```
//!
//! The file is truncated and rewritten on every run.

use crate::clock::{Clock, SystemClock};
use crate::config::GeneratorConfig;
use crate::error::{PrefixError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const PROGRESS_MESSAGE: &str = "Generating new class prefix for Objective-C classes";

/// Outcome of a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub timestamp: u64,
    pub class_prefix: String,
    /// False for a dry run.
    pub written: bool,
}

pub struct PrefixGenerator {
    config: GeneratorConfig,
    output_dir: PathBuf,
    clock: Box<dyn Clock>,
}

impl PrefixGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: GeneratorConfig, clock: impl Clock + 'static) -> Result<Self> {
        let output_dir = config.validate()?.to_path_buf();
        Ok(Self {
            config,
            output_dir,
            clock: Box::new(clock),
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.config.file_name)
    }

    /// Macro value for `timestamp`, e.g. `SMTGAUCocoa1467000000_`.
    pub fn class_prefix(&self, timestamp: u64) -> String {
        format!("{}{}_", self.config.class_prefix, timestamp)
    }

    /// Full header contents for `timestamp`, including the trailing newline.
    pub fn render(&self, timestamp: u64) -> String {
        format!(
            "#define {}\t{}\n",
            self.config.macro_name,
            self.class_prefix(timestamp)
        )
    }

    /// Generate the header, reporting progress on standard output.
    pub fn generate(&self) -> Result<Generated> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.generate_to(&mut lock)
    }

    /// Generate the header, reporting progress to `progress`.
    ///
    /// The progress line is written and flushed before the header file is
    /// opened. In dry-run mode the rendered line goes to `progress` as well
    /// and the file system is left alone.
    pub fn generate_to<W: Write>(&self, progress: &mut W) -> Result<Generated> {
        writeln!(progress, "{PROGRESS_MESSAGE}").map_err(PrefixError::Progress)?;
        progress.flush().map_err(PrefixError::Progress)?;

        let timestamp = self.clock.unix_seconds();
        let contents = self.render(timestamp);
        let path = self.header_path();

        let written = if self.config.dry_run {
            tracing::debug!("Dry run, not writing {}", path.display());
            progress
                .write_all(contents.as_bytes())
                .map_err(PrefixError::Progress)?;
            false
        } else {
            write_header(&path, &contents)?;
            tracing::debug!("Wrote {} ({})", path.display(), contents.trim_end());
            true
        };

        Ok(Generated {
            path,
            timestamp,
            class_prefix: self.class_prefix(timestamp),
            written,
        })
    }
}

/// Generate `aucocoaclassprefix.h` in `dir` with the default settings.
pub fn generate_header(dir: impl Into<PathBuf>) -> Result<Generated> {
    PrefixGenerator::new(GeneratorConfig::for_dir(dir))?.generate()
}

fn write_header(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| PrefixError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(contents.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}
