use crate::error::{PrefixError, Result};
use clap::Parser;
use serde::Deserialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "aucocoaclassprefix.h";
pub const DEFAULT_MACRO_NAME: &str = "SMTG_AU_NAMESPACE";
pub const DEFAULT_CLASS_PREFIX: &str = "SMTGAUCocoa";

#[derive(Debug, Default, Parser)]
#[command(name = "cocoa-prefix")]
#[command(about = "Generate a unique Objective-C class prefix header", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "COCOA_PREFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory the header is written into
    #[arg(short, long, env = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Header file name (default: aucocoaclassprefix.h)
    #[arg(long, env = "COCOA_PREFIX_FILE_NAME")]
    pub file_name: Option<String>,

    /// Name of the generated macro (default: SMTG_AU_NAMESPACE)
    #[arg(long, env = "COCOA_PREFIX_MACRO_NAME")]
    pub macro_name: Option<String>,

    /// Literal token placed before the timestamp (default: SMTGAUCocoa)
    #[arg(long, env = "COCOA_PREFIX_CLASS_PREFIX")]
    pub class_prefix: Option<String>,

    /// Print the header line instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the header is written into. Required; there is no default.
    pub output_dir: Option<PathBuf>,
    pub file_name: String,
    pub macro_name: String,
    pub class_prefix: String,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: DEFAULT_FILE_NAME.to_string(),
            macro_name: DEFAULT_MACRO_NAME.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            dry_run: false,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration writing into `dir`.
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Load configuration from multiple sources with priority:
    /// 1. Command line arguments (highest priority)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults (lowest priority)
    pub fn load(cli: Cli) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(config_path) = &cli.config {
            tracing::debug!("Loading config from file: {}", config_path.display());
            builder = builder.add_source(config::File::from(config_path.as_ref()).required(true));
        } else {
            builder = builder.add_source(config::File::with_name("cocoa-prefix").required(false));
        }

        let mut cfg: GeneratorConfig = builder.build()?.try_deserialize()?;

        if let Some(project_dir) = cli.project_dir {
            cfg.output_dir = Some(project_dir);
        }

        if let Some(file_name) = cli.file_name {
            cfg.file_name = file_name;
        }

        if let Some(macro_name) = cli.macro_name {
            cfg.macro_name = macro_name;
        }

        if let Some(class_prefix) = cli.class_prefix {
            cfg.class_prefix = class_prefix;
        }

        if cli.dry_run {
            cfg.dry_run = true;
        }

        Ok(cfg)
    }

    /// Validate the configuration and return the output directory.
    pub fn validate(&self) -> Result<&Path> {
        let output_dir = self.output_dir.as_deref().ok_or_else(|| {
            PrefixError::InvalidConfig(
                "No output directory. Pass --project-dir or set PROJECT_DIR.".to_string(),
            )
        })?;

        if self.file_name.is_empty()
            || Path::new(&self.file_name).file_name() != Some(OsStr::new(&self.file_name))
        {
            return Err(PrefixError::InvalidConfig(format!(
                "file_name must be a bare file name, got {:?}",
                self.file_name
            )));
        }

        if !is_c_identifier(&self.macro_name) {
            return Err(PrefixError::InvalidConfig(format!(
                "macro_name is not a valid C identifier: {:?}",
                self.macro_name
            )));
        }

        if !is_c_identifier(&self.class_prefix) {
            return Err(PrefixError::InvalidConfig(format!(
                "class_prefix is not a valid C identifier: {:?}",
                self.class_prefix
            )));
        }

        Ok(output_dir)
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
