use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "initiatable")]
#[command(about = "Build table renderer configs from data-dt_* markup attributes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file whose top-level keys become global names
    #[arg(short, long, global = true)]
    pub namespace: Option<PathBuf>,

    /// Settings file (.yaml, .yml or .json)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the config of every marked table in a document
    Config {
        /// Element tree as JSON
        document: PathBuf,
    },

    /// Resolve one attribute value
    Resolve {
        /// Raw attribute text
        value: String,

        /// Print undefined instead of falling back to the raw text
        #[arg(long)]
        strict: bool,
    },

    /// Initialize every marked table in a document with a recording renderer
    Init {
        /// Element tree as JSON
        document: PathBuf,

        /// Version the recording renderer reports
        #[arg(long, default_value = "1.10.0")]
        renderer_version: String,
    },
}

impl Cli {
    /// Log filter directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "initiatable=debug,initiatable_resolve=debug,warn",
            _ => "initiatable=trace,initiatable_resolve=trace,info",
        }
    }
}
