use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "typeshim")]
#[command(
    about = "Patches transpiled TypeScript output so type-only exports survive at runtime",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report exported names that are types with no runtime binding
    Analyze {
        /// Source file or directory to analyze
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Append placeholder exports to transpiled output files
    Patch {
        /// Root of the original TypeScript sources
        src_root: PathBuf,

        /// Root of the transpiled output to patch
        #[arg(long = "out-dir")]
        out_dir: PathBuf,

        /// Report what would change without writing anything
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Override the placeholder identifier from config
        #[arg(long)]
        placeholder: Option<String>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Create a default .typeshim.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Analyze { verbosity, .. } | Commands::Patch { verbosity, .. } => *verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
