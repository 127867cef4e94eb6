use anyhow::Result;
use clap::Parser;
use typeshim::cli::{Cli, Commands};
use typeshim::commands::analyze::{handle_analyze, AnalyzeOptions};
use typeshim::commands::init::init_config;
use typeshim::commands::patch::{handle_patch, PatchOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            verbosity: _,
        } => handle_analyze(AnalyzeOptions {
            path,
            format,
            output,
        }),
        Commands::Patch {
            src_root,
            out_dir,
            dry_run,
            placeholder,
            verbosity: _,
        } => handle_patch(PatchOptions {
            src_root,
            out_dir,
            dry_run,
            placeholder,
        }),
        Commands::Init { force } => init_config(force),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
