//! packignore CLI - exclusion-aware archive manifests
//!
//! Usage: packignore [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list     Print the files an archive of the root must contain
//!   exclude  Exclude paths and save
//!   include  Remove exclusions and save
//!   status   Show the checkbox tree
//!   show     Print the saved exclusions

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, Commands};
use packignore::application::EditAction;
use packignore::presentation::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let root = cli.root.as_path();
    let ignore_file = cli.ignore_file.as_deref();

    match &cli.command {
        Commands::List => commands::cmd_list(root, ignore_file, format),
        Commands::Exclude { paths } => {
            commands::cmd_edit(root, ignore_file, paths, EditAction::Exclude, format)
        }
        Commands::Include { paths } => {
            commands::cmd_edit(root, ignore_file, paths, EditAction::Include, format)
        }
        Commands::Status { path } => {
            commands::cmd_status(root, ignore_file, path.as_deref(), format)
        }
        Commands::Show => commands::cmd_show(root, ignore_file, format),
    }
}

/// Log to stderr; `RUST_LOG` applies unless `-v` is given.
///
/// Skipped directories and failed saves reach the user as `warn` events.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "packignore=warn".into()),
        1 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
