use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// packignore - choose what goes into an archive of a directory
#[derive(Parser, Debug)]
#[command(name = "packignore")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory to archive
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Exclusion file (overrides config; default: <root>/.packignore)
    #[arg(long, global = true)]
    pub ignore_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the files an archive of the root must contain
    List,

    /// Exclude paths (relative to the root) and save
    Exclude {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Remove paths and everything excluded below them, then save
    Include {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Show the tree with checkbox states ([x] included, [ ] excluded, [-] mixed)
    Status {
        /// Directory or file to show (default: the root)
        path: Option<String>,
    },

    /// Print the saved exclusions
    Show,
}
