//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logshelf")]
#[command(version, about = "Serve a directory of JSON log files over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (logshelf.toml/yaml/json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directory (overrides the config file)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Output in JSON format instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the log web server
    Serve(ServeArgs),

    /// List log files in the storage directory
    Ls,

    /// Print one log file as parsed records
    Cat {
        /// Log file name
        file: String,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Bind address for the HTTP server
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Base URL the log routes are mounted under
    #[arg(long)]
    pub base_url: Option<String>,

    /// Service name used by the logger
    #[arg(long)]
    pub name: Option<String>,

    /// Log file suffix
    #[arg(long)]
    pub suffix: Option<String>,
}
