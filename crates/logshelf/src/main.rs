//! logshelf CLI - serve a directory of JSON log files over HTTP

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod logging;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set JSON output mode if requested
    output::set_json_mode(cli.json);

    let config = commands::load_config(cli.config.as_deref(), cli.dir.clone())?;

    // Handle commands. `serve` installs the dual-sink logger itself, once
    // the session file is known; the other commands get a plain one.
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(config, args, cli.verbose).await,
        Commands::Ls => {
            logging::init_cli(cli.verbose);
            commands::ls::execute(config)
        }
        Commands::Cat { file } => {
            logging::init_cli(cli.verbose);
            commands::cat::execute(config, &file)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
