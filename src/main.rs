use clap::Parser;
use log::{error, info};
use thiserror::Error;

pub mod args;
pub mod error;
pub mod generator;
pub mod installer;
pub mod templates;

use args::Cli;
use generator::ScaffoldOptions;

// Define Main CLI Errors
#[derive(Error, Debug)]
enum CliError {
    #[error("Scaffold error: {0}")]
    Scaffold(#[from] error::ScaffoldError),
}

fn main() -> Result<(), CliError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = ScaffoldOptions {
        name: cli.name,
        path: cli.path,
        dblib: cli.dblib,
        varenv: cli.varenv,
    };

    info!("Scaffolding bot project '{}'...", options.name);
    match generator::run(&options) {
        Ok(report) => {
            println!("{report}");
            println!("Bot's structure created successfully!");
            Ok(())
        }
        Err(e) => {
            error!("Scaffolding failed: {}", e);
            Err(CliError::Scaffold(e))
        }
    }
}
