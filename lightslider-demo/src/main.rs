mod app;
mod card;
mod config;
mod paths;
mod render;
mod terminal;
mod theme;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::DemoError;
use crate::terminal::TerminalGuard;

/// Terminal demo of the lightslider carousel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with slider options (camelCase keys, as in `{"dots": true}`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of placeholder cards
    #[arg(long, default_value_t = 6)]
    slides: usize,

    /// Log file
    #[arg(long, default_value = "lightslider-demo.log")]
    log: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), DemoError> {
    let log_file = File::create(&cli.log).map_err(|source| DemoError::LogFile {
        path: cli.log.clone(),
        source,
    })?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let default_file = paths::default_config_file();
    let config = config::resolve(cli.config.as_deref(), default_file.as_deref())?;

    let mut terminal = TerminalGuard::new()?;
    let size = terminal.size()?;
    let app = App::new(config, cli.slides, size);
    app::run(app, &mut terminal).await
}
