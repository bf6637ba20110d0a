use std::io::{self, Write};

use busvoz::app::App;
use busvoz::cli::{execute, run_shell, Cli, CliError, Command};
use busvoz::logging::init_tracing;
use clap::Parser;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::from_config(&config);
    app.start().await;

    let mut stdout = io::stdout();
    let result = match cli.command {
        Command::Shell => run_shell(&app, BufReader::new(tokio::io::stdin()), &mut stdout).await,
        command => execute(&app, command, &mut stdout).await,
    };
    stdout.flush()?;

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_error() => {
            eprintln!("Erro: {}", e);
            std::process::exit(1);
        }
        Err(CliError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}
