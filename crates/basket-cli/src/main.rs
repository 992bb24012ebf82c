mod cli;
mod context;
mod handlers;
mod output;

use basket_core::AppConfig;
use basket_tui::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("BASKET_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        // Warnings go to stderr so stdout stays pure JSON (and the
        // TUI's alternate screen stays clean).
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "basket",
                &mut std::io::stdout(),
            );
        }
        None => {
            let file_path = resolve_list_path(cli.file);
            let mut app = App::new(&file_path);
            app.run().await?;
        }
        Some(cmd) => {
            let file_path = resolve_list_path(cli.file);
            let mut ctx = CliContext::load(&file_path).await;
            if let Err(e) = handlers::item::handle(&mut ctx, cmd).await {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}

/// CLI argument beats `BASKET_FILE` (clap folds the env var into the
/// argument) beats the configured default path.
fn resolve_list_path(arg: Option<String>) -> PathBuf {
    match arg {
        Some(path) => PathBuf::from(path),
        None => AppConfig::load().effective_list_path(),
    }
}
