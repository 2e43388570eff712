mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use maintwatch::{config, Config};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(hours) = cli.display_offset {
        config.display_offset = config::display_offset(hours)?;
    }

    match cli.command {
        Commands::Run {
            every,
            status_every,
        } => {
            if let Some(minutes) = every {
                config.check_frequency_minutes = Some(minutes);
            }
            if let Some(seconds) = status_every {
                config.status_refresh = std::time::Duration::from_secs(seconds.max(1));
            }
            commands::run::run(&config)
        }
        Commands::Check => commands::check::run(&config),
        Commands::Status => commands::status::run(&config),
        Commands::Parse { text } => commands::parse::run(text.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
