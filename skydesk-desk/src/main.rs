use anyhow::Context;
use skydesk_desk::{app_config::Config, printer, DeskSession};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skydesk_desk=info,skydesk_core=info".into()),
        )
        // stdout belongs to the table
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!(printer = ?config.printer.kind, "Starting {}", config.desk.title);

    let mut session = DeskSession::new(printer::from_config(&config.printer));

    let stdin = io::stdin();
    let stdout = io::stdout();
    skydesk_desk::run(&mut session, &config.desk, stdin.lock(), stdout.lock())
        .context("Desk session ended with an output error")?;

    tracing::info!(tickets = session.store().tickets().len(), "Session closed");
    Ok(())
}
