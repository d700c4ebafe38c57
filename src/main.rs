use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mailboard::config::{Credentials, SyncConfig};
use mailboard::services::{GmailClient, TrelloClient};
use mailboard::sync::run_pass;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to the console and to a daily file under logs/.
    let file_appender = tracing_appender::rolling::daily("logs", "mailboard.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .init();

    let credentials = Credentials::from_env().context("loading credentials")?;
    let config = SyncConfig::default();
    let ledger_path = PathBuf::from(
        std::env::var("MAILBOARD_LEDGER").unwrap_or_else(|_| "finished.csv".to_string()),
    );

    let mail = GmailClient::new(credentials.mail_token.clone());
    let board = TrelloClient::new(
        credentials.board_key.clone(),
        credentials.board_token.clone(),
        credentials.board_id.clone(),
    );

    info!(ledger = %ledger_path.display(), "starting sync pass");
    match run_pass(&mail, &board, &config, &ledger_path).await {
        Ok(summary) => {
            info!(
                collected = summary.collected,
                published = summary.published,
                reconciled = summary.reconciled,
                "sync pass complete"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "sync pass failed");
            Err(e.into())
        }
    }
}
