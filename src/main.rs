//! Local console for the bot core: reads one command per line from stdin
//! and prints the reply lines a chat host would relay. The production
//! transport is the host bot framework; this binary exists for operation
//! and smoke testing against live stores.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use evespai::{config::Config, dispatch, startup};

/// Channel name commands dispatched from the console run under; include it
/// in FULL_ACCESS_CHANNELS to use corporation commands locally.
const CONSOLE_CHANNEL: &str = "console";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match startup::init(&config).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Startup error: {}", e);
            std::process::exit(1);
        }
    };

    info!("console ready; one command per line");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }

        for reply in dispatch::dispatch(&state, CONSOLE_CHANNEL, &line).await {
            let _ = stdout.write_all(reply.as_bytes()).await;
            let _ = stdout.write_all(b"\n").await;
        }
        let _ = stdout.flush().await;
    }
}
