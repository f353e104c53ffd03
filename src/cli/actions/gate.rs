use crate::console::ConsoleSurface;
use crate::gate::{Gate, GateConfig, MemorySession};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::info;
use url::Url;

pub struct Args {
    pub endpoint: Option<String>,
    pub session_key: String,
    pub overlay_id: String,
    pub fade_delay_ms: u64,
    pub debug: bool,
}

/// Run the gate interactively: prompt for access codes until the session is
/// authenticated or stdin closes.
///
/// # Errors
/// Returns an error if the endpoint URL is invalid or the terminal surface
/// fails.
pub async fn handle(args: Args) -> Result<()> {
    let endpoint = args
        .endpoint
        .as_deref()
        .map(Url::parse)
        .transpose()
        .context("invalid endpoint URL")?;

    let config = GateConfig {
        endpoint,
        session_key: args.session_key,
        overlay_id: args.overlay_id,
        auto_init: true,
        fade_delay: Duration::from_millis(args.fade_delay_ms),
        debug: args.debug,
    };

    let mut gate = Gate::new(
        config,
        Box::new(MemorySession::new()),
        Box::new(ConsoleSurface::new()),
    )?;

    gate.subscribe(|event| {
        if let Ok(line) = serde_json::to_string(event) {
            info!("{}", line);
        }
    });

    let mut lines = BufReader::new(stdin()).lines();
    while !gate.is_logged_in() {
        eprint!("access code: ");

        let Some(line) = lines.next_line().await? else {
            break;
        };

        gate.submit(&line).await?;
    }

    if gate.is_logged_in() {
        info!("session authenticated");
    }

    Ok(())
}
