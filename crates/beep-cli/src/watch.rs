//! The interactive scan loop
//!
//! Drives the state machine: one permission gate at startup, then one
//! decode, one lookup, one rendered result (or one alert) at a time.
//! An empty input line is the scan-again control while a result is
//! shown; anything else while a result is shown is debounced.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use beep_core::render::{render_record, NO_ACCESS_MESSAGE, SCAN_AGAIN_HINT, SCAN_PROMPT};
use beep_core::{App, AppState};
use beep_lookup::LookupClient;

use crate::source::{DecodeSource, DeviceSource, StdinSource};

/// Run the scan loop until the decode source is exhausted.
pub async fn run(device: Option<PathBuf>, endpoint: &str, timeout: Duration) -> anyhow::Result<()> {
    match device {
        Some(path) => run_with_source(DeviceSource::new(path), endpoint, timeout).await,
        None => run_with_source(StdinSource::new(), endpoint, timeout).await,
    }
}

async fn run_with_source<S: DecodeSource>(
    mut source: S,
    endpoint: &str,
    timeout: Duration,
) -> anyhow::Result<()> {
    let client = LookupClient::with_endpoint(endpoint, timeout)?;
    let mut app = App::new();

    let status = source.request_permission().await;
    app.permission_resolved(status);

    if *app.state() == AppState::Blocked {
        bail!("{NO_ACCESS_MESSAGE}");
    }

    println!("{SCAN_PROMPT}");

    while let Some(event) = source.next_decode().await? {
        let data = event.data.trim();

        if data.is_empty() {
            // Scan-again control: only meaningful while a result is shown
            if matches!(app.state(), AppState::ShowingResult { .. }) {
                app.scan_again();
                println!("{SCAN_PROMPT}");
            }
            continue;
        }

        let Some(ticket) = app.decode(data) else {
            // Debounced: a result is still on screen
            continue;
        };

        println!("Looking up {data}...");

        match client.lookup(data).await {
            Ok(record) => {
                if app.lookup_succeeded(ticket, record) {
                    if let Some(record) = app.record() {
                        print!("{}", render_record(record));
                        println!("\n{SCAN_AGAIN_HINT}");
                    }
                }
            }
            Err(error) => {
                if app.lookup_failed(ticket, &error) {
                    println!("{error}");
                    println!("{SCAN_PROMPT}");
                }
            }
        }
    }

    Ok(())
}
