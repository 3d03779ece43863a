//! Decode sources
//!
//! The scanner is a black box that yields decoded barcode strings, one
//! per line: standard input (the way a USB HID barcode wedge types into
//! a terminal) or a device/FIFO path. Permission is requested exactly
//! once, before any read; for a device path, denial means the path
//! cannot be opened for reading.

use std::path::PathBuf;

use async_trait::async_trait;
use beep_core::PermissionStatus;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::warn;

/// One successful barcode extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeEvent {
    /// Decoded barcode payload
    pub data: String,
}

/// A source of decode events
#[async_trait]
pub trait DecodeSource {
    /// Ask for access, once at startup. Denial is terminal for the session.
    async fn request_permission(&mut self) -> PermissionStatus;

    /// Next decode event, or `None` when the source is exhausted.
    ///
    /// # Errors
    /// Propagates read errors from the underlying source.
    async fn next_decode(&mut self) -> std::io::Result<Option<DecodeEvent>>;
}

/// Decode events from standard input, one barcode per line
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecodeSource for StdinSource {
    async fn request_permission(&mut self) -> PermissionStatus {
        // stdin is handed to the process by the OS; nothing to deny
        PermissionStatus::Granted
    }

    async fn next_decode(&mut self) -> std::io::Result<Option<DecodeEvent>> {
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|data| DecodeEvent { data }))
    }
}

/// Decode events from a scanner device or FIFO path
pub struct DeviceSource {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
}

impl DeviceSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path, lines: None }
    }
}

#[async_trait]
impl DecodeSource for DeviceSource {
    async fn request_permission(&mut self) -> PermissionStatus {
        match File::open(&self.path).await {
            Ok(file) => {
                self.lines = Some(BufReader::new(file).lines());
                PermissionStatus::Granted
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot open scanner device");
                PermissionStatus::Denied
            }
        }
    }

    async fn next_decode(&mut self) -> std::io::Result<Option<DecodeEvent>> {
        // No lines means permission was never granted; the watch loop
        // never reads in that case, but stay safe anyway
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };
        Ok(lines.next_line().await?.map(|data| DecodeEvent { data }))
    }
}
