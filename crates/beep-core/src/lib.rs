//! Beep Core - scan state machine, product record, and result rendering
//!
//! This crate owns the application state machine, the product metadata
//! model returned by the lookup endpoint, and the rendering of results.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod error;
pub mod record;
pub mod render;
pub mod state;

pub use error::LookupError;
pub use record::ProductRecord;
pub use state::{App, AppState, LookupTicket, PermissionStatus};
