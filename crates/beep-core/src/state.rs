//! Application state machine
//!
//! One enum owns the three pieces of transient state the app carries
//! (permission status, scanned flag, fetched record), so the invariant
//! "a record exists iff the last lookup succeeded with an active status"
//! holds by construction: `ShowingResult` is the only state with a record.
//!
//! Each accepted decode gets a generation ticket. A lookup outcome whose
//! ticket is stale is discarded rather than allowed to overwrite newer
//! state, so a late response to a superseded scan can never win.

use crate::error::LookupError;
use crate::record::ProductRecord;

/// Camera permission, resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The prompt has not resolved yet
    Unknown,
    /// Access granted; scanning may begin
    Granted,
    /// Access denied; terminal for this session
    Denied,
}

/// Token tying a lookup outcome to the decode that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
}

/// The single screen's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Startup; the permission prompt has not resolved
    AwaitingPermission,
    /// Permission denied; no recovery path in-session
    Blocked,
    /// Armed: the next decode event is accepted
    Scanning,
    /// One lookup in flight for the decode tagged with this generation
    LookingUp { generation: u64, barcode: String },
    /// An active product record is on screen
    ShowingResult { record: ProductRecord },
}

/// App controller: owns the state and sequences every transition
#[derive(Debug)]
pub struct App {
    state: AppState,
    generation: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Start at `AwaitingPermission`, as every relaunch does
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AppState::AwaitingPermission,
            generation: 0,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Resolve the startup permission prompt.
    ///
    /// Only meaningful from `AwaitingPermission`; OS-level permission
    /// changes after startup are out of scope. An unresolved prompt is
    /// treated as denial.
    pub fn permission_resolved(&mut self, status: PermissionStatus) {
        if self.state != AppState::AwaitingPermission {
            return;
        }
        self.state = match status {
            PermissionStatus::Granted => AppState::Scanning,
            PermissionStatus::Denied | PermissionStatus::Unknown => AppState::Blocked,
        };
    }

    /// Accept a decode event iff scanning is armed.
    ///
    /// Returns the ticket for the lookup this decode starts; `None`
    /// means the event was debounced (a lookup is already in flight, a
    /// result is on screen, or the app is blocked). First decode after
    /// arming wins.
    pub fn decode(&mut self, barcode: &str) -> Option<LookupTicket> {
        if self.state != AppState::Scanning {
            return None;
        }
        self.generation += 1;
        self.state = AppState::LookingUp {
            generation: self.generation,
            barcode: barcode.to_string(),
        };
        Some(LookupTicket {
            generation: self.generation,
        })
    }

    /// Apply a successful lookup.
    ///
    /// Returns `false` if the ticket was stale and the outcome was
    /// discarded without touching the current state.
    pub fn lookup_succeeded(&mut self, ticket: LookupTicket, record: ProductRecord) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.state = AppState::ShowingResult { record };
        true
    }

    /// Apply a failed lookup: re-arm scanning so the user may rescan.
    ///
    /// Both failure kinds behave identically here; the caller surfaces
    /// the alert message. Returns `false` if the ticket was stale.
    pub fn lookup_failed(&mut self, ticket: LookupTicket, _error: &LookupError) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.state = AppState::Scanning;
        true
    }

    /// Drop the shown record and re-arm scanning.
    ///
    /// No confirmation step; a no-op outside `ShowingResult`.
    pub fn scan_again(&mut self) {
        if matches!(self.state, AppState::ShowingResult { .. }) {
            self.state = AppState::Scanning;
        }
    }

    /// The fetched record, present only while a result is shown
    #[must_use]
    pub fn record(&self) -> Option<&ProductRecord> {
        match &self.state {
            AppState::ShowingResult { record } => Some(record),
            _ => None,
        }
    }

    fn ticket_is_current(&self, ticket: LookupTicket) -> bool {
        matches!(
            self.state,
            AppState::LookingUp { generation, .. } if generation == ticket.generation
        )
    }
}
