//! State machine tests
//!
//! Covers the permission gate, the debounce invariant, lookup outcome
//! application, the stale-ticket guard, and the scan-again reset.

use beep_core::{App, AppState, LookupError, PermissionStatus, ProductRecord};

fn granted_app() -> App {
    let mut app = App::new();
    app.permission_resolved(PermissionStatus::Granted);
    app
}

fn active_record(company: &str) -> ProductRecord {
    ProductRecord {
        status: "active".to_string(),
        company: company.to_string(),
        code: "012345678905".to_string(),
        ..ProductRecord::default()
    }
}

// =============================================================================
// Permission Gate
// =============================================================================

#[test]
fn test_starts_awaiting_permission() {
    let app = App::new();
    assert_eq!(*app.state(), AppState::AwaitingPermission);
    assert!(app.record().is_none());
}

#[test]
fn test_granted_permission_arms_scanning() {
    let app = granted_app();
    assert_eq!(*app.state(), AppState::Scanning);
}

#[test]
fn test_denied_permission_blocks() {
    let mut app = App::new();
    app.permission_resolved(PermissionStatus::Denied);
    assert_eq!(*app.state(), AppState::Blocked);
}

#[test]
fn test_unresolved_permission_blocks() {
    let mut app = App::new();
    app.permission_resolved(PermissionStatus::Unknown);
    assert_eq!(*app.state(), AppState::Blocked);
}

#[test]
fn test_permission_resolves_only_once() {
    let mut app = App::new();
    app.permission_resolved(PermissionStatus::Denied);
    // A second resolution must not unblock the session
    app.permission_resolved(PermissionStatus::Granted);
    assert_eq!(*app.state(), AppState::Blocked);
}

#[test]
fn test_blocked_app_never_accepts_decodes() {
    let mut app = App::new();
    app.permission_resolved(PermissionStatus::Denied);
    assert!(app.decode("012345678905").is_none());
    assert_eq!(*app.state(), AppState::Blocked);
}

#[test]
fn test_decode_before_permission_is_ignored() {
    let mut app = App::new();
    assert!(app.decode("012345678905").is_none());
    assert_eq!(*app.state(), AppState::AwaitingPermission);
}

// =============================================================================
// Debounce
// =============================================================================

#[test]
fn test_decode_accepted_only_while_scanning() {
    let mut app = granted_app();

    let ticket = app.decode("012345678905");
    assert!(ticket.is_some());

    // A second decode during the same scan must be debounced
    assert!(app.decode("012345678905").is_none());
    assert!(app.decode("999999999999").is_none());
}

#[test]
fn test_decode_debounced_while_result_shown() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");
    assert!(app.lookup_succeeded(ticket, active_record("Acme")));

    assert!(app.decode("999999999999").is_none());
    assert!(app.record().is_some());
}

#[test]
fn test_looking_up_holds_the_scanned_barcode() {
    let mut app = granted_app();
    app.decode("012345678905").expect("decode accepted");

    match app.state() {
        AppState::LookingUp { barcode, .. } => assert_eq!(barcode, "012345678905"),
        other => panic!("Expected LookingUp, got {other:?}"),
    }
}

// =============================================================================
// Lookup Outcomes
// =============================================================================

#[test]
fn test_successful_lookup_shows_result() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");

    assert!(app.lookup_succeeded(ticket, active_record("Acme")));

    let record = app.record().expect("record present");
    assert_eq!(record.company, "Acme");
}

#[test]
fn test_failed_lookup_rearms_scanning() {
    let mut app = granted_app();
    let ticket = app.decode("000000000000").expect("decode accepted");

    assert!(app.lookup_failed(ticket, &LookupError::InvalidBarcode));
    assert_eq!(*app.state(), AppState::Scanning);
    assert!(app.record().is_none());

    // Re-armed: the next decode is accepted
    assert!(app.decode("012345678905").is_some());
}

#[test]
fn test_network_failure_rearms_scanning() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");

    assert!(app.lookup_failed(ticket, &LookupError::network("connection refused")));
    assert_eq!(*app.state(), AppState::Scanning);
    assert!(app.record().is_none());
}

// =============================================================================
// Stale Tickets
// =============================================================================

#[test]
fn test_stale_success_is_discarded() {
    let mut app = granted_app();
    let first = app.decode("012345678905").expect("decode accepted");

    // First lookup fails, scanning re-arms, a newer scan starts
    assert!(app.lookup_failed(first, &LookupError::network("timeout")));
    let second = app.decode("999999999999").expect("decode accepted");

    // The superseded lookup's late success must not overwrite anything
    assert!(!app.lookup_succeeded(first, active_record("Stale Corp")));
    match app.state() {
        AppState::LookingUp { barcode, .. } => assert_eq!(barcode, "999999999999"),
        other => panic!("Expected LookingUp, got {other:?}"),
    }

    // The current lookup still lands normally
    assert!(app.lookup_succeeded(second, active_record("Acme")));
    assert_eq!(app.record().expect("record present").company, "Acme");
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut app = granted_app();
    let first = app.decode("012345678905").expect("decode accepted");
    assert!(app.lookup_succeeded(first, active_record("Acme")));

    // A late failure for the already-resolved lookup changes nothing
    assert!(!app.lookup_failed(first, &LookupError::InvalidBarcode));
    assert_eq!(app.record().expect("record present").company, "Acme");
}

#[test]
fn test_outcome_applies_at_most_once() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");

    assert!(app.lookup_succeeded(ticket, active_record("Acme")));
    assert!(!app.lookup_succeeded(ticket, active_record("Duplicate")));
    assert_eq!(app.record().expect("record present").company, "Acme");
}

// =============================================================================
// Scan Again
// =============================================================================

#[test]
fn test_scan_again_clears_record_and_rearms() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");
    assert!(app.lookup_succeeded(ticket, active_record("Acme")));

    app.scan_again();

    assert_eq!(*app.state(), AppState::Scanning);
    assert!(app.record().is_none());
    assert!(app.decode("999999999999").is_some());
}

#[test]
fn test_scan_again_is_noop_while_scanning() {
    let mut app = granted_app();
    app.scan_again();
    assert_eq!(*app.state(), AppState::Scanning);
}

#[test]
fn test_scan_again_is_noop_during_lookup() {
    let mut app = granted_app();
    let ticket = app.decode("012345678905").expect("decode accepted");

    app.scan_again();

    // The in-flight lookup is still current
    assert!(app.lookup_succeeded(ticket, active_record("Acme")));
}
