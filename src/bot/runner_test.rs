// ABOUTME: Tests for token parsing and outcome rendering.
// ABOUTME: The full runner loop is exercised in tests/integration.rs.

use std::time::Duration;

use super::runner::{parse_token, render};
use crate::command::{DenyReason, DispatchOutcome, StatusReport};

#[test]
fn parses_prefixed_token() {
    assert_eq!(parse_token("!red", "!"), Some("red".to_string()));
    assert_eq!(parse_token("  !red  ", "!"), Some("red".to_string()));
}

#[test]
fn ignores_trailing_words() {
    assert_eq!(
        parse_token("!red please and thanks", "!"),
        Some("red".to_string())
    );
}

#[test]
fn unprefixed_text_yields_nothing() {
    assert_eq!(parse_token("hello chat", "!"), None);
    assert_eq!(parse_token("red", "!"), None);
}

#[test]
fn bare_prefix_yields_nothing() {
    assert_eq!(parse_token("!", "!"), None);
    assert_eq!(parse_token("!   ", "!"), None);
}

#[test]
fn custom_prefix_is_honored() {
    assert_eq!(parse_token("~blue", "~"), Some("blue".to_string()));
    assert_eq!(parse_token("!blue", "~"), None);
}

#[test]
fn renders_color_confirmation() {
    let outcome = DispatchOutcome::ColorSet {
        color: "red".to_string(),
    };
    assert_eq!(render(&outcome), Some("All lights set to red!".to_string()));
}

#[test]
fn renders_black_as_lights_off() {
    let outcome = DispatchOutcome::ColorSet {
        color: "black".to_string(),
    };
    assert_eq!(render(&outcome), Some("All lights turned off".to_string()));
}

#[test]
fn renders_power_and_toggle_confirmations() {
    assert!(render(&DispatchOutcome::PoweredOn).unwrap().contains("on"));
    assert!(render(&DispatchOutcome::PoweredOff).unwrap().contains("off"));
    assert!(render(&DispatchOutcome::Enabled).unwrap().contains("ENABLED"));
    assert!(
        render(&DispatchOutcome::Disabled)
            .unwrap()
            .contains("DISABLED")
    );
}

#[test]
fn denials_and_failures_stay_silent() {
    assert_eq!(render(&DispatchOutcome::Ignored), None);
    assert_eq!(
        render(&DispatchOutcome::Denied(DenyReason::Unauthorized)),
        None
    );
    assert_eq!(
        render(&DispatchOutcome::Denied(DenyReason::Disabled)),
        None
    );
    assert_eq!(
        render(&DispatchOutcome::BroadcastFailed { succeeded: 1 }),
        None
    );
}

#[test]
fn renders_status_snapshot() {
    let report = StatusReport {
        enabled: true,
        uptime: Duration::from_secs(3661),
        total_requests: 42,
        quota_ceiling: 10_000,
        admins: vec!["owner".to_string(), "mod1".to_string()],
    };
    let text = render(&DispatchOutcome::Status(report)).unwrap();
    assert!(text.contains("ONLINE"));
    assert!(text.contains("01:01:01"));
    assert!(text.contains("42/10000 (9958 remaining)"));
    assert!(text.contains("owner, mod1"));
}
