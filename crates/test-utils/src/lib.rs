//! Shared helpers for runlog tests: tracing setup, fixed instants and fixture files.
use std::path::PathBuf;

use chrono::{TimeDelta, TimeZone, Utc};
use runlog_common::{fixtures_dir, malformed_fixtures_dir};
use runlog_core::{ErrorRecord, Instant};
use tracing::Level;

/// Install a test-captured subscriber for the current scope only; drop the guard to remove it.
pub fn init_test_tracing(level: Level) -> tracing::subscriber::DefaultGuard {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("runlog", level)
        .with_target("runlog_core", level);

    let fmt = tracing_subscriber::fmt::layer()
        .with_test_writer()
        .with_target(false)
        .with_level(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .set_default()
}

/// The instant every deterministic test starts from: 2024-01-15 09:00:00 UTC.
pub fn base_instant() -> Instant {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// [`base_instant`] shifted by whole seconds.
pub fn at_secs(secs: i64) -> Instant {
    base_instant() + TimeDelta::seconds(secs)
}

/// A record stamped `secs` after [`base_instant`].
pub fn record_at(origin: &str, secs: i64, fields: &[&str]) -> ErrorRecord {
    ErrorRecord::at(origin, at_secs(secs), fields.iter().copied())
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn malformed_fixture_path(name: &str) -> PathBuf {
    malformed_fixtures_dir().join(name)
}

/// Contents of a fixture file, panicking with the path on failure.
pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}
