use tracing::{debug, info};

use super::catalog::{ImportanceCatalog, SystemExclusions};
use super::errors::SnapshotError;
use super::filter::{self, Rejection};
use super::quartz;
use super::types::{RawWindowRecord, WindowEntry};

/// Capture one snapshot of every window the window server knows about,
/// across all workspaces and including minimized windows, filtered and
/// ordered for downstream activity matching.
pub fn snapshot_windows() -> Result<Vec<WindowEntry>, SnapshotError> {
    info!(event = "core.window.snapshot_started");

    let records = quartz::copy_window_records()?;
    let entries = build_snapshot(
        records,
        &ImportanceCatalog::default(),
        &SystemExclusions::default(),
    );

    info!(event = "core.window.snapshot_completed", count = entries.len());
    Ok(entries)
}

/// Run the full pipeline over an already-captured record list.
///
/// Pure over its inputs: the catalog and exclusion set are injected so
/// tests can run against synthetic data. Output order is
/// deterministic: important entries first, then app name ascending;
/// records with equal keys keep their enumeration order.
pub fn build_snapshot(
    records: Vec<RawWindowRecord>,
    catalog: &ImportanceCatalog,
    exclusions: &SystemExclusions,
) -> Vec<WindowEntry> {
    let total = records.len();
    let mut missing_identity = 0usize;
    let mut system_app = 0usize;
    let mut too_small = 0usize;
    let mut overlay = 0usize;
    let mut not_relevant = 0usize;

    let mut entries: Vec<WindowEntry> = records
        .into_iter()
        .filter_map(|record| match map_record(record, catalog, exclusions) {
            Ok(entry) => Some(entry),
            Err(reason) => {
                match reason {
                    Rejection::MissingIdentity => missing_identity += 1,
                    Rejection::SystemApp => system_app += 1,
                    Rejection::TooSmall => too_small += 1,
                    Rejection::OverlayLayer => overlay += 1,
                    Rejection::NotRelevant => not_relevant += 1,
                }
                None
            }
        })
        .collect();

    if entries.len() < total {
        debug!(
            event = "core.window.records_dropped",
            total = total,
            kept = entries.len(),
            missing_identity = missing_identity,
            system_app = system_app,
            too_small = too_small,
            overlay = overlay,
            not_relevant = not_relevant
        );
    }

    // Stable sort: important first, then app name (case-sensitive);
    // equal keys keep their input order.
    entries.sort_by(|a, b| {
        b.is_important()
            .cmp(&a.is_important())
            .then_with(|| a.app_name().cmp(b.app_name()))
    });

    entries
}

/// Serialize a snapshot to the output JSON document.
pub fn to_snapshot_json(entries: &[WindowEntry]) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(entries).map_err(|e| SnapshotError::SerializationFailed {
        message: e.to_string(),
    })
}

/// Map one raw record to an output entry, or say why it was dropped.
fn map_record(
    record: RawWindowRecord,
    catalog: &ImportanceCatalog,
    exclusions: &SystemExclusions,
) -> Result<WindowEntry, Rejection> {
    filter::noise_check(&record, exclusions)?;

    // noise_check guarantees both identity fields are usable
    let window_id = record.window_id.ok_or(Rejection::MissingIdentity)?;
    let app_name = record
        .owner_name
        .filter(|name| !name.is_empty())
        .ok_or(Rejection::MissingIdentity)?;

    let is_important = catalog.is_important(&app_name);
    if !filter::should_include(is_important, &record.title, &record.bounds) {
        return Err(Rejection::NotRelevant);
    }

    Ok(WindowEntry::new(
        window_id,
        app_name,
        record.title,
        record.bounds,
        record.is_on_screen,
        record.layer,
        is_important,
    ))
}
