use clap::ArgMatches;
use tracing::{error, info};

use glance_core::GlanceError;
use glance_core::events;
use glance_core::window::{snapshot_windows, to_snapshot_json};

/// Emitted whenever the pipeline fails, for any reason.
///
/// The caller treats the snapshot as a best-effort enrichment signal:
/// it must always receive valid JSON and a zero exit status, never a
/// partial array or an error trace on stdout.
const EMPTY_SNAPSHOT: &str = "[]";

pub fn run(_matches: &ArgMatches) {
    events::log_app_startup();

    info!(event = "cli.snapshot_started");

    let payload = snapshot_windows()
        .and_then(|entries| to_snapshot_json(&entries).map(|json| (entries.len(), json)));

    match payload {
        Ok((count, json)) => {
            info!(event = "cli.snapshot_completed", count = count);
            println!("{json}");
        }
        Err(e) => {
            error!(
                event = "cli.snapshot_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            println!("{EMPTY_SNAPSHOT}");
        }
    }

    events::log_app_shutdown();
}
