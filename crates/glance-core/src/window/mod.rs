pub mod catalog;
pub mod errors;
pub mod filter;
pub mod handler;
pub mod types;

mod quartz;

pub use catalog::{ImportanceCatalog, SystemExclusions};
pub use errors::SnapshotError;
pub use handler::{build_snapshot, snapshot_windows, to_snapshot_json};
pub use types::{RawWindowRecord, WindowBounds, WindowEntry};
