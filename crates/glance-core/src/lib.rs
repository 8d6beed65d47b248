//! glance-core: Core library for the glance window snapshot tool
//!
//! Turns the raw, noisy window list reported by the OS window server
//! into a small, relevant, consistently ordered set of entries that a
//! second-brain application can match user activity against.
//!
//! # Main Entry Points
//!
//! - [`window`] - Snapshot pipeline: filter, classify, order, emit
//! - [`logging`] - JSON logging initialization

pub mod errors;
pub mod events;
pub mod logging;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use errors::{GlanceError, GlanceResult};
pub use window::catalog::{ImportanceCatalog, SystemExclusions};
pub use window::errors::SnapshotError;
pub use window::types::{RawWindowRecord, WindowBounds, WindowEntry};

// Re-export the handler functions as the primary API
pub use window::handler::{build_snapshot, snapshot_windows, to_snapshot_json};

// Re-export logging initialization
pub use logging::init_logging;
