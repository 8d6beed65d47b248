use super::catalog::SystemExclusions;
use super::types::{RawWindowRecord, WindowBounds};

/// Minimum width and height, in points, for a window to be considered
/// at all. Anything smaller is a decorative or invisible helper.
pub const MIN_DIMENSION: f64 = 50.0;

/// Windows above this layer are system overlays (notification banners,
/// menu bar extras). The boundary itself still passes.
pub const MAX_LAYER: i32 = 200;

/// Dimensions above which an untitled window from an unrecognized
/// application is still plausibly a primary content window.
pub const CONTENT_MIN_WIDTH: f64 = 300.0;
pub const CONTENT_MIN_HEIGHT: f64 = 200.0;

/// Why a raw record was dropped from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Window id missing, or owner name missing or empty.
    MissingIdentity,
    /// Owner is a known system/chrome process or the host itself.
    SystemApp,
    /// Smaller than [`MIN_DIMENSION`] in either dimension.
    TooSmall,
    /// Layered above normal application windows.
    OverlayLayer,
    /// Unrecognized app with no title and unconvincing size.
    NotRelevant,
}

/// Noise-filter predicate over one raw record.
///
/// Rules apply in order and short-circuit: identity, system exclusion,
/// minimum size, overlay layer. No side effects.
pub fn noise_check(
    record: &RawWindowRecord,
    exclusions: &SystemExclusions,
) -> Result<(), Rejection> {
    if record.window_id.is_none() {
        return Err(Rejection::MissingIdentity);
    }

    let owner = record.owner_name.as_deref().unwrap_or("");
    if owner.is_empty() {
        return Err(Rejection::MissingIdentity);
    }

    if exclusions.contains(owner) {
        return Err(Rejection::SystemApp);
    }

    if record.bounds.width < MIN_DIMENSION || record.bounds.height < MIN_DIMENSION {
        return Err(Rejection::TooSmall);
    }

    if record.layer > MAX_LAYER {
        return Err(Rejection::OverlayLayer);
    }

    Ok(())
}

/// Final keep/drop decision for a record that passed the noise filter.
///
/// Important applications are always surfaced, covering minimized and
/// title-less windows. Unknown applications need a human-readable
/// title or content-window size; this drops toolbars, popovers, and
/// tooltips from unrecognized processes.
pub fn should_include(is_important: bool, title: &str, bounds: &WindowBounds) -> bool {
    is_important
        || !title.trim().is_empty()
        || (bounds.width > CONTENT_MIN_WIDTH && bounds.height > CONTENT_MIN_HEIGHT)
}
