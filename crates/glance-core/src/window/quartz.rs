//! macOS window source backed by the Quartz window server.
//!
//! A single call to `CGWindowListCopyWindowInfo` with
//! `kCGWindowListOptionAll` and the null-window sentinel returns every
//! window across all Spaces, including minimized and occluded ones.
//! Each element is a CFDictionary keyed by the `kCGWindow*` constants;
//! fields that are missing or of an unexpected type are reported as
//! absent and left to the noise filter to judge.

use super::errors::SnapshotError;
use super::types::RawWindowRecord;

/// Retrieve one atomic snapshot of raw window records.
///
/// Hosts without a window server report the capability as unavailable,
/// which the caller maps to the empty-snapshot output.
pub fn copy_window_records() -> Result<Vec<RawWindowRecord>, SnapshotError> {
    #[cfg(target_os = "macos")]
    {
        imp::copy_window_records()
    }

    #[cfg(not(target_os = "macos"))]
    {
        Err(SnapshotError::CapabilityUnavailable)
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use std::ffi::c_void;

    use core_foundation::base::{CFGetTypeID, CFTypeID, TCFType, ToVoid};
    use core_foundation::boolean::CFBooleanGetTypeID;
    use core_foundation::dictionary::{
        CFDictionaryGetTypeID, CFDictionaryGetValueIfPresent, CFDictionaryRef,
    };
    use core_foundation::number::{
        CFBooleanGetValue, CFNumberGetTypeID, CFNumberGetValue, CFNumberRef, CFNumberType,
    };
    use core_foundation::string::{CFString, CFStringGetTypeID, CFStringRef};
    use core_graphics::window::{copy_window_info, kCGNullWindowID, kCGWindowListOptionAll};

    use crate::window::errors::SnapshotError;
    use crate::window::types::{RawWindowRecord, WindowBounds};

    #[allow(non_upper_case_globals)]
    const kCFNumberSInt64Type: CFNumberType = 4;
    #[allow(non_upper_case_globals)]
    const kCFNumberFloat64Type: CFNumberType = 6;

    pub fn copy_window_records() -> Result<Vec<RawWindowRecord>, SnapshotError> {
        let Some(list) = copy_window_info(kCGWindowListOptionAll, kCGNullWindowID) else {
            return Err(SnapshotError::EnumerationFailed {
                message: "CGWindowListCopyWindowInfo returned no window list".to_string(),
            });
        };

        let mut records = Vec::with_capacity(list.len() as usize);
        for item in list.iter() {
            let dict = (*item) as CFDictionaryRef;
            records.push(read_record(dict));
        }

        Ok(records)
    }

    fn read_record(dict: CFDictionaryRef) -> RawWindowRecord {
        let window_id =
            int_value(dict, "kCGWindowNumber").and_then(|id| u32::try_from(id).ok());
        let owner_name = string_value(dict, "kCGWindowOwnerName");
        let title = string_value(dict, "kCGWindowName").unwrap_or_default();
        let bounds = dict_value_of_type(dict, "kCGWindowBounds", unsafe {
            CFDictionaryGetTypeID()
        })
        .map(|value| read_bounds(value as CFDictionaryRef))
        .unwrap_or(WindowBounds::new(0.0, 0.0, 0.0, 0.0));
        let is_on_screen = bool_value(dict, "kCGWindowIsOnscreen").unwrap_or(false);
        let layer = int_value(dict, "kCGWindowLayer")
            .map(|layer| layer as i32)
            .unwrap_or(0);

        RawWindowRecord {
            window_id,
            owner_name,
            title,
            bounds,
            is_on_screen,
            layer,
        }
    }

    /// The bounds value is itself a CFDictionary with X/Y/Width/Height
    /// CFNumber entries.
    fn read_bounds(dict: CFDictionaryRef) -> WindowBounds {
        WindowBounds::new(
            float_value(dict, "X").unwrap_or(0.0),
            float_value(dict, "Y").unwrap_or(0.0),
            float_value(dict, "Width").unwrap_or(0.0),
            float_value(dict, "Height").unwrap_or(0.0),
        )
    }

    /// Fetch a raw dictionary value, requiring the expected CF type id.
    fn dict_value_of_type(
        dict: CFDictionaryRef,
        key: &str,
        type_id: CFTypeID,
    ) -> Option<*const c_void> {
        let cf_key = CFString::new(key);
        let mut value: *const c_void = std::ptr::null();

        let present =
            unsafe { CFDictionaryGetValueIfPresent(dict, cf_key.to_void(), &mut value) != 0 };
        if !present || value.is_null() {
            return None;
        }

        if unsafe { CFGetTypeID(value) } != type_id {
            return None;
        }

        Some(value)
    }

    fn int_value(dict: CFDictionaryRef, key: &str) -> Option<i64> {
        let value = dict_value_of_type(dict, key, unsafe { CFNumberGetTypeID() })?;

        let mut out = 0_i64;
        let out_ptr: *mut i64 = &mut out;
        let converted =
            unsafe { CFNumberGetValue(value as CFNumberRef, kCFNumberSInt64Type, out_ptr.cast()) };
        converted.then_some(out)
    }

    fn float_value(dict: CFDictionaryRef, key: &str) -> Option<f64> {
        let value = dict_value_of_type(dict, key, unsafe { CFNumberGetTypeID() })?;

        let mut out = 0_f64;
        let out_ptr: *mut f64 = &mut out;
        let converted =
            unsafe { CFNumberGetValue(value as CFNumberRef, kCFNumberFloat64Type, out_ptr.cast()) };
        converted.then_some(out)
    }

    fn bool_value(dict: CFDictionaryRef, key: &str) -> Option<bool> {
        let value = dict_value_of_type(dict, key, unsafe { CFBooleanGetTypeID() })?;
        Some(unsafe { CFBooleanGetValue(value.cast()) })
    }

    fn string_value(dict: CFDictionaryRef, key: &str) -> Option<String> {
        let value = dict_value_of_type(dict, key, unsafe { CFStringGetTypeID() })?;
        let string = unsafe { CFString::wrap_under_get_rule(value as CFStringRef) };
        Some(string.to_string())
    }
}
