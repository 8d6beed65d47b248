use serde::Serialize;

/// Window geometry as reported by the window server, in points.
///
/// Serialized with the Quartz bounds-dictionary key casing so
/// downstream consumers see the same shape the window server reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowBounds {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
}

impl WindowBounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One window as reported by the window server, before any filtering.
///
/// Identity fields are optional because the window server can omit
/// them. Absence is decided by the noise filter, never papered over
/// with defaults.
#[derive(Debug, Clone)]
pub struct RawWindowRecord {
    pub window_id: Option<u32>,
    pub owner_name: Option<String>,
    pub title: String,
    pub bounds: WindowBounds,
    pub is_on_screen: bool,
    pub layer: i32,
}

/// A filtered, classified window ready for emission.
///
/// Immutable once constructed; `area` is computed exactly once in
/// [`WindowEntry::new`] from the bounds it was constructed with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowEntry {
    window_id: u32,
    app_name: String,
    window_title: String,
    bounds: WindowBounds,
    is_on_screen: bool,
    layer: i32,
    is_important: bool,
    area: f64,
}

impl WindowEntry {
    pub fn new(
        window_id: u32,
        app_name: String,
        window_title: String,
        bounds: WindowBounds,
        is_on_screen: bool,
        layer: i32,
        is_important: bool,
    ) -> Self {
        let area = bounds.width * bounds.height;
        Self {
            window_id,
            app_name,
            window_title,
            bounds,
            is_on_screen,
            layer,
            is_important,
            area,
        }
    }

    pub fn window_id(&self) -> u32 {
        self.window_id
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    pub fn bounds(&self) -> &WindowBounds {
        &self.bounds
    }

    pub fn is_on_screen(&self) -> bool {
        self.is_on_screen
    }

    pub fn layer(&self) -> i32 {
        self.layer
    }

    pub fn is_important(&self) -> bool {
        self.is_important
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}
