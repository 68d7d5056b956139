use serde::{Deserialize, Serialize};

/// Screen-space rectangle of a window.
///
/// Zero-sized windows are valid; the enumeration tool reports them for
/// freshly created or minimized windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowBounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One observed on-screen window.
///
/// The `id` is synthesized during parsing and is stable only within a single
/// snapshot; it is not a platform-native window handle and must not be
/// persisted across enumeration calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: String,
    pub title: String,
    pub app_name: String,
    pub pid: u32,
    pub bounds: WindowBounds,
}

/// Partial descriptor used to locate a window via fuzzy matching.
///
/// Every field is optional. Absent fields contribute nothing to the match
/// score; an identifier with no fields set matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowIdentifier {
    pub id: Option<String>,
    pub pid: Option<u32>,
    pub title: Option<String>,
    pub app_name: Option<String>,
    pub position: Option<(i32, i32)>,
    pub size: Option<(i32, i32)>,
}

impl WindowIdentifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Whether no fields are set at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.pid.is_none()
            && self.title.is_none()
            && self.app_name.is_none()
            && self.position.is_none()
            && self.size.is_none()
    }
}
