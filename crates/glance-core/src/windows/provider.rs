use crate::windows::errors::ProviderError;
use crate::windows::types::WindowRecord;

/// Collaborator seam for the external window-enumeration tool.
///
/// Implementations own process execution, native API calls, retries, and
/// whatever else producing the raw text involves. The core only consumes
/// what they return: raw window-list text for full enumeration and a single
/// parsed record for the focused-window query.
///
/// Implementations must be `Send + Sync`; the monitor calls them from its
/// polling task while transport requests may call them concurrently.
pub trait WindowProvider: Send + Sync {
    /// Enumerate all on-screen windows, returning the tool's raw text output.
    fn enumerate_windows(&self) -> Result<String, ProviderError>;

    /// Query the currently focused window, if any.
    fn focused_window(&self) -> Result<Option<WindowRecord>, ProviderError>;
}
