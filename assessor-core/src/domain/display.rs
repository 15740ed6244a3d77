//! Display state of the health status view

/// Text shown while the health check is still in flight
pub const LOADING_TEXT: &str = "loading...";

/// Text shown when the health check failed
pub const UNREACHABLE_TEXT: &str = "unreachable";

/// Prefix of the rendered status line
pub const STATUS_PREFIX: &str = "Backend Status: ";

/// What the status line currently shows
///
/// Starts as [`DisplayState::Loading`] and moves at most once to one of the
/// settled variants. There is no way back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Request still in flight
    #[default]
    Loading,

    /// Backend answered with this status text
    Resolved(String),

    /// Request failed; the reason is kept for diagnostics only
    Unreachable(String),
}

impl DisplayState {
    /// Text shown after the status prefix
    pub fn status_text(&self) -> &str {
        match self {
            DisplayState::Loading => LOADING_TEXT,
            DisplayState::Resolved(status) => status,
            DisplayState::Unreachable(_) => UNREACHABLE_TEXT,
        }
    }

    /// Full status line, e.g. `Backend Status: ok`
    pub fn status_line(&self) -> String {
        format!("{}{}", STATUS_PREFIX, self.status_text())
    }
}
