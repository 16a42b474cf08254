/// How a subprocess's standard streams are wired.
///
/// - `Inherit`: stdin/stdout/stderr are the invoking terminal's (default,
///   interactive use).
/// - `Capture`: stdout/stderr are collected and handed back to the caller;
///   stdin is closed. Useful for tests and non-interactive callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    Inherit,
    Capture,
}

impl Default for StreamMode {
    fn default() -> Self {
        StreamMode::Inherit
    }
}
