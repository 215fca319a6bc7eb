// ── Central error type ────────────────────────────────────────────────────────
//
// The lookup itself cannot fail; only identifier parsing and the CLI's output
// path produce errors. All of them return `error::Result<T>`.

/// Every error that wm2str can produce.
#[derive(Debug)]
pub enum Wm2StrError {
    /// Text that is neither a `u32` (decimal or `0x` hex) nor a known
    /// constant name.
    InvalidMessage {
        /// The offending input, verbatim.
        input: String,
    },

    /// Writing results failed.
    Io(std::io::Error),

    /// Serializing a JSON report failed.
    Json(serde_json::Error),
}

impl std::fmt::Display for Wm2StrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMessage { input } => {
                write!(f, "invalid window message {input:?}: expected a number or a WM_* name")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for Wm2StrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::InvalidMessage { .. } => None,
        }
    }
}

impl From<std::io::Error> for Wm2StrError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Wm2StrError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json reports writer failures as its own error; keep them as
        // I/O so the CLI can recognise a closed pipe.
        if e.is_io() {
            return Self::Io(e.into());
        }
        Self::Json(e)
    }
}

impl Wm2StrError {
    /// True when the error is stdout having been closed under us.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Wm2StrError>;
