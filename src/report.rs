// ── Lookup reports ────────────────────────────────────────────────────────────
//
// One record per looked-up message, shaped for both the CLI's text output and
// its `--json` mode.

use serde::Serialize;

use crate::messages::MessageEntry;
use crate::resolve::{is_frequent, wm2str};

/// Result of resolving one message identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub id: u32,
    /// `0x` followed by at least four hex digits, e.g. `"0x0201"`.
    pub hex: String,
    /// `None` when the lookup produced the empty result (unknown, or hidden
    /// as frequent).
    pub name: Option<&'static str>,
    pub frequent: bool,
}

impl Report {
    /// Resolve `id` the way `wm2str(id, show_frequent)` does.
    pub fn lookup(id: u32, show_frequent: bool) -> Self {
        let name = wm2str(id, show_frequent);
        Self {
            id,
            hex: format!("{id:#06x}"),
            name: (!name.is_empty()).then_some(name),
            frequent: is_frequent(id),
        }
    }

    /// Tab-separated line for the text output, `-` standing in for no name.
    pub fn to_line(&self) -> String {
        format!("{}\t{}", self.hex, self.name.unwrap_or("-"))
    }
}

impl From<&MessageEntry> for Report {
    fn from(entry: &MessageEntry) -> Self {
        Self {
            id: entry.id,
            hex: format!("{:#06x}", entry.id),
            name: Some(entry.name),
            frequent: is_frequent(entry.id),
        }
    }
}
