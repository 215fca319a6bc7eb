// ── Message name resolution ───────────────────────────────────────────────────
//
// Pure lookups over the compiled message table. Nothing here allocates, logs
// or fails: an unknown identifier is simply "no name".

use crate::messages::{self, MessageEntry};

/// Name of the `WM_*` constant for `message`, or `""` when there is none.
///
/// With `show_frequent == false`, the very frequent messages (mouse moves,
/// hit-tests, control colouring, …) also yield `""`, even though they are in
/// the table. Typical use is filtering a window-procedure trace:
///
/// ```
/// let name = wm2str::wm2str(0x0200, false);
/// assert!(name.is_empty()); // WM_MOUSEMOVE is suppressed
/// assert_eq!(wm2str::wm2str(0x0001, false), "WM_CREATE");
/// ```
pub fn wm2str(message: u32, show_frequent: bool) -> &'static str {
    if !show_frequent && is_frequent(message) {
        return "";
    }
    message_name(message).unwrap_or("")
}

/// Name of the first table entry whose identifier is `message`.
///
/// Equivalent to `wm2str(message, true)`, with `None` in place of `""`.
pub fn message_name(message: u32) -> Option<&'static str> {
    messages().find(|e| e.id == message).map(|e| e.name)
}

/// Whether `message` is one of the high-frequency messages hidden by
/// `wm2str(_, false)`.
pub fn is_frequent(message: u32) -> bool {
    messages::FREQUENT.contains(&message)
}

/// Identifier of the constant called `name` (exact, case-sensitive).
pub fn message_id(name: &str) -> Option<u32> {
    messages().find(|e| e.name == name).map(|e| e.id)
}

/// Every entry compiled into this build, in lookup order: the core table,
/// then the `dde` group, then the `mfc` group.
pub fn messages() -> impl Iterator<Item = &'static MessageEntry> {
    messages::groups().flatten()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
