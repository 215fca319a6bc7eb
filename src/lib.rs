// ── Safety policy ────────────────────────────────────────────────────────────
// Pure table lookups; there is no FFI and no reason for `unsafe` anywhere.
#![forbid(unsafe_code)]

//! Map Win32 window-message identifiers (`MSG::message`) to the name of their
//! `WM_*` constant, optionally hiding the handful of messages that fire on
//! every mouse twitch.
//!
//! ```
//! assert_eq!(wm2str::wm2str(0x0001, true), "WM_CREATE");
//! assert_eq!(wm2str::wm2str(0x0020, false), ""); // WM_SETCURSOR, frequent
//! ```
//!
//! Two Cargo features add optional message groups to the table:
//! `dde` (`WM_DDE_*`) and `mfc` (MFC's private `afxpriv.h` messages).

pub mod error;
pub mod messages;
pub mod parse;
pub mod report;
mod resolve;

pub use error::{Result, Wm2StrError};
pub use messages::MessageEntry;
pub use parse::parse_message;
pub use report::Report;
pub use resolve::{is_frequent, message_id, message_name, messages, wm2str};
