// ── Window message constants ──────────────────────────────────────────────────
//
// Source of truth: WinUser.h (plus dde.h / afxpriv.h for the optional groups).
// Each row is written once; `message_table!` emits both the `pub const` and
// the (identifier, name) entry, so a name can never disagree with its value.
//
// Row order is significant: lookups return the first entry whose identifier
// matches, and several constants share a value (WM_WININICHANGE and
// WM_SETTINGCHANGE are both 0x001A).

/// One row of the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEntry {
    /// Numeric message identifier (`MSG::message`).
    pub id: u32,
    /// Constant name exactly as spelled in the platform headers.
    pub name: &'static str,
}

impl MessageEntry {
    pub(crate) const fn new(id: u32, name: &'static str) -> Self {
        Self { id, name }
    }
}

/// Declare a block of message constants together with the table slice that
/// maps each of them back to its own identifier text.
macro_rules! message_table {
    (
        $(#[$meta:meta])*
        $vis:vis const $table:ident = {
            $( $(#[$cmeta:meta])* $name:ident = $value:expr, )*
        }
    ) => {
        $(
            $(#[$cmeta])*
            pub const $name: u32 = $value;
        )*

        $(#[$meta])*
        $vis const $table: &[$crate::messages::MessageEntry] = &[
            $( $crate::messages::MessageEntry::new($name, stringify!($name)), )*
        ];
    };
}

#[cfg(feature = "dde")]
mod dde;
#[cfg(feature = "mfc")]
mod mfc;

#[cfg(feature = "dde")]
pub use dde::*;
#[cfg(feature = "mfc")]
pub use mfc::*;

// ── Core table ────────────────────────────────────────────────────────────────

message_table! {
    /// Messages every `<windows.h>` build knows about.
    pub(crate) const CORE = {
        // Window lifecycle and state
        WM_CREATE = 0x0001,
        WM_DESTROY = 0x0002,
        WM_MOVE = 0x0003,
        WM_SIZE = 0x0005,
        WM_ACTIVATE = 0x0006,
        WM_SETFOCUS = 0x0007,
        WM_KILLFOCUS = 0x0008,
        WM_ENABLE = 0x000A,
        WM_SETREDRAW = 0x000B,
        WM_SETTEXT = 0x000C,
        WM_GETTEXT = 0x000D,
        WM_GETTEXTLENGTH = 0x000E,
        WM_PAINT = 0x000F,
        WM_CLOSE = 0x0010,
        WM_QUERYENDSESSION = 0x0011,
        WM_QUIT = 0x0012,
        WM_QUERYOPEN = 0x0013,
        WM_ERASEBKGND = 0x0014,
        WM_SYSCOLORCHANGE = 0x0015,
        WM_ENDSESSION = 0x0016,
        WM_SHOWWINDOW = 0x0018,

        // Control colours
        WM_CTLCOLORMSGBOX = 0x0132,
        WM_CTLCOLOREDIT = 0x0133,
        WM_CTLCOLORLISTBOX = 0x0134,
        WM_CTLCOLORBTN = 0x0135,
        WM_CTLCOLORDLG = 0x0136,
        WM_CTLCOLORSCROLLBAR = 0x0137,
        WM_CTLCOLORSTATIC = 0x0138,

        // System notifications
        WM_WININICHANGE = 0x001A,
        /// Same value as `WM_WININICHANGE`, which wins the lookup.
        WM_SETTINGCHANGE = 0x001A,
        WM_DEVMODECHANGE = 0x001B,
        WM_ACTIVATEAPP = 0x001C,
        WM_FONTCHANGE = 0x001D,
        WM_TIMECHANGE = 0x001E,
        WM_CANCELMODE = 0x001F,
        WM_SETCURSOR = 0x0020,
        WM_MOUSEACTIVATE = 0x0021,
        WM_CHILDACTIVATE = 0x0022,
        WM_QUEUESYNC = 0x0023,
        WM_GETMINMAXINFO = 0x0024,
        WM_ICONERASEBKGND = 0x0027,
        WM_NEXTDLGCTL = 0x0028,
        WM_SPOOLERSTATUS = 0x002A,

        // Owner-draw and fonts
        WM_DRAWITEM = 0x002B,
        WM_MEASUREITEM = 0x002C,
        WM_DELETEITEM = 0x002D,
        WM_VKEYTOITEM = 0x002E,
        WM_CHARTOITEM = 0x002F,
        WM_SETFONT = 0x0030,
        WM_GETFONT = 0x0031,
        WM_QUERYDRAGICON = 0x0037,
        WM_COMPAREITEM = 0x0039,
        WM_COMPACTING = 0x0041,

        // Non-client area
        WM_NCCREATE = 0x0081,
        WM_NCDESTROY = 0x0082,
        WM_NCCALCSIZE = 0x0083,
        WM_NCHITTEST = 0x0084,
        WM_NCPAINT = 0x0085,
        WM_NCACTIVATE = 0x0086,
        WM_GETDLGCODE = 0x0087,
        WM_NCMOUSEMOVE = 0x00A0,
        WM_NCLBUTTONDOWN = 0x00A1,
        WM_NCLBUTTONUP = 0x00A2,
        WM_NCLBUTTONDBLCLK = 0x00A3,
        WM_NCRBUTTONDOWN = 0x00A4,
        WM_NCRBUTTONUP = 0x00A5,
        WM_NCRBUTTONDBLCLK = 0x00A6,
        WM_NCMBUTTONDOWN = 0x00A7,
        WM_NCMBUTTONUP = 0x00A8,
        WM_NCMBUTTONDBLCLK = 0x00A9,

        // Keyboard
        WM_KEYDOWN = 0x0100,
        WM_KEYUP = 0x0101,
        WM_CHAR = 0x0102,
        WM_DEADCHAR = 0x0103,
        WM_SYSKEYDOWN = 0x0104,
        WM_SYSKEYUP = 0x0105,
        WM_SYSCHAR = 0x0106,
        WM_SYSDEADCHAR = 0x0107,
        /// `_WIN32_WINNT >= 0x0501` value (WM_UNICHAR).
        WM_KEYLAST = 0x0109,

        // Dialogs, commands and menus
        WM_INITDIALOG = 0x0110,
        WM_COMMAND = 0x0111,
        WM_SYSCOMMAND = 0x0112,
        WM_TIMER = 0x0113,
        WM_HSCROLL = 0x0114,
        WM_VSCROLL = 0x0115,
        WM_INITMENU = 0x0116,
        WM_INITMENUPOPUP = 0x0117,
        WM_MENUSELECT = 0x011F,
        WM_MENUCHAR = 0x0120,
        WM_ENTERIDLE = 0x0121,

        // Mouse
        WM_MOUSEWHEEL = 0x020A,
        WM_MOUSEMOVE = 0x0200,
        WM_LBUTTONDOWN = 0x0201,
        WM_LBUTTONUP = 0x0202,
        WM_LBUTTONDBLCLK = 0x0203,
        WM_RBUTTONDOWN = 0x0204,
        WM_RBUTTONUP = 0x0205,
        WM_RBUTTONDBLCLK = 0x0206,
        WM_MBUTTONDOWN = 0x0207,
        WM_MBUTTONUP = 0x0208,
        WM_MBUTTONDBLCLK = 0x0209,
        WM_PARENTNOTIFY = 0x0210,

        // MDI
        WM_MDICREATE = 0x0220,
        WM_MDIDESTROY = 0x0221,
        WM_MDIACTIVATE = 0x0222,
        WM_MDIRESTORE = 0x0223,
        WM_MDINEXT = 0x0224,
        WM_MDIMAXIMIZE = 0x0225,
        WM_MDITILE = 0x0226,
        WM_MDICASCADE = 0x0227,
        WM_MDIICONARRANGE = 0x0228,
        WM_MDIGETACTIVE = 0x0229,
        WM_MDISETMENU = 0x0230,

        // Clipboard
        WM_CUT = 0x0300,
        WM_COPYDATA = 0x004A,
        WM_COPY = 0x0301,
        WM_PASTE = 0x0302,
        WM_CLEAR = 0x0303,
        WM_UNDO = 0x0304,
        WM_RENDERFORMAT = 0x0305,
        WM_RENDERALLFORMATS = 0x0306,
        WM_DESTROYCLIPBOARD = 0x0307,
        WM_DRAWCLIPBOARD = 0x0308,
        WM_PAINTCLIPBOARD = 0x0309,
        WM_VSCROLLCLIPBOARD = 0x030A,
        WM_SIZECLIPBOARD = 0x030B,
        WM_ASKCBFORMATNAME = 0x030C,
        WM_CHANGECBCHAIN = 0x030D,
        WM_HSCROLLCLIPBOARD = 0x030E,

        // Palette
        WM_QUERYNEWPALETTE = 0x030F,
        WM_PALETTEISCHANGING = 0x0310,
        WM_PALETTECHANGED = 0x0311,

        // Win32 additions
        WM_DROPFILES = 0x0233,
        WM_POWER = 0x0048,
        WM_WINDOWPOSCHANGED = 0x0047,
        WM_WINDOWPOSCHANGING = 0x0046,
        WM_HELP = 0x0053,
        WM_NOTIFY = 0x004E,
        WM_CONTEXTMENU = 0x007B,
        WM_TCARD = 0x0052,
        WM_MDIREFRESHMENU = 0x0234,
        WM_MOVING = 0x0216,
        WM_STYLECHANGED = 0x007D,
        WM_STYLECHANGING = 0x007C,
        WM_SIZING = 0x0214,
        WM_SETHOTKEY = 0x0032,
        WM_PRINT = 0x0317,
        WM_PRINTCLIENT = 0x0318,
        WM_POWERBROADCAST = 0x0218,
        WM_HOTKEY = 0x0312,
        WM_GETICON = 0x007F,
        WM_EXITMENULOOP = 0x0212,
        WM_ENTERMENULOOP = 0x0211,
        WM_DISPLAYCHANGE = 0x007E,
        WM_SETICON = 0x0080,
        WM_CAPTURECHANGED = 0x0215,
        WM_DEVICECHANGE = 0x0219,
    }
}

// ── Frequent messages ─────────────────────────────────────────────────────────

/// Messages sent so often (mouse tracking, hit-testing, control painting)
/// that a message log is unreadable with them in it.
pub(crate) const FREQUENT: &[u32] = &[
    WM_MOUSEMOVE,
    WM_NCMOUSEMOVE,
    WM_NCHITTEST,
    WM_SETCURSOR,
    WM_CTLCOLORBTN,
    WM_CTLCOLORDLG,
    WM_CTLCOLOREDIT,
    WM_CTLCOLORLISTBOX,
    WM_CTLCOLORMSGBOX,
    WM_CTLCOLORSCROLLBAR,
    WM_CTLCOLORSTATIC,
    WM_ENTERIDLE,
    WM_CANCELMODE,
];

// ── Compiled table ────────────────────────────────────────────────────────────

/// Table groups compiled into this build, in lookup order.
const GROUPS: &[&[MessageEntry]] = &[
    CORE,
    #[cfg(feature = "dde")]
    dde::DDE,
    #[cfg(feature = "mfc")]
    mfc::MFC,
];

/// Iterate the compiled table groups in lookup order.
pub(crate) fn groups() -> impl Iterator<Item = &'static [MessageEntry]> {
    GROUPS.iter().copied()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_their_constants() {
        let create = CORE.iter().find(|e| e.name == "WM_CREATE").expect("WM_CREATE row");
        assert_eq!(create.id, WM_CREATE);
        assert_eq!(create.id, 0x0001);
    }

    #[test]
    fn every_name_is_a_wm_constant() {
        for entry in groups().flatten() {
            assert!(entry.name.starts_with("WM_"), "{} is not a WM_ name", entry.name);
        }
    }

    /// The reference data repeated some rows verbatim; each name appears once.
    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = groups().flatten().map(|e| e.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn shared_value_keeps_declaration_order() {
        let shared: Vec<&str> = CORE
            .iter()
            .filter(|e| e.id == 0x001A)
            .map(|e| e.name)
            .collect();
        assert_eq!(shared, ["WM_WININICHANGE", "WM_SETTINGCHANGE"]);
    }

    #[test]
    fn every_frequent_message_is_in_the_table() {
        for &id in FREQUENT {
            assert!(CORE.iter().any(|e| e.id == id), "{id:#06x} missing from table");
        }
    }

    #[test]
    fn core_table_size() {
        // 164 rows in the reference data, minus 7 verbatim repeats.
        assert_eq!(CORE.len(), 157);
    }
}
