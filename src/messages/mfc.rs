// ── MFC private messages (afxpriv.h) ──────────────────────────────────────────
//
// Enabled by the `mfc` feature. Appended after the core table and, when both
// features are on, after the DDE block.

message_table! {
    /// Framework-internal messages MFC sends between its own windows.
    pub(crate) const MFC = {
        WM_SIZEPARENT = 0x0361,
        WM_SETMESSAGESTRING = 0x0362,
        WM_IDLEUPDATECMDUI = 0x0363,
        WM_INITIALUPDATE = 0x0364,
        WM_COMMANDHELP = 0x0365,
        WM_HELPHITTEST = 0x0366,
        WM_EXITHELPMODE = 0x0367,
    }
}
