// ── DDE messages (dde.h) ──────────────────────────────────────────────────────
//
// Enabled by the `dde` feature. Appended after the core table.

message_table! {
    /// Dynamic Data Exchange conversation messages, `WM_DDE_FIRST` upward.
    pub(crate) const DDE = {
        WM_DDE_INITIATE = 0x03E0,
        WM_DDE_TERMINATE = 0x03E1,
        WM_DDE_ADVISE = 0x03E2,
        WM_DDE_UNADVISE = 0x03E3,
        WM_DDE_ACK = 0x03E4,
        WM_DDE_DATA = 0x03E5,
        WM_DDE_REQUEST = 0x03E6,
        WM_DDE_POKE = 0x03E7,
        WM_DDE_EXECUTE = 0x03E8,
    }
}
