// ── Identifier parsing ────────────────────────────────────────────────────────
//
// Turns user-supplied text into a message identifier. Accepts the three forms
// a message usually shows up in: a debugger's decimal, a hex dump's `0x…`, or
// the constant's own name.

use crate::error::{Result, Wm2StrError};
use crate::resolve::message_id;

/// Parse `text` as a window message identifier.
///
/// - `"513"` → 513
/// - `"0x0201"` / `"0X201"` → 0x201
/// - `"WM_LBUTTONDOWN"` → 0x201 (must be in the compiled table)
///
/// Surrounding whitespace is ignored.
pub fn parse_message(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let invalid = || Wm2StrError::InvalidMessage { input: text.to_owned() };

    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        // from_str_radix would also take a sign.
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        return u32::from_str_radix(hex, 16).map_err(|_| invalid());
    }

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return trimmed.parse::<u32>().map_err(|_| invalid());
    }

    message_id(trimmed).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal() {
        assert_eq!(parse_message("513").unwrap(), 0x0201);
        assert_eq!(parse_message("0").unwrap(), 0);
        assert_eq!(parse_message(" 15 ").unwrap(), 15);
    }

    #[test]
    fn hex_either_case() {
        assert_eq!(parse_message("0x0201").unwrap(), 0x0201);
        assert_eq!(parse_message("0XfFfF").unwrap(), 0xFFFF);
        assert_eq!(parse_message("0xffffffff").unwrap(), u32::MAX);
    }

    #[test]
    fn constant_name() {
        assert_eq!(parse_message("WM_LBUTTONDOWN").unwrap(), 0x0201);
        assert_eq!(parse_message("WM_SETTINGCHANGE").unwrap(), 0x001A);
    }

    #[test]
    fn rejects_garbage() {
        let garbage = [
            "", "   ", "0x", "0xG1", "0x+5", "0x-1", "0X+200", "12ab", "-1", "+5", "4294967296",
            "wm_paint", "WM_NOPE",
        ];
        for text in garbage {
            let err = parse_message(text).expect_err(text);
            assert!(
                matches!(&err, Wm2StrError::InvalidMessage { input } if input == text),
                "{text:?} -> {err}"
            );
        }
    }
}
