//! Escape decoding for quoted strings.

use crate::cursor::Cursor;
use crate::LexErrorKind;

/// Decode the escape following a backslash (already consumed).
///
/// Newlines inside strings are counted by the caller, so `\` followed by a
/// raw newline is rejected here.
pub(crate) fn decode_escape(cursor: &mut Cursor) -> Result<char, LexErrorKind> {
    let Some(c) = cursor.bump() else {
        return Err(LexErrorKind::UnterminatedString);
    };
    match c {
        '\'' => Ok('\''),
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        'n' => Ok('\n'),
        't' => Ok('\t'),
        'r' => Ok('\r'),
        '0' => Ok('\0'),
        'x' => {
            let hi = cursor.bump().and_then(|d| d.to_digit(16));
            let lo = cursor.bump().and_then(|d| d.to_digit(16));
            match (hi, lo) {
                (Some(hi), Some(lo)) => char::from_u32(hi * 16 + lo).ok_or(LexErrorKind::InvalidHexEscape),
                _ => Err(LexErrorKind::InvalidHexEscape),
            }
        }
        other => Err(LexErrorKind::InvalidEscape(other)),
    }
}
