//! Numeric literal decoding.
//!
//! The lexer keeps literal text as written; conversion happens when the
//! evaluator reaches the literal so overflow is reported as a runtime error
//! with a frame trace.

/// Decode a decimal or `0x` hexadecimal integer literal.
///
/// Returns `None` on overflow or malformed text.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let text = text.replace('_', "");
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok();
    }
    text.parse().ok()
}

/// Decode a floating point literal (`1.5`, `.5`, `1e3`).
pub fn parse_float_literal(text: &str) -> Option<f64> {
    text.replace('_', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_hex() {
        assert_eq!(parse_int_literal("42"), Some(42));
        assert_eq!(parse_int_literal("0xff"), Some(255));
        assert_eq!(parse_int_literal("0XFF"), Some(255));
        assert_eq!(parse_int_literal("1_000"), Some(1000));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(parse_int_literal("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int_literal("9223372036854775808"), None);
        assert_eq!(parse_int_literal("0x10000000000000000"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float_literal("2.5"), Some(2.5));
        assert_eq!(parse_float_literal(".5"), Some(0.5));
        assert_eq!(parse_float_literal("1e3"), Some(1000.0));
    }
}
