//! Hexadecimal ids as they appear in text and hint documents

use crate::error::{Error, Result};

/// Parse a hex id such as `"0x1f0"` or `"1f0"`
///
/// # Errors
/// Returns [`Error::InvalidHexId`] if the string is empty or not valid hex.
pub fn parse_hex_id(s: &str) -> Result<i32> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexId(s.to_string()));
    }
    // Ids are stored as i32 but written unsigned, so parse wide and reinterpret
    u32::from_str_radix(digits, 16)
        .map(|v| v as i32)
        .map_err(|_| Error::InvalidHexId(s.to_string()))
}

/// Format an id the way documents store it (lowercase, no prefix)
pub fn format_hex_id(id: i32) -> String {
    format!("{:x}", id as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_id() {
        assert_eq!(parse_hex_id("0x1f0").unwrap(), 0x1f0);
        assert_eq!(parse_hex_id("1F0").unwrap(), 0x1f0);
        assert_eq!(parse_hex_id(" 0 ").unwrap(), 0);
        assert_eq!(parse_hex_id("ffffffff").unwrap(), -1);
    }

    #[test]
    fn test_parse_hex_id_invalid() {
        assert!(matches!(parse_hex_id("0x"), Err(Error::InvalidHexId(_))));
        assert!(matches!(parse_hex_id("intro"), Err(Error::InvalidHexId(_))));
        assert!(matches!(parse_hex_id("123456789"), Err(Error::InvalidHexId(_))));
        assert!(matches!(parse_hex_id("+1f"), Err(Error::InvalidHexId(_))));
        assert!(matches!(parse_hex_id("0x+1f"), Err(Error::InvalidHexId(_))));
        assert!(matches!(parse_hex_id("-1"), Err(Error::InvalidHexId(_))));
    }

    #[test]
    fn test_format_hex_id() {
        assert_eq!(format_hex_id(0x1f0), "1f0");
        assert_eq!(parse_hex_id(&format_hex_id(-2)).unwrap(), -2);
    }
}
