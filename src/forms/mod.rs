pub mod categories;
pub mod products;

/// Parse a raw resource identifier; well-formed identifiers are positive
/// base-10 integers.
pub fn parse_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Trim a text field, mapping whitespace-only input to `None`.
pub(crate) fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
    }

    #[test]
    fn parse_id_rejects_malformed_values() {
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("4.5"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn trimmed_strips_and_drops_empty() {
        assert_eq!(trimmed(Some("  Frutas  ")), Some("Frutas".to_string()));
        assert_eq!(trimmed(Some("   ")), None);
        assert_eq!(trimmed(None), None);
    }
}
