//! Project-specific utilities live here.

/// Parse a numeric menu choice or ID typed at the console.
///
/// Surrounding whitespace is ignored; anything that is not a whole number is `None`.
pub fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_integers_with_padding() {
        assert_eq!(parse_number(" 42\n"), Some(42));
        assert_eq!(parse_number("+7"), Some(7));
        assert_eq!(parse_number("-3"), Some(-3));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("1.5"), None);
        assert_eq!(parse_number("1 2"), None);
    }
}
