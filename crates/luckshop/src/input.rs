//! Customer input.

/// Parses the luck bonus a customer typed.
///
/// Surrounding whitespace and a leading `+` or `-` are accepted. Anything
/// else that is not a whole number in `i32` range counts as no bonus at all.
#[must_use]
pub fn parse_bonus(raw: &str) -> i32 {
    match raw.trim().parse::<i32>() {
        Ok(bonus) => bonus,
        Err(_) => {
            if !raw.trim().is_empty() {
                tracing::debug!(raw, "unreadable bonus, treating as 0");
            }
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_bonus("3"), 3);
        assert_eq!(parse_bonus("0"), 0);
        assert_eq!(parse_bonus("-7"), -7);
    }

    #[test]
    fn test_sign_and_whitespace() {
        assert_eq!(parse_bonus("+4"), 4);
        assert_eq!(parse_bonus("  12\n"), 12);
        assert_eq!(parse_bonus("\t-2 "), -2);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_bonus(""), 0);
        assert_eq!(parse_bonus("   "), 0);
        assert_eq!(parse_bonus("three"), 0);
        assert_eq!(parse_bonus("2.5"), 0);
        assert_eq!(parse_bonus("1 2"), 0);
        assert_eq!(parse_bonus("99999999999"), 0);
    }
}
