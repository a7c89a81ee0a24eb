//! Character classes by Unicode general category.
//!
//! A letter is any `L*` char and a digit is a decimal number (`Nd`).
//! Superscripts, fractions and letter-like numerals such as `Ⅻ` are neither.

use unicode_general_category::{get_general_category, GeneralCategory};

pub(crate) fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

pub(crate) fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

pub(crate) fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Every char is a Unicode letter. The whole-string checks below all accept
/// the empty string.
pub fn is_alpha(s: &str) -> bool {
    s.chars().all(is_letter)
}

/// Every char is an ASCII digit `0-9`.
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Every char is an ASCII letter or digit.
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_satisfies_every_class() {
        assert!(is_alpha(""));
        assert!(is_numeric(""));
        assert!(is_alphanumeric(""));
    }

    #[test]
    fn alpha_accepts_unicode_letters() {
        assert!(is_alpha("hello"));
        assert!(is_alpha("Grüße"));
        assert!(is_alpha("漢字"));
        assert!(!is_alpha("abc1"));
        assert!(!is_alpha("a b"));
    }

    #[test]
    fn alpha_rejects_numerals_and_marks() {
        assert!(!is_alpha("Ⅻ"));
        assert!(!is_alpha("x²"));
        assert!(!is_alpha("e\u{301}"));
    }

    #[test]
    fn digits_are_decimal_numbers_only() {
        assert!(is_digit('7'));
        assert!(is_digit('٣'));
        assert!(!is_digit('²'));
        assert!(!is_digit('½'));
        assert!(!is_digit('Ⅻ'));
        assert!(is_letter('ǅ'));
        assert!(is_letter('漢'));
    }

    #[test]
    fn numeric_is_ascii_digits_only() {
        assert!(is_numeric("0123456789"));
        assert!(!is_numeric("12.5"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("٣"));
    }

    #[test]
    fn alphanumeric_is_ascii_only() {
        assert!(is_alphanumeric("abc123XYZ"));
        assert!(!is_alphanumeric("abc_123"));
        assert!(!is_alphanumeric("café"));
    }
}
