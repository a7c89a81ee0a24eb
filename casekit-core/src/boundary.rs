//! Word boundary detection for mixed-case and mixed-digit identifiers.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Character inserted at every detected boundary.
pub const SEPARATOR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Lower,
    Upper,
    Digit,
    /// A letter without case, e.g. CJK ideographs.
    Caseless,
    Other,
}

impl CharKind {
    fn of(c: char) -> Self {
        match get_general_category(c) {
            GeneralCategory::LowercaseLetter => CharKind::Lower,
            GeneralCategory::UppercaseLetter | GeneralCategory::TitlecaseLetter => CharKind::Upper,
            GeneralCategory::DecimalNumber => CharKind::Digit,
            GeneralCategory::ModifierLetter | GeneralCategory::OtherLetter => CharKind::Caseless,
            _ => CharKind::Other,
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, CharKind::Lower | CharKind::Upper | CharKind::Caseless)
    }
}

/// Whether a word boundary falls between `prev` and `cur`.
///
/// `next` is only consulted for acronyms, where the last capital of a run
/// starts the following word: `HTTPServer` splits as `HTTP Server`.
fn is_boundary(prev: CharKind, cur: CharKind, next: Option<CharKind>) -> bool {
    match (prev, cur) {
        (CharKind::Lower, CharKind::Upper) => true,
        (p, CharKind::Digit) if p.is_letter() => true,
        (CharKind::Digit, c) if c.is_letter() => true,
        (CharKind::Upper, CharKind::Upper) => next == Some(CharKind::Lower),
        _ => false,
    }
}

/// Inserts [`SEPARATOR`] between every pair of adjacent characters that
/// starts a new word. All other characters are copied unchanged.
///
/// ```
/// use casekit_core::mark_boundaries;
///
/// assert_eq!(mark_boundaries("fooBar"), "foo Bar");
/// assert_eq!(mark_boundaries("HTTPServer2nd"), "HTTP Server 2 nd");
/// ```
pub fn mark_boundaries(input: &str) -> String {
    let chars: Vec<(char, CharKind)> = input.chars().map(|c| (c, CharKind::of(c))).collect();
    let mut marked = String::with_capacity(input.len() + chars.len() / 2);
    let mut inserted = 0usize;

    for (i, &(ch, kind)) in chars.iter().enumerate() {
        if i > 0 {
            let prev = chars[i - 1].1;
            let next = chars.get(i + 1).map(|&(_, k)| k);
            if is_boundary(prev, kind, next) {
                marked.push(SEPARATOR);
                inserted += 1;
            }
        }
        marked.push(ch);
    }

    log::trace!("marked {inserted} word boundaries in {} chars", chars.len());
    marked
}
