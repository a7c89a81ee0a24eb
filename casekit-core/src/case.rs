//! Case conversions built on [`words`].

use std::fmt;
use std::str::FromStr;

use unicode_case_mapping::to_titlecase;
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::classify::{is_letter, is_letter_or_digit};
use crate::error::CaseKitError;
use crate::words::words;

/// Title-cases the first letter of `word` and lowercases everything after it.
///
/// Characters in front of the first letter are kept as they are, so a token
/// made only of digits comes back unchanged.
pub fn capitalize_word(word: &str) -> String {
    let Some((idx, first)) = word.char_indices().find(|&(_, c)| is_letter(c)) else {
        return word.to_string();
    };
    let rest = &word[idx + first.len_utf8()..];

    let mut out = String::with_capacity(word.len());
    out.push_str(&word[..idx]);
    push_titlecase(&mut out, first);
    out.push_str(&rest.to_lowercase());
    out
}

/// Titlecase differs from uppercase for digraphs and expanding letters:
/// `ǆ` becomes `ǅ` and `ß` becomes `Ss`.
fn push_titlecase(out: &mut String, c: char) {
    let mut mapped = to_titlecase(c)
        .into_iter()
        .filter_map(|u| char::from_u32(u).filter(|&m| m != '\0'))
        .peekable();
    if mapped.peek().is_none() {
        out.push(c);
    } else {
        out.extend(mapped);
    }
}

/// Letters, digits and connectors such as `_` never split a word.
fn is_title_word_char(c: char) -> bool {
    is_letter_or_digit(c) || get_general_category(c) == GeneralCategory::ConnectorPunctuation
}

/// Joins the word characters on both sides when it appears alone between
/// them: `e.g`, `don't`, `o’neil`.
fn is_mid_word_char(c: char) -> bool {
    matches!(c, '.' | ':' | '\'' | '\u{2019}')
}

/// Title-cases the whole string: every word gets [`capitalize_word`] and the
/// characters between words are copied through.
///
/// ```
/// use casekit_core::capitalize;
///
/// assert_eq!(capitalize("hello wORLD"), "Hello World");
/// assert_eq!(capitalize("don't-stop"), "Don't-Stop");
/// assert_eq!(capitalize("snake_case e.g."), "Snake_case E.g.");
/// ```
pub fn capitalize(input: &str) -> String {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let in_word = |i: usize| {
        let c = chars[i].1;
        if is_title_word_char(c) {
            return true;
        }
        let prev = i.checked_sub(1).map(|p| chars[p].1);
        let next = chars.get(i + 1).map(|&(_, n)| n);
        is_mid_word_char(c)
            && prev.is_some_and(is_title_word_char)
            && next.is_some_and(is_title_word_char)
    };

    let mut out = String::with_capacity(input.len());
    let mut word_start: Option<usize> = None;

    for (i, &(idx, ch)) in chars.iter().enumerate() {
        match (in_word(i), word_start) {
            (true, None) => word_start = Some(idx),
            (true, Some(_)) => {}
            (false, Some(start)) => {
                out.push_str(&capitalize_word(&input[start..idx]));
                out.push(ch);
                word_start = None;
            }
            (false, None) => out.push(ch),
        }
    }
    if let Some(start) = word_start {
        out.push_str(&capitalize_word(&input[start..]));
    }
    out
}

/// `"hello world"` becomes `"HelloWorld"`.
pub fn pascal_case(input: &str) -> String {
    words(input).iter().map(|w| capitalize_word(w)).collect()
}

/// `"Hello World"` becomes `"helloWorld"`.
pub fn camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let lower = w.to_lowercase();
            if i == 0 {
                lower
            } else {
                capitalize_word(&lower)
            }
        })
        .collect()
}

/// `"Hello World"` becomes `"hello-world"`.
///
/// Tokens are lowercased with [`str::to_lowercase`]. Uppercase letters that
/// have no lowercase mapping, such as `ℍ`, pass through unchanged.
pub fn kebab_case(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Pascal,
    Camel,
    Kebab,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Pascal, CaseStyle::Camel, CaseStyle::Kebab];

    pub fn apply(self, input: &str) -> String {
        match self {
            CaseStyle::Pascal => pascal_case(input),
            CaseStyle::Camel => camel_case(input),
            CaseStyle::Kebab => kebab_case(input),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Pascal => "pascal",
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseKitError;

    /// Accepts the short name or the conventional spelling, ignoring ASCII
    /// case: `kebab`, `Kebab`, `kebab-case`, `camelCase`, `PascalCase`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let name = normalized.strip_suffix("case").unwrap_or(&normalized);

        CaseStyle::ALL
            .into_iter()
            .find(|style| style.name() == name)
            .ok_or_else(|| {
                log::debug!("rejected case style {s:?}");
                CaseKitError::UnknownCaseStyle(s.to_string())
            })
    }
}
