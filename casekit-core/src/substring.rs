//! Rune (Unicode scalar value) indexed slicing.

/// Number of `char`s in `s`.
pub fn rune_length(s: &str) -> usize {
    s.chars().count()
}

fn resolve_offset(offset: isize, size: usize) -> usize {
    let magnitude = offset.unsigned_abs();
    if offset < 0 {
        size.saturating_sub(magnitude)
    } else {
        magnitude
    }
}

fn byte_index(s: &str, runes: usize) -> usize {
    s.char_indices().nth(runes).map_or(s.len(), |(idx, _)| idx)
}

/// Borrowed window of at most `length` runes starting at rune `offset`.
///
/// A negative `offset` counts back from the end and is clamped to the start
/// of the string. An offset at or past the end yields `""`, and `length` is
/// clamped to the runes that remain, so this never panics.
pub fn rune_window(s: &str, offset: isize, length: usize) -> &str {
    let size = rune_length(s);
    let start = resolve_offset(offset, size);
    if start >= size {
        return "";
    }
    let length = length.min(size - start);

    let begin = byte_index(s, start);
    let end = begin + byte_index(&s[begin..], length);
    &s[begin..end]
}

/// Same window as [`rune_window`], rebuilt as the caller's own string type.
///
/// ```
/// use casekit_core::substring;
/// use std::rc::Rc;
///
/// assert_eq!(substring(String::from("hello"), -3, 2), "ll");
/// let shared: Rc<str> = substring(Rc::from("héllo"), 1, 3);
/// assert_eq!(&*shared, "éll");
/// ```
pub fn substring<T>(from: T, offset: isize, length: usize) -> T
where
    T: AsRef<str> + for<'a> From<&'a str>,
{
    T::from(rune_window(from.as_ref(), offset, length))
}
