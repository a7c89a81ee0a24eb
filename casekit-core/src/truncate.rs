//! Bounded-length truncation with an ellipsis marker.

use crate::substring::{rune_length, rune_window};

pub const ELLIPSIS: &str = "...";

const ELLIPSIS_LEN: usize = 3;

/// Trims `input` and bounds it to `max_len` characters, replacing the cut-off
/// tail with [`ELLIPSIS`].
///
/// Lengths are counted in `char`s, so a cut never lands inside a multi-byte
/// character. When there is no room for any content next to the marker
/// (`max_len < 3`, negative included) the result is the bare marker.
///
/// # Examples
/// ```
/// use casekit_core::ellipsis;
///
/// assert_eq!(ellipsis("hello world", 5), "he...");
/// assert_eq!(ellipsis("  hi  ", 5), "hi");
/// assert_eq!(ellipsis("hello", 2), "...");
/// ```
pub fn ellipsis(input: &str, max_len: isize) -> String {
    let trimmed = input.trim();
    let len = rune_length(trimmed);
    let max_len = usize::try_from(max_len).ok();

    if max_len.is_some_and(|max| len <= max) {
        return trimmed.to_string();
    }

    match max_len {
        Some(max) if len >= ELLIPSIS_LEN && max >= ELLIPSIS_LEN => {
            let kept = rune_window(trimmed, 0, max - ELLIPSIS_LEN).trim_end();
            format!("{kept}{ELLIPSIS}")
        }
        _ => ELLIPSIS.to_string(),
    }
}
