use crate::substring::rune_length;

fn fill_to(len: usize, width: usize, fill: &str) -> String {
    let fill_len = rune_length(fill);
    if fill_len == 0 || len >= width {
        return String::new();
    }
    let copies = (width - len).div_ceil(fill_len);
    fill.repeat(copies)
}

/// Prepends whole copies of `fill` until `input` is at least `width` chars
/// long. The last copy may overshoot `width`; an empty `fill` is a no-op.
pub fn pad_start(input: &str, width: usize, fill: &str) -> String {
    let mut padded = fill_to(rune_length(input), width, fill);
    padded.push_str(input);
    padded
}

/// Appends whole copies of `fill` until `input` is at least `width` chars
/// long. Same overshoot rule as [`pad_start`].
pub fn pad_end(input: &str, width: usize, fill: &str) -> String {
    let mut padded = input.to_string();
    padded.push_str(&fill_to(rune_length(input), width, fill));
    padded
}
