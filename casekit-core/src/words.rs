use crate::boundary::mark_boundaries;
use crate::classify::is_letter_or_digit;

/// Splits `input` into its words.
///
/// Boundaries are detected with [`mark_boundaries`], then every character
/// that is neither a letter nor a digit acts as a separator. Tokens keep the
/// case they had in `input` and are never empty.
pub fn words(input: &str) -> Vec<String> {
    let collapsed: String = mark_boundaries(input)
        .chars()
        .map(|c| if is_letter_or_digit(c) { c } else { ' ' })
        .collect();

    let tokens: Vec<String> = collapsed.split_whitespace().map(str::to_owned).collect();
    log::trace!("tokenized {:?} into {} words", input, tokens.len());
    tokens
}
