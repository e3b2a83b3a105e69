/// ORP (Optimal Recognition Point) calculation
///
/// The fixation letter drifts from the start of a word toward its centre as
/// the word grows, but is capped for very long words so it never lands deep
/// in the tail:
/// - 1-2 char span → position 0
/// - 3 char span → position 1
/// - 4-8 char span → span / 3
/// - 9+ char span → span / 3 clamped to 2..=5
///
/// The span runs from the first to the last ASCII letter or digit, so
/// surrounding punctuation shifts the result but does not count toward the
/// length. Inner punctuation (apostrophes, hyphens) does count.
///
/// Returns a 0-based character index into `token`. Tokens with no ASCII
/// alphanumerics fall back to the midpoint of the whole token.
pub fn calculate_orp(token: &str) -> usize {
    let chars: Vec<char> = token.chars().collect();

    let start_idx = chars.iter().position(char::is_ascii_alphanumeric);
    let end_idx = chars.iter().rposition(char::is_ascii_alphanumeric);

    let (start_idx, end_idx) = match (start_idx, end_idx) {
        (Some(start), Some(end)) => (start, end),
        _ => return chars.len() / 2,
    };

    let clean_len = end_idx - start_idx + 1;
    let clean_orp = match clean_len {
        0..=2 => 0,
        3 => 1,
        4..=8 => clean_len / 3,
        _ => (clean_len / 3).clamp(2, 5),
    };

    start_idx + clean_orp
}
