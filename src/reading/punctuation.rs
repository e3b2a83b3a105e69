/// Characters stripped from the front of a token.
const OPENING: &[char] = &['(', '[', '{', '"', '“', '„', '«', '\'', '‘'];

/// Characters stripped from the back of a token.
const CLOSING: &[char] = &[
    '.', '!', '?', ';', ',', '-', '—', '–', ':', ')', ']', '}', '"', '“', '”', '„', '«', '»', '\'',
    '‘',
];

/// A token split into its word body and the punctuation clusters around it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Fragments<'a> {
    pub clean_word: &'a str,
    pub leading: &'a str,
    pub trailing: &'a str,
}

/// Strips the leading opening-punctuation run, then the trailing
/// closing-punctuation run from what remains.
///
/// Apostrophes inside a word are left alone; only boundary runs are taken.
pub fn extract_punctuation(token: &str) -> Fragments<'_> {
    let rest = token.trim_start_matches(OPENING);
    let leading = &token[..token.len() - rest.len()];

    let clean_word = rest.trim_end_matches(CLOSING);
    let trailing = &rest[clean_word.len()..];

    Fragments {
        clean_word,
        leading,
        trailing,
    }
}
