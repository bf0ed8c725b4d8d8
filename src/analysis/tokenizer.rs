/// Splits `text` into whitespace-delimited word slices. Space (`0x20`) is
/// the sole separator — no other whitespace byte is recognized, and
/// tokenization never looks past byte boundaries (Non-goal: Unicode-aware
/// tokenization). Tokens are slices into `text`; nothing is copied.
///
/// Leading spaces are stripped; runs of spaces between tokens collapse;
/// an empty or all-space input yields an empty iterator.
pub fn split(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|tok| !tok.is_empty())
}

/// `true` iff every byte of `w` is `>= 0x20`. Applied to every token
/// produced during indexing and query parsing; a token that fails this
/// check aborts the enclosing operation with `ErrorKind::InvalidWord`.
pub fn is_valid_word(w: &str) -> bool {
    w.bytes().all(|b| b >= 0x20)
}
