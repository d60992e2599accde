/// A 1-based line/column location inside a source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Locates the byte offset `offset` inside `source`.
///
/// Walks the source from the start, so call it on error paths only.
/// `offset` must lie on a character boundary (offsets produced by
/// [`offset_of_remaining`] always do).
pub fn position_at(source: &str, offset: usize) -> Position {
    let consumed = &source[..offset.min(source.len())];
    let line = consumed.matches('\n').count() + 1;
    let column = match consumed.rfind('\n') {
        Some(newline) => consumed[newline + 1..].chars().count() + 1,
        None => consumed.chars().count() + 1,
    };
    Position { line, column }
}

/// Translates "this many characters were still unconsumed" into the byte
/// offset where consumption stopped.
pub fn offset_of_remaining(source: &str, remaining_chars: usize) -> usize {
    let total_chars = source.chars().count();
    let consumed_chars = total_chars.saturating_sub(remaining_chars);
    source
        .char_indices()
        .nth(consumed_chars)
        .map(|(index, _)| index)
        .unwrap_or(source.len())
}
