//! This module contains the lookahead cursor abstraction.
//! The cursor is owned by the host engine and borrowed by the scanner for the
//! duration of a single scan call. The scanner never retains it.

/// A forward-only view over the remaining input characters.
///
/// `lookahead` peeks without consuming, `advance` consumes, and `mark_end`
/// commits the exclusive end offset of the token about to be reported. The
/// last `mark_end` before a successful scan wins; anything consumed past it
/// is lookahead only and is discarded by the host.
pub trait Cursor {
    /// Get the next unconsumed character, or `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead character and load the next one.
    /// The flag tells the host whether the consumed character counts as
    /// whitespace for tree boundary purposes. This scanner always passes
    /// `false`.
    fn advance(&mut self, is_whitespace: bool);

    /// Record the current consumption point as the end boundary of the token
    /// being produced.
    fn mark_end(&mut self);
}

/// An in-memory [`Cursor`] over a string slice.
///
/// The host engine provides its own cursor at the C boundary; this one serves
/// Rust-side consumers and tests. It is `Clone`, so a scan attempt can be
/// replayed from the same position.
#[derive(Clone, Debug)]
pub struct StrCursor<'h> {
    chars: std::str::CharIndices<'h>,
    lookahead: Option<(usize, char)>,
    len: usize,
    end: usize,
}

impl<'h> StrCursor<'h> {
    /// Create a new cursor positioned at the start of the haystack.
    pub fn new(haystack: &'h str) -> Self {
        let mut chars = haystack.char_indices();
        let lookahead = chars.next();
        StrCursor {
            chars,
            lookahead,
            len: haystack.len(),
            end: 0,
        }
    }

    /// Get the byte offset of the next unconsumed character.
    /// At end of input this is the length of the haystack.
    pub fn pos(&self) -> usize {
        self.lookahead.map_or(self.len, |(i, _)| i)
    }

    /// Get the end boundary committed by the last `mark_end` call.
    pub fn marked_end(&self) -> usize {
        self.end
    }
}

impl Cursor for StrCursor<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.lookahead.map(|(_, c)| c)
    }

    #[inline]
    fn advance(&mut self, _is_whitespace: bool) {
        self.lookahead = self.chars.next();
    }

    #[inline]
    fn mark_end(&mut self) {
        self.end = self.pos();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_cursor_consumption() {
        let mut cursor = StrCursor::new("ab");
        assert_eq!(cursor.lookahead(), Some('a'));
        assert_eq!(cursor.pos(), 0);
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), Some('b'));
        assert_eq!(cursor.pos(), 1);
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), None);
        assert_eq!(cursor.pos(), 2);
        // Advancing past the end stays at the end.
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), None);
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_str_cursor_mark_end_last_call_wins() {
        let mut cursor = StrCursor::new("abc");
        assert_eq!(cursor.marked_end(), 0);
        cursor.advance(false);
        cursor.mark_end();
        assert_eq!(cursor.marked_end(), 1);
        cursor.advance(false);
        cursor.mark_end();
        assert_eq!(cursor.marked_end(), 2);
    }

    #[test]
    fn test_str_cursor_reports_byte_offsets() {
        // 'é' occupies two bytes, so the offsets are byte offsets, not
        // character counts.
        let mut cursor = StrCursor::new("aéb");
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), Some('é'));
        assert_eq!(cursor.pos(), 1);
        cursor.advance(false);
        assert_eq!(cursor.lookahead(), Some('b'));
        assert_eq!(cursor.pos(), 3);
    }
}
