//! This module contains the recognizer for the `plugin_key` token.
//! The grammar's declarative rules cannot express its one irregularity: a key
//! stops before a double-underscore delimiter, while a single underscore
//! followed by anything else makes the whole attempt fail so that the
//! grammar's own tokenization rules get to decide what the input is.

use log::trace;

use crate::{Cursor, Match, Result, ScannerError, Span, StrCursor, TokenSet, TokenType};

/// Check whether the character belongs to the plugin key character class.
/// Underscore is deliberately not a key character; it is handled by the
/// delimiter logic of the recognizer.
#[inline]
pub(crate) fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// The states of the plugin key recognizer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    /// No key character consumed yet.
    Start,
    /// Consuming key characters.
    InKey,
    /// A single `_` consumed, with the candidate end boundary marked right
    /// before it. The next character decides between delimiter and deferral.
    PendingUnderscore,
}

/// The action the recognizer takes after inspecting the lookahead in a state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Transition {
    /// Consume the lookahead and continue in the given state.
    Consume(ScanState),
    /// Mark the candidate end boundary, then consume the lookahead and
    /// continue in the given state.
    MarkEndAndConsume(ScanState),
    /// Commit the token with the end boundary at the current consumption
    /// point.
    AcceptHere,
    /// Commit the token with the previously marked end boundary.
    AcceptMarked,
    /// No plugin key at this position.
    Reject,
}

/// The complete rule table of the recognizer.
/// `None` stands for end of input.
fn transition(state: ScanState, lookahead: Option<char>) -> Transition {
    match (state, lookahead) {
        (ScanState::Start, Some(c)) if is_key_char(c) => Transition::Consume(ScanState::InKey),
        (ScanState::Start, _) => Transition::Reject,
        (ScanState::InKey, Some(c)) if is_key_char(c) => Transition::Consume(ScanState::InKey),
        (ScanState::InKey, Some('_')) => {
            Transition::MarkEndAndConsume(ScanState::PendingUnderscore)
        }
        // A non-key character or end of input terminates the key naturally.
        (ScanState::InKey, _) => Transition::AcceptHere,
        // The second underscore of the `__` delimiter. The end boundary was
        // already fixed before the first one, so the delimiter stays outside
        // the token.
        (ScanState::PendingUnderscore, Some('_')) => Transition::AcceptMarked,
        // A single interior underscore. Deferred to the grammar's own
        // tokenization rules rather than claimed or rejected as invalid here.
        (ScanState::PendingUnderscore, _) => Transition::Reject,
    }
}

/// The external scanner for the `plugin_key` token.
///
/// The scanner carries no state between calls. It is created once per parse
/// session, and its snapshots across incremental re-parse boundaries are
/// always empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct PluginKeyScanner;

impl PluginKeyScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        PluginKeyScanner
    }

    /// Decide whether a `plugin_key` token starts at the cursor position.
    ///
    /// Returns the recognized token type after committing its end boundary
    /// through the cursor's `mark_end`, or `None` if no token is recognized
    /// here. When `valid` does not contain [`TokenType::PluginKey`] the call
    /// returns `None` without consuming any input, so the grammar can try
    /// its other alternatives.
    ///
    /// On a `None` return the cursor may have consumed characters past the
    /// last marked boundary; the host engine discards that lookahead.
    pub fn scan<C: Cursor>(&self, cursor: &mut C, valid: TokenSet<'_>) -> Option<TokenType> {
        if !valid.contains(TokenType::PluginKey) {
            return None;
        }

        let mut state = ScanState::Start;
        loop {
            let lookahead = cursor.lookahead();
            let step = transition(state, lookahead);
            trace!("scan: {:?} x {:?} -> {:?}", state, lookahead, step);
            match step {
                Transition::Consume(next) => {
                    cursor.advance(false);
                    state = next;
                }
                Transition::MarkEndAndConsume(next) => {
                    cursor.mark_end();
                    cursor.advance(false);
                    state = next;
                }
                Transition::AcceptHere => {
                    cursor.mark_end();
                    return Some(TokenType::PluginKey);
                }
                Transition::AcceptMarked => return Some(TokenType::PluginKey),
                Transition::Reject => return None,
            }
        }
    }

    /// Run the scanner against the start of a string slice with all token
    /// types valid.
    ///
    /// Returns the recognized token and its span, or `None` if the haystack
    /// does not begin with a plugin key.
    pub fn find(&self, haystack: &str) -> Option<Match> {
        let valid = [true; TokenType::COUNT];
        let mut cursor = StrCursor::new(haystack);
        self.scan(&mut cursor, TokenSet::new(&valid))
            .map(|token| Match::new(token, Span::new(0, cursor.marked_end())))
    }

    /// Write the scanner state into the given snapshot buffer and return the
    /// number of bytes written. The scanner is stateless, so this is always
    /// zero.
    pub fn snapshot(&self, _buffer: &mut [u8]) -> Result<usize> {
        Ok(0)
    }

    /// Restore the scanner state from a snapshot taken by [`Self::snapshot`].
    /// Only the empty snapshot is valid.
    pub fn restore(&mut self, snapshot: &[u8]) -> Result<()> {
        if snapshot.is_empty() {
            Ok(())
        } else {
            Err(ScannerError::InvalidSnapshot {
                len: snapshot.len(),
            })
        }
    }
}
