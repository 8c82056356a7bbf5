use super::{Span, TokenType};

/// A recognized token in the haystack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    /// The recognized token type.
    token: TokenType,
    /// The underlying match span.
    span: Span,
}

impl Match {
    /// Create a new match.
    pub fn new(token: TokenType, span: Span) -> Self {
        Self { token, span }
    }

    /// Get the start of the match.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the recognized token type.
    pub fn token(&self) -> TokenType {
        self.token
    }
}
