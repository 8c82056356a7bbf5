/// Module that provides a Match type
mod match_type;
pub use match_type::Match;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides the external token types and their flag set
mod token;
pub use token::{TokenSet, TokenType};
