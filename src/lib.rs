#![forbid(missing_docs)]
//! The `datastar_scanner` crate implements the external scanner for the
//! Datastar attribute grammar. The grammar declares a single external token,
//! `plugin_key`, whose lexical rule cannot be expressed declaratively: the
//! identifier must stop before a double-underscore (`__`) delimiter, while a
//! single underscore followed by anything else is not claimed by this scanner
//! at all.
//!
//! The recognition logic lives in [`PluginKeyScanner`] and works against any
//! [`Cursor`] implementation. The [`ffi`] module adapts it to the C plugin
//! boundary the host parsing engine expects.

/// Module with the shared value types of the scanner.
mod common;
pub use common::{Match, Span, TokenSet, TokenType};

/// Module with the lookahead cursor abstraction.
mod cursor;
pub use cursor::{Cursor, StrCursor};

/// Module with error definitions.
mod errors;
pub use errors::{Result, ScannerError};

/// Module with the plugin key recognizer.
mod scanner;
pub use scanner::PluginKeyScanner;

/// Module with the C plugin boundary of the scanner.
pub mod ffi;
