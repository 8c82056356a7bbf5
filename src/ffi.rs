//! This module contains the fixed C plugin boundary of the scanner.
//!
//! The host parsing engine locates the external scanner through six symbols
//! whose names and signatures are part of its plugin convention and must be
//! preserved bit-for-bit. The logic itself stays in the safe
//! [`PluginKeyScanner`]; this module only adapts the host's lexer handle to
//! the [`Cursor`] seam and manages the opaque instance handle.
//!
//! The grammar description entry point (`tree_sitter_datastar`) is exported
//! by the generated parser object this library is linked next to, not by the
//! scanner.

use std::os::raw::{c_char, c_void};
use std::slice;

use log::trace;

use crate::{Cursor, PluginKeyScanner, TokenSet, TokenType};

/// The host engine's lexer handle, the C counterpart of [`Cursor`].
///
/// Field order and types mirror the host's definition exactly; the struct is
/// always allocated and owned by the host and only ever borrowed here for
/// the duration of one scan call.
#[repr(C)]
pub struct Lexer {
    /// The next unconsumed code point, or `0` at end of input.
    pub lookahead: i32,
    /// Out-parameter naming the recognized token type on a successful scan.
    pub result_symbol: u16,
    /// Consume the lookahead; the flag marks it as whitespace-equivalent.
    pub advance: unsafe extern "C" fn(lexer: *mut Lexer, skip: bool),
    /// Record the current consumption point as the token end boundary.
    pub mark_end: unsafe extern "C" fn(lexer: *mut Lexer),
    /// Get the column of the current position. Unused by this scanner.
    pub get_column: unsafe extern "C" fn(lexer: *mut Lexer) -> u32,
    /// Check whether the position starts an included range. Unused here.
    pub is_at_included_range_start: unsafe extern "C" fn(lexer: *const Lexer) -> bool,
    /// Check whether the lexer is at the end of input.
    pub eof: unsafe extern "C" fn(lexer: *const Lexer) -> bool,
    /// Host-side debug logging hook. Variadic in the C definition and never
    /// invoked from this side of the boundary.
    pub log: Option<unsafe extern "C" fn(lexer: *const Lexer, fmt: *const c_char)>,
}

/// A [`Cursor`] borrowing the host's lexer handle for one scan call.
struct LexerCursor {
    lexer: *mut Lexer,
}

impl LexerCursor {
    /// Create a cursor over the given lexer handle.
    ///
    /// # Safety
    /// `lexer` must point to a live host lexer and stay exclusively borrowed
    /// for the lifetime of the cursor.
    unsafe fn new(lexer: *mut Lexer) -> Self {
        LexerCursor { lexer }
    }
}

impl Cursor for LexerCursor {
    fn lookahead(&self) -> Option<char> {
        // The eof callback distinguishes end of input from a NUL byte in the
        // input, which also shows up as a `0` lookahead.
        unsafe {
            if ((*self.lexer).eof)(self.lexer) {
                return None;
            }
            char::from_u32((*self.lexer).lookahead as u32)
        }
    }

    fn advance(&mut self, is_whitespace: bool) {
        unsafe { ((*self.lexer).advance)(self.lexer, is_whitespace) }
    }

    fn mark_end(&mut self) {
        unsafe { ((*self.lexer).mark_end)(self.lexer) }
    }
}

/// Create a scanner instance and return it as an opaque handle.
#[no_mangle]
pub extern "C" fn tree_sitter_datastar_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(PluginKeyScanner::new())) as *mut c_void
}

/// Release a scanner instance created by the create hook.
///
/// # Safety
/// `payload` must be a handle returned by
/// [`tree_sitter_datastar_external_scanner_create`] that has not been
/// destroyed yet, or null.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_datastar_external_scanner_destroy(payload: *mut c_void) {
    if !payload.is_null() {
        drop(Box::from_raw(payload as *mut PluginKeyScanner));
    }
}

/// Clear any accumulated scanner state. The scanner is stateless, so this is
/// a no-op.
#[no_mangle]
pub extern "C" fn tree_sitter_datastar_external_scanner_reset(_payload: *mut c_void) {}

/// Write the scanner state into the host's snapshot buffer and return the
/// number of bytes written, which is always zero.
///
/// # Safety
/// `payload` must be a live handle from the create hook.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_datastar_external_scanner_serialize(
    payload: *mut c_void,
    _buffer: *mut c_char,
) -> u32 {
    let scanner = &*(payload as *const PluginKeyScanner);
    // The snapshot of a stateless scanner cannot fail or fill any buffer.
    match scanner.snapshot(&mut []) {
        Ok(written) => written as u32,
        Err(_) => 0,
    }
}

/// Restore the scanner state from a snapshot. Only the empty snapshot is
/// valid; anything else is discarded.
///
/// # Safety
/// `payload` must be a live handle from the create hook, and `buffer` must
/// be valid for reads of `length` bytes when `length` is non-zero.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_datastar_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    let scanner = &mut *(payload as *mut PluginKeyScanner);
    let snapshot = if length == 0 || buffer.is_null() {
        &[]
    } else {
        slice::from_raw_parts(buffer as *const u8, length as usize)
    };
    if let Err(e) = scanner.restore(snapshot) {
        trace!("discarding snapshot: {}", e);
    }
}

/// Decide whether one of the requested external tokens starts at the lexer
/// position. On success, sets `result_symbol` on the lexer and returns
/// `true` with the token's end boundary committed through `mark_end`.
///
/// # Safety
/// `payload` must be a live handle from the create hook, `lexer` must point
/// to the host's lexer for the current scan, and `valid_symbols` must be
/// valid for reads of one flag per external token type.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_datastar_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut Lexer,
    valid_symbols: *const bool,
) -> bool {
    let scanner = &*(payload as *const PluginKeyScanner);
    let flags = slice::from_raw_parts(valid_symbols, TokenType::COUNT);
    let mut cursor = LexerCursor::new(lexer);
    match scanner.scan(&mut cursor, TokenSet::new(flags)) {
        Some(token) => {
            (*lexer).result_symbol = token.ordinal() as u16;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A host lexer stand-in. The embedded `Lexer` is the first field, so a
    // `*mut Lexer` handed to the callbacks can be cast back to the whole
    // harness.
    #[repr(C)]
    struct FakeLexer {
        lexer: Lexer,
        input: Vec<char>,
        pos: usize,
        marked_end: usize,
    }

    unsafe extern "C" fn fake_advance(lexer: *mut Lexer, _skip: bool) {
        let fake = lexer as *mut FakeLexer;
        if (*fake).pos < (*fake).input.len() {
            (*fake).pos += 1;
        }
        (*fake).lexer.lookahead = (&(*fake).input).get((*fake).pos).map_or(0, |c| *c as i32);
    }

    unsafe extern "C" fn fake_mark_end(lexer: *mut Lexer) {
        let fake = lexer as *mut FakeLexer;
        (*fake).marked_end = (*fake).pos;
    }

    unsafe extern "C" fn fake_get_column(_lexer: *mut Lexer) -> u32 {
        0
    }

    unsafe extern "C" fn fake_is_at_included_range_start(_lexer: *const Lexer) -> bool {
        false
    }

    unsafe extern "C" fn fake_eof(lexer: *const Lexer) -> bool {
        let fake = lexer as *const FakeLexer;
        (*fake).pos >= (*fake).input.len()
    }

    fn new_fake_lexer(input: &str) -> *mut FakeLexer {
        let input: Vec<char> = input.chars().collect();
        let lookahead = input.first().map_or(0, |c| *c as i32);
        Box::into_raw(Box::new(FakeLexer {
            lexer: Lexer {
                lookahead,
                result_symbol: u16::MAX,
                advance: fake_advance,
                mark_end: fake_mark_end,
                get_column: fake_get_column,
                is_at_included_range_start: fake_is_at_included_range_start,
                eof: fake_eof,
                log: None,
            },
            input,
            pos: 0,
            marked_end: 0,
        }))
    }

    // Runs one scan call through the exported C symbols and returns the
    // result together with the harness for inspection.
    fn scan_through_ffi(input: &str, valid: &[bool]) -> (bool, Box<FakeLexer>) {
        let payload = tree_sitter_datastar_external_scanner_create();
        let raw = new_fake_lexer(input);
        let result = unsafe {
            tree_sitter_datastar_external_scanner_scan(
                payload,
                raw as *mut Lexer,
                valid.as_ptr(),
            )
        };
        let fake = unsafe { Box::from_raw(raw) };
        unsafe { tree_sitter_datastar_external_scanner_destroy(payload) };
        (result, fake)
    }

    #[test]
    fn test_scan_stops_before_double_underscore() {
        let (result, fake) = scan_through_ffi("foo__bar", &[true]);
        assert!(result);
        assert_eq!(fake.lexer.result_symbol, TokenType::PluginKey.ordinal() as u16);
        // End boundary in characters: right after "foo".
        assert_eq!(fake.marked_end, 3);
    }

    #[test]
    fn test_scan_runs_to_end_of_input() {
        let (result, fake) = scan_through_ffi("abc", &[true]);
        assert!(result);
        assert_eq!(fake.marked_end, 3);
    }

    #[test]
    fn test_scan_defers_on_single_underscore() {
        let (result, fake) = scan_through_ffi("foo_bar ", &[true]);
        assert!(!result);
        // result_symbol stays untouched on failure.
        assert_eq!(fake.lexer.result_symbol, u16::MAX);
    }

    #[test]
    fn test_scan_respects_valid_symbols() {
        let (result, fake) = scan_through_ffi("foo__bar", &[false]);
        assert!(!result);
        assert_eq!(fake.pos, 0);
    }

    #[test]
    fn test_lifecycle_hooks_round_trip() {
        let payload = tree_sitter_datastar_external_scanner_create();
        assert!(!payload.is_null());
        tree_sitter_datastar_external_scanner_reset(payload);
        let mut buffer = [0 as c_char; 8];
        let written = unsafe {
            tree_sitter_datastar_external_scanner_serialize(payload, buffer.as_mut_ptr())
        };
        assert_eq!(written, 0);
        unsafe {
            tree_sitter_datastar_external_scanner_deserialize(payload, buffer.as_ptr(), written)
        };
        unsafe { tree_sitter_datastar_external_scanner_destroy(payload) };
    }
}
