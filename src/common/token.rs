/// The external token types of the grammar.
///
/// The discriminant of each member is its ordinal in the flag array the host
/// engine passes to a scan call. The grammar currently declares a single
/// external token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u16)]
pub enum TokenType {
    /// A plugin key, an identifier-like attribute name terminated either by a
    /// non-key character or by a double-underscore delimiter.
    PluginKey = 0,
}

impl TokenType {
    /// The number of external token types.
    pub const COUNT: usize = 1;

    /// Get the ordinal of the token type, i.e. its index in the flag array.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Get the token type with the given ordinal, if any.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(TokenType::PluginKey),
            _ => None,
        }
    }
}

/// A borrowed view over the host's per-ordinal flag array, indicating which
/// external token types are valid grammar alternatives at the current
/// position.
#[derive(Clone, Copy, Debug)]
pub struct TokenSet<'a> {
    /// The flags, indexed by token type ordinal.
    flags: &'a [bool],
}

impl<'a> TokenSet<'a> {
    /// Create a new token set over the given flags.
    pub fn new(flags: &'a [bool]) -> Self {
        Self { flags }
    }

    /// Check whether the given token type is a valid alternative.
    /// Ordinals outside the flag array read as false.
    #[inline]
    pub fn contains(&self, token: TokenType) -> bool {
        self.flags.get(token.ordinal()).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_round_trip() {
        assert_eq!(TokenType::from_ordinal(0), Some(TokenType::PluginKey));
        assert_eq!(TokenType::PluginKey.ordinal(), 0);
        assert_eq!(TokenType::from_ordinal(TokenType::COUNT), None);
    }

    #[test]
    fn test_token_set_contains() {
        assert!(TokenSet::new(&[true]).contains(TokenType::PluginKey));
        assert!(!TokenSet::new(&[false]).contains(TokenType::PluginKey));
        // A too short flag array reads as all false.
        assert!(!TokenSet::new(&[]).contains(TokenType::PluginKey));
    }
}
