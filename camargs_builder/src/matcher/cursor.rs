/// Positional, lookahead based access over the raw Cli tokens.
///
/// The cursor starts on index `0` (conventionally the program name).
#[derive(Debug)]
pub(crate) struct TokenCursor<'t> {
    tokens: &'t [&'t str],
    index: usize,
}

impl<'t> TokenCursor<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Whether an unconsumed token follows the current one.
    pub(crate) fn has_next(&self) -> bool {
        self.index + 1 < self.tokens.len()
    }

    /// Move onto the next token.
    pub(crate) fn advance(&mut self) {
        // Never move past the end.
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    /// The token under the cursor, or `None` once past the end.
    pub(crate) fn current(&self) -> Option<&'t str> {
        self.tokens.get(self.index).copied()
    }

    /// The token following the current one, without advancing.
    pub(crate) fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.index + 1).copied()
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}
