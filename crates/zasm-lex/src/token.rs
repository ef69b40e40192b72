//! Token model.

/// Kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Ordinary symbol: up to 63 characters of `[A-Za-z0-9$_#@]` starting
    /// with a non-digit.
    OrdSymbol,
    /// All-digit run.
    Num,
    /// Any other word (longer ordinary runs, mixed runs).
    Identifier,
    Space,
    Comma,
    LPar,
    RPar,
    Dot,
    Asterisk,
    Slash,
    Minus,
    Plus,
    Equals,
    Lt,
    Gt,
    Apostrophe,
    /// `'` acting as the data-attribute sigil (after `L S I T O K N D`).
    Attr,
    Ampersand,
    Vertical,
    /// The continuation column character (hidden channel).
    Continuation,
    /// Ignored columns (hidden channel).
    Ignored,
    /// The `*PROCESS` statement marker.
    Process,
    Eof,
}

/// Token channel; hidden tokens are preserved for range recovery but
/// filtered from the parser's view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Default,
    Hidden,
}

/// One lexical token.
///
/// `start`/`stop` index into the lexer's code-point buffer; the text of a
/// token is always recoverable as `lexer.text(start, stop)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub channel: Channel,
    /// Start index in the lexer's code-point buffer (inclusive).
    pub start: usize,
    /// Stop index in the lexer's code-point buffer (exclusive).
    pub stop: usize,
    /// Line of the token start.
    pub line: usize,
    /// Code-point column of the token start.
    pub column: usize,
    /// UTF-16 column of the token start.
    pub column_utf16: usize,
    /// UTF-16 column just past the token end (on the token's last line).
    pub end_column_utf16: usize,
    /// Creation-order identity of the token.
    pub index: usize,
}

impl Token {
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}
