//! Filtered view over the lexer's token vector.
//!
//! Hidden-channel tokens (`Ignored`, `Continuation`) stay in the vector for
//! range recovery but are skipped by the stream. Continuation tokens can be
//! made visible temporarily, which the operand grammars use to detect line
//! boundaries inside an operand list.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// A cursor over the visible tokens of a [`Lexer`].
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index: usize,
    enabled_cont: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(lexer: &'a Lexer) -> Self {
        Self {
            tokens: lexer.tokens(),
            index: 0,
            enabled_cont: false,
        }
    }

    /// Make `Continuation` tokens visible.
    pub fn enable_continuation(&mut self) {
        self.enabled_cont = true;
    }

    /// Filter `Continuation` tokens from the stream again.
    pub fn disable_continuation(&mut self) {
        self.enabled_cont = false;
    }

    fn is_visible(&self, token: &Token) -> bool {
        !token.is_hidden() || (self.enabled_cont && token.kind == TokenKind::Continuation)
    }

    fn next_visible(&self, mut i: usize) -> usize {
        while i < self.tokens.len() && !self.is_visible(&self.tokens[i]) {
            i += 1;
        }
        i
    }

    /// Lookahead: the `k`-th visible token from the current position
    /// (`k == 1` is the current token).
    pub fn lt(&self, k: usize) -> Option<&'a Token> {
        debug_assert!(k >= 1);
        let mut i = self.next_visible(self.index);
        for _ in 1..k {
            if i >= self.tokens.len() {
                return None;
            }
            i = self.next_visible(i + 1);
        }
        self.tokens.get(i)
    }

    /// Kind of the `k`-th visible token; `Eof` beyond the end.
    pub fn la(&self, k: usize) -> TokenKind {
        self.lt(k).map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Advance past the current visible token and return it.
    pub fn consume(&mut self) -> Option<&'a Token> {
        let i = self.next_visible(self.index);
        let token = self.tokens.get(i)?;
        self.index = i + 1;
        Some(token)
    }

    /// Raw index of the current visible token in the underlying vector.
    pub fn current_index(&self) -> usize {
        self.next_visible(self.index)
    }

    /// All tokens, including hidden ones.
    pub fn all(&self) -> &'a [Token] {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zasm_util::span::Position;

    fn lexer_for(text: &str) -> Lexer {
        let mut lexer = Lexer::new();
        lexer.reset(text, false, Position::default(), 0, false);
        lexer.lex_all();
        lexer
    }

    #[test]
    fn test_lookahead_skips_nothing_on_plain_text() {
        let lexer = lexer_for("A B");
        let stream = TokenStream::new(&lexer);
        assert_eq!(stream.la(1), TokenKind::OrdSymbol);
        assert_eq!(stream.la(2), TokenKind::Space);
        assert_eq!(stream.la(3), TokenKind::OrdSymbol);
        assert_eq!(stream.la(4), TokenKind::Eof);
    }

    #[test]
    fn test_consume_advances() {
        let lexer = lexer_for("A,B");
        let mut stream = TokenStream::new(&lexer);
        assert_eq!(stream.consume().unwrap().kind, TokenKind::OrdSymbol);
        assert_eq!(stream.consume().unwrap().kind, TokenKind::Comma);
        assert_eq!(stream.la(1), TokenKind::OrdSymbol);
    }

    #[test]
    fn test_hidden_tokens_are_filtered() {
        use crate::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};

        let text = format!("{:<71}X\n               B", "A");
        let mut input = text.as_str();
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        let mut lexer = Lexer::new();
        lexer.reset_from_logical_line(&line, Position::default(), 0, false);
        lexer.lex_all();

        let mut stream = TokenStream::new(&lexer);
        let mut visible = Vec::new();
        while let Some(t) = stream.consume() {
            visible.push(t.kind);
        }
        assert!(!visible.contains(&TokenKind::Continuation));
        assert!(!visible.contains(&TokenKind::Ignored));

        let mut stream = TokenStream::new(&lexer);
        stream.enable_continuation();
        let mut visible = Vec::new();
        while let Some(t) = stream.consume() {
            visible.push(t.kind);
        }
        assert!(visible.contains(&TokenKind::Continuation));
        assert!(!visible.contains(&TokenKind::Ignored));
    }
}
