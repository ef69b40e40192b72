//! Property tests for the lexical layers.

use proptest::prelude::*;
use zasm_lex::eol::{extract_line, LineEnding};
use zasm_lex::lexer::Lexer;
use zasm_lex::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};
use zasm_lex::token::TokenKind;
use zasm_util::span::Position;

fn ending_str(e: LineEnding) -> &'static str {
    match e {
        LineEnding::None => "",
        LineEnding::Lf => "\n",
        LineEnding::Cr => "\r",
        LineEnding::Crlf => "\r\n",
    }
}

proptest! {
    #[test]
    fn extract_line_roundtrip(lines in proptest::collection::vec("[ -~]{0,100}", 0..8)) {
        let joined = lines.join("\n");
        let mut rest = joined.as_str();
        let mut rebuilt = String::new();
        while !rest.is_empty() {
            let (line, eol) = extract_line(&mut rest);
            rebuilt.push_str(line);
            rebuilt.push_str(ending_str(eol));
        }
        prop_assert_eq!(rebuilt, joined);
    }

    #[test]
    fn logical_line_iterator_is_reversible(text in "[ -~]{0,200}") {
        let mut input = text.as_str();
        let mut line = LogicalLine::default();
        if !extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL) {
            return Ok(());
        }

        let mut it = line.code_iter();
        let start = it;
        let forward: Vec<char> = {
            let mut v = Vec::new();
            while let Some(c) = it.next() {
                v.push(c);
            }
            v
        };
        let mut backward = Vec::new();
        while let Some(c) = it.prev() {
            backward.push(c);
        }
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        prop_assert!(it == start);
    }

    #[test]
    fn tokens_are_ascending_and_sized(text in "[ -~]{0,120}") {
        let mut lexer = Lexer::new();
        lexer.reset(&text, false, Position::default(), 0, false);
        lexer.lex_all();

        let mut prev_stop = 0usize;
        for t in lexer.tokens() {
            prop_assert!(t.start >= prev_stop);
            prop_assert!(t.stop >= t.start);
            if t.kind != TokenKind::Eof {
                prop_assert_eq!(lexer.text(t.start, t.stop).chars().count(), t.stop - t.start);
            }
            prev_stop = t.stop;
        }
    }
}
