//! Post-hoc classification of statement syntax errors.
//!
//! When a statement fails to parse, a single scan over its tokens picks
//! the most specific diagnostic: odd apostrophes, parenthesis imbalance in
//! either direction, parenthesis-only operands, misplaced signs, a lone
//! label, and finally the generic unexpected-token error.

use zasm_lex::{Lexer, TokenKind};
use zasm_util::diagnostic::Diagnostic;
use zasm_util::span::{Position, Range};

fn is_comparative_sign(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Lt | TokenKind::Gt | TokenKind::Equals)
}

fn is_sign(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Asterisk | TokenKind::Minus | TokenKind::Plus | TokenKind::Slash
    ) || is_comparative_sign(kind)
}

fn can_follow_sign(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::OrdSymbol
            | TokenKind::Num
            | TokenKind::Ampersand
            | TokenKind::LPar
            | TokenKind::Continuation
    )
}

fn can_be_before_sign(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier
            | TokenKind::OrdSymbol
            | TokenKind::Num
            | TokenKind::Ampersand
            | TokenKind::RPar
            | TokenKind::Continuation
    )
}

fn is_attribute_consuming(text: &str) -> bool {
    let mut chars = text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    matches!(c.to_ascii_uppercase(), 'O' | 'S' | 'I' | 'L' | 'T')
}

fn can_consume(text: &str) -> bool {
    match text.chars().next() {
        Some(c) => c == '=' || c.is_ascii_alphabetic(),
        None => false,
    }
}

/// Classify the tokens of a failed statement into one specific diagnostic.
///
/// `start_index` is the first token of the failing region; the scan runs
/// to the end of the token vector. `diag_pos` anchors the diagnostic.
pub fn classify_syntax_error(lexer: &Lexer, start_index: usize, diag_pos: Position) -> Diagnostic {
    let tokens = lexer.tokens();
    let mut start = start_index.min(tokens.len());

    // skip leading spaces
    while start < tokens.len() && tokens[start].kind == TokenKind::Space {
        start += 1;
    }

    let mut parenthesis: i32 = 0;
    let mut apostrophes = 0usize;
    let mut right_prec = false;
    let mut only_par = true;
    let mut sign_followed = true;
    let mut sign_preceding = true;
    let mut unexpected_sign = false;
    let mut ampersand_followed = true;

    for i in start..tokens.len() {
        let kind = tokens[i].kind;
        if kind == TokenKind::Eof {
            break;
        }
        match kind {
            TokenKind::LPar => parenthesis -= 1,
            TokenKind::RPar => parenthesis += 1,
            _ => {
                only_par = false;
                let next_kind = tokens.get(i + 1).map(|t| t.kind);
                if (is_sign(kind) || kind == TokenKind::Ampersand)
                    && !next_kind.is_some_and(can_follow_sign)
                {
                    if is_sign(kind) {
                        sign_followed = false;
                    }
                    if kind == TokenKind::Ampersand {
                        ampersand_followed = false;
                    }
                }
                if is_sign(kind)
                    && kind != TokenKind::Plus
                    && kind != TokenKind::Minus
                    && (i == start || !can_be_before_sign(tokens[i - 1].kind))
                {
                    sign_preceding = false;
                }
                if is_comparative_sign(kind) {
                    unexpected_sign = true;
                }
                if kind == TokenKind::Apostrophe {
                    apostrophes += 1;
                }
                if kind == TokenKind::Attr {
                    let prev_consuming = i
                        .checked_sub(1)
                        .and_then(|p| tokens.get(p))
                        .is_some_and(|t| is_attribute_consuming(&lexer.token_text(t)));
                    let next_consumable = tokens
                        .get(i + 1)
                        .is_some_and(|t| can_consume(&lexer.token_text(t)));
                    if !prev_consuming || !next_consumable {
                        apostrophes += 1;
                    }
                }
            }
        }
        if parenthesis > 0 {
            right_prec = true;
        }
    }

    let r = Range::point(diag_pos);

    if apostrophes % 2 == 1 {
        Diagnostic::s0005(r)
    } else if right_prec {
        Diagnostic::s0012(r)
    } else if parenthesis < 0 {
        Diagnostic::s0011(r)
    } else if only_par {
        Diagnostic::s0010(r)
    } else if !sign_followed {
        Diagnostic::s0009(r)
    } else if !ampersand_followed {
        Diagnostic::s0008(r)
    } else if !sign_preceding {
        Diagnostic::s0007(r)
    } else if unexpected_sign {
        Diagnostic::s0006(r)
    } else if tokens.get(start).is_some_and(|t| t.column == 0) {
        Diagnostic::s0004(r)
    } else {
        Diagnostic::s0002(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> &'static str {
        let mut lexer = Lexer::new();
        lexer.reset(text, false, Position::default(), 0, false);
        lexer.lex_all();
        classify_syntax_error(&lexer, 0, Position::default()).code
    }

    #[test]
    fn test_odd_apostrophes() {
        assert_eq!(classify("  'ABC"), "S0005");
    }

    #[test]
    fn test_right_without_left() {
        assert_eq!(classify("  A)B"), "S0012");
    }

    #[test]
    fn test_left_without_right() {
        assert_eq!(classify("  (A"), "S0011");
    }

    #[test]
    fn test_parenthesis_only() {
        assert_eq!(classify("(())"), "S0010");
    }

    #[test]
    fn test_sign_not_followed() {
        assert_eq!(classify("A+ "), "S0009");
    }

    #[test]
    fn test_ampersand_not_followed() {
        assert_eq!(classify("A& "), "S0008");
    }

    #[test]
    fn test_expression_starting_with_sign() {
        assert_eq!(classify("*A"), "S0007");
    }

    #[test]
    fn test_unexpected_comparative() {
        assert_eq!(classify("A<B"), "S0006");
    }

    #[test]
    fn test_lone_label() {
        assert_eq!(classify("LABEL"), "S0004");
    }

    #[test]
    fn test_generic_fallback() {
        let mut lexer = Lexer::new();
        lexer.reset("  A B", false, Position::default(), 0, false);
        lexer.lex_all();
        assert_eq!(
            classify_syntax_error(&lexer, 2, Position::default()).code,
            "S0002"
        );
    }
}
