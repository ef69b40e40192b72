//! zasm-lex - Lexical layers of the zasm front end.
//!
//! Three layers live here, bottom-up:
//!
//! 1. **Line extraction** ([`eol`]): split raw text into physical lines,
//!    classifying LF/CR/CRLF endings.
//! 2. **Logical line assembly** ([`logical_line`]): stitch physical lines
//!    continued in the continuation column into one logical statement,
//!    exposing per-segment region geometry and a bidirectional iterator
//!    over the code characters.
//! 3. **Lexing** ([`lexer`], [`token`], [`token_stream`]): a column-aware
//!    pull lexer producing a token vector with a hidden channel for the
//!    continuation and ignored regions, plus a filtered lookahead stream.

pub mod eol;
pub mod lexer;
pub mod logical_line;
pub mod token;
pub mod token_stream;

pub use eol::{extract_line, LineEnding};
pub use lexer::{decode_utf8, ord_char, ord_first_char, ord_symbol, CharSubstitution, Lexer, EOF_CHAR, SUBSTITUTE_CHAR};
pub use logical_line::{
    append_to_logical_line, extract_logical_line, finish_logical_line, IctlLayout, LogicalLine,
    LogicalLineIter, LogicalLineSegment, DEFAULT_ICTL, DEFAULT_ICTL_COPY, DEFAULT_ICTL_DBCS,
    DEFAULT_ICTL_DBCS_COPY,
};
pub use token::{Channel, Token, TokenKind};
pub use token_stream::TokenStream;
