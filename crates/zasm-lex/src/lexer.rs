//! The column-aware HLASM lexer.
//!
//! The lexer is a pull-based producer over a code-point buffer terminated
//! by a `'\0'` sentinel: each call to [`Lexer::more_tokens`] consumes
//! characters until one token is ready. It understands the column regime
//! directly — columns before `begin` and after `end` become hidden
//! `Ignored` tokens, a non-blank in the continuation column becomes a
//! hidden `Continuation` token followed by the skip to the resume column
//! of the next line.

use zasm_util::span::Position;

use crate::logical_line::LogicalLine;
use crate::token::{Channel, Token, TokenKind};

/// Sentinel terminating the lexer's input buffer.
pub const EOF_CHAR: char = '\0';

/// The substitute character standing in for malformed input bytes.
pub const SUBSTITUTE_CHAR: char = '\u{1A}';

/// Records whether substitute characters were introduced (server) or were
/// already present in the input (client).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharSubstitution {
    pub server: bool,
    pub client: bool,
}

impl CharSubstitution {
    #[inline]
    pub fn merge(&mut self, other: CharSubstitution) {
        self.server |= other.server;
        self.client |= other.client;
    }
}

/// Decode UTF-8 bytes into a string, replacing malformed sequences with
/// [`SUBSTITUTE_CHAR`] and reporting what was substituted.
pub fn decode_utf8(bytes: &[u8]) -> (String, CharSubstitution) {
    let mut out = String::with_capacity(bytes.len());
    let mut subs = CharSubstitution::default();
    let mut rest = bytes;

    while !rest.is_empty() {
        match std::str::from_utf8(rest) {
            Ok(s) => {
                if s.contains(SUBSTITUTE_CHAR) {
                    subs.client = true;
                }
                out.push_str(s);
                break;
            }
            Err(e) => {
                let valid = &rest[..e.valid_up_to()];
                // SAFETY-free: valid_up_to marks a UTF-8 boundary
                let s = std::str::from_utf8(valid).unwrap_or("");
                if s.contains(SUBSTITUTE_CHAR) {
                    subs.client = true;
                }
                out.push_str(s);
                out.push(SUBSTITUTE_CHAR);
                subs.server = true;
                let skip = e.valid_up_to() + e.error_len().unwrap_or(rest.len() - e.valid_up_to());
                rest = &rest[skip..];
            }
        }
    }

    (out, subs)
}

// character classification flags
const DIVIDER: u8 = 0b0000_0001;
const BLANK: u8 = 0b0000_0010;
const ENDLINE: u8 = 0b0000_0100;
const ORD: u8 = 0b0000_1000;
const FIRST_ORD: u8 = 0b0001_0000;
const DIGIT: u8 = 0b0010_0000;
const DATA_ATTR: u8 = 0b0100_0000;

const fn char_info_table() -> [u8; 256] {
    let mut t = [0u8; 256];

    let dividers = b"*.-+=<>,()'/&|";
    let mut i = 0;
    while i < dividers.len() {
        t[dividers[i] as usize] |= DIVIDER;
        i += 1;
    }
    t[b' ' as usize] |= BLANK;
    t[b'\r' as usize] |= ENDLINE;
    t[b'\n' as usize] |= ENDLINE;

    let ord = b"0123456789$_#@abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut i = 0;
    while i < ord.len() {
        t[ord[i] as usize] |= ORD;
        i += 1;
    }
    let first_ord = b"$_#@abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut i = 0;
    while i < first_ord.len() {
        t[first_ord[i] as usize] |= FIRST_ORD;
        i += 1;
    }
    let digits = b"0123456789";
    let mut i = 0;
    while i < digits.len() {
        t[digits[i] as usize] |= DIGIT;
        i += 1;
    }
    let attrs = b"OSILTNKDosiltnkd";
    let mut i = 0;
    while i < attrs.len() {
        t[attrs[i] as usize] |= DATA_ATTR;
        i += 1;
    }

    t
}

static CHAR_INFO: [u8; 256] = char_info_table();

#[inline]
fn get_char_info(c: char) -> u8 {
    if (c as u32) < 256 {
        CHAR_INFO[c as usize]
    } else {
        0
    }
}

/// Whether `c` may appear in an ordinary symbol.
#[inline]
pub fn ord_char(c: char) -> bool {
    get_char_info(c) & ORD != 0
}

/// Whether `c` may start an ordinary symbol.
#[inline]
pub fn ord_first_char(c: char) -> bool {
    get_char_info(c) & FIRST_ORD != 0
}

/// Whether `symbol` is a well-formed ordinary symbol (1-63 characters,
/// first not a digit).
pub fn ord_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if symbol.chars().count() > 63 || !ord_first_char(first) {
        return false;
    }
    chars.all(ord_char)
}

#[derive(Clone, Copy, Debug, Default)]
struct InputState {
    next: usize,
    line: usize,
    col: usize,
    col_utf16: usize,
}

/// The lexer.
pub struct Lexer {
    tokens: Vec<Token>,
    line_limits: Vec<usize>,
    input: Vec<char>,

    begin: usize,       // 0-based first code column
    end_default: usize, // 0-based continuation column
    end: usize,
    cont: usize, // 0-based resume column

    continuation_enabled: bool,
    unlimited_line: bool,
    double_byte_enabled: bool,
    process_allowed: bool,
    ictl: bool,

    creating_var_symbol: bool,
    creating_attr_ref: bool,

    state: InputState,
    token_start: InputState,
    last_line: InputState,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line_limits: Vec::new(),
            input: vec![EOF_CHAR],
            begin: 0,
            end_default: 71,
            end: 71,
            cont: 15,
            continuation_enabled: true,
            unlimited_line: false,
            double_byte_enabled: false,
            process_allowed: false,
            ictl: false,
            creating_var_symbol: false,
            creating_attr_ref: false,
            state: InputState::default(),
            token_start: InputState::default(),
            last_line: InputState::default(),
        }
    }

    fn reset_common(
        &mut self,
        unlimited_line: bool,
        file_offset: Position,
        logical_column: usize,
        process_allowed: bool,
    ) {
        self.tokens.clear();
        self.line_limits.clear();

        self.unlimited_line = unlimited_line;
        self.process_allowed = process_allowed;
        self.end = self.end_default;
        self.creating_var_symbol = false;
        self.creating_attr_ref = false;

        self.input.push(EOF_CHAR);
        self.state = InputState {
            next: 0,
            line: file_offset.line,
            col: logical_column,
            col_utf16: file_offset.column,
        };
        self.token_start = self.state;
        self.last_line = self.state;
    }

    /// Reset the lexer over raw text; line breaks in the text are honored.
    pub fn reset(
        &mut self,
        text: &str,
        unlimited_line: bool,
        file_offset: Position,
        logical_column: usize,
        process_allowed: bool,
    ) -> CharSubstitution {
        self.input.clear();
        let mut subs = CharSubstitution::default();
        for c in text.chars() {
            if c == SUBSTITUTE_CHAR {
                subs.client = true;
            }
            self.input.push(c);
        }
        self.reset_common(unlimited_line, file_offset, logical_column, process_allowed);
        subs
    }

    /// Reset the lexer over a logical line.
    ///
    /// Segments are rejoined: the prefix of every continuation segment is
    /// replaced by blanks (`X` when the segment carries a continuation
    /// error), the code through ignore regions are kept verbatim and the
    /// inner line endings are preserved so column accounting matches the
    /// original file.
    pub fn reset_from_logical_line(
        &mut self,
        line: &LogicalLine<'_>,
        file_offset: Position,
        logical_column: usize,
        process_allowed: bool,
    ) -> CharSubstitution {
        use crate::eol::LineEnding;

        let mut subs = CharSubstitution::default();
        self.input.clear();

        for (i, segment) in line.segments.iter().enumerate() {
            if i > 0 {
                let prefix_len = segment.line[..segment.code_off].chars().count();
                let fill = if segment.continuation_error { 'X' } else { ' ' };
                self.input.extend(std::iter::repeat(fill).take(prefix_len));
            }
            for c in segment.line[segment.code_off..].chars() {
                if c == SUBSTITUTE_CHAR {
                    subs.client = true;
                }
                self.input.push(c);
            }
            if i + 1 < line.segments.len() {
                match segment.eol {
                    LineEnding::None => {}
                    LineEnding::Lf => self.input.push('\n'),
                    LineEnding::Cr => self.input.push('\r'),
                    LineEnding::Crlf => {
                        self.input.push('\r');
                        self.input.push('\n');
                    }
                }
            }
        }

        self.reset_common(false, file_offset, logical_column, process_allowed);
        subs
    }

    // --- column regime ---

    /// Set the first code column (1-based, 1-40).
    pub fn set_begin(&mut self, begin: usize) -> bool {
        if (1..=40).contains(&begin) {
            self.begin = begin - 1;
            return true;
        }
        false
    }

    /// Set the last code column (1-based, 41-80); 80 disables continuation.
    pub fn set_end(&mut self, end: usize) -> bool {
        if end == 80 {
            self.continuation_enabled = false;
        }
        if (41..=80).contains(&end) {
            self.end_default = end;
            self.end = end;
            return true;
        }
        false
    }

    /// Set the continuation resume column (1-based, 2-40, above begin).
    pub fn set_continue(&mut self, cont: usize) -> bool {
        if (2..=40).contains(&cont) && self.begin < cont - 1 {
            self.cont = cont - 1;
            return true;
        }
        false
    }

    pub fn set_continuation_enabled(&mut self, enabled: bool) {
        self.continuation_enabled = enabled;
    }

    pub fn set_double_byte_enabled(&mut self, enabled: bool) {
        self.double_byte_enabled = enabled;
    }

    pub fn set_ictl(&mut self) {
        self.ictl = true;
    }

    /// 0-based continuation resume column.
    #[inline]
    pub fn continuation_column(&self) -> usize {
        self.cont
    }

    // --- token access ---

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get_token(&self, i: usize) -> Option<&Token> {
        self.tokens.get(i)
    }

    /// Textual content of the buffer slice `[start, stop)`.
    pub fn text(&self, start: usize, stop: usize) -> String {
        if stop > self.input.len().saturating_sub(1) {
            return String::new();
        }
        self.input[start..stop].iter().collect()
    }

    /// Text of one token.
    pub fn token_text(&self, token: &Token) -> String {
        self.text(token.start, token.stop)
    }

    /// UTF-16 columns of every continuation point seen so far.
    pub fn line_limits(&self) -> &[usize] {
        &self.line_limits
    }

    /// The code-point buffer (without the sentinel).
    pub fn input(&self) -> &[char] {
        &self.input[..self.input.len() - 1]
    }

    /// Run the lexer to completion.
    pub fn lex_all(&mut self) {
        while self.more_tokens() {}
    }

    // --- core ---

    #[inline]
    fn peek(&self, k: usize) -> char {
        self.input.get(self.state.next + k).copied().unwrap_or(EOF_CHAR)
    }

    #[inline]
    fn eof(&self) -> bool {
        self.peek(0) == EOF_CHAR
    }

    fn start_token(&mut self) {
        self.token_start = self.state;
    }

    fn consume(&mut self) {
        let next = self.peek(0);
        if next == EOF_CHAR {
            return;
        }
        if next == '\n' {
            self.last_line = self.state;
            self.last_line.col += 1;
            self.last_line.col_utf16 += 1;
            self.state.line += 1;
            self.state.col = 0;
            self.state.col_utf16 = 0;
        } else {
            self.state.col += 1;
            self.state.col_utf16 += 1 + (next as u32 > 0xFFFF) as usize;
        }
        self.state.next += 1;
    }

    fn create_token(&mut self, kind: TokenKind, channel: Channel) {
        // do not generate empty tokens (except EOF)
        if self.state.next == self.token_start.next && kind != TokenKind::Eof {
            return;
        }

        self.creating_var_symbol = kind == TokenKind::Ampersand;
        if self.creating_attr_ref {
            self.creating_attr_ref = matches!(kind, TokenKind::Ignored | TokenKind::Continuation);
        }

        let end = if self.token_start.line == self.state.line {
            self.state
        } else {
            self.last_line
        };

        self.tokens.push(Token {
            kind,
            channel,
            start: self.token_start.next,
            stop: self.state.next,
            line: self.token_start.line,
            column: self.token_start.col,
            column_utf16: self.token_start.col_utf16,
            end_column_utf16: end.col_utf16,
            index: self.tokens.len(),
        });
    }

    /// Produce one more token; returns false once EOF has been emitted.
    pub fn more_tokens(&mut self) -> bool {
        self.start_token();

        if self.eof() {
            self.create_token(TokenKind::Eof, Channel::Default);
            return false;
        }

        if self.double_byte_enabled {
            self.check_continuation();
        }

        if !self.unlimited_line
            && self.state.col == self.end
            && self.peek(0) != ' '
            && self.continuation_enabled
        {
            self.lex_continuation();
        } else if (self.unlimited_line && matches!(self.peek(0), '\r' | '\n'))
            || (!self.unlimited_line && self.state.col >= self.end)
        {
            self.lex_end();
        } else if self.state.col < self.begin {
            self.lex_begin();
        } else {
            self.lex_tokens();
        }

        true
    }

    fn lex_tokens(&mut self) {
        match self.peek(0) {
            '*' => {
                if self.state.col == self.begin && self.is_process() {
                    self.lex_process();
                } else {
                    self.consume();
                    self.create_token(TokenKind::Asterisk, Channel::Default);
                }
            }
            '.' => {
                self.consume();
                self.create_token(TokenKind::Dot, Channel::Default);
            }
            ' ' => self.lex_space(),
            '-' => {
                self.consume();
                self.create_token(TokenKind::Minus, Channel::Default);
            }
            '+' => {
                self.consume();
                self.create_token(TokenKind::Plus, Channel::Default);
            }
            '=' => {
                self.consume();
                self.create_token(TokenKind::Equals, Channel::Default);
            }
            '<' => {
                self.consume();
                self.create_token(TokenKind::Lt, Channel::Default);
            }
            '>' => {
                self.consume();
                self.create_token(TokenKind::Gt, Channel::Default);
            }
            ',' => {
                self.consume();
                self.create_token(TokenKind::Comma, Channel::Default);
            }
            '(' => {
                self.consume();
                self.create_token(TokenKind::LPar, Channel::Default);
            }
            ')' => {
                self.consume();
                self.create_token(TokenKind::RPar, Channel::Default);
            }
            '\'' => {
                self.consume();
                if self.creating_attr_ref {
                    self.create_token(TokenKind::Attr, Channel::Default);
                } else {
                    self.create_token(TokenKind::Apostrophe, Channel::Default);
                }
            }
            '/' => {
                self.consume();
                self.create_token(TokenKind::Slash, Channel::Default);
            }
            '&' => {
                self.consume();
                self.create_token(TokenKind::Ampersand, Channel::Default);
            }
            '\r' => {
                self.consume();
                if self.peek(0) == '\n' {
                    self.consume();
                }
            }
            '\n' => {
                self.consume();
            }
            '|' => {
                self.consume();
                self.create_token(TokenKind::Vertical, Channel::Default);
            }
            _ => self.lex_word(),
        }
    }

    fn lex_begin(&mut self) {
        self.start_token();
        while self.state.col < self.begin && !self.eof() && self.peek(0) != '\n' {
            self.consume();
        }
        self.create_token(TokenKind::Ignored, Channel::Hidden);
    }

    fn lex_end(&mut self) {
        self.start_token();
        while self.peek(0) != '\n' && !self.eof() {
            self.consume();
        }
        if !self.eof() {
            self.consume();
        }
        if self.double_byte_enabled {
            self.check_continuation();
        }
        self.create_token(TokenKind::Ignored, Channel::Hidden);
    }

    fn lex_continuation(&mut self) {
        self.start_token();
        self.line_limits.push(self.token_start.col_utf16);

        // the continuation character(s)
        while self.state.col <= self.end_default && !self.eof() {
            self.consume();
        }
        self.end = self.end_default;
        self.create_token(TokenKind::Continuation, Channel::Hidden);

        self.lex_end();
        self.lex_begin();

        // skip to the resume column of the continued line
        self.start_token();
        while self.state.col < self.cont && !self.eof() && self.peek(0) != '\n' {
            self.consume();
        }
        self.create_token(TokenKind::Ignored, Channel::Hidden);
    }

    /// In DBCS mode, pull the effective end column left across repeated
    /// continuation characters at the start of the current line.
    fn check_continuation(&mut self) {
        self.end = self.end_default;
        if self.state.col > self.end {
            return;
        }
        let relative = self.end - self.state.col;
        let cc = self.peek(relative);
        if cc == EOF_CHAR || cc == ' ' {
            return;
        }
        while self.end > self.begin {
            if self.peek(self.end - 1 - self.state.col) != cc {
                break;
            }
            self.end -= 1;
        }
    }

    fn lex_space(&mut self) {
        while self.peek(0) == ' ' && self.before_end() {
            self.consume();
        }
        self.create_token(TokenKind::Space, Channel::Default);
    }

    fn before_end(&self) -> bool {
        self.state.col < self.end
            || (self.unlimited_line && self.peek(0) != '\r' && self.peek(0) != '\n')
    }

    fn is_process(&self) -> bool {
        if !self.process_allowed {
            return false;
        }
        for (i, c) in "*PROCESS".chars().enumerate() {
            let next = self.peek(i);
            if next == EOF_CHAR || next.to_ascii_uppercase() != c {
                return false;
            }
        }
        true
    }

    fn lex_process(&mut self) {
        self.start_token();
        for _ in 0..8 {
            self.consume();
        }
        self.create_token(TokenKind::Process, Channel::Default);

        self.start_token();
        self.lex_space();

        let mut apostrophes = 0usize;
        self.end += 1; // including the END column
        while !self.eof()
            && self.before_end()
            && self.peek(0) != '\n'
            && self.peek(0) != '\r'
            && (apostrophes % 2 == 1 || self.peek(0) != ' ')
        {
            if self.peek(0) == '\'' {
                apostrophes += 1;
            }
            self.start_token();
            self.lex_tokens();
        }
        self.end -= 1;
        self.lex_end();
    }

    fn lex_word(&mut self) {
        let mut last_char_data_attr = false;
        let mut ci = get_char_info(self.peek(0));

        let mut ord = ci & FIRST_ORD != 0;
        let mut num = ci & DIGIT != 0;
        let mut last_part_ord_len = 0usize;
        let mut w_len = 0usize;
        let mut last_ord = true;

        while ci & (BLANK | ENDLINE | DIVIDER) == 0 && !self.eof() && self.before_end() {
            let curr_ord = ci & ORD != 0;
            if !last_ord && curr_ord {
                break;
            }

            last_part_ord_len = if curr_ord { last_part_ord_len + 1 } else { 0 };
            ord &= curr_ord;
            num &= self.peek(0).is_ascii_digit();
            last_char_data_attr = ci & DATA_ATTR != 0 && w_len == 0;

            if self.creating_var_symbol && !ord && w_len > 0 && w_len <= 63 {
                self.create_token(TokenKind::OrdSymbol, Channel::Default);
                return;
            }

            self.consume();
            ci = get_char_info(self.peek(0));
            w_len += 1;
            last_ord = curr_ord;
        }

        let var_sym_tmp = self.creating_var_symbol;

        if ord && w_len <= 63 {
            self.create_token(TokenKind::OrdSymbol, Channel::Default);
        } else if num {
            self.create_token(TokenKind::Num, Channel::Default);
        } else {
            self.create_token(TokenKind::Identifier, Channel::Default);
        }

        // The ATTR token is generated even after an identifier ending with
        // exactly one data-attribute letter; "L'ORD" in a macro parameter
        // must produce ATTR because a string cannot open there.
        if self.peek(0) == '\''
            && last_char_data_attr
            && !var_sym_tmp
            && last_part_ord_len == 1
            && (self.unlimited_line || self.state.col != self.end)
        {
            self.start_token();
            self.consume();
            self.create_token(TokenKind::Attr, Channel::Default);
        }

        self.creating_attr_ref = !self.unlimited_line
            && self.state.col == self.end
            && last_char_data_attr
            && !var_sym_tmp
            && w_len == 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logical_line::{extract_logical_line, DEFAULT_ICTL};

    fn lex(text: &str) -> (Lexer, Vec<(TokenKind, String)>) {
        let mut lexer = Lexer::new();
        lexer.reset(text, false, Position::default(), 0, false);
        lexer.lex_all();
        let toks = lexer
            .tokens()
            .iter()
            .map(|t| (t.kind, lexer.token_text(t)))
            .collect();
        (lexer, toks)
    }

    fn kinds(toks: &[(TokenKind, String)]) -> Vec<TokenKind> {
        toks.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_simple_statement() {
        let (_, toks) = lex("LABEL L 1,SYM");
        assert_eq!(
            kinds(&toks),
            vec![
                TokenKind::OrdSymbol,
                TokenKind::Space,
                TokenKind::OrdSymbol,
                TokenKind::Space,
                TokenKind::Num,
                TokenKind::Comma,
                TokenKind::OrdSymbol,
                TokenKind::Eof,
            ]
        );
        assert_eq!(toks[0].1, "LABEL");
        assert_eq!(toks[4].1, "1");
    }

    #[test]
    fn test_token_text_identity() {
        let (lexer, _) = lex("A(1)='X' &VAR");
        for t in lexer.tokens() {
            if t.kind == TokenKind::Eof {
                continue;
            }
            let text = lexer.text(t.start, t.stop);
            assert!(!text.is_empty(), "token {:?} has empty text", t.kind);
        }
    }

    #[test]
    fn test_ordsymbol_length_boundary() {
        let sixty_three = "A".repeat(63);
        let (_, toks) = lex(&sixty_three);
        assert_eq!(toks[0].0, TokenKind::OrdSymbol);

        let sixty_four = "A".repeat(64);
        let (_, toks) = lex(&sixty_four);
        assert_eq!(toks[0].0, TokenKind::Identifier);
    }

    #[test]
    fn test_attr_after_data_attr_letter() {
        let (_, toks) = lex("L'SYM");
        assert_eq!(
            kinds(&toks),
            vec![TokenKind::OrdSymbol, TokenKind::Attr, TokenKind::OrdSymbol, TokenKind::Eof]
        );
    }

    #[test]
    fn test_apostrophe_after_other_letter() {
        let (_, toks) = lex("W'SYM");
        assert_eq!(toks[1].0, TokenKind::Apostrophe);
    }

    #[test]
    fn test_ampersand_latches_var_symbol() {
        let (_, toks) = lex("&VAR.X");
        assert_eq!(
            kinds(&toks),
            vec![
                TokenKind::Ampersand,
                TokenKind::OrdSymbol,
                TokenKind::Dot,
                TokenKind::OrdSymbol,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_process_token() {
        let mut lexer = Lexer::new();
        lexer.reset("*PROCESS OVERRIDE(X)", false, Position::default(), 0, true);
        lexer.lex_all();
        assert_eq!(lexer.tokens()[0].kind, TokenKind::Process);
    }

    #[test]
    fn test_process_requires_permission() {
        let (_, toks) = lex("*PROCESS OVERRIDE(X)");
        assert_eq!(toks[0].0, TokenKind::Asterisk);
    }

    #[test]
    fn test_continuation_tokens() {
        let text = format!("{:<71}X\n               ,B", "         L     1,A");
        let mut line_input = text.as_str();
        let mut line = crate::logical_line::LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut line_input, &DEFAULT_ICTL));

        let mut lexer = Lexer::new();
        lexer.reset_from_logical_line(&line, Position::default(), 0, false);
        lexer.lex_all();

        let has_continuation = lexer.tokens().iter().any(|t| t.kind == TokenKind::Continuation);
        assert!(has_continuation);
        assert_eq!(lexer.line_limits(), &[71]);

        // the ,B after the resume column is visible on the default channel
        let default_text: String = lexer
            .tokens()
            .iter()
            .filter(|t| !t.is_hidden() && t.kind != TokenKind::Eof)
            .map(|t| lexer.token_text(t))
            .collect();
        assert!(default_text.contains(",B"));
    }

    #[test]
    fn test_end_80_keeps_lexing_without_continuation() {
        let mut lexer = Lexer::new();
        assert!(lexer.set_end(80));
        let long = format!("{:<69}ABC DEF", "");
        lexer.reset(&long, false, Position::default(), 0, false);
        lexer.lex_all();
        assert!(!lexer.tokens().iter().any(|t| t.kind == TokenKind::Continuation));
    }

    #[test]
    fn test_set_continue_validation() {
        let mut lexer = Lexer::new();
        assert!(!lexer.set_continue(1));
        assert!(!lexer.set_continue(41));
        assert!(lexer.set_continue(16));
        assert_eq!(lexer.continuation_column(), 15);
    }

    #[test]
    fn test_ord_symbol_classifier() {
        assert!(ord_symbol("ABC"));
        assert!(ord_symbol("A1234"));
        assert!(ord_symbol("$#@_"));
        assert!(!ord_symbol(""));
        assert!(!ord_symbol("1ABC"));
        assert!(!ord_symbol("A,B"));
        let long = "A".repeat(64);
        assert!(!ord_symbol(&long));
    }

    #[test]
    fn test_decode_utf8_substitution() {
        let (s, subs) = decode_utf8(b"AB\xFFCD");
        assert_eq!(s, "AB\u{1A}CD");
        assert!(subs.server);
        assert!(!subs.client);

        let (s, subs) = decode_utf8("AB\u{1A}".as_bytes());
        assert_eq!(s, "AB\u{1A}");
        assert!(subs.client);
        assert!(!subs.server);
    }
}
