//! The character-level operand parser.
//!
//! One recursive-descent engine serves all five operand grammars. It runs
//! over the operand text of a statement with the physical line boundaries
//! recorded separately: crossing a boundary bumps the line number and
//! resets the column to the continuation resume column, so every position
//! the engine reports is an original-document position without further
//! bookkeeping (the identity range provider). Statement re-parses run the
//! same engine over substituted text with a clamping provider.
//!
//! On a syntax error the engine emits one diagnostic, consumes the rest of
//! the operand field into a remark, and unwinds through `Result` with the
//! unit [`Failure`] marker; the caller keeps whatever partial list was
//! built so IDE features still see the statement.

use zasm_lex::{ord_char, ord_first_char};
use zasm_util::diagnostic::{Diagnostic, DiagnosticConsumer};
use zasm_util::hl::{HlScope, HlSymbol, SourceInfoProcessor};
use zasm_util::span::{Position, Range};

use crate::ast::*;
use crate::range_provider::RangeProvider;

/// Marker for a diagnosed syntax failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Failure;

pub type PResult<T> = Result<T, Failure>;

const EOF_CHAR: char = '\0';

/// Operand text prepared for the engine: the characters of the operand
/// field with line boundaries recorded as indices into the buffer.
#[derive(Clone, Debug, Default)]
pub struct OperandText {
    pub chars: Vec<char>,
    /// Buffer indices where a new source line begins.
    pub newlines: Vec<usize>,
    /// Original line of the first character.
    pub line: usize,
    /// Code-point column of the first character.
    pub column: usize,
    /// UTF-16 column of the first character.
    pub column_utf16: usize,
}

impl OperandText {
    /// Build from per-line pieces; a line boundary is recorded between
    /// consecutive pieces.
    pub fn from_pieces(pieces: &[&str], line: usize, column: usize, column_utf16: usize) -> Self {
        let mut chars = Vec::new();
        let mut newlines = Vec::new();
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                newlines.push(chars.len());
            }
            chars.extend(piece.chars());
        }
        Self {
            chars,
            newlines,
            line,
            column,
            column_utf16,
        }
    }

    /// Build from substituted text, splitting at embedded line feeds.
    pub fn from_substituted(text: &str, line: usize, column: usize, column_utf16: usize) -> Self {
        let pieces: Vec<&str> = text.split('\n').map(|p| p.trim_end_matches('\r')).collect();
        Self::from_pieces(&pieces, line, column, column_utf16)
    }

    pub fn is_multiline(&self) -> bool {
        !self.newlines.is_empty()
    }
}

/// Context the engine needs from the surrounding statement.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParserCtx {
    /// GOFF object format: affects data-definition type `R`.
    pub goff: bool,
    /// Length of the current instruction for `L'*`; `None` outside a
    /// statement context (standalone re-parse), where `L'*` is an error.
    pub loctr_len: Option<i32>,
}

/// Everything an operand parse produced.
#[derive(Debug, Default)]
pub struct ParsedOperands {
    pub operands: Vec<Operand>,
    pub op_range: Range,
    pub remarks: Vec<Range>,
    pub literals: Vec<Literal>,
    pub failed: bool,
}

/// The engine.
pub struct OperandParser<'a> {
    chars: &'a [char],
    newlines: &'a [usize],
    nl_idx: usize,

    next: usize,
    line: usize,
    col: usize,
    col_utf16: usize,
    cont: usize,

    provider: &'a RangeProvider,
    diags: Option<&'a dyn DiagnosticConsumer>,
    hl: Option<&'a SourceInfoProcessor>,
    ctx: ParserCtx,

    remarks: Vec<Range>,
    literals: Vec<Literal>,
    literals_allowed: bool,
    error_signaled: bool,
}

impl<'a> OperandParser<'a> {
    pub fn new(
        text: &'a OperandText,
        cont: usize,
        provider: &'a RangeProvider,
        diags: Option<&'a dyn DiagnosticConsumer>,
        hl: Option<&'a SourceInfoProcessor>,
        ctx: ParserCtx,
    ) -> Self {
        Self {
            chars: &text.chars,
            newlines: &text.newlines,
            nl_idx: 0,
            next: 0,
            line: text.line,
            col: text.column,
            col_utf16: text.column_utf16,
            cont,
            provider,
            diags,
            hl,
            ctx,
            remarks: Vec::new(),
            literals: Vec::new(),
            literals_allowed: true,
            error_signaled: false,
        }
    }

    // --- cursor primitives ---

    #[inline]
    fn peek(&self, k: usize) -> char {
        self.chars.get(self.next + k).copied().unwrap_or(EOF_CHAR)
    }

    #[inline]
    fn eof(&self) -> bool {
        self.next >= self.chars.len()
    }

    #[inline]
    fn at(&self, c: char) -> bool {
        self.peek(0) == c
    }

    #[inline]
    fn at_any(&self, set: &[char]) -> bool {
        set.contains(&self.peek(0))
    }

    /// Not at EOF and not at any of `set`.
    #[inline]
    fn not_at(&self, set: &[char]) -> bool {
        !self.eof() && !set.contains(&self.peek(0))
    }

    #[inline]
    fn is_ord_first(&self) -> bool {
        ord_first_char(self.peek(0))
    }

    #[inline]
    fn is_ord(&self) -> bool {
        ord_char(self.peek(0))
    }

    #[inline]
    fn is_num(&self) -> bool {
        self.peek(0).is_ascii_digit()
    }

    #[inline]
    fn before_nl(&self) -> bool {
        match self.newlines.get(self.nl_idx) {
            Some(&limit) => self.next < limit,
            None => true,
        }
    }

    fn adjust_lines(&mut self) {
        if self.before_nl() {
            return;
        }
        self.col = self.cont;
        self.col_utf16 = self.cont;
        while !self.before_nl() {
            self.line += 1;
            self.nl_idx += 1;
        }
    }

    fn consume(&mut self) {
        debug_assert!(!self.eof());
        let c = self.peek(0);
        self.adjust_lines();
        self.next += 1;
        self.col += 1;
        self.col_utf16 += 1 + (c as u32 > 0xFFFF) as usize;
    }

    fn consume_hl(&mut self, scope: HlScope) {
        let start = self.cur_pos_adjusted();
        self.consume();
        let end = self.cur_pos();
        self.add_hl_adjusted(self.adjust(Range::new(start, end)), scope);
    }

    fn consume_into(&mut self, s: &mut String) {
        s.push(self.peek(0));
        self.consume();
    }

    #[inline]
    fn cur_pos(&self) -> Position {
        Position::new(self.line, self.col_utf16)
    }

    fn cur_pos_adjusted(&mut self) -> Position {
        self.adjust_lines();
        self.cur_pos()
    }

    #[inline]
    fn adjust(&self, r: Range) -> Range {
        self.provider.adjust_range(r)
    }

    fn add_hl(&self, r: Range, scope: HlScope) {
        self.add_hl_adjusted(self.adjust(r), scope);
    }

    fn add_hl_adjusted(&self, r: Range, scope: HlScope) {
        if let Some(hl) = self.hl {
            hl.add_hl_symbol(HlSymbol::new(r, scope));
        }
    }

    // --- diagnostics ---

    /// Report without failing the parse.
    fn report(&self, d: Diagnostic) {
        if let Some(diags) = self.diags {
            diags.add_diagnostic(d);
        }
    }

    /// Diagnose at the current position, consume the rest of the field.
    fn add_diag(&mut self, make: fn(Range) -> Diagnostic) {
        let p = self.cur_pos_adjusted();
        let r = self.adjust(Range::point(p));
        self.report(make(r));
        self.error_signaled = true;
        self.consume_rest();
    }

    fn add_diag_or_eof(&mut self, make: fn(Range) -> Diagnostic) {
        if self.eof() {
            self.add_diag(Diagnostic::s0003);
        } else {
            self.add_diag(make);
        }
    }

    fn consume_rest(&mut self) {
        while self.not_at(&[' ']) {
            self.consume();
        }
        self.adjust_lines();
        if !self.eof() {
            self.lex_last_remark();
        }
    }

    fn must_follow(&mut self, set: &[char]) -> bool {
        if self.at_any(set) {
            return true;
        }
        self.add_diag_or_eof(Diagnostic::s0002);
        false
    }

    fn match_char(&mut self, c: char, make: fn(Range) -> Diagnostic) -> PResult<()> {
        if !self.at(c) {
            self.add_diag(make);
            return Err(Failure);
        }
        self.consume();
        Ok(())
    }

    fn match_char_hl(&mut self, c: char, scope: HlScope, make: fn(Range) -> Diagnostic) -> PResult<()> {
        if !self.at(c) {
            self.add_diag(make);
            return Err(Failure);
        }
        self.consume_hl(scope);
        Ok(())
    }

    // --- remarks ---

    fn lex_last_remark(&mut self) {
        while self.at(' ') {
            self.consume();
        }
        let start = self.cur_pos_adjusted();
        while !self.eof() {
            self.consume();
        }
        self.adjust_lines();
        let end = self.cur_pos();
        if start != end {
            self.remarks.push(self.adjust(Range::new(start, end)));
        }
    }

    fn lex_line_remark(&mut self) {
        while self.at(' ') && self.before_nl() {
            self.consume();
        }
        if self.before_nl() && !self.eof() {
            let start = self.cur_pos();
            while !self.eof() && self.before_nl() {
                self.consume();
            }
            let end = self.cur_pos();
            if start != end {
                self.remarks.push(self.adjust(Range::new(start, end)));
            }
        }
    }

    fn process_optional_line_remark(&mut self) {
        if self.at(' ') && self.before_nl() {
            self.lex_line_remark();
            self.adjust_lines();
        }
    }

    fn lex_optional_space(&mut self) -> bool {
        let mut matched = false;
        while self.at(' ') {
            self.consume();
            matched = true;
        }
        matched
    }

    // --- identifiers and variable symbols ---

    fn lex_id(&mut self) -> PResult<(String, Range)> {
        debug_assert!(self.is_ord_first());

        let start = self.cur_pos_adjusted();
        let mut name = String::new();
        loop {
            self.consume_into(&mut name);
            if !self.is_ord() {
                break;
            }
        }
        let r = self.adjust(Range::new(start, self.cur_pos()));

        if name.chars().count() > 63 {
            self.report(Diagnostic::s100(&name, r));
        }
        Ok((name, r))
    }

    fn lex_qualified_id(&mut self) -> PResult<(Option<String>, String)> {
        let (id1, _) = self.lex_id()?;

        if self.at('.') {
            self.consume_hl(HlScope::Operator);
            if !self.is_ord_first() {
                self.add_diag(Diagnostic::s0002);
                return Err(Failure);
            }
            let (id2, _) = self.lex_id()?;
            return Ok((Some(id1), id2));
        }

        Ok((None, id1))
    }

    fn lex_variable(&mut self) -> PResult<VariableSymbol> {
        debug_assert!(self.at('&'));

        let start = self.cur_pos_adjusted();
        self.consume();

        let mut chain = ConcatChain::new();
        let mut name = String::new();
        if self.at('(') {
            self.add_hl(Range::new(start, self.cur_pos()), HlScope::VarSymbol);
            self.consume_hl(HlScope::Operator);
            chain = self.lex_compound_variable()?;
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        } else if !self.is_ord_first() {
            self.add_diag(Diagnostic::s0008);
            return Err(Failure);
        } else {
            let (id, _) = self.lex_id()?;
            name = id;
            self.add_hl(Range::new(start, self.cur_pos()), HlScope::VarSymbol);
        }

        let mut subscripts = Vec::new();
        if self.at('(') {
            subscripts = self.lex_subscript()?;
        }

        let range = self.adjust(Range::new(start, self.cur_pos()));
        if !name.is_empty() {
            Ok(VariableSymbol::Basic {
                name,
                subscripts,
                range,
            })
        } else {
            Ok(VariableSymbol::Created {
                chain,
                subscripts,
                range,
            })
        }
    }

    fn lex_compound_variable(&mut self) -> PResult<ConcatChain> {
        if !self.not_at(&[')']) {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        let mut result = ConcatChain::new();

        while !self.eof() {
            match self.peek(0) {
                ')' => return Ok(result),

                '&' => {
                    let var = self.lex_variable()?;
                    result.push(ConcatPoint::Var(var));
                }

                '.' => {
                    let start = self.cur_pos_adjusted();
                    self.consume_hl(HlScope::Operator);
                    result.push(ConcatPoint::Dot(self.adjust(Range::new(start, self.cur_pos()))));
                }

                _ => {
                    let start = self.cur_pos_adjusted();
                    let mut collected = String::new();
                    while self.not_at(&[')', '&', '.']) {
                        self.consume_into(&mut collected);
                    }
                    let r = self.adjust(Range::new(start, self.cur_pos()));
                    self.add_hl_adjusted(r, HlScope::VarSymbol);
                    result.push(ConcatPoint::Str(CharStr::new(collected, r)));
                }
            }
        }
        self.add_diag(Diagnostic::s0003);
        Err(Failure)
    }

    fn lex_subscript(&mut self) -> PResult<Vec<CaExpr>> {
        debug_assert!(self.at('('));
        self.consume_hl(HlScope::Operator);

        let mut result = vec![self.lex_expr()?];
        while self.at(',') {
            self.consume_hl(HlScope::Operator);
            self.process_optional_line_remark();
            result.push(self.lex_expr()?);
        }

        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        Ok(result)
    }

    /// Subscript variant tolerating blank-separated single expressions.
    fn lex_subscript_ne(&mut self) -> PResult<Vec<CaExpr>> {
        debug_assert!(self.at('('));
        self.consume_hl(HlScope::Operator);

        let mut result = Vec::new();

        if self.lex_optional_space() {
            result.push(self.lex_expr()?);
            self.lex_optional_space();
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            return Ok(result);
        }

        result.push(self.lex_expr()?);
        if self.at(')') {
            self.consume_hl(HlScope::Operator);
            return Ok(result);
        }

        self.match_char_hl(',', HlScope::Operator, Diagnostic::s0002)?;
        result.push(self.lex_expr()?);

        while self.at(',') {
            self.consume_hl(HlScope::Operator);
            result.push(self.lex_expr()?);
        }
        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        Ok(result)
    }

    // --- conditional-assembly expressions ---

    fn follows_not_space(&self) -> bool {
        matches!(self.peek(0), 'N' | 'n')
            && matches!(self.peek(1), 'O' | 'o')
            && matches!(self.peek(2), 'T' | 't')
            && self.peek(3) == ' '
    }

    fn lex_expr_general(&mut self) -> PResult<CaExpr> {
        let start = self.cur_pos_adjusted();
        if !self.follows_not_space() {
            return self.lex_expr();
        }

        let mut exprs = Vec::new();
        loop {
            let start_not = self.cur_pos_adjusted();
            self.consume();
            self.consume();
            self.consume();
            let r = self.adjust(Range::new(start_not, self.cur_pos()));
            self.add_hl_adjusted(r, HlScope::Operand);
            exprs.push(CaExpr::Symbol {
                name: "NOT".to_string(),
                range: r,
            });
            self.lex_optional_space();
            if !self.follows_not_space() {
                break;
            }
        }

        exprs.push(self.lex_expr()?);
        Ok(CaExpr::ExprList {
            exprs,
            parenthesized: false,
            range: self.adjust(Range::new(start, self.cur_pos())),
        })
    }

    fn lex_ca_string_value(&mut self) -> PResult<ConcatChain> {
        debug_assert!(self.at('\''));
        self.consume_hl(HlScope::Operator);

        let mut cc = ConcatChain::new();
        let mut start = self.cur_pos_adjusted();
        let mut s = String::new();

        macro_rules! dump_s {
            ($self:ident) => {
                if !s.is_empty() {
                    let r = $self.adjust(Range::new(start, $self.cur_pos()));
                    cc.push(ConcatPoint::Str(CharStr::new(std::mem::take(&mut s), r)));
                }
            };
        }

        while !self.eof() {
            match self.peek(0) {
                '.' => {
                    dump_s!(self);
                    start = self.cur_pos_adjusted();
                    self.consume();
                    cc.push(ConcatPoint::Dot(self.adjust(Range::new(start, self.cur_pos()))));
                    start = self.cur_pos_adjusted();
                }

                '=' => {
                    dump_s!(self);
                    start = self.cur_pos_adjusted();
                    self.consume();
                    cc.push(ConcatPoint::Equals(self.adjust(Range::new(start, self.cur_pos()))));
                    start = self.cur_pos_adjusted();
                }

                '&' => {
                    if self.peek(1) == '&' {
                        self.consume_into(&mut s);
                        self.consume();
                    } else {
                        dump_s!(self);
                        let vs = self.lex_variable()?;
                        cc.push(ConcatPoint::Var(vs));
                        start = self.cur_pos_adjusted();
                    }
                }

                '\'' => {
                    if self.peek(1) != '\'' {
                        break;
                    }
                    self.consume_into(&mut s);
                    self.consume();
                }

                _ => self.consume_into(&mut s),
            }
        }
        dump_s!(self);

        self.match_char_hl('\'', HlScope::Operator, Diagnostic::s0005)?;
        clear_chain(&mut cc);
        Ok(cc)
    }

    fn lex_substring(&mut self) -> PResult<Substring> {
        debug_assert!(self.at('('));
        let sub_start = self.cur_pos_adjusted();
        self.consume_hl(HlScope::Operator);

        let e1 = self.lex_expr_general()?;
        self.match_char_hl(',', HlScope::Operator, Diagnostic::s0002)?;

        if self.at('*') {
            self.consume();
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            return Ok(Substring {
                start: Box::new(e1),
                end: None,
                range: self.adjust(Range::new(sub_start, self.cur_pos())),
            });
        }

        let e2 = self.lex_expr_general()?;
        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;

        Ok(Substring {
            start: Box::new(e1),
            end: Some(Box::new(e2)),
            range: self.adjust(Range::new(sub_start, self.cur_pos())),
        })
    }

    fn lex_ca_string_with_optional_substring(&mut self) -> PResult<(ConcatChain, Option<Substring>)> {
        debug_assert!(self.at('\''));
        let cc = self.lex_ca_string_value()?;

        if !self.at('(') {
            return Ok((cc, None));
        }
        let sub = self.lex_substring()?;
        Ok((cc, Some(sub)))
    }

    /// String concatenation tail: `'a'(dupl)'b'...`.
    fn lex_ca_string_concat(&mut self, mut result: CaExpr, start: Position) -> PResult<CaExpr> {
        while self.at_any(&['(', '\'']) {
            let conc_start = self.cur_pos_adjusted();
            let mut nested_dupl = None;
            if self.at('(') {
                self.consume_hl(HlScope::Operator);
                let dupl = self.lex_expr_general()?;
                self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
                nested_dupl = Some(Box::new(dupl));
            }
            if !self.at('\'') {
                self.add_diag_or_eof(Diagnostic::s0002);
                return Err(Failure);
            }
            let (chain, substring) = self.lex_ca_string_with_optional_substring()?;
            let next = CaExpr::String(CaString {
                chain,
                dupl: nested_dupl,
                substring,
                range: self.adjust(Range::new(conc_start, self.cur_pos())),
            });
            result = CaExpr::Binary {
                op: CaBinOp::Concat,
                lhs: Box::new(result),
                rhs: Box::new(next),
                range: self.adjust(Range::new(start, self.cur_pos())),
            };
        }
        Ok(result)
    }

    fn lex_term(&mut self) -> PResult<CaExpr> {
        let start = self.cur_pos_adjusted();
        match self.peek(0) {
            EOF_CHAR => {
                self.add_diag(Diagnostic::s0003);
                Err(Failure)
            }

            '&' => {
                let v = self.lex_variable()?;
                Ok(CaExpr::VarSym {
                    symbol: Box::new(v),
                    range: self.adjust(Range::new(start, self.cur_pos())),
                })
            }

            '-' | '0'..='9' => {
                let (value, r) = self.lex_number_as_string()?;
                let v = self.self_defining_term("D", &value, r);
                Ok(CaExpr::Constant { value: v, range: r })
            }

            '\'' => {
                let (chain, substring) = self.lex_ca_string_with_optional_substring()?;
                let result = CaExpr::String(CaString {
                    chain,
                    dupl: None,
                    substring,
                    range: self.adjust(Range::new(start, self.cur_pos())),
                });
                self.lex_ca_string_concat(result, start)
            }

            '(' => self.lex_term_parenthesized(start),

            _ => {
                if !self.is_ord_first() {
                    self.add_diag(Diagnostic::s0002);
                    return Err(Failure);
                }

                if self.peek(1) == '\'' {
                    match self.peek(0) {
                        'B' | 'X' | 'C' | 'G' | 'b' | 'x' | 'c' | 'g' => {
                            let c = self.peek(0).to_ascii_uppercase();
                            self.consume_hl(HlScope::SelfDefType);
                            let s = self.lex_simple_string()?;
                            let r = self.adjust(Range::new(start, self.cur_pos()));
                            let value = self.self_defining_term(&c.to_string(), &s, r);
                            return Ok(CaExpr::Constant { value, range: r });
                        }

                        'N' | 'K' | 'D' | 'O' | 'S' | 'I' | 'L' | 'T' | 'n' | 'k' | 'd' | 'o'
                        | 's' | 'i' | 'l' | 't' => {
                            let attr = self.peek(0).to_ascii_uppercase();
                            self.consume_hl(HlScope::DataAttrType);
                            self.consume_hl(HlScope::Operator);
                            match self.peek(0) {
                                EOF_CHAR => {
                                    self.add_diag(Diagnostic::s0003);
                                    return Err(Failure);
                                }
                                '&' => {
                                    let v = self.lex_variable()?;
                                    // a trailing dot is consumed as part
                                    // of the attribute reference
                                    if self.at('.') {
                                        self.consume();
                                    }
                                    return Ok(CaExpr::AttrRef {
                                        attr,
                                        target: CaAttrTarget::Var(v),
                                        range: self.adjust(Range::new(start, self.cur_pos())),
                                    });
                                }
                                '=' => {
                                    let l = self.lex_literal()?;
                                    return Ok(CaExpr::AttrRef {
                                        attr,
                                        target: CaAttrTarget::Literal(Box::new(l)),
                                        range: self.adjust(Range::new(start, self.cur_pos())),
                                    });
                                }
                                _ => {
                                    if !self.is_ord_first() {
                                        self.add_diag(Diagnostic::s0002);
                                        return Err(Failure);
                                    }
                                    let (id, _) = self.lex_id()?;
                                    return Ok(CaExpr::AttrRef {
                                        attr,
                                        target: CaAttrTarget::Symbol(id),
                                        range: self.adjust(Range::new(start, self.cur_pos())),
                                    });
                                }
                            }
                        }
                        _ => {}
                    }
                }

                let (id, _) = self.lex_id()?;
                if self.at('(') {
                    self.add_hl(Range::new(start, self.cur_pos()), HlScope::Operand);
                    let args = self.lex_subscript_ne()?;
                    Ok(CaExpr::Function {
                        name: id,
                        args,
                        dupl: None,
                        range: self.adjust(Range::new(start, self.cur_pos())),
                    })
                } else {
                    let r = self.adjust(Range::new(start, self.cur_pos()));
                    self.add_hl_adjusted(r, HlScope::Operand);
                    Ok(CaExpr::Symbol { name: id, range: r })
                }
            }
        }
    }

    fn lex_term_parenthesized(&mut self, start: Position) -> PResult<CaExpr> {
        self.consume_hl(HlScope::Operator);
        if self.eof() {
            self.add_diag(Diagnostic::s0003);
            return Err(Failure);
        }

        let mut p_expr: Option<CaExpr> = None;
        if !self.follows_not_space() {
            let mut expr_list = Vec::new();
            let mut spaces_found = self.lex_optional_space();
            p_expr = Some(self.lex_expr()?);
            spaces_found |= self.lex_optional_space();
            while self.not_at(&[')']) {
                let e = self.lex_expr()?;
                if let Some(p) = p_expr.take() {
                    expr_list.push(p);
                }
                expr_list.push(e);
                spaces_found |= self.lex_optional_space();
            }
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            if spaces_found {
                if let Some(p) = p_expr.take() {
                    expr_list.push(p);
                }
            }
            if !expr_list.is_empty() {
                return Ok(CaExpr::ExprList {
                    exprs: expr_list,
                    parenthesized: true,
                    range: self.adjust(Range::new(start, self.cur_pos())),
                });
            }
        } else {
            let e = self.lex_expr_general()?;
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            p_expr = Some(e);
        }

        if self.at('\'') {
            let (chain, substring) = self.lex_ca_string_with_optional_substring()?;
            let result = CaExpr::String(CaString {
                chain,
                dupl: p_expr.map(Box::new),
                substring,
                range: self.adjust(Range::new(start, self.cur_pos())),
            });
            return self.lex_ca_string_concat(result, start);
        }
        if self.is_ord_first() {
            let (id, _) = self.lex_id()?;
            if !self.must_follow(&['(']) {
                return Err(Failure);
            }
            let args = self.lex_subscript_ne()?;
            return Ok(CaExpr::Function {
                name: id,
                args,
                dupl: p_expr.map(Box::new),
                range: self.adjust(Range::new(start, self.cur_pos())),
            });
        }

        Ok(CaExpr::ExprList {
            exprs: p_expr.into_iter().collect(),
            parenthesized: true,
            range: self.adjust(Range::new(start, self.cur_pos())),
        })
    }

    fn lex_term_c(&mut self) -> PResult<CaExpr> {
        if self.at('+') || (self.at('-') && !self.peek(1).is_ascii_digit()) {
            let start = self.cur_pos_adjusted();
            let plus = self.at('+');
            self.consume_hl(HlScope::Operator);
            let e = self.lex_term_c()?;
            return Ok(CaExpr::Unary {
                op: if plus { CaUnaryOp::Plus } else { CaUnaryOp::Minus },
                operand: Box::new(e),
                range: self.adjust(Range::new(start, self.cur_pos())),
            });
        }
        self.lex_term()
    }

    fn lex_expr_s(&mut self) -> PResult<CaExpr> {
        let start = self.cur_pos_adjusted();
        let mut result = self.lex_term_c()?;

        while self.at_any(&['*', '/']) {
            let mul = self.at('*');
            self.consume_hl(HlScope::Operator);
            let e = self.lex_term_c()?;
            result = CaExpr::Binary {
                op: if mul { CaBinOp::Mul } else { CaBinOp::Div },
                lhs: Box::new(result),
                rhs: Box::new(e),
                range: self.adjust(Range::new(start, self.cur_pos())),
            };
        }
        Ok(result)
    }

    fn lex_expr(&mut self) -> PResult<CaExpr> {
        let start = self.cur_pos_adjusted();
        let mut result = self.lex_expr_s()?;

        match self.peek(0) {
            '+' | '-' => {
                while self.at_any(&['+', '-']) {
                    let plus = self.at('+');
                    self.consume_hl(HlScope::Operator);
                    let e = self.lex_expr_s()?;
                    result = CaExpr::Binary {
                        op: if plus { CaBinOp::Add } else { CaBinOp::Sub },
                        lhs: Box::new(result),
                        rhs: Box::new(e),
                        range: self.adjust(Range::new(start, self.cur_pos())),
                    };
                }
            }
            '.' => {
                while self.at('.') {
                    self.consume_hl(HlScope::Operator);
                    let e = self.lex_term_c()?;
                    result = CaExpr::Binary {
                        op: CaBinOp::Concat,
                        lhs: Box::new(result),
                        rhs: Box::new(e),
                        range: self.adjust(Range::new(start, self.cur_pos())),
                    };
                }
            }
            _ => {}
        }
        Ok(result)
    }

    // --- numbers and self-defining terms ---

    fn lex_number_as_string(&mut self) -> PResult<(String, Range)> {
        let start = self.cur_pos_adjusted();
        let mut result = String::new();

        if self.at('-') {
            self.consume_into(&mut result);
        }
        if !self.is_num() {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        while self.is_num() {
            self.consume_into(&mut result);
        }

        let r = self.adjust(Range::new(start, self.cur_pos()));
        self.add_hl_adjusted(r, HlScope::Number);
        Ok((result, r))
    }

    /// Evaluate a self-defining term; malformed values report CE007 and
    /// yield 0, matching the original evaluator's parse-time behavior.
    fn self_defining_term(&mut self, option: &str, value: &str, r: Range) -> i32 {
        fn radix_term(value: &str, radix: u32) -> Option<i32> {
            if value.is_empty() {
                return Some(0);
            }
            u32::from_str_radix(value, radix).ok().map(|v| v as i32)
        }

        let parsed = match option.to_ascii_uppercase().as_str() {
            "B" => radix_term(value, 2),
            "X" => radix_term(value, 16),
            "D" => {
                if value.is_empty() {
                    Some(0)
                } else {
                    let signs = value.chars().take_while(|c| *c == '-' || *c == '+').count();
                    if signs > 1 || (value.starts_with('-') && value.len() > 11) {
                        None
                    } else {
                        let body = value.strip_prefix('+').unwrap_or(value);
                        body.parse::<i64>()
                            .ok()
                            .filter(|v| i32::try_from(*v).is_ok())
                            .map(|v| v as i32)
                    }
                }
            }
            "C" | "CA" | "CE" | "G" => {
                let mut acc: u32 = 0;
                let mut count = 0usize;
                let mut ok = true;
                for c in value.chars() {
                    count += 1;
                    if count > 4 {
                        ok = false;
                        break;
                    }
                    acc = (acc << 8) | (c as u32 & 0xFF);
                }
                if ok {
                    Some(acc as i32)
                } else {
                    None
                }
            }
            _ => None,
        };

        match parsed {
            Some(v) => v,
            None => {
                self.report(Diagnostic::ce007(r));
                0
            }
        }
    }

    fn parse_number(&mut self) -> PResult<(i32, Range)> {
        const PARSE_LIMIT: i64 = 1 << 31;

        let start = self.cur_pos_adjusted();
        let negative = match self.peek(0) {
            '-' => {
                self.consume();
                true
            }
            '+' => {
                self.consume();
                false
            }
            _ => false,
        };

        let mut result: i64 = 0;
        let mut parsed_one = false;
        while !self.eof() && self.is_num() {
            let c = self.peek(0);
            parsed_one = true;
            self.consume();
            if result > PARSE_LIMIT {
                continue;
            }
            result = result * 10 + (c as u8 - b'0') as i64;
        }

        let r = self.adjust(Range::new(start, self.cur_pos()));
        if !parsed_one {
            self.report(Diagnostic::d002(r));
            self.error_signaled = true;
            self.consume_rest();
            return Err(Failure);
        }
        if negative {
            result = -result;
        }
        if result < i32::MIN as i64 || result > i32::MAX as i64 {
            self.report(Diagnostic::d001(r));
            self.error_signaled = true;
            self.consume_rest();
            return Err(Failure);
        }
        self.add_hl_adjusted(r, HlScope::Number);
        Ok((result as i32, r))
    }

    // --- machine expressions ---

    fn lex_mach_string(&mut self) -> PResult<String> {
        debug_assert!(self.at('\''));
        let start = self.cur_pos_adjusted();
        let mut s = String::new();
        self.consume();

        while !self.eof() {
            if self.peek(0) != '\'' {
                self.consume_into(&mut s);
            } else if self.peek(1) == '\'' {
                self.consume_into(&mut s);
                self.consume();
            } else {
                self.consume();
                self.add_hl(Range::new(start, self.cur_pos()), HlScope::String);
                return Ok(s);
            }
        }

        self.add_diag(Diagnostic::s0005);
        Err(Failure)
    }

    fn lex_mach_term(&mut self) -> PResult<MachExpr> {
        let start = self.cur_pos_adjusted();
        match self.peek(0) {
            EOF_CHAR => {
                self.add_diag(Diagnostic::s0003);
                Err(Failure)
            }

            '(' => {
                self.consume_hl(HlScope::Operator);
                let e = self.lex_mach_expr()?;
                self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
                Ok(MachExpr::Unary {
                    op: MachUnaryOp::Par,
                    operand: Box::new(e),
                    range: self.adjust(Range::new(start, self.cur_pos())),
                })
            }

            '*' => {
                self.consume_hl(HlScope::Operand);
                Ok(MachExpr::LocCounter {
                    range: self.adjust(Range::new(start, self.cur_pos())),
                })
            }

            '-' | '0'..='9' => {
                let (value, r) = self.lex_number_as_string()?;
                let v = self.self_defining_term_in_mach("D", &value, r);
                Ok(MachExpr::Constant { value: v, range: r })
            }

            '=' => {
                let l = self.lex_literal()?;
                Ok(MachExpr::Literal(Box::new(l)))
            }

            _ => {
                if !self.is_ord_first() {
                    self.add_diag(Diagnostic::s0002);
                    return Err(Failure);
                }

                // CA'...' self-defining term
                if matches!(self.peek(0), 'C' | 'c')
                    && matches!(self.peek(1), 'A' | 'a')
                    && self.peek(2) == '\''
                {
                    self.consume();
                    self.consume();
                    self.add_hl(Range::new(start, self.cur_pos()), HlScope::SelfDefType);
                    let s = self.lex_mach_string()?;
                    let r = self.adjust(Range::new(start, self.cur_pos()));
                    let v = self.self_defining_term_in_mach("CA", &s, r);
                    return Ok(MachExpr::Constant { value: v, range: r });
                }

                if self.peek(1) == '\'' {
                    match self.peek(0) {
                        'L' | 'l' if self.peek(2) == '*' => {
                            self.consume_hl(HlScope::DataAttrType);
                            self.consume_hl(HlScope::Operator);
                            let Some(len) = self.ctx.loctr_len else {
                                self.add_diag(Diagnostic::s0002);
                                return Err(Failure);
                            };
                            self.consume_hl(HlScope::Operand);
                            return Ok(MachExpr::Constant {
                                value: len,
                                range: self.adjust(Range::new(start, self.cur_pos())),
                            });
                        }
                        'L' | 'O' | 'S' | 'I' | 'T' | 'l' | 'o' | 's' | 'i' | 't' => {
                            let attr = self.peek(0).to_ascii_uppercase();
                            self.consume_hl(HlScope::DataAttrType);
                            self.consume_hl(HlScope::Operator);
                            if self.at('=') {
                                let l = self.lex_literal()?;
                                return Ok(MachExpr::AttrRef {
                                    attr,
                                    target: MachAttrTarget::Literal(Box::new(l)),
                                    range: self.adjust(Range::new(start, self.cur_pos())),
                                });
                            } else if self.is_ord_first() {
                                let (qualifier, name) = self.lex_qualified_id()?;
                                self.add_hl(Range::new(start, self.cur_pos()), HlScope::OrdinarySymbol);
                                return Ok(MachExpr::AttrRef {
                                    attr,
                                    target: MachAttrTarget::Symbol { name, qualifier },
                                    range: self.adjust(Range::new(start, self.cur_pos())),
                                });
                            } else {
                                self.add_diag(Diagnostic::s0002);
                                return Err(Failure);
                            }
                        }
                        'B' | 'D' | 'X' | 'C' | 'b' | 'd' | 'x' | 'c' => {
                            let opt = self.peek(0).to_ascii_uppercase();
                            self.consume_hl(HlScope::SelfDefType);
                            let s = self.lex_mach_string()?;
                            let r = self.adjust(Range::new(start, self.cur_pos()));
                            let v = self.self_defining_term_in_mach(&opt.to_string(), &s, r);
                            return Ok(MachExpr::Constant { value: v, range: r });
                        }
                        _ => {}
                    }
                }

                let (id, _) = self.lex_id()?;
                if self.at('.') {
                    self.consume_hl(HlScope::Operator);
                    if !self.is_ord_first() {
                        self.add_diag(Diagnostic::s0002);
                        return Err(Failure);
                    }
                    let (id2, _) = self.lex_id()?;
                    let r = self.adjust(Range::new(start, self.cur_pos()));
                    self.add_hl_adjusted(r, HlScope::OrdinarySymbol);
                    Ok(MachExpr::Symbol {
                        name: id2,
                        qualifier: Some(id),
                        range: r,
                    })
                } else {
                    let r = self.adjust(Range::new(start, self.cur_pos()));
                    self.add_hl_adjusted(r, HlScope::OrdinarySymbol);
                    Ok(MachExpr::Symbol {
                        name: id,
                        qualifier: None,
                        range: r,
                    })
                }
            }
        }
    }

    fn self_defining_term_in_mach(&mut self, type_: &str, value: &str, r: Range) -> i32 {
        self.self_defining_term(type_, value, r)
    }

    fn lex_mach_term_c(&mut self) -> PResult<MachExpr> {
        if self.at('+') || (self.at('-') && !self.peek(1).is_ascii_digit()) {
            let plus = self.at('+');
            let start = self.cur_pos_adjusted();
            self.consume_hl(HlScope::Operator);
            let e = self.lex_mach_term_c()?;
            return Ok(MachExpr::Unary {
                op: if plus { MachUnaryOp::Plus } else { MachUnaryOp::Minus },
                operand: Box::new(e),
                range: self.adjust(Range::new(start, self.cur_pos())),
            });
        }
        self.lex_mach_term()
    }

    fn lex_mach_expr_s(&mut self) -> PResult<MachExpr> {
        let start = self.cur_pos_adjusted();
        let mut e = self.lex_mach_term_c()?;

        while self.at_any(&['*', '/']) {
            let mul = self.at('*');
            self.consume_hl(HlScope::Operator);
            let next = self.lex_mach_term_c()?;
            e = MachExpr::Binary {
                op: if mul { MachBinOp::Mul } else { MachBinOp::Div },
                lhs: Box::new(e),
                rhs: Box::new(next),
                range: self.adjust(Range::new(start, self.cur_pos())),
            };
        }
        Ok(e)
    }

    pub(crate) fn lex_mach_expr(&mut self) -> PResult<MachExpr> {
        let start = self.cur_pos_adjusted();
        let mut e = self.lex_mach_expr_s()?;

        while self.at_any(&['+', '-']) {
            let plus = self.at('+');
            self.consume_hl(HlScope::Operator);
            let next = self.lex_mach_expr_s()?;
            e = MachExpr::Binary {
                op: if plus { MachBinOp::Add } else { MachBinOp::Sub },
                lhs: Box::new(e),
                rhs: Box::new(next),
                range: self.adjust(Range::new(start, self.cur_pos())),
            };
        }
        Ok(e)
    }

    // --- data definitions and literals ---

    fn lex_literal_signed_num(&mut self) -> PResult<MachExpr> {
        if self.at('(') {
            self.consume_hl(HlScope::Operator);
            let e = self.lex_mach_expr()?;
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            return Ok(e);
        }
        let (n, r) = self.parse_number()?;
        Ok(MachExpr::Constant { value: n, range: r })
    }

    fn lex_literal_unsigned_num(&mut self) -> PResult<MachExpr> {
        if self.at('(') {
            self.consume_hl(HlScope::Operator);
            let e = self.lex_mach_expr()?;
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
            return Ok(e);
        }
        if !self.is_num() {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        let (n, r) = self.parse_number()?;
        Ok(MachExpr::Constant { value: n, range: r })
    }

    pub(crate) fn lex_data_def_base(&mut self) -> PResult<DataDef> {
        let mut result = DataDef::default();

        // duplication factor
        if self.at('(') || self.is_num() {
            result.dupl_factor = Some(Box::new(self.lex_literal_unsigned_num()?));
        }

        // type
        if !self.is_ord_first() {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        let type_ = self.peek(0).to_ascii_uppercase();
        let type_start = self.cur_pos_adjusted();
        self.consume();

        result.type_ = if type_ == 'R' && !self.ctx.goff { 'r' } else { type_ };
        result.type_range = self.adjust(Range::new(type_start, self.cur_pos()));

        if self.is_ord_first() && is_type_extension(type_, self.peek(0).to_ascii_uppercase()) {
            result.extension = Some(self.peek(0).to_ascii_uppercase());
            let ext_start = self.cur_pos_adjusted();
            self.consume();
            result.extension_range = Some(self.adjust(Range::new(ext_start, self.cur_pos())));
        }
        self.add_hl(Range::new(type_start, self.cur_pos()), HlScope::DataDefType);

        // program type
        if matches!(self.peek(0), 'P' | 'p') {
            self.consume_hl(HlScope::DataDefModifier);
            result.program_type = Some(Box::new(self.lex_literal_signed_num()?));
        }
        // length
        if matches!(self.peek(0), 'L' | 'l') {
            self.consume_hl(HlScope::DataDefModifier);
            if self.at('.') {
                result.length_type = LengthType::Bit;
                self.consume();
            }
            result.length = Some(Box::new(self.lex_literal_unsigned_num()?));
        }
        // scale
        if matches!(self.peek(0), 'S' | 's') {
            self.consume_hl(HlScope::DataDefModifier);
            result.scale = Some(Box::new(self.lex_literal_signed_num()?));
        }
        // exponent
        if matches!(self.peek(0), 'E' | 'e') {
            self.consume_hl(HlScope::DataDefModifier);
            result.exponent = Some(Box::new(self.lex_literal_signed_num()?));
        }

        Ok(result)
    }

    fn lex_expr_or_addr(&mut self) -> PResult<ExprOrAddress> {
        let start = self.cur_pos_adjusted();
        let e = self.lex_mach_expr()?;
        if !self.at('(') {
            return Ok(ExprOrAddress::Expr(e));
        }
        self.consume_hl(HlScope::Operator);
        let base = self.lex_mach_expr()?;
        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        Ok(ExprOrAddress::Address(AddressNominal {
            displacement: Box::new(e),
            base: Box::new(base),
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    fn lex_literal_nominal_char(&mut self) -> PResult<(String, Range)> {
        debug_assert!(self.at('\''));
        let start = self.cur_pos_adjusted();

        let mut result = String::new();
        self.consume();
        loop {
            if self.peek(0) == '\'' && self.peek(1) == '\'' {
                self.consume_into(&mut result);
                self.consume();
            } else if self.not_at(&['\'']) {
                self.consume_into(&mut result);
            } else {
                break;
            }
        }
        self.match_char('\'', Diagnostic::s0005)?;

        let r = self.adjust(Range::new(start, self.cur_pos()));
        self.add_hl_adjusted(r, HlScope::String);
        Ok((result, r))
    }

    fn lex_literal_nominal_addr(&mut self) -> PResult<Vec<ExprOrAddress>> {
        debug_assert!(self.at('('));
        self.consume_hl(HlScope::Operator);

        let mut result = vec![self.lex_expr_or_addr()?];
        while self.at(',') {
            self.consume_hl(HlScope::Operator);
            self.process_optional_line_remark();
            result.push(self.lex_expr_or_addr()?);
        }

        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        Ok(result)
    }

    fn lex_literal_nominal(&mut self) -> PResult<NominalValue> {
        if self.at('\'') {
            let (value, range) = self.lex_literal_nominal_char()?;
            Ok(NominalValue::String { value, range })
        } else if self.at('(') {
            Ok(NominalValue::Exprs(self.lex_literal_nominal_addr()?))
        } else {
            self.add_diag(Diagnostic::s0003);
            Err(Failure)
        }
    }

    fn lex_literal(&mut self) -> PResult<Literal> {
        let allowed = self.literals_allowed;
        let saved = std::mem::replace(&mut self.literals_allowed, false);
        let start = self.cur_pos_adjusted();
        let initial = self.next;

        debug_assert!(self.at('='));
        self.consume_hl(HlScope::Operator);

        let result = (|| {
            let mut dd = self.lex_data_def_base()?;
            let nominal = self.lex_literal_nominal()?;
            if !allowed {
                self.add_diag(Diagnostic::s0013);
                return Err(Failure);
            }
            dd.nominal = Some(nominal);

            let text: String = self.chars[initial..self.next].iter().collect();
            let literal = Literal {
                text,
                data_def: dd,
                range: self.adjust(Range::new(start, self.cur_pos())),
            };
            self.literals.push(literal.clone());
            Ok(literal)
        })();

        self.literals_allowed = saved;
        result
    }

    fn lex_simple_string(&mut self) -> PResult<String> {
        debug_assert!(self.at('\''));

        let mut result = String::new();
        let start = self.cur_pos_adjusted();
        self.consume();

        while !self.eof() {
            match self.peek(0) {
                '&' => {
                    if self.peek(1) != '&' {
                        self.add_diag(Diagnostic::s0002);
                        return Err(Failure);
                    }
                    self.consume_into(&mut result);
                    self.consume();
                }
                '\'' => {
                    if self.peek(1) != '\'' {
                        break;
                    }
                    self.consume_into(&mut result);
                    self.consume();
                }
                _ => self.consume_into(&mut result),
            }
        }

        if !self.at('\'') {
            self.add_diag(Diagnostic::s0005);
            return Err(Failure);
        }
        self.consume();
        self.add_hl(Range::new(start, self.cur_pos()), HlScope::String);
        Ok(result)
    }

    // --- macro operands ---

    fn lex_macro_operand(&mut self, cc: &mut ConcatChain, mut next_char_special: bool) -> PResult<()> {
        // pending plain-text run; flushed on every structural point
        let mut text: Option<(String, Position)> = None;

        macro_rules! last_text {
            ($self:ident) => {{
                if text.is_none() {
                    text = Some((String::new(), $self.cur_pos_adjusted()));
                }
                &mut text.as_mut().unwrap().0
            }};
        }
        macro_rules! push_last_text {
            ($self:ident) => {
                if let Some((value, start)) = text.take() {
                    let r = $self.adjust(Range::new(start, $self.cur_pos()));
                    $self.add_hl_adjusted(r, HlScope::Operand);
                    cc.push(ConcatPoint::Str(CharStr::new(value, r)));
                }
            };
        }

        loop {
            let last_char_special = std::mem::replace(&mut next_char_special, true);
            match self.peek(0) {
                '(' => {
                    push_last_text!(self);
                    let mut nested = Vec::new();
                    self.process_macro_list(&mut nested)?;
                    cc.push(ConcatPoint::Sublist(nested));
                }

                '=' => {
                    push_last_text!(self);
                    let s = self.cur_pos_adjusted();
                    self.consume_hl(HlScope::Operator);
                    cc.push(ConcatPoint::Equals(self.adjust(Range::new(s, self.cur_pos()))));
                }

                '.' => {
                    push_last_text!(self);
                    let s = self.cur_pos_adjusted();
                    self.consume_hl(HlScope::Operator);
                    cc.push(ConcatPoint::Dot(self.adjust(Range::new(s, self.cur_pos()))));
                }

                EOF_CHAR | ' ' | ')' | ',' => {
                    push_last_text!(self);
                    return Ok(());
                }

                '\'' => {
                    let t = last_text!(self);
                    self.consume_into(t);
                    loop {
                        if self.eof() {
                            break;
                        }
                        match self.peek(0) {
                            '\'' => {
                                if self.peek(1) != '\'' {
                                    break;
                                }
                                // keep the doubled apostrophes
                                let t = last_text!(self);
                                self.consume_into(t);
                                let t = last_text!(self);
                                self.consume_into(t);
                            }
                            '&' => {
                                if self.peek(1) == '&' {
                                    let t = last_text!(self);
                                    self.consume_into(t);
                                    let t = last_text!(self);
                                    self.consume_into(t);
                                } else {
                                    push_last_text!(self);
                                    let vs = self.lex_variable()?;
                                    cc.push(ConcatPoint::Var(vs));
                                }
                            }
                            '=' => {
                                push_last_text!(self);
                                let s = self.cur_pos_adjusted();
                                self.consume();
                                cc.push(ConcatPoint::Equals(self.adjust(Range::new(s, self.cur_pos()))));
                            }
                            '.' => {
                                push_last_text!(self);
                                let s = self.cur_pos_adjusted();
                                self.consume();
                                cc.push(ConcatPoint::Dot(self.adjust(Range::new(s, self.cur_pos()))));
                            }
                            _ => {
                                let t = last_text!(self);
                                self.consume_into(t)
                            }
                        }
                    }
                    if !self.at('\'') {
                        push_last_text!(self);
                        self.add_diag(Diagnostic::s0005);
                        return Err(Failure);
                    }
                    let t = last_text!(self);
                    self.consume_into(t);
                    push_last_text!(self);
                    next_char_special = false;
                }

                '&' => {
                    if self.peek(1) == '&' {
                        let t = last_text!(self);
                        self.consume_into(t);
                        let t = last_text!(self);
                        self.consume_into(t);
                    } else {
                        push_last_text!(self);
                        let v = self.lex_variable()?;
                        cc.push(ConcatPoint::Var(v));
                        next_char_special = false;
                    }
                }

                'O' | 'S' | 'I' | 'L' | 'T' | 'o' | 's' | 'i' | 'l' | 't' => {
                    if !last_char_special || self.peek(1) != '\'' {
                        let t = last_text!(self);
                        self.consume_into(t);
                        next_char_special = false;
                    } else if ord_first_char(self.peek(2)) || self.peek(2) == '=' {
                        // attribute of a plain value: stays in the text
                        let t = last_text!(self);
                        self.consume_into(t);
                        let t = last_text!(self);
                        self.consume_into(t);
                        next_char_special = false;
                    } else if self.peek(2) != '&' {
                        let t = last_text!(self);
                        self.consume_into(t);
                        next_char_special = false;
                    } else {
                        // attribute of a variable symbol
                        while self.not_at(&[',', ')', ' ']) {
                            if self.peek(0) != '&' {
                                let t = last_text!(self);
                                self.consume_into(t);
                            } else if self.peek(1) == '&' {
                                let t = last_text!(self);
                                self.consume_into(t);
                                let t = last_text!(self);
                                self.consume_into(t);
                            } else {
                                push_last_text!(self);
                                let vs = self.lex_variable()?;
                                cc.push(ConcatPoint::Var(vs));
                                if self.at('.') {
                                    let s = self.cur_pos_adjusted();
                                    self.consume_hl(HlScope::Operator);
                                    cc.push(ConcatPoint::Dot(self.adjust(Range::new(s, self.cur_pos()))));
                                }
                            }
                        }
                    }
                }

                c => {
                    next_char_special = !ord_char(c);
                    let t = last_text!(self);
                    self.consume_into(t);
                }
            }
        }
    }

    fn process_macro_list(&mut self, cc: &mut Vec<ConcatChain>) -> PResult<()> {
        debug_assert!(self.at('('));
        self.consume_hl(HlScope::Operator);

        if self.at(')') {
            self.consume_hl(HlScope::Operator);
            return Ok(());
        }

        let mut chain = ConcatChain::new();
        self.lex_macro_operand(&mut chain, true)?;
        cc.push(chain);

        while self.at(',') {
            self.consume_hl(HlScope::Operator);
            self.process_optional_line_remark();
            let mut chain = ConcatChain::new();
            self.lex_macro_operand(&mut chain, true)?;
            cc.push(chain);
        }

        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        Ok(())
    }

    /// Parse a macro operand list (the whole operand field).
    pub fn macro_ops(mut self) -> ParsedOperands {
        let input_start = self.cur_pos_adjusted();
        if self.eof() {
            return self.into_result(Vec::new(), Range::point(input_start));
        }

        let mut result: Vec<Operand> = Vec::new();
        let line_start = self.cur_pos_adjusted();
        let mut start = line_start;
        let mut cc = ConcatChain::new();
        let mut pending = true;

        macro_rules! push_operand {
            ($self:ident) => {
                if pending {
                    let r = $self.adjust(Range::new(start, $self.cur_pos()));
                    if cc.is_empty() {
                        result.push(Operand::Empty { range: r });
                    } else {
                        let mut chain = std::mem::take(&mut cc);
                        clear_chain(&mut chain);
                        result.push(Operand::Macro { chain, range: r });
                    }
                }
            };
        }

        while !self.eof() {
            match self.peek(0) {
                ' ' => {
                    push_operand!(self);
                    pending = false;
                    self.lex_last_remark();
                    break;
                }

                ',' => {
                    push_operand!(self);
                    self.consume_hl(HlScope::Operator);
                    self.process_optional_line_remark();
                    start = self.cur_pos_adjusted();
                }

                ')' => {
                    self.add_diag(Diagnostic::s0012);
                    break;
                }

                '(' => {
                    let mut nested = Vec::new();
                    if self.process_macro_list(&mut nested).is_err() {
                        break;
                    }
                    cc.push(ConcatPoint::Sublist(nested));
                }

                c if matches!(c, 'O' | 'S' | 'I' | 'L' | 'T' | 'o' | 's' | 'i' | 'l' | 't')
                    && self.peek(1) == '\'' =>
                {
                    if self.lex_macro_operand(&mut cc, true).is_err() {
                        break;
                    }
                }

                c if ord_first_char(c) => {
                    // leading ordinary run, possibly a keyword parameter
                    let run_start = self.cur_pos_adjusted();
                    let mut value = String::new();
                    while self.is_ord() {
                        self.consume_into(&mut value);
                    }
                    let r = self.adjust(Range::new(run_start, self.cur_pos()));
                    self.add_hl_adjusted(r, HlScope::Operand);
                    cc.push(ConcatPoint::Str(CharStr::new(value, r)));

                    let mut next_char_special = false;
                    if self.at('=') {
                        let s = self.cur_pos_adjusted();
                        self.consume();
                        cc.push(ConcatPoint::Equals(self.adjust(Range::new(s, self.cur_pos()))));
                        next_char_special = true;
                    }
                    if matches!(self.peek(0), EOF_CHAR | ' ' | ',') {
                        continue;
                    }
                    if self.lex_macro_operand(&mut cc, next_char_special).is_err() {
                        break;
                    }
                }

                _ => {
                    if self.lex_macro_operand(&mut cc, true).is_err() {
                        break;
                    }
                }
            }
        }
        push_operand!(self);

        let range = Range::new(line_start, self.cur_pos());
        self.into_result(result, range)
    }

    // --- operand field drivers ---

    fn into_result(self, operands: Vec<Operand>, op_range: Range) -> ParsedOperands {
        ParsedOperands {
            operands,
            op_range: self.provider.adjust_range(op_range),
            remarks: self.remarks,
            literals: self.literals,
            failed: self.error_signaled,
        }
    }

    fn operand_list<F>(mut self, mut one: F) -> ParsedOperands
    where
        F: FnMut(&mut Self) -> PResult<Operand>,
    {
        let list_start = self.cur_pos_adjusted();
        let mut result: Vec<Operand> = Vec::new();

        if self.eof() {
            return self.into_result(result, Range::point(list_start));
        }

        loop {
            let op_start = self.cur_pos_adjusted();
            if self.eof() {
                result.push(Operand::Empty {
                    range: self.adjust(Range::point(op_start)),
                });
                break;
            }
            match self.peek(0) {
                ',' => {
                    result.push(Operand::Empty {
                        range: self.adjust(Range::point(op_start)),
                    });
                    self.consume_hl(HlScope::Operator);
                    self.process_optional_line_remark();
                    continue;
                }
                ' ' => {
                    result.push(Operand::Empty {
                        range: self.adjust(Range::point(op_start)),
                    });
                    self.lex_last_remark();
                    break;
                }
                _ => {}
            }

            match one(&mut self) {
                Ok(op) => result.push(op),
                Err(Failure) => {
                    result.push(Operand::Empty {
                        range: self.adjust(Range::new(op_start, self.cur_pos())),
                    });
                    break;
                }
            }

            if self.eof() {
                break;
            }
            match self.peek(0) {
                ',' => {
                    self.consume_hl(HlScope::Operator);
                    self.process_optional_line_remark();
                }
                ' ' => {
                    self.lex_last_remark();
                    break;
                }
                _ => {
                    self.add_diag(Diagnostic::s0002);
                    break;
                }
            }
        }

        let range = Range::new(list_start, self.cur_pos());
        self.into_result(result, range)
    }

    fn lex_mach_operand(&mut self) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();
        let disp = self.lex_mach_expr()?;

        if !self.at('(') {
            return Ok(Operand::Machine(MachOperand::Expr(disp)));
        }

        self.consume_hl(HlScope::Operator);
        let mut first = None;
        let mut second = None;
        if self.at(',') {
            self.consume_hl(HlScope::Operator);
            self.process_optional_line_remark();
            second = Some(self.lex_mach_expr()?);
        } else {
            first = Some(self.lex_mach_expr()?);
            if self.at(',') {
                self.consume_hl(HlScope::Operator);
                self.process_optional_line_remark();
                second = Some(self.lex_mach_expr()?);
            }
        }
        self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;

        Ok(Operand::Machine(MachOperand::Address {
            displacement: disp,
            first,
            second,
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    /// Machine operand list.
    pub fn mach_ops(self) -> ParsedOperands {
        self.operand_list(Self::lex_mach_operand)
    }

    fn lex_dat_operand(&mut self) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();
        let mut dd = self.lex_data_def_base()?;
        if self.at('\'') || self.at('(') {
            dd.nominal = Some(self.lex_literal_nominal()?);
        }
        Ok(Operand::DataDef {
            data_def: dd,
            range: self.adjust(Range::new(start, self.cur_pos())),
        })
    }

    /// Data-definition operand list (`DC`, `DS`, `DXD`).
    pub fn dat_ops(self) -> ParsedOperands {
        self.operand_list(Self::lex_dat_operand)
    }

    fn lex_complex_args(&mut self) -> PResult<Vec<String>> {
        debug_assert!(self.at('('));
        self.consume_hl(HlScope::Operator);

        let mut args = Vec::new();
        let mut current = String::new();
        let mut depth = 0usize;

        loop {
            if self.eof() {
                self.add_diag(Diagnostic::s0011);
                return Err(Failure);
            }
            match self.peek(0) {
                '(' => {
                    depth += 1;
                    self.consume_into(&mut current);
                }
                ')' if depth == 0 => {
                    self.consume_hl(HlScope::Operator);
                    if !current.is_empty() {
                        args.push(current);
                    }
                    return Ok(args);
                }
                ')' => {
                    depth -= 1;
                    self.consume_into(&mut current);
                }
                ',' if depth == 0 => {
                    args.push(std::mem::take(&mut current));
                    self.consume_hl(HlScope::Operator);
                }
                '\'' => {
                    self.consume_into(&mut current);
                    loop {
                        if self.eof() {
                            self.add_diag(Diagnostic::s0005);
                            return Err(Failure);
                        }
                        let quote = self.at('\'');
                        self.consume_into(&mut current);
                        if quote {
                            break;
                        }
                    }
                }
                ' ' => {
                    self.add_diag(Diagnostic::s0011);
                    return Err(Failure);
                }
                _ => self.consume_into(&mut current),
            }
        }
    }

    fn lex_asm_operand(&mut self, expr_position: bool) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();

        if self.at('\'') {
            let value = self.lex_mach_string()?;
            return Ok(Operand::Assembler(AsmOperand::String {
                value,
                range: self.adjust(Range::new(start, self.cur_pos())),
            }));
        }

        if expr_position {
            let e = self.lex_mach_expr()?;
            if self.at('(') {
                self.consume_hl(HlScope::Operator);
                let end = self.lex_mach_expr()?;
                self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
                return Ok(Operand::Assembler(AsmOperand::BaseEnd {
                    base: e,
                    end,
                    range: self.adjust(Range::new(start, self.cur_pos())),
                }));
            }
            return Ok(Operand::Assembler(AsmOperand::Expr {
                expr: e,
                range: self.adjust(Range::new(start, self.cur_pos())),
            }));
        }

        if self.is_ord_first() {
            let (keyword, r) = self.lex_id()?;
            self.add_hl_adjusted(r, HlScope::Operand);
            if self.at('(') {
                let args = self.lex_complex_args()?;
                return Ok(Operand::Assembler(AsmOperand::Complex {
                    keyword,
                    args,
                    range: self.adjust(Range::new(start, self.cur_pos())),
                }));
            }
            return Ok(Operand::Assembler(AsmOperand::Plain {
                value: keyword,
                range: self.adjust(Range::new(start, self.cur_pos())),
            }));
        }

        let e = self.lex_mach_expr()?;
        Ok(Operand::Assembler(AsmOperand::Expr {
            expr: e,
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    /// Assembler operand list. `expr_position` selects the
    /// machine-expression grammar for the operands (USING, EQU, ORG, ...).
    pub fn asm_ops(self, expr_position: bool) -> ParsedOperands {
        self.operand_list(move |p| p.lex_asm_operand(expr_position))
    }

    fn lex_ca_expr_operand(&mut self) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();
        let expr = self.lex_expr_general()?;
        Ok(Operand::Ca(CaOperand::Expr {
            expr,
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    /// Conditional-assembly expression operands (SETx, ACTR, ...).
    pub fn ca_expr_ops(self) -> ParsedOperands {
        self.operand_list(Self::lex_ca_expr_operand)
    }

    fn lex_ca_branch_operand(&mut self) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();
        let mut expr = None;

        if self.at('(') {
            self.consume_hl(HlScope::Operator);
            expr = Some(self.lex_expr_general()?);
            self.match_char_hl(')', HlScope::Operator, Diagnostic::s0011)?;
        }

        if !self.at('.') {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        let seq_start = self.cur_pos_adjusted();
        self.consume();
        if !self.is_ord_first() {
            self.add_diag_or_eof(Diagnostic::s0002);
            return Err(Failure);
        }
        let (name, _) = self.lex_id()?;
        let seq_range = self.adjust(Range::new(seq_start, self.cur_pos()));
        self.add_hl_adjusted(seq_range, HlScope::SeqSymbol);

        Ok(Operand::Ca(CaOperand::Branch {
            expr,
            seq: SeqSymbol {
                name,
                range: seq_range,
            },
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    /// Branching operands of AIF/AGO.
    pub fn ca_branch_ops(self) -> ParsedOperands {
        self.operand_list(Self::lex_ca_branch_operand)
    }

    fn lex_ca_var_def_operand(&mut self) -> PResult<Operand> {
        let start = self.cur_pos_adjusted();
        if !self.at('&') {
            self.add_diag_or_eof(Diagnostic::s0008);
            return Err(Failure);
        }
        let symbol = self.lex_variable()?;
        Ok(Operand::Ca(CaOperand::VarDef {
            symbol,
            range: self.adjust(Range::new(start, self.cur_pos())),
        }))
    }

    /// Variable-definition operands of GBLx/LCLx.
    pub fn ca_var_def_ops(self) -> ParsedOperands {
        self.operand_list(Self::lex_ca_var_def_operand)
    }

    /// Operandless statements: the whole field is a remark.
    pub fn noop_ops(mut self) -> ParsedOperands {
        let start = self.cur_pos_adjusted();
        if !self.eof() {
            self.lex_last_remark();
        }
        self.into_result(Vec::new(), Range::point(start))
    }
}
