//! Statement field splitting and the statement re-parser.
//!
//! The splitter walks a logical line's code characters, extracts the label
//! and instruction fields, classifies the operation through the catalog,
//! and hands the operand text (per-segment pieces, joined with recorded
//! line boundaries) to the grammar the opcode class selects. Remark fields
//! are whatever the chosen grammar left unconsumed.
//!
//! The re-parser runs the same machinery over variable-substituted text
//! with a clamping range provider, so the macro engine gets AST nodes in
//! original-document coordinates.

use zasm_catalog::{find_assembler, find_ca, InstructionCatalog};
use zasm_lex::logical_line::{IctlLayout, LogicalLine, LogicalLineIter};
use zasm_util::diagnostic::{Diagnostic, DiagnosticConsumer};
use zasm_util::hl::{HlScope, HlSymbol, SourceInfoProcessor};
use zasm_util::span::{Position, Range};

use crate::ast::{clear_chain, AsmOperand, ConcatChain, MachExpr, Operand};
use crate::parser::{OperandParser, OperandText, ParsedOperands, ParserCtx};
use crate::range_provider::RangeProvider;
use crate::resolve::resolve_for_opcode;

/// Conditional-assembly operand field flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaForm {
    /// Expression operands (SETx, ACTR, AREAD, ASPACE, MHELP).
    Expr,
    /// Branching operands (AIF, AGO).
    Branch,
    /// Variable definitions (GBLx, LCLx).
    VarDef,
    /// Operandless (MACRO, MEND, MEXIT, ANOP, AEJECT).
    None,
}

/// Which operand grammar a statement uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessingForm {
    Ca(CaForm),
    /// Macro call: concatenation-chain operands.
    Mac,
    Asm,
    Mach,
    /// Data definition (DC, DS, DXD).
    Dat,
    /// Comment or blank line.
    Ignored,
}

/// Instructions whose assembler operands are machine expressions.
const ASM_EXPR_INSTRUCTIONS: &[&str] = &[
    "CCW", "CCW0", "CCW1", "CEJECT", "CNOP", "DROP", "END", "EQU", "EXITCTL", "ICTL", "ISEQ",
    "ORG", "SPACE", "START", "USING",
];

/// Classify an operation name through the catalog.
pub fn processing_form(catalog: &InstructionCatalog, name: &str) -> ProcessingForm {
    let upper = name.to_ascii_uppercase();

    if let Some(ca) = find_ca(&upper) {
        let form = if ca.operandless() {
            CaForm::None
        } else {
            match upper.as_str() {
                "AIF" | "AGO" => CaForm::Branch,
                "GBLA" | "GBLB" | "GBLC" | "LCLA" | "LCLB" | "LCLC" => CaForm::VarDef,
                _ => CaForm::Expr,
            }
        };
        return ProcessingForm::Ca(form);
    }
    if matches!(upper.as_str(), "DC" | "DS" | "DXD") {
        return ProcessingForm::Dat;
    }
    if find_assembler(&upper).is_some() {
        return ProcessingForm::Asm;
    }
    if catalog.find_machine(&upper).is_some() || catalog.find_mnemonic(&upper).is_some() {
        return ProcessingForm::Mach;
    }
    // unknown operations are treated as macro calls so IDE features keep
    // working; the macro engine decides their fate
    ProcessingForm::Mac
}

/// Instruction length for `L'*`, in bytes.
pub fn loctr_len_for(catalog: &InstructionCatalog, opcode: &str) -> i32 {
    let upper = opcode.to_ascii_uppercase();
    if let Some(mi) = catalog.find_machine(&upper) {
        return mi.format().len_bytes() as i32;
    }
    if let Some(m) = catalog.find_mnemonic(&upper) {
        return m.base.format().len_bytes() as i32;
    }
    1
}

/// The label field of a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Label {
    /// `.NAME` — a sequence symbol.
    Seq { name: String, range: Range },
    /// A label containing variable symbols, kept as a chain.
    Concat { chain: ConcatChain, range: Range },
    /// Ordinary (or model) label text.
    Ord { name: String, range: Range },
}

impl Label {
    pub fn range(&self) -> Range {
        match self {
            Label::Seq { range, .. } | Label::Concat { range, .. } | Label::Ord { range, .. } => *range,
        }
    }
}

/// The instruction field.
#[derive(Clone, Debug, PartialEq)]
pub struct InstructionField {
    pub name: String,
    pub range: Range,
}

/// A fully split and parsed statement.
#[derive(Debug)]
pub struct ParsedStatement {
    pub label: Option<Label>,
    pub instruction: Option<InstructionField>,
    pub form: ProcessingForm,
    pub operands: Vec<Operand>,
    pub op_range: Range,
    pub remarks: Vec<Range>,
    pub literals: Vec<crate::ast::Literal>,
    pub stmt_range: Range,
    pub continuation_error: bool,
}

fn pos_of(it: &LogicalLineIter<'_, '_>, base_line: usize) -> Position {
    let (_, segment) = it.coordinates();
    Position::new(base_line + segment, it.utf16_column())
}

fn operand_text_at(line: &LogicalLine<'_>, it: &LogicalLineIter<'_, '_>, base_line: usize) -> OperandText {
    if it.at_end() {
        return OperandText::default();
    }
    let seg = it.segment_index();
    let mut pieces = vec![it.rest_of_code()];
    for s in &line.segments[seg + 1..] {
        pieces.push(s.code());
    }
    let (char_col, _) = it.coordinates();
    OperandText::from_pieces(&pieces, base_line + seg, char_col, it.utf16_column())
}

fn run_form(
    form: ProcessingForm,
    opcode: &str,
    text: &OperandText,
    cont: usize,
    provider: &RangeProvider,
    diags: Option<&dyn DiagnosticConsumer>,
    hl: Option<&SourceInfoProcessor>,
    ctx: ParserCtx,
) -> ParsedOperands {
    let parser = OperandParser::new(text, cont, provider, diags, hl, ctx);
    match form {
        ProcessingForm::Mac => parser.macro_ops(),
        ProcessingForm::Mach => parser.mach_ops(),
        ProcessingForm::Dat => parser.dat_ops(),
        ProcessingForm::Asm => {
            let expr_position = ASM_EXPR_INSTRUCTIONS.contains(&opcode.to_ascii_uppercase().as_str());
            parser.asm_ops(expr_position)
        }
        ProcessingForm::Ca(CaForm::Expr) => parser.ca_expr_ops(),
        ProcessingForm::Ca(CaForm::Branch) => parser.ca_branch_ops(),
        ProcessingForm::Ca(CaForm::VarDef) => parser.ca_var_def_ops(),
        ProcessingForm::Ca(CaForm::None) | ProcessingForm::Ignored => parser.noop_ops(),
    }
}

fn normalize_operands(operands: &mut Vec<Operand>) {
    if operands.len() == 1 && operands[0].is_empty_operand() {
        operands.clear();
    }
}

/// Split a logical line into its fields and parse the operand field with
/// the grammar selected by the catalog.
#[allow(clippy::too_many_arguments)]
pub fn split_statement(
    line: &LogicalLine<'_>,
    base_line: usize,
    opts: &IctlLayout,
    catalog: &InstructionCatalog,
    goff: bool,
    process_allowed: bool,
    diags: &dyn DiagnosticConsumer,
    hl: Option<&SourceInfoProcessor>,
) -> ParsedStatement {
    let stmt_end = match line.segments.last() {
        Some(s) => Position::new(
            base_line + line.segments.len() - 1,
            s.line.chars().map(char::len_utf16).sum(),
        ),
        None => Position::new(base_line, 0),
    };
    let stmt_range = Range::new(Position::new(base_line, 0), stmt_end);

    let mut stmt = ParsedStatement {
        label: None,
        instruction: None,
        form: ProcessingForm::Ignored,
        operands: Vec::new(),
        op_range: Range::point(stmt_range.start),
        remarks: Vec::new(),
        literals: Vec::new(),
        stmt_range,
        continuation_error: line.continuation_error,
    };

    if line.continuation_error {
        diags.add_diagnostic(Diagnostic::ce001(Range::point(stmt_range.start)));
    }

    let mut it = line.code_iter();

    // comment lines: '*' or '.*' in the begin column
    let first = it.peek();
    let second = {
        let mut probe = it;
        probe.next();
        probe.peek()
    };
    let process_stmt = first == Some('*')
        && process_allowed
        && it
            .rest_of_code()
            .get(..8)
            .is_some_and(|p| p.eq_ignore_ascii_case("*PROCESS"));
    if !process_stmt && (first == Some('*') || (first == Some('.') && second == Some('*'))) {
        if let Some(hl) = hl {
            for (i, s) in line.segments.iter().enumerate() {
                let width: usize = s.code().chars().map(char::len_utf16).sum();
                let start: usize = s.prefix().chars().map(char::len_utf16).sum();
                hl.add_hl_symbol(HlSymbol::new(
                    Range::new(
                        Position::new(base_line + i, start),
                        Position::new(base_line + i, start + width),
                    ),
                    HlScope::Comment,
                ));
            }
        }
        return stmt;
    }

    // label field; a *PROCESS statement has none
    let label_start = pos_of(&it, base_line);
    let mut label_text = String::new();
    let label_it = it;
    if !process_stmt {
        while let Some(c) = it.peek() {
            if c == ' ' {
                break;
            }
            label_text.push(c);
            it.next();
        }
    }
    let label_range = Range::new(label_start, pos_of(&it, base_line));

    if !label_text.is_empty() {
        let label = if let Some(seq) = label_text.strip_prefix('.') {
            Label::Seq {
                name: seq.to_string(),
                range: label_range,
            }
        } else if label_text.contains('&') {
            let text = operand_text_for_label(&label_it, &label_text, base_line);
            let provider = RangeProvider::Identity;
            let parser = OperandParser::new(
                &text,
                opts.continuation.saturating_sub(1),
                &provider,
                Some(diags),
                hl,
                ParserCtx::default(),
            );
            let mut parsed = parser.macro_ops();
            let chain = match parsed.operands.pop() {
                Some(Operand::Macro { mut chain, .. }) => {
                    clear_chain(&mut chain);
                    chain
                }
                _ => ConcatChain::new(),
            };
            Label::Concat {
                chain,
                range: label_range,
            }
        } else {
            Label::Ord {
                name: label_text.clone(),
                range: label_range,
            }
        };
        if let Some(hl) = hl {
            if let Label::Seq { .. } = label {
                hl.add_hl_symbol(HlSymbol::new(label_range, HlScope::SeqSymbol));
            } else {
                hl.add_hl_symbol(HlSymbol::new(label_range, HlScope::Label));
            }
        }
        stmt.label = Some(label);
    }

    // instruction field; *PROCESS is its own eight-character instruction
    while it.peek() == Some(' ') {
        it.next();
    }
    let instr_start = pos_of(&it, base_line);
    let mut instr_text = String::new();
    if process_stmt {
        for _ in 0..8 {
            if let Some(c) = it.peek() {
                instr_text.push(c);
                it.next();
            }
        }
    } else {
        while let Some(c) = it.peek() {
            if c == ' ' {
                break;
            }
            instr_text.push(c);
            it.next();
        }
    }

    if instr_text.is_empty() {
        if stmt.label.is_some() {
            diags.add_diagnostic(Diagnostic::s0004(Range::point(stmt_range.start)));
        }
        return stmt;
    }

    let instr_range = Range::new(instr_start, pos_of(&it, base_line));
    if let Some(hl) = hl {
        hl.add_hl_symbol(HlSymbol::new(instr_range, HlScope::Instruction));
    }

    let form = processing_form(catalog, &instr_text);
    stmt.form = form;
    stmt.instruction = Some(InstructionField {
        name: instr_text.clone(),
        range: instr_range,
    });

    // operand field starts at the first non-blank after the instruction
    while it.peek() == Some(' ') {
        it.next();
    }
    let text = operand_text_at(line, &it, base_line);

    let ctx = ParserCtx {
        goff,
        loctr_len: Some(loctr_len_for(catalog, &instr_text)),
    };
    let provider = RangeProvider::Identity;
    let parsed = run_form(
        form,
        &instr_text,
        &text,
        opts.continuation.saturating_sub(1),
        &provider,
        Some(diags),
        hl,
        ctx,
    );

    stmt.operands = parsed.operands;
    stmt.op_range = parsed.op_range;
    stmt.remarks = parsed.remarks;
    stmt.literals = parsed.literals;
    normalize_operands(&mut stmt.operands);

    if let Some(hl) = hl {
        for r in &stmt.remarks {
            hl.add_hl_symbol(HlSymbol::new(*r, HlScope::Remark));
        }
    }

    // CA expression typing
    if matches!(form, ProcessingForm::Ca(_)) {
        resolve_for_opcode(&stmt.operands, &instr_text, diags);
    }

    // assembler arity
    if form == ProcessingForm::Asm && !parsed.failed {
        if let Some(asm) = find_assembler(&instr_text.to_ascii_uppercase()) {
            if !asm.arity_ok(stmt.operands.len()) {
                diags.add_diagnostic(Diagnostic::a010(asm.name(), stmt.op_range));
            }
        }
    }

    stmt
}

fn operand_text_for_label(it: &LogicalLineIter<'_, '_>, label_text: &str, base_line: usize) -> OperandText {
    let (char_col, seg) = it.coordinates();
    OperandText::from_pieces(&[label_text], base_line + seg, char_col, it.utf16_column())
}

/// Extract a new column regime from a parsed `ICTL` statement.
///
/// Returns `None` when the statement is not a valid ICTL; diagnostics are
/// the caller's business (the assembler arity check already ran).
pub fn extract_ictl(stmt: &ParsedStatement) -> Option<IctlLayout> {
    let instr = stmt.instruction.as_ref()?;
    if !instr.name.eq_ignore_ascii_case("ICTL") {
        return None;
    }

    let mut values = [None::<i32>; 3];
    for (i, op) in stmt.operands.iter().enumerate().take(3) {
        if let Operand::Assembler(AsmOperand::Expr {
            expr: MachExpr::Constant { value, .. },
            ..
        }) = op
        {
            values[i] = Some(*value);
        } else if !op.is_empty_operand() {
            return None;
        }
    }

    let begin = values[0]? as usize;
    let end = values[1].map_or(71, |v| v as usize);
    let continuation = values[2].map_or(16, |v| v as usize);
    let continuation_defaulted = values[2].is_none();

    if !(1..=40).contains(&begin) {
        return None;
    }
    if !(41..=80).contains(&end) {
        return None;
    }
    let mut continuation = if end == 80 { 0 } else { continuation };
    if continuation != 0 && !((begin + 1)..=40).contains(&continuation) {
        if !continuation_defaulted {
            return None;
        }
        // the default continue column does not fit the requested begin
        continuation = 0;
    }

    Some(IctlLayout {
        begin,
        end,
        continuation,
        dbcs: false,
        eof_copy_rules: false,
    })
}

/// Counters of the surrounding context.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParserMetrics {
    pub reparsed_statements: usize,
}

/// The operation context of a statement being re-parsed.
#[derive(Debug)]
pub struct ProcessingStatus {
    pub form: ProcessingForm,
    pub opcode: String,
    pub goff: bool,
    pub loctr_len: Option<i32>,
}

struct DecoratingConsumer<'a> {
    inner: &'a dyn DiagnosticConsumer,
    substituted: Option<&'a str>,
}

impl DiagnosticConsumer for DecoratingConsumer<'_> {
    fn add_diagnostic(&self, mut diagnostic: Diagnostic) {
        if let Some(text) = self.substituted {
            diagnostic.message = format!("{} while substituting to '{}'", diagnostic.message, text);
        }
        self.inner.add_diagnostic(diagnostic);
    }
}

/// Re-parse an already-substituted operand field.
///
/// `field_range` is the model statement's operand field range; every
/// resulting AST range is mapped back into it. Diagnostic messages are
/// decorated with the substituted text when the substitution stayed on one
/// line.
#[allow(clippy::too_many_arguments)]
pub fn parse_operand_field(
    text: &str,
    after_substitution: bool,
    field_range: Range,
    logical_column: usize,
    cont_column: usize,
    status: &ProcessingStatus,
    diags: &dyn DiagnosticConsumer,
    hl: Option<&SourceInfoProcessor>,
    metrics: &mut ParserMetrics,
) -> ParsedOperands {
    metrics.reparsed_statements += 1;

    let single_line = !text.contains('\n');
    let decorated = DecoratingConsumer {
        inner: diags,
        substituted: (after_substitution && single_line).then_some(text),
    };

    let input = OperandText::from_substituted(
        text,
        field_range.start.line,
        logical_column,
        field_range.start.column,
    );
    let provider = RangeProvider::Clamped {
        original: field_range,
    };
    let ctx = ParserCtx {
        goff: status.goff,
        loctr_len: status.loctr_len,
    };

    let mut parsed = run_form(
        status.form,
        &status.opcode,
        &input,
        cont_column,
        &provider,
        Some(&decorated),
        hl,
        ctx,
    );

    normalize_operands(&mut parsed.operands);
    if after_substitution
        && parsed
            .operands
            .first()
            .is_some_and(|op| matches!(op, Operand::Model { .. }))
    {
        parsed.operands.clear();
    }
    if parsed.operands.is_empty() && parsed.op_range.is_empty() {
        parsed.op_range = field_range;
    }

    parsed
}
