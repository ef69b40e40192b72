//! End-to-end statement parsing over logical lines.

use zasm_catalog::{InstructionCatalog, SystemArchitecture};
use zasm_lex::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};
use zasm_par::ast::{AsmOperand, CaExpr, CaOperand, ConcatPoint, MachExpr, MachOperand, Operand};
use zasm_par::fields::{
    extract_ictl, parse_operand_field, split_statement, Label, ParsedStatement, ParserMetrics,
    ProcessingForm, ProcessingStatus,
};
use zasm_par::parser::{OperandParser, OperandText, ParserCtx};
use zasm_par::range_provider::RangeProvider;
use zasm_util::diagnostic::DiagnosticCollector;
use zasm_util::span::{Position, Range};

fn catalog() -> InstructionCatalog {
    InstructionCatalog::new(SystemArchitecture::Uni)
}

fn parse(source: &str) -> (ParsedStatement, DiagnosticCollector) {
    let catalog = catalog();
    let diags = DiagnosticCollector::new();
    let mut input = source;
    let mut line = LogicalLine::default();
    assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));
    let stmt = split_statement(&line, 0, &DEFAULT_ICTL, &catalog, false, false, &diags, None);
    (stmt, diags)
}

#[test]
fn machine_statement_basics() {
    let (stmt, diags) = parse("LABEL    LR    1,2");
    assert!(matches!(stmt.label, Some(Label::Ord { ref name, .. }) if name == "LABEL"));
    assert_eq!(stmt.instruction.as_ref().unwrap().name, "LR");
    assert_eq!(stmt.form, ProcessingForm::Mach);
    assert_eq!(stmt.operands.len(), 2);
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn machine_address_operand() {
    let (stmt, diags) = parse("         LA    1,TABLE(2,3)");
    assert_eq!(stmt.operands.len(), 2);
    match &stmt.operands[1] {
        Operand::Machine(MachOperand::Address {
            displacement,
            first,
            second,
            ..
        }) => {
            assert!(matches!(displacement, MachExpr::Symbol { name, .. } if name == "TABLE"));
            assert!(first.is_some());
            assert!(second.is_some());
        }
        other => panic!("expected address operand, got {other:?}"),
    }
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn machine_operand_omitted_index() {
    let (stmt, _) = parse("         ST    1,8(,13)");
    match &stmt.operands[1] {
        Operand::Machine(MachOperand::Address { first, second, .. }) => {
            assert!(first.is_none());
            assert!(second.is_some());
        }
        other => panic!("expected address operand, got {other:?}"),
    }
}

#[test]
fn continuation_with_remark_spans_lines() {
    let source = format!(
        "{:<71}X\n               3)                  THE BASE\n",
        "         L     1,A(2,"
    );
    let (stmt, diags) = parse(&source);

    assert_eq!(stmt.operands.len(), 2);
    match &stmt.operands[1] {
        Operand::Machine(MachOperand::Address {
            displacement,
            first,
            second,
            range,
        }) => {
            assert!(matches!(displacement, MachExpr::Symbol { name, .. } if name == "A"));
            assert!(first.is_some());
            assert!(second.is_some());
            assert_eq!(range.start.line, 0);
            assert_eq!(range.end.line, 1);
        }
        other => panic!("expected address operand, got {other:?}"),
    }
    // the remark sits on the continuation line
    assert_eq!(stmt.remarks.len(), 1);
    assert_eq!(stmt.remarks[0].start.line, 1);
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn bad_continuation_reports_single_diagnostic() {
    let source = format!(
        "{:<71}X\n   BADINDENT   ,2\n",
        "         L     1,A"
    );
    let (stmt, diags) = parse(&source);

    assert!(stmt.continuation_error);
    let all = diags.diagnostics();
    let ce: Vec<_> = all.iter().filter(|d| d.code == "CE001").collect();
    assert_eq!(ce.len(), 1);
    // the statement is still parsed
    assert!(stmt.instruction.is_some());
    assert!(!stmt.operands.is_empty());
}

#[test]
fn seta_expression_shape() {
    let (stmt, diags) = parse("&A       SETA  (1+2)*3");
    assert_eq!(stmt.form, ProcessingForm::Ca(zasm_par::CaForm::Expr));
    assert!(matches!(stmt.label, Some(Label::Concat { .. })));

    assert_eq!(stmt.operands.len(), 1);
    match &stmt.operands[0] {
        Operand::Ca(CaOperand::Expr { expr, .. }) => match expr {
            CaExpr::Binary { lhs, .. } => {
                assert!(matches!(
                    &**lhs,
                    CaExpr::ExprList { parenthesized: true, .. }
                ));
            }
            other => panic!("expected binary expression, got {other:?}"),
        },
        other => panic!("expected CA expression operand, got {other:?}"),
    }
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn aif_branch_operand() {
    let (stmt, diags) = parse("         AIF   (&X EQ 2).DONE");
    match &stmt.operands[0] {
        Operand::Ca(CaOperand::Branch { expr, seq, .. }) => {
            assert!(expr.is_some());
            assert_eq!(seq.name, "DONE");
        }
        other => panic!("expected branch operand, got {other:?}"),
    }
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn gbl_var_definitions() {
    let (stmt, diags) = parse("         GBLA  &X,&Y(10)");
    assert_eq!(stmt.operands.len(), 2);
    assert!(matches!(
        stmt.operands[1],
        Operand::Ca(CaOperand::VarDef { .. })
    ));
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn sequence_symbol_label() {
    let (stmt, diags) = parse(".LOOP    ANOP");
    assert!(matches!(stmt.label, Some(Label::Seq { ref name, .. }) if name == "LOOP"));
    assert!(stmt.operands.is_empty());
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn macro_call_operands() {
    let (stmt, diags) = parse("         MYMAC PARM1,KEY=VAL,(A,B),'QUOTED ''STRING'''");
    assert_eq!(stmt.form, ProcessingForm::Mac);
    assert_eq!(stmt.operands.len(), 4);

    match &stmt.operands[1] {
        Operand::Macro { chain, .. } => {
            assert!(chain.iter().any(|p| matches!(p, ConcatPoint::Equals(_))));
        }
        other => panic!("expected macro operand, got {other:?}"),
    }
    match &stmt.operands[2] {
        Operand::Macro { chain, .. } => {
            assert!(matches!(chain[0], ConcatPoint::Sublist(ref l) if l.len() == 2));
        }
        other => panic!("expected sublist operand, got {other:?}"),
    }
    match &stmt.operands[3] {
        Operand::Macro { chain, .. } => match &chain[0] {
            ConcatPoint::Str(s) => assert_eq!(s.value, "'QUOTED ''STRING'''"),
            other => panic!("expected string run, got {other:?}"),
        },
        other => panic!("expected macro operand, got {other:?}"),
    }
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn macro_operand_with_variable() {
    let (stmt, _) = parse("         MYMAC &VAR.SUFFIX");
    match &stmt.operands[0] {
        Operand::Macro { chain, .. } => {
            assert!(chain.iter().any(|p| matches!(p, ConcatPoint::Var(_))));
            assert!(chain.iter().any(|p| matches!(p, ConcatPoint::Dot(_))));
        }
        other => panic!("expected macro operand, got {other:?}"),
    }
}

#[test]
fn data_definition_modifiers() {
    let (stmt, diags) = parse("FIELD    DC    3FL4'0'");
    assert_eq!(stmt.form, ProcessingForm::Dat);
    match &stmt.operands[0] {
        Operand::DataDef { data_def, .. } => {
            assert!(data_def.dupl_factor.is_some());
            assert_eq!(data_def.type_, 'F');
            assert!(data_def.length.is_some());
            assert!(data_def.nominal.is_some());
        }
        other => panic!("expected data definition, got {other:?}"),
    }
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn data_definition_bit_length() {
    let (stmt, _) = parse("         DS    BL.3");
    match &stmt.operands[0] {
        Operand::DataDef { data_def, .. } => {
            assert_eq!(data_def.length_type, zasm_par::ast::LengthType::Bit);
        }
        other => panic!("expected data definition, got {other:?}"),
    }
}

#[test]
fn data_definition_type_r_without_goff() {
    let (stmt, _) = parse("         DC    R(SYMBOL)");
    match &stmt.operands[0] {
        Operand::DataDef { data_def, .. } => assert_eq!(data_def.type_, 'r'),
        other => panic!("expected data definition, got {other:?}"),
    }
}

#[test]
fn machine_literal_operand() {
    let (stmt, diags) = parse("         L     1,=F'12'");
    match &stmt.operands[1] {
        Operand::Machine(MachOperand::Expr(MachExpr::Literal(l))) => {
            assert_eq!(l.text, "=F'12'");
        }
        other => panic!("expected literal operand, got {other:?}"),
    }
    assert_eq!(stmt.literals.len(), 1);
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn unterminated_string_yields_s0005() {
    let (_, diags) = parse("         MYMAC 'UNTERMINATED");
    assert!(diags.diagnostics().iter().any(|d| d.code == "S0005"));
}

#[test]
fn unbalanced_parenthesis_yields_s0011() {
    let (_, diags) = parse("         LA    1,(2");
    assert!(diags.diagnostics().iter().any(|d| d.code == "S0011"));
}

#[test]
fn assembler_using_operands() {
    let (stmt, diags) = parse("         USING BASE(END),12");
    assert_eq!(stmt.form, ProcessingForm::Asm);
    assert!(matches!(
        stmt.operands[0],
        Operand::Assembler(AsmOperand::BaseEnd { .. })
    ));
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
}

#[test]
fn assembler_arity_violation() {
    let (_, diags) = parse("         CNOP  0");
    assert!(diags.diagnostics().iter().any(|d| d.code == "A010"));
}

#[test]
fn comment_lines_are_ignored() {
    let (stmt, diags) = parse("* a comment line");
    assert_eq!(stmt.form, ProcessingForm::Ignored);
    assert!(stmt.instruction.is_none());
    assert!(diags.diagnostics().is_empty());

    let (stmt, _) = parse(".* a macro comment");
    assert_eq!(stmt.form, ProcessingForm::Ignored);
}

#[test]
fn lone_label_yields_s0004() {
    let (_, diags) = parse("DANGLING");
    assert!(diags.diagnostics().iter().any(|d| d.code == "S0004"));
}

#[test]
fn ictl_extraction() {
    let (stmt, _) = parse("         ICTL  1,71,16");
    let layout = extract_ictl(&stmt).expect("valid ICTL");
    assert_eq!((layout.begin, layout.end, layout.continuation), (1, 71, 16));

    let (stmt, _) = parse("         ICTL  9");
    let layout = extract_ictl(&stmt).expect("valid ICTL");
    assert_eq!((layout.begin, layout.end, layout.continuation), (9, 71, 16));

    // end = 80 disables continuation
    let (stmt, _) = parse("         ICTL  1,80");
    let layout = extract_ictl(&stmt).expect("valid ICTL");
    assert_eq!(layout.continuation, 0);

    // explicit continue column incompatible with begin
    let (stmt, _) = parse("         ICTL  25,71,10");
    assert!(extract_ictl(&stmt).is_none());
}

#[test]
fn mach_expr_print_reparse_roundtrip() {
    let sources = ["1+2*3", "(A+B)/4", "-X+*", "BASE.SYM-2", "L'FIELD+1"];
    for source in sources {
        let text = OperandText::from_substituted(source, 0, 0, 0);
        let provider = RangeProvider::Identity;
        let parser = OperandParser::new(&text, 15, &provider, None, None, ParserCtx::default());
        let first = parser.mach_ops();
        let Operand::Machine(MachOperand::Expr(e1)) = &first.operands[0] else {
            panic!("expected expression for {source}");
        };

        let printed = e1.print();
        let text2 = OperandText::from_substituted(&printed, 0, 0, 0);
        let parser = OperandParser::new(&text2, 15, &provider, None, None, ParserCtx::default());
        let second = parser.mach_ops();
        let Operand::Machine(MachOperand::Expr(e2)) = &second.operands[0] else {
            panic!("expected expression for {printed}");
        };

        assert_eq!(e1.print(), e2.print(), "roundtrip failed for {source}");
    }
}

#[test]
fn loctr_length_in_machine_context() {
    let (stmt, diags) = parse("         MVC   0(L'*,1),SRC");
    assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
    assert_eq!(stmt.operands.len(), 2);
}

#[test]
fn reparse_counts_metrics_and_decorates() {
    let mut metrics = ParserMetrics::default();
    let diags = DiagnosticCollector::new();
    let status = ProcessingStatus {
        form: ProcessingForm::Mach,
        opcode: "LR".to_string(),
        goff: false,
        loctr_len: Some(2),
    };
    let field_range = Range::new(Position::new(4, 15), Position::new(4, 20));

    let parsed = parse_operand_field(
        "1,2",
        true,
        field_range,
        15,
        15,
        &status,
        &diags,
        None,
        &mut metrics,
    );
    assert_eq!(metrics.reparsed_statements, 1);
    assert_eq!(parsed.operands.len(), 2);
    assert!(diags.diagnostics().is_empty());

    // diagnostics on substituted text carry the text
    let parsed = parse_operand_field(
        "1,'BAD",
        true,
        field_range,
        15,
        15,
        &status,
        &diags,
        None,
        &mut metrics,
    );
    assert!(parsed.failed);
    let all = diags.diagnostics();
    assert!(all.iter().any(|d| d.message.contains("1,'BAD")));
    // every range is clamped into the original field
    for op in &parsed.operands {
        let r = op.range();
        assert!(r.start >= field_range.start && r.end <= field_range.end);
    }
}

#[test]
fn reparse_standalone_loctr_is_error() {
    let mut metrics = ParserMetrics::default();
    let diags = DiagnosticCollector::new();
    let status = ProcessingStatus {
        form: ProcessingForm::Mach,
        opcode: "MVC".to_string(),
        goff: false,
        loctr_len: None,
    };
    let field_range = Range::new(Position::new(0, 15), Position::new(0, 30));

    let parsed = parse_operand_field(
        "0(L'*,1),SRC",
        false,
        field_range,
        15,
        15,
        &status,
        &diags,
        None,
        &mut metrics,
    );
    assert!(parsed.failed);
    assert!(diags.diagnostics().iter().any(|d| d.code == "S0002"));
}
