//! Conditional-assembly expression kind resolution.
//!
//! The parser builds untyped trees; this pass walks them with the outer
//! expression kind declared by the CA instruction (A for SETA/ACTR/...,
//! B for SETB/AIF, C for SETC) and reports kind mismatches. Evaluation
//! itself, including arithmetic overflow, belongs to the consumer.

use zasm_util::diagnostic::{Diagnostic, DiagnosticConsumer};
use zasm_util::span::Range;

use crate::ast::{CaBinOp, CaExpr, CaOperand, Operand};

/// Expression kind of a CA context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprKind {
    A,
    B,
    C,
}

/// Relational operator names valid in logical expressions.
const RELATIONS: &[&str] = &["EQ", "GE", "GT", "LE", "LT", "NE"];
/// Boolean operator names valid in logical expressions.
const BOOLEANS: &[&str] = &["AND", "NOT", "OR", "XOR"];

fn is_relation(name: &str) -> bool {
    RELATIONS.contains(&name.to_ascii_uppercase().as_str())
}

fn is_boolean(name: &str) -> bool {
    BOOLEANS.contains(&name.to_ascii_uppercase().as_str())
}

/// A known built-in CA function: parameter arity and kinds.
struct CaFunction {
    name: &'static str,
    min_params: usize,
    max_params: usize,
    param_kind: ExprKind,
}

const fn f(name: &'static str, min_params: usize, max_params: usize, param_kind: ExprKind) -> CaFunction {
    CaFunction {
        name,
        min_params,
        max_params,
        param_kind,
    }
}

/// Built-in CA functions, sorted by name.
const CA_FUNCTIONS: &[CaFunction] = &[
    f("A2B", 1, 1, ExprKind::A),
    f("A2C", 1, 1, ExprKind::A),
    f("A2D", 1, 1, ExprKind::A),
    f("A2X", 1, 1, ExprKind::A),
    f("B2A", 1, 1, ExprKind::C),
    f("B2C", 1, 1, ExprKind::C),
    f("B2D", 1, 1, ExprKind::C),
    f("B2X", 1, 1, ExprKind::C),
    f("BYTE", 1, 1, ExprKind::A),
    f("C2A", 1, 1, ExprKind::C),
    f("C2B", 1, 1, ExprKind::C),
    f("C2D", 1, 1, ExprKind::C),
    f("C2X", 1, 1, ExprKind::C),
    f("D2A", 1, 1, ExprKind::C),
    f("D2B", 1, 1, ExprKind::C),
    f("D2C", 1, 1, ExprKind::C),
    f("D2X", 1, 1, ExprKind::C),
    f("DCLEN", 1, 1, ExprKind::C),
    f("DCVAL", 1, 1, ExprKind::C),
    f("DEQUOTE", 1, 1, ExprKind::C),
    f("DOUBLE", 1, 1, ExprKind::C),
    f("FIND", 2, 2, ExprKind::C),
    f("INDEX", 2, 2, ExprKind::C),
    f("ISBIN", 1, 1, ExprKind::C),
    f("ISDEC", 1, 1, ExprKind::C),
    f("ISHEX", 1, 1, ExprKind::C),
    f("ISSYM", 1, 1, ExprKind::C),
    f("LOWER", 1, 1, ExprKind::C),
    f("SIGNED", 1, 1, ExprKind::A),
    f("SLA", 2, 2, ExprKind::A),
    f("SLL", 2, 2, ExprKind::A),
    f("SRA", 2, 2, ExprKind::A),
    f("SRL", 2, 2, ExprKind::A),
    f("UPPER", 1, 1, ExprKind::C),
    f("X2A", 1, 1, ExprKind::C),
    f("X2B", 1, 1, ExprKind::C),
    f("X2C", 1, 1, ExprKind::C),
    f("X2D", 1, 1, ExprKind::C),
];

fn find_function(name: &str) -> Option<&'static CaFunction> {
    let upper = name.to_ascii_uppercase();
    CA_FUNCTIONS
        .binary_search_by(|i| i.name.cmp(upper.as_str()))
        .ok()
        .map(|i| &CA_FUNCTIONS[i])
}

/// Resolve one expression against the required kind.
pub fn resolve_expr(expr: &CaExpr, kind: ExprKind, diags: &dyn DiagnosticConsumer) {
    match expr {
        CaExpr::Constant { .. } | CaExpr::VarSym { .. } | CaExpr::AttrRef { .. } => {
            // valid in any kind; subscripts were parsed as expressions and
            // evaluate arithmetically
        }

        CaExpr::Symbol { name, range } => {
            // operator words outside a logical context are invalid
            if kind != ExprKind::B && (is_relation(name) || is_boolean(name)) {
                diags.add_diagnostic(Diagnostic::ce005(*range));
            }
        }

        CaExpr::String(s) => {
            if let Some(dupl) = &s.dupl {
                resolve_expr(dupl, ExprKind::A, diags);
            }
            if let Some(sub) = &s.substring {
                resolve_expr(&sub.start, ExprKind::A, diags);
                if let Some(end) = &sub.end {
                    resolve_expr(end, ExprKind::A, diags);
                }
            }
        }

        CaExpr::ExprList { exprs, range, .. } => {
            if kind == ExprKind::B {
                resolve_logical_list(exprs, *range, diags);
            } else if let [single] = exprs.as_slice() {
                resolve_expr(single, kind, diags);
            } else {
                // a space-separated list only means something as a logical
                // expression
                diags.add_diagnostic(Diagnostic::ce005(*range));
            }
        }

        CaExpr::Function {
            name,
            args,
            dupl,
            range,
        } => {
            if let Some(dupl) = dupl {
                resolve_expr(dupl, ExprKind::A, diags);
            }
            match find_function(name) {
                Some(func) => {
                    if args.len() < func.min_params {
                        diags.add_diagnostic(Diagnostic::ce013(name, func.min_params, *range));
                    } else if args.len() > func.max_params {
                        diags.add_diagnostic(Diagnostic::ce014(name, func.max_params, *range));
                    }
                    for arg in args {
                        resolve_expr(arg, func.param_kind, diags);
                    }
                }
                None => {
                    // subscripted variable-like terms pass through in C
                    // contexts; anything else is an unknown function
                    if kind != ExprKind::C {
                        diags.add_diagnostic(Diagnostic::ce004(name, *range));
                    }
                    for arg in args {
                        resolve_expr(arg, ExprKind::A, diags);
                    }
                }
            }
        }

        CaExpr::Unary { operand, .. } => resolve_expr(operand, ExprKind::A, diags),

        CaExpr::Binary { op, lhs, rhs, range } => match op {
            CaBinOp::Concat => {
                if kind == ExprKind::A {
                    diags.add_diagnostic(Diagnostic::ce005(*range));
                }
                resolve_expr(lhs, ExprKind::C, diags);
                resolve_expr(rhs, ExprKind::C, diags);
            }
            _ => {
                if kind == ExprKind::C {
                    diags.add_diagnostic(Diagnostic::ce005(*range));
                }
                resolve_expr(lhs, ExprKind::A, diags);
                resolve_expr(rhs, ExprKind::A, diags);
            }
        },
    }
}

/// Resolve a logical (B-kind) expression list: `[NOT]* term (op [NOT]* term)*`.
fn resolve_logical_list(exprs: &[CaExpr], range: Range, diags: &dyn DiagnosticConsumer) {
    let mut expect_operand = true;
    let mut i = 0;

    while i < exprs.len() {
        let e = &exprs[i];
        if expect_operand {
            // NOT chains stay in operand position
            if let CaExpr::Symbol { name, .. } = e {
                if name.eq_ignore_ascii_case("NOT") {
                    i += 1;
                    continue;
                }
            }
            resolve_operand_of_logical(e, diags);
            expect_operand = false;
        } else {
            match e {
                CaExpr::Symbol { name, range } if is_relation(name) || is_boolean(name) => {
                    if name.eq_ignore_ascii_case("NOT") {
                        diags.add_diagnostic(Diagnostic::ce005(*range));
                    }
                }
                _ => diags.add_diagnostic(Diagnostic::ce005(e.range())),
            }
            expect_operand = true;
        }
        i += 1;
    }

    if expect_operand && !exprs.is_empty() {
        // a trailing operator has nothing to apply to
        diags.add_diagnostic(Diagnostic::ce005(range));
    }
}

fn resolve_operand_of_logical(e: &CaExpr, diags: &dyn DiagnosticConsumer) {
    match e {
        // comparison operands may themselves be arithmetic or character
        // terms; nested lists recurse as logical expressions
        CaExpr::ExprList { exprs, range, .. } => resolve_logical_list(exprs, *range, diags),
        CaExpr::String(_) => resolve_expr(e, ExprKind::C, diags),
        _ => resolve_expr(e, ExprKind::A, diags),
    }
}

/// Whether an expression satisfies the SETB/AIF surface requirement of a
/// parenthesized logical expression.
fn is_setb_compatible(expr: &CaExpr) -> bool {
    matches!(
        expr,
        CaExpr::ExprList { parenthesized: true, .. }
            | CaExpr::Constant { .. }
            | CaExpr::VarSym { .. }
            | CaExpr::AttrRef { .. }
    )
}

/// Resolve the parsed operands of a CA instruction by its opcode.
pub fn resolve_for_opcode(operands: &[Operand], opcode: &str, diags: &dyn DiagnosticConsumer) {
    let upper = opcode.to_ascii_uppercase();
    let kind = match upper.as_str() {
        "SETA" | "ACTR" | "ASPACE" | "AGO" | "MHELP" => ExprKind::A,
        "SETB" | "AIF" => ExprKind::B,
        "SETC" => ExprKind::C,
        _ => return,
    };
    let requires_parenthesis = matches!(upper.as_str(), "SETB" | "AIF");

    for op in operands {
        let expr = match op {
            Operand::Ca(CaOperand::Expr { expr, .. }) => Some(expr),
            Operand::Ca(CaOperand::Branch { expr: Some(expr), .. }) => Some(expr),
            _ => None,
        };
        let Some(expr) = expr else {
            continue;
        };
        if requires_parenthesis && !is_setb_compatible(expr) {
            diags.add_diagnostic(Diagnostic::ce016(expr.range()));
        }
        resolve_expr(expr, kind, diags);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zasm_util::diagnostic::DiagnosticCollector;

    fn parse_ca(text: &str) -> Vec<Operand> {
        use crate::parser::{OperandParser, OperandText, ParserCtx};
        use crate::range_provider::RangeProvider;

        let input = OperandText::from_substituted(text, 0, 10, 10);
        let provider = RangeProvider::Identity;
        let parser = OperandParser::new(&input, 15, &provider, None, None, ParserCtx::default());
        parser.ca_expr_ops().operands
    }

    #[test]
    fn test_functions_table_sorted() {
        assert!(CA_FUNCTIONS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn test_seta_arithmetic_accepted() {
        let ops = parse_ca("(1+2)*3");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETA", &diags);
        assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
    }

    #[test]
    fn test_setb_requires_parenthesis() {
        let ops = parse_ca("1+1");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETB", &diags);
        assert!(diags.diagnostics().iter().any(|d| d.code == "CE016"));
    }

    #[test]
    fn test_setb_logical_list_accepted() {
        let ops = parse_ca("(&A EQ 1 AND &B EQ 2)");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETB", &diags);
        assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
    }

    #[test]
    fn test_attr_string_comparison_in_b_context() {
        // T'&VAR EQ 'O' keeps the right side as a string operand
        let ops = parse_ca("(T'&VAR EQ 'O')");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETB", &diags);
        assert!(diags.diagnostics().is_empty(), "{:?}", diags.diagnostics());
    }

    #[test]
    fn test_unknown_function_in_a_context() {
        let ops = parse_ca("NOSUCHFN(1)");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETA", &diags);
        assert!(diags.diagnostics().iter().any(|d| d.code == "CE004"));
    }

    #[test]
    fn test_function_arity() {
        let diags = DiagnosticCollector::new();
        let ops = parse_ca("FIND('A')");
        resolve_for_opcode(&ops, "SETA", &diags);
        assert!(diags.diagnostics().iter().any(|d| d.code == "CE013"));

        let diags = DiagnosticCollector::new();
        let ops = parse_ca("FIND('A','B','C')");
        resolve_for_opcode(&ops, "SETA", &diags);
        assert!(diags.diagnostics().iter().any(|d| d.code == "CE014"));
    }

    #[test]
    fn test_concat_in_a_context_rejected() {
        let ops = parse_ca("&A.&B");
        let diags = DiagnosticCollector::new();
        resolve_for_opcode(&ops, "SETA", &diags);
        // &A.&B parses as concatenation, invalid arithmetic
        assert!(diags.diagnostics().iter().any(|d| d.code == "CE005"));
    }
}
