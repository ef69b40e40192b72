//! zasm-par - Statement parsing layers of the zasm front end.
//!
//! The field splitter ([`fields`]) takes a logical line, extracts label
//! and instruction, and dispatches the operand text to one of five
//! grammars driven by the instruction catalog: macro operand lists,
//! machine operands, data definitions, assembler operands, and
//! conditional-assembly expressions. All five share the character-level
//! engine in [`parser`]. The [`resolve`] pass types CA expression trees by
//! the outer expression kind, [`recovery`] classifies failed statements
//! into the specific S-class diagnostics, and [`range_provider`] keeps
//! re-parsed ranges anchored to the original document.

pub mod ast;
pub mod fields;
pub mod parser;
pub mod range_provider;
pub mod recovery;
pub mod resolve;

pub use ast::{
    AsmOperand, CaExpr, CaOperand, ConcatChain, ConcatPoint, DataDef, Literal, MachExpr,
    MachOperand, NominalValue, Operand, VariableSymbol,
};
pub use fields::{
    extract_ictl, loctr_len_for, parse_operand_field, processing_form, split_statement, CaForm,
    InstructionField, Label, ParsedStatement, ParserMetrics, ProcessingForm, ProcessingStatus,
};
pub use parser::{Failure, OperandParser, OperandText, PResult, ParsedOperands, ParserCtx};
pub use range_provider::RangeProvider;
pub use recovery::classify_syntax_error;
pub use resolve::{resolve_expr, resolve_for_opcode, ExprKind};
