//! Abstract syntax of statement operands.
//!
//! Everything here is a plain owned tree: tagged sums over a small fixed
//! set of shapes, ranges stored by value. Concatenation chains represent
//! model statement fields and macro operands; the expression trees cover
//! the machine and conditional-assembly grammars; data definitions carry
//! the full modifier set of `DC`/`DS` operands and literals.

use zasm_util::span::Range;

/// A macro operand or model field: an ordered sequence of concatenation
/// points.
pub type ConcatChain = Vec<ConcatPoint>;

/// One point of a concatenation chain.
#[derive(Clone, Debug, PartialEq)]
pub enum ConcatPoint {
    /// Plain character run.
    Str(CharStr),
    /// `&name` or `&(compound)`, possibly subscripted.
    Var(VariableSymbol),
    /// `.` — the variable-symbol concatenation operator.
    Dot(Range),
    /// `=` — the keyword-parameter separator.
    Equals(Range),
    /// Parenthesized list of operands.
    Sublist(Vec<ConcatChain>),
}

/// A literal character run inside a chain.
#[derive(Clone, Debug, PartialEq)]
pub struct CharStr {
    pub value: String,
    pub range: Range,
}

impl CharStr {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        Self {
            value: value.into(),
            range,
        }
    }
}

/// Remove empty string points and merge adjacent string points.
pub fn clear_chain(chain: &mut ConcatChain) {
    chain.retain(|p| match p {
        ConcatPoint::Str(s) => !s.value.is_empty(),
        _ => true,
    });

    let mut i = 0;
    while i + 1 < chain.len() {
        let merge = matches!(
            (&chain[i], &chain[i + 1]),
            (ConcatPoint::Str(_), ConcatPoint::Str(_))
        );
        if merge {
            let ConcatPoint::Str(next) = chain.remove(i + 1) else {
                unreachable!()
            };
            let ConcatPoint::Str(prev) = &mut chain[i] else {
                unreachable!()
            };
            prev.value.push_str(&next.value);
            prev.range = prev.range.union(next.range);
        } else {
            i += 1;
        }
    }
}

/// Render a chain back to its textual form.
pub fn chain_to_string(chain: &[ConcatPoint]) -> String {
    let mut out = String::new();
    for point in chain {
        match point {
            ConcatPoint::Str(s) => out.push_str(&s.value),
            ConcatPoint::Var(v) => out.push_str(&v.to_text()),
            ConcatPoint::Dot(_) => out.push('.'),
            ConcatPoint::Equals(_) => out.push('='),
            ConcatPoint::Sublist(list) => {
                out.push('(');
                for (i, chain) in list.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(&chain_to_string(chain));
                }
                out.push(')');
            }
        }
    }
    out
}

/// Whether the chain contains a variable symbol anywhere.
pub fn chain_has_variables(chain: &[ConcatPoint]) -> bool {
    chain.iter().any(|p| match p {
        ConcatPoint::Var(_) => true,
        ConcatPoint::Sublist(list) => list.iter().any(|c| chain_has_variables(c)),
        _ => false,
    })
}

/// A variable symbol reference.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableSymbol {
    /// `&NAME(subscripts)`
    Basic {
        name: String,
        subscripts: Vec<CaExpr>,
        range: Range,
    },
    /// `&(chain)(subscripts)` — the name is created by concatenation.
    Created {
        chain: ConcatChain,
        subscripts: Vec<CaExpr>,
        range: Range,
    },
}

impl VariableSymbol {
    pub fn range(&self) -> Range {
        match self {
            VariableSymbol::Basic { range, .. } | VariableSymbol::Created { range, .. } => *range,
        }
    }

    pub fn subscripts(&self) -> &[CaExpr] {
        match self {
            VariableSymbol::Basic { subscripts, .. } | VariableSymbol::Created { subscripts, .. } => subscripts,
        }
    }

    fn to_text(&self) -> String {
        match self {
            VariableSymbol::Basic { name, .. } => format!("&{name}"),
            VariableSymbol::Created { chain, .. } => format!("&({})", chain_to_string(chain)),
        }
    }
}

// --- conditional-assembly expressions ---

/// Unary operators of the CA grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaUnaryOp {
    Plus,
    Minus,
}

/// Binary operators of the CA grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaBinOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `.` between terms: string concatenation.
    Concat,
}

/// Optional substring notation of a C-type string: `'...'(e1,e2)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Substring {
    pub start: Box<CaExpr>,
    /// `None` for the `(e,*)` form.
    pub end: Option<Box<CaExpr>>,
    pub range: Range,
}

/// A C-type string term with optional duplication factor and substring.
#[derive(Clone, Debug, PartialEq)]
pub struct CaString {
    pub chain: ConcatChain,
    pub dupl: Option<Box<CaExpr>>,
    pub substring: Option<Substring>,
    pub range: Range,
}

/// Target of a symbol-attribute reference in a CA expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CaAttrTarget {
    Var(VariableSymbol),
    Literal(Box<Literal>),
    Symbol(String),
}

/// A conditional-assembly expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum CaExpr {
    /// Decimal (or self-defining) constant.
    Constant { value: i32, range: Range },
    /// Ordinary symbol, including operator words resolved later (`EQ`,
    /// `AND`, `NOT`, ...).
    Symbol { name: String, range: Range },
    /// Variable symbol term.
    VarSym { symbol: Box<VariableSymbol>, range: Range },
    /// C-type string.
    String(CaString),
    /// Space-separated expression list, `(a AND b)` style.
    ExprList { exprs: Vec<CaExpr>, parenthesized: bool, range: Range },
    /// Function invocation `NAME(args)`, possibly with a duplication
    /// prefix `(n)NAME(args)`.
    Function {
        name: String,
        args: Vec<CaExpr>,
        dupl: Option<Box<CaExpr>>,
        range: Range,
    },
    /// Data-attribute reference `T'...`, `L'...`, ...
    AttrRef {
        attr: char,
        target: CaAttrTarget,
        range: Range,
    },
    Unary {
        op: CaUnaryOp,
        operand: Box<CaExpr>,
        range: Range,
    },
    Binary {
        op: CaBinOp,
        lhs: Box<CaExpr>,
        rhs: Box<CaExpr>,
        range: Range,
    },
}

impl CaExpr {
    pub fn range(&self) -> Range {
        match self {
            CaExpr::Constant { range, .. }
            | CaExpr::Symbol { range, .. }
            | CaExpr::VarSym { range, .. }
            | CaExpr::ExprList { range, .. }
            | CaExpr::Function { range, .. }
            | CaExpr::AttrRef { range, .. }
            | CaExpr::Unary { range, .. }
            | CaExpr::Binary { range, .. } => *range,
            CaExpr::String(s) => s.range,
        }
    }
}

// --- machine expressions ---

/// Unary operators of the machine grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachUnaryOp {
    Plus,
    Minus,
    /// Explicit parentheses, kept for faithful reprinting.
    Par,
}

/// Binary operators of the machine grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachBinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Target of a data-attribute reference in a machine expression.
#[derive(Clone, Debug, PartialEq)]
pub enum MachAttrTarget {
    Symbol { name: String, qualifier: Option<String> },
    Literal(Box<Literal>),
}

/// A machine expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum MachExpr {
    Constant { value: i32, range: Range },
    /// `symbol` or `qualifier.symbol`.
    Symbol {
        name: String,
        qualifier: Option<String>,
        range: Range,
    },
    /// `*` — the location counter.
    LocCounter { range: Range },
    /// `=` literal.
    Literal(Box<Literal>),
    /// `L'x`, `T'x`, ... over a symbol or literal.
    AttrRef {
        attr: char,
        target: MachAttrTarget,
        range: Range,
    },
    Unary {
        op: MachUnaryOp,
        operand: Box<MachExpr>,
        range: Range,
    },
    Binary {
        op: MachBinOp,
        lhs: Box<MachExpr>,
        rhs: Box<MachExpr>,
        range: Range,
    },
}

impl MachExpr {
    pub fn range(&self) -> Range {
        match self {
            MachExpr::Constant { range, .. }
            | MachExpr::Symbol { range, .. }
            | MachExpr::LocCounter { range }
            | MachExpr::AttrRef { range, .. }
            | MachExpr::Unary { range, .. }
            | MachExpr::Binary { range, .. } => *range,
            MachExpr::Literal(l) => l.range,
        }
    }

    /// Canonical text of the expression.
    ///
    /// Reparsing the printed text yields a structurally equal tree, which
    /// the tests rely on.
    pub fn print(&self) -> String {
        match self {
            MachExpr::Constant { value, .. } => value.to_string(),
            MachExpr::Symbol { name, qualifier, .. } => match qualifier {
                Some(q) => format!("{q}.{name}"),
                None => name.clone(),
            },
            MachExpr::LocCounter { .. } => "*".to_string(),
            MachExpr::Literal(l) => l.text.clone(),
            MachExpr::AttrRef { attr, target, .. } => match target {
                MachAttrTarget::Symbol { name, qualifier } => match qualifier {
                    Some(q) => format!("{attr}'{q}.{name}"),
                    None => format!("{attr}'{name}"),
                },
                MachAttrTarget::Literal(l) => format!("{attr}'{}", l.text),
            },
            MachExpr::Unary { op, operand, .. } => match op {
                MachUnaryOp::Plus => format!("+{}", operand.print()),
                MachUnaryOp::Minus => format!("-{}", operand.print()),
                MachUnaryOp::Par => format!("({})", operand.print()),
            },
            MachExpr::Binary { op, lhs, rhs, .. } => {
                let op = match op {
                    MachBinOp::Add => '+',
                    MachBinOp::Sub => '-',
                    MachBinOp::Mul => '*',
                    MachBinOp::Div => '/',
                };
                format!("{}{}{}", lhs.print(), op, rhs.print())
            }
        }
    }
}

// --- data definitions ---

/// Unit of the data-definition length modifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LengthType {
    #[default]
    Byte,
    /// The `L.` form: length counted in bits.
    Bit,
}

/// Nominal value of a data definition.
#[derive(Clone, Debug, PartialEq)]
pub enum NominalValue {
    /// `'...'` — character form; doubled apostrophes are preserved.
    String { value: String, range: Range },
    /// `(expr,addr,...)` — expression/address form.
    Exprs(Vec<ExprOrAddress>),
}

/// One element of an expression-form nominal value.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprOrAddress {
    Expr(MachExpr),
    Address(AddressNominal),
}

/// `displacement(base)` inside a nominal value or machine operand.
#[derive(Clone, Debug, PartialEq)]
pub struct AddressNominal {
    pub displacement: Box<MachExpr>,
    pub base: Box<MachExpr>,
    pub range: Range,
}

/// A parsed data definition (`DC`/`DS` operand or literal body).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataDef {
    pub dupl_factor: Option<Box<MachExpr>>,
    /// Type letter; `R` is recorded lower-case without GOFF.
    pub type_: char,
    pub type_range: Range,
    pub extension: Option<char>,
    pub extension_range: Option<Range>,
    pub program_type: Option<Box<MachExpr>>,
    pub length: Option<Box<MachExpr>>,
    pub length_type: LengthType,
    pub scale: Option<Box<MachExpr>>,
    pub exponent: Option<Box<MachExpr>>,
    pub nominal: Option<NominalValue>,
}

/// Allowed `(type, extension)` pairs.
const TYPE_EXTENSIONS: &[(char, &str)] = &[
    ('A', "D"),
    ('C', "AEU"),
    ('D', "BDH"),
    ('E', "BDH"),
    ('F', "D"),
    ('L', "BDHQ"),
    ('R', "D"),
    ('S', "Y"),
    ('V', "D"),
];

/// Whether `ext` is a valid extension of data type `type_`.
pub fn is_type_extension(type_: char, ext: char) -> bool {
    TYPE_EXTENSIONS
        .iter()
        .any(|(t, exts)| *t == type_.to_ascii_uppercase() && exts.contains(ext.to_ascii_uppercase()))
}

/// A literal: `=` followed by a data definition, as written.
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    /// The literal text including the leading `=`.
    pub text: String,
    pub data_def: DataDef,
    pub range: Range,
}

// --- operands ---

/// A machine instruction operand.
#[derive(Clone, Debug, PartialEq)]
pub enum MachOperand {
    Expr(MachExpr),
    /// `disp(first)`, `disp(first,second)` or `disp(,second)`.
    Address {
        displacement: MachExpr,
        first: Option<MachExpr>,
        second: Option<MachExpr>,
        range: Range,
    },
}

impl MachOperand {
    pub fn range(&self) -> Range {
        match self {
            MachOperand::Expr(e) => e.range(),
            MachOperand::Address { range, .. } => *range,
        }
    }
}

/// An assembler instruction operand.
#[derive(Clone, Debug, PartialEq)]
pub enum AsmOperand {
    Expr { expr: MachExpr, range: Range },
    /// `base(end)` as written for USING and friends.
    BaseEnd {
        base: MachExpr,
        end: MachExpr,
        range: Range,
    },
    String { value: String, range: Range },
    /// `KEYWORD(arg,arg,...)`.
    Complex {
        keyword: String,
        args: Vec<String>,
        range: Range,
    },
    /// A bare keyword.
    Plain { value: String, range: Range },
}

impl AsmOperand {
    pub fn range(&self) -> Range {
        match self {
            AsmOperand::Expr { range, .. }
            | AsmOperand::BaseEnd { range, .. }
            | AsmOperand::String { range, .. }
            | AsmOperand::Complex { range, .. }
            | AsmOperand::Plain { range, .. } => *range,
        }
    }
}

/// A sequence symbol (`.NAME`).
#[derive(Clone, Debug, PartialEq)]
pub struct SeqSymbol {
    pub name: String,
    pub range: Range,
}

/// A conditional-assembly operand.
#[derive(Clone, Debug, PartialEq)]
pub enum CaOperand {
    Expr { expr: CaExpr, range: Range },
    /// `(expr).SEQ` or plain `.SEQ` of AIF/AGO.
    Branch {
        expr: Option<CaExpr>,
        seq: SeqSymbol,
        range: Range,
    },
    /// `&VAR` or `&VAR(dimension)` of GBLx/LCLx.
    VarDef {
        symbol: VariableSymbol,
        range: Range,
    },
}

impl CaOperand {
    pub fn range(&self) -> Range {
        match self {
            CaOperand::Expr { range, .. }
            | CaOperand::Branch { range, .. }
            | CaOperand::VarDef { range, .. } => *range,
        }
    }
}

/// Any operand produced by the five sub-parsers.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Placeholder for an absent or unparsable operand.
    Empty { range: Range },
    /// Macro operand: a concatenation chain.
    Macro { chain: ConcatChain, range: Range },
    /// A field still containing variable symbols, deferred to the macro
    /// engine.
    Model { chain: ConcatChain, range: Range },
    Machine(MachOperand),
    DataDef { data_def: DataDef, range: Range },
    Assembler(AsmOperand),
    Ca(CaOperand),
}

impl Operand {
    pub fn range(&self) -> Range {
        match self {
            Operand::Empty { range }
            | Operand::Macro { range, .. }
            | Operand::Model { range, .. }
            | Operand::DataDef { range, .. } => *range,
            Operand::Machine(m) => m.range(),
            Operand::Assembler(a) => a.range(),
            Operand::Ca(c) => c.range(),
        }
    }

    pub fn is_empty_operand(&self) -> bool {
        matches!(self, Operand::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> ConcatPoint {
        ConcatPoint::Str(CharStr::new(text, Range::default()))
    }

    #[test]
    fn test_clear_chain_removes_empty_and_merges() {
        let mut chain = vec![s("AB"), s(""), s("CD"), ConcatPoint::Dot(Range::default()), s("E")];
        clear_chain(&mut chain);
        assert_eq!(chain.len(), 3);
        match &chain[0] {
            ConcatPoint::Str(c) => assert_eq!(c.value, "ABCD"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_chain_to_string() {
        let chain = vec![
            s("A"),
            ConcatPoint::Equals(Range::default()),
            ConcatPoint::Sublist(vec![vec![s("B")], vec![s("C")]]),
        ];
        assert_eq!(chain_to_string(&chain), "A=(B,C)");
    }

    #[test]
    fn test_chain_has_variables() {
        let plain = vec![s("A")];
        assert!(!chain_has_variables(&plain));

        let with_var = vec![ConcatPoint::Var(VariableSymbol::Basic {
            name: "X".into(),
            subscripts: vec![],
            range: Range::default(),
        })];
        assert!(chain_has_variables(&with_var));

        let nested = vec![ConcatPoint::Sublist(vec![with_var])];
        assert!(chain_has_variables(&nested));
    }

    #[test]
    fn test_type_extensions() {
        assert!(is_type_extension('C', 'A'));
        assert!(is_type_extension('L', 'Q'));
        assert!(is_type_extension('r', 'D'));
        assert!(!is_type_extension('C', 'B'));
        assert!(!is_type_extension('X', 'A'));
    }

    #[test]
    fn test_mach_expr_print() {
        let r = Range::default();
        let e = MachExpr::Binary {
            op: MachBinOp::Mul,
            lhs: Box::new(MachExpr::Unary {
                op: MachUnaryOp::Par,
                operand: Box::new(MachExpr::Binary {
                    op: MachBinOp::Add,
                    lhs: Box::new(MachExpr::Constant { value: 1, range: r }),
                    rhs: Box::new(MachExpr::Constant { value: 2, range: r }),
                    range: r,
                }),
                range: r,
            }),
            rhs: Box::new(MachExpr::Symbol {
                name: "X".into(),
                qualifier: None,
                range: r,
            }),
            range: r,
        };
        assert_eq!(e.print(), "(1+2)*X");
    }
}
