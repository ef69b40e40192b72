//! Preprocessor statement descriptions and their highlighting.
//!
//! Each recognized source statement is reported as a structured object so
//! IDE features keep working on the original text while the replacement
//! lines feed the normal lexer.

use zasm_lex::logical_line::{LogicalLine, LogicalLineIter};
use zasm_util::hl::{HlScope, HlSymbol, SourceInfoProcessor};
use zasm_util::span::{Position, Range};

/// A named source region.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameRange {
    pub name: String,
    pub r: Range,
}

impl NameRange {
    pub fn new(name: impl Into<String>, r: Range) -> Self {
        Self {
            name: name.into(),
            r,
        }
    }
}

/// Field details of one preprocessor-recognized statement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreprocDetails {
    pub stmt_range: Range,
    pub label: Option<NameRange>,
    pub instruction: Option<NameRange>,
    pub operands: Vec<NameRange>,
    pub remarks: Vec<Range>,
}

impl PreprocDetails {
    /// Range covering all operands, if any.
    pub fn operands_range(&self) -> Option<Range> {
        let first = self.operands.first()?;
        let last = self.operands.last()?;
        Some(Range::new(first.r.start, last.r.end))
    }
}

/// A statement the preprocessor recognized and replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessorStatement {
    pub details: PreprocDetails,
    pub is_include: bool,
}

/// Standard field highlighting of a preprocessor statement.
pub fn do_highlighting(stmt: &PreprocessorStatement, src_proc: &SourceInfoProcessor) {
    if let Some(label) = &stmt.details.label {
        src_proc.add_hl_symbol(HlSymbol::new(label.r, HlScope::Label));
    }
    if let Some(instruction) = &stmt.details.instruction {
        src_proc.add_hl_symbol(HlSymbol::new(instruction.r, HlScope::Instruction));
    }
    for op in &stmt.details.operands {
        src_proc.add_hl_symbol(HlSymbol::new(op.r, HlScope::Operand));
    }
    for r in &stmt.details.remarks {
        src_proc.add_hl_symbol(HlSymbol::new(*r, HlScope::Remark));
    }
}

/// Highlight the continuation column and ignore area of every segment.
pub fn highlight_line_tail(line: &LogicalLine<'_>, base_line: usize, src_proc: &SourceInfoProcessor) {
    for (i, segment) in line.segments.iter().enumerate() {
        let lineno = base_line + i;
        if !segment.continuation().is_empty() {
            src_proc.add_hl_symbol(HlSymbol::new(
                Range::new(Position::new(lineno, 71), Position::new(lineno, 72)),
                HlScope::Continuation,
            ));
        }
        let ignore_len = segment.ignore().chars().count();
        if ignore_len > 0 {
            let extra = usize::from(segment.continuation().is_empty());
            src_proc.add_hl_symbol(HlSymbol::new(
                Range::new(
                    Position::new(lineno, 72 - extra),
                    Position::new(lineno, 72 - extra + ignore_len),
                ),
                HlScope::Ignored,
            ));
        }
    }
}

/// Position of a logical-line iterator in original-document coordinates.
pub fn iter_pos(it: &LogicalLineIter<'_, '_>, base_line: usize) -> Position {
    let (_, segment) = it.coordinates();
    Position::new(base_line + segment, it.utf16_column())
}

/// Split an operand field into named operands with precise ranges.
///
/// Separators are blanks and commas; a parenthesized argument list stays
/// attached to its operand and quoted strings (with doubled apostrophes)
/// are crossed without interpretation.
pub fn split_operands(mut it: LogicalLineIter<'_, '_>, base_line: usize) -> Vec<NameRange> {
    let mut result = Vec::new();

    loop {
        // skip separators
        while matches!(it.peek(), Some(' ') | Some(',')) {
            it.next();
        }
        if it.peek().is_none() {
            break;
        }

        let start = iter_pos(&it, base_line);
        let mut name = String::new();
        let mut depth = 0usize;
        while let Some(c) = it.peek() {
            match c {
                ' ' | ',' if depth == 0 => break,
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                '\'' => {
                    name.push(c);
                    it.next();
                    loop {
                        match it.peek() {
                            None => break,
                            Some('\'') => {
                                name.push('\'');
                                it.next();
                                if it.peek() == Some('\'') {
                                    name.push('\'');
                                    it.next();
                                    continue;
                                }
                                break;
                            }
                            Some(other) => {
                                name.push(other);
                                it.next();
                            }
                        }
                    }
                    continue;
                }
                _ => {}
            }
            if c != ' ' {
                name.push(c);
            }
            it.next();
        }
        let end = iter_pos(&it, base_line);
        result.push(NameRange::new(name, Range::new(start, end)));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use zasm_lex::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};

    fn with_line<R>(text: &str, f: impl FnOnce(&LogicalLine<'_>) -> R) -> R {
        let mut input = text;
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));
        f(&line)
    }

    #[test]
    fn test_split_operands_simple() {
        with_line("A,B(1,2),'Q U O T E'", |line| {
            let ops = split_operands(line.code_iter(), 0);
            assert_eq!(ops.len(), 3);
            assert_eq!(ops[0].name, "A");
            assert_eq!(ops[1].name, "B(1,2)");
            assert_eq!(ops[2].name, "'Q U O T E'");
            assert_eq!(ops[0].r.start, Position::new(0, 0));
            assert_eq!(ops[1].r.start, Position::new(0, 2));
        });
    }

    #[test]
    fn test_split_operands_blank_separated() {
        with_line("RESP(R) RESP2(R2)", |line| {
            let ops = split_operands(line.code_iter(), 0);
            assert_eq!(ops.len(), 2);
            assert_eq!(ops[0].name, "RESP(R)");
            assert_eq!(ops[1].name, "RESP2(R2)");
        });
    }

    #[test]
    fn test_operands_range() {
        let mut details = PreprocDetails::default();
        assert!(details.operands_range().is_none());
        details.operands.push(NameRange::new(
            "A",
            Range::new(Position::new(0, 10), Position::new(0, 11)),
        ));
        details.operands.push(NameRange::new(
            "B",
            Range::new(Position::new(0, 12), Position::new(0, 13)),
        ));
        let r = details.operands_range().unwrap();
        assert_eq!(r.start.column, 10);
        assert_eq!(r.end.column, 13);
    }
}
