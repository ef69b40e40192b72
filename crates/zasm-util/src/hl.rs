//! Semantic highlighting sink.
//!
//! The parsers and preprocessors report colored regions through
//! [`SourceInfoProcessor::add_hl_symbol`]; the host drains them per parse.

use std::cell::RefCell;

use crate::span::Range;

/// Highlighting scope of a source region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HlScope {
    Label,
    Instruction,
    Remark,
    Ignored,
    Comment,
    Continuation,
    SeqSymbol,
    VarSymbol,
    Operator,
    Operand,
    String,
    Number,
    DataDefType,
    DataDefModifier,
    DataAttrType,
    SelfDefType,
    OrdinarySymbol,
}

/// A highlighted region of the original document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HlSymbol {
    pub range: Range,
    pub scope: HlScope,
}

impl HlSymbol {
    #[inline]
    pub const fn new(range: Range, scope: HlScope) -> Self {
        Self { range, scope }
    }
}

/// Collects highlighting symbols produced while processing one document.
#[derive(Default)]
pub struct SourceInfoProcessor {
    symbols: RefCell<Vec<HlSymbol>>,
}

impl SourceInfoProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one highlighted region.
    pub fn add_hl_symbol(&self, symbol: HlSymbol) {
        // Zero-width symbols carry no information for the client.
        if symbol.range.is_empty() {
            return;
        }
        self.symbols.borrow_mut().push(symbol);
    }

    /// Take the collected symbols, leaving the processor empty.
    pub fn take_symbols(&self) -> Vec<HlSymbol> {
        std::mem::take(&mut *self.symbols.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_empty_symbols_are_dropped() {
        let p = SourceInfoProcessor::new();
        p.add_hl_symbol(HlSymbol::new(Range::point(Position::new(0, 0)), HlScope::Label));
        assert!(p.is_empty());
    }

    #[test]
    fn test_take_symbols() {
        let p = SourceInfoProcessor::new();
        let r = Range::new(Position::new(0, 0), Position::new(0, 4));
        p.add_hl_symbol(HlSymbol::new(r, HlScope::Instruction));
        let symbols = p.take_symbols();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].scope, HlScope::Instruction);
        assert!(p.is_empty());
    }
}
