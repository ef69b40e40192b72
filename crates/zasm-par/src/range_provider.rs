//! Mapping of parser-local positions back to original-document ranges.
//!
//! During the primary parse the operand engine already computes absolute
//! document positions (the operand text of a continued statement starts at
//! the continuation column of its physical line), so the provider is the
//! identity. During a statement re-parse the engine runs over substituted
//! text laid out as if it sat at the model statement's field location; the
//! provider then clamps everything that overflows the field back into the
//! original range, so diagnostics and highlighting never point outside the
//! statement that produced them.

use zasm_util::span::{Position, Range};

/// Maps engine positions to original-document positions.
#[derive(Clone, Debug, Default)]
pub enum RangeProvider {
    /// Positions are already original-document positions.
    #[default]
    Identity,
    /// Re-parse of substituted text: positions are clamped into the
    /// original field range.
    Clamped { original: Range },
}

impl RangeProvider {
    pub fn adjust_pos(&self, p: Position) -> Position {
        match self {
            RangeProvider::Identity => p,
            RangeProvider::Clamped { original } => {
                if p < original.start {
                    original.start
                } else if p > original.end {
                    original.end
                } else {
                    p
                }
            }
        }
    }

    pub fn adjust_range(&self, r: Range) -> Range {
        match self {
            RangeProvider::Identity => r,
            RangeProvider::Clamped { .. } => Range::new(self.adjust_pos(r.start), self.adjust_pos(r.end)),
        }
    }

    /// The range the provider maps into, when constrained.
    pub fn original_range(&self) -> Option<Range> {
        match self {
            RangeProvider::Identity => None,
            RangeProvider::Clamped { original } => Some(*original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let r = Range::new(Position::new(3, 4), Position::new(3, 9));
        assert_eq!(RangeProvider::Identity.adjust_range(r), r);
    }

    #[test]
    fn test_clamped() {
        let original = Range::new(Position::new(5, 10), Position::new(5, 20));
        let p = RangeProvider::Clamped { original };

        let inside = Range::new(Position::new(5, 12), Position::new(5, 15));
        assert_eq!(p.adjust_range(inside), inside);

        let overflow = Range::new(Position::new(5, 12), Position::new(7, 2));
        let adjusted = p.adjust_range(overflow);
        assert_eq!(adjusted.end, original.end);

        let before = Range::new(Position::new(5, 0), Position::new(5, 12));
        assert_eq!(p.adjust_range(before).start, original.start);
    }
}
