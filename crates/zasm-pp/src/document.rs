//! The line-oriented document the preprocessors rewrite.
//!
//! Preprocessors map a document to a document. Lines are either originals
//! (carrying the line number they had in the source file) or replacements
//! generated by a preprocessor; replacements inherit no line number, but
//! downstream range reporting stays anchored because every statement the
//! preprocessor recognizes records its original line number before the
//! replacement is emitted.

use zasm_lex::eol::extract_line;

/// One line of a preprocessed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentLine {
    /// A line of the original source.
    Original { text: String, lineno: usize },
    /// A line produced by a preprocessor.
    Replaced { text: String },
}

impl DocumentLine {
    /// Build a replacement line; a trailing line break is stripped.
    pub fn replaced(text: impl Into<String>) -> Self {
        let mut text = text.into();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        DocumentLine::Replaced { text }
    }

    #[inline]
    pub fn text(&self) -> &str {
        match self {
            DocumentLine::Original { text, .. } | DocumentLine::Replaced { text } => text,
        }
    }

    /// Original line number, `None` for replacements.
    #[inline]
    pub fn lineno(&self) -> Option<usize> {
        match self {
            DocumentLine::Original { lineno, .. } => Some(*lineno),
            DocumentLine::Replaced { .. } => None,
        }
    }
}

/// A line-oriented document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<DocumentLine>,
}

impl Document {
    /// Split source text into original lines.
    pub fn new(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        let mut lineno = 0;
        while !rest.is_empty() {
            let (line, _) = extract_line(&mut rest);
            lines.push(DocumentLine::Original {
                text: line.to_string(),
                lineno,
            });
            lineno += 1;
        }
        Self { lines }
    }

    pub fn from_lines(lines: Vec<DocumentLine>) -> Self {
        Self { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[DocumentLine] {
        &self.lines
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the document back to text, one line break per line.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.text());
            out.push('\n');
        }
        out
    }

    /// Drop original line numbers (used for included members, whose lines
    /// must not be attributed to the including document).
    pub fn convert_to_replaced(&mut self) {
        for line in &mut self.lines {
            if let DocumentLine::Original { text, .. } = line {
                *line = DocumentLine::Replaced {
                    text: std::mem::take(text),
                };
            }
        }
    }
}

/// Whether a raw source line requests continuation (non-blank in the
/// continuation column of the default regime).
pub fn is_continued(text: &str) -> bool {
    matches!(text.chars().nth(71), Some(c) if c != ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_roundtrip() {
        let doc = Document::new("A\nB\r\nC");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.lines()[0].lineno(), Some(0));
        assert_eq!(doc.lines()[2].lineno(), Some(2));
        assert_eq!(doc.text(), "A\nB\nC\n");
    }

    #[test]
    fn test_replaced_strips_newline() {
        let line = DocumentLine::replaced("TEXT\n");
        assert_eq!(line.text(), "TEXT");
        assert_eq!(line.lineno(), None);
    }

    #[test]
    fn test_convert_to_replaced() {
        let mut doc = Document::new("A\nB");
        doc.convert_to_replaced();
        assert!(doc.lines().iter().all(|l| l.lineno().is_none()));
        assert_eq!(doc.text(), "A\nB\n");
    }

    #[test]
    fn test_is_continued() {
        let continued = format!("{:<71}X", "TEXT");
        assert!(is_continued(&continued));
        let plain = format!("{:<71} ", "TEXT");
        assert!(!is_continued(&plain));
        assert!(!is_continued("SHORT"));
    }
}
