//! Logical (continued) line reconstruction.
//!
//! An HLASM statement may span several physical lines joined by a non-blank
//! character in the continuation column. Each physical line contributes one
//! segment; a segment splits into five half-open regions determined by the
//! column regime:
//!
//! ```text
//! segment 1: <code..............................><continuation><ignore...>
//! segment 2:              <code.................><continuation><ignore...>
//! segment 3:              <code.................><ignore.................>
//! ```
//!
//! Regions are measured in code points, not bytes; the segment stores byte
//! offsets computed from the code-point counts so the regions can be
//! re-sliced cheaply.

use crate::eol::{extract_line, LineEnding};

/// The column regime of the source file, as configured by ICTL.
///
/// `begin` and `end` are 1-based column numbers; `continuation` is the
/// 1-based column where a continued statement resumes, or 0 when
/// continuation is disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IctlLayout {
    /// First column of the code area (1-40).
    pub begin: usize,
    /// Last column of the code area (41-80).
    pub end: usize,
    /// Resume column of continued lines (begin+1 - 40), 0 disables.
    pub continuation: usize,
    /// Extend the continuation region across DBCS shift pairs.
    pub dbcs: bool,
    /// COPY-member rules: a dangling continuation at EOF is trimmed
    /// instead of reported.
    pub eof_copy_rules: bool,
}

/// Default column regime: code in 1..=71, continuation column 72, resume 16.
pub const DEFAULT_ICTL: IctlLayout = IctlLayout {
    begin: 1,
    end: 71,
    continuation: 16,
    dbcs: false,
    eof_copy_rules: false,
};

/// Default regime with DBCS continuation handling.
pub const DEFAULT_ICTL_DBCS: IctlLayout = IctlLayout { dbcs: true, ..DEFAULT_ICTL };

/// Default regime with COPY-member end-of-file rules.
pub const DEFAULT_ICTL_COPY: IctlLayout = IctlLayout {
    eof_copy_rules: true,
    ..DEFAULT_ICTL
};

/// Default DBCS regime with COPY-member end-of-file rules.
pub const DEFAULT_ICTL_DBCS_COPY: IctlLayout = IctlLayout {
    dbcs: true,
    eof_copy_rules: true,
    ..DEFAULT_ICTL
};

/// Byte offset after `count` code points of `s`, clamped to `s.len()`.
fn advance_chars(s: &str, from: usize, count: usize) -> usize {
    let mut it = s[from..].char_indices();
    for _ in 0..count {
        if it.next().is_none() {
            return s.len();
        }
    }
    match it.next() {
        Some((off, _)) => from + off,
        None => s.len(),
    }
}

/// One physical line of a logical line.
#[derive(Clone, Copy, Debug)]
pub struct LogicalLineSegment<'a> {
    /// The physical line text without its line ending.
    pub line: &'a str,
    /// Byte offset where the code area starts.
    pub code_off: usize,
    /// Byte offset where the continuation region starts.
    pub cont_off: usize,
    /// Byte offset where the ignore area starts.
    pub ignore_off: usize,
    /// This segment violates the continuation indent.
    pub continuation_error: bool,
    /// The continuation region was extended across a DBCS shift pair.
    pub so_si_continuation: bool,
    /// Line-break classification.
    pub eol: LineEnding,
}

impl<'a> LogicalLineSegment<'a> {
    /// Columns before the code area (ignored prefix).
    #[inline]
    pub fn prefix(&self) -> &'a str {
        &self.line[..self.code_off]
    }

    /// The code area.
    #[inline]
    pub fn code(&self) -> &'a str {
        &self.line[self.code_off..self.cont_off]
    }

    /// The continuation region (empty when the line is not continued).
    #[inline]
    pub fn continuation(&self) -> &'a str {
        &self.line[self.cont_off..self.ignore_off]
    }

    /// The identification/ignore area.
    #[inline]
    pub fn ignore(&self) -> &'a str {
        &self.line[self.ignore_off..]
    }

    /// Whether this segment requests continuation.
    #[inline]
    pub fn is_continued(&self) -> bool {
        self.cont_off != self.ignore_off
    }
}

/// A single (possibly continued) HLASM statement.
#[derive(Clone, Debug, Default)]
pub struct LogicalLine<'a> {
    pub segments: Vec<LogicalLineSegment<'a>>,
    pub continuation_error: bool,
    pub so_si_continuation: bool,
    pub missing_next_line: bool,
}

impl<'a> LogicalLine<'a> {
    pub fn clear(&mut self) {
        self.segments.clear();
        self.continuation_error = false;
        self.so_si_continuation = false;
        self.missing_next_line = false;
    }

    /// Iterator over the code areas only, skipping continuation and ignore
    /// regions and empty code areas.
    pub fn code_iter(&self) -> LogicalLineIter<'a, '_> {
        for (i, s) in self.segments.iter().enumerate() {
            if s.code_off != s.cont_off {
                return LogicalLineIter {
                    line: self,
                    segment: i,
                    offset: s.code_off,
                };
            }
        }
        self.code_end()
    }

    /// The end iterator.
    pub fn code_end(&self) -> LogicalLineIter<'a, '_> {
        LogicalLineIter {
            line: self,
            segment: self.segments.len(),
            offset: 0,
        }
    }

    /// The full code content as a `String` (for tests and previews).
    pub fn code_text(&self) -> String {
        self.segments.iter().map(|s| s.code()).collect()
    }

    /// Number of code characters across all segments.
    pub fn code_len(&self) -> usize {
        self.segments.iter().map(|s| s.code().chars().count()).sum()
    }
}

/// Append one physical segment extracted from `input`.
///
/// Returns true when the appended segment requests continuation ("need
/// more"); the input must be non-empty.
pub fn append_to_logical_line<'a>(
    out: &mut LogicalLine<'a>,
    input: &mut &'a str,
    opts: &IctlLayout,
) -> bool {
    let (line, eol) = extract_line(input);

    let code_off = advance_chars(line, 0, opts.begin - 1);
    let cont_off = advance_chars(line, code_off, opts.end + 1 - opts.begin);
    let ignore_off = advance_chars(line, cont_off, 1);

    let mut segment = LogicalLineSegment {
        line,
        code_off,
        cont_off,
        ignore_off,
        continuation_error: false,
        so_si_continuation: false,
        eol,
    };

    if segment.cont_off == segment.ignore_off {
        out.segments.push(segment);
        return false;
    }

    let cont_char = segment.continuation().chars().next().unwrap();
    if cont_char == ' ' || opts.end == 80 || opts.continuation == 0 {
        segment.ignore_off = segment.cont_off;
        out.segments.push(segment);
        return false;
    }

    // line is continued

    if opts.dbcs {
        // extend the continuation region leftwards across trailing
        // characters identical to the continuation character
        let mut new_cont = segment.cont_off;
        while new_cont > segment.code_off {
            match line[segment.code_off..new_cont].chars().next_back() {
                Some(c) if c == cont_char => new_cont -= c.len_utf8(),
                _ => break,
            }
        }
        if new_cont != segment.cont_off {
            segment.cont_off = new_cont;
            if cont_char == '<' || cont_char == '>' {
                segment.so_si_continuation = true;
                out.so_si_continuation = true;
            }
        }
    }

    out.segments.push(segment);
    true
}

/// Validate continuation indents and the final segment.
///
/// Every non-first segment must have blanks in its first `continuation-1`
/// code columns; offenders are flagged, the offending columns are moved out
/// of the code area either way. A dangling continuation at end of input
/// sets `missing_next_line` (or is trimmed under COPY rules).
pub fn finish_logical_line(out: &mut LogicalLine<'_>, opts: &IctlLayout) {
    if out.segments.is_empty() {
        return;
    }

    let cont_size = opts.continuation.saturating_sub(opts.begin);
    for segment in &mut out.segments[1..] {
        let blank_start = segment.code_off;
        segment.code_off = advance_chars(segment.line, segment.code_off, cont_size).min(segment.cont_off);

        segment.continuation_error = segment.line[blank_start..segment.code_off]
            .chars()
            .any(|c| c != ' ');
        out.continuation_error |= segment.continuation_error;
    }

    let last = out.segments.last_mut().unwrap();
    if !opts.eof_copy_rules {
        out.missing_next_line = last.cont_off != last.ignore_off;
    } else {
        last.ignore_off = last.cont_off;
    }
}

/// Extract one logical line (repeatedly extracting physical lines while
/// continued and input remains). Returns false on empty input.
pub fn extract_logical_line<'a>(
    out: &mut LogicalLine<'a>,
    input: &mut &'a str,
    opts: &IctlLayout,
) -> bool {
    out.clear();

    if input.is_empty() {
        return false;
    }

    loop {
        if !append_to_logical_line(out, input, opts) {
            break;
        }
        if input.is_empty() {
            break;
        }
    }

    finish_logical_line(out, opts);
    true
}

/// Bidirectional iterator over the code characters of a [`LogicalLine`].
///
/// Forward iteration visits exactly the concatenation of the code areas.
/// `coordinates` recovers `(column, segment)` with the column counted in
/// code points from the physical line start, which is how downstream range
/// providers reconstruct original positions.
#[derive(Clone, Copy, Debug)]
pub struct LogicalLineIter<'a, 'b> {
    line: &'b LogicalLine<'a>,
    segment: usize,
    offset: usize,
}

impl<'a, 'b> LogicalLineIter<'a, 'b> {
    /// Character under the iterator, or `None` at the end.
    pub fn peek(&self) -> Option<char> {
        if self.at_end() {
            return None;
        }
        let s = &self.line.segments[self.segment];
        s.line[self.offset..].chars().next()
    }

    /// Whether the iterator is at the end position.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.segment == self.line.segments.len()
    }

    /// Move one character back; returns the character moved onto.
    pub fn prev(&mut self) -> Option<char> {
        loop {
            if self.at_end() || self.offset == self.line.segments[self.segment].code_off {
                if self.segment == 0 {
                    return None;
                }
                self.segment -= 1;
                self.offset = self.line.segments[self.segment].cont_off;
            } else {
                break;
            }
        }
        let s = &self.line.segments[self.segment];
        let c = s.line[s.code_off..self.offset].chars().next_back()?;
        self.offset -= c.len_utf8();
        Some(c)
    }

    /// `(column, segment)` of the current position; the column is the
    /// code-point distance from the physical line start.
    pub fn coordinates(&self) -> (usize, usize) {
        if self.at_end() {
            return (0, 0);
        }
        let s = &self.line.segments[self.segment];
        (s.line[..self.offset].chars().count(), self.segment)
    }

    /// Whether both iterators sit on the same physical segment.
    pub fn same_line(&self, other: &Self) -> bool {
        self.segment == other.segment
    }

    /// Index of the current segment; the segment count at the end.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment
    }

    /// The rest of the current segment's code region.
    pub fn rest_of_code(&self) -> &'a str {
        if self.at_end() {
            return "";
        }
        let s = &self.line.segments[self.segment];
        &s.line[self.offset..s.cont_off]
    }

    /// UTF-16 column of the current position within its physical line.
    pub fn utf16_column(&self) -> usize {
        if self.at_end() {
            return 0;
        }
        let s = &self.line.segments[self.segment];
        s.line[..self.offset].chars().map(char::len_utf16).sum()
    }
}

impl PartialEq for LogicalLineIter<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.line, other.line) && self.segment == other.segment && self.offset == other.offset
    }
}

impl Eq for LogicalLineIter<'_, '_> {}

impl Iterator for LogicalLineIter<'_, '_> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        while self.offset == self.line.segments[self.segment].cont_off {
            self.segment += 1;
            if self.segment == self.line.segments.len() {
                self.offset = 0;
                break;
            }
            self.offset = self.line.segments[self.segment].code_off;
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn test_empty_input() {
        let mut input = "";
        let mut line = LogicalLine::default();
        assert!(!extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));
        assert!(!extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL_DBCS));
    }

    #[test]
    fn test_empty_line() {
        let mut input = "\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        assert!(!line.continuation_error);
        assert!(!line.so_si_continuation);
        assert!(!line.missing_next_line);

        assert_eq!(line.segments.len(), 1);
        assert_eq!(line.segments[0].code(), "");
        assert_eq!(line.segments[0].continuation(), "");
        assert_eq!(line.segments[0].ignore(), "");

        assert!(!extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));
    }

    #[test]
    fn test_single_line() {
        let mut input =
            "12345678901234567890123456789012345678901234567890123456789012345678901 345678901234567890";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        assert!(!line.continuation_error);
        assert!(!line.so_si_continuation);
        assert!(!line.missing_next_line);

        assert_eq!(line.segments.len(), 1);
        assert_eq!(char_len(line.segments[0].code()), 71);
        assert_eq!(char_len(line.segments[0].continuation()), 0);
        assert_eq!(char_len(line.segments[0].ignore()), 19);
    }

    #[test]
    fn test_continued_line() {
        let mut input = "\
123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890\n\
               67890123456789012345678901234567890123456789012345678901 34567890\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        assert!(!line.continuation_error);
        assert!(!line.missing_next_line);

        assert_eq!(line.segments.len(), 2);
        assert_eq!(char_len(line.segments[0].code()), 71);
        assert_eq!(char_len(line.segments[0].continuation()), 1);
        assert_eq!(char_len(line.segments[0].ignore()), 18);

        assert_eq!(char_len(line.segments[1].code()), 56);
        assert_eq!(char_len(line.segments[1].continuation()), 0);
        assert_eq!(char_len(line.segments[1].ignore()), 9);
    }

    #[test]
    fn test_bad_continuation() {
        let mut input = "\
123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890\n\
              X67890123456789012345678901234567890123456789012345678901 3456789012\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        assert!(line.continuation_error);
        assert!(!line.segments[0].continuation_error);
        assert!(line.segments[1].continuation_error);
        assert_eq!(char_len(line.segments[1].code()), 56);
    }

    #[test]
    fn test_dbcs_continued_line() {
        let mut input = "\
1234567890123456789012345678901234567890123456789012345678901234567890XX345678901234567890\n\
               67890123456789012345678901234567890123456789012345678901 34567890\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL_DBCS));

        assert!(!line.continuation_error);
        assert!(!line.so_si_continuation);

        assert_eq!(line.segments.len(), 2);
        assert_eq!(char_len(line.segments[0].code()), 70);
        assert_eq!(char_len(line.segments[0].continuation()), 2);
        assert_eq!(char_len(line.segments[0].ignore()), 18);
    }

    #[test]
    fn test_dbcs_so_si_detect() {
        let mut input = "\
1234567890123456789012345678901234567890123456789012345678901234567890>>345678901234567890\n\
               67890123456789012345678901234567890123456789012345678901 34567890\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL_DBCS));

        assert!(!line.continuation_error);
        assert!(line.so_si_continuation);
        assert!(line.segments[0].so_si_continuation);
        assert_eq!(char_len(line.segments[0].continuation()), 2);
    }

    #[test]
    fn test_missing_next_line() {
        let mut input =
            "123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        assert!(line.missing_next_line);
        assert_eq!(line.segments.len(), 1);
        assert_eq!(char_len(line.segments[0].continuation()), 1);
    }

    #[test]
    fn test_eof_copy_rules_trim_dangling_continuation() {
        let mut input =
            "123456789012345678901234567890123456789012345678901234567890123456789012345678901234567890\n";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL_COPY));

        assert!(!line.missing_next_line);
        assert_eq!(char_len(line.segments[0].continuation()), 0);
    }

    #[test]
    fn test_eol_classification() {
        let cases = [
            (" ", LineEnding::None),
            (" \n", LineEnding::Lf),
            (" \r", LineEnding::Cr),
            (" \r\n", LineEnding::Crlf),
        ];
        for (text, expected) in cases {
            let mut input = text;
            let mut line = LogicalLine::default();
            assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));
            assert_eq!(line.segments[0].eol, expected);
            assert!(input.is_empty());
        }
    }

    #[test]
    fn test_end_80_disables_continuation() {
        let opts = IctlLayout {
            end: 80,
            ..DEFAULT_ICTL
        };
        let long = "X".repeat(90);
        let mut input = long.as_str();
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &opts));
        assert_eq!(line.segments.len(), 1);
        assert!(!line.missing_next_line);
    }

    #[test]
    fn test_continuation_zero_disables() {
        let opts = IctlLayout {
            continuation: 0,
            ..DEFAULT_ICTL
        };
        let long = "X".repeat(90);
        let mut input = long.as_str();
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &opts));
        assert_eq!(line.segments.len(), 1);
        assert!(!line.missing_next_line);
    }

    #[test]
    fn test_iterator_visits_code_only() {
        let text = format!("{:<71}X 2345678\n               BBBB\n", "AAAA");
        let mut input = text.as_str();
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        let collected: String = line.code_iter().collect();
        assert!(collected.starts_with("AAAA"));
        assert!(collected.ends_with("BBBB"));
        assert!(!collected.contains('X'));
        assert_eq!(collected.len(), 71 + 4);
    }

    #[test]
    fn test_iterator_roundtrip() {
        let text = format!("{:<71}X\n               REMARKS\n", "LABEL    LR    1,2");
        let mut input = text.as_str();
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        let mut it = line.code_iter();
        let start = it;
        let mut count = 0;
        while it.next().is_some() {
            count += 1;
        }
        assert_eq!(count, line.code_len());
        for _ in 0..count {
            assert!(it.prev().is_some());
        }
        assert_eq!(it, start);
    }

    #[test]
    fn test_iterator_coordinates() {
        let mut input = "ABC";
        let mut line = LogicalLine::default();
        assert!(extract_logical_line(&mut line, &mut input, &DEFAULT_ICTL));

        let mut it = line.code_iter();
        assert_eq!(it.coordinates(), (0, 0));
        it.next();
        it.next();
        assert_eq!(it.coordinates(), (2, 0));
    }
}
