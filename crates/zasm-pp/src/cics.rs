//! The CICS source-to-source preprocessor.
//!
//! Recognizes `*ASM XOPTS(...)` option cards, `EXEC CICS` commands and
//! DFHRESP/DFHVALUE value references, echoes the original statements as
//! comments and emits the translator's replacement cards. A small state
//! machine tracks sections so the DFHEIGBL/DFHEIENT/DFHEISTG/DFHEIRET
//! scaffolding is injected at the places the real translator uses.

use zasm_lex::logical_line::{
    append_to_logical_line, finish_logical_line, IctlLayout, LogicalLine, LogicalLineIter,
    DEFAULT_ICTL,
};
use zasm_util::diagnostic::{Diagnostic, DiagnosticConsumer};
use zasm_util::hl::SourceInfoProcessor;
use zasm_util::span::{Position, Range};
use zasm_util::strings;

use crate::dfh_tables::{DFHRESP_OPERANDS, DFHVALUE_OPERANDS};
use crate::document::{is_continued, Document, DocumentLine};
use crate::stmt::{
    do_highlighting, highlight_line_tail, iter_pos, split_operands, NameRange, PreprocDetails,
    PreprocessorStatement,
};

/// CICS preprocessor options; `*ASM XOPTS` cards may override them.
#[derive(Clone, Copy, Debug)]
pub struct CicsOptions {
    pub prolog: bool,
    pub epilog: bool,
    pub leasm: bool,
}

impl Default for CicsOptions {
    fn default() -> Self {
        Self {
            prolog: true,
            epilog: true,
            leasm: false,
        }
    }
}

/// EXEC CICS statements resume in column 2.
const CICS_EXTRACT: IctlLayout = IctlLayout {
    begin: 1,
    end: 71,
    continuation: 2,
    dbcs: false,
    eof_copy_rules: false,
};

const VALID_COLS: usize = 1 + DEFAULT_ICTL.end - (DEFAULT_ICTL.begin - 1);

fn char_prefix(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn char_suffix(s: &str, start: usize) -> &str {
    match s.char_indices().nth(start) {
        Some((i, _)) => &s[i..],
        None => "",
    }
}

fn skip_blanks(it: &mut LogicalLineIter<'_, '_>) {
    while it.peek() == Some(' ') {
        it.next();
    }
}

fn next_word(it: &mut LogicalLineIter<'_, '_>) -> String {
    let mut word = String::new();
    while let Some(c) = it.peek() {
        if c == ' ' {
            break;
        }
        word.push(c);
        it.next();
    }
    word
}

/// Outcome of the DFHRESP/DFHVALUE substitution pass.
enum DfhSubstitution {
    Performed { operands: String, count: usize },
    NullArgument { variable: &'static str },
}

/// The CICS preprocessor.
pub struct CicsPreprocessor<'a> {
    options: CicsOptions,
    diags: Option<&'a dyn DiagnosticConsumer>,
    src_proc: Option<&'a SourceInfoProcessor>,

    result: Vec<DocumentLine>,
    statements: Vec<PreprocessorStatement>,

    end_seen: bool,
    global_macro_called: bool,
    pending_prolog: bool,
    pending_dfheistg_prolog: bool,
    pending_dfh_null_error: Option<&'static str>,
}

impl<'a> CicsPreprocessor<'a> {
    pub fn new(
        options: CicsOptions,
        diags: Option<&'a dyn DiagnosticConsumer>,
        src_proc: Option<&'a SourceInfoProcessor>,
    ) -> Self {
        Self {
            options,
            diags,
            src_proc,
            result: Vec::new(),
            statements: Vec::new(),
            end_seen: false,
            global_macro_called: false,
            pending_prolog: false,
            pending_dfheistg_prolog: false,
            pending_dfh_null_error: None,
        }
    }

    /// Options after any `*ASM XOPTS` overrides.
    pub fn current_options(&self) -> CicsOptions {
        self.options
    }

    pub fn take_statements(&mut self) -> Vec<PreprocessorStatement> {
        std::mem::take(&mut self.statements)
    }

    fn add_diag(&self, d: Diagnostic) {
        if let Some(diags) = self.diags {
            diags.add_diagnostic(d);
        }
    }

    fn replaced(&mut self, text: &str) {
        self.result.push(DocumentLine::replaced(text));
    }

    // --- injected cards ---

    fn inject_no_end_warning(&mut self) {
        self.replaced("*DFH7041I W  NO END CARD FOUND - COPYBOOK ASSUMED.");
        self.replaced("         DFHEIMSG 4");
    }

    fn inject_dfheigbl(&mut self, rsect: bool) {
        let card = match (rsect, self.options.leasm) {
            (true, true) => "         DFHEIGBL ,,RS,LE          INSERTED BY TRANSLATOR",
            (true, false) => "         DFHEIGBL ,,RS,NOLE        INSERTED BY TRANSLATOR",
            (false, true) => "         DFHEIGBL ,,,LE            INSERTED BY TRANSLATOR",
            (false, false) => "         DFHEIGBL ,,,NOLE          INSERTED BY TRANSLATOR",
        };
        self.replaced(card);
    }

    fn inject_prolog(&mut self) {
        self.replaced("         DFHEIENT                  INSERTED BY TRANSLATOR");
    }

    fn inject_dfh_null_error(&mut self, variable: &str) {
        self.replaced(&format!(
            "*DFH7218I S  SUB-OPERAND(S) OF '{variable}' CANNOT BE NULL. COMMAND NOT"
        ));
        self.replaced("*            TRANSLATED.");
        self.replaced("         DFHEIMSG 12");
    }

    fn inject_end_code(&mut self) {
        if self.options.epilog {
            self.replaced("         DFHEIRET                  INSERTED BY TRANSLATOR");
        }
        if self.options.prolog {
            self.replaced("         DFHEISTG                  INSERTED BY TRANSLATOR");
            self.replaced("         DFHEIEND                  INSERTED BY TRANSLATOR");
        }
    }

    fn inject_dfheistg(&mut self) {
        self.replaced("         DFHEISTG                  INSERTED BY TRANSLATOR");
    }

    // --- *ASM XOPTS ---

    fn try_asm_xopts(&mut self, input: &str, lineno: usize) -> bool {
        if !input.get(..5).is_some_and(|p| p.eq_ignore_ascii_case("*ASM ")) {
            return false;
        }

        let line = input;
        if line.chars().count() > DEFAULT_ICTL.end && line.chars().nth(DEFAULT_ICTL.end) != Some(' ') {
            self.add_diag(Diagnostic::cic001(Range::point(Position::new(lineno, 0))));
        }

        let mut line = char_prefix(char_suffix(line, 5), DEFAULT_ICTL.end - 5);

        let keyword = strings::next_sequence_until(line, "('");
        if keyword.eq_ignore_ascii_case("XOPTS")
            || keyword.eq_ignore_ascii_case("XOPT")
            || keyword.eq_ignore_ascii_case("CICS")
        {
            line = &line[(keyword.len() + 1).min(line.len())..];
        } else {
            return false;
        }

        let mut words = Vec::new();
        while !line.is_empty() && !line.starts_with('\'') && !line.starts_with(')') {
            let word = strings::next_sequence_until(line, " ,)'");
            words.push(word);
            line = &line[word.len()..];
            if let Some(n) = line.find(|c| c != ' ' && c != ',') {
                line = &line[n..];
            } else {
                line = "";
            }
        }

        if line.is_empty() || (!line.starts_with('\'') && !line.starts_with(')')) {
            return false;
        }

        for word in words {
            match word.to_ascii_uppercase().as_str() {
                "PROLOG" => self.options.prolog = true,
                "NOPROLOG" => self.options.prolog = false,
                "EPILOG" => self.options.epilog = true,
                "NOEPILOG" => self.options.epilog = false,
                "LEASM" => self.options.leasm = true,
                "NOLEASM" => self.options.leasm = false,
                _ => {}
            }
        }

        true
    }

    // --- section state machine ---

    fn process_asm_statement(&mut self, word: &str, sect_name: &str) -> bool {
        match word.as_bytes().first() {
            Some(b'D') => {
                if !std::mem::replace(&mut self.global_macro_called, true) {
                    self.inject_dfheigbl(false);
                }
                if word.starts_with("DFHE") {
                    return false;
                }
                // DSECT otherwise
                if sect_name != "DFHEISTG" {
                    return false;
                }
                self.pending_dfheistg_prolog = self.options.prolog;
            }
            Some(b'S') | Some(b'C') => {
                if !std::mem::replace(&mut self.global_macro_called, true) {
                    self.inject_dfheigbl(false);
                }
                self.pending_prolog = self.options.prolog;
            }
            Some(b'R') => {
                self.global_macro_called = true;
                self.inject_dfheigbl(true);
                self.pending_prolog = self.options.prolog;
            }
            Some(b'E') => {
                self.end_seen = true;
                self.inject_end_code();
            }
            _ => return false,
        }
        true
    }

    fn create_line_preview(input: &str) -> (&str, usize) {
        let mut rest = input;
        let (line, _) = zasm_lex::eol::extract_line(&mut rest);
        let preview = char_prefix(char_suffix(line, DEFAULT_ICTL.begin - 1), VALID_COLS);
        (preview, preview.chars().count())
    }

    fn is_ignored_line(line: &str, line_len_chars: usize) -> bool {
        if line.is_empty() || line.starts_with('*') || line.starts_with(".*") {
            return true;
        }
        // lines full of characters are ignored too
        line_len_chars == VALID_COLS && !line.contains(' ')
    }

    fn process_line_of_interest(&mut self, line: &str) -> bool {
        const INTERESTING: &[&str] = &[
            "START", "CSECT", "RSECT", "DSECT", "DFHEIENT", "DFHEISTG", "END",
        ];

        let section_name = strings::next_nonblank_sequence(line);
        let mut rest = &line[section_name.len()..];
        strings::trim_left(&mut rest);

        for word in INTERESTING {
            if rest.starts_with(word)
                && rest[word.len()..].chars().next().map_or(true, |c| c == ' ')
            {
                return self.process_asm_statement(word, section_name);
            }
        }
        false
    }

    // --- EXEC CICS ---

    fn echo_text(&mut self, ll: &LogicalLine<'_>, label_byte_len: usize, label_char_len: usize) {
        let mut first_line = true;
        for segment in &ll.segments {
            let mut buffer = String::from(char_prefix(segment.line, CICS_EXTRACT.end));

            let after_cont = char_suffix(segment.line, CICS_EXTRACT.end + 1);
            if !after_cont.is_empty() {
                buffer.push(' ');
                buffer.push_str(after_cont);
            }

            if first_line && buffer.len() >= label_byte_len {
                buffer.replace_range(0..label_byte_len, &" ".repeat(label_char_len));
            }
            if buffer.is_empty() {
                buffer.push('*');
            } else {
                buffer.replace_range(0..1, "*");
            }
            self.replaced(&buffer);
            first_line = false;
        }
    }

    fn generate_label_fragment(label: &str, label_char_len: usize) -> String {
        if label_char_len <= 8 {
            format!("{label}{}", " ".repeat(9 - label_char_len))
        } else {
            format!("{label} DS 0H")
        }
    }

    fn inject_call(&mut self, label: &str, label_char_len: usize) {
        if label_char_len <= 8 {
            let fragment = Self::generate_label_fragment(label, label_char_len);
            self.replaced(&format!("{fragment}DFHECALL =X'0E'"));
        } else {
            let fragment = Self::generate_label_fragment(label, label_char_len);
            self.replaced(&fragment);
            self.replaced("         DFHECALL =X'0E'");
        }
    }

    fn process_exec_cics(&mut self, ll: &LogicalLine<'_>, label: &str) {
        let char_len = label.chars().count();
        self.echo_text(ll, label.len(), char_len);
        self.inject_call(label, char_len);
    }

    fn try_exec_cics(
        &mut self,
        lines: &[DocumentLine],
        i: &mut usize,
        lineno: Option<usize>,
    ) -> bool {
        let mut ll = LogicalLine::default();
        loop {
            let mut input = lines[*i].text();
            let continued = append_to_logical_line(&mut ll, &mut input, &CICS_EXTRACT);
            *i += 1;
            if !continued || *i >= lines.len() {
                break;
            }
        }
        finish_logical_line(&mut ll, &CICS_EXTRACT);

        let exec_cics_continuation_error = ll.continuation_error;
        if exec_cics_continuation_error {
            // keep the first line only
            ll.segments.truncate(1);
            ll.continuation_error = false;
        }

        let base_line = lineno.unwrap_or(0);
        let mut it = ll.code_iter();

        let label_start = iter_pos(&it, base_line);
        let label = next_word(&mut it);
        let label_range = Range::new(label_start, iter_pos(&it, base_line));
        skip_blanks(&mut it);

        let instr_start = iter_pos(&it, base_line);
        let exec = next_word(&mut it);
        skip_blanks(&mut it);
        let cics = next_word(&mut it);
        if !exec.eq_ignore_ascii_case("EXEC") || !cics.eq_ignore_ascii_case("CICS") {
            return false;
        }
        skip_blanks(&mut it);

        let command = next_word(&mut it);
        let instr_range = Range::new(instr_start, iter_pos(&it, base_line));
        skip_blanks(&mut it);

        let mut details = PreprocDetails {
            stmt_range: stmt_range_of(&ll, base_line),
            label: (!label.is_empty()).then(|| NameRange::new(label.clone(), label_range)),
            instruction: None,
            operands: split_operands(it, base_line),
            remarks: Vec::new(),
        };

        if !command.is_empty() {
            details.instruction = Some(NameRange::new(command, instr_range));
            self.process_exec_cics(&ll, &label);

            if exec_cics_continuation_error {
                self.add_diag(Diagnostic::cic001(Range::point(Position::new(base_line, 0))));
                self.replaced("*DFH7080I W  CONTINUATION OF EXEC COMMAND IGNORED.");
                self.replaced("         DFHEIMSG 4");
            }
        } else {
            self.add_diag(Diagnostic::cic003(Range::point(Position::new(base_line, 0))));
            self.replaced("*DFH7237I S  INCORRECT SYNTAX AFTER 'EXEC CICS'. COMMAND NOT");
            self.replaced("*            TRANSLATED.");
            self.replaced("         DFHEIMSG 12");

            details.instruction = Some(NameRange::new("EXEC CICS", instr_range));
        }

        if lineno.is_some() {
            let stmt = PreprocessorStatement {
                details,
                is_include: false,
            };
            if let Some(src_proc) = self.src_proc {
                do_highlighting(&stmt, src_proc);
                highlight_line_tail(&ll, base_line, src_proc);
            }
            self.statements.push(stmt);
        }

        true
    }

    // --- DFHRESP/DFHVALUE ---

    /// Quote-aware scan for a `DFHRESP(`/`DFHVALUE(` reference.
    fn contains_dfh_reference(ll: &LogicalLine<'_>) -> bool {
        let code: String = ll.code_iter().collect();
        let upper = code.to_ascii_uppercase();
        let mut search = upper.as_str();
        let mut in_string = false;
        let mut offset = 0;

        // a blank outside a string ends the operand field
        for (i, c) in upper.char_indices() {
            match c {
                '\'' => in_string = !in_string,
                ' ' if !in_string => {
                    search = &upper[..i];
                    break;
                }
                _ => {}
            }
        }
        while let Some(pos) = search.find("DFH") {
            let tail = &search[pos..];
            if tail.starts_with("DFHRESP(") || tail.starts_with("DFHVALUE(") {
                // ignore references inside string literals
                let quotes = upper[..offset + pos].matches('\'').count();
                if quotes % 2 == 0 {
                    return true;
                }
            }
            offset += pos + 3;
            search = &search[pos + 3..];
        }
        false
    }

    fn try_dfh_consume(
        it: &mut LogicalLineIter<'_, '_>,
        word: &str,
        values: &rustc_hash::FxHashMap<&'static str, i32>,
    ) -> Option<Option<String>> {
        let backup = *it;

        for expected in word.chars() {
            match it.peek() {
                Some(c) if c.to_ascii_uppercase() == expected => {
                    it.next();
                }
                _ => {
                    *it = backup;
                    return None;
                }
            }
        }
        if it.peek() != Some('(') {
            *it = backup;
            return None;
        }
        it.next();
        skip_blanks(it);

        let mut value = String::new();
        while let Some(c) = it.peek() {
            if c == ' ' || c == ')' {
                break;
            }
            value.push(c);
            it.next();
        }
        skip_blanks(it);
        if it.peek() != Some(')') {
            *it = backup;
            return None;
        }
        it.next();

        if value.is_empty() {
            return Some(None);
        }
        match values.get(value.to_ascii_uppercase().as_str()) {
            Some(n) => Some(Some(n.to_string())),
            None => {
                *it = backup;
                None
            }
        }
    }

    fn parse_and_substitute(ll: &LogicalLine<'_>) -> DfhSubstitution {
        let mut out = String::new();
        let mut valid_dfh = 0usize;
        let mut it = ll.code_iter();

        let mut next_last_attribute = false;
        let mut next_new_token = true;

        while let Some(c) = it.peek() {
            let last_attribute = std::mem::replace(&mut next_last_attribute, false);
            let new_token = std::mem::replace(&mut next_new_token, false);

            match c {
                ' ' => break, // everything that follows is a comment

                '\'' => {
                    next_new_token = true;
                    out.push(c);
                    it.next();
                    loop {
                        match it.peek() {
                            None => {
                                return DfhSubstitution::Performed {
                                    operands: out,
                                    count: valid_dfh,
                                }
                            }
                            Some('\'') => break,
                            Some(body) => {
                                out.push(body);
                                it.next();
                            }
                        }
                    }
                    // the closing quote; a doubled quote re-enters as a
                    // fresh string opening
                    out.push('\'');
                    it.next();
                    continue;
                }

                ',' => {
                    next_new_token = true;
                    let mut probe = it;
                    probe.next();
                    if probe.peek() == Some(' ') {
                        // skip the comment at the end of the line
                        out.push(',');
                        let here = it;
                        while it.peek().is_some() && it.same_line(&here) {
                            it.next();
                        }
                        continue;
                    }
                }

                '*' | '.' | '-' | '+' | '=' | '<' | '>' | '(' | ')' | '/' | '&' | '|' => {
                    next_new_token = true;
                }

                _ => {
                    if new_token {
                        if matches!(c, 'L' | 'l') {
                            let mut probe = it;
                            probe.next();
                            if probe.peek() == Some('\'') {
                                out.push(c);
                                out.push('\'');
                                it.next();
                                it.next();
                                next_last_attribute = true;
                                next_new_token = true;
                                continue;
                            }
                        } else if !last_attribute && matches!(c, 'D' | 'd') {
                            let mut val =
                                Self::try_dfh_consume(&mut it, "DFHRESP", &DFHRESP_OPERANDS);
                            let mut which = "DFHRESP";
                            if val.is_none() {
                                val = Self::try_dfh_consume(&mut it, "DFHVALUE", &DFHVALUE_OPERANDS);
                                which = "DFHVALUE";
                            }
                            match val {
                                Some(Some(n)) => {
                                    out.push_str("=F'");
                                    out.push_str(&n);
                                    out.push('\'');
                                    valid_dfh += 1;
                                    continue;
                                }
                                Some(None) => {
                                    return DfhSubstitution::NullArgument {
                                        variable: if which == "DFHRESP" {
                                            "DFHRESP"
                                        } else {
                                            "DFHVALUE"
                                        },
                                    };
                                }
                                None => {}
                            }
                        }
                    }
                }
            }

            out.push(c);
            it.next();
        }

        DfhSubstitution::Performed {
            operands: out,
            count: valid_dfh,
        }
    }

    fn emit_substituted(&mut self, label: &str, instruction: &str, operands: &str) {
        let label_char_len = label.chars().count();
        let mut text = String::from(instruction);
        let instr_len = text.chars().count();
        if instr_len < 4 {
            text.push_str(&" ".repeat(4 - instr_len));
        }
        text.push(' ');
        text.push_str(operands);
        text.insert_str(0, &Self::generate_label_fragment(label, label_char_len));

        let mut t = text.as_str();
        let mut prefix = "";
        let mut line_limit = 62;
        loop {
            let part = char_prefix(t, line_limit);
            t = &t[part.len()..];

            if t.is_empty() {
                self.replaced(&format!("{prefix}{part}"));
                break;
            }
            self.replaced(&format!("{prefix}{part}*"));
            prefix = "               ";
            line_limit = 56;
        }
    }

    fn try_dfh_lookup(
        &mut self,
        lines: &[DocumentLine],
        i: &mut usize,
        lineno: Option<usize>,
    ) -> bool {
        let base_line = lineno.unwrap_or(0);

        let mut ll = LogicalLine::default();
        loop {
            let mut input = lines[*i].text();
            let continued = append_to_logical_line(&mut ll, &mut input, &DEFAULT_ICTL);
            *i += 1;
            if !continued || *i >= lines.len() {
                break;
            }
        }
        finish_logical_line(&mut ll, &DEFAULT_ICTL);

        if ll.continuation_error {
            self.add_diag(Diagnostic::cic001(Range::point(Position::new(base_line, 0))));
            return false;
        }

        let mut it = ll.code_iter();
        let label_start = iter_pos(&it, base_line);
        let label = next_word(&mut it);
        let label_range = Range::new(label_start, iter_pos(&it, base_line));
        skip_blanks(&mut it);

        let instr_start = iter_pos(&it, base_line);
        let instruction = next_word(&mut it);
        let instr_range = Range::new(instr_start, iter_pos(&it, base_line));
        skip_blanks(&mut it);

        if it.peek().is_none() || instruction.is_empty() {
            return false;
        }

        // rebuild a line view whose code region starts at the operand field
        let mut op_ll = ll.clone();
        {
            let first = &mut op_ll.segments[0];
            let code = first.code();
            let mut consumed = label.len().min(code.len());
            let mut rest = &code[consumed..];
            consumed += strings::trim_left(&mut rest);
            consumed = (consumed + instruction.len()).min(code.len());
            let mut rest = &code[consumed..];
            consumed += strings::trim_left(&mut rest);
            first.code_off += consumed;
        }

        if !Self::contains_dfh_reference(&op_ll) {
            return false;
        }

        let details = PreprocDetails {
            stmt_range: stmt_range_of(&ll, base_line),
            label: (!label.is_empty()).then(|| NameRange::new(label.clone(), label_range)),
            instruction: Some(NameRange::new(instruction.clone(), instr_range)),
            operands: split_operands(it, base_line),
            remarks: Vec::new(),
        };

        if lineno.is_some() {
            let stmt = PreprocessorStatement {
                details,
                is_include: false,
            };
            if let Some(src_proc) = self.src_proc {
                do_highlighting(&stmt, src_proc);
                highlight_line_tail(&ll, base_line, src_proc);
            }
            self.statements.push(stmt);
        }

        match Self::parse_and_substitute(&op_ll) {
            DfhSubstitution::Performed { operands, count } if count > 0 => {
                self.echo_text(&ll, label.len(), label.chars().count());
                self.emit_substituted(&label, &instruction, &operands);
                true
            }
            DfhSubstitution::Performed { .. } => false,
            DfhSubstitution::NullArgument { variable } => {
                self.add_diag(Diagnostic::cic002(
                    variable,
                    Range::point(Position::new(base_line, 0)),
                ));
                self.pending_dfh_null_error = Some(variable);
                false
            }
        }
    }

    // --- driver ---

    fn is_process_line(s: &str) -> bool {
        s.get(..9).is_some_and(|p| p.eq_ignore_ascii_case("*PROCESS "))
    }

    fn do_general_injections(&mut self) {
        if std::mem::replace(&mut self.pending_prolog, false) {
            self.inject_prolog();
        }
        if std::mem::replace(&mut self.pending_dfheistg_prolog, false) {
            self.inject_dfheistg();
        }
        if let Some(variable) = self.pending_dfh_null_error.take() {
            self.inject_dfh_null_error(variable);
        }
    }

    /// Run the preprocessor over a document.
    pub fn generate_replacement(&mut self, doc: Document) -> Document {
        self.result.clear();

        let lines = doc.lines();
        let mut i = 0;
        let mut skip_continuation = false;
        let mut asm_xopts_allowed = true;

        while i < lines.len() {
            let text = lines[i].text();
            if skip_continuation {
                self.result.push(lines[i].clone());
                skip_continuation = is_continued(text);
                i += 1;
                continue;
            }

            self.do_general_injections();

            let lineno = lines[i].lineno();

            if asm_xopts_allowed && Self::is_process_line(text) {
                self.result.push(lines[i].clone());
                i += 1;
                continue;
            }
            if asm_xopts_allowed && self.try_asm_xopts(text, lineno.unwrap_or(0)) {
                self.result.push(lines[i].clone());
                i += 1;
                continue;
            }

            asm_xopts_allowed = false;

            let (preview, preview_len) = Self::create_line_preview(text);
            if Self::is_ignored_line(preview, preview_len) || self.process_line_of_interest(preview) {
                self.result.push(lines[i].clone());
                skip_continuation = is_continued(text);
                i += 1;
                continue;
            }

            let backup = i;
            if self.try_exec_cics(lines, &mut i, lineno) {
                continue;
            }

            i = backup;
            if self.try_dfh_lookup(lines, &mut i, lineno) {
                continue;
            }

            i = backup;
            self.result.push(lines[i].clone());
            skip_continuation = is_continued(text);
            i += 1;
        }

        self.do_general_injections();
        if !std::mem::replace(&mut self.end_seen, true) && !asm_xopts_allowed {
            // actual code was encountered without an END card
            self.inject_no_end_warning();
        }

        Document::from_lines(std::mem::take(&mut self.result))
    }
}

fn stmt_range_of(ll: &LogicalLine<'_>, base_line: usize) -> Range {
    let end = match ll.segments.last() {
        Some(s) => Position::new(
            base_line + ll.segments.len() - 1,
            s.line.chars().map(char::len_utf16).sum(),
        ),
        None => Position::new(base_line, 0),
    };
    Range::new(Position::new(base_line, 0), end)
}
