//! DB2 and CICS preprocessor behavior over whole documents.

use zasm_pp::cics::{CicsOptions, CicsPreprocessor};
use zasm_pp::db2::{Db2Options, Db2Preprocessor};
use zasm_pp::document::Document;
use zasm_pp::{LibraryMember, PreprocessorStatement};
use zasm_util::diagnostic::{Diagnostic, DiagnosticCollector};

fn run_db2(source: &str, options: Db2Options) -> (Document, Vec<Diagnostic>, Vec<PreprocessorStatement>) {
    let diags = DiagnosticCollector::new();
    let mut pp = Db2Preprocessor::new(options, None, Some(&diags), None);
    let out = pp.generate_replacement(Document::new(source));
    let statements = pp.take_statements();
    drop(pp);
    (out, diags.take(), statements)
}

fn run_cics(source: &str, options: CicsOptions) -> (Document, Vec<Diagnostic>, Vec<PreprocessorStatement>) {
    let diags = DiagnosticCollector::new();
    let mut pp = CicsPreprocessor::new(options, Some(&diags), None);
    let out = pp.generate_replacement(Document::new(source));
    let statements = pp.take_statements();
    drop(pp);
    (out, diags.take(), statements)
}

fn has_line(doc: &Document, predicate: impl Fn(&str) -> bool) -> bool {
    doc.lines().iter().any(|l| predicate(l.text()))
}

// --- DB2 ---

#[test]
fn db2_conditional_identity_without_sql() {
    let source = "         LR    1,2\n         BR    14\n";
    let (out, diags, _) = run_db2(
        source,
        Db2Options {
            conditional: true,
            version: String::new(),
        },
    );
    assert_eq!(out.text(), source);
    assert!(diags.is_empty());
}

#[test]
fn db2_injects_sqlsect_unconditionally() {
    let (out, _, _) = run_db2("         LR    1,2\n", Db2Options::default());
    let text = out.text();
    assert!(text.contains("SQLSECT &TYPE"));
    assert!(text.contains("         LR    1,2\n"));
}

#[test]
fn db2_exec_sql_generates_call_mock() {
    let source = "         EXEC SQL SELECT 1 FROM SYSIBM.SYSDUMMY1\n";
    let (out, diags, _) = run_db2(source, Db2Options::default());
    let text = out.text();

    assert!(text.contains("         BRAS  15,*+56"));
    assert!(text.contains("         L     15,=V(DSNHLI)"));
    assert!(text.contains("         BALR  14,15"));
    // the original statement is echoed as a comment
    assert!(text.contains("*        EXEC SQL SELECT 1 FROM SYSIBM.SYSDUMMY1"));
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn db2_host_variables_reported_as_operands() {
    let source = "         EXEC SQL SELECT :A, :B INTO :C FROM T\n";
    let (out, diags, statements) = run_db2(source, Db2Options::default());
    let text = out.text();

    // three input parameters drive the generated parameter blocks
    assert!(text.contains("         LA    14,SQLPVARS+16"));

    assert_eq!(statements.len(), 1);
    let ops = &statements[0].details.operands;
    let names: Vec<&str> = ops.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
    // ranges point at the names in the original text
    for op in ops {
        let col = op.r.start.column;
        assert_eq!(&source[col..col + 1], op.name.as_str());
    }
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn db2_declare_has_no_codegen() {
    let source = "         EXEC SQL DECLARE C1 CURSOR FOR SELECT 1\n";
    let (out, _, _) = run_db2(source, Db2Options::default());
    assert!(!out.text().contains("BRAS"));
}

#[test]
fn db2_include_sqlca() {
    let source = "         EXEC SQL INCLUDE SQLCA\n";
    let (out, diags, statements) = run_db2(source, Db2Options::default());
    assert!(out.text().contains("SQLCAID  DS    CL8      ID"));
    assert!(diags.is_empty());
    assert!(statements[0].is_include);
}

#[test]
fn db2_include_member_through_fetcher() {
    let diags = DiagnosticCollector::new();
    let mut fetch = |name: &str| {
        (name == "MYMEM").then(|| LibraryMember {
            text: "         LR    2,3\n".to_string(),
            location: "libs/MYMEM".to_string(),
        })
    };
    let mut pp = Db2Preprocessor::new(Db2Options::default(), Some(&mut fetch), Some(&diags), None);
    let out = pp.generate_replacement(Document::new("         EXEC SQL INCLUDE MYMEM\n"));
    assert!(out.text().contains("         LR    2,3"));
    assert_eq!(pp.take_included_members().len(), 1);
    assert!(diags.diagnostics().is_empty());
}

#[test]
fn db2_include_miss_reports_db002() {
    let (_, diags, _) = run_db2("         EXEC SQL INCLUDE MISSING\n", Db2Options::default());
    assert!(diags.iter().any(|d| d.code == "DB002"));
}

#[test]
fn db2_end_emits_working_storage_and_version() {
    let source = "         EXEC SQL COMMIT\n         END\n";
    let (out, _, _) = run_db2(
        source,
        Db2Options {
            conditional: false,
            version: "VERSION-1".to_string(),
        },
    );
    let text = out.text();
    assert!(text.contains("SQLDSECT DSECT"));
    assert!(text.contains("SQLVERSP DC    CL4'VER.'"));
    assert!(text.contains("SQLVERD1 DC    CL64'VERSION-1'"));
    // the END card itself survives after the storage block
    let storage = text.find("SQLDSECT DSECT").unwrap();
    let end = text.find("         END\n").unwrap();
    assert!(storage < end);
}

#[test]
fn db2_long_version_is_chunked() {
    let long_version = "X".repeat(70);
    let source = "         EXEC SQL COMMIT\n         END\n";
    let (out, _, _) = run_db2(
        source,
        Db2Options {
            conditional: false,
            version: long_version,
        },
    );
    let text = out.text();
    assert!(text.contains("SQLVERS  DS    CL68"));
    assert!(text.contains("SQLVERD1 DC    CL32"));
    assert!(text.contains("SQLVERD3 DC    CL32"));
}

#[test]
fn db2_sql_type_rowid() {
    let (out, diags, _) = run_db2("HV       SQL TYPE IS ROWID\n", Db2Options::default());
    assert!(has_line(&out, |l| l.starts_with("HV") && l.ends_with("H,CL40")));
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn db2_sql_type_result_set_locator() {
    let (out, diags, _) = run_db2(
        "RS       SQL TYPE IS RESULT_SET_LOCATOR VARYING\n",
        Db2Options::default(),
    );
    assert!(has_line(&out, |l| l.starts_with("RS") && l.ends_with("FL4")));
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn db2_sql_type_blob_with_scale() {
    let (out, diags, _) = run_db2("LOB      SQL TYPE IS BLOB 2K\n", Db2Options::default());
    assert!(has_line(&out, |l| l.starts_with("LOB ") && l.ends_with("0FL4")));
    assert!(has_line(&out, |l| l.starts_with("LOB_LENGTH") && l.ends_with("FL4")));
    assert!(has_line(&out, |l| l.starts_with("LOB_DATA") && l.ends_with("CL2048")));
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn db2_sql_type_unknown_reports_db004() {
    let (_, diags, _) = run_db2("HV       SQL TYPE IS NONSENSE\n", Db2Options::default());
    assert!(diags.iter().any(|d| d.code == "DB004"));
}

// --- CICS ---

#[test]
fn cics_exec_cics_emits_echo_and_call() {
    let source = "LBL      EXEC CICS RETURN\n";
    let (out, diags, statements) = run_cics(source, CicsOptions::default());
    let text = out.text();

    assert!(text.contains("*        EXEC CICS RETURN"));
    assert!(text.contains("LBL      DFHECALL =X'0E'"));
    assert!(diags.is_empty(), "{diags:?}");

    assert_eq!(statements.len(), 1);
    let details = &statements[0].details;
    assert_eq!(details.label.as_ref().unwrap().name, "LBL");
    assert_eq!(details.instruction.as_ref().unwrap().name, "RETURN");
}

#[test]
fn cics_exec_cics_operand_ranges() {
    let source = "         EXEC CICS RETURN RESP(R) RESP2(R2)\n";
    let (_, diags, statements) = run_cics(source, CicsOptions::default());
    let details = &statements[0].details;
    let names: Vec<&str> = details.operands.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["RESP(R)", "RESP2(R2)"]);
    assert!(diags.is_empty());
}

#[test]
fn cics_dfhresp_substitution() {
    let source = "         MVC   RESPVAL,DFHRESP(NORMAL)\n";
    let (out, diags, _) = run_cics(source, CicsOptions::default());
    let text = out.text();

    // echo plus the substituted statement with =F'0' at the use site
    assert!(text.contains("*        MVC   RESPVAL,DFHRESP(NORMAL)"));
    assert!(text.contains("MVC  RESPVAL,=F'0'"));
    assert!(diags.is_empty(), "{diags:?}");
}

#[test]
fn cics_dfhvalue_substitution() {
    let source = "         CLC   STATE,DFHVALUE(ACQUIRED)\n";
    let (out, _, _) = run_cics(source, CicsOptions::default());
    assert!(out.text().contains("=F'69'"));
}

#[test]
fn cics_unknown_dfhresp_name_passes_through() {
    let source = "         MVC   RESPVAL,DFHRESP(NOSUCHNAME)\n";
    let (out, _, _) = run_cics(source, CicsOptions::default());
    // no substitution happened, the line survives verbatim
    assert!(out.text().contains("         MVC   RESPVAL,DFHRESP(NOSUCHNAME)"));
}

#[test]
fn cics_null_dfhresp_argument() {
    let source = "         MVC   RESPVAL,DFHRESP()\n";
    let (out, diags, _) = run_cics(source, CicsOptions::default());
    let text = out.text();
    assert!(diags.iter().any(|d| d.code == "CIC002"));
    assert!(text.contains("*DFH7218I S  SUB-OPERAND(S) OF 'DFHRESP' CANNOT BE NULL. COMMAND NOT"));
    assert!(text.contains("         DFHEIMSG 12"));
}

#[test]
fn cics_substituted_output_is_stable() {
    // without prolog/epilog injections, a substituted document re-runs to
    // byte-identical output
    let options = CicsOptions {
        prolog: false,
        epilog: false,
        leasm: false,
    };
    let source = "         MVC   RESPVAL,DFHRESP(NORMAL)\n         END\n";

    let (out1, _, _) = run_cics(source, options);
    let text1 = out1.text();
    assert!(text1.contains("=F'0'"));

    let (out2, _, _) = run_cics(&text1, options);
    assert_eq!(out2.text(), text1);
}

#[test]
fn cics_csect_triggers_prolog_injection() {
    let source = "MYPROG   CSECT\n         LR    1,2\n         END\n";
    let (out, _, _) = run_cics(source, CicsOptions::default());
    let text = out.text();

    assert!(text.contains("         DFHEIGBL ,,,NOLE          INSERTED BY TRANSLATOR"));
    assert!(text.contains("         DFHEIENT                  INSERTED BY TRANSLATOR"));
    assert!(text.contains("         DFHEIRET                  INSERTED BY TRANSLATOR"));
    assert!(text.contains("         DFHEIEND                  INSERTED BY TRANSLATOR"));

    // prolog comes after the CSECT card
    let csect = text.find("MYPROG   CSECT").unwrap();
    let prolog = text.find("DFHEIENT").unwrap();
    assert!(csect < prolog);
}

#[test]
fn cics_rsect_uses_rs_globals() {
    let source = "MYPROG   RSECT\n         END\n";
    let (out, _, _) = run_cics(source, CicsOptions::default());
    assert!(out.text().contains("DFHEIGBL ,,RS,NOLE"));
}

#[test]
fn cics_missing_end_warns() {
    let source = "MYPROG   CSECT\n         LR    1,2\n";
    let (out, _, _) = run_cics(source, CicsOptions::default());
    let text = out.text();
    assert!(text.contains("*DFH7041I W  NO END CARD FOUND - COPYBOOK ASSUMED."));
    assert!(text.contains("         DFHEIMSG 4"));
}

#[test]
fn cics_xopts_overrides_options() {
    let source = "*ASM XOPTS(NOPROLOG NOEPILOG LEASM)\nMYPROG   CSECT\n         END\n";
    let diags = DiagnosticCollector::new();
    let mut pp = CicsPreprocessor::new(CicsOptions::default(), Some(&diags), None);
    let out = pp.generate_replacement(Document::new(source));

    let options = pp.current_options();
    assert!(!options.prolog);
    assert!(!options.epilog);
    assert!(options.leasm);

    let text = out.text();
    assert!(!text.contains("DFHEIENT"));
    assert!(text.contains("DFHEIGBL ,,,LE"));
}

#[test]
fn cics_exec_continuation_error() {
    let source = format!("{:<71}X\nWRONG    INDENT\n", "LBL      EXEC CICS SEND TEXT");
    let (out, diags, _) = run_cics(&source, CicsOptions::default());
    let text = out.text();
    assert!(diags.iter().any(|d| d.code == "CIC001"));
    assert!(text.contains("*DFH7080I W  CONTINUATION OF EXEC COMMAND IGNORED."));
}

#[test]
fn preprocessors_chain() {
    let source = "\
MYPROG   CSECT\n\
         EXEC SQL COMMIT\n\
         END\n";

    let diags = DiagnosticCollector::new();
    let mut cics = CicsPreprocessor::new(CicsOptions::default(), Some(&diags), None);
    let after_cics = cics.generate_replacement(Document::new(source));

    let mut db2 = Db2Preprocessor::new(Db2Options::default(), None, Some(&diags), None);
    let after_both = db2.generate_replacement(after_cics);

    let text = after_both.text();
    assert!(text.contains("DFHEIENT"));
    assert!(text.contains("=V(DSNHLI)"));
}
