//! End-to-end driver tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_source(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

#[test]
fn parses_clean_program() {
    let file = write_source(
        "\
MYPROG   CSECT\n\
         USING MYPROG,12\n\
         LR    1,2\n\
         LA    3,TABLE(4)\n\
         BR    14\n\
TABLE    DS    10F\n\
         END\n",
    );

    Command::cargo_bin("zasm")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("statement(s), 0 diagnostic(s)"));
}

#[test]
fn reports_syntax_errors() {
    let file = write_source("         LA    1,(2\n");

    Command::cargo_bin("zasm")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("S0011"));
}

#[test]
fn runs_cics_preprocessor() {
    let file = write_source("         MVC   RESP,DFHRESP(NORMAL)\n         END\n");

    Command::cargo_bin("zasm")
        .unwrap()
        .arg("--cics=NOPROLOG,NOEPILOG")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn rejects_unknown_architecture() {
    let file = write_source("         END\n");

    Command::cargo_bin("zasm")
        .unwrap()
        .args(["--arch", "Z99"])
        .arg(file.path())
        .assert()
        .failure();
}
