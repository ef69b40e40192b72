//! zasm - command-line front end driver.
//!
//! Reads an assembler source file, runs the configured preprocessors,
//! splits and parses every logical line, and prints the collected
//! diagnostics. Exits non-zero when any error-severity diagnostic was
//! produced.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use zasm_catalog::{InstructionCatalog, SystemArchitecture};
use zasm_lex::decode_utf8;
use zasm_lex::logical_line::{extract_logical_line, LogicalLine, DEFAULT_ICTL};
use zasm_par::fields::{extract_ictl, split_statement, ProcessingForm};
use zasm_pp::cics::{CicsOptions, CicsPreprocessor};
use zasm_pp::db2::{Db2Options, Db2Preprocessor};
use zasm_pp::document::Document;
use zasm_util::diagnostic::{DiagnosticCollector, Severity};
use zasm_util::hl::SourceInfoProcessor;

struct Config {
    arch: SystemArchitecture,
    goff: bool,
    db2: Option<Db2Options>,
    cics: Option<CicsOptions>,
    input: String,
}

const USAGE: &str = "\
usage: zasm [options] FILE

options:
    --arch NAME        instruction set architecture (UNI, DOS, 370, XA,
                       ESA, Z1-Z9); default UNI
    --goff             enable GOFF object format semantics
    --db2[=VERSION]    run the DB2 preprocessor (optional version string)
    --db2-conditional  DB2: return input unchanged without SQL statements
    --cics[=OPTS]      run the CICS preprocessor; OPTS is a comma list of
                       PROLOG, NOPROLOG, EPILOG, NOEPILOG, LEASM, NOLEASM
";

fn parse_args(args: &[String]) -> Result<Config> {
    let mut config = Config {
        arch: SystemArchitecture::Uni,
        goff: false,
        db2: None,
        cics: None,
        input: String::new(),
    };
    let mut db2_conditional = false;

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--arch" => {
                let name = it.next().context("--arch requires a value")?;
                config.arch = SystemArchitecture::from_name(name)
                    .with_context(|| format!("unknown system architecture: {name}"))?;
            }
            "--goff" => config.goff = true,
            "--db2" => config.db2 = Some(Db2Options::default()),
            "--db2-conditional" => db2_conditional = true,
            "--cics" => config.cics = Some(CicsOptions::default()),
            "--help" | "-h" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            _ => {
                if let Some(version) = arg.strip_prefix("--db2=") {
                    config.db2 = Some(Db2Options {
                        conditional: false,
                        version: version.to_string(),
                    });
                } else if let Some(opts) = arg.strip_prefix("--cics=") {
                    let mut cics = CicsOptions::default();
                    for opt in opts.split(',') {
                        match opt.to_ascii_uppercase().as_str() {
                            "PROLOG" => cics.prolog = true,
                            "NOPROLOG" => cics.prolog = false,
                            "EPILOG" => cics.epilog = true,
                            "NOEPILOG" => cics.epilog = false,
                            "LEASM" => cics.leasm = true,
                            "NOLEASM" => cics.leasm = false,
                            other => bail!("unknown CICS preprocessor option: {other}"),
                        }
                    }
                    config.cics = Some(cics);
                } else if arg.starts_with('-') {
                    bail!("unknown option: {arg}\n{USAGE}");
                } else if config.input.is_empty() {
                    config.input = arg.clone();
                } else {
                    bail!("multiple input files given\n{USAGE}");
                }
            }
        }
    }

    if let Some(db2) = &mut config.db2 {
        db2.conditional = db2_conditional;
    }
    if config.input.is_empty() {
        bail!("no input file given\n{USAGE}");
    }
    Ok(config)
}

fn run(config: &Config) -> Result<bool> {
    let bytes = std::fs::read(&config.input)
        .with_context(|| format!("unable to read {}", config.input))?;
    let (text, _substitution) = decode_utf8(&bytes);

    let diags = DiagnosticCollector::new();
    let hl = SourceInfoProcessor::new();

    let mut doc = Document::new(&text);
    if let Some(cics) = config.cics {
        let mut pp = CicsPreprocessor::new(cics, Some(&diags), Some(&hl));
        doc = pp.generate_replacement(doc);
    }
    if let Some(db2) = config.db2.clone() {
        let mut pp = Db2Preprocessor::new(db2, None, Some(&diags), Some(&hl));
        doc = pp.generate_replacement(doc);
    }

    let catalog = InstructionCatalog::new(config.arch);
    let source = doc.text();

    let mut opts = DEFAULT_ICTL;
    let mut input = source.as_str();
    let mut line = LogicalLine::default();
    let mut base_line = 0usize;
    let mut statements = 0usize;
    let mut process_allowed = true;

    while extract_logical_line(&mut line, &mut input, &opts) {
        let stmt = split_statement(
            &line,
            base_line,
            &opts,
            &catalog,
            config.goff,
            process_allowed,
            &diags,
            Some(&hl),
        );

        if stmt.form != ProcessingForm::Ignored {
            statements += 1;
            process_allowed = false;
            if let Some(new_opts) = extract_ictl(&stmt) {
                opts = new_opts;
            }
        }

        base_line += line.segments.len();
    }

    let mut collected = diags.take();
    collected.sort_by_key(|d| (d.range.start, d.code));

    let mut had_errors = false;
    for d in &collected {
        had_errors |= d.severity == Severity::Error;
        println!(
            "{} {} {}:{} {}",
            d.severity,
            d.code,
            d.range.start.line + 1,
            d.range.start.column + 1,
            d.message
        );
    }
    println!(
        "{}: {} statement(s), {} diagnostic(s)",
        config.input,
        statements,
        collected.len()
    );

    Ok(had_errors)
}

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    let had_errors = run(&config)?;
    Ok(if had_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let config = parse_args(&args(&["input.asm"])).unwrap();
        assert_eq!(config.arch, SystemArchitecture::Uni);
        assert!(!config.goff);
        assert!(config.db2.is_none());
        assert!(config.cics.is_none());
        assert_eq!(config.input, "input.asm");
    }

    #[test]
    fn test_parse_args_arch_and_preprocessors() {
        let config =
            parse_args(&args(&["--arch", "Z9", "--goff", "--db2=V13", "--cics=NOPROLOG", "in.asm"]))
                .unwrap();
        assert_eq!(config.arch, SystemArchitecture::Zs9);
        assert!(config.goff);
        assert_eq!(config.db2.as_ref().unwrap().version, "V13");
        assert!(!config.cics.unwrap().prolog);
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        assert!(parse_args(&args(&["--frobnicate", "in.asm"])).is_err());
        assert!(parse_args(&args(&["--arch", "Z99", "in.asm"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
    }
}
