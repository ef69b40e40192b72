//! zasm-pp - Source-to-source preprocessors of the zasm front end.
//!
//! The DB2 and CICS preprocessors rewrite embedded non-assembler
//! statements into pure assembler before the statement parser ever sees
//! the document. Both operate on the line-oriented [`document::Document`]
//! model: each takes a document and returns a document, so they chain by
//! composition, and every replaced line flows with the original line
//! number of the statement that produced it.

pub mod cics;
pub mod db2;
pub mod dfh_tables;
pub mod document;
pub mod stmt;

pub use cics::{CicsOptions, CicsPreprocessor};
pub use db2::{Db2Options, Db2Preprocessor};
pub use document::{is_continued, Document, DocumentLine};
pub use stmt::{NameRange, PreprocDetails, PreprocessorStatement};

/// A member resolved by the host's library lookup.
#[derive(Clone, Debug)]
pub struct LibraryMember {
    pub text: String,
    pub location: String,
}

/// Synchronous library lookup provided by the host.
pub type LibraryFetcher<'a> = &'a mut dyn FnMut(&str) -> Option<LibraryMember>;

/// A member that was pulled into the document by an include directive.
#[derive(Clone, Debug)]
pub struct IncludedMember {
    pub name: String,
    pub text: String,
    pub location: String,
}
