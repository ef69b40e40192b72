//! zasm-util - Shared infrastructure for the zasm front end.
//!
//! This crate provides the types every phase of the front end depends on:
//! source positions and ranges (with UTF-16 column reporting), the
//! diagnostic model with its stable code taxonomy, the semantic
//! highlighting sink, and a handful of string helpers tuned for
//! column-oriented assembler text.

pub mod diagnostic;
pub mod error;
pub mod hl;
pub mod span;
pub mod strings;

pub use diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticConsumer, Severity};
pub use error::ConfigError;
pub use hl::{HlScope, HlSymbol, SourceInfoProcessor};
pub use span::{Position, Range};
