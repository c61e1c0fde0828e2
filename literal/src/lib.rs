//! Number literal decoding for Roster.
//!
//! Evaluates Java-style number literals (`42`, `0x1F`, `017`, `1.5e3`, `7L`,
//! `2f`) the way a lexer does: the literal always yields a value, and any
//! precision or range problem is reported as a [`Diagnostic`] next to it.
//! No IO, no async.

mod diagnostic;
mod number;
mod scan;

pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use number::{Decoded, NumberLiteral, NumberPrefix, NumberSuffix, NumberValue};
pub use scan::scan;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("number literal must not be empty")]
    Empty,
    #[error("expected a number literal, found '{found}'")]
    NotANumber { found: char },
    #[error("unexpected input '{rest}' after number literal at byte {offset}")]
    TrailingInput { offset: usize, rest: String },
}

/// Decode `src` as exactly one number literal.
///
/// Unlike [`scan`], the whole input must be consumed.
pub fn decode(src: &str) -> Result<Decoded, LiteralError> {
    let Some(first) = src.chars().next() else {
        return Err(LiteralError::Empty);
    };

    let decoded = scan(src).ok_or(LiteralError::NotANumber { found: first })?;

    let offset = decoded.literal().span().end;
    if offset < src.len() {
        return Err(LiteralError::TrailingInput {
            offset,
            rest: src[offset..].to_string(),
        });
    }

    tracing::debug!(
        literal = src,
        value = ?decoded.literal().value(),
        diagnostics = decoded.diagnostics().len(),
        "decoded number literal"
    );
    Ok(decoded)
}
