use std::ops::Range;

use crate::diagnostic::{Diagnostic, Severity};

/// Radix marker at the start of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberPrefix {
    #[default]
    None,
    /// A leading `0` followed by an octal digit.
    Oct,
    /// `0x` or `0X`.
    Hex,
}

impl NumberPrefix {
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            NumberPrefix::None => 10,
            NumberPrefix::Oct => 8,
            NumberPrefix::Hex => 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberSuffix {
    #[default]
    None,
    /// `l` or `L`.
    Long,
    /// `f` or `F`.
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Int(i64),
    Float(f64),
}

/// A decoded number literal.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    value: NumberValue,
    prefix: NumberPrefix,
    suffix: NumberSuffix,
    span: Range<usize>,
}

impl NumberLiteral {
    pub(crate) fn new(
        value: NumberValue,
        prefix: NumberPrefix,
        suffix: NumberSuffix,
        span: Range<usize>,
    ) -> Self {
        Self {
            value,
            prefix,
            suffix,
            span,
        }
    }

    #[must_use]
    pub fn value(&self) -> NumberValue {
        self.value
    }

    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self.value, NumberValue::Int(_))
    }

    /// Integer view of the literal; floating-point literals read as `0`.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        match self.value {
            NumberValue::Int(v) => v,
            NumberValue::Float(_) => 0,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.value {
            NumberValue::Int(v) => v as f64,
            NumberValue::Float(v) => v,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> NumberPrefix {
        self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> NumberSuffix {
        self.suffix
    }

    /// Byte range the literal occupies in the scanned input.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// A literal together with everything reported while decoding it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    literal: NumberLiteral,
    diagnostics: Vec<Diagnostic>,
}

impl Decoded {
    pub(crate) fn new(literal: NumberLiteral, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            literal,
            diagnostics,
        }
    }

    #[must_use]
    pub fn literal(&self) -> &NumberLiteral {
        &self.literal
    }

    #[must_use]
    pub fn into_literal(self) -> NumberLiteral {
        self.literal
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberLiteral, NumberPrefix, NumberSuffix, NumberValue};

    #[test]
    fn radix_follows_prefix() {
        assert_eq!(NumberPrefix::None.radix(), 10);
        assert_eq!(NumberPrefix::Oct.radix(), 8);
        assert_eq!(NumberPrefix::Hex.radix(), 16);
    }

    #[test]
    fn float_literal_has_no_integer_view() {
        let lit = NumberLiteral::new(
            NumberValue::Float(2.5),
            NumberPrefix::None,
            NumberSuffix::None,
            0..3,
        );
        assert!(!lit.is_integer());
        assert_eq!(lit.as_i64(), 0);
        assert!((lit.as_f64() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn integer_literal_widens_to_float() {
        let lit = NumberLiteral::new(
            NumberValue::Int(-42),
            NumberPrefix::None,
            NumberSuffix::Long,
            0..4,
        );
        assert!(lit.is_integer());
        assert_eq!(lit.as_i64(), -42);
        assert!((lit.as_f64() + 42.0).abs() < f64::EPSILON);
    }
}
