//! Longest-match lexing of a number literal at the start of some input.
//!
//! Accepted shape: `[+-]? (0x|0X|0)? digits ('.' digits)? ([eE] [+-]? digits)? [lLfF]?`.
//! Mantissa digits follow the prefix radix; exponent digits are always decimal.

use std::num::FpCategory;

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::number::{Decoded, NumberLiteral, NumberPrefix, NumberSuffix, NumberValue};

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            bytes: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn eat_sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        }
    }

    fn eat_digit(&mut self, radix: u32) -> Option<u32> {
        let digit = char::from(self.peek()?).to_digit(radix)?;
        self.bump();
        Some(digit)
    }
}

/// Lex the number literal at the start of `src`.
///
/// Returns `None` when `src` does not begin with an optionally signed
/// decimal digit. Otherwise the longest literal is consumed; anything after
/// it is left for the caller (see [`NumberLiteral::span`]). Overflow never
/// stops decoding: it is reported as a [`Diagnostic`] next to the value.
#[must_use]
pub fn scan(src: &str) -> Option<Decoded> {
    let mut cur = Cursor::new(src);

    let negative = cur.eat_sign();
    if !cur.peek()?.is_ascii_digit() {
        return None;
    }

    let prefix = match (cur.peek(), cur.peek_at(1)) {
        (Some(b'0'), Some(b'x' | b'X')) => {
            cur.pos += 2;
            NumberPrefix::Hex
        }
        (Some(b'0'), Some(b'0'..=b'7')) => {
            cur.bump();
            NumberPrefix::Oct
        }
        _ => NumberPrefix::None,
    };
    let radix = prefix.radix();

    let mut int_value: i64 = 0;
    let mut fits_i64 = true;
    let mut float_value = 0.0_f64;
    let mut is_integer = true;

    while let Some(d) = cur.eat_digit(radix) {
        if fits_i64 {
            match int_value
                .checked_mul(i64::from(radix))
                .and_then(|v| v.checked_add(i64::from(d)))
            {
                Some(v) => int_value = v,
                None => fits_i64 = false,
            }
        }
        float_value = float_value * f64::from(radix) + f64::from(d);
    }

    if matches!(cur.peek(), Some(b'.' | b'e' | b'E')) {
        fits_i64 = false;
        is_integer = false;

        if cur.peek() == Some(b'.') {
            cur.bump();
            let mut scale = 1.0 / f64::from(radix);
            while let Some(d) = cur.eat_digit(radix) {
                float_value += f64::from(d) * scale;
                scale /= f64::from(radix);
            }
        }
    }

    if matches!(cur.peek(), Some(b'e' | b'E')) {
        cur.bump();
        float_value = scale_by_exponent(float_value, &mut cur);
    }

    let suffix = match cur.peek() {
        Some(b'l' | b'L') => {
            cur.bump();
            NumberSuffix::Long
        }
        Some(b'f' | b'F') => {
            cur.bump();
            NumberSuffix::Float
        }
        _ => NumberSuffix::None,
    };

    let fits_f64 = float_value.is_finite();
    if negative {
        if fits_i64 {
            int_value = -int_value;
        }
        float_value = -float_value;
    }

    let span = 0..cur.pos;
    let mut diagnostics = Vec::new();
    let mut report = |kind| diagnostics.push(Diagnostic::new(kind, span.clone()));
    match suffix {
        NumberSuffix::Long if !fits_i64 => report(DiagnosticKind::LongOverflow),
        NumberSuffix::Float if !fits_f64 => report(DiagnosticKind::FloatOverflow),
        NumberSuffix::None => {
            if !fits_f64 && !fits_i64 {
                report(DiagnosticKind::Unrepresentable);
            }
            if !fits_i64 && is_integer {
                report(DiagnosticKind::IntegerFallback);
            }
        }
        NumberSuffix::Long | NumberSuffix::Float => {}
    }

    let text = &src[span.clone()];
    for diag in &diagnostics {
        diag.emit(text);
    }

    let value = match suffix {
        NumberSuffix::Long => NumberValue::Int(int_value),
        NumberSuffix::Float => NumberValue::Float(float_value),
        NumberSuffix::None if fits_i64 => NumberValue::Int(int_value),
        NumberSuffix::None => NumberValue::Float(float_value),
    };

    Some(Decoded::new(
        NumberLiteral::new(value, prefix, suffix, span),
        diagnostics,
    ))
}

/// Consume `[+-]? digits` and scale `mantissa` by that power of ten.
///
/// An exponent too wide for `i32` saturates: to infinity when positive,
/// to zero when negative. Zero and infinite mantissas are returned as is.
fn scale_by_exponent(mantissa: f64, cur: &mut Cursor<'_>) -> f64 {
    let negative = cur.eat_sign();

    let mut exponent: i32 = 0;
    let mut fits = true;
    while let Some(d) = cur.eat_digit(10) {
        if fits {
            match exponent
                .checked_mul(10)
                .and_then(|e| e.checked_add(d as i32))
            {
                Some(e) => exponent = e,
                None => fits = false,
            }
        }
    }

    if matches!(mantissa.classify(), FpCategory::Zero | FpCategory::Infinite) {
        return mantissa;
    }
    if !fits {
        return if negative { 0.0 } else { f64::INFINITY };
    }

    let exponent = if negative { -exponent } else { exponent };
    mantissa * 10.0_f64.powf(f64::from(exponent))
}
