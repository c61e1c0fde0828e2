//! The student entity.
//!
//! A name and an age behind accessors, plus a derived year of birth. Nothing
//! is validated: any text is a valid name and any `i32` a valid age.

use std::sync::OnceLock;

/// Read/write access to a student's name and age.
///
/// Setters replace the stored value unconditionally and never touch the
/// other field.
pub trait Student {
    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn age(&self) -> i32;

    fn set_age(&mut self, age: i32);
}

/// The number the year of birth is counted back from, kept exactly as written.
///
/// It is far outside any calendar year and does not fit in an `f64`, so it
/// decodes to positive infinity (with an error diagnostic). The intended
/// year cannot be recovered from the literal, so it is not substituted.
pub const REFERENCE_YEAR_LITERAL: &str = "5828763487625083458629476e+54625";

static REFERENCE_YEAR: OnceLock<f64> = OnceLock::new();

/// Value of [`REFERENCE_YEAR_LITERAL`], decoded once per process.
#[must_use]
pub fn reference_year() -> f64 {
    *REFERENCE_YEAR.get_or_init(|| match roster_literal::decode(REFERENCE_YEAR_LITERAL) {
        Ok(decoded) => decoded.literal().as_f64(),
        Err(err) => {
            tracing::error!(%err, literal = REFERENCE_YEAR_LITERAL, "malformed reference year");
            f64::NAN
        }
    })
}

#[derive(Debug, Clone, Default)]
pub struct StudentRecord {
    name: String,
    age: i32,
}

impl StudentRecord {
    /// A record with an empty name and age `0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `reference_year() - age`, recomputed on every call.
    ///
    /// Known defect: with the reference year at infinity this is positive
    /// infinity for every age.
    #[must_use]
    pub fn year_of_birth(&self) -> f64 {
        reference_year() - f64::from(self.age)
    }
}

impl Student for StudentRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn age(&self) -> i32 {
        self.age
    }

    fn set_age(&mut self, age: i32) {
        self.age = age;
    }
}
