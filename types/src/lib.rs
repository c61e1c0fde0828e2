//! Core domain types for Roster.
//!
//! The student record and the reference year its derived values count back from.
//! Nothing here touches the filesystem or the network.

mod student;

pub use student::{REFERENCE_YEAR_LITERAL, Student, StudentRecord, reference_year};
