//! # prelim
//!
//! Works out the prelim exam score a student needs to pass, or to finish with
//! an excellent grade, from their attendance and lab work.
//!
//! The [`engine`] holds the arithmetic and is shared by two front ends: a
//! form with excused absences and automatic failure, and a console variant
//! where every absence counts. [`prompt`] and [`form`] collect input for
//! them, and [`report`] turns a result into text, a table, or JSON.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-driven grading configuration
pub mod config;
/// A module defining the grading weights and policy constants
pub mod constants;
/// Validation and computation of prelim standings
pub mod engine;
/// Field state of the calculator form
pub mod form;
/// Interactive, loop-until-valid input collection
pub mod prompt;
/// Presentation of computed results
pub mod report;

pub use engine::{
    GradeInput, GradeResult, Policy, RawGradeInput, Standing, Target, ValidationError, Variant,
    compute, validate,
};
pub use report::{Advice, Outlook, Report};
