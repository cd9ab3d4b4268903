#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Parsing and validation of collected field text.
pub mod input;
/// Grading rules for each front end.
pub mod policy;
/// The computation and its result types.
pub mod result;

pub use input::{
    Field, GradeInput, RawGradeInput, ValidationError, check_count, check_score, parse_count,
    parse_score, validate,
};
pub use policy::{Policy, Variant};
pub use result::{GradeResult, Standing, Target, compute, required_exam_score};
