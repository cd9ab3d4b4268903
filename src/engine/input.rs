#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;
use typed_builder::TypedBuilder;

use super::policy::Policy;
use crate::constants::{LAB_COUNT, MAX_LAB_SCORE, MIN_LAB_SCORE};

/// An input field, used to point validation errors at the right place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Classes physically attended.
    Attendance,
    /// Verified excused absences.
    ExcusedAbsences,
    /// One of the lab work scores, numbered from 1.
    Lab(usize),
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Attendance => write!(f, "attendance"),
            Field::ExcusedAbsences => write!(f, "excused absences"),
            Field::Lab(n) => write!(f, "lab work {n}"),
        }
    }
}

/// Reasons an input is rejected before any grade is computed.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The text entered for a field is not a number.
    #[error("{field} must be a valid number, got `{value}`")]
    InvalidNumber {
        /// Field the text was entered into.
        field: Field,
        /// The offending text.
        value: String,
    },
    /// A number lies outside the bounds allowed for its field.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field the number was entered into.
        field: Field,
        /// The offending number.
        value: f64,
        /// Smallest accepted value.
        min:   f64,
        /// Largest accepted value.
        max:   f64,
    },
    /// Attended and excused sessions add up to more than were held.
    #[error(
        "attendance ({attendance}) plus excused absences ({excused}) cannot exceed {total} classes"
    )]
    AttendanceExceedsTotal {
        /// Classes attended.
        attendance: u32,
        /// Excused absences.
        excused:    u32,
        /// Classes held.
        total:      u32,
    },
    /// Excused absences were reported without confirming they were verified.
    #[error("{excused} excused absence(s) reported but not marked as verified")]
    UnverifiedExcuse {
        /// Excused absences reported.
        excused: u32,
    },
}

impl ValidationError {
    /// The field the error should be shown next to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidNumber { field, .. } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
            ValidationError::AttendanceExceedsTotal { .. } => Field::ExcusedAbsences,
            ValidationError::UnverifiedExcuse { .. } => Field::ExcusedAbsences,
        }
    }
}

/// Field text exactly as a front end collected it.
#[derive(Debug, Clone, Default, PartialEq, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct RawGradeInput {
    /// Classes attended.
    pub attendance:       String,
    /// Excused absences; `None` when the front end has no such field.
    #[builder(setter(strip_option))]
    pub excused_absences: Option<String>,
    /// Whether the excused absences were confirmed as verified.
    pub excuse_verified:  bool,
    /// Lab work 1 score.
    pub lab1:             String,
    /// Lab work 2 score.
    pub lab2:             String,
    /// Lab work 3 score.
    pub lab3:             String,
}

impl RawGradeInput {
    /// Lab score text in lab order.
    pub fn labs(&self) -> [&str; LAB_COUNT] {
        [&self.lab1, &self.lab2, &self.lab3]
    }
}

/// Parses a whole-number field, ignoring surrounding whitespace.
pub fn parse_count(field: Field, text: &str) -> Result<i64, ValidationError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: text.trim().to_string(),
        })
}

/// Parses a score field, ignoring surrounding whitespace. Infinities and NaN
/// are not numbers a student can score.
pub fn parse_score(field: Field, text: &str) -> Result<f64, ValidationError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: text.trim().to_string(),
        })?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field,
            value: text.trim().to_string(),
        });
    }
    Ok(value)
}

/// Checks that a count lies in `0..=max`.
pub fn check_count(field: Field, value: i64, max: u32) -> Result<u32, ValidationError> {
    if (0..=i64::from(max)).contains(&value) {
        // In range, so it fits.
        Ok(value as u32)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value: value as f64,
            min: 0.0,
            max: f64::from(max),
        })
    }
}

/// Checks that a lab score lies in `0..=100`.
pub fn check_score(field: Field, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if (MIN_LAB_SCORE..=MAX_LAB_SCORE).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min: MIN_LAB_SCORE,
            max: MAX_LAB_SCORE,
        })
    }
}

/// A validated calculation request.
///
/// Only [`validate`] and [`GradeInput::from_values`] build one, so every
/// instance satisfies the policy's bounds and
/// `attendance + excused_absences <= total_classes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeInput {
    /// Rules the input was validated against.
    policy:           Policy,
    /// Classes attended.
    attendance:       u32,
    /// Excused absences; always 0 when the policy has none.
    excused_absences: u32,
    /// Whether the excused absences were verified.
    excuse_verified:  bool,
    /// Lab work scores in lab order.
    labs:             [f64; LAB_COUNT],
}

impl GradeInput {
    /// Validates already-parsed values against `policy`.
    ///
    /// Runs every check of [`validate`] after parsing. When the policy has no
    /// excused absences, `excused_absences` and `excuse_verified` are ignored.
    pub fn from_values(
        policy: &Policy,
        attendance: i64,
        excused_absences: i64,
        excuse_verified: bool,
        labs: [f64; LAB_COUNT],
    ) -> Result<Self, ValidationError> {
        let total = policy.total_classes();
        let attendance = check_count(Field::Attendance, attendance, total)?;
        let (excused, verified) = if policy.excused_absences() {
            (check_count(Field::ExcusedAbsences, excused_absences, total)?, excuse_verified)
        } else {
            (0, false)
        };

        if attendance.checked_add(excused).is_none_or(|sessions| sessions > total) {
            return Err(ValidationError::AttendanceExceedsTotal {
                attendance,
                excused,
                total,
            });
        }

        if excused > 0 && !verified {
            return Err(ValidationError::UnverifiedExcuse { excused });
        }

        for (i, lab) in labs.iter().enumerate() {
            check_score(Field::Lab(i + 1), *lab)?;
        }

        Ok(Self {
            policy: *policy,
            attendance,
            excused_absences: excused,
            excuse_verified: verified,
            labs,
        })
    }

    /// Rules the input was validated against.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Class sessions held.
    pub fn total_classes(&self) -> u32 {
        self.policy.total_classes()
    }

    /// Classes attended.
    pub fn attendance(&self) -> u32 {
        self.attendance
    }

    /// Excused absences.
    pub fn excused_absences(&self) -> u32 {
        self.excused_absences
    }

    /// Whether the excused absences were verified.
    pub fn excuse_verified(&self) -> bool {
        self.excuse_verified
    }

    /// Lab work scores in lab order.
    pub fn labs(&self) -> [f64; LAB_COUNT] {
        self.labs
    }
}

/// Parses and validates `raw` under `policy`, stopping at the first problem.
///
/// Every field is parsed before any range is checked, so malformed text is
/// always reported ahead of out-of-range values. Range and consistency
/// checks then run in this order: attendance, excused absences (only when
/// the policy has them), the combined total, verification, and the labs.
pub fn validate(policy: &Policy, raw: &RawGradeInput) -> Result<GradeInput, ValidationError> {
    let attendance = parse_count(Field::Attendance, &raw.attendance)?;
    let excused = match raw.excused_absences.as_deref() {
        Some(text) if policy.excused_absences() => parse_count(Field::ExcusedAbsences, text)?,
        _ => 0,
    };

    let mut labs = [0.0; LAB_COUNT];
    for (i, text) in raw.labs().iter().enumerate() {
        labs[i] = parse_score(Field::Lab(i + 1), text)?;
    }

    let input = GradeInput::from_values(policy, attendance, excused, raw.excuse_verified, labs);
    if let Err(e) = &input {
        tracing::debug!("rejected input: {e}");
    }
    input
}
