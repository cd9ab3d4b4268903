#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use super::{input::GradeInput, policy::Policy};
use crate::constants::{
    ATTENDANCE_WEIGHT, CLASS_STANDING_WEIGHT, EXCELLENT_GRADE, LAB_COUNT, LAB_WORK_WEIGHT,
    PASSING_GRADE, PRELIM_EXAM_WEIGHT,
};

/// A final grade a student may aim for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A final grade of 75.
    Passing,
    /// A final grade of 100.
    Excellent,
}

impl Target {
    /// Both targets, in display order.
    pub const ALL: [Target; 2] = [Target::Passing, Target::Excellent];

    /// The final grade this target stands for.
    pub fn grade(&self) -> f64 {
        match self {
            Target::Passing => PASSING_GRADE,
            Target::Excellent => EXCELLENT_GRADE,
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Passing => write!(f, "passing"),
            Target::Excellent => write!(f, "excellent"),
        }
    }
}

/// Exam score needed on top of `class_standing` to reach `target_grade`.
///
/// Uncapped: a negative score means the target is already secured and one
/// above 100 means it cannot be reached.
pub fn required_exam_score(class_standing: f64, target_grade: f64) -> f64 {
    (target_grade - class_standing * CLASS_STANDING_WEIGHT) / PRELIM_EXAM_WEIGHT
}

/// The scores computed for a student who has not failed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Standing {
    /// Attendance as a percentage of the classes that count.
    pub(crate) attendance_score:       f64,
    /// Mean of the lab work scores.
    pub(crate) lab_work_average:       f64,
    /// Weighted blend of attendance score and lab work average.
    pub(crate) class_standing:         f64,
    /// Exam score needed for a final grade of 75.
    pub(crate) required_for_passing:   f64,
    /// Exam score needed for a final grade of 100.
    pub(crate) required_for_excellent: f64,
}

impl Standing {
    /// Attendance as a percentage of the classes that count.
    pub fn attendance_score(&self) -> f64 {
        self.attendance_score
    }

    /// Mean of the lab work scores.
    pub fn lab_work_average(&self) -> f64 {
        self.lab_work_average
    }

    /// Weighted blend of attendance score and lab work average.
    pub fn class_standing(&self) -> f64 {
        self.class_standing
    }

    /// Exam score needed for a final grade of 75.
    pub fn required_for_passing(&self) -> f64 {
        self.required_for_passing
    }

    /// Exam score needed for a final grade of 100.
    pub fn required_for_excellent(&self) -> f64 {
        self.required_for_excellent
    }

    /// Exam score needed for `target`.
    pub fn required_for(&self, target: Target) -> f64 {
        match target {
            Target::Passing => self.required_for_passing,
            Target::Excellent => self.required_for_excellent,
        }
    }

    /// Final grade points already earned through class standing.
    pub fn points_locked_in(&self) -> f64 {
        self.class_standing * CLASS_STANDING_WEIGHT
    }

    /// Final grade points the exam still has to supply for `target`.
    pub fn points_needed(&self, target: Target) -> f64 {
        target.grade() - self.points_locked_in()
    }
}

/// Outcome of a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    /// Rules the calculation ran under.
    pub(crate) policy:                   Policy,
    /// Classes attended.
    pub(crate) attendance:               u32,
    /// Excused absences.
    pub(crate) excused_absences:         u32,
    /// Lab work scores in lab order.
    pub(crate) labs:                     [f64; LAB_COUNT],
    /// Sessions held minus excused absences.
    pub(crate) total_classes_that_count: u32,
    /// Sessions that count minus sessions attended.
    pub(crate) unexcused_absences:       u32,
    /// Whether unexcused absences reached the failure threshold.
    pub(crate) automatic_failure:        bool,
    /// Computed scores; absent on automatic failure.
    pub(crate) standing:                 Option<Standing>,
}

impl GradeResult {
    /// Rules the calculation ran under.
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

    /// Lab work scores in lab order.
    pub fn labs(&self) -> [f64; LAB_COUNT] {
        self.labs
    }

    /// Sessions held minus excused absences.
    pub fn total_classes_that_count(&self) -> u32 {
        self.total_classes_that_count
    }

    /// Sessions that count minus sessions attended.
    pub fn unexcused_absences(&self) -> u32 {
        self.unexcused_absences
    }

    /// Whether unexcused absences reached the failure threshold.
    pub fn automatic_failure(&self) -> bool {
        self.automatic_failure
    }

    /// Computed scores, or `None` after an automatic failure.
    pub fn standing(&self) -> Option<&Standing> {
        self.standing.as_ref()
    }
}

/// Computes the standing for a validated input.
///
/// Once unexcused absences reach the policy's failure threshold the outcome
/// is fixed, so nothing past the absence count is computed.
pub fn compute(input: GradeInput) -> GradeResult {
    let policy = *input.policy();
    let total_classes_that_count = input.total_classes().saturating_sub(input.excused_absences());
    let unexcused_absences = total_classes_that_count.saturating_sub(input.attendance());
    let automatic_failure = policy
        .failure_threshold()
        .is_some_and(|threshold| unexcused_absences >= threshold);

    let standing = if automatic_failure {
        None
    } else {
        let attendance_score = if total_classes_that_count > 0 {
            f64::from(input.attendance()) / f64::from(total_classes_that_count) * 100.0
        } else {
            100.0
        };
        let lab_work_average = input.labs().iter().sum::<f64>() / LAB_COUNT as f64;
        let class_standing =
            attendance_score * ATTENDANCE_WEIGHT + lab_work_average * LAB_WORK_WEIGHT;

        Some(Standing {
            attendance_score,
            lab_work_average,
            class_standing,
            required_for_passing: required_exam_score(class_standing, PASSING_GRADE),
            required_for_excellent: required_exam_score(class_standing, EXCELLENT_GRADE),
        })
    };

    tracing::debug!(
        attendance = input.attendance(),
        excused = input.excused_absences(),
        unexcused = unexcused_absences,
        automatic_failure,
        "computed prelim standing"
    );

    GradeResult {
        policy,
        attendance: input.attendance(),
        excused_absences: input.excused_absences(),
        labs: input.labs(),
        total_classes_that_count,
        unexcused_absences,
        automatic_failure,
        standing,
    }
}
