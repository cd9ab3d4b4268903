#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use crate::constants::{CONSOLE_TOTAL_CLASSES, FAILURE_THRESHOLD, FORM_TOTAL_CLASSES};

/// The two front ends that share the grade engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The form front end: five sessions, excused absences, automatic failure.
    Form,
    /// The console front end: fifteen sessions, every absence counts.
    Console,
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Form => write!(f, "form"),
            Variant::Console => write!(f, "console"),
        }
    }
}

/// Grading rules a calculation runs under.
///
/// The two variants disagree on how many sessions were held, whether excused
/// absences exist, and whether unexcused absences can fail a student outright.
/// They are kept as separate configurations of the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Policy {
    /// Front end these rules belong to.
    variant:           Variant,
    /// Class sessions held during the prelim period.
    total_classes:     u32,
    /// Whether students may report verified excused absences.
    excused_absences:  bool,
    /// Unexcused absences at or above which the student fails automatically.
    failure_threshold: Option<u32>,
}

impl Policy {
    /// Creates a policy from its parts.
    pub const fn new(
        variant: Variant,
        total_classes: u32,
        excused_absences: bool,
        failure_threshold: Option<u32>,
    ) -> Self {
        Self {
            variant,
            total_classes,
            excused_absences,
            failure_threshold,
        }
    }

    /// Rules used by the form front end.
    pub const fn form() -> Self {
        Self::new(Variant::Form, FORM_TOTAL_CLASSES, true, Some(FAILURE_THRESHOLD))
    }

    /// Rules used by the console front end.
    pub const fn console() -> Self {
        Self::new(Variant::Console, CONSOLE_TOTAL_CLASSES, false, None)
    }

    /// Default rules for `variant`.
    pub const fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Form => Self::form(),
            Variant::Console => Self::console(),
        }
    }

    /// Returns a copy with a different session count.
    pub const fn with_total_classes(mut self, total_classes: u32) -> Self {
        self.total_classes = total_classes;
        self
    }

    /// Returns a copy with a different automatic failure threshold.
    pub const fn with_failure_threshold(mut self, failure_threshold: Option<u32>) -> Self {
        self.failure_threshold = failure_threshold;
        self
    }

    /// Front end these rules belong to.
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Class sessions held during the prelim period.
    pub const fn total_classes(&self) -> u32 {
        self.total_classes
    }

    /// Whether the excused absence field exists under these rules.
    pub const fn excused_absences(&self) -> bool {
        self.excused_absences
    }

    /// Unexcused absences that trigger automatic failure, if any.
    pub const fn failure_threshold(&self) -> Option<u32> {
        self.failure_threshold
    }
}

impl From<Variant> for Policy {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}
