#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use anyhow::{Result, ensure};

use crate::{
    constants::LAB_COUNT,
    engine::{self, GradeResult, Policy, RawGradeInput, ValidationError},
};

/// Field state of the calculator form.
///
/// The verification checkbox is only usable while the excused absence field
/// holds a positive whole number. It is recomputed on every edit of that
/// field, and switching it off also clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Attendance field text.
    attendance:       String,
    /// Excused absence field text.
    excused_absences: String,
    /// Whether the verification checkbox is ticked.
    excuse_verified:  bool,
    /// Whether the verification checkbox can be ticked.
    checkbox_enabled: bool,
    /// Lab work field text in lab order.
    labs:             [String; LAB_COUNT],
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            attendance:       String::new(),
            excused_absences: "0".to_string(),
            excuse_verified:  false,
            checkbox_enabled: false,
            labs:             Default::default(),
        }
    }
}

impl FormState {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attendance field text.
    pub fn attendance(&self) -> &str {
        &self.attendance
    }

    /// Replaces the attendance field text.
    pub fn set_attendance(&mut self, text: impl Into<String>) {
        self.attendance = text.into();
    }

    /// Excused absence field text.
    pub fn excused_absences(&self) -> &str {
        &self.excused_absences
    }

    /// Replaces the excused absence field text and refreshes the checkbox.
    pub fn set_excused_absences(&mut self, text: impl Into<String>) {
        self.excused_absences = text.into();
        self.checkbox_enabled = self
            .excused_absences
            .trim()
            .parse::<i64>()
            .is_ok_and(|excused| excused > 0);
        if !self.checkbox_enabled {
            self.excuse_verified = false;
        }
        tracing::debug!(enabled = self.checkbox_enabled, "verification checkbox refreshed");
    }

    /// Whether the verification checkbox can be ticked.
    pub fn checkbox_enabled(&self) -> bool {
        self.checkbox_enabled
    }

    /// Whether the verification checkbox is ticked.
    pub fn excuse_verified(&self) -> bool {
        self.excuse_verified
    }

    /// Ticks or clears the verification checkbox. Ignored while it is
    /// disabled.
    pub fn set_excuse_verified(&mut self, verified: bool) {
        if self.checkbox_enabled {
            self.excuse_verified = verified;
        }
    }

    /// Text of lab work field `lab`, numbered from 1.
    pub fn lab(&self, lab: usize) -> Option<&str> {
        self.labs.get(lab.checked_sub(1)?).map(String::as_str)
    }

    /// Replaces the text of lab work field `lab`, numbered from 1.
    pub fn set_lab(&mut self, lab: usize, text: impl Into<String>) -> Result<()> {
        ensure!((1..=LAB_COUNT).contains(&lab), "There is no lab work {lab}");
        self.labs[lab - 1] = text.into();
        Ok(())
    }

    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The form's text as engine input.
    pub fn raw_input(&self) -> RawGradeInput {
        let [lab1, lab2, lab3] = self.labs.clone();
        RawGradeInput {
            attendance: self.attendance.clone(),
            excused_absences: Some(self.excused_absences.clone()),
            excuse_verified: self.excuse_verified,
            lab1,
            lab2,
            lab3,
        }
    }

    /// Validates the form under `policy` and computes the result.
    pub fn submit(&self, policy: &Policy) -> Result<GradeResult, ValidationError> {
        let input = engine::validate(policy, &self.raw_input())?;
        Ok(engine::compute(input))
    }
}
