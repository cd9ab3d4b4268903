#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use crate::{
    constants::{ADVICE_HIGH_MARK, ADVICE_LOW_MARK, MAX_EXAM_SCORE, PRELIM_EXAM_WEIGHT},
    engine::{GradeResult, Standing, Target, Variant},
};

/// Width of the rules drawn between report sections.
const RULE_WIDTH: usize = 59;

/// What a required exam score means for the student.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "score", rename_all = "snake_case")]
pub enum Outlook {
    /// The target is reached even with 0 on the exam.
    Guaranteed,
    /// The target is reachable with at least this exam score.
    Needed(f64),
    /// The target needs this exam score, which is above 100.
    Impossible(f64),
}

impl Outlook {
    /// Classifies an uncapped required exam score.
    pub fn classify(required: f64) -> Self {
        if required <= 0.0 {
            Outlook::Guaranteed
        } else if required <= MAX_EXAM_SCORE {
            Outlook::Needed(required)
        } else {
            Outlook::Impossible(required)
        }
    }

    /// One-line remark for this outlook on `target`.
    pub fn remark(&self, target: Target) -> String {
        match (self, target) {
            (Outlook::Guaranteed, Target::Passing) => "✓ Already Guaranteed!".to_string(),
            (Outlook::Guaranteed, Target::Excellent) => "★ Already Guaranteed!".to_string(),
            (Outlook::Needed(score), Target::Passing) => {
                format!("Need at least: {score:.2}/100")
            }
            (Outlook::Needed(score), Target::Excellent) => {
                format!("Need exactly: {score:.2}/100")
            }
            (Outlook::Impossible(score), _) => {
                format!("✗ Impossible - would need {score:.2}/100")
            }
        }
    }

    /// Remark for this outlook on `target`, worded the way `variant` words
    /// it. Console remarks may span several lines.
    pub fn remark_for(&self, variant: Variant, target: Target) -> String {
        match variant {
            Variant::Form => self.remark(target),
            Variant::Console => self.console_remark(target),
        }
    }

    /// Sentence-style remark shown by the console variant.
    fn console_remark(&self, target: Target) -> String {
        match (self, target) {
            (Outlook::Guaranteed, Target::Passing) => {
                "You have already PASSED the Prelim period!\n\
                 Even with 0 on the exam, you will pass."
                    .to_string()
            }
            (Outlook::Guaranteed, Target::Excellent) => {
                "You have already achieved EXCELLENT standing!".to_string()
            }
            (Outlook::Needed(score), Target::Passing) => {
                format!("You need {score:.2} or higher in the Prelim Exam to PASS.")
            }
            (Outlook::Needed(score), Target::Excellent) => {
                format!("You need {score:.2} in the Prelim Exam for EXCELLENT standing.")
            }
            (Outlook::Impossible(score), Target::Passing) => format!(
                "Unfortunately, it is IMPOSSIBLE to pass.\nYou would need {score:.2} in the \
                 Prelim Exam (exceeds 100)."
            ),
            (Outlook::Impossible(score), Target::Excellent) => format!(
                "Excellent grade (100) is not achievable.\nYou would need {score:.2} in the \
                 Prelim Exam (exceeds 100)."
            ),
        }
    }

    /// Colors one line of a remark for a terminal.
    fn paint(&self, line: &str) -> String {
        match self {
            Outlook::Guaranteed => line.green().bold().to_string(),
            Outlook::Needed(_) => line.yellow().to_string(),
            Outlook::Impossible(_) => line.red().bold().to_string(),
        }
    }
}

/// What to work on when passing is out of reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advice {
    /// Attendance is low but lab work is strong.
    Attendance,
    /// Lab work is low but attendance is strong.
    LabWork,
    /// Both are low.
    Both,
    /// Neither stands out.
    General,
}

impl Advice {
    /// Picks advice from the attendance score and lab work average.
    pub fn for_standing(standing: &Standing) -> Self {
        let attendance = standing.attendance_score();
        let labs = standing.lab_work_average();
        if attendance < ADVICE_LOW_MARK && labs >= ADVICE_HIGH_MARK {
            Advice::Attendance
        } else if labs < ADVICE_LOW_MARK && attendance >= ADVICE_HIGH_MARK {
            Advice::LabWork
        } else if attendance < ADVICE_LOW_MARK && labs < ADVICE_LOW_MARK {
            Advice::Both
        } else {
            Advice::General
        }
    }

    /// The advice as a sentence.
    pub fn message(&self) -> &'static str {
        match self {
            Advice::Attendance => "Focus on improving your attendance.",
            Advice::LabWork => "Focus on improving your lab work grades.",
            Advice::Both => "Focus on improving both attendance and lab work.",
            Advice::General => "Focus on improving attendance and lab work.",
        }
    }
}

/// A row of the summary table.
#[derive(Tabled)]
struct SummaryRow {
    /// What the row shows.
    #[tabled(rename = "Item")]
    item:  String,
    /// The shown value.
    #[tabled(rename = "Value")]
    value: String,
}

impl SummaryRow {
    /// Creates a row.
    fn new(item: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            item:  item.into(),
            value: value.into(),
        }
    }
}

/// JSON shape of a report.
#[derive(Serialize)]
struct ReportJson<'a> {
    /// Flattened calculation result.
    #[serde(flatten)]
    result:    &'a GradeResult,
    /// Outlook for a final grade of 75.
    passing:   Option<Outlook>,
    /// Outlook for a final grade of 100.
    excellent: Option<Outlook>,
    /// Advice, when passing is out of reach.
    advice:    Option<Advice>,
}

/// Human-facing presentation of a [`GradeResult`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// The result being presented.
    result: GradeResult,
}

impl Report {
    /// Wraps `result` for presentation.
    pub fn new(result: GradeResult) -> Self {
        Self { result }
    }

    /// The result being presented.
    pub fn result(&self) -> &GradeResult {
        &self.result
    }

    /// Outlook for `target`, or `None` after an automatic failure.
    pub fn outlook(&self, target: Target) -> Option<Outlook> {
        self.result
            .standing()
            .map(|standing| Outlook::classify(standing.required_for(target)))
    }

    /// Advice when passing is impossible.
    pub fn advice(&self) -> Option<Advice> {
        let standing = self.result.standing()?;
        match self.outlook(Target::Passing)? {
            Outlook::Impossible(_) => Some(Advice::for_standing(standing)),
            _ => None,
        }
    }

    /// Serializes the result together with its outlooks.
    pub fn to_json(&self) -> Result<String> {
        let json = ReportJson {
            result:    &self.result,
            passing:   self.outlook(Target::Passing),
            excellent: self.outlook(Target::Excellent),
            advice:    self.advice(),
        };
        serde_json::to_string_pretty(&json).context("Could not serialize the grade report")
    }

    /// Renders a compact summary table.
    pub fn table(&self) -> String {
        let result = &self.result;
        let mut rows = vec![SummaryRow::new("Total classes", result.total_classes().to_string())];
        if result.policy().excused_absences() {
            rows.push(SummaryRow::new("Excused absences", result.excused_absences().to_string()));
            rows.push(SummaryRow::new(
                "Classes that count",
                result.total_classes_that_count().to_string(),
            ));
        }
        rows.push(SummaryRow::new("Attended", result.attendance().to_string()));
        rows.push(SummaryRow::new(
            "Unexcused absences",
            result.unexcused_absences().to_string(),
        ));
        for (i, lab) in result.labs().iter().enumerate() {
            rows.push(SummaryRow::new(format!("Lab work {}", i + 1), format!("{lab:.2}")));
        }

        let footer = match result.standing() {
            None => "AUTOMATIC FAILURE".to_string(),
            Some(standing) => {
                rows.push(SummaryRow::new(
                    "Attendance score",
                    format!("{:.2}%", standing.attendance_score()),
                ));
                rows.push(SummaryRow::new(
                    "Lab work average",
                    format!("{:.2}", standing.lab_work_average()),
                ));
                rows.push(SummaryRow::new(
                    "Class standing",
                    format!("{:.2}", standing.class_standing()),
                ));
                for target in Target::ALL {
                    let outlook = Outlook::classify(standing.required_for(target));
                    rows.push(SummaryRow::new(
                        format!("Exam for {:.0}", target.grade()),
                        outlook.remark_for(result.policy().variant(), target),
                    ));
                }
                format!("Class standing: {:.2}", standing.class_standing())
            }
        };

        Table::new(&rows)
            .with(Panel::header("Prelim Standing"))
            .with(Panel::footer(footer))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(36).keep_words(true)))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }

    /// Writes the automatic failure notice.
    fn fmt_failure(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = &self.result;
        heading(f, "AUTOMATIC FAILURE")?;
        writeln!(f)?;
        writeln!(f, "  {}", "✗ YOU HAVE BEEN AUTOMATICALLY FAILED".red().bold())?;
        writeln!(f)?;
        writeln!(f, "  Classes held: {}", result.total_classes_that_count())?;
        writeln!(f, "  You attended: {}", result.attendance())?;
        writeln!(f, "  Unexcused absences: {}", result.unexcused_absences())?;
        writeln!(f)?;
        if let Some(threshold) = result.policy().failure_threshold() {
            writeln!(
                f,
                "  Having {threshold} or more unexcused absences results in automatic failure."
            )?;
            writeln!(f)?;
        }
        writeln!(f, "  Note: Excused absences do not count against you.")?;
        rule(f)
    }

    /// Writes the current grades and the required exam scores.
    fn fmt_standing(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        standing: &Standing,
    ) -> std::fmt::Result {
        let result = &self.result;
        heading(f, "YOUR CURRENT GRADES")?;
        writeln!(f)?;
        writeln!(f, "  Total Classes:        {}", result.total_classes())?;
        if result.policy().excused_absences() {
            writeln!(f, "  Excused Absences:     {}", result.excused_absences())?;
            writeln!(f, "  Classes That Count:   {}", result.total_classes_that_count())?;
        }
        writeln!(
            f,
            "  Attendance:           {}/{} classes ({:.2}%)",
            result.attendance(),
            result.total_classes_that_count(),
            standing.attendance_score()
        )?;
        writeln!(f)?;
        for (i, lab) in result.labs().iter().enumerate() {
            writeln!(f, "  Lab Work {}:           {lab:.2}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "  Lab Work Average:     {:.2}", standing.lab_work_average())?;
        writeln!(
            f,
            "  Class Standing:       {:.2} (70% of final grade)",
            standing.class_standing()
        )?;
        writeln!(f)?;

        heading(f, "WHAT YOU NEED ON THE PRELIM EXAM")?;
        writeln!(f)?;
        let variant = result.policy().variant();
        for target in Target::ALL {
            let outlook = Outlook::classify(standing.required_for(target));
            match target {
                Target::Passing => writeln!(f, "  TO PASS (Final Grade of 75):")?,
                Target::Excellent => writeln!(f, "  FOR EXCELLENT (Final Grade of 100):")?,
            }
            for line in outlook.remark_for(variant, target).lines() {
                writeln!(f, "  {}", outlook.paint(line))?;
            }
            match (outlook, target, variant) {
                (Outlook::Impossible(_), Target::Passing, Variant::Form) => {
                    writeln!(f, "  Your current Class Standing is too low.")?;
                    writeln!(f, "  {}", Advice::for_standing(standing).message())?;
                }
                (Outlook::Impossible(_), Target::Passing, Variant::Console) => {
                    writeln!(f, "  {}", Advice::for_standing(standing).message())?;
                }
                (Outlook::Guaranteed, Target::Passing, Variant::Form) => {
                    writeln!(f, "  You can score 0 on the Prelim Exam and still pass!")?;
                    writeln!(f, "  Your Class Standing alone ensures a passing grade.")?;
                }
                _ => {}
            }
            writeln!(f)?;
        }

        heading(f, "HOW IT WORKS")?;
        writeln!(f)?;
        writeln!(f, "  Final Grade = (Prelim Exam × 30%) + (Class Standing × 70%)")?;
        writeln!(f)?;
        writeln!(f, "  With your Class Standing of {:.2}:", standing.class_standing())?;
        writeln!(
            f,
            "  • You already have {:.2} points locked in ({:.2} × 70%)",
            standing.points_locked_in(),
            standing.class_standing()
        )?;
        writeln!(
            f,
            "  • The Prelim Exam can add up to {:.0} more points (100 × 30%)",
            MAX_EXAM_SCORE * PRELIM_EXAM_WEIGHT
        )?;
        if let Outlook::Needed(required) = Outlook::classify(standing.required_for_passing()) {
            let points = standing.points_needed(Target::Passing);
            writeln!(f)?;
            writeln!(f, "  To reach 75: You need {points:.2} more points")?;
            writeln!(
                f,
                "  Since exam is worth 30%: {points:.2} ÷ {PRELIM_EXAM_WEIGHT:.2} = {required:.2}"
            )?;
        }
        writeln!(f)?;
        rule(f)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result.standing() {
            None => self.fmt_failure(f),
            Some(standing) => self.fmt_standing(f, standing),
        }
    }
}

/// Writes a horizontal rule.
fn rule(f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}", "═".repeat(RULE_WIDTH))
}

/// Writes a section title centered between two rules.
fn heading(f: &mut std::fmt::Formatter<'_>, title: &str) -> std::fmt::Result {
    rule(f)?;
    writeln!(f, "{title:^width$}", width = RULE_WIDTH)?;
    rule(f)
}
