#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use anyhow::{Context, Result, bail};

use crate::{
    constants::{LAB_COUNT, MAX_LAB_SCORE},
    engine::{
        self, Field, GradeInput, GradeResult, Policy, check_count, check_score, parse_count,
        parse_score,
    },
    form::FormState,
    report::Report,
};

/// An interactive session that asks for every field until it is valid.
///
/// Each field is re-asked until its own text parses and lies in range. Any
/// problem spanning several fields, such as more attended and excused
/// sessions than were held, restarts the whole form.
pub struct Session<R, W> {
    /// Where answers are read from.
    input:  R,
    /// Where questions and reports are written to.
    output: W,
    /// Rules the answers are checked against.
    policy: Policy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, policy: Policy) -> Self {
        Self {
            input,
            output,
            policy,
        }
    }

    /// Consumes the session, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for every field, computes the result, and prints the report.
    pub fn run(&mut self) -> Result<GradeResult> {
        self.banner()?;
        let input = self.collect()?;
        let result = engine::compute(input);
        write!(self.output, "\n{}", Report::new(result))?;
        self.output.flush()?;
        Ok(result)
    }

    /// Asks for every field until the whole input validates.
    pub fn collect(&mut self) -> Result<GradeInput> {
        loop {
            let form = self.fill_form()?;
            match engine::validate(&self.policy, &form.raw_input()) {
                Ok(input) => return Ok(input),
                Err(e) => {
                    tracing::debug!("restarting input after: {e}");
                    writeln!(self.output, "✗ {e}. Please enter your details again.\n")?;
                }
            }
        }
    }

    /// Writes the session header.
    fn banner(&mut self) -> Result<()> {
        let rule = "═".repeat(59);
        writeln!(self.output, "{rule}")?;
        writeln!(self.output, "{:^59}", "PRELIM GRADE CALCULATOR")?;
        writeln!(self.output, "{rule}\n")?;
        Ok(())
    }

    /// Asks for each field once, re-asking only the ones that are invalid on
    /// their own.
    fn fill_form(&mut self) -> Result<FormState> {
        let total = self.policy.total_classes();
        let mut form = FormState::new();

        let attendance = self.ask(
            &format!("Enter number of attendances (0-{total}): "),
            |text| count_text(Field::Attendance, text, total),
        )?;
        form.set_attendance(attendance);

        if self.policy.excused_absences() {
            let excused = self.ask(
                &format!("Enter number of excused absences (0-{total}): "),
                |text| count_text(Field::ExcusedAbsences, text, total),
            )?;
            form.set_excused_absences(excused);

            if form.checkbox_enabled() {
                let verified =
                    self.ask("Have your excused absences been verified? (y/n): ", yes_or_no)?;
                form.set_excuse_verified(verified);
            }
        }

        for lab in 1..=LAB_COUNT {
            let score = self.ask(
                &format!("Enter Lab Work {lab} grade (0-{MAX_LAB_SCORE}): "),
                |text| score_text(Field::Lab(lab), text),
            )?;
            form.set_lab(lab, score)?;
        }

        Ok(form)
    }

    /// Writes `question` and reads answers until `parse` accepts one.
    fn ask<T, E: Display>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Could not read from input")?;
            if read == 0 {
                bail!("Input ended before every field was entered");
            }

            match parse(line.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("re-asking `{}`: {e}", question.trim());
                    writeln!(self.output, "✗ Invalid input! {e}.")?;
                }
            }
        }
    }
}

/// Accepts a whole number in `0..=max`, returning the trimmed text.
fn count_text(field: Field, text: &str, max: u32) -> Result<String, engine::ValidationError> {
    check_count(field, parse_count(field, text)?, max)?;
    Ok(text.trim().to_string())
}

/// Accepts a lab score in `0..=100`, returning the trimmed text.
fn score_text(field: Field, text: &str) -> Result<String, engine::ValidationError> {
    check_score(field, parse_score(field, text)?)?;
    Ok(text.trim().to_string())
}

/// Accepts a yes or no answer.
fn yes_or_no(text: &str) -> Result<bool, &'static str> {
    match text.to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("please answer y or n"),
    }
}
