#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Share of the final grade carried by the prelim exam.
pub const PRELIM_EXAM_WEIGHT: f64 = 0.30;

/// Share of the final grade carried by class standing.
pub const CLASS_STANDING_WEIGHT: f64 = 0.70;

/// Share of class standing carried by the attendance score.
pub const ATTENDANCE_WEIGHT: f64 = 0.40;

/// Share of class standing carried by the lab work average.
pub const LAB_WORK_WEIGHT: f64 = 0.60;

/// Final grade needed to pass.
pub const PASSING_GRADE: f64 = 75.0;

/// Final grade considered excellent.
pub const EXCELLENT_GRADE: f64 = 100.0;

/// Lowest accepted lab work score.
pub const MIN_LAB_SCORE: f64 = 0.0;

/// Highest accepted lab work score.
pub const MAX_LAB_SCORE: f64 = 100.0;

/// Number of lab work scores that make up the lab work average.
pub const LAB_COUNT: usize = 3;

/// Highest score the prelim exam can award.
pub const MAX_EXAM_SCORE: f64 = 100.0;

/// Class sessions held during the prelim period for the form variant.
pub const FORM_TOTAL_CLASSES: u32 = 5;

/// Class sessions held during the prelim period for the console variant.
pub const CONSOLE_TOTAL_CLASSES: u32 = 15;

/// Unexcused absences at or above which a student fails automatically.
pub const FAILURE_THRESHOLD: u32 = 4;

/// Attendance score or lab average under which improvement advice kicks in.
pub const ADVICE_LOW_MARK: f64 = 80.0;

/// Attendance score or lab average considered strong enough to leave alone.
pub const ADVICE_HIGH_MARK: f64 = 90.0;

/// Environment variable overriding the form variant's class count.
pub const FORM_TOTAL_CLASSES_ENV: &str = "PRELIM_FORM_TOTAL_CLASSES";

/// Environment variable overriding the console variant's class count.
pub const CONSOLE_TOTAL_CLASSES_ENV: &str = "PRELIM_CONSOLE_TOTAL_CLASSES";

/// Environment variable overriding the automatic failure threshold.
pub const FAILURE_THRESHOLD_ENV: &str = "PRELIM_FAILURE_THRESHOLD";
