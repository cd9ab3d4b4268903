use prelim::{
    Policy, RawGradeInput, ValidationError,
    engine::{Field, GradeInput, validate},
};

fn form_input(attendance: &str, excused: &str, verified: bool, labs: [&str; 3]) -> RawGradeInput {
    RawGradeInput::builder()
        .attendance(attendance)
        .excused_absences(excused)
        .excuse_verified(verified)
        .lab1(labs[0])
        .lab2(labs[1])
        .lab3(labs[2])
        .build()
}

#[test]
fn accepts_a_well_formed_form_input() {
    let input = validate(&Policy::form(), &form_input("3", "2", true, ["90", "85.5", "70"]))
        .expect("valid input");

    assert_eq!(input.attendance(), 3);
    assert_eq!(input.excused_absences(), 2);
    assert!(input.excuse_verified());
    assert_eq!(input.labs(), [90.0, 85.5, 70.0]);
    assert_eq!(input.total_classes(), 5);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let input = validate(&Policy::form(), &form_input(" 4 ", "\t0", false, [" 1", "2 ", " 3 "]))
        .expect("valid input");

    assert_eq!(input.attendance(), 4);
    assert_eq!(input.labs(), [1.0, 2.0, 3.0]);
}

#[test]
fn malformed_numbers_name_the_field() {
    let err = validate(&Policy::form(), &form_input("three", "0", false, ["90", "90", "90"]))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidNumber {
            field: Field::Attendance,
            value: "three".to_string(),
        }
    );

    let err =
        validate(&Policy::form(), &form_input("3", "0", false, ["90", "x", "90"])).unwrap_err();
    assert_eq!(err.field(), Field::Lab(2));
    assert!(err.to_string().contains("lab work 2"), "{err}");
}

#[test]
fn fractional_counts_are_not_whole_numbers() {
    let err = validate(&Policy::form(), &form_input("2.5", "0", false, ["90", "90", "90"]))
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidNumber { field: Field::Attendance, .. }));
}

#[test]
fn non_finite_scores_are_rejected() {
    for text in ["NaN", "inf", "-infinity"] {
        let err = validate(&Policy::form(), &form_input("3", "0", false, ["90", "90", text]))
            .unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidNumber { field: Field::Lab(3), .. }),
            "{text}: {err:?}"
        );
    }
}

#[test]
fn parsing_comes_before_range_checks() {
    // Attendance is out of range, but the malformed lab is reported first.
    let err =
        validate(&Policy::form(), &form_input("9", "0", false, ["90", "90", "abc"])).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidNumber { field: Field::Lab(3), .. }));
}

#[test]
fn attendance_must_be_within_the_session_count() {
    let err =
        validate(&Policy::form(), &form_input("6", "0", false, ["90", "90", "90"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: Field::Attendance,
            value: 6.0,
            min:   0.0,
            max:   5.0,
        }
    );

    let err =
        validate(&Policy::form(), &form_input("-1", "0", false, ["90", "90", "90"])).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { field: Field::Attendance, .. }));

    let raw = RawGradeInput::builder()
        .attendance("16")
        .lab1("90")
        .lab2("90")
        .lab3("90")
        .build();
    let err = validate(&Policy::console(), &raw).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: Field::Attendance, max, .. } if max == 15.0
    ));
}

#[test]
fn excused_absences_must_be_within_the_session_count() {
    let err =
        validate(&Policy::form(), &form_input("0", "6", true, ["90", "90", "90"])).unwrap_err();
    assert!(matches!(err, ValidationError::OutOfRange { field: Field::ExcusedAbsences, .. }));
}

#[test]
fn attended_and_excused_cannot_exceed_the_total() {
    let err =
        validate(&Policy::form(), &form_input("4", "2", true, ["90", "90", "90"])).unwrap_err();
    assert_eq!(
        err,
        ValidationError::AttendanceExceedsTotal {
            attendance: 4,
            excused:    2,
            total:      5,
        }
    );
    assert_eq!(err.field(), Field::ExcusedAbsences);
}

#[test]
fn unverified_excuses_are_rejected_before_lab_ranges() {
    let err =
        validate(&Policy::form(), &form_input("3", "2", false, ["90", "90", "90"])).unwrap_err();
    assert_eq!(err, ValidationError::UnverifiedExcuse { excused: 2 });

    let err = validate(&Policy::form(), &form_input("3", "2", false, ["150", "-4", "101"]))
        .unwrap_err();
    assert_eq!(err, ValidationError::UnverifiedExcuse { excused: 2 });
}

#[test]
fn lab_scores_must_be_between_0_and_100() {
    let err = validate(&Policy::form(), &form_input("5", "0", false, ["100", "100.5", "90"]))
        .unwrap_err();
    assert_eq!(
        err,
        ValidationError::OutOfRange {
            field: Field::Lab(2),
            value: 100.5,
            min:   0.0,
            max:   100.0,
        }
    );

    let input = validate(&Policy::form(), &form_input("5", "0", false, ["0", "100", "0.0"]))
        .expect("bounds are inclusive");
    assert_eq!(input.labs(), [0.0, 100.0, 0.0]);
}

#[test]
fn missing_excused_field_counts_as_zero() {
    let raw = RawGradeInput::builder()
        .attendance("5")
        .lab1("1")
        .lab2("2")
        .lab3("3")
        .build();
    let input = validate(&Policy::form(), &raw).expect("valid input");
    assert_eq!(input.excused_absences(), 0);
}

#[test]
fn console_rules_ignore_the_excused_field() {
    let raw = RawGradeInput::builder()
        .attendance("10")
        .excused_absences("not a number")
        .lab1("80")
        .lab2("80")
        .lab3("80")
        .build();
    let input = validate(&Policy::console(), &raw).expect("excused text is ignored");

    assert_eq!(input.attendance(), 10);
    assert_eq!(input.excused_absences(), 0);
    assert!(!input.excuse_verified());
    assert_eq!(input.total_classes(), 15);
}

#[test]
fn from_values_runs_the_same_checks() {
    let err = GradeInput::from_values(&Policy::form(), 3, 2, false, [90.0; 3]).unwrap_err();
    assert_eq!(err, ValidationError::UnverifiedExcuse { excused: 2 });

    let err = GradeInput::from_values(&Policy::form(), 3, 0, false, [90.0, f64::NAN, 90.0])
        .unwrap_err();
    assert!(matches!(err, ValidationError::InvalidNumber { field: Field::Lab(2), .. }));

    let input =
        GradeInput::from_values(&Policy::form(), 3, 2, true, [90.0; 3]).expect("valid input");
    assert_eq!(input.excused_absences(), 2);
}

#[test]
fn huge_class_totals_do_not_overflow() {
    let policy = Policy::form().with_total_classes(u32::MAX);
    let max = i64::from(u32::MAX);

    let err = GradeInput::from_values(&policy, max, max, true, [50.0; 3]).unwrap_err();
    assert_eq!(
        err,
        ValidationError::AttendanceExceedsTotal {
            attendance: u32::MAX,
            excused:    u32::MAX,
            total:      u32::MAX,
        }
    );

    let input =
        GradeInput::from_values(&policy, max - 1, 1, true, [50.0; 3]).expect("fits exactly");
    let result = prelim::compute(input);
    assert_eq!(result.total_classes_that_count(), u32::MAX - 1);
    assert_eq!(result.unexcused_absences(), 0);
    assert!(!result.automatic_failure());
}
