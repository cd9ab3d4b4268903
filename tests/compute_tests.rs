use prelim::{
    Policy, Target,
    engine::{GradeInput, GradeResult, compute, required_exam_score},
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

fn run(policy: Policy, attendance: i64, excused: i64, labs: [f64; 3]) -> GradeResult {
    let input =
        GradeInput::from_values(&policy, attendance, excused, excused > 0, labs).expect("valid");
    compute(input)
}

#[test]
fn full_attendance_and_perfect_labs() {
    let result = run(Policy::form(), 5, 0, [100.0; 3]);

    assert!(!result.automatic_failure());
    assert_eq!(result.total_classes_that_count(), 5);
    assert_eq!(result.unexcused_absences(), 0);

    let standing = result.standing().expect("not failed");
    assert_close(standing.attendance_score(), 100.0);
    assert_close(standing.lab_work_average(), 100.0);
    assert_close(standing.class_standing(), 100.0);
    assert_close(standing.required_for_passing(), 5.0 / 0.30);
    assert_close(standing.required_for_excellent(), 100.0);
    assert_close(standing.points_locked_in(), 70.0);
    assert_close(standing.points_needed(Target::Passing), 5.0);
}

#[test]
fn missing_every_class_fails_automatically() {
    let result = run(Policy::form(), 0, 0, [100.0; 3]);

    assert_eq!(result.unexcused_absences(), 5);
    assert!(result.automatic_failure());
    assert!(result.standing().is_none());
}

#[test]
fn failure_starts_at_four_unexcused_absences() {
    let three = run(Policy::form(), 2, 0, [90.0; 3]);
    assert_eq!(three.unexcused_absences(), 3);
    assert!(!three.automatic_failure());
    assert_close(three.standing().expect("not failed").attendance_score(), 40.0);

    let four = run(Policy::form(), 1, 0, [90.0; 3]);
    assert_eq!(four.unexcused_absences(), 4);
    assert!(four.automatic_failure());
}

#[test]
fn excused_absences_shrink_the_denominator() {
    let result = run(Policy::form(), 3, 2, [80.0, 70.0, 60.0]);

    assert_eq!(result.total_classes_that_count(), 3);
    assert_eq!(result.unexcused_absences(), 0);
    assert!(!result.automatic_failure());

    let standing = result.standing().expect("not failed");
    assert_close(standing.attendance_score(), 100.0);
    assert_close(standing.lab_work_average(), 70.0);
    assert_close(standing.class_standing(), 40.0 + 42.0);
}

#[test]
fn every_class_excused_scores_full_attendance() {
    let result = run(Policy::form(), 0, 5, [50.0; 3]);

    assert_eq!(result.total_classes_that_count(), 0);
    assert_eq!(result.unexcused_absences(), 0);
    assert_close(result.standing().expect("not failed").attendance_score(), 100.0);
}

#[test]
fn console_rules_never_fail_automatically() {
    let result = run(Policy::console(), 0, 0, [50.0; 3]);

    assert_eq!(result.total_classes(), 15);
    assert_eq!(result.unexcused_absences(), 15);
    assert!(!result.automatic_failure());

    let standing = result.standing().expect("console has no failure threshold");
    assert_close(standing.attendance_score(), 0.0);
    assert_close(standing.class_standing(), 30.0);
    assert_close(standing.required_for_passing(), 180.0);
}

#[test]
fn a_custom_threshold_moves_the_failure_point() {
    let policy = Policy::console().with_failure_threshold(Some(3));
    assert!(run(policy, 12, 0, [90.0; 3]).automatic_failure());
    assert!(!run(policy, 13, 0, [90.0; 3]).automatic_failure());
}

#[test]
fn equal_labs_average_to_themselves() {
    for x in [0.0, 33.3, 72.5, 100.0] {
        let result = run(Policy::console(), 15, 0, [x; 3]);
        assert_close(result.standing().expect("not failed").lab_work_average(), x);
    }
}

#[test]
fn required_scores_differ_by_a_constant() {
    for (attendance, labs) in [(15, [100.0; 3]), (7, [55.0, 60.0, 12.0]), (0, [0.0; 3])] {
        let result = run(Policy::console(), attendance, 0, labs);
        let standing = result.standing().expect("not failed");
        assert_close(
            standing.required_for_passing() - standing.required_for_excellent(),
            (75.0 - 100.0) / 0.30,
        );
    }
}

#[test]
fn class_standing_grows_with_attendance_and_labs() {
    let mut previous = f64::MIN;
    for attendance in 0..=15 {
        let result = run(Policy::console(), attendance, 0, [60.0; 3]);
        let standing = result.standing().expect("not failed").class_standing();
        assert!(standing >= previous, "{standing} < {previous} at {attendance}");
        previous = standing;
    }

    let mut previous = f64::MIN;
    for lab in [0.0, 10.0, 45.5, 80.0, 100.0] {
        let result = run(Policy::console(), 8, 0, [lab; 3]);
        let standing = result.standing().expect("not failed").class_standing();
        assert!(standing >= previous);
        previous = standing;
    }
}

#[test]
fn every_valid_form_input_computes_in_range() {
    let policy = Policy::form();
    for attendance in 0..=5 {
        for excused in 0..=(5 - attendance) {
            let input = GradeInput::from_values(&policy, attendance, excused, true, [75.0; 3])
                .expect("valid");
            let result = compute(input);

            assert_eq!(
                result.unexcused_absences() + result.attendance() + result.excused_absences(),
                5
            );
            assert_eq!(result.automatic_failure(), result.standing().is_none());
            if let Some(standing) = result.standing() {
                let score = standing.attendance_score();
                assert!((0.0..=100.0).contains(&score), "{score}");
                if result.total_classes_that_count() == 0 {
                    assert_close(score, 100.0);
                }
            }
        }
    }
}

#[test]
fn required_score_formula() {
    assert_close(required_exam_score(100.0, 75.0), 5.0 / 0.30);
    assert_close(required_exam_score(0.0, 75.0), 250.0);
    assert_close(required_exam_score(0.0, 100.0), 100.0 / 0.30);
}
