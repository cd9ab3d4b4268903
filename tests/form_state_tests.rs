use prelim::{Policy, ValidationError, form::FormState};

fn filled(attendance: &str, excused: &str, verified: bool) -> FormState {
    let mut form = FormState::new();
    form.set_attendance(attendance);
    form.set_excused_absences(excused);
    form.set_excuse_verified(verified);
    for lab in 1..=3 {
        form.set_lab(lab, "90").expect("lab exists");
    }
    form
}

#[test]
fn starts_with_zero_excused_and_a_disabled_checkbox() {
    let form = FormState::new();
    assert_eq!(form.excused_absences(), "0");
    assert_eq!(form.attendance(), "");
    assert!(!form.checkbox_enabled());
    assert!(!form.excuse_verified());
}

#[test]
fn checkbox_follows_the_excused_field() {
    let mut form = FormState::new();

    form.set_excused_absences("2");
    assert!(form.checkbox_enabled());
    form.set_excuse_verified(true);
    assert!(form.excuse_verified());

    form.set_excused_absences("0");
    assert!(!form.checkbox_enabled());
    assert!(!form.excuse_verified(), "disabling clears the checkbox");

    form.set_excused_absences("1");
    assert!(form.checkbox_enabled());
    assert!(!form.excuse_verified());

    form.set_excused_absences("one");
    assert!(!form.checkbox_enabled());

    form.set_excused_absences("-3");
    assert!(!form.checkbox_enabled());
}

#[test]
fn ticking_a_disabled_checkbox_does_nothing() {
    let mut form = FormState::new();
    form.set_excuse_verified(true);
    assert!(!form.excuse_verified());
}

#[test]
fn labs_are_numbered_from_one() {
    let mut form = FormState::new();
    form.set_lab(1, "75").expect("lab 1");
    form.set_lab(3, "80").expect("lab 3");

    assert_eq!(form.lab(1), Some("75"));
    assert_eq!(form.lab(2), Some(""));
    assert_eq!(form.lab(3), Some("80"));
    assert_eq!(form.lab(0), None);
    assert_eq!(form.lab(4), None);
    assert!(form.set_lab(0, "1").is_err());
    assert!(form.set_lab(4, "1").is_err());
}

#[test]
fn submit_validates_and_computes() {
    let result = filled("3", "2", true)
        .submit(&Policy::form())
        .expect("valid form");
    assert_eq!(result.total_classes_that_count(), 3);
    assert!(!result.automatic_failure());

    let err = filled("3", "2", false).submit(&Policy::form()).unwrap_err();
    assert_eq!(err, ValidationError::UnverifiedExcuse { excused: 2 });

    let result = filled("0", "0", false)
        .submit(&Policy::form())
        .expect("valid form");
    assert!(result.automatic_failure());
}

#[test]
fn reset_restores_the_blank_form() {
    let mut form = filled("4", "1", true);
    assert!(form.excuse_verified());

    form.reset();
    assert_eq!(form, FormState::new());
}
