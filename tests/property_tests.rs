//! Property-based tests for record invariants.
//!
//! Run with ProptestConfig::with_cases(100).

use gradebook::record::{
    mean, NameError, RecordError, StudentName, StudentRecord, GRADE_MAX, GRADE_MIN,
    TEST_RESULT_MAX, TEST_RESULT_MIN,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn record() -> StudentRecord {
    StudentRecord::new("Ivan", ["Math", "Art"]).unwrap()
}

/// One title-cased word in Latin or Cyrillic
fn arb_title_word() -> impl Strategy<Value = String> {
    prop_oneof!["[A-Z][a-z]{0,10}", "[А-Я][а-я]{0,10}"]
}

fn arb_title_name() -> impl Strategy<Value = String> {
    proptest::collection::vec(arb_title_word(), 1..4).prop_map(|words| words.join(" "))
}

fn arb_subject() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Math"), Just("Art")]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: title-cased alphabetic names are accepted verbatim
    #[test]
    fn prop_title_names_accepted(name in arb_title_name()) {
        let parsed = StudentName::parse(&name).unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    /// Property: a digit anywhere makes the name non-alphabetic
    #[test]
    fn prop_digit_rejected(name in arb_title_name(), digit in 0u32..10, at in any::<prop::sample::Index>()) {
        let mut chars: Vec<char> = name.chars().collect();
        let pos = at.index(chars.len() + 1);
        chars.insert(pos, char::from_digit(digit, 10).unwrap());
        let name: String = chars.into_iter().collect();
        prop_assert_eq!(StudentName::parse(&name), Err(NameError::NotAlphabetic));
    }

    /// Property: a lowercase-leading word fails the casing rule
    #[test]
    fn prop_lowercase_word_rejected(name in arb_title_name(), word in "[a-z][a-z]{0,5}") {
        let name = format!("{} {}", name, word);
        prop_assert_eq!(StudentName::parse(&name), Err(NameError::NotTitleCase));
    }

    /// Property: in-range grades append exactly one value
    #[test]
    fn prop_valid_grade_appends_one(subject in arb_subject(), grade in GRADE_MIN..=GRADE_MAX) {
        let mut r = record();
        let before = r.grades(subject).len();
        r.add_grade(subject, grade).unwrap();
        prop_assert_eq!(r.grades(subject).len(), before + 1);
        prop_assert_eq!(r.grades(subject).last().copied(), Some(grade));
    }

    /// Property: out-of-range grades are rejected and change nothing
    #[test]
    fn prop_invalid_grade_rejected(
        subject in arb_subject(),
        grade in prop_oneof![i32::MIN..GRADE_MIN, (GRADE_MAX + 1)..=i32::MAX]
    ) {
        let mut r = record();
        r.add_grade(subject, 3).unwrap();
        let before = r.clone();
        prop_assert_eq!(r.add_grade(subject, grade), Err(RecordError::InvalidGrade(grade)));
        prop_assert_eq!(r, before);
    }

    /// Property: test results are accepted exactly on [0, 100]
    #[test]
    fn prop_test_result_range(subject in arb_subject(), result in -50i32..150) {
        let mut r = record();
        let outcome = r.add_test_result(subject, result);
        if (TEST_RESULT_MIN..=TEST_RESULT_MAX).contains(&result) {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(r.test_results(subject), &[result][..]);
        } else {
            prop_assert_eq!(outcome, Err(RecordError::InvalidTestResult(result)));
            prop_assert!(r.test_results(subject).is_empty());
        }
    }

    /// Property: unknown subjects are rejected regardless of the value
    #[test]
    fn prop_unknown_subject_rejected(subject in "[A-Z][a-z]{2,8}", value in any::<i32>()) {
        prop_assume!(subject != "Math" && subject != "Art");
        let mut r = record();
        let is_invalid_subject = |res: Result<(), RecordError>| {
            matches!(res, Err(RecordError::InvalidSubject { .. }))
        };
        prop_assert!(is_invalid_subject(r.add_grade(&subject, value)));
        prop_assert!(is_invalid_subject(r.add_test_result(&subject, value)));
        prop_assert_eq!(r, record());
    }

    /// Property: overall average equals the mean of every recorded grade
    #[test]
    fn prop_overall_avg_is_flat_mean(
        math in proptest::collection::vec(GRADE_MIN..=GRADE_MAX, 0..10),
        art in proptest::collection::vec(GRADE_MIN..=GRADE_MAX, 0..10)
    ) {
        let mut r = record();
        for &g in &math {
            r.add_grade("Math", g).unwrap();
        }
        for &g in &art {
            r.add_grade("Art", g).unwrap();
        }

        let all: Vec<i32> = math.iter().chain(&art).copied().collect();
        prop_assert_eq!(r.overall_avg_grade(), mean(all.iter().copied()));
        prop_assert_eq!(r.subject_avg_grade("Math"), mean(math.iter().copied()));
        prop_assert!(r.overall_avg_grade() == 0.0 || (2.0..=5.0).contains(&r.overall_avg_grade()));
    }

    /// Property: mean stays within the bounds of its inputs
    #[test]
    fn prop_mean_bounded(values in proptest::collection::vec(-1000i32..1000, 1..50)) {
        let m = mean(values.iter().copied());
        let min = *values.iter().min().unwrap() as f64;
        let max = *values.iter().max().unwrap() as f64;
        prop_assert!(m >= min && m <= max);
    }
}
