//! Property tests for the evaluator and the difficulty filter

use codebreaker::core::{
    Difficulty, Feedback, FeedbackMark, SummaryFeedback, count_marks, evaluate, filter_feedback,
};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

/// Size of the multiset intersection of the two strings' symbols
fn shared_symbols(guess: &str, answer: &str) -> usize {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in answer.chars() {
        *counts.entry(c).or_default() += 1;
    }
    guess
        .chars()
        .filter(|c| {
            counts.get_mut(c).is_some_and(|n| {
                if *n == 0 {
                    return false;
                }
                *n -= 1;
                true
            })
        })
        .count()
}

fn digit_pair() -> impl Strategy<Value = (String, String)> {
    ("[0-9]{4}", "[0-9]{4}")
}

// Small alphabet so duplicates are common
fn word_pair() -> impl Strategy<Value = (String, String)> {
    ("[a-e]{5}", "[a-e]{5}")
}

fn raw_marks() -> impl Strategy<Value = Vec<FeedbackMark>> {
    prop::collection::vec(
        prop_oneof![
            Just(FeedbackMark::Correct),
            Just(FeedbackMark::Misplaced),
            Just(FeedbackMark::Absent),
        ],
        4..=5,
    )
}

fn check_evaluation(guess: &str, answer: &str) -> Result<(), TestCaseError> {
    let marks = evaluate(guess, answer).unwrap();
    prop_assert_eq!(marks.len(), guess.chars().count());

    for ((g, a), mark) in guess.chars().zip(answer.chars()).zip(&marks) {
        prop_assert_eq!(g == a, *mark == FeedbackMark::Correct);
    }

    let correct = count_marks(&marks, FeedbackMark::Correct);
    let misplaced = count_marks(&marks, FeedbackMark::Misplaced);
    prop_assert_eq!(correct + misplaced, shared_symbols(guess, answer));
    prop_assert!(!marks.contains(&FeedbackMark::Hidden));
    Ok(())
}

proptest! {
    #[test]
    fn numeric_evaluation_invariants((guess, answer) in digit_pair()) {
        check_evaluation(&guess, &answer)?;
    }

    #[test]
    fn word_evaluation_invariants((guess, answer) in word_pair()) {
        check_evaluation(&guess, &answer)?;
    }

    #[test]
    fn self_evaluation_is_all_correct(answer in "[0-9]{4}|[a-z]{5}") {
        let marks = evaluate(&answer, &answer).unwrap();
        prop_assert!(marks.iter().all(|&m| m == FeedbackMark::Correct));
    }

    #[test]
    fn easy_and_medium_show_everything(raw in raw_marks()) {
        prop_assert_eq!(filter_feedback(&raw, Difficulty::Easy, false), Feedback::Marks(raw.clone()));
        prop_assert_eq!(filter_feedback(&raw, Difficulty::Medium, true), Feedback::Marks(raw));
    }

    #[test]
    fn hard_hides_positions_only(raw in raw_marks()) {
        let Feedback::Marks(shown) = filter_feedback(&raw, Difficulty::Hard, true) else {
            return Err(TestCaseError::fail("hard must keep per-position marks"));
        };
        prop_assert_eq!(shown.len(), raw.len());
        prop_assert_eq!(count_marks(&shown, FeedbackMark::Correct), 0);
        prop_assert_eq!(
            count_marks(&shown, FeedbackMark::Misplaced),
            count_marks(&raw, FeedbackMark::Correct) + count_marks(&raw, FeedbackMark::Misplaced)
        );
        for (before, after) in raw.iter().zip(&shown) {
            prop_assert_eq!(*before == FeedbackMark::Absent, *after == FeedbackMark::Absent);
        }
    }

    #[test]
    fn expert_reveals_exact_hits_only(raw in raw_marks()) {
        let Feedback::Marks(shown) = filter_feedback(&raw, Difficulty::Expert, true) else {
            return Err(TestCaseError::fail("expert must keep per-position marks"));
        };
        for (before, after) in raw.iter().zip(&shown) {
            let expected = if *before == FeedbackMark::Correct {
                FeedbackMark::Correct
            } else {
                FeedbackMark::Hidden
            };
            prop_assert_eq!(*after, expected);
        }
    }

    #[test]
    fn insane_summarizes(raw in raw_marks(), show_misplaced in any::<bool>()) {
        let correct = count_marks(&raw, FeedbackMark::Correct);
        let misplaced = count_marks(&raw, FeedbackMark::Misplaced);
        prop_assert_eq!(
            filter_feedback(&raw, Difficulty::Insane, show_misplaced),
            Feedback::Summary(SummaryFeedback {
                correct,
                misplaced: show_misplaced.then_some(misplaced),
            })
        );
    }
}

#[test]
fn duplicate_symbols_match_classic_rules() {
    use FeedbackMark::{Absent, Correct, Misplaced};

    assert_eq!(
        evaluate("1123", "1111").unwrap(),
        [Correct, Correct, Absent, Absent]
    );
    assert_eq!(
        evaluate("abcde", "eeeee").unwrap(),
        [Absent, Absent, Absent, Absent, Correct]
    );
    assert_eq!(
        evaluate("speed", "erase").unwrap(),
        [Misplaced, Absent, Misplaced, Misplaced, Absent]
    );
}
