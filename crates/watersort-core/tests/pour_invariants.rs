//! Property-based invariant tests for the pour rule and victory detection.
//!
//! 1. Pouring conserves the number of units of every color.
//! 2. Every container stays within capacity after any pour.
//! 3. A rejected pour leaves the arrangement identical.
//! 4. An applied pour moves exactly `min(top-run, free space)` units.
//! 5. `pour` and `pour_capability` agree.
//! 6. `is_solved` matches its definition.
//! 7. Text notation parses back to the same arrangement.

use proptest::prelude::*;
use watersort_core::{Arrangement, Color, Container, PourError};

// ── Helpers ─────────────────────────────────────────────────────────────

fn color_strategy() -> impl Strategy<Value = Color> {
    (0..Color::PALETTE_SIZE).prop_map(|i| Color::ALL[i])
}

fn container_strategy() -> impl Strategy<Value = Container> {
    prop::collection::vec(color_strategy(), 0..=Container::CAPACITY)
        .prop_map(|units| Container::from_units(&units).unwrap())
}

fn arrangement_strategy() -> impl Strategy<Value = Arrangement> {
    prop::collection::vec(container_strategy(), 1..=9).prop_map(Arrangement::new)
}

fn arrangement_with_indices() -> impl Strategy<Value = (Arrangement, usize, usize)> {
    arrangement_strategy().prop_flat_map(|arrangement| {
        let len = arrangement.len();
        (Just(arrangement), 0..len, 0..len)
    })
}

proptest! {
    #[test]
    fn pour_conserves_colors((mut arrangement, from, to) in arrangement_with_indices()) {
        let before = arrangement.color_counts();
        let _ = arrangement.pour(from, to);
        prop_assert_eq!(arrangement.color_counts(), before);
    }

    #[test]
    fn pour_respects_capacity((mut arrangement, from, to) in arrangement_with_indices()) {
        let _ = arrangement.pour(from, to);
        for container in arrangement.containers() {
            prop_assert!(container.len() <= Container::CAPACITY);
        }
    }

    #[test]
    fn rejected_pour_is_identity((mut arrangement, from, to) in arrangement_with_indices()) {
        let before = arrangement.clone();
        if arrangement.pour(from, to).is_err() {
            prop_assert_eq!(arrangement, before);
        }
    }

    #[test]
    fn applied_pour_moves_top_run(
        (mut arrangement, from, to) in arrangement_with_indices()
    ) {
        prop_assume!(from != to);
        let source = arrangement.containers()[from].clone();
        let destination = arrangement.containers()[to].clone();
        if let Ok(pour) = arrangement.pour(from, to) {
            let expected = source.top_run().min(destination.free_space());
            prop_assert_eq!(pour.amount, expected);
            prop_assert!(pour.amount >= 1);
            prop_assert_eq!(arrangement.containers()[from].len(), source.len() - expected);
            prop_assert_eq!(arrangement.containers()[to].len(), destination.len() + expected);
            prop_assert_eq!(arrangement.containers()[to].top(), Some(pour.color));
            prop_assert!(arrangement.containers()[to].top_run() >= expected);
        }
    }

    #[test]
    fn capability_agrees_with_pour((mut arrangement, from, to) in arrangement_with_indices()) {
        let capability = arrangement.pour_capability(from, to);
        prop_assert_eq!(arrangement.pour(from, to), capability);
    }

    #[test]
    fn out_of_range_is_not_a_rule_violation(arrangement in arrangement_strategy()) {
        let mut arrangement = arrangement;
        let len = arrangement.len();
        let err = arrangement.pour(len, 0).unwrap_err();
        prop_assert!(matches!(err, PourError::IndexOutOfRange(_)));
        prop_assert!(!err.is_rule_violation());
    }

    #[test]
    fn is_solved_matches_definition(arrangement in arrangement_strategy()) {
        let expected = arrangement.containers().iter().all(|container| {
            container.is_empty()
                || (container.len() == Container::CAPACITY
                    && container.units().iter().all(|&c| c == container.units()[0]))
        });
        prop_assert_eq!(arrangement.is_solved(), expected);
    }

    #[test]
    fn notation_round_trips(arrangement in arrangement_strategy()) {
        let text = arrangement.to_string();
        prop_assert_eq!(text.parse::<Arrangement>().unwrap(), arrangement);
    }
}
