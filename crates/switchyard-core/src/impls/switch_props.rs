//! Property-based tests for switch dispatch.
//!
//! Rules are generated as `(threshold, tag)` pairs: rule `i` accepts
//! `x >= threshold_i` and maps every accepted input to `tag_i`.

use proptest::prelude::*;

use super::switch::{switch_transformer, switch_transformer_from_map};
use crate::domain::SwitchMap;
use crate::ports::{PredicateRef, TransformerRef, predicate, transformer};

const DEFAULT_TAG: i64 = -1;

fn rules_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((-100_i64..100, 0_i64..1000), 0..8)
}

fn at_least(threshold: i64) -> PredicateRef<i64> {
    predicate(move |x: &i64| *x >= threshold)
}

fn tag(value: i64) -> TransformerRef<i64, i64> {
    transformer(move |_: &i64| value)
}

fn expected(rules: &[(i64, i64)], x: i64) -> i64 {
    rules
        .iter()
        .find(|(threshold, _)| x >= *threshold)
        .map(|(_, tag)| *tag)
        .unwrap_or(DEFAULT_TAG)
}

fn build(rules: &[(i64, i64)]) -> TransformerRef<i64, i64> {
    let predicates: Vec<_> = rules.iter().map(|(t, _)| Some(at_least(*t))).collect();
    let transformers: Vec<_> = rules.iter().map(|(_, v)| Some(tag(*v))).collect();
    switch_transformer(
        Some(predicates.as_slice()),
        Some(transformers.as_slice()),
        Some(tag(DEFAULT_TAG)),
    )
    .expect("valid table")
}

proptest! {
    #[test]
    fn first_matching_rule_decides(rules in rules_strategy(), x in -150_i64..150) {
        let switch = build(&rules);
        prop_assert_eq!(switch.transform(&x), expected(&rules, x));
    }

    #[test]
    fn unmatched_input_uses_default(rules in rules_strategy()) {
        let switch = build(&rules);
        // below every threshold
        prop_assert_eq!(switch.transform(&-101), DEFAULT_TAG);
    }

    #[test]
    fn map_and_array_paths_agree(rules in rules_strategy(), x in -150_i64..150) {
        let mut map = SwitchMap::new();
        for (threshold, value) in &rules {
            map.insert(Some(at_least(*threshold)), Some(tag(*value)));
        }
        map.insert(None, Some(tag(DEFAULT_TAG)));

        let from_map = switch_transformer_from_map(Some(map)).expect("valid map");
        prop_assert_eq!(from_map.transform(&x), build(&rules).transform(&x));
    }

    #[test]
    fn mismatched_lengths_always_fail(predicates in 1_usize..6, transformers in 0_usize..6) {
        prop_assume!(predicates != transformers);
        let ps: Vec<_> = (0..predicates).map(|_| Some(at_least(0))).collect();
        let ts: Vec<_> = (0..transformers).map(|_| Some(tag(0))).collect();
        let result = switch_transformer(Some(ps.as_slice()), Some(ts.as_slice()), None);
        prop_assert!(result.is_err());
    }
}
