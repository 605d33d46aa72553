use crate::{
    actor::Actor,
    candidate::Candidates,
    config::TypeaheadConfig,
    engine::{Suggestion, SuggestionEngine, array::leaf_count},
    source::SourceKind,
};
use proptest::prelude::*;

fn arb_word() -> impl Strategy<Value = String> {
    "[a-cA-C]{0,4}"
}

fn arb_query() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn matches(word: &str, query: &str) -> bool {
    word.to_lowercase().starts_with(query)
}

fn run(query: &str, candidates: Candidates, limit: usize) -> Vec<Suggestion> {
    let config = TypeaheadConfig::default();
    let actor = Actor::anonymous();

    SuggestionEngine::new(&config, &actor)
        .results(query, &SourceKind::inline(candidates), None, Some(limit))
        .expect("inline sources never fail")
}

fn leaf_texts(results: &[Suggestion]) -> Vec<String> {
    results
        .iter()
        .flat_map(|entry| match entry {
            Suggestion::Record(record) => vec![record.text.clone()],
            Suggestion::Group(group) => leaf_texts(&group.children),
        })
        .collect()
}

proptest! {
    #[test]
    fn flat_results_respect_limit_and_prefix(
        words in prop::collection::vec(arb_word(), 0..16),
        query in arb_query(),
        limit in 1_usize..8,
    ) {
        let expected: Vec<String> = words
            .iter()
            .filter(|word| matches(word, &query))
            .take(limit)
            .cloned()
            .collect();

        let results = run(&query, Candidates::from_values(words), limit);

        prop_assert_eq!(leaf_texts(&results), expected);
    }

    #[test]
    fn grouped_results_respect_limit_and_keep_group_tails(
        groups in prop::collection::vec(prop::collection::vec(arb_word(), 0..6), 0..6),
        query in arb_query(),
        limit in 1_usize..8,
    ) {
        let candidates = groups
            .iter()
            .enumerate()
            .fold(Candidates::new(), |acc, (index, words)| {
                acc.with_group(format!("g{index}"), Candidates::from_values(words.clone()))
            });
        let total: usize = groups
            .iter()
            .map(|words| words.iter().filter(|word| matches(word, &query)).count())
            .sum();

        let results = run(&query, candidates, limit);

        prop_assert_eq!(leaf_count(&results), total.min(limit));

        for entry in &results {
            let Suggestion::Group(group) = entry else {
                return Err(TestCaseError::fail("grouped source produced a bare record"));
            };
            prop_assert!(!group.children.is_empty());

            let index: usize = group.text[1..].parse().expect("label is g<index>");
            // Kept children are a tail of the group's first `limit` matches.
            let capped: Vec<String> = groups[index]
                .iter()
                .filter(|word| matches(word, &query))
                .take(limit)
                .cloned()
                .collect();
            let kept = leaf_texts(&group.children);
            prop_assert!(capped.ends_with(&kept));
        }
    }
}
