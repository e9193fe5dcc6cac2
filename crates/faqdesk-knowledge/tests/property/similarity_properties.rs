use faqdesk_core::types::KbEntry;
use faqdesk_knowledge::similarity::{jaccard, levenshtein, normalized_edit_distance};
use faqdesk_knowledge::{KnowledgeBase, score, tokenize};
use proptest::prelude::*;

fn token_vec() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", 0..8)
}

proptest! {
    #[test]
    fn jaccard_is_bounded(a in token_vec(), b in token_vec()) {
        let j = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&j));
    }

    #[test]
    fn jaccard_with_itself_is_one(a in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        prop_assert!((jaccard(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn jaccard_of_disjoint_sets_is_zero(
        a in prop::collection::vec("[a-m]{1,4}", 1..6),
        b in prop::collection::vec("[n-z]{1,4}", 1..6),
    ) {
        prop_assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn levenshtein_is_symmetric(a in ".{0,30}", b in ".{0,30}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn levenshtein_zero_iff_equal(a in "[ab]{0,8}", b in "[ab]{0,8}") {
        prop_assert_eq!(levenshtein(&a, &b) == 0, a == b);
    }

    #[test]
    fn levenshtein_triangle_inequality(a in ".{0,16}", b in ".{0,16}", c in ".{0,16}") {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn normalized_distance_is_bounded(a in ".{0,30}", b in ".{0,30}") {
        let d = normalized_edit_distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn score_is_bounded(a in ".{0,40}", b in ".{0,40}") {
        let s = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "score {} out of range", s);
    }

    #[test]
    fn score_with_itself_is_one(s in "[A-Za-z0-9]{1,8}([ ,?!.][A-Za-z0-9]{1,8}){0,5}") {
        prop_assert!(!tokenize(&s).is_empty());
        prop_assert!((score(&s, &s) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_returns_min_k_sorted_and_stable(
        questions in prop::collection::vec("[a-c]{1,3}( [a-c]{1,3}){0,2}", 0..12),
        query in "[a-c]{1,3}( [a-c]{1,3}){0,2}",
        k in 0usize..8,
    ) {
        let entries: Vec<KbEntry> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| KbEntry::new(q.clone(), i.to_string()))
            .collect();
        let kb = KnowledgeBase::new(entries);
        let results = kb.rank(&query, k);

        prop_assert_eq!(results.len(), k.min(kb.len()));
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                let first: usize = pair[0].item.answer.parse().unwrap();
                let second: usize = pair[1].item.answer.parse().unwrap();
                prop_assert!(first < second, "tie broke base order");
            }
        }
    }
}
