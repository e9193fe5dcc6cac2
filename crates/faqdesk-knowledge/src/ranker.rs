//! The knowledge base and its top-k ranker.

use faqdesk_core::types::{FaqSummary, KbEntry, ScoredMatch};

use crate::similarity::score;

/// Default number of matches returned by [`KnowledgeBase::rank`] callers.
pub const DEFAULT_TOP_K: usize = 3;

/// Ordered, read-only collection of question/answer entries.
///
/// Entry order is the tie-break order for ranking and the order of the FAQ
/// listing. There is no mutation API; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KbEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KbEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[KbEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every question, in stored order.
    pub fn list(&self) -> Vec<FaqSummary> {
        self.entries
            .iter()
            .map(|e| FaqSummary {
                question: e.question.clone(),
            })
            .collect()
    }

    /// Score `query` against every question and return the best `k`.
    ///
    /// Sorted by descending score. `Vec::sort_by` is stable, so equal scores
    /// keep knowledge-base order.
    pub fn rank(&self, query: &str, k: usize) -> Vec<ScoredMatch> {
        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx, score(query, &entry.question)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(idx, score)| ScoredMatch {
                item: self.entries[idx].clone(),
                score,
            })
            .collect()
    }
}

impl From<Vec<KbEntry>> for KnowledgeBase {
    fn from(entries: Vec<KbEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            KbEntry::new("What is your refund policy?", "30 days"),
            KbEntry::new("How do I track my order?", "Use the tracking link in your email."),
            KbEntry::new("Do you ship internationally?", "Yes, to 40 countries."),
            KbEntry::new("How do I reset my password?", "Click 'Forgot password'."),
        ])
    }

    #[test]
    fn test_rank_returns_best_first() {
        let kb = sample_kb();
        let results = kb.rank("how do I track my order", 3);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].item.question, "How do I track my order?");
        assert!(results[0].score >= 0.6);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_truncates_to_kb_size() {
        let kb = sample_kb();
        assert_eq!(kb.rank("anything", 10).len(), 4);
        assert_eq!(kb.rank("anything", 0).len(), 0);
    }

    #[test]
    fn test_rank_empty_kb() {
        let kb = KnowledgeBase::default();
        assert!(kb.rank("hello", DEFAULT_TOP_K).is_empty());
    }

    #[test]
    fn test_ties_keep_base_order() {
        let kb = KnowledgeBase::new(vec![
            KbEntry::new("alpha", "1"),
            KbEntry::new("beta", "2"),
            KbEntry::new("alpha", "3"),
            KbEntry::new("alpha", "4"),
        ]);
        let results = kb.rank("alpha", 3);
        let answers: Vec<_> = results.iter().map(|m| m.item.answer.as_str()).collect();
        assert_eq!(answers, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_all_zero_scores_keep_base_order() {
        let kb = sample_kb();
        // No tokens and nothing in common at character level beyond chance.
        let results = kb.rank("", 4);
        assert!(results.iter().all(|m| m.score == 0.0));
        let questions: Vec<_> = results.iter().map(|m| m.item.question.clone()).collect();
        let expected: Vec<_> = kb.entries().iter().map(|e| e.question.clone()).collect();
        assert_eq!(questions, expected);
    }

    #[test]
    fn test_list_preserves_order() {
        let kb = sample_kb();
        let list = kb.list();
        assert_eq!(list.len(), 4);
        assert_eq!(list[0].question, "What is your refund policy?");
        assert_eq!(list[3].question, "How do I reset my password?");
    }
}
