//! Knowledge-base loading from the data directory.
//! Static FAQs come first, generated pairs after. A missing or broken source
//! contributes nothing; the server still starts.

use std::path::Path;

use faqdesk_core::config::KnowledgeConfig;
use faqdesk_core::error::{FaqDeskError, Result};
use faqdesk_core::types::KbEntry;

use crate::extract::TrainedPairs;
use crate::ranker::KnowledgeBase;

/// Read a JSON array of `{question, answer}` entries.
pub fn load_faqs(path: &Path) -> Result<Vec<KbEntry>> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| FaqDeskError::Knowledge(format!("{}: {e}", path.display())))
}

/// Read a `{count, pairs}` document written by the extractor.
pub fn load_pairs(path: &Path) -> Result<TrainedPairs> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json)
        .map_err(|e| FaqDeskError::Knowledge(format!("{}: {e}", path.display())))
}

impl KnowledgeBase {
    /// Assemble the knowledge base from the configured data directory.
    pub fn load(config: &KnowledgeConfig) -> Self {
        let faqs_path = config.faqs_path();
        let faqs = load_faqs(&faqs_path).unwrap_or_else(|e| {
            tracing::warn!("⚠️ FAQ list not loaded from {}: {e}", faqs_path.display());
            Vec::new()
        });

        let pairs_path = config.pairs_path();
        let pairs = match load_pairs(&pairs_path) {
            Ok(doc) => doc.pairs,
            Err(FaqDeskError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No trained pairs at {}", pairs_path.display());
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("⚠️ Trained pairs not loaded from {}: {e}", pairs_path.display());
                Vec::new()
            }
        };

        tracing::info!(
            "📚 Knowledge base: {} FAQ entries + {} trained pairs",
            faqs.len(),
            pairs.len()
        );

        let mut entries = faqs;
        entries.extend(pairs);
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> KnowledgeConfig {
        KnowledgeConfig {
            data_dir: dir.to_string_lossy().into_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_merges_faqs_before_pairs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("faqs.json"),
            r#"[{"question":"What is your refund policy?","answer":"30 days"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("trained_pairs.json"),
            r#"{"count":2,"pairs":[
                {"question":"my order is late","answer":"Sorry! DM us your order number."},
                {"question":"app keeps crashing","answer":"Please update to the latest version."}
            ]}"#,
        )
        .unwrap();

        let kb = KnowledgeBase::load(&config_for(dir.path()));
        assert_eq!(kb.len(), 3);
        assert_eq!(kb.entries()[0].answer, "30 days");
        assert_eq!(kb.entries()[1].question, "my order is late");
    }

    #[test]
    fn test_missing_files_give_empty_kb() {
        let dir = tempfile::tempdir().unwrap();
        let kb = KnowledgeBase::load(&config_for(dir.path()));
        assert!(kb.is_empty());
    }

    #[test]
    fn test_broken_faqs_still_loads_pairs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("faqs.json"), "{ not valid").unwrap();
        std::fs::write(
            dir.path().join("trained_pairs.json"),
            r#"{"count":1,"pairs":[{"question":"q","answer":"a"}]}"#,
        )
        .unwrap();

        let kb = KnowledgeBase::load(&config_for(dir.path()));
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.entries()[0], KbEntry::new("q", "a"));
    }

    #[test]
    fn test_load_faqs_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("faqs.json");
        std::fs::write(&path, r#"[{"question":"no answer"}]"#).unwrap();
        assert!(matches!(load_faqs(&path), Err(FaqDeskError::Knowledge(_))));
    }

    #[test]
    fn test_pairs_without_count_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trained_pairs.json");
        std::fs::write(&path, r#"{"pairs":[{"question":"q","answer":"a"}]}"#).unwrap();
        let doc = load_pairs(&path).unwrap();
        assert_eq!(doc.pairs.len(), 1);
    }
}
