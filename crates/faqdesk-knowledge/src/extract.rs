//! Offline extraction of question/answer pairs from a support-conversation CSV.
//!
//! Expected columns (missing ones read as empty):
//! `tweet_id`, `inbound`, `text`, `response_tweet_id`, `in_response_to_tweet_id`.
//!
//! An inbound row is a customer question. Its answer is the row named by
//! `response_tweet_id`, or failing that the first outbound row that points back
//! at it through `in_response_to_tweet_id`.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use faqdesk_core::error::{FaqDeskError, Result};
use faqdesk_core::types::KbEntry;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// On-disk pairs document: `{count, pairs}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainedPairs {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub pairs: Vec<KbEntry>,
}

impl TrainedPairs {
    pub fn new(pairs: Vec<KbEntry>) -> Self {
        Self {
            count: pairs.len(),
            pairs,
        }
    }

    /// Write as pretty UTF-8 JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!("💾 Wrote {} pairs to {}", self.count, path.display());
        Ok(())
    }
}

/// One CSV row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupportRow {
    pub tweet_id: String,
    pub inbound: String,
    pub text: String,
    pub response_tweet_id: String,
    pub in_response_to_tweet_id: String,
}

impl SupportRow {
    fn is_inbound(&self) -> bool {
        self.inbound.eq_ignore_ascii_case("true")
    }
}

/// Strip URLs and @mentions, collapse whitespace, trim.
pub fn clean(text: &str) -> String {
    let text = URL_RE.replace_all(text, "");
    let text = MENTION_RE.replace_all(&text, "");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Parse CSV rows from any reader. Ragged rows are tolerated.
pub fn read_rows<R: std::io::Read>(reader: R) -> Result<Vec<SupportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<std::result::Result<Vec<SupportRow>, _>>()
        .map_err(|e| FaqDeskError::Extract(format!("CSV parse error: {e}")))
}

/// Pair each inbound question with its reply, then dedupe keeping first occurrences.
pub fn build_pairs(rows: &[SupportRow]) -> Vec<KbEntry> {
    // Later rows win on duplicate ids.
    let by_id: HashMap<&str, &SupportRow> = rows
        .iter()
        .filter(|r| !r.tweet_id.is_empty())
        .map(|r| (r.tweet_id.as_str(), r))
        .collect();

    // First outbound reply per parent id.
    let mut reply_to: HashMap<&str, &SupportRow> = HashMap::new();
    for r in rows.iter().filter(|r| !r.is_inbound()) {
        reply_to
            .entry(r.in_response_to_tweet_id.trim())
            .or_insert(r);
    }

    let mut seen = HashSet::new();
    let mut pairs = Vec::new();
    for row in rows.iter().filter(|r| r.is_inbound()) {
        let question = clean(&row.text);
        let resp_id = row.response_tweet_id.trim();
        let reply = if !resp_id.is_empty() && by_id.contains_key(resp_id) {
            by_id.get(resp_id)
        } else {
            reply_to.get(row.tweet_id.as_str())
        };
        let answer = reply.map(|r| clean(&r.text)).unwrap_or_default();

        if question.is_empty() || answer.is_empty() {
            continue;
        }
        if seen.insert((question.clone(), answer.clone())) {
            pairs.push(KbEntry { question, answer });
        }
    }
    pairs
}

/// Read a CSV file and extract its pairs.
pub fn extract_file(csv_path: &Path) -> Result<TrainedPairs> {
    let file = std::fs::File::open(csv_path)?;
    let rows = read_rows(file)?;
    let pairs = build_pairs(&rows);
    tracing::info!(
        "🧮 Extracted {} pairs from {} rows ({})",
        pairs.len(),
        rows.len(),
        csv_path.display()
    );
    Ok(TrainedPairs::new(pairs))
}
