//! # FaqDesk Knowledge
//!
//! Lexical retrieval over a small, static FAQ knowledge base.
//! No vector DB, no embeddings: two string metrics and a stable sort.
//!
//! ## Scoring
//! ```text
//! score(q, c) = 0.7 * jaccard(tokens(q), tokens(c))
//!             + 0.3 * (1 - levenshtein(q, c) / max(len(q), len(c)))
//! ```
//!
//! ## How it works
//! ```text
//! faqs.json + trained_pairs.json
//!   ↓ loader (FAQ entries first)
//! KnowledgeBase (immutable, shared via Arc)
//!   ↓ rank("how do refunds work", 3)
//! Top 3 ScoredMatch, ties in base order
//! ```
//!
//! Ranking costs O(K·n·m) per query with no caching, which is fine for a few
//! thousand entries and nothing more.

pub mod extract;
pub mod loader;
pub mod ranker;
pub mod similarity;
pub mod tokenizer;

pub use extract::TrainedPairs;
pub use ranker::KnowledgeBase;
pub use similarity::score;
pub use tokenizer::tokenize;
