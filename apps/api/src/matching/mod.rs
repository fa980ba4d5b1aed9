//! Skill-matching engine: normalize → vectorize → rank → assemble.
//!
//! The corpus and the fitted TF-IDF model live in a [`MatchContext`] built
//! once at startup and shared read-only across requests. Each query gets its
//! own vector and result list; nothing here mutates shared state after
//! construction, so the context is safe behind an `Arc` with no locking.

pub mod assemble;
pub mod normalize;
pub mod ranker;
pub mod vectorizer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::normalize::{normalize, RawSkills};
use crate::matching::vectorizer::{SparseVector, TfIdfModel};

/// Default result cardinality, matching the legacy top-5 cut.
pub const DEFAULT_TOP_N: usize = 5;

/// One job posting in the static corpus. Identity is its position in the
/// corpus snapshot; the corpus never changes for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub skills: Vec<String>,
}

/// One ranked match, ordered descending by score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_index: usize,
    pub title: String,
    pub skills: Vec<String>,
    /// Cosine similarity in [0, 1].
    pub score: f64,
}

/// Typed failures of the matching engine. Remote-service failures never
/// appear here; the engine performs no I/O.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("skills field must be a string or a list of strings, got {found}")]
    InvalidInputKind { found: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("ranked index {index} out of corpus bounds (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Immutable process-wide matching state: the corpus, the model fit over it,
/// and the precomputed corpus vectors.
#[derive(Debug, Clone)]
pub struct MatchContext {
    corpus: Vec<JobRecord>,
    model: TfIdfModel,
    corpus_vectors: Vec<SparseVector>,
}

impl MatchContext {
    /// Fits the model over the corpus skill sets and precomputes every
    /// corpus vector. The query is deliberately absent from the fit; refitting
    /// per query would silently change scores between requests.
    pub fn new(corpus: Vec<JobRecord>) -> Result<Self, MatchError> {
        if corpus.is_empty() {
            return Err(MatchError::InvalidArgument(
                "job corpus is empty".to_string(),
            ));
        }

        let skillsets: Vec<Vec<String>> =
            corpus.iter().map(|job| job.skills.clone()).collect();
        let model = TfIdfModel::fit(&skillsets);
        let corpus_vectors = skillsets
            .iter()
            .map(|skillset| model.transform(skillset))
            .collect();

        Ok(MatchContext {
            corpus,
            model,
            corpus_vectors,
        })
    }

    /// Runs one query through the full pipeline and returns the ordered
    /// top-N matches. Stateless apart from reading `self`; safe to call
    /// concurrently.
    pub fn top_matches(
        &self,
        raw_query: &RawSkills,
        top_n: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let query_skills = normalize(raw_query);
        let query_vector = self.model.transform(&query_skills);
        let ranked = ranker::rank(&query_vector, &self.corpus_vectors, top_n)?;
        assemble::assemble(&ranked, &self.corpus)
    }

    /// Number of jobs in the corpus snapshot.
    pub fn corpus_size(&self) -> usize {
        self.corpus.len()
    }

    /// Size of the fitted vocabulary.
    pub fn dimensions(&self) -> usize {
        self.model.dimensions()
    }
}
