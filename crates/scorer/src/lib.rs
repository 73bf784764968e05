mod matching;
mod rules;
mod tier;

pub use tier::{RelevanceTier, TierKey, RELEVANCE_TIERS};

use std::cmp::Ordering;

use scout_catalogue::Candidate;
use serde::Serialize;

use crate::matching::PageText;

/// Catalogue prefix marking a scraper that covers several councils. It
/// is stripped before matching, and the stripped term is what gets
/// displayed.
pub const MULTI_COUNCIL_PREFIX: &str = "multiple_";

/// One candidate with its computed relevance to a page. Built fresh on
/// every scoring pass and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub display_name: String,
    pub score: f32,
    pub reference_url: Option<String>,
    pub description: Option<String>,
}

/// One tier with every candidate whose score meets its threshold,
/// sorted descending by score.
#[derive(Clone, Debug, Serialize)]
pub struct TierBucket {
    pub key: TierKey,
    pub label: &'static str,
    pub candidates: Vec<ScoredCandidate>,
}

/// All four tier buckets in ladder order. A tier with no qualifying
/// candidates is present and empty, never absent.
#[derive(Clone, Debug, Serialize)]
#[serde(transparent)]
pub struct CategorizedResults {
    buckets: Vec<TierBucket>,
}

impl CategorizedResults {
    #[must_use]
    pub fn buckets(&self) -> &[TierBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn bucket(&self, key: TierKey) -> &[ScoredCandidate] {
        self.buckets
            .iter()
            .find(|bucket| bucket.key == key)
            .map(|bucket| bucket.candidates.as_slice())
            .unwrap_or(&[])
    }
}

/// Scores a catalogue of known scrapers against page text. Pure and
/// synchronous: no I/O, no mutation of the catalogue.
pub struct RelevanceScorer {
    candidates: Vec<Candidate>,
}

impl RelevanceScorer {
    #[must_use]
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Scores every candidate against the page, one output per
    /// candidate in catalogue order.
    #[must_use]
    pub fn score_content(&self, page_text: &str) -> Vec<ScoredCandidate> {
        let page = PageText::new(page_text);
        let scored: Vec<ScoredCandidate> = self
            .candidates
            .iter()
            .map(|candidate| score_candidate(&page, candidate))
            .collect();
        log::debug!(
            "scored {} candidates against {} chars of page text",
            scored.len(),
            page_text.len()
        );
        scored
    }

    /// Buckets scored candidates into every tier whose threshold they
    /// meet. Membership is cumulative across tiers; within a tier the
    /// sort is descending by score and stable, so equal scores keep
    /// catalogue order.
    #[must_use]
    pub fn categorize(scored: &[ScoredCandidate]) -> CategorizedResults {
        let buckets = RELEVANCE_TIERS
            .iter()
            .map(|tier| {
                let mut candidates: Vec<ScoredCandidate> = scored
                    .iter()
                    .filter(|candidate| candidate.score >= tier.min_score)
                    .cloned()
                    .collect();
                candidates.sort_by(|a, b| {
                    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
                });
                TierBucket {
                    key: tier.key,
                    label: tier.label,
                    candidates,
                }
            })
            .collect();
        CategorizedResults { buckets }
    }
}

fn score_candidate(page: &PageText<'_>, candidate: &Candidate) -> ScoredCandidate {
    let term = candidate
        .identifier
        .strip_prefix(MULTI_COUNCIL_PREFIX)
        .unwrap_or(&candidate.identifier);

    let score = match rules::override_score(page, term) {
        Some(forced) => forced,
        None => {
            let name = matching::name_score(page, term);
            let description =
                matching::description_score(page, candidate.description.as_deref());
            name.max(description)
        }
    };

    ScoredCandidate {
        display_name: term.to_string(),
        score,
        reference_url: candidate.reference_url.clone(),
        description: candidate.description.clone(),
    }
}
