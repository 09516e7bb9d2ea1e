use crate::core::{grants::score_grants, investors::score_investors, selector::top_matches};
use crate::models::{FounderProfile, Grant, Investor, Scored};

/// Result of a scoring call
///
/// Without a profile the catalog is handed back untouched, in catalog order.
/// Callers treat that as "personalization unavailable", not as a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<T> {
    Personalized(Vec<Scored<T>>),
    Unpersonalized(Vec<T>),
}

impl<T: Clone> MatchOutcome<T> {
    pub fn is_personalized(&self) -> bool {
        matches!(self, MatchOutcome::Personalized(_))
    }

    pub fn len(&self) -> usize {
        match self {
            MatchOutcome::Personalized(items) => items.len(),
            MatchOutcome::Unpersonalized(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Highlights from a personalized outcome; always empty otherwise
    pub fn top_matches(&self, n: usize) -> Vec<Scored<T>> {
        match self {
            MatchOutcome::Personalized(items) => top_matches(items, n),
            MatchOutcome::Unpersonalized(_) => Vec::new(),
        }
    }

    pub fn truncate(&mut self, limit: usize) {
        match self {
            MatchOutcome::Personalized(items) => items.truncate(limit),
            MatchOutcome::Unpersonalized(items) => items.truncate(limit),
        }
    }

    /// Items with their computed fields, or defaulted "no match" fields when
    /// the outcome is unpersonalized
    pub fn into_scored(self) -> Vec<Scored<T>> {
        match self {
            MatchOutcome::Personalized(items) => items,
            MatchOutcome::Unpersonalized(items) => items
                .into_iter()
                .map(|item| Scored {
                    item,
                    match_level: 0,
                    ai_matched: false,
                    match_reasons: Vec::new(),
                })
                .collect(),
        }
    }
}

/// Highlights across both catalogs for one founder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub personalized: bool,
    pub grants: Vec<Scored<Grant>>,
    pub investors: Vec<Scored<Investor>>,
    /// Catalog sizes the highlights were picked from
    pub total_grants: usize,
    pub total_investors: usize,
}

/// Entry point for scoring catalogs against a founder profile
///
/// Stateless; every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    pub fn score_grants(&self, profile: Option<&FounderProfile>, grants: &[Grant]) -> MatchOutcome<Grant> {
        match profile {
            Some(profile) => {
                let scored = score_grants(profile, grants);
                tracing::debug!(
                    grants = scored.len(),
                    strong = scored.iter().filter(|s| s.ai_matched).count(),
                    best = scored.first().map(|s| s.match_level).unwrap_or(0),
                    "Scored grant catalog"
                );
                MatchOutcome::Personalized(scored)
            }
            None => {
                tracing::debug!(grants = grants.len(), "No profile, returning grants unscored");
                MatchOutcome::Unpersonalized(grants.to_vec())
            }
        }
    }

    pub fn score_investors(
        &self,
        profile: Option<&FounderProfile>,
        investors: &[Investor],
    ) -> MatchOutcome<Investor> {
        match profile {
            Some(profile) => {
                let scored = score_investors(profile, investors);
                tracing::debug!(
                    investors = scored.len(),
                    strong = scored.iter().filter(|s| s.ai_matched).count(),
                    best = scored.first().map(|s| s.match_level).unwrap_or(0),
                    "Scored investor catalog"
                );
                MatchOutcome::Personalized(scored)
            }
            None => {
                tracing::debug!(investors = investors.len(), "No profile, returning investors unscored");
                MatchOutcome::Unpersonalized(investors.to_vec())
            }
        }
    }

    /// Score both catalogs and keep the top `n` highlights of each
    pub fn dashboard(
        &self,
        profile: Option<&FounderProfile>,
        grants: &[Grant],
        investors: &[Investor],
        n: usize,
    ) -> Dashboard {
        let grant_outcome = self.score_grants(profile, grants);
        let investor_outcome = self.score_investors(profile, investors);

        Dashboard {
            personalized: grant_outcome.is_personalized(),
            grants: grant_outcome.top_matches(n),
            investors: investor_outcome.top_matches(n),
            total_grants: grant_outcome.len(),
            total_investors: investor_outcome.len(),
        }
    }
}
