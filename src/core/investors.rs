use crate::core::keywords::{
    check_size_rule, contains_any, is_tech_like, model_fit, stage_reason, SECTOR_MAPPINGS,
    TECH_THESIS_KEYWORDS,
};
use crate::core::scoring::{location_bonus, rank, ScoreCard};
use crate::models::{FounderProfile, Investor, ScoredInvestor, Stage};

pub const SECTOR_WEIGHT: u32 = 35;
pub const THESIS_FALLBACK_WEIGHT: u32 = 20;
pub const STAGE_WEIGHT: u32 = 30;
pub const MODEL_FIT_WEIGHT: u32 = 10;
pub const CITY_WEIGHT: u32 = 5;
pub const STATEWIDE_WEIGHT: u32 = 3;
pub const FUNDRAISING_WEIGHT: u32 = 5;

/// Lowercased views of an investor, built once per investor
struct InvestorText {
    sectors: Vec<String>,
    /// sectors joined by spaces, for substring rules
    sector_blob: String,
    stages: Vec<String>,
    thesis: String,
    check_size: String,
    location: String,
}

impl InvestorText {
    fn new(investor: &Investor) -> Self {
        let sectors: Vec<String> = investor.sectors.iter().map(|s| s.to_lowercase()).collect();
        let sector_blob = sectors.join(" ");

        Self {
            sectors,
            sector_blob,
            stages: investor.stage_focus.iter().map(|s| s.to_lowercase()).collect(),
            thesis: investor.thesis.to_lowercase(),
            check_size: investor.check_size.to_lowercase(),
            location: investor.location.to_lowercase(),
        }
    }

    fn declares_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|s| s == sector)
    }

    fn focuses_on(&self, stage: Stage) -> bool {
        let label = stage.label().to_lowercase();
        self.stages.iter().any(|s| *s == label)
    }
}

/// Score one investor against a profile
///
/// Rules run in a fixed order: sector (with thesis fallback), stage,
/// check size, business model, location, fundraising bonus.
pub fn score_investor(profile: &FounderProfile, investor: &Investor) -> ScoreCard {
    let text = InvestorText::new(investor);
    let mut card = ScoreCard::new();

    if let Some(industry) = profile.industry() {
        let direct = SECTOR_MAPPINGS.iter().find(|mapping| {
            mapping.industry == industry
                && mapping.sectors.iter().any(|sector| text.declares_sector(sector))
        });

        match direct {
            Some(mapping) => card.add(SECTOR_WEIGHT, mapping.reason),
            None => {
                if is_tech_like(&industry) && contains_any(&text.thesis, TECH_THESIS_KEYWORDS) {
                    card.add(THESIS_FALLBACK_WEIGHT, "Technology focus alignment");
                }
            }
        }
    }

    if let Some(stage) = profile.stage() {
        // an investor one stage behind still counts
        let fits = text.focuses_on(stage) || stage.previous().is_some_and(|prev| text.focuses_on(prev));
        if fits {
            card.add(STAGE_WEIGHT, stage_reason(stage));
        }
    }

    if let Some(rule) = profile.funding_range().and_then(check_size_rule) {
        if contains_any(&text.check_size, rule.needles) {
            card.add(rule.points, rule.reason);
        }
    }

    if let Some(fit) = profile.business_model().and_then(model_fit) {
        if contains_any(&text.thesis, fit.thesis) || contains_any(&text.sector_blob, fit.sectors) {
            card.add(MODEL_FIT_WEIGHT, fit.reason);
        }
    }

    if let Some(location) = profile.location() {
        if let Some((points, reason)) = location_bonus(
            &location,
            &text.location,
            CITY_WEIGHT,
            STATEWIDE_WEIGHT,
            "Michigan-based investor",
        ) {
            card.add(points, reason);
        }
    }

    if profile.has_goal("raise funding") {
        card.add(FUNDRAISING_WEIGHT, "Active fundraising");
    }

    card
}

/// Score every investor and return annotated copies, best first
pub fn score_investors(profile: &FounderProfile, investors: &[Investor]) -> Vec<ScoredInvestor> {
    let mut scored: Vec<ScoredInvestor> = investors
        .iter()
        .map(|investor| score_investor(profile, investor).into_scored(investor.clone()))
        .collect();

    rank(&mut scored);
    scored
}
