use crate::core::keywords::{
    contains_any, GrantCondition, GrantRule, EARLY_STAGE_KEYWORDS, FUNDING_INTENT_RULES,
    GOAL_RULES, GRANT_INDUSTRY_FAMILIES, GROWTH_STAGE_KEYWORDS, SMALL_BUSINESS_KEYWORDS,
    SMALL_TEAM_MARKERS,
};
use crate::core::scoring::{location_bonus, rank, ScoreCard};
use crate::models::{FounderProfile, Grant, ScoredGrant};

pub const INDUSTRY_WEIGHT: u32 = 30;
pub const STAGE_WEIGHT: u32 = 25;
pub const FUNDING_INTENT_WEIGHT: u32 = 20;
pub const GOAL_WEIGHT: u32 = 15;
pub const CITY_WEIGHT: u32 = 10;
pub const STATEWIDE_WEIGHT: u32 = 5;
pub const TEAM_SIZE_WEIGHT: u32 = 5;

/// Lowercased views of a grant's text, built once per grant
struct GrantText {
    /// description + tags + eligibility
    full: String,
    /// description + tags
    pitch: String,
    /// description + eligibility
    terms: String,
    kind: String,
    region: String,
}

impl GrantText {
    fn new(grant: &Grant) -> Self {
        let description = grant.description.to_lowercase();
        let tags = grant.tags.join(" ").to_lowercase();
        let eligibility = grant.eligibility.join(" ").to_lowercase();

        Self {
            full: format!("{} {} {}", description, tags, eligibility),
            pitch: format!("{} {}", description, tags),
            terms: format!("{} {}", description, eligibility),
            kind: grant.grant_type.to_lowercase(),
            region: grant.region.to_lowercase(),
        }
    }

    fn is_grant_like(&self) -> bool {
        self.kind.contains("grant")
    }

    fn satisfies(&self, condition: GrantCondition) -> bool {
        match condition {
            GrantCondition::GrantType => self.is_grant_like(),
            GrantCondition::PitchContains(keywords) => contains_any(&self.pitch, keywords),
        }
    }
}

/// Score one grant against a profile
///
/// Rules run in a fixed order: industry, stage, funding intent, goals,
/// location, team size.
pub fn score_grant(profile: &FounderProfile, grant: &Grant) -> ScoreCard {
    let text = GrantText::new(grant);
    let mut card = ScoreCard::new();

    if let Some(industry) = profile.industry() {
        for family in &GRANT_INDUSTRY_FAMILIES {
            if family.selector.accepts(&industry) && contains_any(&text.full, family.keywords) {
                card.add(INDUSTRY_WEIGHT, family.reason);
            }
        }
    }

    if let Some(stage) = profile.stage() {
        if stage.is_early() {
            if contains_any(&text.full, EARLY_STAGE_KEYWORDS) {
                card.add(STAGE_WEIGHT, "Early-stage match");
            }
        } else if contains_any(&text.full, GROWTH_STAGE_KEYWORDS) {
            card.add(STAGE_WEIGHT, "Growth-stage match");
        }
    }

    if let Some(intent) = profile.funding_intent() {
        apply_rules(&mut card, &text, &FUNDING_INTENT_RULES, FUNDING_INTENT_WEIGHT, |trigger| {
            intent.contains(trigger)
        });
    }

    let goals = profile.goals();
    if !goals.is_empty() {
        apply_rules(&mut card, &text, &GOAL_RULES, GOAL_WEIGHT, |trigger| {
            goals.iter().any(|goal| goal == trigger)
        });
    }

    if let Some(location) = profile.location() {
        if let Some((points, reason)) = location_bonus(
            &location,
            &text.region,
            CITY_WEIGHT,
            STATEWIDE_WEIGHT,
            "Michigan-wide eligibility",
        ) {
            card.add(points, reason);
        }
    }

    if let Some(team) = profile.team() {
        if contains_any(&team, SMALL_TEAM_MARKERS) && contains_any(&text.terms, SMALL_BUSINESS_KEYWORDS) {
            card.add(TEAM_SIZE_WEIGHT, "Small business size");
        }
    }

    card
}

fn apply_rules(
    card: &mut ScoreCard,
    text: &GrantText,
    rules: &[GrantRule],
    weight: u32,
    triggered: impl Fn(&str) -> bool,
) {
    for rule in rules {
        if triggered(rule.trigger) && text.satisfies(rule.condition) {
            card.add(weight, rule.reason);
        }
    }
}

/// Score every grant and return annotated copies, best first
pub fn score_grants(profile: &FounderProfile, grants: &[Grant]) -> Vec<ScoredGrant> {
    let mut scored: Vec<ScoredGrant> = grants
        .iter()
        .map(|grant| score_grant(profile, grant).into_scored(grant.clone()))
        .collect();

    rank(&mut scored);
    scored
}
