//! Constant lookup tables driving the rule-based scorers.
//!
//! All needles are lowercase and are matched as substrings against
//! lowercased text, so each table row reads the same way as the rule it
//! implements.

use crate::models::{BusinessModel, FundingRange, Stage};

/// Case-sensitive substring test over a set of needles.
/// Callers lowercase the haystack first.
#[inline]
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// How a profile industry is recognised for a grant industry family
#[derive(Debug, Clone, Copy)]
pub enum IndustrySelector {
    /// "saas" or anything containing "tech"
    TechLike,
    Exactly(&'static str),
}

impl IndustrySelector {
    pub fn accepts(self, industry: &str) -> bool {
        match self {
            IndustrySelector::TechLike => is_tech_like(industry),
            IndustrySelector::Exactly(name) => industry == name,
        }
    }
}

pub fn is_tech_like(industry: &str) -> bool {
    industry == "saas" || industry.contains("tech")
}

#[derive(Debug, Clone, Copy)]
pub struct IndustryFamily {
    pub selector: IndustrySelector,
    pub keywords: &'static [&'static str],
    pub reason: &'static str,
}

/// Grant industry families. Each row is checked independently, so a
/// profile such as "CleanTech" can earn both the tech and clean-tech rows.
pub static GRANT_INDUSTRY_FAMILIES: [IndustryFamily; 4] = [
    IndustryFamily {
        selector: IndustrySelector::TechLike,
        keywords: &["tech", "innovation", "software", "saas"],
        reason: "Tech/Innovation focus",
    },
    IndustryFamily {
        selector: IndustrySelector::Exactly("manufacturing"),
        keywords: &["manufacturing", "industry 4.0", "automation", "robotics"],
        reason: "Manufacturing focus",
    },
    IndustryFamily {
        selector: IndustrySelector::Exactly("cleantech"),
        keywords: &["clean", "mobility", "electrification", "ev"],
        reason: "CleanTech/Mobility focus",
    },
    IndustryFamily {
        selector: IndustrySelector::Exactly("e-commerce"),
        keywords: &["retail", "downtown", "main street", "brick-and-mortar"],
        reason: "Retail/E-commerce focus",
    },
];

pub const EARLY_STAGE_KEYWORDS: &[&str] =
    &["early-stage", "early stage", "pre-seed", "startup", "accelerator"];
pub const GROWTH_STAGE_KEYWORDS: &[&str] = &["growth", "scale", "expansion", "revenue"];

/// Which of the grant's texts a rule inspects
#[derive(Debug, Clone, Copy)]
pub enum GrantCondition {
    /// The grant's type mentions "grant"
    GrantType,
    /// Description + tags mention one of the keywords
    PitchContains(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct GrantRule {
    /// Needle looked up in the profile field
    pub trigger: &'static str,
    pub condition: GrantCondition,
    pub reason: &'static str,
}

/// Funding-intent rules; `trigger` is a substring of the funding plan
pub static FUNDING_INTENT_RULES: [GrantRule; 2] = [
    GrantRule {
        trigger: "grant",
        condition: GrantCondition::GrantType,
        reason: "Grant seeker",
    },
    GrantRule {
        trigger: "investment",
        condition: GrantCondition::PitchContains(&["investment", "venture", "angel"]),
        reason: "Investment focus",
    },
];

/// Primary-goal rules; `trigger` must equal one goal entry
pub static GOAL_RULES: [GrantRule; 3] = [
    GrantRule {
        trigger: "raise funding",
        condition: GrantCondition::GrantType,
        reason: "Funding goal match",
    },
    GrantRule {
        trigger: "join accelerator",
        condition: GrantCondition::PitchContains(&["accelerator", "program"]),
        reason: "Accelerator goal match",
    },
    GrantRule {
        trigger: "scale revenue",
        condition: GrantCondition::PitchContains(&["growth", "scale"]),
        reason: "Growth goal match",
    },
];

pub const SMALL_TEAM_MARKERS: &[&str] = &["solo", "2-3"];
pub const SMALL_BUSINESS_KEYWORDS: &[&str] = &["small business", "microbusiness"];

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct City {
    pub needle: &'static str,
    pub label: &'static str,
}

/// Cities with a dedicated location bonus, in evaluation order
pub static KNOWN_CITIES: [City; 3] = [
    City { needle: "detroit", label: "Detroit" },
    City { needle: "ann arbor", label: "Ann Arbor" },
    City { needle: "grand rapids", label: "Grand Rapids" },
];

pub const STATEWIDE_MARKERS: &[&str] = &["statewide", "michigan"];

// ---------------------------------------------------------------------------
// Investors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct SectorMapping {
    pub industry: &'static str,
    /// Declared investor sectors that count as a direct hit
    pub sectors: &'static [&'static str],
    pub reason: &'static str,
}

pub static SECTOR_MAPPINGS: [SectorMapping; 7] = [
    SectorMapping {
        industry: "saas",
        sectors: &["saas"],
        reason: "SaaS sector match",
    },
    SectorMapping {
        industry: "healthtech",
        sectors: &["healthtech", "medtech", "biotech"],
        reason: "HealthTech sector match",
    },
    SectorMapping {
        industry: "fintech",
        sectors: &["fintech"],
        reason: "FinTech sector match",
    },
    SectorMapping {
        industry: "edtech",
        sectors: &["edtech"],
        reason: "EdTech sector match",
    },
    SectorMapping {
        industry: "cleantech",
        sectors: &["cleantech", "social impact"],
        reason: "CleanTech sector match",
    },
    SectorMapping {
        industry: "manufacturing",
        sectors: &["manufacturing tech", "robotics"],
        reason: "Manufacturing Tech sector match",
    },
    SectorMapping {
        industry: "e-commerce",
        sectors: &["e-commerce", "marketplace", "consumer tech"],
        reason: "E-commerce sector match",
    },
];

pub const TECH_THESIS_KEYWORDS: &[&str] = &["software", "technology", "tech"];

/// Reason recorded when the investor stage rule fires
pub fn stage_reason(stage: Stage) -> &'static str {
    match stage {
        Stage::Idea => "Idea stage match",
        Stage::Mvp => "MVP stage match",
        Stage::EarlyRevenue => "Early revenue stage match",
        Stage::Scaling => "Scaling stage match",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CheckSizeRule {
    pub range: FundingRange,
    pub needles: &'static [&'static str],
    pub points: u32,
    pub reason: &'static str,
}

pub static CHECK_SIZE_RULES: [CheckSizeRule; 5] = [
    CheckSizeRule {
        range: FundingRange::UpTo50K,
        needles: &["50k"],
        points: 15,
        reason: "Check size compatible",
    },
    CheckSizeRule {
        range: FundingRange::From50KTo250K,
        needles: &["100k", "250k", "500k"],
        points: 20,
        reason: "Check size match",
    },
    CheckSizeRule {
        range: FundingRange::From250KTo1M,
        needles: &["250k", "500k", "1m"],
        points: 20,
        reason: "Check size match",
    },
    CheckSizeRule {
        range: FundingRange::From1MTo5M,
        needles: &["1m", "2m", "3m", "5m"],
        points: 20,
        reason: "Check size match",
    },
    CheckSizeRule {
        range: FundingRange::Over5M,
        needles: &["5m", "10m"],
        points: 20,
        reason: "Check size match",
    },
];

pub fn check_size_rule(range: FundingRange) -> Option<&'static CheckSizeRule> {
    CHECK_SIZE_RULES.iter().find(|rule| rule.range == range)
}

#[derive(Debug, Clone, Copy)]
pub struct ModelFit {
    pub model: BusinessModel,
    pub thesis: &'static [&'static str],
    /// Matched against the investor's sectors joined by spaces
    pub sectors: &'static [&'static str],
    pub reason: &'static str,
}

/// B2B2C has no row and never earns the business-model bonus
pub static MODEL_FITS: [ModelFit; 3] = [
    ModelFit {
        model: BusinessModel::B2B,
        thesis: &["b2b"],
        sectors: &["saas"],
        reason: "B2B model fit",
    },
    ModelFit {
        model: BusinessModel::B2C,
        thesis: &["consumer"],
        sectors: &["consumer"],
        reason: "B2C model fit",
    },
    ModelFit {
        model: BusinessModel::Marketplace,
        thesis: &[],
        sectors: &["marketplace"],
        reason: "Marketplace model fit",
    },
];

pub fn model_fit(model: BusinessModel) -> Option<&'static ModelFit> {
    MODEL_FITS.iter().find(|fit| fit.model == model)
}
