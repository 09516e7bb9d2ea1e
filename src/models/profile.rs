use serde::{Deserialize, Serialize};

/// Founder/startup intake record as written by the onboarding flow.
///
/// Every field is optional. A missing (or empty) field means the scoring
/// dimension that reads it contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderProfile {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub founder_role: Option<String>,
    pub founder_location: Option<String>,
    pub startup_name: Option<String>,
    pub startup_description: Option<String>,
    pub startup_industry: Option<String>,
    pub startup_business_model: Option<String>,
    pub startup_stage: Option<String>,
    pub team_size: Option<String>,
    pub revenue_status: Option<String>,
    pub product_readiness: Option<String>,
    pub primary_goals: Vec<String>,
    pub funding_plans: Option<String>,
    pub funding_amount_range: Option<String>,
    pub challenges: Vec<String>,
}

impl FounderProfile {
    /// Lowercased industry, if present and non-empty
    pub fn industry(&self) -> Option<String> {
        lowered(&self.startup_industry)
    }

    pub fn location(&self) -> Option<String> {
        lowered(&self.founder_location)
    }

    pub fn funding_intent(&self) -> Option<String> {
        lowered(&self.funding_plans)
    }

    pub fn team(&self) -> Option<String> {
        lowered(&self.team_size)
    }

    pub fn stage(&self) -> Option<Stage> {
        self.startup_stage.as_deref().and_then(Stage::parse)
    }

    pub fn business_model(&self) -> Option<BusinessModel> {
        self.startup_business_model
            .as_deref()
            .and_then(BusinessModel::parse)
    }

    pub fn funding_range(&self) -> Option<FundingRange> {
        self.funding_amount_range
            .as_deref()
            .and_then(FundingRange::parse)
    }

    /// Lowercased primary goals, empty entries dropped
    pub fn goals(&self) -> Vec<String> {
        self.primary_goals
            .iter()
            .map(|goal| goal.trim().to_lowercase())
            .filter(|goal| !goal.is_empty())
            .collect()
    }

    /// True if the goal list contains `goal` (case-insensitive, whole entry)
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals().iter().any(|g| g == goal)
    }
}

fn lowered(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

/// Company stage, ordered from earliest to latest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Idea,
    #[serde(rename = "MVP")]
    Mvp,
    #[serde(rename = "Early Revenue")]
    EarlyRevenue,
    Scaling,
}

impl Stage {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "idea" => Some(Stage::Idea),
            "mvp" => Some(Stage::Mvp),
            "early revenue" => Some(Stage::EarlyRevenue),
            "scaling" => Some(Stage::Scaling),
            _ => None,
        }
    }

    /// Display label as used in catalogs and the intake form
    pub fn label(self) -> &'static str {
        match self {
            Stage::Idea => "Idea",
            Stage::Mvp => "MVP",
            Stage::EarlyRevenue => "Early Revenue",
            Stage::Scaling => "Scaling",
        }
    }

    /// The stage immediately before this one, if any
    pub fn previous(self) -> Option<Self> {
        match self {
            Stage::Idea => None,
            Stage::Mvp => Some(Stage::Idea),
            Stage::EarlyRevenue => Some(Stage::Mvp),
            Stage::Scaling => Some(Stage::EarlyRevenue),
        }
    }

    pub fn is_early(self) -> bool {
        matches!(self, Stage::Idea | Stage::Mvp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessModel {
    B2B,
    B2C,
    B2B2C,
    Marketplace,
}

impl BusinessModel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "b2b" => Some(BusinessModel::B2B),
            "b2c" => Some(BusinessModel::B2C),
            "b2b2c" => Some(BusinessModel::B2B2C),
            "marketplace" => Some(BusinessModel::Marketplace),
            _ => None,
        }
    }
}

/// Bucketed funding ask from the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingRange {
    #[serde(rename = "$0-50K")]
    UpTo50K,
    #[serde(rename = "$50-250K")]
    From50KTo250K,
    #[serde(rename = "$250K-1M")]
    From250KTo1M,
    #[serde(rename = "$1M-5M")]
    From1MTo5M,
    #[serde(rename = "$5M+")]
    Over5M,
}

impl FundingRange {
    /// Recognise a bucket by substring, so "$0-50K" and "0-50k (bootstrapped)"
    /// both resolve.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.to_lowercase();
        if value.contains("0-50k") {
            Some(FundingRange::UpTo50K)
        } else if value.contains("50-250k") {
            Some(FundingRange::From50KTo250K)
        } else if value.contains("250k-1m") {
            Some(FundingRange::From250KTo1M)
        } else if value.contains("1m-5m") {
            Some(FundingRange::From1MTo5M)
        } else if value.contains("5m+") {
            Some(FundingRange::Over5M)
        } else {
            None
        }
    }
}
