use serde::{Deserialize, Serialize};

/// Grant, loan or program listing from the funding catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: String,
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub grant_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub eligibility: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stage_fit: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GrantStatus>,
    #[serde(default = "default_true")]
    pub bookmarkable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantStatus {
    Open,
    ClosingSoon,
    Upcoming,
}

fn default_true() -> bool { true }

/// Investor (fund, angel group, accelerator) listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub investor_type: String,
    #[serde(default)]
    pub stage_focus: Vec<String>,
    #[serde(default)]
    pub check_size: String,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub thesis: String,
    #[serde(default)]
    pub michigan_portfolio_count: u32,
}

/// A catalog item annotated with its match result.
///
/// Serialises as the wrapped item's fields plus `matchLevel`, `aiMatched`
/// and `matchReasons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scored<T> {
    #[serde(flatten)]
    pub item: T,
    /// Display score, 0..=92
    pub match_level: u8,
    /// Raw weighted score reached the strong-match threshold
    pub ai_matched: bool,
    pub match_reasons: Vec<String>,
}

impl<T> Scored<T> {
    pub fn into_inner(self) -> T {
        self.item
    }
}

pub type ScoredGrant = Scored<Grant>;
pub type ScoredInvestor = Scored<Investor>;
