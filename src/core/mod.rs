// Core algorithm exports
pub mod grants;
pub mod investors;
pub mod keywords;
pub mod matcher;
pub mod scoring;
pub mod selector;

pub use grants::{score_grant, score_grants};
pub use investors::{score_investor, score_investors};
pub use matcher::{Dashboard, MatchOutcome, Matcher};
pub use scoring::{scale, ScoreCard};
pub use selector::{top_matches, DEFAULT_TOP_N};
