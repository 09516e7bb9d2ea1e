use crate::models::Scored;

/// Number of highlights shown when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 3;

/// Minimum display score for a highlight
pub const TOP_MATCH_MIN_LEVEL: u8 = 70;

/// Whether a scored item qualifies as a highlight
#[inline]
pub fn is_top_match<T>(scored: &Scored<T>) -> bool {
    scored.ai_matched && scored.match_level >= TOP_MATCH_MIN_LEVEL
}

/// Pick up to `n` highlights from an already ranked list
///
/// Keeps the input order. An empty result is a normal outcome.
pub fn top_matches<T: Clone>(scored: &[Scored<T>], n: usize) -> Vec<Scored<T>> {
    scored
        .iter()
        .filter(|item| is_top_match(item))
        .take(n)
        .cloned()
        .collect()
}
