use crate::core::keywords::{contains_any, KNOWN_CITIES, STATEWIDE_MARKERS};
use crate::models::Scored;

/// Display scores are the raw score scaled by this percentage
pub const SCALE_PERCENT: u32 = 85;

/// Display scores never exceed this, so a match never reads as certain
pub const MAX_MATCH_LEVEL: u8 = 92;

/// Raw (pre-scaling) score at which an item is flagged as a strong match
pub const STRONG_MATCH_THRESHOLD: u32 = 70;

/// Accumulates fired rules for one catalog item
///
/// Points are additive; reasons are kept in the order rules were evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreCard {
    raw: u32,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32, reason: impl Into<String>) {
        self.raw += points;
        self.reasons.push(reason.into());
    }

    /// Unscaled sum of fired rule weights
    pub fn raw(&self) -> u32 {
        self.raw
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn match_level(&self) -> u8 {
        scale(self.raw)
    }

    /// Judged on the raw score, not the scaled and capped display value.
    /// A raw 70 displays as 60 yet is still flagged.
    pub fn is_strong(&self) -> bool {
        self.raw >= STRONG_MATCH_THRESHOLD
    }

    pub fn into_scored<T>(self, item: T) -> Scored<T> {
        Scored {
            item,
            match_level: self.match_level(),
            ai_matched: self.is_strong(),
            match_reasons: self.reasons,
        }
    }
}

/// `min(92, round(raw * 0.85))`, halves rounding up, in integer arithmetic
pub fn scale(raw: u32) -> u8 {
    let scaled = (raw.saturating_mul(SCALE_PERCENT).saturating_add(50)) / 100;
    scaled.min(MAX_MATCH_LEVEL as u32) as u8
}

/// Sort best-first. The sort is stable: ties keep their catalog order.
pub fn rank<T>(scored: &mut [Scored<T>]) {
    scored.sort_by(|a, b| b.match_level.cmp(&a.match_level));
}

/// Location bonus shared by both scorers
///
/// The first known city named in both the founder location and the item's
/// location earns `specific` points. Otherwise an item open statewide earns
/// `fallback` points. Both inputs must already be lowercase.
///
/// A region naming only the state never counts as a city match, so an Ann
/// Arbor founder gets the statewide bonus for a "Michigan" region.
pub fn location_bonus(
    founder_location: &str,
    item_location: &str,
    specific: u32,
    fallback: u32,
    fallback_reason: &str,
) -> Option<(u32, String)> {
    let city = KNOWN_CITIES.iter().find(|city| {
        founder_location.contains(city.needle) && item_location.contains(city.needle)
    });

    if let Some(city) = city {
        return Some((specific, format!("{} location match", city.label)));
    }

    if contains_any(item_location, STATEWIDE_MARKERS) {
        return Some((fallback, fallback_reason.to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_matches_rounded_product() {
        assert_eq!(scale(0), 0);
        assert_eq!(scale(10), 9); // 8.5 rounds up
        assert_eq!(scale(70), 60); // 59.5 rounds up
        assert_eq!(scale(90), 77); // 76.5 rounds up
        assert_eq!(scale(100), 85);
    }

    #[test]
    fn test_scale_is_capped() {
        assert_eq!(scale(108), 92);
        assert_eq!(scale(110), 92);
        assert_eq!(scale(185), 92);
        assert_eq!(scale(u32::MAX), 92);
    }

    #[test]
    fn test_strong_flag_uses_raw_score() {
        let mut card = ScoreCard::new();
        card.add(70, "threshold");

        assert_eq!(card.match_level(), 60);
        assert!(card.is_strong());

        let mut weak = ScoreCard::new();
        weak.add(69, "almost");
        assert!(!weak.is_strong());
    }

    #[test]
    fn test_reasons_keep_evaluation_order() {
        let mut card = ScoreCard::new();
        card.add(30, "first");
        card.add(5, "second");

        let scored = card.into_scored("item");
        assert_eq!(scored.match_reasons, vec!["first", "second"]);
        assert_eq!(scored.match_level, 30);
        assert_eq!(scored.item, "item");
    }

    #[test]
    fn test_rank_is_stable() {
        let mut items: Vec<Scored<&str>> = [("a", 10), ("b", 50), ("c", 10), ("d", 50)]
            .into_iter()
            .map(|(item, raw)| {
                let mut card = ScoreCard::new();
                card.add(raw, "r");
                card.into_scored(item)
            })
            .collect();

        rank(&mut items);

        let order: Vec<&str> = items.iter().map(|s| s.item).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_location_bonus_specific_city() {
        let bonus = location_bonus("detroit, mi", "detroit metro", 10, 5, "statewide");
        assert_eq!(bonus, Some((10, "Detroit location match".to_string())));
    }

    #[test]
    fn test_location_bonus_statewide_fallback() {
        let bonus = location_bonus("detroit, mi", "michigan", 10, 5, "Michigan-wide eligibility");
        assert_eq!(bonus, Some((5, "Michigan-wide eligibility".to_string())));
    }

    #[test]
    fn test_state_region_is_not_a_city_match() {
        let bonus = location_bonus("ann arbor, mi", "michigan", 10, 5, "Michigan-wide eligibility");
        assert_eq!(bonus, Some((5, "Michigan-wide eligibility".to_string())));
    }

    #[test]
    fn test_location_bonus_none() {
        assert_eq!(location_bonus("chicago", "ohio", 10, 5, "x"), None);
    }
}
