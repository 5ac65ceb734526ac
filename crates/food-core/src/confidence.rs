//! Confidence scoring.

use food_map::utils::round_to;
use food_model::{Nutrition, SourceKind};

/// Nutrition maps with fewer entries than this are penalized.
pub const MIN_COMPLETE_NUTRIENTS: usize = 4;
pub const INCOMPLETE_PENALTY: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.99;

/// Source base score, minus the penalty for sparse nutrition, clamped to
/// `[0, 0.99]` and rounded to two decimals.
pub fn score_confidence(kind: SourceKind, nutrition: &Nutrition) -> f64 {
    let mut score = kind.base_confidence();
    if nutrition.len() < MIN_COMPLETE_NUTRIENTS {
        score -= INCOMPLETE_PENALTY;
    }
    round_to(score.clamp(0.0, MAX_CONFIDENCE), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_model::Nutrient;

    fn complete() -> Nutrition {
        Nutrition::new()
            .with(Nutrient::Calories, 100.0)
            .with(Nutrient::Protein, 1.0)
            .with(Nutrient::Fat, 1.0)
            .with(Nutrient::Carbohydrates, 1.0)
    }

    #[test]
    fn complete_nutrition_keeps_base() {
        assert_eq!(score_confidence(SourceKind::Ifct, &complete()), 0.95);
        assert_eq!(score_confidence(SourceKind::HealthyEating, &complete()), 0.88);
        assert_eq!(score_confidence(SourceKind::Rda, &complete()), 0.82);
    }

    #[test]
    fn sparse_nutrition_is_penalized() {
        let sparse = Nutrition::new().with(Nutrient::Calories, 168.0);
        assert_eq!(score_confidence(SourceKind::Ifct, &sparse), 0.85);
        assert_eq!(score_confidence(SourceKind::Rda, &Nutrition::new()), 0.72);
    }
}
