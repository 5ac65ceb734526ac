//! Database statistics.

use std::collections::BTreeMap;

use food_ingest::StoredFood;
use food_model::{Category, FoodRecord, SourceKind};

/// Bucket used when a stored entry lacks a category or source.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseStats {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_source: BTreeMap<String, usize>,
    /// Mean over all entries, missing confidences counting as zero.
    /// `None` for an empty collection.
    pub mean_confidence: Option<f64>,
}

impl DatabaseStats {
    /// Hand-edited entries may spell known categories and sources loosely;
    /// those are counted under their canonical names.
    pub fn from_stored(foods: &[StoredFood]) -> Self {
        Self::collect(foods.iter().map(|food| {
            (
                food.str_field("category").map_or(UNKNOWN, canonical_category),
                food.str_field("source").map_or(UNKNOWN, canonical_source),
                food.f64_field("confidence").unwrap_or(0.0),
            )
        }))
    }

    pub fn from_records(records: &[FoodRecord]) -> Self {
        Self::collect(records.iter().map(|record| {
            (
                record.category.as_str(),
                record.source.as_str(),
                record.confidence,
            )
        }))
    }

    fn collect<'a>(entries: impl Iterator<Item = (&'a str, &'a str, f64)>) -> Self {
        let mut stats = Self::default();
        let mut confidence_sum = 0.0;
        for (category, source, confidence) in entries {
            stats.total += 1;
            *stats.by_category.entry(category.to_string()).or_default() += 1;
            *stats.by_source.entry(source.to_string()).or_default() += 1;
            confidence_sum += confidence;
        }
        if stats.total > 0 {
            stats.mean_confidence = Some(confidence_sum / stats.total as f64);
        }
        stats
    }

    /// Category counts, largest first.
    pub fn categories_by_count(&self) -> Vec<(&str, usize)> {
        by_count(&self.by_category)
    }

    /// Source counts, largest first.
    pub fn sources_by_count(&self) -> Vec<(&str, usize)> {
        by_count(&self.by_source)
    }
}

fn canonical_category(raw: &str) -> &str {
    raw.parse::<Category>().map_or(raw, |category| category.as_str())
}

fn canonical_source(raw: &str) -> &str {
    SourceKind::from_label(raw).map_or(raw, |kind| kind.label())
}

fn by_count(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(key, count)| (key.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored(value: serde_json::Value) -> StoredFood {
        StoredFood::from_map(value.as_object().cloned().unwrap())
    }

    #[test]
    fn stats_over_stored_foods() {
        let foods = vec![
            stored(json!({"name": "Chai", "category": "beverages", "source": "IFCT2017", "confidence": 0.95})),
            stored(json!({"name": "Lassi", "category": "beverages", "source": "RDA System", "confidence": 0.75})),
            stored(json!({"name": "Idli", "category": "breakfast", "source": "IFCT2017", "confidence": 0.85})),
            stored(json!({"name": "Mystery"})),
        ];

        let stats = DatabaseStats::from_stored(&foods);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_category["beverages"], 2);
        assert_eq!(stats.by_category[UNKNOWN], 1);
        assert_eq!(
            stats.sources_by_count(),
            vec![("IFCT2017", 2), ("RDA System", 1), (UNKNOWN, 1)]
        );
        let mean = stats.mean_confidence.unwrap();
        assert!((mean - 0.6375).abs() < 1e-9);
    }

    #[test]
    fn loose_spellings_share_a_bucket() {
        let foods = vec![
            stored(json!({"name": "Chai", "category": "Beverages", "source": "ifct2017"})),
            stored(json!({"name": "Lassi", "category": " beverages ", "source": "IFCT2017"})),
            stored(json!({"name": "Kheer", "category": "sweets", "source": "manual"})),
        ];

        let stats = DatabaseStats::from_stored(&foods);

        assert_eq!(stats.by_category["beverages"], 2);
        assert_eq!(stats.by_category["sweets"], 1);
        assert_eq!(stats.sources_by_count(), vec![("IFCT2017", 2), ("manual", 1)]);
    }

    #[test]
    fn empty_collection_has_no_mean() {
        let stats = DatabaseStats::from_stored(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.mean_confidence, None);
        assert!(stats.categories_by_count().is_empty());
    }
}
