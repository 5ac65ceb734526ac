//! Append-only merge of new records into an existing collection.

use std::collections::BTreeSet;

use food_model::NamedRecord;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome<T> {
    pub records: Vec<T>,
    /// New records dropped because their name was already present.
    pub skipped_duplicates: usize,
}

/// Keeps every existing record and appends each new record whose lowercased
/// name is absent from the existing collection.
///
/// Names are checked against a snapshot of `existing` only; duplicates
/// among `new` themselves are the builder's concern.
pub fn merge_records<T: NamedRecord>(existing: Vec<T>, new: Vec<T>) -> MergeOutcome<T> {
    let existing_names: BTreeSet<String> = existing.iter().map(NamedRecord::name_key).collect();

    let mut records = existing;
    records.reserve(new.len());
    let mut skipped_duplicates = 0;
    for record in new {
        if existing_names.contains(&record.name_key()) {
            skipped_duplicates += 1;
        } else {
            records.push(record);
        }
    }

    if skipped_duplicates > 0 {
        warn!(skipped = skipped_duplicates, "skipped duplicate food entries");
    }
    MergeOutcome {
        records,
        skipped_duplicates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str);

    impl NamedRecord for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn rice_and_dal() {
        let outcome = merge_records(vec![Named("Rice")], vec![Named("rice"), Named("Dal")]);

        assert_eq!(outcome.records, vec![Named("Rice"), Named("Dal")]);
        assert_eq!(outcome.skipped_duplicates, 1);
    }

    #[test]
    fn empty_existing_keeps_all_new() {
        let outcome = merge_records(Vec::new(), vec![Named("Idli"), Named("Upma")]);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_duplicates, 0);
    }

    #[test]
    fn existing_records_are_never_touched() {
        let existing = vec![Named("Chai"), Named("CHAI")];
        let outcome = merge_records(existing.clone(), vec![Named("chai")]);

        assert_eq!(outcome.records, existing);
        assert_eq!(outcome.skipped_duplicates, 1);
    }
}
