//! Per-run build state.
//!
//! The id counter and the set of claimed names live here and nowhere else.
//! One context spans every source of a run, so ids stay unique and a name
//! claimed by an earlier source blocks later ones.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use food_map::MappingRules;
use food_model::FoodId;

use crate::profile::BuildProfile;

#[derive(Debug, Clone)]
pub struct BuildContext {
    profile: BuildProfile,
    rules: MappingRules,
    verified_on: NaiveDate,
    next_id: u32,
    claimed: BTreeSet<String>,
}

impl BuildContext {
    /// A context whose first id is `food_0001`.
    pub fn new(profile: BuildProfile, verified_on: NaiveDate) -> Self {
        Self {
            profile,
            rules: profile.mapping_rules(),
            verified_on,
            next_id: 1,
            claimed: BTreeSet::new(),
        }
    }

    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.next_id = first_id;
        self
    }

    /// Moves the counter past every `food_NNNN` id already in use.
    pub fn reserve_existing_ids<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let highest = ids.into_iter().filter_map(parse_counter).max();
        if let Some(highest) = highest {
            self.next_id = self.next_id.max(highest.saturating_add(1));
        }
    }

    pub fn profile(&self) -> BuildProfile {
        self.profile
    }

    pub fn rules(&self) -> &MappingRules {
        &self.rules
    }

    pub fn verified_on(&self) -> NaiveDate {
        self.verified_on
    }

    /// The counter value the next record will get.
    pub fn peek_counter(&self) -> u32 {
        self.next_id
    }

    /// Starts a new source. The counter jumps forward to `id_offset`, never
    /// backwards.
    pub fn begin_source(&mut self, id_offset: Option<u32>) {
        if let Some(offset) = id_offset {
            self.next_id = self.next_id.max(offset);
        }
    }

    /// Claims a name for this run. Returns false if it was already claimed,
    /// comparing case-insensitively.
    pub fn claim_name(&mut self, name: &str) -> bool {
        self.claimed.insert(name.to_lowercase())
    }

    /// Hands out the next id.
    pub fn next_id(&mut self) -> FoodId {
        let id = FoodId::from_counter(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

fn parse_counter(id: &str) -> Option<u32> {
    id.strip_prefix("food_")?.parse().ok()
}
