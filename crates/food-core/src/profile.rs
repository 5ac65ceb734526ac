//! Build profiles.
//!
//! The same builder serves two flows: the full migration into the app's
//! existing database and the quick generator that writes a fresh one.

use std::fmt;

use food_ingest::DocumentLayout;
use food_map::MappingRules;
use food_model::{Category, PortionHints};

use crate::portions::{category_portions, multiplier_portions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildProfile {
    /// All nutrients at two decimals, gram portions, detail fields.
    #[default]
    Migration,
    /// Macro subset at one decimal, multiplier portions, calories required.
    Quick,
}

impl BuildProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Migration => "migration",
            BuildProfile::Quick => "quick",
        }
    }

    pub fn mapping_rules(&self) -> MappingRules {
        match self {
            BuildProfile::Migration => MappingRules::migration(),
            BuildProfile::Quick => MappingRules::quick(),
        }
    }

    /// Rows without a calorie value are dropped.
    pub fn requires_calories(&self) -> bool {
        matches!(self, BuildProfile::Quick)
    }

    /// Records carry serving and dietary details.
    pub fn includes_details(&self) -> bool {
        matches!(self, BuildProfile::Migration)
    }

    pub fn portion_hints(&self, category: Category) -> PortionHints {
        match self {
            BuildProfile::Migration => category_portions(category),
            BuildProfile::Quick => multiplier_portions(),
        }
    }

    /// Layout used when no database document exists yet.
    pub fn default_layout(&self) -> DocumentLayout {
        match self {
            BuildProfile::Migration => DocumentLayout::Wrapped,
            BuildProfile::Quick => DocumentLayout::Flat,
        }
    }
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_differ_in_rules_and_layout() {
        assert_eq!(BuildProfile::Migration.mapping_rules().macro_decimals, 2);
        assert_eq!(BuildProfile::Quick.mapping_rules().macro_decimals, 1);
        assert!(BuildProfile::Quick.requires_calories());
        assert!(!BuildProfile::Migration.requires_calories());
        assert!(BuildProfile::Migration.includes_details());
        assert_eq!(BuildProfile::Quick.default_layout(), DocumentLayout::Flat);
    }

    #[test]
    fn quick_portions_ignore_category() {
        assert_eq!(
            BuildProfile::Quick.portion_hints(Category::Beverages),
            BuildProfile::Quick.portion_hints(Category::Grains)
        );
        assert_eq!(
            BuildProfile::Migration.portion_hints(Category::Beverages)["1_cup"],
            240.0
        );
    }
}
