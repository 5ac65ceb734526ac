//! Source schema variants and their provenance labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The CSV schema a row was read with.
///
/// Each kind carries the provenance label written to `source` and the base
/// confidence used when scoring records built from it. Deserialization goes
/// through [`FromStr`], so manifests may also name a kind by its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum SourceKind {
    /// Indian Food Composition Tables 2017 export.
    Ifct,
    HealthyEating,
    /// RDA-based diet recommendation export.
    Rda,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Ifct, SourceKind::HealthyEating, SourceKind::Rda];

    /// Provenance label stored on every record built from this source.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Ifct => "IFCT2017",
            SourceKind::HealthyEating => "Healthy Eating Dataset",
            SourceKind::Rda => "RDA System",
        }
    }

    /// Starting confidence before the completeness penalty.
    pub fn base_confidence(&self) -> f64 {
        match self {
            SourceKind::Ifct => 0.95,
            SourceKind::HealthyEating => 0.88,
            SourceKind::Rda => 0.82,
        }
    }

    /// File name the source is usually exported under.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceKind::Ifct => "Indian_Food_Nutrition_Processed.csv",
            SourceKind::HealthyEating => "healthy_eating_dataset.csv",
            SourceKind::Rda => "indian_rda_based_diet_recommendation_system.csv",
        }
    }

    /// Short identifier used in manifests and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Ifct => "ifct",
            SourceKind::HealthyEating => "healthy-eating",
            SourceKind::Rda => "rda",
        }
    }

    /// Resolves a provenance label (as found in a stored record) back to
    /// its kind.
    pub fn from_label(label: &str) -> Option<Self> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SourceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "ifct" | "ifct2017" => Ok(SourceKind::Ifct),
            "healthy-eating" | "healthyeating" | "healthy" | "healthy-eating-dataset" => {
                Ok(SourceKind::HealthyEating)
            }
            "rda" | "rda-system" => Ok(SourceKind::Rda),
            _ => Err(ModelError::UnknownSourceKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
