//! Plant catalog records.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{PlantId, Price};

/// Error returned when parsing an unknown [`PlantType`] name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown plant type: {0}")]
pub struct PlantTypeError(pub String);

/// Plant category.
///
/// Serialized as the capitalized variant name (`"Aromatic"`), matching the
/// stored cart format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantType {
    Aromatic,
    Medicinal,
}

impl PlantType {
    /// All plant types in listing order.
    pub const ALL: [Self; 2] = [Self::Aromatic, Self::Medicinal];

    /// The variant name as stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aromatic => "Aromatic",
            Self::Medicinal => "Medicinal",
        }
    }

    /// Heading for the product listing section of this type.
    #[must_use]
    pub const fn section_title(&self) -> &'static str {
        match self {
            Self::Aromatic => "Aromatic Plants",
            Self::Medicinal => "Medicinal Plants",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantType {
    type Err = PlantTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlantTypeError(s.to_string()))
    }
}

/// A purchasable plant.
///
/// Catalog entries are created once and never mutated. Cart lines keep a
/// snapshot copy of these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub description: String,
    /// Image URL.
    pub img: String,
    /// Unit cost in whole rupees.
    pub cost: Price,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
}
