//! Cart line type.

use serde::{Deserialize, Serialize};

use crate::types::{Plant, PlantId, Price, Quantity};

/// A plant snapshot plus the quantity in the cart.
///
/// Serializes flat, with `quantity` alongside the plant fields:
///
/// ```json
/// {"id":1,"name":"Lavender","description":"...","img":"...","cost":250,"type":"Aromatic","quantity":2}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub plant: Plant,
    pub quantity: Quantity,
}

impl CartLine {
    /// Start a line for `plant` with a quantity of one.
    #[must_use]
    pub const fn new(plant: Plant) -> Self {
        Self {
            plant,
            quantity: Quantity::ONE,
        }
    }

    /// The plant ID this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> PlantId {
        self.plant.id
    }

    /// Unit cost times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.plant.cost.times(self.quantity)
    }
}
