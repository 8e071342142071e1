//! Fixed plant catalog.
//!
//! The catalog is built once at start-up and is read-only afterwards. Listing
//! order is the order plants were supplied in.

use std::collections::HashSet;

use thiserror::Error;

use paradise_nursery_core::{Plant, PlantId, PlantType, Price};

/// Errors raised when building a catalog from plant records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate plant id {0}")]
    DuplicateId(PlantId),
    #[error("plant {0} must have a positive cost")]
    NonPositiveCost(PlantId),
}

/// Read-only list of purchasable plants.
#[derive(Debug, Clone)]
pub struct Catalog {
    plants: Vec<Plant>,
}

impl Catalog {
    /// Build a catalog from plant records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two plants share an id or a plant costs
    /// nothing.
    pub fn new(plants: Vec<Plant>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(plants.len());
        for plant in &plants {
            if !seen.insert(plant.id) {
                return Err(CatalogError::DuplicateId(plant.id));
            }
            if !plant.cost.is_positive() {
                return Err(CatalogError::NonPositiveCost(plant.id));
            }
        }
        Ok(Self { plants })
    }

    /// The Paradise Nursery house catalog.
    #[must_use]
    pub fn paradise() -> Self {
        Self {
            plants: vec![
                plant(
                    1,
                    "Lavender",
                    "Aromatic plant with purple flowers.",
                    "https://www.alivitpharm.com/wp-content/uploads/2023/02/lavender.png",
                    250,
                    PlantType::Aromatic,
                ),
                plant(
                    2,
                    "Basil",
                    "Aromatic herb great for cooking.",
                    "https://th.bing.com/th/id/OIP.24w0iALFesN6gBFsVRV6ZQAAAA?w=264&h=197&c=7&r=0&o=7&pid=1.7&rm=3",
                    150,
                    PlantType::Aromatic,
                ),
                plant(
                    3,
                    "Jasmine",
                    "Sweetly aromatic plant with white flowers.",
                    "https://myplantin.com/_next/image?url=https:%2F%2Fstrapi.myplantin.com%2FCommon_Jasmine_d8be45b416.webp&w=1920&q=75",
                    320,
                    PlantType::Aromatic,
                ),
                plant(
                    4,
                    "Aloe Vera",
                    "Medicinal plant known for soothing skin.",
                    "https://hips.hearstapps.com/hmg-prod/images/aloe-vera-plant-outside-jpg-1522875135.jpg",
                    180,
                    PlantType::Medicinal,
                ),
                plant(
                    5,
                    "Neem",
                    "Medicinal plant with antibacterial properties.",
                    "https://images.freeimages.com/images/large-previews/6b8/neem-tree-1639620.jpg",
                    220,
                    PlantType::Medicinal,
                ),
                plant(
                    6,
                    "Tulsi",
                    "Medicinal plant considered holy and healing.",
                    "https://tse2.mm.bing.net/th/id/OIP.C0RFaYOUa35NQbQ1cO3TFgAAAA?r=0&w=300&h=225&rs=1&pid=ImgDetMain&o=7&rm=3",
                    200,
                    PlantType::Medicinal,
                ),
            ],
        }
    }

    /// All plants in catalog order.
    #[must_use]
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Plants of one type, in catalog order.
    pub fn by_type(&self, plant_type: PlantType) -> impl Iterator<Item = &Plant> {
        self.plants
            .iter()
            .filter(move |plant| plant.plant_type == plant_type)
    }

    /// Look up a plant by id.
    #[must_use]
    pub fn find(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|plant| plant.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::paradise()
    }
}

fn plant(
    id: i32,
    name: &str,
    description: &str,
    img: &str,
    cost: u64,
    plant_type: PlantType,
) -> Plant {
    Plant {
        id: PlantId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        img: img.to_string(),
        cost: Price::new(cost),
        plant_type,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_paradise_catalog_is_valid() {
        let catalog = Catalog::paradise();
        let rebuilt = Catalog::new(catalog.plants().to_vec()).unwrap();
        assert_eq!(rebuilt.plants().len(), 6);
    }

    #[test]
    fn test_by_type_keeps_catalog_order() {
        let catalog = Catalog::paradise();
        let aromatic: Vec<_> = catalog
            .by_type(PlantType::Aromatic)
            .map(|p| p.name.as_str())
            .collect();
        let medicinal: Vec<_> = catalog
            .by_type(PlantType::Medicinal)
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(aromatic, ["Lavender", "Basil", "Jasmine"]);
        assert_eq!(medicinal, ["Aloe Vera", "Neem", "Tulsi"]);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::paradise();
        assert_eq!(catalog.find(PlantId::new(4)).unwrap().name, "Aloe Vera");
        assert!(catalog.find(PlantId::new(99)).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let lavender = plant(1, "Lavender", "d", "i", 250, PlantType::Aromatic);
        let err = Catalog::new(vec![lavender.clone(), lavender]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(PlantId::new(1)));
    }

    #[test]
    fn test_rejects_free_plants() {
        let free = plant(7, "Weed", "d", "i", 0, PlantType::Medicinal);
        assert_eq!(
            Catalog::new(vec![free]).unwrap_err(),
            CatalogError::NonPositiveCost(PlantId::new(7))
        );
    }
}
