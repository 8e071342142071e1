//! Product listing page.

use askama::Template;

use paradise_nursery_core::{Plant, PlantType, Price};

use super::{ControlSet, ControlView, NavBar};
use crate::catalog::Catalog;
use crate::filters;
use crate::navigation::Action;

/// Plant card display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantCardView {
    pub name: String,
    pub description: String,
    pub img: String,
    pub cost: Price,
    pub add: ControlView,
}

/// One section per plant type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSectionView {
    pub plant_type: PlantType,
    pub title: &'static str,
    /// DOM id of the section grid (`aromatic-grid`, `medicinal-grid`).
    pub grid_id: String,
    pub cards: Vec<PlantCardView>,
}

/// Product listing display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductsView {
    pub sections: Vec<ProductSectionView>,
}

impl ProductsView {
    pub(crate) fn build(catalog: &Catalog, controls: &mut ControlSet) -> Self {
        let sections = PlantType::ALL
            .into_iter()
            .map(|plant_type| ProductSectionView {
                plant_type,
                title: plant_type.section_title(),
                grid_id: format!("{}-grid", plant_type.as_str().to_lowercase()),
                cards: catalog
                    .by_type(plant_type)
                    .map(|plant| PlantCardView::build(plant, controls))
                    .collect(),
            })
            .collect();

        Self { sections }
    }
}

impl PlantCardView {
    fn build(plant: &Plant, controls: &mut ControlSet) -> Self {
        Self {
            name: plant.name.clone(),
            description: plant.description.clone(),
            img: plant.img.clone(),
            cost: plant.cost,
            add: controls.bind("Add to Cart", "add", Action::AddToCart(plant.id)),
        }
    }
}

#[derive(Template)]
#[template(path = "html/products.html")]
pub(crate) struct ProductsHtml<'a> {
    pub nav: &'a NavBar,
    pub view: &'a ProductsView,
}

#[derive(Template)]
#[template(path = "text/products.txt")]
pub(crate) struct ProductsText<'a> {
    pub nav: &'a NavBar,
    pub view: &'a ProductsView,
}
