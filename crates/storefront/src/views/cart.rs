//! Cart page.
//!
//! Stepper controls carry the target quantity computed at render time, so a
//! decrement issued at quantity 1 asks for 0 and is rejected by the store even
//! if a host ignores the disabled flag.

use askama::Template;

use paradise_nursery_core::{CartLine, Price};

use super::{ControlSet, ControlView, NavBar};
use crate::cart::CartStore;
use crate::filters;
use crate::navigation::Action;

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub name: String,
    pub img: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
    pub decrement: ControlView,
    pub increment: ControlView,
    pub delete: ControlView,
}

/// Cart display data when there is nothing in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCartView {
    pub message: &'static str,
    pub shop_now: ControlView,
}

/// Cart display data with lines and the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledCartView {
    pub lines: Vec<CartLineView>,
    pub total: Price,
    pub continue_shopping: ControlView,
    pub checkout: ControlView,
}

/// Cart page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartPageView {
    Empty(EmptyCartView),
    Filled(FilledCartView),
}

impl CartPageView {
    pub(crate) fn build<S>(cart: &CartStore<S>, controls: &mut ControlSet) -> Self {
        if cart.is_empty() {
            return Self::Empty(EmptyCartView {
                message: "Your cart is empty!",
                shop_now: controls.bind("Shop now", "shop-now", Action::ShopNow),
            });
        }

        let lines = cart
            .lines()
            .map(|line| CartLineView::build(line, controls))
            .collect();

        Self::Filled(FilledCartView {
            lines,
            total: cart.total_cost(),
            continue_shopping: controls.bind(
                "Continue Shopping",
                "continue-shopping",
                Action::ContinueShopping,
            ),
            checkout: controls.bind("Checkout", "checkout", Action::Checkout),
        })
    }
}

impl CartLineView {
    fn build(line: &CartLine, controls: &mut ControlSet) -> Self {
        let id = line.id();
        let quantity = line.quantity.get();

        Self {
            name: line.plant.name.clone(),
            img: line.plant.img.clone(),
            unit_price: line.plant.cost,
            quantity,
            line_total: line.line_total(),
            decrement: controls.bind_with(
                "-",
                "dec",
                Action::SetQuantity {
                    id,
                    quantity: quantity - 1,
                },
                quantity <= 1,
            ),
            increment: controls.bind(
                "+",
                "inc",
                Action::SetQuantity {
                    id,
                    quantity: quantity.saturating_add(1),
                },
            ),
            delete: controls.bind("Delete", "delete-button", Action::Remove(id)),
        }
    }
}

#[derive(Template)]
#[template(path = "html/cart_empty.html")]
pub(crate) struct CartEmptyHtml<'a> {
    pub nav: &'a NavBar,
    pub view: &'a EmptyCartView,
}

#[derive(Template)]
#[template(path = "html/cart.html")]
pub(crate) struct CartHtml<'a> {
    pub nav: &'a NavBar,
    pub view: &'a FilledCartView,
}

#[derive(Template)]
#[template(path = "text/cart_empty.txt")]
pub(crate) struct CartEmptyText<'a> {
    pub nav: &'a NavBar,
    pub view: &'a EmptyCartView,
}

#[derive(Template)]
#[template(path = "text/cart.txt")]
pub(crate) struct CartText<'a> {
    pub nav: &'a NavBar,
    pub view: &'a FilledCartView,
}
