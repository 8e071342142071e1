//! Navigation controller.
//!
//! A three-state machine (Landing, Products, Cart) starting on Landing. Every
//! user activation arrives as an [`Action`]; the controller applies it to the
//! cart store, moves to the next page, and reports whether the page must be
//! re-rendered and whether a confirmation should be shown.
//!
//! Storage failures never stop the session: the in-memory cart stays
//! authoritative and the failure is logged.

use core::fmt;

use tracing::instrument;

use paradise_nursery_core::PlantId;

use crate::cart::{CartStore, KeyValueStore};
use crate::catalog::Catalog;
use crate::views::{self, Page, Screen};

/// Something the user activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nav link carrying a page identifier. Unrecognized identifiers are
    /// ignored.
    NavLink(String),
    /// "Browse Plants" on the landing page.
    Browse,
    AddToCart(PlantId),
    /// Quantity stepper, carrying the target quantity.
    SetQuantity { id: PlantId, quantity: u32 },
    Remove(PlantId),
    /// "Shop now" on the empty cart.
    ShopNow,
    ContinueShopping,
    Checkout,
}

/// A blocking confirmation to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added { name: String },
    CheckoutPending,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { name } => write!(f, "Added {name} to the cart!"),
            Self::CheckoutPending => {
                f.write_str("Thank you for your purchase! Checkout functionality coming soon.")
            }
        }
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dispatch {
    /// The current page must be rendered again.
    pub rerender: bool,
    pub notice: Option<Notice>,
}

impl Dispatch {
    const fn unchanged() -> Self {
        Self {
            rerender: false,
            notice: None,
        }
    }

    const fn rerender() -> Self {
        Self {
            rerender: true,
            notice: None,
        }
    }
}

/// Owns the catalog, the cart store, and the current page.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    cart: CartStore<S>,
    page: Page,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Load the cart from `storage` and start on the landing page.
    pub fn open(catalog: Catalog, storage: S) -> Self {
        let cart = CartStore::load(storage);
        tracing::info!(
            lines = cart.len(),
            items = cart.total_count(),
            "Storefront opened"
        );
        Self {
            catalog,
            cart,
            page: Page::Landing,
        }
    }

    /// Apply one user action.
    #[instrument(skip(self), fields(page = %self.page))]
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        match action {
            Action::NavLink(page_id) => match page_id.parse::<Page>() {
                Ok(page) => self.go(page),
                Err(e) => {
                    tracing::debug!(error = %e, "Ignoring nav link");
                    Dispatch::unchanged()
                }
            },
            Action::Browse | Action::ShopNow | Action::ContinueShopping => self.go(Page::Products),
            Action::AddToCart(id) => {
                let result = self
                    .cart
                    .add(&self.catalog, id)
                    .map(|line| line.map(|line| line.plant.name.clone()));
                let added = match result {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to save cart");
                        self.cart.get(id).map(|line| line.plant.name.clone())
                    }
                };
                Dispatch {
                    rerender: false,
                    notice: added.map(|name| Notice::Added { name }),
                }
            }
            Action::SetQuantity { id, quantity } => {
                if let Err(e) = self.cart.set_quantity(id, quantity) {
                    tracing::error!(error = %e, "Failed to save cart");
                }
                self.go(Page::Cart)
            }
            Action::Remove(id) => {
                if let Err(e) = self.cart.remove(id) {
                    tracing::error!(error = %e, "Failed to save cart");
                }
                self.go(Page::Cart)
            }
            Action::Checkout => Dispatch {
                rerender: false,
                notice: Some(Notice::CheckoutPending),
            },
        }
    }
}

impl<S> Storefront<S> {
    /// The current page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The cart store.
    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Cart count badge value.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.total_count()
    }

    /// Render the current page.
    #[must_use]
    pub fn screen(&self) -> Screen {
        views::render(self.page, &self.catalog, &self.cart)
    }

    fn go(&mut self, page: Page) -> Dispatch {
        tracing::debug!(from = %self.page, to = %page, "Navigating");
        self.page = page;
        Dispatch::rerender()
    }
}
