//! Page rendering.
//!
//! [`render`] is a pure mapping from the catalog, the cart, and the current
//! page to a [`Screen`]: a UI description holding view data plus the controls
//! the user can activate. Each screen issues a fresh control set, so a host
//! binds controls once per render and drops the previous ones.
//!
//! Screens are presented with askama templates, either as HTML markup or as
//! terminal text.

use core::fmt;
use core::str::FromStr;
use std::fs;
use std::path::Path;

use askama::Template;
use thiserror::Error;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::navigation::Action;

pub mod cart;
pub mod landing;
pub mod products;

pub use cart::{CartLineView, CartPageView, EmptyCartView, FilledCartView};
pub use landing::LandingView;
pub use products::{PlantCardView, ProductSectionView, ProductsView};

/// Error returned for an unrecognized page identifier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

/// The three full-page views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Landing,
    Products,
    Cart,
}

impl Page {
    /// All pages in nav bar order.
    pub const ALL: [Self; 3] = [Self::Landing, Self::Products, Self::Cart];

    /// Page identifier carried by nav links.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Products => "products",
            Self::Cart => "cart",
        }
    }

    /// Nav link text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Products => "Plants",
            Self::Cart => "Cart",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// One nav bar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub page_id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Nav bar with the active link and the cart count badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub links: Vec<NavLink>,
    pub cart_count: u32,
}

impl NavBar {
    fn new(active: Page, cart_count: u32) -> Self {
        Self {
            links: Page::ALL
                .into_iter()
                .map(|page| NavLink {
                    page_id: page.id(),
                    label: page.label(),
                    active: page == active,
                })
                .collect(),
            cart_count,
        }
    }

    /// The active page identifier.
    #[must_use]
    pub fn active(&self) -> Option<&'static str> {
        self.links.iter().find(|link| link.active).map(|link| link.page_id)
    }
}

/// A rendered, activatable control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    /// Identifier within the screen that issued it, starting at 1.
    pub id: usize,
    pub label: String,
    /// Styling hook (`dec`, `inc`, `delete-button`, ...).
    pub class: &'static str,
    pub disabled: bool,
}

/// Controls issued during one render pass.
#[derive(Debug, Default)]
pub(crate) struct ControlSet {
    bound: Vec<(Action, bool)>,
}

impl ControlSet {
    pub(crate) fn bind(&mut self, label: impl Into<String>, class: &'static str, action: Action) -> ControlView {
        self.bind_with(label, class, action, false)
    }

    pub(crate) fn bind_with(
        &mut self,
        label: impl Into<String>,
        class: &'static str,
        action: Action,
        disabled: bool,
    ) -> ControlView {
        self.bound.push((action, disabled));
        ControlView {
            id: self.bound.len(),
            label: label.into(),
            class,
            disabled,
        }
    }
}

/// Page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Landing(LandingView),
    Products(ProductsView),
    Cart(CartPageView),
}

/// A complete UI description for one render pass.
#[derive(Debug)]
pub struct Screen {
    pub page: Page,
    pub nav: NavBar,
    pub body: Body,
    controls: Vec<(Action, bool)>,
}

impl Screen {
    /// The action bound to control `id`.
    ///
    /// Returns `None` for ids this screen never issued and for disabled
    /// controls.
    #[must_use]
    pub fn activate(&self, id: usize) -> Option<Action> {
        let (action, disabled) = self.controls.get(id.checked_sub(1)?)?;
        (!disabled).then(|| action.clone())
    }

    /// Number of controls issued, including disabled ones.
    #[must_use]
    pub const fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Render as an HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_html(&self) -> askama::Result<String> {
        match &self.body {
            Body::Landing(view) => landing::LandingHtml { nav: &self.nav, view }.render(),
            Body::Products(view) => products::ProductsHtml { nav: &self.nav, view }.render(),
            Body::Cart(CartPageView::Empty(view)) => {
                cart::CartEmptyHtml { nav: &self.nav, view }.render()
            }
            Body::Cart(CartPageView::Filled(view)) => cart::CartHtml { nav: &self.nav, view }.render(),
        }
    }

    /// Write the HTML rendering to `path`, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or the file write fails.
    pub fn write_html_snapshot(&self, path: &Path) -> crate::error::Result<()> {
        fs::write(path, self.render_html()?)?;
        tracing::debug!(path = %path.display(), page = %self.page, "Wrote HTML snapshot");
        Ok(())
    }

    /// Render as terminal text.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_text(&self) -> askama::Result<String> {
        match &self.body {
            Body::Landing(view) => landing::LandingText { nav: &self.nav, view }.render(),
            Body::Products(view) => products::ProductsText { nav: &self.nav, view }.render(),
            Body::Cart(CartPageView::Empty(view)) => {
                cart::CartEmptyText { nav: &self.nav, view }.render()
            }
            Body::Cart(CartPageView::Filled(view)) => cart::CartText { nav: &self.nav, view }.render(),
        }
    }
}

/// Build the screen for `page`.
pub fn render<S>(page: Page, catalog: &Catalog, cart: &CartStore<S>) -> Screen {
    let mut controls = ControlSet::default();
    let body = match page {
        Page::Landing => Body::Landing(LandingView::build(&mut controls)),
        Page::Products => Body::Products(ProductsView::build(catalog, &mut controls)),
        Page::Cart => Body::Cart(CartPageView::build(cart, &mut controls)),
    };

    Screen {
        page,
        nav: NavBar::new(page, cart.total_count()),
        body,
        controls: controls.bound,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::MemoryStorage;

    #[test]
    fn test_page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(page.id().parse::<Page>().unwrap(), page);
        }
        assert_eq!(
            "checkout".parse::<Page>(),
            Err(UnknownPage("checkout".to_string()))
        );
    }

    #[test]
    fn test_exactly_one_nav_link_active() {
        let catalog = Catalog::paradise();
        let cart = CartStore::load(MemoryStorage::new());
        for page in Page::ALL {
            let screen = render(page, &catalog, &cart);
            let active: Vec<_> = screen.nav.links.iter().filter(|l| l.active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(screen.nav.active(), Some(page.id()));
        }
    }

    #[test]
    fn test_activate_rejects_unknown_ids() {
        let catalog = Catalog::paradise();
        let cart = CartStore::load(MemoryStorage::new());
        let screen = render(Page::Landing, &catalog, &cart);

        assert_eq!(screen.control_count(), 1);
        assert_eq!(screen.activate(1), Some(Action::Browse));
        assert_eq!(screen.activate(0), None);
        assert_eq!(screen.activate(2), None);
    }

    #[test]
    fn test_html_snapshot_overwrites_previous_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        let catalog = Catalog::paradise();
        let cart = CartStore::load(MemoryStorage::new());

        render(Page::Landing, &catalog, &cart).write_html_snapshot(&path).unwrap();
        render(Page::Cart, &catalog, &cart).write_html_snapshot(&path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Your cart is empty!"));
        assert!(!html.contains("Welcome to Paradise Nursery!"));
    }

    #[test]
    fn test_html_marks_active_link() {
        let catalog = Catalog::paradise();
        let cart = CartStore::load(MemoryStorage::new());
        let html = render(Page::Products, &catalog, &cart).render_html().unwrap();

        assert!(html.contains(r#"data-page="products" class="active""#));
        assert!(!html.contains(r#"data-page="cart" class="active""#));
        assert!(html.contains(r#"<span id="cart-count">0</span>"#));
    }
}
