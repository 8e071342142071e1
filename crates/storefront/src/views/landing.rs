//! Landing page.

use askama::Template;

use super::{ControlSet, ControlView, NavBar};
use crate::filters;
use crate::navigation::Action;

/// Welcome content with a single way into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingView {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub browse: ControlView,
}

impl LandingView {
    pub(crate) fn build(controls: &mut ControlSet) -> Self {
        Self {
            heading: "Welcome to Paradise Nursery!",
            tagline: "Your one-stop shop for house plants",
            browse: controls.bind("Browse Plants", "browse", Action::Browse),
        }
    }
}

#[derive(Template)]
#[template(path = "html/landing.html")]
pub(crate) struct LandingHtml<'a> {
    pub nav: &'a NavBar,
    pub view: &'a LandingView,
}

#[derive(Template)]
#[template(path = "text/landing.txt")]
pub(crate) struct LandingText<'a> {
    pub nav: &'a NavBar,
    pub view: &'a LandingView,
}
