//! Navigation bar state and click handling.

use crate::site::Anchor;

/// Scroll offset (px) beyond which the bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Route of the single page.
pub const ROOT_ROUTE: &str = "/";

/// Where a navigation item points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    /// A section on the single page.
    Section(Anchor),
    /// A separate route handled by the router.
    Route(String),
}

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: String,
    pub target: NavTarget,
}

impl NavItem {
    pub fn section(name: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            target: NavTarget::Section(anchor),
        }
    }

    pub fn route(name: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: NavTarget::Route(route.into()),
        }
    }
}

/// Items shown in the navigation bar.
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::section("Home", Anchor::Home),
        NavItem::section("About", Anchor::About),
        NavItem::section("Services", Anchor::Services),
        NavItem::section("Skills", Anchor::Skills),
        NavItem::section("Portfolio", Anchor::Portfolio),
        NavItem::section("Contact", Anchor::Contact),
    ]
}

/// Result of activating a navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Smooth-scroll to the anchor on the current page.
    ScrollTo(Anchor),
    /// Full page load of the given URL.
    Redirect(String),
    /// Client-side route change.
    FollowRoute(String),
}

/// Local state of the navigation bar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    scrolled: bool,
    mobile_menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Records the current vertical scroll offset.
    pub fn on_scroll(&mut self, offset_px: f64) {
        self.scrolled = offset_px > SCROLLED_THRESHOLD_PX;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Handles a click on `item` while the browser is at `current_route`.
    pub fn activate(&mut self, item: &NavItem, current_route: &str) -> NavAction {
        match &item.target {
            NavTarget::Route(route) => {
                self.mobile_menu_open = false;
                NavAction::FollowRoute(route.clone())
            }
            NavTarget::Section(anchor) => scroll_or_redirect(self, *anchor, current_route),
        }
    }
}

fn scroll_or_redirect(nav: &mut Navigation, anchor: Anchor, current_route: &str) -> NavAction {
    if current_route == ROOT_ROUTE {
        nav.mobile_menu_open = false;
        NavAction::ScrollTo(anchor)
    } else {
        NavAction::Redirect(format!("{}{}", ROOT_ROUTE, anchor))
    }
}

/// Action for in-page "scroll to" buttons such as the hero call to action.
pub fn scroll_to(anchor: Anchor) -> NavAction {
    NavAction::ScrollTo(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_uses_threshold() {
        let mut nav = Navigation::new();
        nav.on_scroll(50.0);
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0);
        assert!(nav.is_scrolled());
        nav.on_scroll(0.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn route_items_close_menu() {
        let mut nav = Navigation::new();
        nav.toggle_mobile_menu();
        let action = nav.activate(&NavItem::route("Blog", "/blog"), "/");
        assert_eq!(action, NavAction::FollowRoute("/blog".to_owned()));
        assert!(!nav.is_mobile_menu_open());
    }
}
