//! Router implementation for switching the visible page
//!
//! This module provides the page router: it hides every known page, reveals
//! the requested one, moves the active marker and scrolls back to the top.

use super::route::{PageKey, RouteTable};
use super::surface::PageSurface;
use crate::config::{RouterSettings, ScrollBehavior};
use crate::dom::{ElementId, ScrollRequest};
use crate::error::{RouterError, RouterResult};

/// Current state of the router
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterState {
    /// Key of the visible page. `None` before the first navigation and after
    /// a navigation to an unknown key.
    pub current_page: Option<PageKey>,
    /// Number of successful navigations
    pub navigations: u64,
}

/// Outcome of a successful navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub page: PageKey,
    /// Element that was revealed
    pub page_element: ElementId,
    /// Trigger that received the active marker, if the page has one
    pub trigger: Option<ElementId>,
}

/// Page router over a fixed route table
#[derive(Debug, Clone)]
pub struct PageRouter {
    table: RouteTable,
    active_class: String,
    scroll_behavior: ScrollBehavior,
    state: RouterState,
}

impl PageRouter {
    /// Create a router over `table`
    pub fn new(table: RouteTable, settings: &RouterSettings) -> Self {
        Self {
            table,
            active_class: settings.selectors.active_class.clone(),
            scroll_behavior: settings.scroll_behavior,
            state: RouterState::default(),
        }
    }

    /// Show the page keyed `key` on `surface`.
    ///
    /// Every page element is hidden first, including duplicates and keyless
    /// pages. When `key` matches no page the call
    /// stops there, leaving nothing visible and the active marker untouched.
    pub fn navigate<S>(&mut self, surface: &mut S, key: &str) -> RouterResult<Navigation>
    where
        S: PageSurface + ?Sized,
    {
        for page in self.table.page_elements() {
            surface.set_hidden(*page, true);
        }

        let Some(page_element) = self.table.page(key) else {
            self.state.current_page = None;
            return Err(RouterError::PageNotFound(key.to_string()));
        };
        surface.set_hidden(page_element, false);

        for button in self.table.button_elements() {
            surface.set_class(*button, &self.active_class, false);
        }
        let trigger = self.table.button(key);
        if let Some(button) = trigger {
            surface.set_class(button, &self.active_class, true);
        }

        surface.scroll_to(ScrollRequest::top(self.scroll_behavior));

        let page = PageKey::from(key);
        self.state.current_page = Some(page.clone());
        self.state.navigations += 1;

        Ok(Navigation {
            page,
            page_element,
            trigger,
        })
    }

    /// Get the current router state
    pub fn state(&self) -> &RouterState {
        &self.state
    }

    /// Key of the visible page
    pub fn current_page(&self) -> Option<&PageKey> {
        self.state.current_page.as_ref()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Hidden(usize, bool),
        Class(usize, String, bool),
        Scroll(ScrollBehavior),
    }

    #[derive(Default)]
    struct RecordingSurface(Vec<Op>);

    impl PageSurface for RecordingSurface {
        fn set_hidden(&mut self, element: ElementId, hidden: bool) {
            self.0.push(Op::Hidden(element.0, hidden));
        }

        fn set_class(&mut self, element: ElementId, class: &str, present: bool) {
            self.0.push(Op::Class(element.0, class.to_string(), present));
        }

        fn scroll_to(&mut self, request: ScrollRequest) {
            assert_eq!((request.x, request.y), (0, 0));
            self.0.push(Op::Scroll(request.behavior));
        }
    }

    fn router() -> PageRouter {
        let mut table = RouteTable::new();
        table.insert_page("home", ElementId(10));
        table.insert_page("tasks", ElementId(11));
        table.insert_page("archive", ElementId(12));
        table.insert_button("home", ElementId(1));
        table.insert_button("tasks", ElementId(2));
        PageRouter::new(table, &RouterSettings::default())
    }

    #[test]
    fn test_navigate_applies_steps_in_order() {
        let mut router = router();
        let mut surface = RecordingSurface::default();

        let nav = router.navigate(&mut surface, "tasks").unwrap();

        assert_eq!(
            surface.0,
            vec![
                Op::Hidden(10, true),
                Op::Hidden(11, true),
                Op::Hidden(12, true),
                Op::Hidden(11, false),
                Op::Class(1, "active".to_string(), false),
                Op::Class(2, "active".to_string(), false),
                Op::Class(2, "active".to_string(), true),
                Op::Scroll(ScrollBehavior::Smooth),
            ]
        );
        assert_eq!(nav.page, PageKey::from("tasks"));
        assert_eq!(nav.page_element, ElementId(11));
        assert_eq!(nav.trigger, Some(ElementId(2)));
        assert_eq!(router.current_page(), Some(&PageKey::from("tasks")));
        assert_eq!(router.state().navigations, 1);
    }

    #[test]
    fn test_unknown_key_stops_after_hiding() {
        let mut router = router();
        let mut surface = RecordingSurface::default();
        router.navigate(&mut surface, "home").unwrap();
        surface.0.clear();

        let err = router.navigate(&mut surface, "reports").unwrap_err();

        assert_eq!(err, RouterError::PageNotFound("reports".to_string()));
        assert_eq!(
            surface.0,
            vec![
                Op::Hidden(10, true),
                Op::Hidden(11, true),
                Op::Hidden(12, true),
            ]
        );
        assert_eq!(router.current_page(), None);
        assert_eq!(router.state().navigations, 1);
    }

    #[test]
    fn test_page_without_trigger_still_scrolls() {
        let mut router = router();
        let mut surface = RecordingSurface::default();

        let nav = router.navigate(&mut surface, "archive").unwrap();

        assert_eq!(nav.trigger, None);
        assert!(!surface
            .0
            .iter()
            .any(|op| matches!(op, Op::Class(_, _, true))));
        assert_eq!(surface.0.last(), Some(&Op::Scroll(ScrollBehavior::Smooth)));
    }

    #[test]
    fn test_unreachable_elements_are_reset() {
        let mut table = RouteTable::new();
        table.insert_page("home", ElementId(10));
        table.insert_page("home", ElementId(11));
        table.insert_unkeyed_page(ElementId(12));
        table.insert_button("home", ElementId(1));
        table.insert_button("home", ElementId(2));
        table.insert_unkeyed_button(ElementId(3));
        let mut router = PageRouter::new(table, &RouterSettings::default());
        let mut surface = RecordingSurface::default();

        router.navigate(&mut surface, "home").unwrap();

        for page in [10, 11, 12] {
            assert!(surface.0.contains(&Op::Hidden(page, true)));
        }
        for button in [1, 2, 3] {
            assert!(surface.0.contains(&Op::Class(button, "active".to_string(), false)));
        }
        assert!(surface.0.contains(&Op::Hidden(10, false)));
        assert!(!surface.0.contains(&Op::Hidden(11, false)));
        assert!(surface.0.contains(&Op::Class(1, "active".to_string(), true)));
        assert!(!surface.0.contains(&Op::Class(2, "active".to_string(), true)));
    }

    #[test]
    fn test_configured_classes_and_scroll_behavior() {
        let mut settings = RouterSettings::default().with_scroll_behavior(ScrollBehavior::Auto);
        settings.selectors.active_class = "selected".to_string();
        let mut table = RouteTable::new();
        table.insert_page("home", ElementId(3));
        table.insert_button("home", ElementId(1));
        let mut router = PageRouter::new(table, &settings);
        let mut surface = RecordingSurface::default();

        router.navigate(&mut surface, "home").unwrap();

        assert!(surface
            .0
            .contains(&Op::Class(1, "selected".to_string(), true)));
        assert_eq!(surface.0.last(), Some(&Op::Scroll(ScrollBehavior::Auto)));
        assert_eq!(router.active_class(), "selected");
    }
}
