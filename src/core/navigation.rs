//! # Navigation Controller
//!
//! Reconciles navigation requests with the location and the editor selection.
//!
//! ```text
//!   request_navigation(m, i) ──┬── same as current ──▶ Reselect(addr)   (editor.select, location untouched)
//!                              ├── differs ─────────▶ Navigate(href)   (location write)
//!                              └── empty module ────▶ Ignore
//!
//!   location write ──▶ address-change notification ──▶ on_address_changed(raw)
//!                                                       ├── set current = addr
//!                                                       └── editor.select(addr)
//! ```
//!
//! Only [`NavigationController::on_address_changed`] assigns the current
//! address. A `Reselect` never touches it, a `Navigate` only schedules the
//! change. Existence of the target module is not checked here.

use log::{debug, info};

use crate::core::address::{self, Address};

/// What to do with a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Address unchanged: select directly, leave the location alone.
    Reselect(Address),
    /// Address changed: write this fragment to the location.
    Navigate(String),
    /// Not a valid target.
    Ignore,
}

/// Holds the most recently applied address. `None` means `Unset`.
#[derive(Debug, Default)]
pub struct NavigationController {
    current: Option<Address>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Address> {
        self.current.as_ref()
    }

    /// Entry point for follow-reference, open-module and open-element.
    pub fn request_navigation(
        &self,
        module: &str,
        identifier: Option<&str>,
    ) -> NavigationDecision {
        let requested = Address::new(module, identifier);
        if !requested.is_set() {
            debug!("Ignoring navigation request without a module");
            return NavigationDecision::Ignore;
        }

        if self.current.as_ref() == Some(&requested) {
            info!("Re-selecting {} (address unchanged)", requested);
            NavigationDecision::Reselect(requested)
        } else {
            let href = address::encode(requested.module(), requested.identifier());
            info!("Navigating to {}", href);
            NavigationDecision::Navigate(href)
        }
    }

    /// Entry point for every address-change notification, whatever its origin.
    /// Returns the address the editor should select, if any.
    pub fn on_address_changed(&mut self, raw: &str) -> Option<Address> {
        let decoded = address::decode(raw);
        if !decoded.is_set() {
            debug!("Address change to {:?} selects nothing", raw);
            return None;
        }
        self.current = Some(decoded.clone());
        Some(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(module: &str, ident: Option<&str>) -> NavigationController {
        let mut nav = NavigationController::new();
        nav.on_address_changed(&address::encode(module, ident));
        nav
    }

    #[test]
    fn test_starts_unset() {
        assert!(NavigationController::new().current().is_none());
    }

    #[test]
    fn test_unset_always_navigates() {
        let nav = NavigationController::new();
        assert_eq!(
            nav.request_navigation("alpha", None),
            NavigationDecision::Navigate("#alpha".to_string())
        );
    }

    #[test]
    fn test_same_address_reselects() {
        let nav = at("beta", Some("x"));
        assert_eq!(
            nav.request_navigation("beta", Some("x")),
            NavigationDecision::Reselect(Address::new("beta", Some("x")))
        );
    }

    #[test]
    fn test_empty_identifier_matches_absent() {
        let nav = at("beta", None);
        assert!(matches!(
            nav.request_navigation("beta", Some("")),
            NavigationDecision::Reselect(_)
        ));
    }

    #[test]
    fn test_different_identifier_navigates() {
        let nav = at("beta", Some("x"));
        assert_eq!(
            nav.request_navigation("beta", Some("y")),
            NavigationDecision::Navigate("#beta:y".to_string())
        );
    }

    #[test]
    fn test_request_does_not_change_current() {
        let nav = at("alpha", None);
        let _ = nav.request_navigation("beta", None);
        assert_eq!(nav.current(), Some(&Address::new("alpha", None)));
    }

    #[test]
    fn test_empty_module_is_ignored() {
        let nav = NavigationController::new();
        assert_eq!(nav.request_navigation("", Some("x")), NavigationDecision::Ignore);
    }

    #[test]
    fn test_address_change_sets_current() {
        let mut nav = NavigationController::new();
        let selected = nav.on_address_changed("#beta:x");
        assert_eq!(selected, Some(Address::new("beta", Some("x"))));
        assert_eq!(nav.current(), Some(&Address::new("beta", Some("x"))));
    }

    #[test]
    fn test_malformed_change_keeps_unset() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.on_address_changed(""), None);
        assert_eq!(nav.on_address_changed("#"), None);
        assert!(nav.current().is_none());
    }

    #[test]
    fn test_malformed_change_keeps_current() {
        let mut nav = at("alpha", None);
        assert_eq!(nav.on_address_changed("#:orphan"), None);
        assert_eq!(nav.current(), Some(&Address::new("alpha", None)));
    }
}
