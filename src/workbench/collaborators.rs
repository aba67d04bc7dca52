//! Contracts of the widgets the coordinator drives.
//!
//! All of them are called from the coordinator's event loop only, one
//! call at a time.

use log::warn;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::action::Action;
use crate::store::{ModuleSummary, SaveRequest};

/// The module browser renders whatever the index cache hands it.
pub use crate::core::index::IndexObserver as ModuleBrowser;

pub trait Editor: Send {
    /// Shows `module` and selects `identifier` in it. Unknown modules are
    /// the editor's problem.
    fn select(&mut self, module: &str, identifier: Option<&str>);

    /// The document to persist, or None if there is nothing to save.
    fn save_request(&mut self) -> Option<SaveRequest>;
}

/// The location bar.
pub trait Location: Send {
    /// The current fragment, `#module:identifier` or empty.
    fn fragment(&self) -> String;

    /// Writes a fragment. Returns true if an address-change notification
    /// will be delivered for it, false if the fragment was already current
    /// and the environment stays silent.
    fn assign(&mut self, fragment: &str) -> bool;
}

pub trait Dialogs: Send {
    fn open_element(&mut self, modules: &[ModuleSummary]);
    fn search_replace(&mut self);
}

pub trait Layout: Send {
    fn layout(&mut self);
}

/// User-visible failure notices.
pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}

/// Everything the coordinator wires together at startup.
pub struct Collaborators {
    pub layout: Box<dyn Layout>,
    pub editor: Box<dyn Editor>,
    pub browser: Box<dyn ModuleBrowser>,
    pub location: Box<dyn Location>,
    pub dialogs: Box<dyn Dialogs>,
    pub notifier: Box<dyn Notifier>,
}

/// Creates the workbench event queue.
pub fn action_channel() -> (ActionSender, UnboundedReceiver<Action>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ActionSender(tx), rx)
}

/// Posting end of the event queue, handed to widgets and background tasks.
#[derive(Clone, Debug)]
pub struct ActionSender(UnboundedSender<Action>);

impl ActionSender {
    pub fn send(&self, action: Action) {
        if self.0.send(action).is_err() {
            warn!("Failed to post action: event loop gone");
        }
    }

    /// Editor follow-reference and open-element dialog.
    pub fn follow_reference(&self, module: &str, identifier: Option<&str>) {
        self.send(Action::navigate(module, identifier));
    }

    /// Browser open-module, optionally at an element.
    pub fn open_module(&self, module: &str, identifier: Option<&str>) {
        self.send(Action::navigate(module, identifier));
    }

    /// Location change notification.
    pub fn address_changed(&self, raw: &str) {
        self.send(Action::AddressChanged(raw.to_string()));
    }
}
