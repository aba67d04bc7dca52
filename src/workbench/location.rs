//! In-process location bar with a history stack.
//!
//! Behaves like a browser's fragment: changing it (by the workbench, by a
//! manual edit, or by back/forward) posts an `AddressChanged` action, and
//! writing the fragment that is already current posts nothing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::workbench::collaborators::{ActionSender, Location};

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
    writes: usize,
}

impl History {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Pushes `fragment` unless it is already current. Drops forward history.
    fn push(&mut self, fragment: &str) -> bool {
        if self.current() == fragment {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
        true
    }
}

/// Cloning yields another handle to the same location.
#[derive(Clone)]
pub struct MemoryLocation {
    history: Arc<Mutex<History>>,
    events: ActionSender,
}

impl MemoryLocation {
    pub fn new(initial: &str, events: ActionSender) -> Self {
        Self {
            history: Arc::new(Mutex::new(History {
                entries: vec![initial.to_string()],
                cursor: 0,
                writes: 0,
            })),
            events,
        }
    }

    fn lock(&self) -> MutexGuard<'_, History> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A manual edit of the location bar.
    pub fn edit(&self, raw: &str) -> bool {
        let changed = self.lock().push(raw);
        if changed {
            self.events.address_changed(raw);
        }
        changed
    }

    pub fn back(&self) -> bool {
        let fragment = {
            let mut history = self.lock();
            if history.cursor == 0 {
                return false;
            }
            history.cursor -= 1;
            history.current().to_string()
        };
        debug!("Location back to {:?}", fragment);
        self.events.address_changed(&fragment);
        true
    }

    pub fn forward(&self) -> bool {
        let fragment = {
            let mut history = self.lock();
            if history.cursor + 1 >= history.entries.len() {
                return false;
            }
            history.cursor += 1;
            history.current().to_string()
        };
        debug!("Location forward to {:?}", fragment);
        self.events.address_changed(&fragment);
        true
    }

    /// Number of writes the workbench made through [`Location::assign`].
    pub fn writes(&self) -> usize {
        self.lock().writes
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.lock().current().to_string()
    }

    fn assign(&mut self, fragment: &str) -> bool {
        let changed = {
            let mut history = self.lock();
            history.writes += 1;
            history.push(fragment)
        };
        if changed {
            self.events.address_changed(fragment);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::workbench::collaborators::action_channel;

    fn drain(rx: &mut tokio::sync::mpsc::UnboundedReceiver<Action>) -> Vec<String> {
        let mut seen = Vec::new();
        while let Ok(action) = rx.try_recv() {
            if let Action::AddressChanged(raw) = action {
                seen.push(raw);
            }
        }
        seen
    }

    #[test]
    fn test_assign_notifies_on_change_only() {
        let (tx, mut rx) = action_channel();
        let mut location = MemoryLocation::new("", tx);

        assert!(location.assign("#alpha"));
        assert!(!location.assign("#alpha"));
        assert_eq!(location.fragment(), "#alpha");
        assert_eq!(location.writes(), 2);
        assert_eq!(drain(&mut rx), vec!["#alpha"]);
    }

    #[test]
    fn test_back_and_forward() {
        let (tx, mut rx) = action_channel();
        let mut location = MemoryLocation::new("#a", tx);
        location.assign("#b");
        location.assign("#c");
        drain(&mut rx);

        assert!(location.back());
        assert!(location.back());
        assert!(!location.back());
        assert_eq!(location.fragment(), "#a");
        assert!(location.forward());
        assert_eq!(location.fragment(), "#b");
        assert_eq!(drain(&mut rx), vec!["#b", "#a", "#b"]);
    }

    #[test]
    fn test_new_entry_drops_forward_history() {
        let (tx, _rx) = action_channel();
        let mut location = MemoryLocation::new("#a", tx);
        location.assign("#b");
        location.back();
        location.assign("#c");
        assert!(!location.forward());
        assert_eq!(location.fragment(), "#c");
    }

    #[test]
    fn test_manual_edit_is_not_a_workbench_write() {
        let (tx, mut rx) = action_channel();
        let location = MemoryLocation::new("", tx);
        assert!(location.edit("#beta:x"));
        assert_eq!(location.writes(), 0);
        assert_eq!(drain(&mut rx), vec!["#beta:x"]);
    }

    #[test]
    fn test_clones_share_state() {
        let (tx, _rx) = action_channel();
        let mut location = MemoryLocation::new("", tx);
        let observer = location.clone();
        location.assign("#alpha");
        assert_eq!(observer.fragment(), "#alpha");
        assert_eq!(observer.writes(), 1);
    }
}
