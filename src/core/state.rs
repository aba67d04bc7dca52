//! # Workbench State
//!
//! Core business state. No collaborator handles live here except the index
//! observer, which the index cache owns so it can notify synchronously.
//!
//! ```text
//! Workbench
//! ├── navigation: NavigationController  // current address (Unset / At)
//! ├── index: IndexCache                 // sorted module summaries
//! ├── toolbar: Toolbar                  // registered commands
//! ├── status_message: String            // status line text
//! ├── error: Option<String>             // last absorbed failure
//! └── bootstrap_token: Option<u64>      // startup fetch still pending
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::command::Toolbar;
use crate::core::index::IndexCache;
use crate::core::navigation::NavigationController;

pub struct Workbench {
    pub navigation: NavigationController,
    pub index: IndexCache,
    pub toolbar: Toolbar,
    pub status_message: String,
    pub error: Option<String>,
    /// Token of the startup fetch while it is in flight. The first
    /// navigation waits for it.
    pub bootstrap_token: Option<u64>,
}

impl Workbench {
    pub fn new(toolbar: Toolbar) -> Self {
        Self {
            navigation: NavigationController::new(),
            index: IndexCache::new(),
            toolbar,
            status_message: String::from("Loading index..."),
            error: None,
            bootstrap_token: None,
        }
    }
}
