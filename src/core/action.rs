//! # Actions
//!
//! Everything that can happen in the workbench becomes an `Action`.
//! User follows a reference? That's `Action::RequestNavigation`.
//! Location changed? That's `Action::AddressChanged(raw)`.
//! Index fetch came back? That's `Action::IndexLoaded { token, result }`.
//!
//! `update()` takes the current state and an action, mutates the state,
//! and returns the single `Effect` the coordinator must carry out against
//! the collaborators. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::address::Address;
use crate::core::command::Command;
use crate::core::navigation::NavigationDecision;
use crate::core::state::Workbench;
use crate::store::ModuleSummary;

#[derive(Debug, Clone)]
pub enum Action {
    /// Render the empty layout and issue the startup fetch.
    Startup,
    /// Follow-reference, open-module or open-element.
    RequestNavigation {
        module: String,
        identifier: Option<String>,
    },
    /// The location fragment changed (own write, back/forward, manual edit).
    AddressChanged(String),
    Command(Command),
    Hotkey(String),
    /// User-triggered index reload.
    ReloadIndex,
    IndexLoaded {
        token: u64,
        result: Result<Vec<ModuleSummary>, String>,
    },
    SaveFinished(Result<(), String>),
    StopFinished(Result<(), String>),
    Resize,
    Quit,
}

impl Action {
    pub fn navigate(module: impl Into<String>, identifier: Option<&str>) -> Self {
        Action::RequestNavigation {
            module: module.into(),
            identifier: identifier.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Lay out the empty workbench, then fetch the index with this token.
    Bootstrap { token: u64 },
    FetchIndex { token: u64 },
    WriteLocation(String),
    Select(Address),
    /// Feed the current location through `AddressChanged`.
    ReplayLocation,
    SaveModule,
    StopServer,
    OpenElementDialog,
    SearchReplaceDialog,
    Layout,
    /// User-visible failure notice.
    Notify(String),
}

pub fn update(state: &mut Workbench, action: Action) -> Effect {
    match action {
        Action::Startup => {
            let token = state.index.issue_token();
            state.bootstrap_token = Some(token);
            state.status_message = String::from("Loading index...");
            Effect::Bootstrap { token }
        }

        Action::RequestNavigation { module, identifier } => {
            match state
                .navigation
                .request_navigation(&module, identifier.as_deref())
            {
                NavigationDecision::Reselect(address) => Effect::Select(address),
                NavigationDecision::Navigate(href) => Effect::WriteLocation(href),
                NavigationDecision::Ignore => Effect::None,
            }
        }

        Action::AddressChanged(raw) => match state.navigation.on_address_changed(&raw) {
            Some(address) => {
                state.status_message = address.to_string();
                Effect::Select(address)
            }
            None => Effect::None,
        },

        Action::Command(command) => {
            info!("Command: {}", command.label());
            match command {
                Command::Save => {
                    state.status_message = String::from("Saving...");
                    Effect::SaveModule
                }
                Command::OpenElement => Effect::OpenElementDialog,
                Command::SearchReplace => Effect::SearchReplaceDialog,
                Command::StopServer => Effect::StopServer,
            }
        }

        Action::Hotkey(key) => match state.toolbar.resolve_hotkey(&key) {
            Some(command) => update(state, Action::Command(command)),
            None => {
                debug!("Unbound hotkey: {}", key);
                Effect::None
            }
        },

        Action::ReloadIndex => Effect::FetchIndex {
            token: state.index.issue_token(),
        },

        Action::IndexLoaded { token, result } => {
            let is_bootstrap = state.bootstrap_token == Some(token);
            if is_bootstrap {
                state.bootstrap_token = None;
            }
            match result {
                Ok(entries) => {
                    let count = entries.len();
                    if state.index.apply_reload(token, entries) {
                        state.error = None;
                        state.status_message = match state.index.refreshed_at() {
                            Some(at) => format!(
                                "Index loaded ({count} modules) at {}",
                                at.format("%H:%M:%S")
                            ),
                            None => format!("Index loaded ({count} modules)"),
                        };
                    }
                    if is_bootstrap {
                        Effect::ReplayLocation
                    } else {
                        Effect::None
                    }
                }
                Err(e) => {
                    warn!("Index load failed (token {}): {}", token, e);
                    if is_bootstrap {
                        warn!("Starting without an index, initial navigation skipped");
                    }
                    state.status_message = format!("Index load failed: {e}");
                    state.error = Some(e);
                    Effect::None
                }
            }
        }

        Action::SaveFinished(Ok(())) => {
            state.status_message = String::from("Saved");
            Effect::FetchIndex {
                token: state.index.issue_token(),
            }
        }

        Action::SaveFinished(Err(e)) => {
            warn!("Save failed: {}", e);
            state.status_message = String::from("Save failed");
            state.error = Some(e.clone());
            Effect::Notify(format!("Save failed: {e}"))
        }

        Action::StopFinished(result) => {
            match result {
                Ok(()) => state.status_message = String::from("Server stopped"),
                Err(e) => {
                    warn!("Stop request failed: {}", e);
                    state.error = Some(e);
                }
            }
            Effect::None
        }

        Action::Resize => Effect::Layout,

        Action::Quit => Effect::Quit,
    }
}
