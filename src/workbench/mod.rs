//! # Workbench Coordinator
//!
//! Wires the core to its collaborators and runs the event loop.
//!
//! Every trigger (widget callbacks, location changes, background task
//! completions) arrives as an [`Action`] on one queue. The loop takes them
//! one at a time, in arrival order, runs `update()`, and carries out the
//! returned [`Effect`] before looking at the next action. Network calls run
//! as spawned tasks and post their result back onto the same queue.
//!
//! ## Startup
//!
//! ```text
//! layout → toolbar → index cache (empty) → editor → browser (subscribed) → dialogs
//!    │
//!    └─ Startup: layout(), fetch index ──▶ IndexLoaded ──▶ replay location
//!                                                          as AddressChanged
//! ```
//!
//! The initial navigation waits for the first fetch so it goes through the
//! same `AddressChanged` path as every later one. If that fetch fails, no
//! initial navigation happens and the workbench keeps handling events.

pub mod collaborators;
pub mod console;
pub mod location;

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::action::{Action, Effect, update};
use crate::core::command::Toolbar;
use crate::core::state::Workbench;
use crate::store::ModuleStore;
use crate::workbench::collaborators::{
    ActionSender, Collaborators, Dialogs, Editor, Layout, Location, Notifier,
};

pub use collaborators::action_channel;
pub use location::MemoryLocation;

pub struct Coordinator {
    state: Workbench,
    store: Arc<dyn ModuleStore>,
    layout: Box<dyn Layout>,
    editor: Box<dyn Editor>,
    location: Box<dyn Location>,
    dialogs: Box<dyn Dialogs>,
    notifier: Box<dyn Notifier>,
    tx: ActionSender,
    rx: UnboundedReceiver<Action>,
}

impl Coordinator {
    /// Builds the workbench. `tx`/`rx` must be the two ends of one
    /// [`action_channel`]; the location posts its notifications on it.
    pub fn new(
        toolbar: Toolbar,
        store: Arc<dyn ModuleStore>,
        parts: Collaborators,
        tx: ActionSender,
        rx: UnboundedReceiver<Action>,
    ) -> Self {
        let Collaborators {
            layout,
            editor,
            browser,
            location,
            dialogs,
            notifier,
        } = parts;

        let mut state = Workbench::new(toolbar);
        state.index.subscribe(browser);
        info!(
            "Workbench wired: store={}, commands={}",
            store.name(),
            state.toolbar.commands().len()
        );

        Self {
            state,
            store,
            layout,
            editor,
            location,
            dialogs,
            notifier,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &Workbench {
        &self.state
    }

    pub fn sender(&self) -> ActionSender {
        self.tx.clone()
    }

    /// Runs `update()` for one action and applies the effect.
    /// Returns false once the workbench should stop.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!("Event loop received: {:?}", action);
        let effect = update(&mut self.state, action);
        self.apply(effect)
    }

    /// Waits for the next queued action and dispatches it.
    pub async fn process_next(&mut self) -> bool {
        match self.rx.recv().await {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// Starts the workbench and processes actions until `Quit`.
    pub async fn run(mut self) {
        if !self.dispatch(Action::Startup) {
            return;
        }
        while self.process_next().await {}
        info!("Workbench event loop stopped");
    }

    fn apply(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return false,
            Effect::Bootstrap { token } => {
                self.layout.layout();
                self.spawn_fetch(token);
            }
            Effect::FetchIndex { token } => self.spawn_fetch(token),
            Effect::WriteLocation(href) => {
                if !self.location.assign(&href) {
                    // The location already shows href, so no notification
                    // is coming. Deliver it ourselves.
                    debug!("Location already at {}, posting change directly", href);
                    self.tx.address_changed(&href);
                }
            }
            Effect::Select(address) => {
                self.editor.select(address.module(), address.identifier());
            }
            Effect::ReplayLocation => {
                let raw = self.location.fragment();
                info!("Initial navigation from location {:?}", raw);
                return self.dispatch(Action::AddressChanged(raw));
            }
            Effect::SaveModule => match self.editor.save_request() {
                Some(request) => self.spawn_save(request),
                None => {
                    info!("Nothing to save");
                    self.state.status_message = String::from("Nothing to save");
                }
            },
            Effect::StopServer => self.spawn_stop(),
            Effect::OpenElementDialog => self.dialogs.open_element(self.state.index.current()),
            Effect::SearchReplaceDialog => self.dialogs.search_replace(),
            Effect::Layout => self.layout.layout(),
            Effect::Notify(message) => self.notifier.notify(&message),
        }
        true
    }

    fn spawn_fetch(&self, token: u64) {
        info!("Spawning index fetch (token {})", token);
        let store = self.store.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.fetch_index().await.map_err(|e| e.to_string());
            tx.send(Action::IndexLoaded { token, result });
        });
    }

    fn spawn_save(&self, request: crate::store::SaveRequest) {
        info!("Spawning save of '{}'", request.module);
        let store = self.store.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.save_module(request).await.map_err(|e| e.to_string());
            tx.send(Action::SaveFinished(result));
        });
    }

    fn spawn_stop(&self) {
        warn!("Spawning server stop request");
        let store = self.store.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = store.stop_server().await.map_err(|e| e.to_string());
            tx.send(Action::StopFinished(result));
        });
    }
}
