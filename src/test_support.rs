//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::command::Toolbar;
use crate::core::index::IndexObserver;
use crate::core::state::Workbench;
use crate::store::{ModuleStore, ModuleSummary, SaveRequest, StoreError};

/// A store that returns an empty index and accepts every save.
pub struct NoopStore;

#[async_trait]
impl ModuleStore for NoopStore {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_index(&self) -> Result<Vec<ModuleSummary>, StoreError> {
        Ok(Vec::new())
    }

    async fn save_module(&self, _request: SaveRequest) -> Result<(), StoreError> {
        Ok(())
    }

    async fn stop_server(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Browser that records the module names of every index it is handed.
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    loads: Arc<Mutex<Vec<Vec<String>>>>,
}

impl RecordingBrowser {
    pub fn loads(&self) -> Vec<Vec<String>> {
        self.loads.lock().unwrap().clone()
    }
}

impl IndexObserver for RecordingBrowser {
    fn load_index(&mut self, entries: &[ModuleSummary]) {
        self.loads
            .lock()
            .unwrap()
            .push(entries.iter().map(|e| e.name.clone()).collect());
    }
}

/// Creates a Workbench with the standard toolbar.
pub fn test_workbench() -> Workbench {
    Workbench::new(Toolbar::standard())
}
