pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ModuleStore, StoreError};
pub use providers::HttpStore;
pub use types::{ModuleSummary, SaveRequest};
