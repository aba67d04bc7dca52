use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the module index as returned by the server.
///
/// Only `name` is interpreted. Everything else the server sends is kept
/// verbatim in `metadata` and handed to the browser untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModuleSummary {
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl ModuleSummary {
    /// A summary with no metadata.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: Map::new(),
        }
    }
}

/// A module document the editor wants persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub module: String,
    pub content: Value,
}
