//! # Core Workbench Logic
//!
//! Navigation, index caching and command routing for the module workbench.
//! It knows nothing about any concrete editor, browser or location.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Workbench (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() → Effect    │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │ Coordinator│      │   Store    │      │  Console   │
//!     │ (effects)  │      │  (HTTP)    │      │  driver    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`address`]: `#module:identifier` fragments
//! - [`index`]: the sorted module index and its observer
//! - [`navigation`]: reconciling navigation requests with the location
//! - [`command`]: toolbar commands and hotkeys
//! - [`state`]: the `Workbench` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings resolution

pub mod action;
pub mod address;
pub mod command;
pub mod config;
pub mod index;
pub mod navigation;
pub mod state;
