//! Workbench library exports for testing

pub mod core;
pub mod store;
pub mod workbench;

#[cfg(test)]
pub mod test_support;
