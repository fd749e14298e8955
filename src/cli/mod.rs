//! CLI command handlers.
//!
//! This module provides headless access to the metric factories for
//! inspecting what the rendering pipeline would receive on this device.

pub mod properties;
pub mod show;

// Re-export types used by main.rs and tests
pub use properties::PropertiesArgs;
pub use show::ShowArgs;
