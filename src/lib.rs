//! HMD Metrics Library
//!
//! This library resolves a head-mounted display's physical and optical
//! characteristics from persisted string properties, falling back to
//! compiled-in defaults for anything absent or malformed, and assembles
//! them into the immutable metric objects consumed by the rendering
//! pipeline.

// Module declarations
pub mod cli;
pub mod constants;
pub mod models;
pub mod properties;
pub mod services;
