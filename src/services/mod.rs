//! Factory services that assemble metrics from persisted properties.

pub mod metrics;
