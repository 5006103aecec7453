//! crypto2influx Core - configuration, record formatting and publishing.
//!
//! This crate turns the coins returned by a quotes provider, together with
//! the investment lots in the configuration, into InfluxDB line-protocol
//! records and hands them to a [`publisher::LineWriter`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod line_protocol;
pub mod pipeline;
pub mod publisher;
pub mod records;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

pub use config::{Config, ConfigOverrides};
pub use pipeline::{run, RunSummary};
pub use records::{build_records, RecordOptions, RecordSet};
