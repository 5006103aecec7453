//! Record publishing.
//!
//! - [`LineWriter`] - Buffered sink trait, flushed once per run
//! - [`InfluxWriter`] - InfluxDB v2 write API
//! - [`StdoutWriter`] - Prints records for dry runs

mod influx;
mod publisher_errors;
mod publisher_traits;
mod stdout;

pub use influx::InfluxWriter;
pub use publisher_errors::PublishError;
pub use publisher_traits::LineWriter;
pub use stdout::StdoutWriter;
