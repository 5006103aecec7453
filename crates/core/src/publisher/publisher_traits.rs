use async_trait::async_trait;

use super::publisher_errors::PublishError;

/// Buffered sink for line-protocol records.
///
/// Records are only transmitted on [`flush`](LineWriter::flush), which
/// empties the buffer whether or not the transmission succeeds.
#[async_trait]
pub trait LineWriter: Send {
    /// Append one record to the buffer.
    fn write_record(&mut self, line: String);

    /// Number of buffered records.
    fn pending(&self) -> usize;

    /// Transmit the buffer and wait for the outcome.
    ///
    /// Returns the number of records sent. Flushing an empty buffer is a
    /// successful no-op.
    async fn flush(&mut self) -> Result<usize, PublishError>;
}
