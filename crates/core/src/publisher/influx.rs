//! InfluxDB v2 writer.
//!
//! Buffers records and sends them in one `POST /api/v2/write` request with
//! nanosecond precision.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::publisher_errors::PublishError;
use super::publisher_traits::LineWriter;
use crate::config::InfluxConfig;

const WRITE_ENDPOINT: &str = "api/v2/write";

/// Longest slice of an error body kept in error messages
const MAX_BODY_IN_ERROR: usize = 500;

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct InfluxWriter {
    client: Client,
    write_url: String,
    token: String,
    org: String,
    bucket: String,
    buffer: Vec<String>,
}

impl std::fmt::Debug for InfluxWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfluxWriter")
            .field("write_url", &self.write_url)
            .field("org", &self.org)
            .field("bucket", &self.bucket)
            .field("pending", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

impl InfluxWriter {
    pub fn new(config: &InfluxConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            write_url: format!("{}/{}", config.url.trim_end_matches('/'), WRITE_ENDPOINT),
            token: config.token.clone(),
            org: config.org.clone(),
            bucket: config.bucket.clone(),
            buffer: Vec::new(),
        }
    }

    pub fn write_url(&self) -> &str {
        &self.write_url
    }
}

#[async_trait]
impl LineWriter for InfluxWriter {
    fn write_record(&mut self, line: String) {
        self.buffer.push(line);
    }

    fn pending(&self) -> usize {
        self.buffer.len()
    }

    async fn flush(&mut self) -> Result<usize, PublishError> {
        if self.buffer.is_empty() {
            return Ok(0);
        }

        let lines = std::mem::take(&mut self.buffer);
        let count = lines.len();
        debug!("Writing {} records to {}", count, self.write_url);

        let response = self
            .client
            .post(&self.write_url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Content-Type", "text/plain; charset=utf-8")
            .query(&[
                ("org", self.org.as_str()),
                ("bucket", self.bucket.as_str()),
                ("precision", "ns"),
            ])
            .body(lines.join("\n"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(MAX_BODY_IN_ERROR).collect();
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(count)
    }
}

impl Drop for InfluxWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            warn!(
                "Dropping {} records that were never flushed to {}",
                self.buffer.len(),
                self.write_url
            );
        }
    }
}
