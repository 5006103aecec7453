use std::io::Write;

use async_trait::async_trait;

use super::publisher_errors::PublishError;
use super::publisher_traits::LineWriter;

/// Dry-run sink: prints the records instead of sending them.
#[derive(Debug, Default)]
pub struct StdoutWriter {
    buffer: Vec<String>,
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LineWriter for StdoutWriter {
    fn write_record(&mut self, line: String) {
        self.buffer.push(line);
    }

    fn pending(&self) -> usize {
        self.buffer.len()
    }

    async fn flush(&mut self) -> Result<usize, PublishError> {
        let lines = std::mem::take(&mut self.buffer);
        print_lines(&lines)?;
        Ok(lines.len())
    }
}

fn print_lines(lines: &[String]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
