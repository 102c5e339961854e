use crate::core::OutputSink;
use crate::utils::error::Result;
use std::io::Write;

/// Writes each block to stdout as soon as it is emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, block: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if block.ends_with('\n') {
            out.write_all(block.as_bytes())?;
        } else {
            writeln!(out, "{}", block)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Keeps emitted blocks in memory, in emission order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    blocks: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, block: &str) -> Result<()> {
        self.blocks.push(block.to_string());
        Ok(())
    }
}
