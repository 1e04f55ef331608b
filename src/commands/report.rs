//! JSON report written by `--out FILE`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::Outcome;
use crate::cli::Command;
use crate::debug_log;
use crate::io::atomic::atomic_write;

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Subcommand name and its arguments, flattened.
    #[serde(flatten)]
    pub invocation: &'a Command,
    pub result: &'a Outcome,
    pub generated_at: String,
}

impl<'a> Report<'a> {
    pub fn new(invocation: &'a Command, result: &'a Outcome) -> Self {
        Report {
            invocation,
            result,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing report")
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let body = self.to_json()?;
        debug_log!("report: {} bytes -> {}", body.len(), path.display());
        atomic_write(path, body.as_bytes())
            .with_context(|| format!("writing report {}", path.display()))
    }
}
