//! Summary rendering.
//!
//! Writes a computed batch of training summaries to any `io::Write` sink
//! in one of three formats. Text is the canonical one-line-per-workout
//! report; json and csv are machine-readable alternatives for piping.

use crate::{Error, Result, TrainingSummary};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Output format for a batch of summaries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Text
    }
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            other => Err(Error::Config(format!(
                "unknown report format '{}' (expected text, json or csv)",
                other
            ))),
        }
    }
}

/// Render summaries to the sink, preserving batch order
pub fn render<W: Write>(
    summaries: &[TrainingSummary],
    format: ReportFormat,
    mut out: W,
) -> Result<()> {
    match format {
        ReportFormat::Text => {
            for summary in summaries {
                writeln!(out, "{}", summary)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut out, summaries)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for summary in summaries {
                writer.serialize(summary)?;
            }
            writer.flush()?;
        }
    }

    tracing::debug!("Rendered {} summaries as {:?}", summaries.len(), format);
    Ok(())
}
