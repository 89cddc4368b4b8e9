use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Map key used when plates were observed without any date being detected.
pub const NO_DATE: &str = "NO_DATE";

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Accumulates unique plate numbers under the date that was current when
/// they were seen, across one image or a whole video's sampled frames.
///
/// Owned by the orchestrator; the detection and filtering engines only ever
/// return per-invocation results. Callers running frames concurrently must
/// serialize access themselves (single writer or a lock).
#[derive(Clone, Debug, Default, Serialize)]
pub struct ResultMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record plates under `date`, or under [`NO_DATE`] when none was
    /// detected. Plates already present under that key are skipped; first
    /// seen order is preserved within a key.
    pub fn record<I>(&mut self, date: Option<&str>, plates: I)
    where
        I: IntoIterator<Item = String>,
    {
        let key = date.unwrap_or(NO_DATE);
        let entry = self.entries.entry(key.to_string()).or_default();
        for plate in plates {
            if !entry.contains(&plate) {
                entry.push(plate);
            }
        }
    }

    /// Plates recorded under a date key, in first-seen order.
    pub fn plates_for(&self, date: &str) -> Option<&[String]> {
        self.entries.get(date).map(|v| v.as_slice())
    }

    /// Iterate `(date, plate)` pairs, dates in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(date, plates)| plates.iter().map(move |p| (date.as_str(), p.as_str())))
    }

    /// Total number of `(date, plate)` pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|v| v.is_empty())
    }

    /// Rewrite the report file from scratch: one `"<date> - <plate>"` line
    /// per accumulated pair.
    pub fn write_report<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let mut out = BufWriter::new(File::create(path)?);
        for (date, plate) in self.iter() {
            writeln!(out, "{} - {}", date, plate)?;
        }
        out.flush()?;
        Ok(())
    }
}
