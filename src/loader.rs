//! Text-record loader for reach lists.
//!
//! The input format is one record per line:
//!
//! ```text
//! 3
//! p1  0 0  4 10
//! p2  3 0 10 10
//! p3  2 5  9  9
//! Source
//! src 0 0 10 10
//! ```
//!
//! An optional leading header line declares the sink count (cross-checked
//! when present). Sink records run until the literal `Source` marker; the
//! record after the marker is the source rectangle. Blank lines are
//! skipped.

use std::collections::BTreeSet;
use std::path::Path;

use qtty::Unit;
use scan_fmt::scan_fmt;
use thiserror::Error;

use crate::geometry::{GeometryError, Reach};

/// Errors raised while loading a reach list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: '{text}'")]
    MalformedRecord { line: usize, text: String },

    #[error("input contains no sink records")]
    NoSinks,

    #[error("missing 'Source' marker line")]
    MissingSource,

    #[error("missing source rectangle record after 'Source' marker")]
    MissingSourceRect,

    #[error("declared sink count {declared} does not match {parsed} parsed records")]
    CountMismatch { declared: usize, parsed: usize },

    #[error("unexpected content at line {line} after the source record")]
    TrailingContent { line: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A parsed reach list: the source region and the sinks to cover.
#[derive(Debug, Clone)]
pub struct ReachSet<U: Unit> {
    pub source: Reach<U>,
    pub sinks: Vec<Reach<U>>,
}

impl<U: Unit> ReachSet<U> {
    /// The sink-name universe the planner must cover.
    pub fn sink_names(&self) -> BTreeSet<String> {
        self.sinks.iter().map(|s| s.name().to_owned()).collect()
    }
}

/// Parses a reach list from text.
pub fn parse_reach_list<U: Unit>(text: &str) -> Result<ReachSet<U>, LoadError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let mut declared: Option<usize> = None;
    let mut sinks: Vec<Reach<U>> = Vec::new();
    let mut saw_marker = false;
    let mut source: Option<Reach<U>> = None;

    let mut first = true;
    for (line, text) in &mut lines {
        if first {
            first = false;
            // A lone integer on the first line is the declared sink count; a
            // record line always carries five tokens.
            if text.split_whitespace().count() == 1 {
                if let Ok(count) = scan_fmt!(text, "{d}", usize) {
                    declared = Some(count);
                    continue;
                }
            }
        }

        if !saw_marker {
            if text == "Source" {
                saw_marker = true;
                continue;
            }
            sinks.push(parse_record(line, text)?);
        } else if source.is_none() {
            source = Some(parse_record(line, text)?);
        } else {
            return Err(LoadError::TrailingContent { line });
        }
    }

    if sinks.is_empty() {
        return Err(LoadError::NoSinks);
    }
    if let Some(declared) = declared {
        if declared != sinks.len() {
            return Err(LoadError::CountMismatch {
                declared,
                parsed: sinks.len(),
            });
        }
    }
    if !saw_marker {
        return Err(LoadError::MissingSource);
    }
    let source = source.ok_or(LoadError::MissingSourceRect)?;

    Ok(ReachSet { source, sinks })
}

/// Loads and parses a reach list from a file.
pub fn load_reach_file<U: Unit>(path: impl AsRef<Path>) -> Result<ReachSet<U>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_reach_list(&text)
}

fn parse_record<U: Unit>(line: usize, text: &str) -> Result<Reach<U>, LoadError> {
    let malformed = || LoadError::MalformedRecord {
        line,
        text: text.to_owned(),
    };
    // A record is exactly five tokens; extra tokens must not be dropped.
    if text.split_whitespace().count() != 5 {
        return Err(malformed());
    }
    let (name, llx, lly, urx, ury) = scan_fmt!(text, "{} {} {} {} {}", String, f64, f64, f64, f64)
        .map_err(|_| malformed())?;
    Ok(Reach::from_f64(name, llx, lly, urx, ury)?)
}
