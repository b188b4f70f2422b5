//! Energy level report parsing.
//!
//! A report is a whitespace-delimited dump of `[time]` snapshot markers, each
//! followed by `label value` token pairs. Only the tokens after the first
//! occurrence of the final-snapshot marker are analyzed; that tail is the
//! [`EnergySegment`].
//!
//! Readings are sampled with a fixed stride-2 walk: for `i` in `2, 4, 6, …`
//! the token at `i + 1` is the value and the token at `i` its label. The first
//! pair of the segment is never read, and a trailing unpaired token is skipped.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{ReportError, Result};

/// Snapshot marker of the final simulation tick (12 simulated hours).
pub const DEFAULT_MARKER: &str = "[43200]";

/// Report file analyzed when no path is given.
pub const DEFAULT_REPORT_FILE: &str = "E_ProphetRouter60nodes_EnergyLevelReport.txt";

/// First stride index of the reading walk.
const FIRST_STRIDE_INDEX: usize = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One sampled reading from the energy segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReading {
    /// Segment position of the value token.
    pub position: usize,
    /// Token preceding the value, usually the node name.
    pub label: String,
    pub value: f64,
}

/// Tokens following the snapshot marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnergySegment<'a> {
    tokens: Vec<&'a str>,
    marker_found: bool,
}

impl<'a> EnergySegment<'a> {
    /// Build a segment directly from tokens already cut after a marker.
    pub fn from_tokens(tokens: Vec<&'a str>) -> Self {
        Self {
            tokens,
            marker_found: true,
        }
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether the marker occurred in the source text at all.
    pub fn marker_found(&self) -> bool {
        self.marker_found
    }

    /// Segment positions holding values, in walk order.
    pub fn value_positions(&self) -> impl Iterator<Item = usize> {
        let len = self.tokens.len();
        (FIRST_STRIDE_INDEX..len)
            .step_by(2)
            .map(|i| i + 1)
            .take_while(move |&pos| pos < len)
    }

    /// Parsed values in walk order. An unparseable token yields an `Err` item
    /// and iteration continues; callers decide whether to stop.
    pub fn values(&self) -> impl Iterator<Item = Result<f64>> {
        self.value_positions()
            .map(move |pos| parse_value(pos, self.tokens[pos]))
    }

    /// Every sampled reading with its label.
    pub fn readings(&self) -> Result<Vec<EnergyReading>> {
        self.value_positions()
            .map(|pos| {
                Ok(EnergyReading {
                    position: pos,
                    label: self.tokens[pos - 1].to_string(),
                    value: parse_value(pos, self.tokens[pos])?,
                })
            })
            .collect()
    }
}

impl<'a> From<Vec<&'a str>> for EnergySegment<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        Self::from_tokens(tokens)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Split `contents` on whitespace and keep every token after the first
/// `marker`. The marker itself is dropped; later markers are ordinary tokens.
pub fn extract_energy_segment<'a>(contents: &'a str, marker: &str) -> EnergySegment<'a> {
    let mut tokens = contents.split_whitespace();
    let marker_found = tokens.by_ref().any(|token| token == marker);
    let tokens: Vec<&str> = tokens.collect();

    debug!(
        "marker {marker} {}, {} token(s) in energy segment",
        if marker_found { "found" } else { "not found" },
        tokens.len()
    );

    EnergySegment {
        tokens,
        marker_found,
    }
}

/// Read a whole report into memory.
pub fn read_report(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write every reading as a pretty JSON array.
pub fn write_readings_json(readings: &[EnergyReading], path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(readings)?;
    write_file(path.as_ref(), &json)
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_value(position: usize, token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ReportError::InvalidReading {
            position,
            token: token.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_after_marker() {
        let text = "[0] n0 4800.0 n1 4800.0\n[43200] n0 100.0 n1 650.5\n";
        let segment = extract_energy_segment(text, DEFAULT_MARKER);
        assert!(segment.marker_found());
        assert_eq!(segment.tokens(), &["n0", "100.0", "n1", "650.5"]);
    }

    #[test]
    fn test_extract_marker_absent() {
        let segment = extract_energy_segment("[0] n0 4800.0 n1 4800.0", DEFAULT_MARKER);
        assert!(!segment.marker_found());
        assert!(segment.is_empty());
    }

    #[test]
    fn test_extract_first_marker_only() {
        let text = "a [43200] b c [43200] d";
        let segment = extract_energy_segment(text, DEFAULT_MARKER);
        assert_eq!(segment.tokens(), &["b", "c", "[43200]", "d"]);
    }

    #[test]
    fn test_extract_marker_is_last_token() {
        let segment = extract_energy_segment("n0 1.0 [43200]\n", DEFAULT_MARKER);
        assert!(segment.marker_found());
        assert!(segment.is_empty());
    }

    #[test]
    fn test_extract_custom_marker() {
        let text = "[21600] n0 1.0 n1 2.0 n2 3.0 [43200] n0 0.5";
        let segment = extract_energy_segment(text, "[21600]");
        assert_eq!(segment.len(), 9);
        assert_eq!(segment.tokens()[6], "[43200]");
    }

    #[test]
    fn test_value_positions_skip_first_pair() {
        let segment = EnergySegment::from(vec!["x", "0", "A", "100.0", "B", "50.0"]);
        let positions: Vec<usize> = segment.value_positions().collect();
        assert_eq!(positions, vec![3, 5]);
    }

    #[test]
    fn test_value_positions_odd_length() {
        // Index 4 is a stride index but 5 is past the end.
        let segment = EnergySegment::from(vec!["x", "0", "A", "100.0", "B"]);
        let positions: Vec<usize> = segment.value_positions().collect();
        assert_eq!(positions, vec![3]);
    }

    #[test]
    fn test_value_positions_short_segments() {
        for len in 0..=2 {
            let segment = EnergySegment::from(vec!["t"; len]);
            assert_eq!(segment.value_positions().count(), 0, "len {len}");
        }
        let segment = EnergySegment::from(vec!["t", "t", "t"]);
        assert_eq!(segment.value_positions().count(), 0);
    }

    #[test]
    fn test_readings_labels() {
        let segment = EnergySegment::from(vec!["x", "0", "A", "100.0", "B", "50.0"]);
        let readings = segment.readings().unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].label, "A");
        assert_eq!(readings[0].value, 100.0);
        assert_eq!(readings[1].position, 5);
    }

    #[test]
    fn test_unparseable_first_pair_is_ignored() {
        let segment = EnergySegment::from(vec!["x", "not_a_number", "A", "1.5"]);
        let values: Vec<f64> = segment.values().collect::<Result<_>>().unwrap();
        assert_eq!(values, vec![1.5]);
    }

    #[test]
    fn test_unparseable_value_fails() {
        let segment = EnergySegment::from(vec!["x", "0", "A", "abc"]);
        match segment.readings() {
            Err(ReportError::InvalidReading { position, token }) => {
                assert_eq!(position, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("expected InvalidReading, got {other:?}"),
        }
    }

    #[test]
    fn test_values_continue_after_bad_token() {
        let segment = EnergySegment::from(vec!["x", "0", "A", "bad", "B", "2.0"]);
        let values: Vec<Result<f64>> = segment.values().collect();
        assert_eq!(values.len(), 2);
        assert!(values[0].is_err());
        assert_eq!(values[1].as_ref().unwrap(), &2.0);
    }

    #[test]
    fn test_write_readings_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("readings.json");
        let segment = EnergySegment::from(vec!["x", "0", "A", "100.0", "B", "50.0"]);
        write_readings_json(&segment.readings().unwrap(), &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["label"], "A");
        assert_eq!(value[1]["position"], 5);
        assert_eq!(value[1]["value"], 50.0);
    }

    #[test]
    fn test_read_report_missing_file() {
        let err = read_report("definitely/not/here/report.txt").unwrap_err();
        match err {
            ReportError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
