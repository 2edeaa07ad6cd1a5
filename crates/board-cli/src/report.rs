//! Command results in text and JSON form.

use serde::Serialize;
use std::fmt;

/// Outcome of checking a single move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// The move in coordinate notation.
    #[serde(rename = "move")]
    pub mv: String,
    /// Side that attempted the move.
    pub mover: String,
    /// Whether the move is legal.
    pub legal: bool,
    /// Why the move was rejected, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Placement notation of the resulting board, if the move is legal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    /// Text diagram of the resulting board. Not part of the JSON output.
    #[serde(skip)]
    pub diagram: Option<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, &self.diagram) {
            (Some(reason), _) => write!(f, "illegal: {}", reason),
            (None, Some(diagram)) => write!(f, "legal\n{}", diagram),
            (None, None) => write!(f, "legal"),
        }
    }
}

/// Legal destinations of one piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesReport {
    /// Source square name.
    pub from: String,
    /// Side the piece was checked for.
    pub mover: String,
    /// Destination square names, in board order.
    pub destinations: Vec<String>,
}

impl fmt::Display for MovesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.destinations.is_empty() {
            write!(f, "{}: no legal moves", self.from)
        } else {
            write!(f, "{}: {}", self.from, self.destinations.join(" "))
        }
    }
}

/// Totals for a `play` session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaySummary {
    pub played: usize,
    pub rejected: usize,
    pub captures: usize,
}

impl fmt::Display for PlaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} played, {} rejected, {} captures",
            self.played, self.rejected, self.captures
        )
    }
}

/// Serializes a report as a single JSON line.
pub fn to_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string(report)
}
