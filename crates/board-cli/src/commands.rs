//! Subcommand implementations.

use crate::report::{CheckReport, MovesReport, PlaySummary};
use board_core::{Color, Move, MoveParseError, Square};
use rules_engine::{try_move, BasicRules, Board, Game, RuleSet};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors from malformed command arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error(transparent)]
    InvalidMove(#[from] MoveParseError),
}

/// Checks one move in coordinate notation.
pub fn check(board: &Board, mover: Color, notation: &str) -> Result<CheckReport, CommandError> {
    let m = Move::from_coordinate(notation)?;
    let report = match try_move(board, mover, m.from(), m.to()) {
        Ok(next) => CheckReport {
            mv: m.to_string(),
            mover: mover.to_string(),
            legal: true,
            reason: None,
            board: Some(next.to_placement()),
            diagram: Some(next.to_string()),
        },
        Err(reason) => CheckReport {
            mv: m.to_string(),
            mover: mover.to_string(),
            legal: false,
            reason: Some(reason.to_string()),
            board: None,
            diagram: None,
        },
    };
    tracing::debug!(mv = %m, legal = report.legal, "checked move");
    Ok(report)
}

/// Lists the legal destinations of the piece on `square`.
pub fn moves(board: &Board, mover: Color, square: &str) -> Result<MovesReport, CommandError> {
    let from = Square::from_algebraic(square.trim())
        .ok_or_else(|| CommandError::InvalidSquare(square.to_string()))?;
    let destinations = BasicRules
        .legal_moves_from(board, mover, from)
        .into_iter()
        .map(|m| m.to().to_string())
        .collect();
    Ok(MovesReport {
        from: from.to_string(),
        mover: mover.to_string(),
        destinations,
    })
}

/// Plays moves read line by line from `input`, alternating sides.
///
/// Blank lines and lines starting with `#` are skipped. A rejected move is
/// reported and the same side moves again.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
) -> io::Result<PlaySummary> {
    let mut summary = PlaySummary::default();

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let mover = game.side_to_move();
        match game.play_notation(text) {
            Ok(captured) => {
                summary.played += 1;
                match captured {
                    Some(piece) => {
                        summary.captures += 1;
                        writeln!(out, "{} {} takes {}", mover, text, piece)?;
                    }
                    None => writeln!(out, "{} {}", mover, text)?,
                }
                writeln!(out, "{}", game.board())?;
            }
            Err(err) => {
                summary.rejected += 1;
                tracing::warn!(%mover, mv = text, %err, "rejected move");
                writeln!(out, "{} {}: {}", mover, text, err)?;
            }
        }
    }

    Ok(summary)
}
