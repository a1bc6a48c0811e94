//! Navigation error type.

use thiserror::Error;

use crate::Cell;

/// Errors produced by `hm-nav`.
///
/// None of these are fatal: the [`Navigator`][crate::Navigator] collapses
/// them into "no path" and callers fall back to straight-line movement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    #[error("search gave up after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },

    #[error("start cell {0} is blocked and no walkable cell is in range")]
    StartBlocked(Cell),

    #[error("goal cell {0} is blocked and no walkable cell is in range")]
    GoalBlocked(Cell),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

pub type NavResult<T> = Result<T, NavError>;
