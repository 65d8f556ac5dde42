// src/error.rs
//! Recovered conditions.
//!
//! Nothing in the extraction or normalization path aborts: every problem is
//! downgraded to an [`Issue`], collected next to the data it concerns, and the
//! affected row is either skipped (tokenizer) or emitted with empty fields
//! (assembler).

use std::fmt;

use thiserror::Error;

use crate::config::consts::MIN_ROW_CELLS;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Issue {
    /// Data row with too few usable cells to hold a team pairing.
    #[error("season {year}, row {row}: {cells} usable cell(s), need at least {}", MIN_ROW_CELLS)]
    MalformedRow { year: u16, row: usize, cells: usize },

    /// Data row where both team cells are empty.
    #[error("season {year}, row {row}: no team names")]
    BlankTeams { year: u16, row: usize },

    /// Score cell that is not `int-int`; goals for that leg stay empty.
    #[error("season {year}, row {row}: leg {leg} score {text:?} is not <int>-<int>")]
    UnparseableScore { year: u16, row: usize, leg: u8, text: String },

    /// Name that failed its dimension lookup at assembly time.
    #[error("fact {index}: unresolved {kind} {name:?}")]
    UnresolvedReference { index: usize, kind: RefKind, name: String },
}

/// Which fact column an unresolved name belonged to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefKind {
    Competition,
    Stage,
    HomeClub,
    AwayClub,
    TwoLegWinner,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RefKind::Competition => "competition",
            RefKind::Stage => "stage",
            RefKind::HomeClub => "home club",
            RefKind::AwayClub => "away club",
            RefKind::TwoLegWinner => "two-leg winner",
        })
    }
}
