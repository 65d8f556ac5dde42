// src/model.rs
//! Row shapes flowing through the pipeline.
//!
//! ```text
//! page::walk ─▶ TaggedRow ─▶ legs::reconstruct ─▶ LegFact (candidate)
//!                                                   │  all seasons
//!                                 dimensions::Dimensions::build
//!                                                   │
//!                        facts::assemble ─▶ FactRow + the three dimensions
//! ```

use serde::{Serialize, Serializer};

use crate::config::consts::DRAW;

/// One data row of a results table, as printed:
/// `[team1, team1_cc, team2, team2_cc, leg1, leg2]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    pub team1: String,
    pub team1_cc: String,
    pub team2: String,
    pub team2_cc: String,
    /// Non-empty score text of the first leg, if the cell exists.
    pub leg1: Option<String>,
    /// Non-empty score text of the second leg; `None` for single matches.
    pub leg2: Option<String>,
    /// `<b>` marker on the team1 cell (aggregate winner).
    pub team1_bold: bool,
    pub team2_bold: bool,
}

/// A data row with the header context it was found under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedRow {
    pub year: u16,
    /// Position of the `<tr>` within its page.
    pub row: usize,
    pub competition: String,
    pub stage: String,
    pub raw: RawRow,
}

/// Leg of a tie, 1 = team1 at home.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum LegNumber {
    First,
    Second,
}

impl From<LegNumber> for u8 {
    fn from(leg: LegNumber) -> u8 {
        match leg {
            LegNumber::First => 1,
            LegNumber::Second => 2,
        }
    }
}

/// Candidate fact: one match leg from the home side's perspective, still
/// carrying names instead of dimension ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegFact {
    pub season_page: u16,
    pub competition_name: String,
    pub stage_name: String,
    pub leg_number: LegNumber,
    pub home_team: String,
    pub home_cc: String,
    pub away_team: String,
    pub away_cc: String,
    pub score_text: String,
    pub goals_home: Option<u32>,
    pub goals_away: Option<u32>,
    /// Name of the aggregate winner; leg 1 of a two-legged tie only.
    pub two_leg_winner_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompetitionDimension {
    pub competition_id: u32,
    pub competition_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageDimension {
    pub stage_id: u32,
    pub stage_name: String,
    pub importance: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClubDimension {
    pub club_id: u32,
    pub club_name: String,
}

/// Per-leg result: a club id, a draw, or unknown when a goal count is missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Club(u32),
    Draw,
    Unknown,
}

impl Winner {
    /// Result of one leg. Unknown if either count is missing, or if the
    /// winning side's club id did not resolve.
    pub fn decide(
        goals_home: Option<u32>,
        goals_away: Option<u32>,
        home_club_id: Option<u32>,
        away_club_id: Option<u32>,
    ) -> Self {
        let (Some(h), Some(a)) = (goals_home, goals_away) else {
            return Winner::Unknown;
        };
        let side = match h.cmp(&a) {
            std::cmp::Ordering::Equal => return Winner::Draw,
            std::cmp::Ordering::Greater => home_club_id,
            std::cmp::Ordering::Less => away_club_id,
        };
        side.map_or(Winner::Unknown, Winner::Club)
    }

    /// Column text: club id, `draw`, or empty.
    pub fn as_field(&self) -> String {
        match self {
            Winner::Club(id) => id.to_string(),
            Winner::Draw => s!(DRAW),
            Winner::Unknown => s!(),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_field())
    }
}

/// Final fact row: one per leg, names resolved to dimension ids.
/// Unresolved references stay `None` rather than dropping the row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FactRow {
    pub season_page: u16,
    pub leg_number: LegNumber,
    pub competition_id: Option<u32>,
    pub stage_id: Option<u32>,
    pub home_club_id: Option<u32>,
    pub away_club_id: Option<u32>,
    pub home_cc: String,
    pub away_cc: String,
    pub score_text: String,
    pub goals_home: Option<u32>,
    pub goals_away: Option<u32>,
    pub winner: Winner,
    pub two_leg_winner_club_id: Option<u32>,
}
