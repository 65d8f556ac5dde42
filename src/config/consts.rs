// src/config/consts.rs

// Page structure
pub const RESULTS_TABLE_CLASS: &str = "t1";
pub const COMPETITION_MARKER: &str = "cupheader";
pub const STAGE_MARKER: &str = "roundheader";

// Row shape: [team1, team1_cc, team2, team2_cc, leg1, leg2]; older pages
// print only the first 4 or 5 cells, read with the same column indices
pub const MIN_ROW_CELLS: usize = 4;

// Charset sniffing window for raw page bytes
pub const CHARSET_SNIFF_BYTES: usize = 4000;

// Canonical competitions with fixed ids
pub const CHAMPIONS_LEAGUE: &str = "CHAMPIONS LEAGUE";
pub const EUROPA_LEAGUE: &str = "EUROPA LEAGUE";
pub const CONFERENCE_LEAGUE: &str = "CONFERENCE LEAGUE";
pub const RESERVED_COMPETITIONS: [(&str, u32); 3] = [
    (CHAMPIONS_LEAGUE, 1),
    (EUROPA_LEAGUE, 2),
    (CONFERENCE_LEAGUE, 3),
];
pub const FIRST_DYNAMIC_COMPETITION_ID: u32 = 4;

// Synthetic stage row
pub const WINNER_STAGE_ID: u32 = 0;
pub const WINNER_STAGE_NAME: &str = "Winner";

// Fact column value for level legs
pub const DRAW: &str = "draw";

// Concurrency
pub const WORKERS: usize = 4;
