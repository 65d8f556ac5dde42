// src/config/stages.rs

/// One row of the stage dimension seed: (stage_id, name, importance).
/// Lower importance = later, more prestigious round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageSeed {
    pub stage_id: u32,
    pub name: String,
    pub importance: u32,
}

impl StageSeed {
    pub fn new(stage_id: u32, name: &str, importance: u32) -> Self {
        Self { stage_id, name: s!(name), importance }
    }
}

/// Fixed stage table. Several historical formats share an importance rank
/// (e.g. Round 4, Round of 16, 2nd Group Stage).
pub const STAGE_TABLE: [(u32, &str, u32); 20] = [
    (1, "Final", 1),
    (2, "Semi Finals", 2),
    (3, "Quarter Finals", 3),
    (4, "2nd Group Stage", 4),
    (5, "Round 4", 4),
    (6, "Round of 16", 4),
    (7, "Knockout round play-offs", 5),
    (8, "Round 3", 6),
    (9, "1st Group Stage", 7),
    (10, "Group Stage", 7),
    (11, "League Stage", 7),
    (12, "Round 2", 8),
    (13, "Round 1", 9),
    (14, "4th Qualifying or Play-off Round", 10),
    (15, "Qualifying Play-off Round", 10),
    (16, "3rd Qualifying Round", 11),
    (17, "2nd Qualifying Round", 12),
    (18, "Qualifying Round", 12),
    (19, "1st Qualifying Round", 13),
    (20, "Preliminary Round", 14),
];

pub fn default_stage_table() -> Vec<StageSeed> {
    STAGE_TABLE
        .iter()
        .map(|&(id, name, importance)| StageSeed::new(id, name, importance))
        .collect()
}
