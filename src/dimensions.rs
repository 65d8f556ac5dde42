// src/dimensions.rs
//! Dimension tables with deterministic surrogate ids.
//!
//! Built once from the complete candidate set of a run. Every id depends only
//! on the set of distinct names (never on the order rows were seen in), so two
//! runs over the same candidates produce identical tables.
//!
//! - **Competitions**: names canonicalized first; reserved names take their
//!   fixed ids, all others get the next free id from 4 upwards in name order.
//! - **Stages**: the configured seed table plus a synthetic `0 = Winner`;
//!   names are matched exactly after case folding and whitespace collapse.
//!   Unmatched names are appended in name order with importance 0.
//! - **Clubs**: all distinct non-empty home/away names, sorted, numbered 1..N.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ExtractOptions;
use crate::config::consts::{
    CHAMPIONS_LEAGUE, CONFERENCE_LEAGUE, EUROPA_LEAGUE, FIRST_DYNAMIC_COMPETITION_ID,
    WINNER_STAGE_ID, WINNER_STAGE_NAME,
};
use crate::core::sanitize::name_key;
use crate::model::{ClubDimension, CompetitionDimension, LegFact, StageDimension};

/// Fold the many historical competition titles onto one canonical name.
/// Idempotent; names matching no rule are returned trimmed.
pub fn canonical_competition(name: &str) -> String {
    let name = name.trim();
    let upper = name.to_uppercase();
    if upper.contains("UEFA CUP") || upper.contains(EUROPA_LEAGUE) || upper.starts_with("EUROPA") {
        s!(EUROPA_LEAGUE)
    } else if upper.contains("CHAMPION") {
        s!(CHAMPIONS_LEAGUE)
    } else if upper.contains("CONFERENCE") {
        s!(CONFERENCE_LEAGUE)
    } else {
        s!(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub competitions: Vec<CompetitionDimension>,
    pub stages: Vec<StageDimension>,
    pub clubs: Vec<ClubDimension>,
    competition_ids: BTreeMap<String, u32>,
    stage_ids: BTreeMap<String, u32>,
    club_ids: BTreeMap<String, u32>,
}

impl Dimensions {
    pub fn build(candidates: &[LegFact], opts: &ExtractOptions) -> Self {
        let mut dims = Dimensions::default();
        dims.build_competitions(candidates, &opts.reserved_competitions);
        dims.build_stages(candidates, opts);
        dims.build_clubs(candidates);
        logf!(
            "dimensions: {} competitions, {} stages, {} clubs from {} legs",
            dims.competitions.len(),
            dims.stages.len(),
            dims.clubs.len(),
            candidates.len()
        );
        dims
    }

    fn build_competitions(&mut self, candidates: &[LegFact], reserved: &[(String, u32)]) {
        let names: BTreeSet<String> = candidates
            .iter()
            .map(|c| canonical_competition(&c.competition_name))
            .filter(|n| !n.is_empty())
            .collect();

        // Reserved ids are claimed up front, whether or not they are present,
        // so dynamic ids never land on them.
        let mut used: BTreeSet<u32> = BTreeSet::new();
        for (name, id) in reserved {
            assert!(used.insert(*id), "competition id {id} reserved twice ({name})");
            if names.contains(name) {
                self.competition_ids.insert(name.clone(), *id);
            }
        }

        let dynamic: Vec<String> = names
            .into_iter()
            .filter(|n| !self.competition_ids.contains_key(n))
            .collect();

        let mut next = FIRST_DYNAMIC_COMPETITION_ID;
        for name in dynamic {
            while !used.insert(next) {
                next += 1;
            }
            self.competition_ids.insert(name, next);
            next += 1;
        }

        let mut rows: Vec<CompetitionDimension> = self
            .competition_ids
            .iter()
            .map(|(name, &id)| CompetitionDimension { competition_id: id, competition_name: name.clone() })
            .collect();
        rows.sort_by_key(|r| r.competition_id);
        self.competitions = rows;
    }

    fn build_stages(&mut self, candidates: &[LegFact], opts: &ExtractOptions) {
        let mut by_id: BTreeMap<u32, StageDimension> = BTreeMap::new();
        by_id.insert(
            WINNER_STAGE_ID,
            StageDimension { stage_id: WINNER_STAGE_ID, stage_name: s!(WINNER_STAGE_NAME), importance: 0 },
        );
        for seed in &opts.stage_table {
            let prev = by_id.insert(
                seed.stage_id,
                StageDimension { stage_id: seed.stage_id, stage_name: seed.name.clone(), importance: seed.importance },
            );
            assert!(prev.is_none(), "stage id {} assigned twice", seed.stage_id);
        }

        for stage in by_id.values() {
            self.stage_ids.entry(name_key(&stage.stage_name)).or_insert(stage.stage_id);
        }

        let seen: BTreeSet<String> = candidates
            .iter()
            .map(|c| s!(c.stage_name.trim()))
            .filter(|n| !n.is_empty())
            .collect();

        let mut next = by_id.keys().next_back().map_or(0, |max| max + 1);
        for name in seen {
            let key = name_key(&name);
            if self.stage_ids.contains_key(&key) {
                continue;
            }
            logd!("new stage {name:?} → id {next}");
            self.stage_ids.insert(key, next);
            by_id.insert(next, StageDimension { stage_id: next, stage_name: name, importance: 0 });
            next += 1;
        }

        self.stages = by_id.into_values().collect();
    }

    fn build_clubs(&mut self, candidates: &[LegFact]) {
        let names: BTreeSet<&str> = candidates
            .iter()
            .flat_map(|c| [c.home_team.trim(), c.away_team.trim()])
            .filter(|n| !n.is_empty())
            .collect();

        self.clubs = names
            .into_iter()
            .zip(1u32..)
            .map(|(name, id)| ClubDimension { club_id: id, club_name: s!(name) })
            .collect();
        self.club_ids = self.clubs.iter().map(|c| (c.club_name.clone(), c.club_id)).collect();
    }

    /// Id of a raw (not yet canonical) competition name.
    pub fn competition_id(&self, raw_name: &str) -> Option<u32> {
        self.competition_ids.get(&canonical_competition(raw_name)).copied()
    }

    /// Id of a stage, matched case- and space-insensitively.
    pub fn stage_id(&self, name: &str) -> Option<u32> {
        self.stage_ids.get(&name_key(name)).copied()
    }

    pub fn club_id(&self, name: &str) -> Option<u32> {
        self.club_ids.get(name.trim()).copied()
    }
}
