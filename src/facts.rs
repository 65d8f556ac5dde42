// src/facts.rs
// Candidate legs → fact rows keyed by dimension ids.
// Rows are never dropped: a name that fails its lookup becomes an empty id
// and an Issue, so gaps stay visible downstream.

use crate::dimensions::Dimensions;
use crate::error::{Issue, RefKind};
use crate::model::{FactRow, LegFact, LegNumber, Winner};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assembly {
    pub facts: Vec<FactRow>,
    pub issues: Vec<Issue>,
}

pub fn assemble(candidates: &[LegFact], dims: &Dimensions) -> Assembly {
    let mut out = Assembly { facts: Vec::with_capacity(candidates.len()), issues: Vec::new() };

    for (index, leg) in candidates.iter().enumerate() {
        let mut resolve = |kind: RefKind, name: &str, id: Option<u32>| -> Option<u32> {
            if id.is_none() && !name.trim().is_empty() {
                out.issues.push(Issue::UnresolvedReference { index, kind, name: s!(name) });
            }
            id
        };

        let competition_id = resolve(
            RefKind::Competition,
            &leg.competition_name,
            dims.competition_id(&leg.competition_name),
        );
        let stage_id = resolve(RefKind::Stage, &leg.stage_name, dims.stage_id(&leg.stage_name));
        let home_club_id = resolve(RefKind::HomeClub, &leg.home_team, dims.club_id(&leg.home_team));
        let away_club_id = resolve(RefKind::AwayClub, &leg.away_team, dims.club_id(&leg.away_team));
        let two_leg_winner_club_id = match (&leg.two_leg_winner_name, leg.leg_number) {
            (Some(name), LegNumber::First) => {
                resolve(RefKind::TwoLegWinner, name, dims.club_id(name))
            }
            _ => None,
        };

        out.facts.push(FactRow {
            season_page: leg.season_page,
            leg_number: leg.leg_number,
            competition_id,
            stage_id,
            home_club_id,
            away_club_id,
            home_cc: leg.home_cc.clone(),
            away_cc: leg.away_cc.clone(),
            score_text: leg.score_text.clone(),
            goals_home: leg.goals_home,
            goals_away: leg.goals_away,
            winner: Winner::decide(leg.goals_home, leg.goals_away, home_club_id, away_club_id),
            two_leg_winner_club_id,
        });
    }

    if !out.issues.is_empty() {
        logw!("{} unresolved reference(s) while assembling {} facts", out.issues.len(), out.facts.len());
    }
    out
}
