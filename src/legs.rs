// src/legs.rs
// One printed tie row → one or two home-perspective legs.
//
// Printed row:   team1  team1_cc  team2  team2_cc  leg1  leg2
// Leg 1:         home = team1, goals as printed in leg1
// Leg 2:         home = team2; leg2 is printed from team1's side, so the
//                figures are swapped to keep `goals_home` on the home club.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Issue;
use crate::model::{LegFact, LegNumber, TaggedRow};

static SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s*[-–]\s*(\d+)\s*$").expect("valid score regex")
});

/// Parse `int-int` (hyphen or en dash). Anything else, including extra-time
/// or penalty annotations, is `None`.
pub fn parse_score(text: &str) -> Option<(u32, u32)> {
    let caps = SCORE.captures(text)?;
    let left = caps[1].parse().ok()?;
    let right = caps[2].parse().ok()?;
    Some((left, right))
}

/// Legs built from one row plus what went wrong along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub legs: Vec<LegFact>,
    pub issues: Vec<Issue>,
}

pub fn reconstruct(tagged: &TaggedRow) -> Reconstruction {
    let mut out = Reconstruction::default();
    let raw = &tagged.raw;

    if raw.team1.is_empty() && raw.team2.is_empty() {
        out.issues.push(Issue::BlankTeams { year: tagged.year, row: tagged.row });
        return out;
    }

    let mut goals = |leg: LegNumber, text: Option<&str>| -> Option<(u32, u32)> {
        let text = text?;
        let parsed = parse_score(text);
        if parsed.is_none() {
            out.issues.push(Issue::UnparseableScore {
                year: tagged.year,
                row: tagged.row,
                leg: leg.into(),
                text: s!(text),
            });
        }
        parsed
    };
    let leg1 = goals(LegNumber::First, raw.leg1.as_deref());
    let leg2 = goals(LegNumber::Second, raw.leg2.as_deref());

    // Aggregate winner: only meaningful for a two-legged tie, and only when
    // the marker is unambiguous.
    let two_leg_winner_name = match (raw.leg2.is_some(), raw.team1_bold, raw.team2_bold) {
        (true, true, false) => Some(raw.team1.clone()),
        (true, false, true) => Some(raw.team2.clone()),
        _ => None,
    };

    out.legs.push(LegFact {
        season_page: tagged.year,
        competition_name: tagged.competition.clone(),
        stage_name: tagged.stage.clone(),
        leg_number: LegNumber::First,
        home_team: raw.team1.clone(),
        home_cc: raw.team1_cc.clone(),
        away_team: raw.team2.clone(),
        away_cc: raw.team2_cc.clone(),
        score_text: raw.leg1.clone().unwrap_or_default(),
        goals_home: leg1.map(|(h, _)| h),
        goals_away: leg1.map(|(_, a)| a),
        two_leg_winner_name,
    });

    if let Some(leg2_text) = &raw.leg2 {
        // printed (team1, team2) → home team2, away team1
        let swapped = leg2.map(|(t1, t2)| (t2, t1));
        let score_text = match swapped {
            Some((h, a)) => format!("{h}-{a}"),
            None => leg2_text.clone(),
        };
        out.legs.push(LegFact {
            season_page: tagged.year,
            competition_name: tagged.competition.clone(),
            stage_name: tagged.stage.clone(),
            leg_number: LegNumber::Second,
            home_team: raw.team2.clone(),
            home_cc: raw.team2_cc.clone(),
            away_team: raw.team1.clone(),
            away_cc: raw.team1_cc.clone(),
            score_text,
            goals_home: swapped.map(|(h, _)| h),
            goals_away: swapped.map(|(_, a)| a),
            two_leg_winner_name: None,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRow;

    fn tagged(raw: RawRow) -> TaggedRow {
        TaggedRow { year: 2010, row: 4, competition: s!("Champions League"), stage: s!("Round of 16"), raw }
    }

    fn row(leg1: Option<&str>, leg2: Option<&str>, bold: (bool, bool)) -> RawRow {
        RawRow {
            team1: s!("Arsenal"),
            team1_cc: s!("ENG"),
            team2: s!("Barcelona"),
            team2_cc: s!("ESP"),
            leg1: leg1.map(String::from),
            leg2: leg2.map(String::from),
            team1_bold: bold.0,
            team2_bold: bold.1,
        }
    }

    #[test]
    fn score_forms() {
        assert_eq!(parse_score("2-1"), Some((2, 1)));
        assert_eq!(parse_score(" 10 – 0 "), Some((10, 0)));
        assert_eq!(parse_score("1-1 p"), None);
        assert_eq!(parse_score("w/o"), None);
        assert_eq!(parse_score(""), None);
    }

    #[test]
    fn second_leg_is_swapped_to_home_perspective() {
        let out = reconstruct(&tagged(row(Some("2-1"), Some("0-3"), (false, true))));
        assert_eq!(out.legs.len(), 2);

        let l1 = &out.legs[0];
        assert_eq!((l1.home_team.as_str(), l1.away_team.as_str()), ("Arsenal", "Barcelona"));
        assert_eq!((l1.goals_home, l1.goals_away), (Some(2), Some(1)));
        assert_eq!(l1.score_text, "2-1");
        assert_eq!(l1.two_leg_winner_name.as_deref(), Some("Barcelona"));

        let l2 = &out.legs[1];
        assert_eq!(l2.leg_number, LegNumber::Second);
        assert_eq!((l2.home_team.as_str(), l2.away_team.as_str()), ("Barcelona", "Arsenal"));
        assert_eq!((l2.home_cc.as_str(), l2.away_cc.as_str()), ("ESP", "ENG"));
        assert_eq!((l2.goals_home, l2.goals_away), (Some(3), Some(0)));
        assert_eq!(l2.score_text, "3-0");
        assert_eq!(l2.two_leg_winner_name, None);
    }

    #[test]
    fn single_match_has_no_aggregate_winner() {
        let out = reconstruct(&tagged(row(Some("1-0"), None, (true, false))));
        assert_eq!(out.legs.len(), 1);
        assert_eq!(out.legs[0].two_leg_winner_name, None);
    }

    #[test]
    fn ambiguous_bold_marker_is_ignored() {
        let both = reconstruct(&tagged(row(Some("1-0"), Some("0-1"), (true, true))));
        assert_eq!(both.legs[0].two_leg_winner_name, None);
        let neither = reconstruct(&tagged(row(Some("1-0"), Some("0-1"), (false, false))));
        assert_eq!(neither.legs[0].two_leg_winner_name, None);
    }

    #[test]
    fn unparseable_second_leg_keeps_text() {
        let out = reconstruct(&tagged(row(Some("1-1"), Some("2-2 aet"), (true, false))));
        let l2 = &out.legs[1];
        assert_eq!(l2.score_text, "2-2 aet");
        assert_eq!((l2.goals_home, l2.goals_away), (None, None));
        assert_eq!(
            out.issues,
            vec![Issue::UnparseableScore { year: 2010, row: 4, leg: 2, text: s!("2-2 aet") }]
        );
    }

    #[test]
    fn missing_first_leg_still_emits_the_pairing() {
        let out = reconstruct(&tagged(row(None, None, (false, false))));
        assert_eq!(out.legs.len(), 1);
        assert_eq!(out.legs[0].score_text, "");
        assert_eq!(out.legs[0].goals_home, None);
        assert!(out.issues.is_empty());
    }

    #[test]
    fn blank_teams_emit_nothing() {
        let mut raw = row(Some("1-0"), Some("0-0"), (false, false));
        raw.team1.clear();
        raw.team2.clear();
        let out = reconstruct(&tagged(raw));
        assert!(out.legs.is_empty());
        assert_eq!(out.issues, vec![Issue::BlankTeams { year: 2010, row: 4 }]);
    }
}
