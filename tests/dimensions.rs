// tests/dimensions.rs
//
// Surrogate id assignment over candidate sets, without any HTML.
//
use kes_matches::dimensions::{canonical_competition, Dimensions};
use kes_matches::{normalize, ExtractOptions, LegFact, LegNumber};

fn leg(year: u16, competition: &str, stage: &str, home: &str, away: &str) -> LegFact {
    LegFact {
        season_page: year,
        competition_name: competition.into(),
        stage_name: stage.into(),
        leg_number: LegNumber::First,
        home_team: home.into(),
        home_cc: "".into(),
        away_team: away.into(),
        away_cc: "".into(),
        score_text: "1-0".into(),
        goals_home: Some(1),
        goals_away: Some(0),
        two_leg_winner_name: None,
    }
}

fn sample() -> Vec<LegFact> {
    vec![
        leg(2001, "Cup Winners Cup", "Final", "Zaragoza", "Arsenal"),
        leg(2001, "UEFA Cup", "Round 1", "Arsenal", "Roma"),
        leg(2022, "UEFA Europa Conference League", "Final", "Roma", "Feyenoord"),
        leg(2003, "Intertoto Cup", "Round 2", "Zaragoza", "Roma"),
        leg(2010, "UEFA Champions League", "Play-off Round", "Celtic", "Arsenal"),
    ]
}

#[test]
fn reserved_ids_then_alphabetic() {
    let dims = Dimensions::build(&sample(), &ExtractOptions::default());
    let comps: Vec<(u32, &str)> =
        dims.competitions.iter().map(|c| (c.competition_id, c.competition_name.as_str())).collect();
    assert_eq!(
        comps,
        vec![
            (1, "CHAMPIONS LEAGUE"),
            (2, "EUROPA LEAGUE"),
            (3, "CONFERENCE LEAGUE"),
            (4, "Cup Winners Cup"),
            (5, "Intertoto Cup"),
        ]
    );
}

#[test]
fn dynamic_ids_skip_reserved_even_when_absent() {
    let legs = vec![leg(2001, "Intertoto Cup", "", "A", "B"), leg(2001, "Fairs Cup", "", "A", "B")];
    let dims = Dimensions::build(&legs, &ExtractOptions::default());
    assert_eq!(dims.competition_id("Fairs Cup"), Some(4));
    assert_eq!(dims.competition_id("Intertoto Cup"), Some(5));
}

#[test]
fn same_candidates_any_order_same_ids() {
    let opts = ExtractOptions::default();
    let forward = normalize(&sample(), &opts);
    let mut shuffled = sample();
    shuffled.rotate_left(2);
    let rotated = normalize(&shuffled, &opts);
    assert_eq!(forward.competitions, rotated.competitions);
    assert_eq!(forward.stages, rotated.stages);
    assert_eq!(forward.clubs, rotated.clubs);
}

#[test]
fn club_count_and_numbering() {
    let dims = Dimensions::build(&sample(), &ExtractOptions::default());
    let clubs: Vec<(u32, &str)> = dims.clubs.iter().map(|c| (c.club_id, c.club_name.as_str())).collect();
    assert_eq!(
        clubs,
        vec![(1, "Arsenal"), (2, "Celtic"), (3, "Feyenoord"), (4, "Roma"), (5, "Zaragoza")]
    );
}

#[test]
fn custom_stage_table_is_honoured() {
    let mut opts = ExtractOptions::default();
    opts.stage_table.truncate(3);
    let dims = Dimensions::build(&sample(), &opts);
    // Final kept; Round 1/Round 2/Play-off Round appended after id 3
    assert_eq!(dims.stage_id("final"), Some(1));
    assert_eq!(dims.stage_id("Play-off Round"), Some(4));
    assert_eq!(dims.stage_id("Round 1"), Some(5));
    assert_eq!(dims.stage_id("Round 2"), Some(6));
}

#[test]
fn canonicalization_is_idempotent() {
    for name in ["UEFA Cup", "UEFA Europa League", "Europa League", "Champions Cup", "Fairs Cup"] {
        let once = canonical_competition(name);
        assert_eq!(canonical_competition(&once), once, "{name}");
    }
    assert_eq!(canonical_competition("UEFA Cup"), canonical_competition("UEFA Europa League"));
}

#[test]
fn records_serialize_for_the_persistence_layer() {
    let schema = normalize(&sample(), &ExtractOptions::default());
    let json = serde_json::to_value(&schema.facts[0]).unwrap();
    assert_eq!(json["leg_number"], 1);
    assert_eq!(json["winner"], "5");
    assert_eq!(json["two_leg_winner_club_id"], serde_json::Value::Null);
    assert_eq!(json["competition_id"], 4);
}
