// src/csv.rs
// CSV/TSV rendering of the output record sequences. Writes to any io::Write;
// where the bytes end up is the caller's business.

use std::io::{self, Write};

use crate::model::{ClubDimension, CompetitionDimension, FactRow, LegFact, StageDimension};

/// A record with a fixed column layout.
pub trait Record {
    const HEADERS: &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl Record for LegFact {
    const HEADERS: &'static [&'static str] = &[
        "season_page", "competition", "stage", "leg_no",
        "home", "home_cc", "away", "away_cc",
        "score", "goals_home", "goals_away", "two_leg_winner",
    ];
    fn fields(&self) -> Vec<String> {
        vec![
            self.season_page.to_string(),
            self.competition_name.clone(),
            self.stage_name.clone(),
            u8::from(self.leg_number).to_string(),
            self.home_team.clone(),
            self.home_cc.clone(),
            self.away_team.clone(),
            self.away_cc.clone(),
            self.score_text.clone(),
            opt(self.goals_home),
            opt(self.goals_away),
            self.two_leg_winner_name.clone().unwrap_or_default(),
        ]
    }
}

impl Record for FactRow {
    const HEADERS: &'static [&'static str] = &[
        "season_page", "leg_no", "competition_id", "stage_id",
        "home_club_id", "away_club_id", "home_cc", "away_cc",
        "score", "goals_home", "goals_away", "winner", "two_leg_winner",
    ];
    fn fields(&self) -> Vec<String> {
        vec![
            self.season_page.to_string(),
            u8::from(self.leg_number).to_string(),
            opt(self.competition_id),
            opt(self.stage_id),
            opt(self.home_club_id),
            opt(self.away_club_id),
            self.home_cc.clone(),
            self.away_cc.clone(),
            self.score_text.clone(),
            opt(self.goals_home),
            opt(self.goals_away),
            self.winner.as_field(),
            opt(self.two_leg_winner_club_id),
        ]
    }
}

impl Record for CompetitionDimension {
    const HEADERS: &'static [&'static str] = &["competition_id", "competition_name"];
    fn fields(&self) -> Vec<String> {
        vec![self.competition_id.to_string(), self.competition_name.clone()]
    }
}

impl Record for StageDimension {
    const HEADERS: &'static [&'static str] = &["stage_id", "stage_name", "importance"];
    fn fields(&self) -> Vec<String> {
        vec![self.stage_id.to_string(), self.stage_name.clone(), self.importance.to_string()]
    }
}

impl Record for ClubDimension {
    const HEADERS: &'static [&'static str] = &["club_id", "club_name"];
    fn fields(&self) -> Vec<String> {
        vec![self.club_id.to_string(), self.club_name.clone()]
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header line, then one line per record, in the given order.
pub fn write_records<W: Write, R: Record>(mut w: W, records: &[R], sep: char) -> io::Result<()> {
    write_row(&mut w, R::HEADERS, sep)?;
    for r in records {
        write_row(&mut w, &r.fields(), sep)?;
    }
    Ok(())
}

/// Convenience: records as one string.
pub fn records_to_string<R: Record>(records: &[R], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
