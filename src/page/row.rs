// src/page/row.rs
// Classification of a single <tr> block.

use crate::config::ExtractOptions;
use crate::core::html::{
    colspan, find_tag, has_bold, has_class, inner_after_open_tag, opener, tag_blocks_ci, text_of,
    to_lower,
};
use crate::model::RawRow;

/// One `<td>` of a data row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub bold: bool,
    pub colspan: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowKind {
    CompetitionHeader(String),
    StageHeader(String),
    /// `<th>` row without a competition/stage marker (column titles).
    ColumnHeader,
    /// Single spanning `<td colspan>` or a row of empty cells.
    Separator,
    /// No cells and no text.
    Empty,
    /// Visible text but no complete `<td>…</td>` block (unclosed cells).
    Unreadable,
    Data(Vec<Cell>),
}

pub fn classify(tr: &str, opts: &ExtractOptions) -> RowKind {
    let has_th = find_tag(&to_lower(tr), "th", 0).is_some();

    if has_th {
        for th in tag_blocks_ci(tr, "th") {
            if let Some(label) = marker_label(th, &opts.competition_marker) {
                return RowKind::CompetitionHeader(label);
            }
            if let Some(label) = marker_label(th, &opts.stage_marker) {
                return RowKind::StageHeader(label);
            }
        }
    }

    let tds = tag_blocks_ci(tr, "td");
    if tds.is_empty() {
        return if has_th {
            RowKind::ColumnHeader
        } else if text_of(inner_after_open_tag(tr)).is_empty() {
            RowKind::Empty
        } else {
            RowKind::Unreadable
        };
    }

    let cells: Vec<Cell> = tds
        .iter()
        .map(|td| Cell {
            text: text_of(inner_after_open_tag(td)),
            bold: has_bold(td),
            colspan: colspan(opener(td)),
        })
        .collect();

    if let [only] = cells.as_slice() {
        if only.colspan > 1 {
            return RowKind::Separator;
        }
    }
    if cells.iter().all(|c| c.text.is_empty()) {
        return RowKind::Separator;
    }
    RowKind::Data(cells)
}

/// Header label from a `<th>` carrying `marker` itself or wrapping a
/// `<div class=marker>`.
fn marker_label(th: &str, marker: &str) -> Option<String> {
    if has_class(opener(th), marker) {
        return Some(text_of(inner_after_open_tag(th)));
    }
    tag_blocks_ci(th, "div")
        .into_iter()
        .find(|div| has_class(opener(div), marker))
        .map(|div| text_of(inner_after_open_tag(div)))
}

impl RawRow {
    /// Map cells by position: `[team1, team1_cc, team2, team2_cc, leg1, leg2]`.
    /// Short legacy rows simply lack the score columns.
    pub fn from_cells(cells: &[Cell]) -> Self {
        let text = |i: usize| cells.get(i).map(|c| c.text.clone()).unwrap_or_default();
        let score = |i: usize| cells.get(i).map(|c| c.text.clone()).filter(|t| !t.is_empty());
        let bold = |i: usize| cells.get(i).is_some_and(|c| c.bold);
        RawRow {
            team1: text(0),
            team1_cc: text(1),
            team2: text(2),
            team2_cc: text(3),
            leg1: score(4),
            leg2: score(5),
            team1_bold: bold(0),
            team2_bold: bold(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ExtractOptions { ExtractOptions::default() }

    #[test]
    fn competition_and_stage_headers() {
        let tr = r#"<tr><th colspan=6><div class="cupheader">UEFA Champions League</div></th></tr>"#;
        assert_eq!(classify(tr, &opts()), RowKind::CompetitionHeader(s!("UEFA Champions League")));

        let tr = r#"<tr><th colspan="6"><div class='roundheader'>Quarter&nbsp;Finals</div></th></tr>"#;
        assert_eq!(classify(tr, &opts()), RowKind::StageHeader(s!("Quarter Finals")));

        let tr = r#"<tr><th class="roundheader">Final</th></tr>"#;
        assert_eq!(classify(tr, &opts()), RowKind::StageHeader(s!("Final")));
    }

    #[test]
    fn column_titles_separators_and_empties() {
        assert_eq!(classify("<tr><th>Team</th><th>Country</th></tr>", &opts()), RowKind::ColumnHeader);
        assert_eq!(classify("<tr><td colspan=6>&nbsp;</td></tr>", &opts()), RowKind::Separator);
        assert_eq!(classify("<tr><td></td><td> </td></tr>", &opts()), RowKind::Separator);
        assert_eq!(classify("<tr></tr>", &opts()), RowKind::Empty);
        assert_eq!(classify("<tr>\n  &nbsp; </tr>", &opts()), RowKind::Empty);
    }

    #[test]
    fn spanning_cell_needs_a_real_span() {
        assert_eq!(classify(r#"<tr><td colspan="6"><i>replayed</i></td></tr>"#, &opts()), RowKind::Separator);
        let RowKind::Data(cells) = classify("<tr><td colspan=1>Lille</td></tr>", &opts()) else {
            panic!("expected data row")
        };
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn unclosed_cells_are_not_silently_dropped() {
        let tr = "<tr><td>Lille<td>FRA<td>Newcastle<td>ENG<td>1-1<td>0-0</tr>";
        assert_eq!(classify(tr, &opts()), RowKind::Unreadable);
    }

    #[test]
    fn data_cells_keep_bold_and_colspan() {
        let tr = r#"<tr><td><b>Porto</b></td><td>POR</td><td>Lyon</td><td>FRA</td><td colspan=2>2-0</td></tr>"#;
        let RowKind::Data(cells) = classify(tr, &opts()) else { panic!("expected data row") };
        assert_eq!(cells.len(), 5);
        assert!(cells[0].bold && !cells[2].bold);
        assert_eq!(cells[4].colspan, 2);

        let raw = RawRow::from_cells(&cells);
        assert_eq!(raw.team1, "Porto");
        assert_eq!(raw.team2_cc, "FRA");
        assert_eq!(raw.leg1.as_deref(), Some("2-0"));
        assert_eq!(raw.leg2, None);
    }
}
