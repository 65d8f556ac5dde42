// src/page/mod.rs
//! # Results page walker
//!
//! Reads one season page and yields its data rows tagged with the
//! competition and stage headers they sit under.
//!
//! ## Page shape
//! ```text
//! <table class="t1">
//!   <tr><th colspan=6><div class="cupheader">UEFA Cup</div></th></tr>
//!   <tr><th colspan=6><div class="roundheader">Round 1</div></th></tr>
//!   <tr><td><b>Team1</b></td><td>CC</td><td>Team2</td><td>CC</td><td>2-1</td><td>0-0</td></tr>
//!   ...
//! ```
//! Older seasons print 4 or 5 cells per row; they are read with the same
//! column positions. Whether that matches every legacy layout is unverified:
//! a layout that moved the score columns would be misread silently.
//!
//! ## Context
//! One [`CompetitionContext`] per page, carried across all results tables of
//! that page and reset for the next page. Rows that cannot hold a pairing are
//! counted and reported as [`Issue::MalformedRow`]; the walk never fails.

mod context;
mod row;

use std::ops::AddAssign;

pub use context::CompetitionContext;
pub use row::{classify, Cell, RowKind};

use crate::config::ExtractOptions;
use crate::config::consts::MIN_ROW_CELLS;
use crate::core::html::{has_class, opener, tag_blocks_ci};
use crate::error::Issue;
use crate::model::{RawRow, TaggedRow};

/// Skip counts and volumes for one or more pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub tables: usize,
    pub rows: usize,
    pub headers: usize,
    pub separators: usize,
    pub malformed: usize,
    pub data_rows: usize,
    pub blank_teams: usize,
    pub legs: usize,
    pub unparseable_scores: usize,
}

impl AddAssign for WalkStats {
    fn add_assign(&mut self, o: Self) {
        self.tables += o.tables;
        self.rows += o.rows;
        self.headers += o.headers;
        self.separators += o.separators;
        self.malformed += o.malformed;
        self.data_rows += o.data_rows;
        self.blank_teams += o.blank_teams;
        self.legs += o.legs;
        self.unparseable_scores += o.unparseable_scores;
    }
}

/// Output of walking one page.
#[derive(Clone, Debug, Default)]
pub struct PageWalk {
    pub rows: Vec<TaggedRow>,
    pub stats: WalkStats,
    pub issues: Vec<Issue>,
}

/// Walk every results table of a season page, in document order.
pub fn walk(html: &str, year: u16, opts: &ExtractOptions) -> PageWalk {
    let mut out = PageWalk::default();
    let mut ctx = CompetitionContext::default();
    let mut row_ix = 0usize;

    let tables = tag_blocks_ci(html, "table").into_iter().filter(|t| match &opts.table_class {
        Some(class) => has_class(opener(t), class),
        None => true,
    });

    for table in tables {
        out.stats.tables += 1;

        for tr in tag_blocks_ci(table, "tr") {
            let row = row_ix;
            row_ix += 1;
            out.stats.rows += 1;

            match classify(tr, opts) {
                RowKind::CompetitionHeader(name) => {
                    out.stats.headers += 1;
                    ctx = ctx.enter_competition(name);
                }
                RowKind::StageHeader(name) => {
                    out.stats.headers += 1;
                    ctx = ctx.enter_stage(name);
                }
                RowKind::ColumnHeader => out.stats.headers += 1,
                RowKind::Separator | RowKind::Empty => out.stats.separators += 1,
                RowKind::Unreadable => {
                    out.stats.malformed += 1;
                    let issue = Issue::MalformedRow { year, row, cells: 0 };
                    logw!("{issue} (unclosed cells?)");
                    out.issues.push(issue);
                }
                RowKind::Data(cells) if cells.len() < MIN_ROW_CELLS => {
                    out.stats.malformed += 1;
                    let issue = Issue::MalformedRow { year, row, cells: cells.len() };
                    logd!("{issue}");
                    out.issues.push(issue);
                }
                RowKind::Data(cells) => {
                    out.stats.data_rows += 1;
                    out.rows.push(TaggedRow {
                        year,
                        row,
                        competition: s!(ctx.competition()),
                        stage: s!(ctx.stage()),
                        raw: RawRow::from_cells(&cells),
                    });
                }
            }
        }
    }

    if out.stats.tables == 0 {
        logw!("season {year}: no results table found");
    }
    out
}
