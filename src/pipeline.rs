// src/pipeline.rs
//! Two-phase pipeline.
//!
//! **Phase 1** (per page, independent): walk the page and reconstruct legs.
//! Pages may be parsed on worker threads; results are merged by ascending
//! season, then by input order, so the candidate sequence does not depend on
//! thread scheduling.
//!
//! **Phase 2** (one barrier over the whole run): build the dimensions from
//! the complete candidate set, then assemble facts against them. Ids are
//! never handed out while pages are still being read.

use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc, Arc},
    thread,
    time::Instant,
};

use crate::config::ExtractOptions;
use crate::core::decode::decode_html_bytes;
use crate::dimensions::Dimensions;
use crate::error::Issue;
use crate::facts;
use crate::legs;
use crate::model::{ClubDimension, CompetitionDimension, FactRow, LegFact, StageDimension};
use crate::page::{self, WalkStats};
use crate::progress::Progress;

/// Decoded text of one season's results page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonPage {
    pub year: u16,
    pub html: String,
}

impl SeasonPage {
    pub fn new(year: u16, html: impl Into<String>) -> Self {
        Self { year, html: html.into() }
    }

    /// From raw response bytes, honouring the page's declared charset.
    pub fn from_bytes(year: u16, raw: &[u8]) -> Self {
        Self { year, html: decode_html_bytes(raw) }
    }
}

/// Phase 1 output for one page.
#[derive(Clone, Debug, Default)]
pub struct SeasonExtract {
    pub year: u16,
    pub legs: Vec<LegFact>,
    pub stats: WalkStats,
    pub issues: Vec<Issue>,
}

/// Phase 1 output for a whole run, merged in season order.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    pub seasons: Vec<u16>,
    pub legs: Vec<LegFact>,
    pub stats: WalkStats,
    pub issues: Vec<Issue>,
}

/// Phase 2 output: the fact table and its three dimensions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarSchema {
    pub facts: Vec<FactRow>,
    pub competitions: Vec<CompetitionDimension>,
    pub stages: Vec<StageDimension>,
    pub clubs: Vec<ClubDimension>,
    pub issues: Vec<Issue>,
}

#[derive(Clone, Debug, Default)]
pub struct Run {
    pub candidates: Candidates,
    pub schema: StarSchema,
}

pub fn extract_season(page: &SeasonPage, opts: &ExtractOptions) -> SeasonExtract {
    let t = Instant::now();
    let walked = page::walk(&page.html, page.year, opts);

    let mut out = SeasonExtract {
        year: page.year,
        legs: Vec::with_capacity(walked.rows.len() * 2),
        stats: walked.stats,
        issues: walked.issues,
    };

    for row in &walked.rows {
        let rebuilt = legs::reconstruct(row);
        for issue in &rebuilt.issues {
            match issue {
                Issue::UnparseableScore { .. } => out.stats.unparseable_scores += 1,
                Issue::BlankTeams { .. } => out.stats.blank_teams += 1,
                _ => {}
            }
            logd!("{issue}");
        }
        out.issues.extend(rebuilt.issues);
        out.legs.extend(rebuilt.legs);
    }
    out.stats.legs = out.legs.len();

    logd!(
        "season {}: {} data rows → {} legs ({} malformed, {} unparseable scores) in {:?}",
        page.year,
        out.stats.data_rows,
        out.stats.legs,
        out.stats.malformed,
        out.stats.unparseable_scores,
        t.elapsed()
    );
    out
}

/// Parse every page and merge the candidates by ascending season, then input
/// order. Uses `opts.workers` threads when there is more than one page.
pub fn extract_seasons(
    pages: Vec<SeasonPage>,
    opts: &ExtractOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Candidates {
    let total = pages.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    let workers = opts.workers.min(total).max(1);
    let mut parsed: Vec<(usize, SeasonExtract)> = Vec::with_capacity(total);

    if workers == 1 {
        for (i, page) in pages.iter().enumerate() {
            let extract = extract_season(page, opts);
            if let Some(p) = progress.as_deref_mut() {
                p.season_done(extract.year, extract.legs.len());
            }
            parsed.push((i, extract));
        }
    } else {
        let pages = Arc::new(pages);
        let shared_opts = Arc::new(opts.clone());
        let counter = Arc::new(AtomicUsize::new(0));
        let (res_tx, res_rx) = mpsc::channel::<(usize, SeasonExtract)>();

        for _ in 0..workers {
            let pages = Arc::clone(&pages);
            let opts = Arc::clone(&shared_opts);
            let idx = Arc::clone(&counter);
            let tx = res_tx.clone();

            thread::spawn(move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= pages.len() {
                        break;
                    }
                    if tx.send((i, extract_season(&pages[i], &opts))).is_err() {
                        break;
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for _ in 0..total {
            match res_rx.recv() {
                Ok((i, extract)) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.season_done(extract.year, extract.legs.len());
                    }
                    parsed.push((i, extract));
                }
                Err(_) => {
                    let msg = format!("page workers ended early: {} of {} seasons parsed", parsed.len(), total);
                    loge!("{msg}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&msg);
                    }
                    break;
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Merge: season, then input position
    parsed.sort_by_key(|(i, extract)| (extract.year, *i));
    let mut out = Candidates::default();
    for (_, mut extract) in parsed {
        out.seasons.push(extract.year);
        out.stats += extract.stats;
        out.legs.append(&mut extract.legs);
        out.issues.append(&mut extract.issues);
    }
    logf!(
        "extracted {} legs from {} season page(s); {} row issue(s)",
        out.legs.len(),
        out.seasons.len(),
        out.issues.len()
    );
    out
}

/// Phase 2: dimensions over the complete candidate set, then facts.
pub fn normalize(candidates: &[LegFact], opts: &ExtractOptions) -> StarSchema {
    let dims = Dimensions::build(candidates, opts);
    let assembled = facts::assemble(candidates, &dims);
    StarSchema {
        facts: assembled.facts,
        competitions: dims.competitions,
        stages: dims.stages,
        clubs: dims.clubs,
        issues: assembled.issues,
    }
}

/// Both phases over a set of season pages.
pub fn run(pages: Vec<SeasonPage>, opts: &ExtractOptions, progress: Option<&mut dyn Progress>) -> Run {
    let candidates = extract_seasons(pages, opts, progress);
    let schema = normalize(&candidates.legs, opts);
    Run { candidates, schema }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(year: u16, competition: &str, home: &str, away: &str) -> SeasonPage {
        SeasonPage::new(
            year,
            format!(
                r#"<table class="t1">
                     <tr><th><div class="cupheader">{competition}</div></th></tr>
                     <tr><th><div class="roundheader">Final</div></th></tr>
                     <tr><td>{home}</td><td>AAA</td><td>{away}</td><td>BBB</td><td>1-0</td></tr>
                   </table>"#
            ),
        )
    }

    #[derive(Default)]
    struct Recorder {
        total: usize,
        done: Vec<u16>,
        finished: bool,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.total = total; }
        fn season_done(&mut self, year: u16, _legs: usize) { self.done.push(year); }
        fn finish(&mut self) { self.finished = true; }
    }

    #[test]
    fn merge_order_is_by_season_then_input() {
        let pages = vec![
            page(2003, "UEFA Cup", "C", "D"),
            page(2001, "UEFA Cup", "A", "B"),
            page(2003, "UEFA Cup", "E", "F"),
        ];
        for workers in [1, 3] {
            let mut opts = ExtractOptions::default();
            opts.workers = workers;
            let out = extract_seasons(pages.clone(), &opts, None);
            assert_eq!(out.seasons, vec![2001, 2003, 2003]);
            let homes: Vec<&str> = out.legs.iter().map(|l| l.home_team.as_str()).collect();
            assert_eq!(homes, vec!["A", "C", "E"]);
        }
    }

    #[test]
    fn progress_sees_every_season() {
        let mut rec = Recorder::default();
        let pages = vec![page(2001, "X", "A", "B"), page(2002, "X", "C", "D")];
        extract_seasons(pages, &ExtractOptions::default(), Some(&mut rec));
        assert_eq!(rec.total, 2);
        rec.done.sort_unstable();
        assert_eq!(rec.done, vec![2001, 2002]);
        assert!(rec.finished);
    }

    #[test]
    fn from_bytes_decodes_latin1() {
        let raw = b"<meta charset=iso-8859-1><table class=t1><tr><td>Malm\xf6 FF</td><td>SWE</td><td>B</td><td>C</td></tr></table>";
        let out = extract_season(&SeasonPage::from_bytes(1999, raw), &ExtractOptions::default());
        assert_eq!(out.legs[0].home_team, "Malmö FF");
    }

    #[test]
    fn from_bytes_reads_cp1252_en_dash_scores() {
        let raw = b"<meta charset=windows-1252><table class=t1>\
            <tr><td>Lille</td><td>FRA</td><td>Sevilla</td><td>ESP</td><td>2\x961</td><td>0\x960</td></tr></table>";
        let out = extract_season(&SeasonPage::from_bytes(2001, raw), &ExtractOptions::default());
        assert!(out.issues.is_empty(), "{:?}", out.issues);
        assert_eq!(out.legs[0].score_text, "2–1");
        assert_eq!((out.legs[0].goals_home, out.legs[0].goals_away), (Some(2), Some(1)));
        assert_eq!((out.legs[1].goals_home, out.legs[1].goals_away), (Some(0), Some(0)));
    }
}
