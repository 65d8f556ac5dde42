// src/config/options.rs
use super::consts::*;
use super::stages::{default_stage_table, StageSeed};

/// Knobs threaded through extraction and normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Only `<table>`s carrying this class are walked; `None` walks all.
    pub table_class: Option<String>,
    /// Class of the `<div>` (or `<th>`) holding a competition header.
    pub competition_marker: String,
    /// Class of the `<div>` (or `<th>`) holding a stage header.
    pub stage_marker: String,
    /// Seed for the stage dimension.
    pub stage_table: Vec<StageSeed>,
    /// Canonical competition names with fixed ids.
    pub reserved_competitions: Vec<(String, u32)>,
    /// Page parser threads; 1 parses on the calling thread.
    pub workers: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            table_class: Some(s!(RESULTS_TABLE_CLASS)),
            competition_marker: s!(COMPETITION_MARKER),
            stage_marker: s!(STAGE_MARKER),
            stage_table: default_stage_table(),
            reserved_competitions: RESERVED_COMPETITIONS
                .iter()
                .map(|&(name, id)| (s!(name), id))
                .collect(),
            workers: WORKERS,
        }
    }
}

impl ExtractOptions {
    /// Same options, parsing on the calling thread.
    pub fn serial(mut self) -> Self {
        self.workers = 1;
        self
    }
}
