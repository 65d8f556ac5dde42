// src/lib.rs
//! Match results → star schema.
//!
//! Season pages of European cup results go in; a fact table (one row per
//! leg) and competition/stage/club dimensions come out. Fetching pages and
//! persisting the records are left to the caller.
//!
//! ```text
//! SeasonPage ─▶ page::walk ─▶ legs::reconstruct      (per page, phase 1)
//!                    └──────── merge by season ──────┘
//!            ─▶ Dimensions::build ─▶ facts::assemble (whole run, phase 2)
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod config;
pub mod core;
pub mod csv;
pub mod dimensions;
pub mod error;
pub mod facts;
pub mod legs;
pub mod model;
pub mod page;
pub mod pipeline;
pub mod progress;

pub use config::ExtractOptions;
pub use error::{Issue, RefKind};
pub use model::{
    ClubDimension, CompetitionDimension, FactRow, LegFact, LegNumber, RawRow, StageDimension, Winner,
};
pub use pipeline::{extract_season, extract_seasons, normalize, run, Candidates, SeasonPage, StarSchema};
