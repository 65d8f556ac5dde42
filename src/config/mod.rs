// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod stages;

pub use options::ExtractOptions;
pub use stages::{StageSeed, STAGE_TABLE};
