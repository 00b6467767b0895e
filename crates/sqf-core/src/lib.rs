//! SquirrelFocus core library
//!
//! Front matter parsing, journal aggregation, reporting and CI summary
//! rendering for the `sqf` command line tool.

pub mod config;
pub mod entry;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod report;
pub mod repository;
pub mod summary;
