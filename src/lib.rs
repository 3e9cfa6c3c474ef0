//! Core library for the antares-compare command line application.
//!
//! The library compares Antares simulation output workbooks. A fixed
//! [`catalog`] of indicators is pulled out of every workbook by [`extract`],
//! enriched with ratios by [`derive`], compared against a reference scenario by
//! [`delta`], and laid out as report sheets by [`report`]. Spreadsheet adapters
//! live under [`io`] and the end-to-end orchestration under [`compare`].

pub mod catalog;
pub mod compare;
pub mod config;
pub mod console;
pub mod delta;
pub mod derive;
pub mod error;
pub mod extract;
pub mod io;
pub mod model;
pub mod report;

pub use error::{CompareError, Result};
