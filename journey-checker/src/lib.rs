//! TfL road journey status checker.
//!
//! A command-line tool that queries the TfL Unified API for the current
//! status of a road and reports it, with the process exit code reflecting
//! the outcome.

pub mod checker;
pub mod config;
pub mod outcome;
pub mod tfl;
