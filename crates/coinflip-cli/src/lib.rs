//! Coinflip CLI — runs the distribution and range reports for one bound.

pub mod config;
pub mod error;
pub mod report;
