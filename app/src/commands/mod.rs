//! Subcommand handlers

pub mod calc;
pub mod serve;
pub mod simulate;
