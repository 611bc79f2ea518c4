//! # Playoff Library
//!
//! Library target of the playoff predictor binary, shared with the
//! integration tests.
//!
//! - `config`: TOML file plus `PLAYOFF_*` environment overrides
//! - `client`: HTTP client for the scoring service
//! - `terminal`: line-oriented wizard front end
//! - `cli`: clap commands

pub mod cli;
pub mod client;
pub mod config;
pub mod terminal;
