//! Crate-level tests grouped by concern

pub mod config_tests;
