//! Test helpers shared across crates.
//!
//! This crate provides value parsers with observable behaviour, problem log
//! assertions, and text helpers for behavioural test suites.

pub mod parsers;
pub mod problems;
pub mod text;
