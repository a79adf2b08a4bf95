// src/specs/mod.rs
//! # Report "specs"
//!
//! Page-specific knowledge: *which* table on a page holds the data and *how*
//! each of its columns is read. Each module exposes a positional column schema
//! (see [`crate::extract::Column`]) and a `parse_doc(html)` entry point that is
//! pure and testable offline against captured pages.
//!
//! What does **not** live here: fetching (`core::net`), correlating sources
//! (`correlate`), export (`file`).
pub mod rankings;
