// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod correlate;
pub mod error;
pub mod extract;
pub mod specs;

pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use error::{Error, Result};
