// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    consts::{DEFAULT_FILE, DEFAULT_OUT_DIR, DEFAULT_RESULTS},
    Course, ExportOptions, Gender, JoinField, ResolveField, RunOptions,
};
use crate::core::HttpFetcher;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Join PZS all-time rankings for long and short course into one JSON file.
#[derive(Parser, Debug)]
#[command(name = "pzs_scrape", version, about)]
pub struct Args {
    /// Category (spol)
    #[arg(short, long, value_enum, default_value = "MM")]
    pub gender: Gender,

    /// Event (disc), e.g. 50D, 100K, 200M
    #[arg(short, long, value_enum, default_value = "50D")]
    pub course: Course,

    /// Results per source (stevilo)
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESULTS)]
    pub results: u32,

    /// Field that identifies the same swimmer across sources
    #[arg(long, value_enum, default_value_t = JoinField::Name)]
    pub join: JoinField,

    /// Field each source contributes to a joined row
    #[arg(long, value_enum, default_value_t = ResolveField::Time)]
    pub resolve: ResolveField,

    /// Output directory (created if missing)
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Output file name
    #[arg(long, default_value = DEFAULT_FILE)]
    pub out_file: String,

    /// Fetch sources one after another
    #[arg(long)]
    pub sequential: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            gender: self.gender,
            course: self.course,
            results: self.results,
            join: self.join,
            resolve: self.resolve,
            sequential: self.sequential,
            export: ExportOptions { dir: self.out_dir.clone(), file: self.out_file.clone() },
            ..RunOptions::default()
        }
    }
}

/// Spinner-style status on stderr.
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        eprint!("Loading results… [0/{total}]");
        let _ = std::io::stderr().flush();
    }

    fn log(&mut self, msg: &str) {
        eprintln!("\r{msg}");
    }

    fn item_done(&mut self, source: &str, records: usize) {
        self.done += 1;
        eprint!("\rLoading results… [{}/{}] {source}: {records} records", self.done, self.total);
        let _ = std::io::stderr().flush();
    }

    fn finish(&mut self) {
        eprintln!();
    }
}

pub fn run(args: &Args) -> crate::error::Result<RunSummary> {
    let opts = args.to_options();
    let fetcher = HttpFetcher::new()?;
    let mut progress = ConsoleProgress::new();
    runner::run(&opts, &fetcher, Some(&mut progress))
}
