// src/runner.rs
use std::path::PathBuf;

use serde_json::Value;
use tracing::info;

use crate::{
    config::{JoinField, ResolveField, RunOptions},
    core::Fetch,
    correlate::{combine, CombinedRecord, ResultSet},
    error::Result,
    extract::SwimmerResult,
    file,
    progress::Progress,
    scrape::{self, SourceData},
};

pub type Row = CombinedRecord<String, Value>;

#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub path: PathBuf,
    /// `(source, records)` in source order
    pub sources: Vec<(String, usize)>,
    pub rows: usize,
}

/// Fetch every source, join them and write the export.
/// Nothing is written unless every source was fetched.
pub fn run(
    opts: &RunOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    info!(sources = opts.sources.len(), "Loading results…");
    let sources = scrape::collect_sources(fetcher, opts, progress.as_deref_mut())?;
    let counts: Vec<(String, usize)> =
        sources.iter().map(|s| (s.name.clone(), s.records.len())).collect();

    let rows = correlate_sources(sources, opts.join, opts.resolve);
    info!(rows = rows.len(), "Sources joined");

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Writing {}", opts.export.out_path().display()));
    }
    let path = file::write_export(&opts.export, &rows)?;

    Ok(RunSummary { path, sources: counts, rows: rows.len() })
}

/// One result set per source, joined on `join`, each contributing `resolve`.
pub fn correlate_sources(sources: Vec<SourceData>, join: JoinField, resolve: ResolveField) -> Vec<Row> {
    let sets: Vec<ResultSet<'_, SwimmerResult, Value>> = sources
        .into_iter()
        .map(|s| ResultSet::new(s.name, move |r: &SwimmerResult| resolve.resolve(r), s.records))
        .collect();

    combine(join.field().name(), |r: &SwimmerResult| join.key(r), &sets)
}
