// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;

use pzs_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = cli::Args::parse();
    log::init(args.verbose);

    let summary = cli::run(&args).wrap_err("scrape failed")?;

    for (name, n) in &summary.sources {
        eprintln!("{name}: {n} records");
    }
    println!("Wrote {} ({} rows)", summary.path.display(), summary.rows);
    Ok(())
}
