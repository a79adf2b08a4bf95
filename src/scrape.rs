// src/scrape.rs
use std::{
    thread,
    time::Duration,
    sync::{mpsc, atomic::{AtomicUsize, Ordering}},
};

use tracing::{debug, info};

use crate::{
    config::{QueryParams, RunOptions},
    config::consts::{WORKERS, REQUEST_PAUSE_MS},
    core::Fetch,
    error::{Error, Result},
    extract::SwimmerResult,
    progress::Progress,
    specs::rankings,
};

/// Records extracted for one named source of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceData {
    pub name: String,
    pub params: QueryParams,
    pub records: Vec<SwimmerResult>,
}

/// Fetch one parameter set and extract its ranked records.
pub fn fetch_source(fetcher: &dyn Fetch, params: &QueryParams) -> Result<Vec<SwimmerResult>> {
    let html = fetcher.fetch(params)?;
    let t = std::time::Instant::now();
    let records = rankings::parse_doc(&html);
    debug!(%params, records = records.len(), "Parsed rankings in {:?}", t.elapsed());
    Ok(records)
}

/// Fetch every source of the run. Output is in source order whatever order the
/// fetches finish in; the first failing source (in source order) aborts.
pub fn collect_sources(
    fetcher: &dyn Fetch,
    opts: &RunOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<SourceData>> {
    let jobs: Vec<(String, QueryParams)> = opts
        .sources
        .iter()
        .map(|s| (s.name.clone(), opts.params_for(s)))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(jobs.len());
    }

    let results = if opts.sequential || jobs.len() <= 1 {
        fetch_sequential(fetcher, &jobs, progress.as_deref_mut())
    } else {
        fetch_pooled(fetcher, &jobs, progress.as_deref_mut())
    };

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let mut out = Vec::with_capacity(jobs.len());
    for ((name, params), result) in jobs.into_iter().zip(results) {
        let records = result?;
        info!(source = %name, %params, records = records.len(), "Source collected");
        out.push(SourceData { name, params, records });
    }
    Ok(out)
}

fn fetch_sequential(
    fetcher: &dyn Fetch,
    jobs: &[(String, QueryParams)],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Result<Vec<SwimmerResult>>> {
    let mut results = Vec::with_capacity(jobs.len());
    for (i, (name, params)) in jobs.iter().enumerate() {
        if i > 0 {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
        }
        let result = fetch_source(fetcher, params);
        let failed = result.is_err();
        report(progress.as_deref_mut(), name, &result);
        results.push(result);
        if failed {
            break; // nothing after the first failure is needed
        }
    }
    results
}

fn fetch_pooled(
    fetcher: &dyn Fetch,
    jobs: &[(String, QueryParams)],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Result<Vec<SwimmerResult>>> {
    type Done = (usize, Result<Vec<SwimmerResult>>);

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Done>();
    let workers = WORKERS.min(jobs.len()).max(1);

    let mut slots: Vec<Option<Result<Vec<SwimmerResult>>>> = (0..jobs.len()).map(|_| None).collect();

    thread::scope(|scope| {
        // Spawn workers
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= jobs.len() {
                        break;
                    }
                    let result = fetch_source(fetcher, &jobs[i].1);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        // Aggregate results
        for (i, result) in res_rx {
            report(progress.as_deref_mut(), &jobs[i].0, &result);
            slots[i] = Some(result);
        }
    });

    slots
        .into_iter()
        .zip(jobs)
        .map(|(slot, (name, _))| {
            slot.unwrap_or_else(|| Err(Error::Worker(s!("no result for source {}", name))))
        })
        .collect()
}

fn report(progress: Option<&mut (dyn Progress + '_)>, name: &str, result: &Result<Vec<SwimmerResult>>) {
    let Some(p) = progress else { return };
    match result {
        Ok(records) => p.item_done(name, records.len()),
        Err(e) => p.log(&s!("{}: {}", name, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Pool, SourceSpec};
    use std::sync::Mutex;

    /// Serves a canned page per pool and records the order of requests.
    struct Canned {
        long: String,
        short: Option<String>,
        seen: Mutex<Vec<Pool>>,
    }

    impl Fetch for Canned {
        fn fetch(&self, params: &QueryParams) -> Result<String> {
            self.seen.lock().unwrap().push(params.pool);
            match params.pool {
                Pool::Long => Ok(self.long.clone()),
                Pool::Short => self.short.clone().ok_or_else(|| Error::Worker(s!("offline"))),
            }
        }
    }

    fn page(name: &str, time: &str) -> String {
        format!(
            "<table><tbody><tr><td>h</td></tr>\
             <tr><td><p>1.</p></td><td><p><a href=\"p?id=1\">{name}</a></p></td>\
             <td><p>2000 <small>(18)</small></p></td><td><p>K</p></td><td><p>{time}</p></td>\
             <td><p>1</p></td><td><p>d</p></td><td><p>v</p></td></tr></tbody></table>"
        )
    }

    fn opts(sequential: bool) -> RunOptions {
        RunOptions { sequential, ..RunOptions::default() }
    }

    #[test]
    fn pooled_and_sequential_agree() {
        let fetcher = Canned {
            long: page("X", "0:25,00"),
            short: Some(page("X", "0:24,00")),
            seen: Mutex::new(Vec::new()),
        };
        let a = collect_sources(&fetcher, &opts(false), None).unwrap();
        let b = collect_sources(&fetcher, &opts(true), None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].name, "longPool");
        assert_eq!(a[1].name, "shortPool");
        assert_eq!(a[1].records[0].time.to_string(), "0:24,00");
        assert_eq!(fetcher.seen.lock().unwrap().len(), 4);
    }

    #[test]
    fn any_failed_source_aborts() {
        let fetcher = Canned { long: page("X", "0:25,00"), short: None, seen: Mutex::new(Vec::new()) };
        for sequential in [false, true] {
            let err = collect_sources(&fetcher, &opts(sequential), None).unwrap_err();
            assert!(err.to_string().contains("offline"));
        }
    }

    #[test]
    fn sequential_stops_after_first_failure() {
        let fetcher = Canned { long: page("X", "0:25,00"), short: None, seen: Mutex::new(Vec::new()) };
        let mut o = opts(true);
        o.sources = vec![
            SourceSpec::new("a", Pool::Short),
            SourceSpec::new("b", Pool::Long),
        ];
        assert!(collect_sources(&fetcher, &o, None).is_err());
        assert_eq!(*fetcher.seen.lock().unwrap(), vec![Pool::Short]);
    }
}
