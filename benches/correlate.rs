// benches/correlate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use pzs_scrape::correlate::{combine, ResultSet};
use pzs_scrape::extract::{RaceTime, SwimmerResult};
use pzs_scrape::specs::rankings;

fn swimmers(n: u32, offset: u32) -> Vec<SwimmerResult> {
    (0..n)
        .map(|i| {
            let id = (i * 7 + offset) % (n + n / 4);
            SwimmerResult {
                swimmer_id: format!("plavalec.php?id={id}"),
                swimmer_name: format!("Swimmer {id}"),
                swimmer_age: 14 + id % 20,
                time: RaceTime::from_hundredths(2300 + i * 3),
            }
        })
        .collect()
}

fn synthetic_page(rows: u32) -> String {
    let mut html = String::from("<table><tbody><tr><td>h</td></tr>");
    for r in swimmers(rows, 0) {
        html.push_str(&format!(
            "<tr><td><p>1.</p></td><td><p><a href=\"{}\">{}</a></p></td>\
             <td><p>2000 <small>({})</small></p></td><td><p>K</p></td><td><p>{}</p></td>\
             <td><p>1</p></td><td><p>d</p></td><td><p>v</p></td></tr>",
            r.swimmer_id, r.swimmer_name, r.swimmer_age, r.time
        ));
    }
    html.push_str("</tbody></table>");
    html
}

fn bench_combine(c: &mut Criterion) {
    let long = swimmers(500, 0);
    let short = swimmers(500, 3);

    c.bench_function("combine_2x500", |b| {
        b.iter(|| {
            let sets = [
                ResultSet::new("longPool", |r: &SwimmerResult| r.time, long.clone()),
                ResultSet::new("shortPool", |r: &SwimmerResult| r.time, short.clone()),
            ];
            let rows = combine("swimmer_name", |r: &SwimmerResult| r.swimmer_name.clone(), black_box(&sets));
            black_box(rows.len())
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_page(500);

    c.bench_function("rankings_parse_500", |b| {
        b.iter(|| {
            let rows = rankings::parse_doc(black_box(&doc));
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_combine, bench_parse);
criterion_main!(benches);
