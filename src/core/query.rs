// src/core/query.rs
//
// Typed parameters → report URL.
// The fixed template is parsed first, then each slot is *set*: replaced in
// place if the template already has it, appended otherwise.

use url::Url;

use crate::config::QueryParams;
use crate::config::consts::{QUERY_TEMPLATE, Q_COURSE, Q_GENDER, Q_POOL, Q_RESULTS};
use crate::error::Result;

pub fn build_url(base: &str, params: &QueryParams) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.set_query(Some(&build_query(params)));
    Ok(url)
}

pub fn build_query(params: &QueryParams) -> String {
    let mut pairs: Vec<(String, String)> = url::form_urlencoded::parse(QUERY_TEMPLATE.as_bytes())
        .into_owned()
        .collect();

    set_pair(&mut pairs, Q_RESULTS, &params.results.to_string());
    set_pair(&mut pairs, Q_GENDER, params.gender.code());
    set_pair(&mut pairs, Q_COURSE, params.course.code());
    set_pair(&mut pairs, Q_POOL, params.pool.code());

    url::form_urlencoded::Serializer::new(s!())
        .extend_pairs(pairs.iter())
        .finish()
}

/// First occurrence is overwritten and any later duplicates removed.
fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter().position(|(k, _)| k == key) {
        Some(i) => {
            pairs[i].1 = s!(value);
            let mut seen = 0usize;
            pairs.retain(|(k, _)| {
                if k != key { return true; }
                seen += 1;
                seen == 1
            });
        }
        None => pairs.push((s!(key), s!(value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Course, Gender, Pool};

    fn params(pool: Pool) -> QueryParams {
        QueryParams { results: 500, gender: Gender::Mm, course: Course::D50, pool }
    }

    #[test]
    fn query_keeps_template_and_appends_slots() {
        assert_eq!(
            build_query(&params(Pool::Long)),
            "klub=&samo_en=ON&fina=2019&od=1990-1-1&do=2018-11-7&zaprto=ON&stevilo=500&spol=MM&disc=50D&bazen=L"
        );
    }

    #[test]
    fn url_has_base_and_query() {
        let url = build_url("http://www.pzsana.net/pzsana/alltime1.php", &params(Pool::Short)).unwrap();
        assert_eq!(url.path(), "/pzsana/alltime1.php");
        assert!(url.query().unwrap().ends_with("&bazen=Z"));
    }

    #[test]
    fn underscore_codes_survive_encoding() {
        let p = QueryParams { gender: Gender::ZmD, ..params(Pool::Long) };
        assert!(build_query(&p).contains("spol=ZM_D"));
    }

    #[test]
    fn set_pair_replaces_existing_and_drops_duplicates() {
        let mut pairs = vec![
            (s!("a"), s!("1")),
            (s!("b"), s!("2")),
            (s!("a"), s!("3")),
        ];
        set_pair(&mut pairs, "a", "9");
        assert_eq!(pairs, vec![(s!("a"), s!("9")), (s!("b"), s!("2"))]);
    }
}
