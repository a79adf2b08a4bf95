// src/correlate.rs
//! Multi-source correlation (strict inner join).
//!
//! Every [`ResultSet`] is one source: a name, the records fetched for it, and a
//! resolver that picks the value this source contributes to a combined row.
//! [`combine`] emits one [`CombinedRecord`] per distinct join-key value that is
//! present in *every* source, in first-seen order across the sources.
//!
//! Tie-break: when a source holds several records with the same key, only the
//! first one (in that source's order) is resolved; the rest are ignored.
//! Sources that share a name are treated as one source.
//!
//! The pool is indexed once per source (first record per key), so the whole
//! join is O(P) to index plus O(U × N) to assemble, for P records, U distinct
//! keys and N sources.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use serde::ser::{Serialize, SerializeMap, Serializer};

pub type Resolver<'a, R, V> = Box<dyn Fn(&R) -> V + 'a>;

pub struct ResultSet<'a, R, V> {
    pub name: String,
    pub resolve: Resolver<'a, R, V>,
    pub data: Vec<R>,
}

impl<'a, R, V> ResultSet<'a, R, V> {
    pub fn new(name: impl Into<String>, resolve: impl Fn(&R) -> V + 'a, data: Vec<R>) -> Self {
        Self { name: name.into(), resolve: Box::new(resolve), data }
    }
}

/// `{ head: key, source_1: value_1, …, source_n: value_n }`
#[derive(Clone, Debug, PartialEq)]
pub struct CombinedRecord<K, V> {
    head: String,
    key: K,
    values: Vec<(String, V)>,
}

impl<K, V> CombinedRecord<K, V> {
    pub fn head(&self) -> &str { &self.head }
    pub fn key(&self) -> &K { &self.key }

    /// Resolved value for one source.
    pub fn get(&self, source: &str) -> Option<&V> {
        self.values.iter().find(|(n, _)| n == source).map(|(_, v)| v)
    }

    /// `(source, value)` pairs in source order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &V)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl<K: Serialize, V: Serialize> Serialize for CombinedRecord<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.values.len()))?;
        map.serialize_entry(&self.head, &self.key)?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Inner-join `sets` on the key produced by `key`; `head` names the key column.
pub fn combine<R, K, V>(
    head: &str,
    key: impl Fn(&R) -> K,
    sets: &[ResultSet<'_, R, V>],
) -> Vec<CombinedRecord<K, V>>
where
    K: Eq + Hash + Clone,
{
    // Distinct source names in first-seen order; each set maps onto one slot.
    let mut names: Vec<&str> = Vec::new();
    let slot_of: Vec<usize> = sets
        .iter()
        .map(|set| match names.iter().position(|n| *n == set.name) {
            Some(i) => i,
            None => {
                names.push(&set.name);
                names.len() - 1
            }
        })
        .collect();

    // Per slot: key → (set index, first record with that key).
    let mut index: Vec<HashMap<K, (usize, &R)>> = vec![HashMap::new(); names.len()];
    let mut order: Vec<K> = Vec::new();
    let mut seen: HashSet<K> = HashSet::new();

    for (set_ix, set) in sets.iter().enumerate() {
        let by_key = &mut index[slot_of[set_ix]];
        for record in &set.data {
            let k = key(record);
            if !seen.contains(&k) {
                seen.insert(k.clone());
                order.push(k.clone());
            }
            by_key.entry(k).or_insert((set_ix, record));
        }
    }

    order
        .into_iter()
        .filter_map(|k| {
            let mut values = Vec::with_capacity(names.len());
            for (slot, name) in names.iter().enumerate() {
                let (set_ix, record) = index[slot].get(&k)?;
                values.push((s!(*name), (sets[*set_ix].resolve)(*record)));
            }
            Some(CombinedRecord { head: s!(head), key: k, values })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Rec { name: &'static str, t: &'static str }

    fn rec(name: &'static str, t: &'static str) -> Rec { Rec { name, t } }

    fn set<'a>(name: &str, data: Vec<Rec>) -> ResultSet<'a, Rec, &'static str> {
        ResultSet::new(name, |r: &Rec| r.t, data)
    }

    fn by_name(r: &Rec) -> &'static str { r.name }

    #[test]
    fn missing_from_one_source_is_dropped() {
        let sets = [set("A", vec![rec("X", "1:02,50")]), set("B", vec![])];
        assert!(combine("name", by_name, &sets).is_empty());
    }

    #[test]
    fn present_in_all_sources_is_joined() {
        let sets = [
            set("A", vec![rec("X", "1:00,00")]),
            set("B", vec![rec("X", "0:58,30")]),
        ];
        let out = combine("name", by_name, &sets);
        assert_eq!(out.len(), 1);
        assert_eq!(*out[0].key(), "X");
        assert_eq!(out[0].get("A"), Some(&"1:00,00"));
        assert_eq!(out[0].get("B"), Some(&"0:58,30"));
    }

    #[test]
    fn duplicate_key_uses_first_record_of_source() {
        let sets = [
            set("A", vec![rec("X", "first"), rec("X", "second")]),
            set("B", vec![rec("X", "b")]),
        ];
        let out = combine("name", by_name, &sets);
        assert_eq!(out[0].get("A"), Some(&"first"));
    }

    #[test]
    fn each_source_uses_its_own_resolver() {
        let sets: [ResultSet<'_, Rec, String>; 2] = [
            ResultSet::new("A", |r: &Rec| format!("a:{}", r.t), vec![rec("X", "1")]),
            ResultSet::new("B", |r: &Rec| format!("b:{}", r.t), vec![rec("X", "2")]),
        ];
        let out = combine("name", by_name, &sets);
        assert_eq!(out[0].get("A").map(String::as_str), Some("a:1"));
        assert_eq!(out[0].get("B").map(String::as_str), Some("b:2"));
    }

    #[test]
    fn order_follows_first_occurrence_across_sources() {
        let sets = [
            set("A", vec![rec("Y", "1"), rec("X", "2")]),
            set("B", vec![rec("Z", "3"), rec("X", "4"), rec("Y", "5")]),
        ];
        let keys: Vec<_> = combine("name", by_name, &sets).iter().map(|c| *c.key()).collect();
        assert_eq!(keys, ["Y", "X"]);
    }

    #[test]
    fn same_named_sets_act_as_one_source() {
        let sets = [
            set("A", vec![rec("X", "a1")]),
            set("B", vec![rec("X", "b"), rec("Y", "b")]),
            set("A", vec![rec("Y", "a2"), rec("X", "ignored")]),
        ];
        let out = combine("name", by_name, &sets);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].get("A"), Some(&"a1"));
        assert_eq!(out[1].get("A"), Some(&"a2"));
        assert_eq!(out[0].len(), 2);
    }

    #[test]
    fn no_sources_no_rows() {
        let sets: [ResultSet<'_, Rec, &str>; 0] = [];
        assert!(combine("name", by_name, &sets).is_empty());
    }

    #[test]
    fn serializes_head_then_sources_in_order() {
        let sets = [
            set("longPool", vec![rec("X", "1:00,00")]),
            set("shortPool", vec![rec("X", "0:58,30")]),
        ];
        let out = combine("swimmer_name", by_name, &sets);
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"[{"swimmer_name":"X","longPool":"1:00,00","shortPool":"0:58,30"}]"#);
    }
}
