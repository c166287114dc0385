use std::collections::BTreeMap;

use serde::Serialize;

/// Two-level append-only count map: primary key → secondary key →
/// number of blamed lines. Keys iterate in sorted order, so rendered
/// output is deterministic. Memory is bounded by key cardinality, not
/// by the number of rows folded in.
#[derive(Debug, Default, Serialize)]
pub struct Aggregated {
    counts: BTreeMap<String, BTreeMap<String, u64>>,
    rows: u64,
}

impl Aggregated {
    pub fn add(&mut self, primary: &str, secondary: &str) {
        *self
            .counts
            .entry(primary.to_string())
            .or_default()
            .entry(secondary.to_string())
            .or_insert(0) += 1;
        self.rows += 1;
    }

    /// Fold a batch of rows through key selectors, one increment per
    /// row. Rows are consumed in order and not retained.
    pub fn fold<T, I>(
        &mut self,
        rows: I,
        mut primary: impl FnMut(&T) -> String,
        mut secondary: impl FnMut(&T) -> String,
    ) where
        I: IntoIterator<Item = T>,
    {
        for row in rows {
            self.add(&primary(&row), &secondary(&row));
        }
    }

    pub fn counts(&self) -> &BTreeMap<String, BTreeMap<String, u64>> {
        &self.counts
    }

    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_initializes_and_increments() {
        let mut agg = Aggregated::default();
        agg.add("alice", "Last 30 days");
        agg.add("alice", "Last 30 days");
        agg.add("alice", "Older");
        agg.add("bob", "Older");

        assert_eq!(agg.counts()["alice"]["Last 30 days"], 2);
        assert_eq!(agg.counts()["alice"]["Older"], 1);
        assert_eq!(agg.counts()["bob"]["Older"], 1);
        assert_eq!(agg.rows(), 4);
    }

    #[test]
    fn fold_applies_selectors_per_row() {
        let rows = vec![("alice", 10), ("bob", 400), ("alice", 400)];

        let mut agg = Aggregated::default();
        agg.fold(
            rows,
            |r: &(&str, i64)| r.0.to_string(),
            |r| if r.1 > 90 { "Older".into() } else { "Recent".into() },
        );

        assert_eq!(agg.counts()["alice"]["Recent"], 1);
        assert_eq!(agg.counts()["alice"]["Older"], 1);
        assert_eq!(agg.counts()["bob"]["Older"], 1);
    }

    #[test]
    fn keys_iterate_sorted() {
        let mut agg = Aggregated::default();
        agg.add("zeta", "x");
        agg.add("alpha", "x");
        agg.add("mid", "x");

        let keys: Vec<&String> = agg.counts().keys().collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn empty_state() {
        let agg = Aggregated::default();
        assert!(agg.is_empty());
        assert_eq!(agg.rows(), 0);
    }
}
