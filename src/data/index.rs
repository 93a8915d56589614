//! SharedStopIndex - Which routes of a query serve each stop

use crate::data::{RouteCode, RouteDataset};
use std::collections::HashMap;

/// Maps each stop name to the routes of the current query that serve it.
///
/// Entries keep the order in which routes were indexed. A route listing the same stop twice
/// appears twice in that stop's entry.
#[derive(Debug, Default)]
pub struct SharedStopIndex {
    stops: HashMap<String, Vec<RouteCode>>,
}

impl SharedStopIndex {
    /// Index the stops of every given route, in order
    pub fn build(codes: &[RouteCode], dataset: &RouteDataset) -> Self {
        profiling::scope!("SharedStopIndex::build");

        let mut stops: HashMap<String, Vec<RouteCode>> = HashMap::new();
        for code in codes {
            for stop in dataset.stops(code) {
                stops.entry(stop.clone()).or_default().push(code.clone());
            }
        }

        Self { stops }
    }

    /// Routes serving the stop, in indexing order (empty for unknown stops)
    pub fn routes_serving(&self, stop: &str) -> &[RouteCode] {
        self.stops.get(stop).map(Vec::as_slice).unwrap_or_default()
    }

    /// Routes serving the stop other than `route` itself
    pub fn others<'a>(
        &'a self,
        stop: &str,
        route: &'a RouteCode,
    ) -> impl Iterator<Item = &'a RouteCode> + 'a {
        self.routes_serving(stop)
            .iter()
            .filter(move |code| *code != route)
    }

    /// The first other route serving the stop, which decides its highlight color
    pub fn first_other<'a>(&'a self, stop: &str, route: &'a RouteCode) -> Option<&'a RouteCode> {
        self.others(stop, route).next()
    }

    /// Whether some other route of the query also serves the stop
    pub fn is_shared_for(&self, stop: &str, route: &RouteCode) -> bool {
        self.first_other(stop, route).is_some()
    }

    /// Number of distinct stops indexed
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dataset() -> RouteDataset {
        RouteDataset::from_json_str(
            r#"{
                "01A": ["Plaza", "Mall", "Park"],
                "02B": ["Mall", "School"],
                "03C": ["School", "Mall", "Market", "Mall"]
            }"#,
        )
        .unwrap()
    }

    fn codes(dataset: &RouteDataset, tokens: &[&str]) -> Vec<RouteCode> {
        tokens
            .iter()
            .map(|token| RouteCode::parse(token, dataset).unwrap())
            .collect()
    }

    #[test]
    fn test_entries_follow_indexing_order() {
        let dataset = create_test_dataset();
        let codes = codes(&dataset, &["02B", "01A"]);
        let index = SharedStopIndex::build(&codes, &dataset);

        let serving: Vec<&str> = index
            .routes_serving("Mall")
            .iter()
            .map(RouteCode::as_str)
            .collect();
        assert_eq!(serving, vec!["02B", "01A"]);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_duplicate_stops_are_kept() {
        let dataset = create_test_dataset();
        let codes = codes(&dataset, &["03C"]);
        let index = SharedStopIndex::build(&codes, &dataset);

        assert_eq!(index.routes_serving("Mall").len(), 2);
        // A route repeating a stop still does not share it with itself
        assert!(!index.is_shared_for("Mall", &codes[0]));
    }

    #[test]
    fn test_first_other_skips_self() {
        let dataset = create_test_dataset();
        let codes = codes(&dataset, &["01A", "02B", "03C"]);
        let index = SharedStopIndex::build(&codes, &dataset);

        assert_eq!(index.first_other("Mall", &codes[0]), Some(&codes[1]));
        assert_eq!(index.first_other("Mall", &codes[1]), Some(&codes[0]));
        assert_eq!(index.first_other("Mall", &codes[2]), Some(&codes[0]));
        assert_eq!(index.first_other("Plaza", &codes[0]), None);
        assert_eq!(index.others("Mall", &codes[2]).count(), 2);
    }

    #[test]
    fn test_unknown_stop() {
        let dataset = create_test_dataset();
        let index = SharedStopIndex::build(&[], &dataset);

        assert!(index.is_empty());
        assert!(index.routes_serving("Nowhere").is_empty());
    }
}
