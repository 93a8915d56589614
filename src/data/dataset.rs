//! RouteDataset - The static route code -> ordered stops table

use crate::data::{DataError, Result, RouteCode, is_well_formed};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Routes bundled with the application
const EMBEDDED_ROUTES: &str = include_str!("../../assets/routes.json");

/// Information about the dataset
#[derive(Debug, Clone)]
pub struct DatasetInfo {
    /// Number of routes
    pub route_count: usize,
    /// Number of distinct stop names across all routes
    pub stop_count: usize,
}

/// Read-only table of every known route and its stops in physical order.
///
/// Every key is a well formed route code; this is checked once at load time.
#[derive(Debug, Clone)]
pub struct RouteDataset {
    routes: BTreeMap<String, Vec<String>>,
}

impl RouteDataset {
    /// Parse a dataset from a JSON object of `"code": ["stop", ...]` entries
    pub fn from_json_str(json: &str) -> Result<Self> {
        let routes: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Self::new(routes)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);
        let routes: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::new(routes)
    }

    /// The dataset bundled with the application
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_ROUTES)
    }

    fn new(routes: BTreeMap<String, Vec<String>>) -> Result<Self> {
        if routes.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        if let Some(bad) = routes.keys().find(|code| !is_well_formed(code)) {
            return Err(DataError::InvalidDatasetKey(bad.clone()));
        }
        Ok(Self { routes })
    }

    /// Wrap for sharing across the app; the dataset is never mutated after load
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Whether the code is a key of the dataset (no format check)
    pub fn contains(&self, code: &str) -> bool {
        self.routes.contains_key(code)
    }

    /// A code is valid iff it is well formed and present in the dataset
    pub fn is_valid(&self, code: &str) -> bool {
        is_well_formed(code) && self.contains(code)
    }

    /// Ordered stops of a validated route
    pub fn stops(&self, code: &RouteCode) -> &[String] {
        self.routes
            .get(code.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All known codes with their stops, sorted by code
    pub fn routes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.routes
            .iter()
            .map(|(code, stops)| (code.as_str(), stops.as_slice()))
    }

    pub fn get_info(&self) -> DatasetInfo {
        let mut stop_names: Vec<&str> = self
            .routes
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        stop_names.sort_unstable();
        stop_names.dedup();

        DatasetInfo {
            route_count: self.routes.len(),
            stop_count: stop_names.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dataset_loads() {
        let dataset = RouteDataset::embedded().unwrap();
        let info = dataset.get_info();
        assert!(info.route_count > 0);
        assert!(info.stop_count > 0);
        assert!(dataset.routes().all(|(code, _)| is_well_formed(code)));
    }

    #[test]
    fn test_is_valid() {
        let dataset = RouteDataset::from_json_str(r#"{"05B": ["Plaza"]}"#).unwrap();
        assert!(dataset.is_valid("05B"));
        assert!(!dataset.is_valid("06B"));
        for token in ["5B", "05b", "005B", "AB5"] {
            assert!(!dataset.is_valid(token));
        }
    }

    #[test]
    fn test_malformed_key_fails() {
        let result = RouteDataset::from_json_str(r#"{"05B": ["Plaza"], "5b": ["Mall"]}"#);
        assert!(matches!(result, Err(DataError::InvalidDatasetKey(key)) if key == "5b"));
    }

    #[test]
    fn test_empty_dataset_fails() {
        let result = RouteDataset::from_json_str("{}");
        assert!(matches!(result, Err(DataError::EmptyDataset)));
    }

    #[test]
    fn test_invalid_json_fails() {
        let result = RouteDataset::from_json_str(r#"{"05B": "Plaza"}"#);
        assert!(matches!(result, Err(DataError::Json(_))));
    }

    #[test]
    fn test_missing_file_fails() {
        let result = RouteDataset::from_path("/nonexistent/routes.json");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let working_dir = tempfile::tempdir().unwrap();
        let path = working_dir.path().join("routes.json");
        std::fs::write(&path, r#"{"01A": ["Plaza", "Mall"], "02B": ["Mall", "School"]}"#)
            .unwrap();

        let dataset = RouteDataset::from_path(&path).unwrap();
        assert!(dataset.is_valid("01A"));
        assert!(dataset.is_valid("02B"));
        assert_eq!(dataset.get_info().stop_count, 3);
    }

    #[test]
    fn test_stops_keep_route_order() {
        let dataset =
            RouteDataset::from_json_str(r#"{"01A": ["Plaza", "Mall", "Park"]}"#).unwrap();
        let code = RouteCode::parse("01A", &dataset).unwrap();
        assert_eq!(dataset.stops(&code), ["Plaza", "Mall", "Park"]);
    }

    #[test]
    fn test_info_counts_distinct_stops() {
        let dataset = RouteDataset::from_json_str(
            r#"{"01A": ["Plaza", "Mall", "Park"], "02B": ["Mall", "School"]}"#,
        )
        .unwrap();
        let info = dataset.get_info();
        assert_eq!(info.route_count, 2);
        assert_eq!(info.stop_count, 4);
    }
}
