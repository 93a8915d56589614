//! Application state management
//!
//! This module manages the application state: the loaded route dataset, the query typed by the
//! user, the last result and the notices waiting to be dismissed.

use crate::app::settings::Settings;
use crate::data::{DatasetInfo, QueryResult, Result, RouteDataset, find_routes};
use std::collections::VecDeque;
use std::sync::Arc;

/// Main application state
pub struct AppState {
    /// Route table, shared and never mutated after load
    pub dataset: Arc<RouteDataset>,

    /// Contents of the input field
    pub input: String,

    /// Result of the last search (replaced on every search)
    pub result: QueryResult,

    /// Notices for rejected codes, shown one at a time until dismissed
    pub notices: VecDeque<String>,

    /// Current UI settings
    pub ui_settings: UiSettings,

    /// Statistics about the dataset and the last query
    pub stats: Stats,
}

/// UI-specific settings that can be adjusted at runtime
#[derive(Clone)]
pub struct UiSettings {
    /// Show the panel listing every known route code
    pub show_routes: bool,
}

/// Statistics about loaded data
#[derive(Default)]
pub struct Stats {
    /// Routes and distinct stops in the dataset
    pub dataset: Option<DatasetInfo>,

    /// Last query time in milliseconds
    pub last_query_time_ms: f64,

    /// Number of routes rendered by the last query
    pub last_query_routes: usize,

    /// Number of highlighted stops in the last query
    pub last_query_shared_stops: usize,
}

impl AppState {
    /// Create new application state from CLI settings
    pub fn new(settings: &Settings) -> Result<Self> {
        let dataset = Self::load_dataset(settings)?;

        let mut state = Self::from_dataset(dataset.into_shared());
        state.ui_settings.show_routes = !settings.hide_routes;

        if let Some(query) = &settings.query {
            state.input = query.clone();
            state.find_routes();
        }

        Ok(state)
    }

    /// Create state around an already loaded dataset
    pub fn from_dataset(dataset: Arc<RouteDataset>) -> Self {
        let stats = Stats {
            dataset: Some(dataset.get_info()),
            ..Default::default()
        };

        Self {
            dataset,
            input: String::new(),
            result: QueryResult::default(),
            notices: VecDeque::new(),
            ui_settings: UiSettings::default(),
            stats,
        }
    }

    /// Load the configured routes file, falling back to the bundled routes
    fn load_dataset(settings: &Settings) -> Result<RouteDataset> {
        if let Some(path) = &settings.routes_file {
            match RouteDataset::from_path(path) {
                Ok(dataset) => {
                    tracing::info!("Loaded routes from {}", path.display());
                    return Ok(dataset);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to load routes from {}: {e}; using bundled routes",
                        path.display()
                    );
                }
            }
        }

        let dataset = RouteDataset::embedded()?;
        tracing::info!("Loaded bundled routes");
        Ok(dataset)
    }

    /// Run the search for the current input, replacing the previous result
    pub fn find_routes(&mut self) {
        profiling::scope!("AppState::find_routes");

        let start = instant::Instant::now();
        self.result = find_routes(&self.input, &self.dataset);
        self.stats.last_query_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        self.notices.extend(self.result.notices());
        self.update_stats();

        tracing::info!(
            "Found {} routes for {:?} ({} rejected) in {:.3} ms",
            self.stats.last_query_routes,
            self.input,
            self.result.errors().count(),
            self.stats.last_query_time_ms
        );
    }

    /// Add a code to the end of the input, comma-separated
    pub fn append_code(&mut self, code: &str) {
        let current = self.input.trim_end().trim_end_matches(',').trim_end();
        self.input = if current.is_empty() {
            code.to_string()
        } else {
            format!("{current}, {code}")
        };
    }

    /// The notice currently blocking the UI, if any
    pub fn current_notice(&self) -> Option<&str> {
        self.notices.front().map(String::as_str)
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Clear the input and the displayed result
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = QueryResult::default();
        self.notices.clear();
        self.stats.last_query_time_ms = 0.0;
        self.update_stats();
    }

    /// Update statistics from the last result
    fn update_stats(&mut self) {
        self.stats.last_query_routes = self.result.blocks().count();
        self.stats.last_query_shared_stops = self
            .result
            .blocks()
            .map(|block| block.highlighted().count())
            .sum();
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_routes: true }
    }
}

impl Stats {
    /// Format dataset size, e.g. "12 routes, 31 stops"
    pub fn format_dataset(&self) -> String {
        match &self.dataset {
            Some(info) => format!("{} routes, {} stops", info.route_count, info.stop_count),
            None => "No routes loaded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        let dataset = RouteDataset::from_json_str(
            r#"{"01A": ["Plaza", "Mall", "Park"], "02B": ["Mall", "School"]}"#,
        )
        .unwrap();
        AppState::from_dataset(dataset.into_shared())
    }

    #[test]
    fn test_find_routes_updates_result_and_stats() {
        let mut state = create_test_state();
        state.input = "01A, 02B".to_string();
        state.find_routes();

        assert_eq!(state.stats.last_query_routes, 2);
        assert_eq!(state.stats.last_query_shared_stops, 2);
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_invalid_codes_queue_notices() {
        let mut state = create_test_state();
        state.input = "01A, 09Z, 5B".to_string();
        state.find_routes();

        assert_eq!(state.stats.last_query_routes, 1);
        assert_eq!(state.current_notice(), Some("09Z doesn't exist"));
        state.dismiss_notice();
        assert_eq!(state.current_notice(), Some("5B doesn't exist"));
        state.dismiss_notice();
        assert!(state.current_notice().is_none());
    }

    #[test]
    fn test_new_search_replaces_result() {
        let mut state = create_test_state();
        state.input = "01A, 02B".to_string();
        state.find_routes();
        state.input = "02B".to_string();
        state.find_routes();

        assert_eq!(state.stats.last_query_routes, 1);
        assert_eq!(state.stats.last_query_shared_stops, 0);
    }

    #[test]
    fn test_append_code() {
        let mut state = create_test_state();
        state.append_code("01A");
        assert_eq!(state.input, "01A");
        state.append_code("02B");
        assert_eq!(state.input, "01A, 02B");

        state.input = "01A, ".to_string();
        state.append_code("02B");
        assert_eq!(state.input, "01A, 02B");
    }

    #[test]
    fn test_startup_query_runs_once() {
        let settings = Settings {
            query: Some("04L, 17B".to_string()),
            ..Default::default()
        };
        let state = AppState::new(&settings).unwrap();

        assert_eq!(state.input, "04L, 17B");
        assert_eq!(state.stats.last_query_routes, 2);
        assert!(state.ui_settings.show_routes);
    }

    #[test]
    fn test_missing_routes_file_falls_back_to_bundled() {
        let settings = Settings {
            routes_file: Some("/nonexistent/routes.json".into()),
            hide_routes: true,
            ..Default::default()
        };
        let state = AppState::new(&settings).unwrap();

        assert!(state.dataset.is_valid("04L"));
        assert!(!state.ui_settings.show_routes);
    }

    #[test]
    fn test_routes_file_replaces_bundled() {
        let working_dir = tempfile::tempdir().unwrap();
        let path = working_dir.path().join("routes.json");
        std::fs::write(&path, r#"{"99Z": ["Depot", "Terminal"]}"#).unwrap();

        let settings = Settings {
            routes_file: Some(path),
            ..Default::default()
        };
        let state = AppState::new(&settings).unwrap();

        assert!(state.dataset.is_valid("99Z"));
        assert!(!state.dataset.is_valid("04L"));
    }

    #[test]
    fn test_clear() {
        let mut state = create_test_state();
        state.input = "01A, 09Z".to_string();
        state.find_routes();
        state.clear();

        assert!(state.input.is_empty());
        assert!(state.result.is_empty());
        assert!(state.current_notice().is_none());
        assert_eq!(state.stats.last_query_routes, 0);
    }
}
