//! Jeep Route Data Module
//!
//! This module holds everything the route finder computes, with no dependency on the UI:
//! loading the static route table, validating route codes, finding the stops shared between
//! the routes of a query and deciding how each stop is drawn.
//!
//! # Overview
//!
//! A query is a comma-separated list of route codes (e.g. `"04L, 17B"`). For every valid code
//! the route's stops are listed in order, and every stop that another route of the same query
//! also serves is highlighted with the color of that pair of routes.
//!
//! # Architecture
//!
//! - **[`RouteDataset`]**: Immutable route code -> ordered stops table, loaded once
//! - **[`RouteCode`]**: A code that passed validation against a dataset
//! - **[`SharedStopIndex`]**: Stop name -> routes of the current query serving it
//! - **[`PairColorMap`]**: One palette [`Color`] per unordered pair of routes
//! - **[`QueryResult`]**: One rendered [`RouteBlock`] or one [`CodeError`] per input token
//!
//! # Usage Example
//!
//! ```rust
//! use jeep_route_finder::data::{RouteDataset, find_routes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = RouteDataset::from_json_str(
//!     r#"{"01A": ["Plaza", "Mall", "Park"], "02B": ["Mall", "School"]}"#,
//! )?;
//!
//! let result = find_routes("01A, 02B, 09Z", &dataset);
//! assert_eq!(result.blocks().count(), 2);
//! assert_eq!(result.notices().collect::<Vec<_>>(), vec!["09Z doesn't exist"]);
//! # Ok(())
//! # }
//! ```

mod code;
mod dataset;
mod index;
mod palette;
mod render;

// Public API exports
pub use code::{RouteCode, is_well_formed};
pub use dataset::{DatasetInfo, RouteDataset};
pub use index::SharedStopIndex;
pub use palette::{Color, PALETTE, PairColorMap};
pub use render::{
    CODE_ARROW, QueryEntry, QueryResult, RenderedStop, RouteBlock, STOP_SEPARATOR, find_routes,
    render_route,
};

/// Error types for loading the route dataset
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid route code in dataset: {0:?}")]
    InvalidDatasetKey(String),

    #[error("Empty dataset")]
    EmptyDataset,
}

/// Why a single token of a query was rejected.
///
/// Both variants read the same to the user: the token simply "doesn't exist".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    /// Not two ASCII digits followed by one uppercase ASCII letter
    #[error("{0} doesn't exist")]
    Malformed(String),

    /// Well formed, but not a key of the dataset
    #[error("{0} doesn't exist")]
    Unknown(String),
}

impl CodeError {
    /// The offending token, as typed (after trimming)
    pub fn token(&self) -> &str {
        match self {
            Self::Malformed(token) | Self::Unknown(token) => token,
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
