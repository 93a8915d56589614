//! Rendering of a query into per-route stop sequences with highlighted shared stops

use crate::data::{CodeError, Color, PairColorMap, RouteCode, RouteDataset, SharedStopIndex};
use std::fmt;

/// Separator between a route code and its stops
pub const CODE_ARROW: &str = " ➜ ";

/// Separator between consecutive stops
pub const STOP_SEPARATOR: &str = " ⟷ ";

/// A stop as it should be drawn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedStop {
    pub name: String,
    /// Pair color when another route of the query also serves this stop; drawn bold + italic
    pub highlight: Option<Color>,
}

/// One route of the query, ready to draw
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteBlock {
    pub code: RouteCode,
    pub stops: Vec<RenderedStop>,
}

/// The outcome for a single input token
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryEntry {
    Route(RouteBlock),
    Invalid(CodeError),
}

/// Everything produced by one "find routes" action, one entry per input token
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    pub entries: Vec<QueryEntry>,
}

impl RouteBlock {
    /// Stops highlighted because another route of the query shares them
    pub fn highlighted(&self) -> impl Iterator<Item = &RenderedStop> {
        self.stops.iter().filter(|stop| stop.highlight.is_some())
    }
}

impl QueryResult {
    /// Rendered routes, in input order
    pub fn blocks(&self) -> impl Iterator<Item = &RouteBlock> {
        self.entries.iter().filter_map(|entry| match entry {
            QueryEntry::Route(block) => Some(block),
            QueryEntry::Invalid(_) => None,
        })
    }

    /// Rejected tokens, in input order
    pub fn errors(&self) -> impl Iterator<Item = &CodeError> {
        self.entries.iter().filter_map(|entry| match entry {
            QueryEntry::Route(_) => None,
            QueryEntry::Invalid(error) => Some(error),
        })
    }

    /// User-facing notice for every rejected token, e.g. `09Z doesn't exist`
    pub fn notices(&self) -> impl Iterator<Item = String> + '_ {
        self.errors().map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run the whole pipeline for a comma-separated list of route codes.
///
/// Every token gets an entry, blank ones included. Invalid tokens become
/// [`QueryEntry::Invalid`] without affecting the other tokens. Duplicate tokens are rendered
/// once per occurrence.
pub fn find_routes(input: &str, dataset: &RouteDataset) -> QueryResult {
    profiling::scope!("find_routes");

    let parsed: Vec<Result<RouteCode, CodeError>> = input
        .split(',')
        .map(str::trim)
        .map(|token| RouteCode::parse(token, dataset))
        .collect();

    // Distinct valid codes, in order of first appearance
    let mut codes: Vec<RouteCode> = Vec::new();
    for code in parsed.iter().flatten() {
        if !codes.contains(code) {
            codes.push(code.clone());
        }
    }

    let index = SharedStopIndex::build(&codes, dataset);
    let colors = PairColorMap::assign(&codes);

    let entries: Vec<QueryEntry> = parsed
        .into_iter()
        .map(|token| match token {
            Ok(code) => QueryEntry::Route(render_route(&code, dataset, &index, &colors)),
            Err(error) => {
                tracing::warn!("Rejected route code: {error}");
                QueryEntry::Invalid(error)
            }
        })
        .collect();

    tracing::debug!(
        "Query {:?}: {} routes, {} shared-stop pairs, {} rejected",
        input,
        codes.len(),
        colors.len(),
        entries
            .iter()
            .filter(|entry| matches!(entry, QueryEntry::Invalid(_)))
            .count()
    );

    QueryResult { entries }
}

/// Decide how every stop of a route is drawn.
///
/// A stop is highlighted with the color of the pair (`code`, first other route serving it).
pub fn render_route(
    code: &RouteCode,
    dataset: &RouteDataset,
    index: &SharedStopIndex,
    colors: &PairColorMap,
) -> RouteBlock {
    let stops = dataset
        .stops(code)
        .iter()
        .map(|stop| RenderedStop {
            name: stop.clone(),
            highlight: index
                .first_other(stop, code)
                .and_then(|other| colors.get(code, other)),
        })
        .collect();

    RouteBlock {
        code: code.clone(),
        stops,
    }
}

impl fmt::Display for RenderedStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.highlight {
            Some(color) => write!(f, "*{}*{{{}}}", self.name, color),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for RouteBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.code, CODE_ARROW)?;
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(STOP_SEPARATOR)?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{block}")?;
        }
        Ok(())
    }
}
