//! Pair colors for highlighting shared stops

use crate::data::RouteCode;
use std::collections::HashMap;
use std::fmt;

/// Highlight color of a pair of routes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Yellow,
}

/// Colors handed out to route pairs, in order. Wraps around once exhausted.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Blue,
    Color::Green,
    Color::Orange,
    Color::Purple,
    Color::Yellow,
];

impl Color {
    /// The palette color for the n-th assigned pair
    pub fn nth(n: usize) -> Self {
        PALETTE[n % PALETTE.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
        }
    }

    /// sRGB value matching the CSS color of the same name
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Blue => [0, 0, 255],
            Self::Green => [0, 128, 0],
            Self::Orange => [255, 165, 0],
            Self::Purple => [128, 0, 128],
            Self::Yellow => [255, 255, 0],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One color per unordered pair of routes; `get(a, b) == get(b, a)`
#[derive(Debug, Default)]
pub struct PairColorMap {
    colors: HashMap<(RouteCode, RouteCode), Color>,
}

impl PairColorMap {
    /// Assign colors to every pair `(codes[i], codes[j])` with `i < j`, in that order.
    ///
    /// Codes are expected to be distinct. More than `PALETTE.len()` pairs reuse colors.
    pub fn assign(codes: &[RouteCode]) -> Self {
        profiling::scope!("PairColorMap::assign");

        let mut colors = HashMap::new();
        let mut next = 0;
        for (i, first) in codes.iter().enumerate() {
            for second in &codes[i + 1..] {
                if first == second {
                    continue;
                }
                colors
                    .entry(Self::key(first, second))
                    .or_insert_with(|| Color::nth(next));
                next += 1;
            }
        }

        Self { colors }
    }

    /// Color of the pair, in either order
    pub fn get(&self, a: &RouteCode, b: &RouteCode) -> Option<Color> {
        self.colors.get(&Self::key(a, b)).copied()
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn key(a: &RouteCode, b: &RouteCode) -> (RouteCode, RouteCode) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }
}
