//! Side-by-side cost quotes for candidate routes.

use serde::{Deserialize, Serialize};

use crate::models::{Route, TripExpenses};

/// A candidate route with its computed expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuote {
    pub route: Route,
    pub expenses: TripExpenses,
}

/// Quotes for every candidate route of one trip, in source order.
///
/// # Examples
///
/// ```
/// use trip_cost::planning::RouteComparison;
///
/// let cmp = RouteComparison::new();
/// assert!(cmp.is_empty());
/// assert!(cmp.cheapest().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteComparison {
    quotes: Vec<RouteQuote>,
}

impl RouteComparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Appends a quote.
    pub fn add_quote(&mut self, quote: RouteQuote) {
        self.quotes.push(quote);
    }

    /// Quotes in source order.
    pub fn quotes(&self) -> &[RouteQuote] {
        &self.quotes
    }

    /// Number of quoted routes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns `true` if no routes were quoted.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// The quote for the route with the given ID.
    pub fn get(&self, route_id: &str) -> Option<&RouteQuote> {
        self.quotes.iter().find(|q| q.route.id() == route_id)
    }

    /// Lowest total cost; the earliest wins a tie.
    pub fn cheapest(&self) -> Option<&RouteQuote> {
        self.quotes
            .iter()
            .min_by(|a, b| a.expenses.total.total_cmp(&b.expenses.total))
    }

    /// Shortest driving time; the earliest wins a tie.
    pub fn fastest(&self) -> Option<&RouteQuote> {
        self.quotes.iter().min_by_key(|q| q.route.duration())
    }

    /// Shortest distance; the earliest wins a tie.
    pub fn shortest(&self) -> Option<&RouteQuote> {
        self.quotes
            .iter()
            .min_by(|a, b| a.route.distance().total_cmp(&b.route.distance()))
    }

    /// Consumes the comparison, returning its quotes.
    pub fn into_quotes(self) -> Vec<RouteQuote> {
        self.quotes
    }
}

impl FromIterator<RouteQuote> for RouteComparison {
    fn from_iter<I: IntoIterator<Item = RouteQuote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}
