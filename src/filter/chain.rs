//! Ordered filter chain.

use super::predicate::{Filter, FilterResult};
use crate::core::Point;
use crate::period::Period;

/// Ordered sequence of filters owned by a period.
///
/// Filters run in registration order. The first `Reject` or `Terminate`
/// wins and later filters are not called.
#[derive(Clone, Debug)]
pub struct FilterChain<P: Point> {
    filters: Vec<Filter<P>>,
}

impl<P: Point> Default for FilterChain<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Point> FilterChain<P> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter at the end of the chain.
    pub fn push(&mut self, filter: Filter<P>) {
        self.filters.push(filter);
    }

    /// Remove every filter, the recurrence filter included.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Number of filters, the recurrence filter included.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate filters in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter<P>> {
        self.filters.iter()
    }

    /// Install the recurrence filter.
    ///
    /// An already installed recurrence filter is replaced where it stands,
    /// otherwise the new one is appended.
    pub fn set_recurrences(&mut self, limit: usize) {
        let filter = Filter::recurrences(limit);
        match self
            .filters
            .iter_mut()
            .find(|f| f.recurrence_limit().is_some())
        {
            Some(existing) => *existing = filter,
            None => self.filters.push(filter),
        }
    }

    /// Limit of the installed recurrence filter, if any.
    pub fn recurrences(&self) -> Option<usize> {
        self.filters.iter().find_map(Filter::recurrence_limit)
    }

    /// Number of filters that are not the recurrence filter.
    pub fn custom_count(&self) -> usize {
        self.filters
            .iter()
            .filter(|f| f.recurrence_limit().is_none())
            .count()
    }

    /// Run the chain against a candidate.
    pub fn evaluate(&self, candidate: &P, ordinal: usize, period: &Period<P>) -> FilterResult {
        for filter in &self.filters {
            match filter.check(candidate, ordinal, period) {
                FilterResult::Pass => continue,
                blocked => return blocked,
            }
        }
        FilterResult::Pass
    }
}
