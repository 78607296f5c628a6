//! Builder for constructing periods.

use crate::builder::error::BuildError;
use crate::core::{Options, Point};
use crate::filter::{Filter, FilterChain, FilterResult};
use crate::period::{ConfigError, Period};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing periods with a fluent API.
///
/// Filters and the recurrence limit are installed in call order. When no
/// interval is given the step type's default is used (one day for
/// [`Interval`](crate::core::Interval)).
pub struct PeriodBuilder<P: Point> {
    start: Option<P>,
    end: Option<P>,
    interval: Option<P::Step>,
    options: Options,
    filters: FilterChain<P>,
}

impl<P: Point> PeriodBuilder<P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            end: None,
            interval: None,
            options: Options::NONE,
            filters: FilterChain::new(),
        }
    }

    /// Set the start point (required).
    pub fn start(mut self, start: P) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end point (optional).
    pub fn end(mut self, end: P) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the step (optional).
    pub fn interval(mut self, interval: P::Step) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Limit the number of occurrences (optional).
    pub fn recurrences(mut self, limit: usize) -> Self {
        self.filters.set_recurrences(limit);
        self
    }

    /// Replace every exclusion flag at once.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Leave the start point out of the sequence.
    pub fn exclude_start(mut self) -> Self {
        self.options |= Options::EXCLUDE_START;
        self
    }

    /// Treat a candidate equal to the end as out of range.
    pub fn exclude_end(mut self) -> Self {
        self.options |= Options::EXCLUDE_END;
        self
    }

    /// Add a pre-built filter.
    pub fn add_filter(mut self, filter: Filter<P>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a three-way predicate.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&P, usize, &Period<P>) -> FilterResult + Send + Sync + 'static,
    {
        self.add_filter(Filter::new(predicate))
    }

    /// Add a pass/reject predicate on the point alone.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&P) -> bool + Send + Sync + 'static,
    {
        self.add_filter(Filter::when(predicate))
    }

    /// Check every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.start.is_some() {
            Validation::success(())
        } else {
            Validation::fail(ConfigError::MissingStart)
        });

        let interval = self.interval.clone().unwrap_or_default();
        checks.push(match P::check_step(&interval) {
            Ok(()) => Validation::success(()),
            Err(error) => Validation::fail(error),
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the period.
    /// Returns every violated rule if the configuration is invalid.
    pub fn build(self) -> Result<Period<P>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildError::InvalidConfiguration(
                errors.iter().cloned().collect(),
            ));
        }

        let start = self
            .start
            .ok_or_else(|| BuildError::InvalidConfiguration(vec![ConfigError::MissingStart]))?;
        let interval = self.interval.unwrap_or_default();
        let mut period = Period::new(start, interval)
            .map_err(|error| BuildError::InvalidConfiguration(vec![error]))?;

        if let Some(end) = self.end {
            period.set_end(end);
        }
        period.set_options(self.options);
        for filter in self.filters.iter() {
            period.add_filter(filter.clone());
        }

        Ok(period)
    }
}

impl<P: Point> Default for PeriodBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
