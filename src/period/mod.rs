//! The period: configuration plus the iteration state machine.
//!
//! Advancing is split in two halves, following the pure core style of the
//! rest of the crate. `next_cursor` computes the following cursor from a
//! borrowed period without touching it, and `advance` stores the result.
//! Filters receive `&Period` while the next cursor is being computed.

mod cursor;
pub mod error;
mod iter;

pub use cursor::Cursor;
pub use error::ConfigError;
pub use iter::{Keyed, Occurrences};

use crate::core::{Options, Point};
use crate::filter::{Filter, FilterChain, FilterResult};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// A recurring sequence of points.
///
/// A period starts at `start`, moves forward by `interval` and stops at an
/// optional `end`, at the recurrence limit, or when a filter terminates it.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use recur::core::{Interval, Options};
/// use recur::Period;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
///
/// let mut period = Period::new(day(1), Interval::days(2)).unwrap();
/// period.set_end(day(10));
/// period.set_options(Options::EXCLUDE_END);
///
/// let days: Vec<_> = period.iter().collect();
/// assert_eq!(days, vec![day(1), day(3), day(5), day(7), day(9)]);
/// ```
#[derive(Clone, Debug)]
pub struct Period<P: Point> {
    start: P,
    end: Option<P>,
    interval: P::Step,
    options: Options,
    filters: FilterChain<P>,
    cursor: Cursor<P>,
}

impl<P: Point> Period<P> {
    /// Create a period with no end, no filters and no exclusions.
    ///
    /// Fails when the point type rejects `interval`, see
    /// [`Point::check_step`]. An interval that would never move the cursor
    /// is [`ConfigError::EmptyInterval`].
    pub fn new(start: P, interval: P::Step) -> Result<Self, ConfigError> {
        P::check_step(&interval)?;
        Ok(Self {
            start,
            end: None,
            interval,
            options: Options::NONE,
            filters: FilterChain::new(),
            cursor: Cursor::Uninitialized,
        })
    }

    /// Get the first point of the raw sequence.
    pub fn start(&self) -> &P {
        &self.start
    }

    /// Replace the start point.
    pub fn set_start(&mut self, start: P) -> &mut Self {
        self.start = start;
        self.invalidate()
    }

    /// Get the end boundary, if any.
    pub fn end(&self) -> Option<&P> {
        self.end.as_ref()
    }

    /// Bound the period at `end`.
    pub fn set_end(&mut self, end: P) -> &mut Self {
        self.end = Some(end);
        self.invalidate()
    }

    /// Remove the end boundary.
    pub fn clear_end(&mut self) -> &mut Self {
        self.end = None;
        self.invalidate()
    }

    /// Get the step between points.
    pub fn interval(&self) -> &P::Step {
        &self.interval
    }

    /// Change the step. A step the point type rejects leaves the period
    /// unchanged.
    pub fn set_interval(&mut self, interval: P::Step) -> Result<&mut Self, ConfigError> {
        P::check_step(&interval)?;
        self.interval = interval;
        Ok(self.invalidate())
    }

    /// Get the boundary exclusion flags.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Replace every exclusion flag at once.
    pub fn set_options(&mut self, options: Options) -> &mut Self {
        self.options = options;
        self.invalidate()
    }

    /// Toggle exclusion of the start point.
    pub fn exclude_start(&mut self, exclude: bool) -> &mut Self {
        self.options.set(Options::EXCLUDE_START, exclude);
        self.invalidate()
    }

    /// Toggle exclusion of the end point.
    pub fn exclude_end(&mut self, exclude: bool) -> &mut Self {
        self.options.set(Options::EXCLUDE_END, exclude);
        self.invalidate()
    }

    /// Check if the start point is left out of the sequence.
    pub fn has_start_excluded(&self) -> bool {
        self.options.contains(Options::EXCLUDE_START)
    }

    /// Check if a candidate equal to the end is out of range.
    pub fn has_end_excluded(&self) -> bool {
        self.options.contains(Options::EXCLUDE_END)
    }

    /// Get the filter chain.
    pub fn filters(&self) -> &FilterChain<P> {
        &self.filters
    }

    /// Append a filter to the chain.
    pub fn add_filter(&mut self, filter: Filter<P>) -> &mut Self {
        self.filters.push(filter);
        self.invalidate()
    }

    /// Append a three-way predicate to the chain.
    pub fn filter<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&P, usize, &Period<P>) -> FilterResult + Send + Sync + 'static,
    {
        self.add_filter(Filter::new(predicate))
    }

    /// Remove every filter, the recurrence filter included.
    pub fn reset_filters(&mut self) -> &mut Self {
        self.filters.clear();
        self.invalidate()
    }

    /// Limit the period to `limit` occurrences, replacing any previous
    /// limit.
    pub fn set_recurrences(&mut self, limit: usize) -> &mut Self {
        self.filters.set_recurrences(limit);
        self.invalidate()
    }

    /// Get the installed recurrence limit.
    pub fn recurrences(&self) -> Option<usize> {
        self.filters.recurrences()
    }

    /// Check if `candidate` lies past the end boundary.
    pub fn is_beyond_end(&self, candidate: &P) -> bool {
        match &self.end {
            None => false,
            Some(end) if self.has_end_excluded() => candidate >= end,
            Some(end) => candidate > end,
        }
    }

    /// Check a candidate against the filter chain, then the end boundary.
    ///
    /// A `Terminate` from the chain wins without consulting the boundary. A
    /// candidate past the end terminates even if a filter rejected it.
    pub fn check(&self, candidate: &P, ordinal: usize) -> FilterResult {
        match self.filters.evaluate(candidate, ordinal, self) {
            FilterResult::Terminate => FilterResult::Terminate,
            _ if self.is_beyond_end(candidate) => FilterResult::Terminate,
            result => result,
        }
    }

    /// Position on the first point of the sequence.
    pub fn reset(&mut self) {
        self.cursor = self.first_cursor();
        debug!(
            start = ?self.start,
            index = ?self.cursor.index(),
            "period reset"
        );
    }

    /// Move to the next valid point. Does nothing once exhausted.
    pub fn advance(&mut self) {
        if self.cursor.is_exhausted() {
            return;
        }
        self.cursor = self.next_cursor(&self.cursor);
    }

    /// Get the current point (pure).
    pub fn current(&self) -> Option<&P> {
        self.cursor.point()
    }

    /// Get the key of the current point.
    pub fn key(&self) -> Option<usize> {
        self.cursor.index()
    }

    /// Check if the cursor sits on a point.
    pub fn is_valid(&self) -> bool {
        self.cursor.is_positioned()
    }

    /// Get the embedded cursor.
    pub fn cursor(&self) -> &Cursor<P> {
        &self.cursor
    }

    /// Iterate the period with an independent cursor.
    pub fn iter(&self) -> Occurrences<'_, P> {
        Occurrences::new(self)
    }

    /// Compute the cursor that follows `cursor` (pure).
    pub fn next_cursor(&self, cursor: &Cursor<P>) -> Cursor<P> {
        match cursor {
            Cursor::Uninitialized => self.first_cursor(),
            Cursor::Positioned { point, ordinal, .. } => self.seek(point.clone(), *ordinal),
            Cursor::Exhausted => Cursor::Exhausted,
        }
    }

    fn first_cursor(&self) -> Cursor<P> {
        let start = self.start.clone();
        if self.has_start_excluded() {
            return self.seek(start, 0);
        }
        match self.check(&start, 0) {
            FilterResult::Pass => self.positioned(start, 0),
            FilterResult::Reject => {
                trace!(candidate = ?start, "start rejected");
                self.seek(start, 0)
            }
            FilterResult::Terminate => {
                debug!(start = ?start, "period terminated at start");
                Cursor::Exhausted
            }
        }
    }

    /// Step forward from `base` until a candidate passes or iteration
    /// terminates. Rejected candidates become the base of the next step.
    fn seek(&self, mut base: P, mut ordinal: usize) -> Cursor<P> {
        loop {
            let Some(candidate) = base.advance(&self.interval) else {
                warn!(base = ?base, interval = ?self.interval, "interval cannot be advanced from this point, period exhausted");
                return Cursor::Exhausted;
            };
            if candidate.partial_cmp(&base) != Some(Ordering::Greater) {
                warn!(base = ?base, interval = ?self.interval, "interval does not move the point forward, period exhausted");
                return Cursor::Exhausted;
            }
            let Some(next) = ordinal.checked_add(1) else {
                return Cursor::Exhausted;
            };
            ordinal = next;

            match self.check(&candidate, ordinal) {
                FilterResult::Pass => return self.positioned(candidate, ordinal),
                FilterResult::Reject => {
                    trace!(ordinal, candidate = ?candidate, "candidate rejected");
                    base = candidate;
                }
                FilterResult::Terminate => {
                    debug!(ordinal, candidate = ?candidate, "period exhausted");
                    return Cursor::Exhausted;
                }
            }
        }
    }

    fn positioned(&self, point: P, ordinal: usize) -> Cursor<P> {
        let skipped = usize::from(self.has_start_excluded());
        Cursor::Positioned {
            point,
            index: ordinal.saturating_sub(skipped),
            ordinal,
        }
    }

    fn invalidate(&mut self) -> &mut Self {
        self.cursor = Cursor::Uninitialized;
        self
    }
}

impl<'a, P: Point> IntoIterator for &'a Period<P> {
    type Item = P;
    type IntoIter = Occurrences<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Interval;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn daily() -> Period<NaiveDate> {
        Period::new(day(1), Interval::days(1)).unwrap()
    }

    fn drain(period: &mut Period<NaiveDate>) -> Vec<(usize, NaiveDate)> {
        let mut out = Vec::new();
        period.reset();
        while let (Some(key), Some(point)) = (period.key(), period.current()) {
            out.push((key, *point));
            period.advance();
        }
        out
    }

    #[test]
    fn empty_interval_is_rejected() {
        let result = Period::new(day(1), Interval::days(0));
        assert_eq!(result.err(), Some(ConfigError::EmptyInterval));

        let mut period = daily();
        assert!(period.set_interval(Interval::months(0)).is_err());
        assert_eq!(period.interval(), &Interval::days(1));
    }

    #[test]
    fn starts_uninitialized() {
        let period = daily();
        assert_eq!(period.cursor(), &Cursor::Uninitialized);
        assert!(!period.is_valid());
        assert_eq!(period.current(), None);
        assert_eq!(period.key(), None);
    }

    #[test]
    fn advance_from_uninitialized_positions_on_first_point() {
        let mut period = daily();
        period.advance();
        assert_eq!(period.current(), Some(&day(1)));
        assert_eq!(period.key(), Some(0));
    }

    #[test]
    fn recurrences_limit_yields_exact_count() {
        let mut period = daily();
        period.set_recurrences(5);

        let points = drain(&mut period);
        assert_eq!(
            points,
            vec![(0, day(1)), (1, day(2)), (2, day(3)), (3, day(4)), (4, day(5))]
        );
        assert!(!period.is_valid());
    }

    #[test]
    fn excluded_start_consumes_a_recurrence() {
        let mut period = daily();
        period.set_recurrences(5).exclude_start(true);

        let points = drain(&mut period);
        assert_eq!(
            points,
            vec![(0, day(2)), (1, day(3)), (2, day(4)), (3, day(5))]
        );
    }

    #[test]
    fn excluded_end_stops_before_boundary() {
        let mut period = Period::new(day(1), Interval::days(2)).unwrap();
        period.set_end(day(9)).exclude_end(true);

        let points: Vec<_> = drain(&mut period).into_iter().map(|(_, d)| d).collect();
        assert_eq!(points, vec![day(1), day(3), day(5), day(7)]);
    }

    #[test]
    fn included_end_is_yielded() {
        let mut period = Period::new(day(1), Interval::days(2)).unwrap();
        period.set_end(day(9));

        let points = drain(&mut period);
        assert_eq!(points.last(), Some(&(4, day(9))));
    }

    #[test]
    fn rejected_points_are_skipped_with_keys_preserved() {
        let mut period = daily();
        period.set_end(day(5));
        period.add_filter(Filter::when(|d: &NaiveDate| d.day() % 2 == 1));

        let points = drain(&mut period);
        assert_eq!(points, vec![(0, day(1)), (2, day(3)), (4, day(5))]);
    }

    #[test]
    fn rejected_start_moves_to_next_valid_point() {
        let mut period = daily();
        period.set_end(day(4));
        period.add_filter(Filter::when(|d: &NaiveDate| *d != day(1)));

        period.reset();
        assert_eq!(period.current(), Some(&day(2)));
        assert_eq!(period.key(), Some(1));
    }

    #[test]
    fn filter_terminate_stops_before_index() {
        let mut period = daily();
        period.filter(|_, ordinal, _| {
            if ordinal == 3 {
                FilterResult::Terminate
            } else {
                FilterResult::Pass
            }
        });

        let keys: Vec<_> = drain(&mut period).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn rejected_candidate_past_end_terminates() {
        let mut period = daily();
        period.set_end(day(3));
        period.add_filter(Filter::when(|d: &NaiveDate| *d < day(2)));

        assert_eq!(drain(&mut period), vec![(0, day(1))]);
    }

    #[test]
    fn filter_terminate_takes_precedence_over_end() {
        let mut period = daily();
        period.set_end(day(2));
        period.filter(|_, _, _| FilterResult::Terminate);

        period.reset();
        assert_eq!(period.cursor(), &Cursor::Exhausted);
    }

    #[test]
    fn start_past_excluded_end_is_exhausted() {
        let mut period = daily();
        period.set_end(day(1)).exclude_end(true);

        period.reset();
        assert!(!period.is_valid());
    }

    #[test]
    fn end_before_start_yields_nothing() {
        let mut period = Period::new(day(10), Interval::days(1)).unwrap();
        period.set_end(day(1));
        assert_eq!(period.iter().count(), 0);
    }

    #[test]
    fn excluded_start_and_end_on_adjacent_points() {
        let mut period = daily();
        period
            .set_end(day(2))
            .set_options(Options::EXCLUDE_START | Options::EXCLUDE_END);

        assert!(drain(&mut period).is_empty());
    }

    #[test]
    fn advance_after_exhaustion_is_noop() {
        let mut period = daily();
        period.set_recurrences(1);
        period.reset();
        period.advance();
        assert!(period.cursor().is_exhausted());

        period.advance();
        assert!(period.cursor().is_exhausted());
        assert_eq!(period.current(), None);
    }

    #[test]
    fn reset_reproduces_sequence() {
        let mut period = daily();
        period.set_end(day(20));
        period.add_filter(Filter::when(|d: &NaiveDate| d.day() % 3 != 0));

        let first = drain(&mut period);
        let second = drain(&mut period);
        assert_eq!(first, second);
    }

    #[test]
    fn configuration_change_invalidates_cursor() {
        let mut period = daily();
        period.reset();
        assert!(period.is_valid());

        period.set_recurrences(2);
        assert_eq!(period.cursor(), &Cursor::Uninitialized);
    }

    #[test]
    fn reset_filters_drops_recurrences() {
        let mut period = daily();
        period.set_end(day(4)).set_recurrences(2);
        period.reset_filters();

        assert_eq!(period.recurrences(), None);
        assert_eq!(drain(&mut period).len(), 4);
    }

    #[test]
    fn end_and_recurrences_first_limit_wins() {
        let mut period = daily();
        period.set_end(day(3)).set_recurrences(10);
        assert_eq!(period.iter().count(), 3);

        period.set_recurrences(2);
        assert_eq!(period.iter().count(), 2);
    }

    #[test]
    fn overflowing_step_exhausts() {
        let mut period = Period::new(NaiveDate::MAX, Interval::days(1)).unwrap();
        period.reset();
        assert_eq!(period.current(), Some(&NaiveDate::MAX));

        period.advance();
        assert!(period.cursor().is_exhausted());
    }

    #[test]
    fn sub_day_step_on_dates_is_rejected() {
        let result = Period::new(day(1), Interval::hours(1));
        assert_eq!(result.err(), Some(ConfigError::EmptyInterval));

        let result = Period::new(day(1), Interval::hours(36));
        assert_eq!(result.err(), Some(ConfigError::PartialDayInterval));
    }

    #[test]
    fn set_interval_checks_the_point_type() {
        let mut period = daily();
        period.reset();

        assert_eq!(period.set_interval(Interval::hours(5)).err(), Some(ConfigError::EmptyInterval));
        assert_eq!(period.interval(), &Interval::days(1));
        assert!(period.is_valid());

        period.set_interval(Interval::hours(48)).unwrap().set_end(day(5));
        assert_eq!(period.iter().collect::<Vec<_>>(), vec![day(1), day(3), day(5)]);
    }

    #[test]
    fn sub_day_step_on_datetimes_is_accepted() {
        let start = day(1).and_hms_opt(0, 0, 0).unwrap();
        let mut period = Period::new(start, Interval::hours(5)).unwrap();
        period.set_recurrences(3);

        let hours: Vec<_> = period.iter().map(|t| t.time().hour()).collect();
        assert_eq!(hours, vec![0, 5, 10]);
    }
}
