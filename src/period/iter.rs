//! Std iterators over a borrowed period.

use super::{Cursor, Period};
use crate::core::Point;
use std::iter::FusedIterator;

/// Iterator over the points of a period.
///
/// Holds its own cursor, so any number of them can walk the same period at
/// once without disturbing the period's embedded cursor.
#[derive(Debug)]
pub struct Occurrences<'a, P: Point> {
    period: &'a Period<P>,
    cursor: Cursor<P>,
}

impl<'a, P: Point> Occurrences<'a, P> {
    pub(super) fn new(period: &'a Period<P>) -> Self {
        Self {
            period,
            cursor: Cursor::Uninitialized,
        }
    }

    /// Yield `(key, point)` pairs instead of bare points.
    ///
    /// Keys follow the period's numbering, so they skip over rejected
    /// candidates.
    pub fn keyed(self) -> Keyed<'a, P> {
        Keyed { inner: self }
    }

    fn step(&mut self) -> Option<(usize, P)> {
        self.cursor = self.period.next_cursor(&self.cursor);
        match &self.cursor {
            Cursor::Positioned { point, index, .. } => Some((*index, point.clone())),
            _ => None,
        }
    }
}

impl<P: Point> Iterator for Occurrences<'_, P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        self.step().map(|(_, point)| point)
    }
}

impl<P: Point> FusedIterator for Occurrences<'_, P> {}

/// Iterator over `(key, point)` pairs, see [`Occurrences::keyed`].
#[derive(Debug)]
pub struct Keyed<'a, P: Point> {
    inner: Occurrences<'a, P>,
}

impl<P: Point> Iterator for Keyed<'_, P> {
    type Item = (usize, P);

    fn next(&mut self) -> Option<(usize, P)> {
        self.inner.step()
    }
}

impl<P: Point> FusedIterator for Keyed<'_, P> {}

#[cfg(test)]
mod tests {
    use crate::core::{Interval, Options};
    use crate::filter::Filter;
    use crate::Period;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn iterators_are_independent() {
        let mut period = Period::new(day(1), Interval::days(1)).unwrap();
        period.set_recurrences(3);

        let mut a = period.iter();
        let mut b = period.iter();
        assert_eq!(a.next(), Some(day(1)));
        assert_eq!(a.next(), Some(day(2)));
        assert_eq!(b.next(), Some(day(1)));
        assert_eq!(a.next(), Some(day(3)));
        assert_eq!(a.next(), None);
        assert_eq!(a.next(), None);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn iteration_leaves_embedded_cursor_alone() {
        let mut period = Period::new(day(1), Interval::days(1)).unwrap();
        period.set_end(day(5));
        period.reset();
        period.advance();

        assert_eq!(period.iter().count(), 5);
        assert_eq!(period.current(), Some(&day(2)));
    }

    #[test]
    fn keyed_reports_period_keys() {
        let mut period = Period::new(day(1), Interval::days(1)).unwrap();
        period
            .set_end(day(6))
            .set_options(Options::EXCLUDE_START)
            .add_filter(Filter::when(|d: &NaiveDate| *d != day(3)));

        let pairs: Vec<_> = period.iter().keyed().collect();
        assert_eq!(pairs, vec![(0, day(2)), (2, day(4)), (3, day(5)), (4, day(6))]);
    }

    #[test]
    fn borrowed_period_is_into_iterator() {
        let mut period = Period::new(day(1), Interval::weeks(1)).unwrap();
        period.set_end(day(31));

        let mut count = 0;
        for _ in &period {
            count += 1;
        }
        assert_eq!(count, 5);
    }
}
