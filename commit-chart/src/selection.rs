use std::fmt;
use std::str::FromStr;

use calendar_grid::{day_at, day_count, enumerate_days, index_in, DaySet};
use chrono::NaiveDate;

use crate::error::{Error, Result};

/// The set of days marked on the chart of a year.
///
/// A selection can only hold days that belong to its year, it is the only
/// state that gets encoded into a transport string.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct ChartSelection {
    year: u16,
    days: DaySet,
}

impl ChartSelection {
    /// Create an empty selection for given year.
    ///
    /// Any year is accepted here, the range of years that can be encoded is
    /// only checked by [`ChartSelection::encode`].
    pub const fn new(year: u16) -> Self {
        Self { year, days: DaySet::new() }
    }

    /// Build a selection from one flag per day of the year, in chronological
    /// order. Missing flags are considered unselected.
    ///
    /// ```
    /// use commit_chart::ChartSelection;
    ///
    /// let flags = [true, false, false, true];
    /// let chart = ChartSelection::from_flags(2024, flags).unwrap();
    /// assert_eq!(chart.indices().collect::<Vec<_>>(), [0, 3]);
    ///
    /// let flags = std::iter::repeat(false).take(365).chain([true]);
    /// assert!(ChartSelection::from_flags(2023, flags).is_err());
    /// ```
    pub fn from_flags(year: u16, flags: impl IntoIterator<Item = bool>) -> Result<Self> {
        let mut res = Self::new(year);

        for (index, flag) in flags.into_iter().enumerate() {
            if flag {
                let index = u16::try_from(index)
                    .map_err(|_| Error::DateOutOfRange { year, index })?;

                res.insert(index)?;
            }
        }

        Ok(res)
    }

    /// Build a selection from a list of dates of the year.
    pub fn from_dates(year: u16, dates: impl IntoIterator<Item = NaiveDate>) -> Result<Self> {
        let mut res = Self::new(year);

        for date in dates {
            res.insert_date(date)?;
        }

        Ok(res)
    }

    /// The year this selection is for.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of days in the year of this selection.
    pub fn day_count(&self) -> u16 {
        day_count(self.year)
    }

    /// Mark the day at given position in the year, return `true` if it was
    /// not already marked.
    ///
    /// ```
    /// use commit_chart::{ChartSelection, Error};
    ///
    /// let mut chart = ChartSelection::new(2024);
    /// assert_eq!(chart.insert(365), Ok(true));
    /// assert_eq!(chart.insert(365), Ok(false));
    ///
    /// let mut chart = ChartSelection::new(2023);
    /// assert_eq!(chart.insert(365), Err(Error::DateOutOfRange { year: 2023, index: 365 }));
    /// ```
    pub fn insert(&mut self, index: u16) -> Result<bool> {
        if index >= self.day_count() {
            return Err(Error::DateOutOfRange { year: self.year, index: index.into() });
        }

        Ok(self.days.insert(index))
    }

    /// Mark a date, return `true` if it was not already marked.
    pub fn insert_date(&mut self, date: NaiveDate) -> Result<bool> {
        let index =
            index_in(self.year, date).ok_or(Error::DateNotInYear { year: self.year, date })?;

        Ok(self.days.insert(index))
    }

    /// Unmark the day at given position, return `true` if it was marked.
    pub fn remove(&mut self, index: u16) -> bool {
        self.days.contains(index) && self.days.remove(index)
    }

    /// Flip the state of the day at given position and return its new state.
    ///
    /// ```
    /// use commit_chart::ChartSelection;
    ///
    /// let mut chart = ChartSelection::new(2024);
    /// assert_eq!(chart.toggle(42), Ok(true));
    /// assert_eq!(chart.toggle(42), Ok(false));
    /// assert!(chart.is_empty());
    /// ```
    pub fn toggle(&mut self, index: u16) -> Result<bool> {
        if self.remove(index) {
            Ok(false)
        } else {
            self.insert(index)
        }
    }

    /// Check if the day at given position is marked.
    pub fn contains(&self, index: u16) -> bool {
        self.days.contains(index)
    }

    /// Check if a date is marked, dates from other years are never marked.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        index_in(self.year, date).is_some_and(|index| self.days.contains(index))
    }

    /// Number of marked days.
    pub fn len(&self) -> usize {
        self.days.count().into()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Position of the last marked day, if any.
    pub fn last(&self) -> Option<u16> {
        self.days.last()
    }

    /// Iterate over positions of marked days, in increasing order.
    pub fn indices(&self) -> impl Iterator<Item = u16> + '_ {
        self.days.iter()
    }

    /// Iterate over marked dates, in chronological order.
    ///
    /// ```
    /// use commit_chart::ChartSelection;
    /// use chrono::NaiveDate;
    ///
    /// let mut chart = ChartSelection::new(2024);
    /// chart.insert(59).unwrap();
    /// chart.insert(0).unwrap();
    ///
    /// assert_eq!(
    ///     chart.dates().collect::<Vec<_>>(),
    ///     [
    ///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    ///     ],
    /// );
    /// ```
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|index| {
            day_at(self.year, index).expect("selection holds a day out of its year")
        })
    }

    /// One flag per day of the year, in chronological order.
    pub fn to_flags(&self) -> Vec<bool> {
        enumerate_days(self.year)
            .map(|day| self.days.contains(day.index))
            .collect()
    }

    /// Encode this selection into a transport string.
    ///
    /// ```
    /// use commit_chart::ChartSelection;
    ///
    /// let mut chart = ChartSelection::new(2024);
    /// chart.insert(0).unwrap();
    /// chart.insert(7).unwrap();
    /// assert_eq!(chart.encode().unwrap(), "0B-iB");
    /// ```
    pub fn encode(&self) -> Result<String> {
        crate::encode(self)
    }

    /// Decode a selection from a transport string.
    pub fn decode(text: &str) -> Result<Self> {
        crate::decode(text)
    }
}

impl FromStr for ChartSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Debug for ChartSelection {
    /// ```
    /// use commit_chart::ChartSelection;
    ///
    /// let mut chart = ChartSelection::new(2022);
    /// chart.insert(31).unwrap();
    /// chart.insert(2).unwrap();
    ///
    /// assert_eq!(
    ///     format!("{chart:?}"),
    ///     "ChartSelection { year: 2022, days: {2022-01-03, 2022-02-01} }",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugDays<'a>(&'a ChartSelection);

        impl fmt::Debug for DebugDays<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.0.dates()).finish()
            }
        }

        f.debug_struct("ChartSelection")
            .field("year", &self.year)
            .field("days", &DebugDays(self))
            .finish()
    }
}
