#![doc = include_str!("../README.md")]

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

/// Number of 64 bits words used by a [`DaySet`].
const WORDS: usize = 6;

/// Number of day indices a [`DaySet`] can hold, enough for any year.
pub const CAPACITY: u16 = 64 * WORDS as u16;

/// A day of a calendar year along with its chronological position in this year.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CalendarDay {
    /// Position of the day in the year, starting from 0 on January 1st.
    pub index: u16,
    pub date: NaiveDate,
}

impl CalendarDay {
    /// Get the day at given position in a year, if the year is long enough.
    ///
    /// ```
    /// use calendar_grid::CalendarDay;
    /// use chrono::NaiveDate;
    ///
    /// let day = CalendarDay::new(2023, 364).unwrap();
    /// assert_eq!(day.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    /// assert!(CalendarDay::new(2023, 365).is_none());
    /// ```
    pub fn new(year: u16, index: u16) -> Option<Self> {
        let date = day_at(year, index)?;
        Some(Self { index, date })
    }
}

fn first_day(year: u16) -> NaiveDate {
    NaiveDate::from_ymd_opt(year.into(), 1, 1).expect("chrono should support any u16 year")
}

/// Get the date at given position in a year.
///
/// The date is computed by moving `index` days forward from January 1st, it is
/// rejected if it falls into the next year.
///
/// ```
/// use calendar_grid::day_at;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_at(2024, 0), NaiveDate::from_ymd_opt(2024, 1, 1));
/// assert_eq!(day_at(2024, 365), NaiveDate::from_ymd_opt(2024, 12, 31));
/// assert_eq!(day_at(2023, 365), None);
/// assert_eq!(day_at(2023, u16::MAX), None);
/// ```
pub fn day_at(year: u16, index: u16) -> Option<NaiveDate> {
    let date = first_day(year).checked_add_days(Days::new(index.into()))?;
    (date.year() == i32::from(year)).then_some(date)
}

/// Get the position of a date in given year, or `None` if the date belongs to another year.
///
/// ```
/// use calendar_grid::index_in;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// assert_eq!(index_in(2023, date), Some(59));
/// assert_eq!(index_in(2024, date), None);
/// ```
pub fn index_in(year: u16, date: NaiveDate) -> Option<u16> {
    (date.year() == i32::from(year)).then(|| date.ordinal0() as u16)
}

/// Get the year of a date and its position in this year, if the year fits in
/// 16 bits.
///
/// ```
/// use calendar_grid::index_of;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// assert_eq!(index_of(date), Some((2024, 365)));
///
/// let date = NaiveDate::from_ymd_opt(-4, 1, 1).unwrap();
/// assert_eq!(index_of(date), None);
/// ```
pub fn index_of(date: NaiveDate) -> Option<(u16, u16)> {
    let year = u16::try_from(date.year()).ok()?;
    Some((year, date.ordinal0() as u16))
}

/// Count the number of days in a year.
///
/// ```
/// use calendar_grid::day_count;
///
/// assert_eq!(day_count(2023), 365);
/// assert_eq!(day_count(2024), 366);
/// assert_eq!(day_count(1900), 365);
/// assert_eq!(day_count(2000), 366);
/// ```
pub fn day_count(year: u16) -> u16 {
    match day_at(year, 365) {
        Some(_) => 366,
        None => 365,
    }
}

/// Iterate over all the days of a year in chronological order.
///
/// ```
/// use calendar_grid::enumerate_days;
/// use chrono::NaiveDate;
///
/// let days: Vec<_> = enumerate_days(2024).collect();
/// assert_eq!(days.len(), 366);
/// assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(days[365].date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// assert!(days.iter().enumerate().all(|(i, day)| usize::from(day.index) == i));
/// ```
pub fn enumerate_days(year: u16) -> impl Iterator<Item = CalendarDay> + Clone {
    first_day(year)
        .iter_days()
        .take_while(move |date| date.year() == i32::from(year))
        .zip(0..)
        .map(|(date, index)| CalendarDay { index, date })
}

/// A compact set of day indices, using u64-based bit arrays.
///
/// Any index of any year fits in this set: it can hold indices in
/// `0..CAPACITY`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct DaySet([u64; WORDS]);

impl DaySet {
    /// Create a new set that does not include any day.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let days = DaySet::new();
    /// assert!(days.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self([0; WORDS])
    }

    fn position(index: u16) -> (usize, u64) {
        assert!(index < CAPACITY, "day index {index} exceeds set capacity");
        (usize::from(index / 64), 1 << (index % 64))
    }

    /// Include a day in this set, return `true` if it was not already included.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// assert!(days.insert(365));
    /// assert!(!days.insert(365));
    /// assert!(days.insert(3));
    /// assert_eq!(days.count(), 2);
    /// ```
    pub fn insert(&mut self, index: u16) -> bool {
        let (word, mask) = Self::position(index);
        let inserted = self.0[word] & mask == 0;
        self.0[word] |= mask;
        inserted
    }

    /// Exclude a day from this set, return `true` if it was included.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(64);
    /// assert!(days.remove(64));
    /// assert!(!days.remove(64));
    /// assert!(days.is_empty());
    /// ```
    pub fn remove(&mut self, index: u16) -> bool {
        let (word, mask) = Self::position(index);
        let removed = self.0[word] & mask != 0;
        self.0[word] &= !mask;
        removed
    }

    /// Check if this set includes given day. Indices out of the capacity of the
    /// set are never included.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// days.insert(0);
    /// days.insert(127);
    ///
    /// assert!(days.contains(0));
    /// assert!(days.contains(127));
    /// assert!(!days.contains(128));
    /// assert!(!days.contains(u16::MAX));
    /// ```
    pub fn contains(&self, index: u16) -> bool {
        index < CAPACITY && {
            let (word, mask) = Self::position(index);
            self.0[word] & mask != 0
        }
    }

    /// Iterate over the days included in this set, in increasing order.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let days: DaySet = [300, 2, 64, 63].into_iter().collect();
    /// assert_eq!(days.iter().collect::<Vec<_>>(), [2, 63, 64, 300]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.0.iter().enumerate().flat_map(|(i, &word)| {
            let offset = 64 * i as u16;
            let mut val = word;

            std::iter::from_fn(move || {
                if val != 0 {
                    let bit = val.trailing_zeros();
                    val ^= 1 << bit;
                    Some(offset + bit as u16)
                } else {
                    None
                }
            })
        })
    }

    /// Get the smallest day included in this set if it is not empty.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// assert_eq!(days.first(), None);
    ///
    /// days.insert(200);
    /// days.insert(70);
    /// assert_eq!(days.first(), Some(70));
    /// ```
    pub fn first(&self) -> Option<u16> {
        self.0.iter().enumerate().find_map(|(i, &word)| {
            (word != 0).then(|| 64 * i as u16 + word.trailing_zeros() as u16)
        })
    }

    /// Get the largest day included in this set if it is not empty.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let mut days = DaySet::new();
    /// assert_eq!(days.last(), None);
    ///
    /// days.insert(70);
    /// days.insert(365);
    /// days.insert(200);
    /// assert_eq!(days.last(), Some(365));
    /// ```
    pub fn last(&self) -> Option<u16> {
        self.0.iter().enumerate().rev().find_map(|(i, &word)| {
            (word != 0).then(|| 64 * i as u16 + 63 - word.leading_zeros() as u16)
        })
    }

    /// Count the number of days included in this set.
    ///
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let days: DaySet = (0..100).collect();
    /// assert_eq!(days.count(), 100);
    /// ```
    pub fn count(&self) -> u16 {
        self.0.iter().map(|word| word.count_ones() as u16).sum()
    }

    /// Check if this set doesn't include any day.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }
}

impl FromIterator<u16> for DaySet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl Extend<u16> for DaySet {
    fn extend<I: IntoIterator<Item = u16>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl fmt::Debug for DaySet {
    /// ```
    /// use calendar_grid::DaySet;
    ///
    /// let days: DaySet = [12, 4].into_iter().collect();
    /// assert_eq!(format!("{days:?}"), "{4, 12}");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
