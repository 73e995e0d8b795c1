//! Month grid for the calendar view.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Serialize, Serializer};

use crate::agenda::AgendaEvent;
use crate::error::QueryError;

/// A calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidMonth`] when `month` is not in `1..=12`
    /// or `year` is out of chrono's range.
    pub fn new(year: i32, month: u32) -> Result<Self, QueryError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(QueryError::InvalidMonth { year, month })
    }

    /// Month that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Following month; saturates at the end of chrono's range.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Preceding month; saturates at the start of chrono's range.
    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Every day of the month, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.first.iter_days().take_while(move |day| self.contains(*day))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for Month {
    type Err = QueryError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let format_error = || QueryError::MonthFormat(raw.to_string());
        let (year, month) = raw.split_once('-').ok_or_else(format_error)?;
        let year: i32 = year.parse().map_err(|_| format_error())?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        Self::new(year, month)
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One day cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    #[serde(serialize_with = "lex_core::dates::calendar_date::serialize")]
    pub date: NaiveDate,
    pub is_today: bool,
    /// Events dated this day, in input order.
    pub events: Vec<AgendaEvent>,
}

/// Seven cells, Sunday first; `None` pads days outside the month.
pub type Week = Vec<Option<CalendarDay>>;

/// Sunday-first month layout with events placed on their days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: Month,
    pub weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay out `month`, placing each event on its date.
    #[must_use]
    pub fn build(month: Month, events: &[AgendaEvent], today: NaiveDate) -> Self {
        let leading = month.first_day().weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<CalendarDay>> = std::iter::repeat_with(|| None).take(leading).collect();
        cells.extend(month.days().map(|date| {
            Some(CalendarDay {
                date,
                is_today: date == today,
                events: events.iter().filter(|event| event.date == date).cloned().collect(),
            })
        }));
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat_with(|| None).take(trailing));

        let mut weeks = Vec::with_capacity(cells.len() / 7);
        let mut cells = cells.into_iter();
        loop {
            let week: Week = cells.by_ref().take(7).collect();
            if week.is_empty() {
                break;
            }
            weeks.push(week);
        }

        Self { month, weeks }
    }

    #[must_use]
    pub fn next(&self) -> Month {
        self.month.next()
    }

    #[must_use]
    pub fn previous(&self) -> Month {
        self.month.previous()
    }

    /// Day cells only, skipping padding.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten().flatten()
    }
}

/// Build the grid for `year`/`month`.
///
/// # Errors
///
/// Returns [`QueryError::InvalidMonth`] when the pair does not name a month.
pub fn month_grid(
    year: i32,
    month: u32,
    events: &[AgendaEvent],
    today: NaiveDate,
) -> Result<MonthGrid, QueryError> {
    let month = Month::new(year, month)?;
    Ok(MonthGrid::build(month, events, today))
}
