//! Clock times, time ranges and opening-hour lookups.
//!
//! Opening hours and temporary stops are stored as the raw tokens they were
//! registered with (`"hh:mm-hh:mm"` or the sentinel `"-"`). Tokens are only
//! parsed when a reservation is checked against them, and a token that does
//! not parse never matches.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

#[cfg(test)]
mod proptests;

/// An absolute simulated day number. Day 1 is the first day of the run.
pub type Day = i64;

/// Sentinel token meaning "nothing recorded" in hours and stop slots.
pub const NO_RANGE: &str = "-";

/// Number of temporary stop slots a restaurant carries.
pub const STOP_SLOTS: usize = 7;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Returns the weekday whose opening hours apply to `date`.
///
/// Day 1 is a Monday and the week repeats every 7 days.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use seating::hours::weekday_for;
///
/// assert_eq!(weekday_for(1), Weekday::Mon);
/// assert_eq!(weekday_for(7), Weekday::Sun);
/// assert_eq!(weekday_for(8), Weekday::Mon);
/// ```
#[must_use]
pub fn weekday_for(date: Day) -> Weekday {
    // rem_euclid keeps the index in 0..7 for dates below 1
    let index = (date - 1).rem_euclid(7);
    WEEK[usize::try_from(index).unwrap_or(0)]
}

/// A time of day at minute resolution.
///
/// Parsed from `"hh:mm"`. Hours and minutes are plain integers; values such
/// as `24:00` are accepted so that a range can close at midnight.
///
/// # Examples
///
/// ```
/// use seating::hours::ClockTime;
///
/// let t: ClockTime = "09:30".parse().unwrap();
/// assert_eq!(t.minutes(), 570);
/// assert_eq!(t.to_string(), "09:30");
/// assert!("9h30".parse::<ClockTime>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Creates a clock time from hours and minutes.
    #[must_use]
    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        Self(hour * 60 + minute)
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    /// The hour component.
    #[must_use]
    pub const fn hour(self) -> u32 {
        self.0 / 60
    }

    /// The minute component.
    #[must_use]
    pub const fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for ClockTime {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(hour), Some(minute), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(InvalidTimeError::new(s, "expected hh:mm"));
        };

        let hour: u32 = hour
            .parse()
            .map_err(|_| InvalidTimeError::new(s, "hour is not a number"))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| InvalidTimeError::new(s, "minute is not a number"))?;

        hour.checked_mul(60)
            .and_then(|h| h.checked_add(minute))
            .map(Self)
            .ok_or_else(|| InvalidTimeError::new(s, "time is out of range"))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Error type for malformed time and time-range tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeError {
    /// The token that failed to parse.
    pub value: String,
    /// The reason the token is invalid.
    pub reason: String,
}

impl InvalidTimeError {
    fn new(value: &str, reason: &str) -> Self {
        Self {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for InvalidTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time format {:?}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidTimeError {}

/// A half-open time range `[start, end)`.
///
/// Parsing is tolerant of extra separators: the first `-` separated segment
/// is the start and the last one is the end, anything in between is
/// discarded.
///
/// # Examples
///
/// ```
/// use seating::hours::{ClockTime, TimeRange};
///
/// let range: TimeRange = "09:00-17:00".parse().unwrap();
/// assert!(range.contains(ClockTime::from_hm(9, 0)));
/// assert!(!range.contains(ClockTime::from_hm(17, 0)));
///
/// let tolerant: TimeRange = "09:00-12:00-17:00".parse().unwrap();
/// assert_eq!(tolerant, range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    start: ClockTime,
    end: ClockTime,
}

impl TimeRange {
    /// Creates a range from its bounds.
    #[must_use]
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Inclusive start of the range.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    /// Exclusive end of the range.
    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns `true` if `time` is in `[start, end)`.
    #[must_use]
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time < self.end
    }
}

impl FromStr for TimeRange {
    type Err = InvalidTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('-');
        let start = segments.next().unwrap_or_default();
        let end = segments.last().unwrap_or(start);

        let start = start
            .parse()
            .map_err(|e: InvalidTimeError| InvalidTimeError::new(s, &e.reason))?;
        let end = end
            .parse()
            .map_err(|e: InvalidTimeError| InvalidTimeError::new(s, &e.reason))?;

        Ok(Self { start, end })
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Returns `true` if any token in `tokens` is a range containing `time`.
///
/// Sentinel tokens are skipped. Malformed tokens fail closed: they are
/// logged and treated as non-matching.
pub fn any_range_contains<'a, I>(tokens: I, time: ClockTime) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .filter(|token| *token != NO_RANGE)
        .any(|token| match token.parse::<TimeRange>() {
            Ok(range) => range.contains(time),
            Err(e) => {
                log::warn!("ignoring time range: {e}");
                false
            }
        })
}

/// Opening hours for each day of the week.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use seating::hours::{ClockTime, WeeklyHours};
///
/// let hours = WeeklyHours::every_day(&["10:00-14:00", "18:00-22:00"]);
/// assert!(hours.is_open(Weekday::Tue, ClockTime::from_hm(19, 0)));
/// assert!(!hours.is_open(Weekday::Tue, ClockTime::from_hm(15, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyHours {
    days: [Vec<String>; 7],
}

impl WeeklyHours {
    /// Creates opening hours from one token list per weekday, Monday first.
    #[must_use]
    pub const fn new(days: [Vec<String>; 7]) -> Self {
        Self { days }
    }

    /// Uses the same tokens for every day of the week.
    #[must_use]
    pub fn every_day(tokens: &[&str]) -> Self {
        let day: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        Self {
            days: std::array::from_fn(|_| day.clone()),
        }
    }

    /// Replaces the tokens for a single weekday.
    #[must_use]
    pub fn with_day(mut self, weekday: Weekday, tokens: &[&str]) -> Self {
        self.days[weekday.num_days_from_monday() as usize] =
            tokens.iter().map(ToString::to_string).collect();
        self
    }

    /// The raw tokens recorded for `weekday`.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &[String] {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Returns `true` if one of the ranges for `weekday` contains `time`.
    #[must_use]
    pub fn is_open(&self, weekday: Weekday, time: ClockTime) -> bool {
        any_range_contains(self.day(weekday).iter().map(String::as_str), time)
    }
}

/// Temporary stop overrides, one slot per absolute day 1 through 7.
///
/// Slots are not weekday based: a stop set for day 3 applies to day 3 only
/// and has no effect on day 10.
///
/// # Examples
///
/// ```
/// use seating::hours::{ClockTime, StopOverrides};
///
/// let mut stops = StopOverrides::default();
/// assert!(stops.set(3, "12:00-13:00"));
/// assert!(stops.blocks(3, ClockTime::from_hm(12, 30)));
/// assert!(!stops.blocks(10, ClockTime::from_hm(12, 30)));
/// assert!(!stops.set(8, "12:00-13:00"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopOverrides {
    slots: [Option<String>; STOP_SLOTS],
}

impl StopOverrides {
    fn slot(date: Day) -> Option<usize> {
        usize::try_from(date - 1)
            .ok()
            .filter(|index| *index < STOP_SLOTS)
    }

    /// Returns `true` if `date` has a stop slot.
    #[must_use]
    pub fn has_slot(date: Day) -> bool {
        Self::slot(date).is_some()
    }

    /// Stores `range` for `date`. Returns `false` if the date has no slot.
    pub fn set(&mut self, date: Day, range: &str) -> bool {
        match Self::slot(date) {
            Some(index) => {
                self.slots[index] = Some(range.to_string());
                true
            }
            None => false,
        }
    }

    /// The raw override for `date`, if any.
    #[must_use]
    pub fn get(&self, date: Day) -> Option<&str> {
        Self::slot(date).and_then(|index| self.slots[index].as_deref())
    }

    /// Returns `true` if the override for `date` contains `time`.
    #[must_use]
    pub fn blocks(&self, date: Day, time: ClockTime) -> bool {
        any_range_contains(self.get(date), time)
    }
}
