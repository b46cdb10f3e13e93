//! Restaurant configuration types.
//!
//! A restaurant carries its booking window, group-size bounds, weekly
//! opening hours and temporary stop overrides. None of these are validated
//! for internal consistency at registration time.

use crate::hours::{Day, StopOverrides, WeeklyHours};

/// The range of `date - current_day` offsets a restaurant accepts.
///
/// Both bounds are inclusive.
///
/// # Examples
///
/// ```
/// use seating::BookingWindow;
///
/// let window = BookingWindow::new(7, 1);
/// assert!(window.contains(1));
/// assert!(window.contains(7));
/// assert!(!window.contains(0));
/// assert!(!window.contains(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    /// Furthest day offset that may be booked.
    pub max: Day,
    /// Nearest day offset that may be booked.
    pub min: Day,
}

impl BookingWindow {
    /// Creates a window; arguments follow the input order (max first).
    #[must_use]
    pub const fn new(max: Day, min: Day) -> Self {
        Self { max, min }
    }

    /// Returns `true` if `offset` lies within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, offset: Day) -> bool {
        self.min <= offset && offset <= self.max
    }

    /// Returns `true` if `date` is between `min` and `max` days after
    /// `today`. A difference that does not fit in a [`Day`] is never inside.
    #[must_use]
    pub fn admits(&self, date: Day, today: Day) -> bool {
        date.checked_sub(today).is_some_and(|offset| self.contains(offset))
    }
}

/// Inclusive party-size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSizeBounds {
    /// Smallest accepted party.
    pub min: i64,
    /// Largest accepted party.
    pub max: i64,
}

impl GroupSizeBounds {
    /// Creates group-size bounds.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `size` lies within `[min, max]`.
    #[must_use]
    pub const fn contains(&self, size: i64) -> bool {
        self.min <= size && size <= self.max
    }
}

/// A registered restaurant.
///
/// # Examples
///
/// ```
/// use seating::hours::WeeklyHours;
/// use seating::Restaurant;
///
/// let restaurant = Restaurant::builder("R1", "555-0100")
///     .booking_window(7, 1)
///     .group_size(2, 6)
///     .hours(WeeklyHours::every_day(&["10:00-14:00"]))
///     .build();
///
/// assert_eq!(restaurant.id(), "R1");
/// assert!(restaurant.group_size().contains(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    id: String,
    contact: String,
    window: BookingWindow,
    group_size: GroupSizeBounds,
    hours: WeeklyHours,
    stops: StopOverrides,
}

impl Restaurant {
    /// Creates a new restaurant builder.
    #[must_use]
    pub fn builder(id: impl Into<String>, contact: impl Into<String>) -> RestaurantBuilder {
        RestaurantBuilder {
            id: id.into(),
            contact: contact.into(),
            window: BookingWindow::new(0, 0),
            group_size: GroupSizeBounds::new(0, 0),
            hours: WeeklyHours::default(),
        }
    }

    /// Returns the restaurant ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the contact string.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Returns the booking window.
    #[must_use]
    pub const fn window(&self) -> BookingWindow {
        self.window
    }

    /// Returns the group-size bounds.
    #[must_use]
    pub const fn group_size(&self) -> GroupSizeBounds {
        self.group_size
    }

    /// Returns the weekly opening hours.
    #[must_use]
    pub const fn hours(&self) -> &WeeklyHours {
        &self.hours
    }

    /// Returns the temporary stop overrides.
    #[must_use]
    pub const fn stops(&self) -> &StopOverrides {
        &self.stops
    }

    pub(crate) fn stops_mut(&mut self) -> &mut StopOverrides {
        &mut self.stops
    }

    pub(crate) fn clear_stops(&mut self) {
        self.stops = StopOverrides::default();
    }
}

/// Builder for [`Restaurant`].
///
/// Unset bounds default to zero, which rejects every request.
#[derive(Debug, Clone)]
pub struct RestaurantBuilder {
    id: String,
    contact: String,
    window: BookingWindow,
    group_size: GroupSizeBounds,
    hours: WeeklyHours,
}

impl RestaurantBuilder {
    /// Sets the booking window (max first, as in the input format).
    #[must_use]
    pub const fn booking_window(mut self, max: Day, min: Day) -> Self {
        self.window = BookingWindow::new(max, min);
        self
    }

    /// Sets the group-size bounds.
    #[must_use]
    pub const fn group_size(mut self, min: i64, max: i64) -> Self {
        self.group_size = GroupSizeBounds::new(min, max);
        self
    }

    /// Sets the weekly opening hours.
    #[must_use]
    pub fn hours(mut self, hours: WeeklyHours) -> Self {
        self.hours = hours;
        self
    }

    /// Builds the restaurant with no temporary stops.
    #[must_use]
    pub fn build(self) -> Restaurant {
        Restaurant {
            id: self.id,
            contact: self.contact,
            window: self.window,
            group_size: self.group_size,
            hours: self.hours,
            stops: StopOverrides::default(),
        }
    }
}
