//! Error types for the seating library.
//!
//! This module provides a single error hierarchy covering both booking
//! rejections (a command that is not allowed in the current state) and
//! infrastructure failures (I/O, configuration, malformed input), using
//! `thiserror` for ergonomic error handling.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::hours::Day;
use crate::reservation::ReservationStatus;

/// Result type alias for operations that may fail with a seating error.
///
/// # Examples
///
/// ```
/// use seating::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The operation a booking rejection was raised by.
///
/// Some rejections read differently depending on which command produced
/// them, so the operation travels with the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A reservation request.
    Request,
    /// A cancellation by the requesting user.
    Cancel,
    /// A confirmation by the restaurant.
    Confirm,
    /// A rejection by the restaurant.
    Reject,
    /// A temporary stop set by the restaurant.
    Stop,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request => write!(f, "request"),
            Self::Cancel => write!(f, "cancel"),
            Self::Confirm => write!(f, "confirm"),
            Self::Reject => write!(f, "reject"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// The main error type for the seating library.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced restaurant is not registered.
    #[error("no such restaurant: {id}")]
    NoSuchRestaurant {
        /// The restaurant ID that was looked up.
        id: String,
    },

    /// The requested date lies outside the restaurant's booking window.
    #[error("{operation} {offset} day(s) ahead is outside the booking window [{min}, {max}]")]
    OutsideBookingWindow {
        /// The operation that was rejected.
        operation: Operation,
        /// `date - current_day`.
        offset: Day,
        /// Lower bound of the window (inclusive).
        min: Day,
        /// Upper bound of the window (inclusive).
        max: Day,
    },

    /// The party size is outside the restaurant's group-size bounds.
    #[error("group size {size} is outside the allowed range [{min}, {max}]")]
    GroupSizeOutOfRange {
        /// The requested party size.
        size: i64,
        /// Minimum group size (inclusive).
        min: i64,
        /// Maximum group size (inclusive).
        max: i64,
    },

    /// The restaurant is not open at the requested time.
    #[error("restaurant {sid} is closed at {time} on day {date}")]
    ClosedAtRequestedTime {
        /// The restaurant ID.
        sid: String,
        /// The requested date.
        date: Day,
        /// The requested time, as given.
        time: String,
    },

    /// The restaurant stopped taking reservations at the requested time.
    #[error("restaurant {sid} has stopped reservations at {time} on day {date}")]
    TemporarilyClosed {
        /// The restaurant ID.
        sid: String,
        /// The requested date.
        date: Day,
        /// The requested time, as given.
        time: String,
    },

    /// No reservation matches the given ID and caller.
    #[error("{operation}: reservation {rid} not found")]
    NotFound {
        /// The operation that was rejected.
        operation: Operation,
        /// The reservation ID.
        rid: String,
    },

    /// The reservation has already left the pending state.
    #[error("{operation}: reservation {rid} is already {status}")]
    AlreadyTerminal {
        /// The operation that was rejected.
        operation: Operation,
        /// The reservation ID.
        rid: String,
        /// The terminal status the reservation is in.
        status: ReservationStatus,
    },

    /// The reservation date is before the current day.
    #[error("{operation}: reservation {rid} for day {date} is in the past")]
    PastReservation {
        /// The operation that was rejected.
        operation: Operation,
        /// The reservation ID.
        rid: String,
        /// The reservation date.
        date: Day,
    },

    /// Self-service cancellation is not available; the user has to contact
    /// the restaurant.
    #[error("reservation {rid} can only be cancelled through the restaurant ({contact})")]
    ContactRestaurantRequired {
        /// The reservation ID.
        rid: String,
        /// The restaurant's contact string.
        contact: String,
    },

    /// A temporary stop was requested for a day that has already passed.
    #[error("cannot stop reservations for day {date}: it is before today ({today})")]
    PastStopDate {
        /// The requested stop date.
        date: Day,
        /// The current day.
        today: Day,
    },

    /// A temporary stop was requested for a day without a stop slot.
    #[error("no temporary stop slot for day {date}")]
    StopSlotUnavailable {
        /// The requested stop date.
        date: Day,
    },

    /// A command line could not be interpreted.
    #[error("invalid query on line {line}: {reason}")]
    InvalidQuery {
        /// 1-based input line number.
        line: usize,
        /// Why the line was rejected.
        reason: String,
    },

    /// The batch input is structurally malformed and cannot be processed.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based input line number.
        line: usize,
        /// A description of the problem.
        message: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a per-command booking rejection.
    ///
    /// Rejections are reported and processing continues with the next
    /// command; every other error aborts the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use seating::Error;
    ///
    /// let err = Error::NoSuchRestaurant { id: "R1".to_string() };
    /// assert!(err.is_rejection());
    ///
    /// let err = Error::Parse { line: 1, message: "bad count".to_string() };
    /// assert!(!err.is_rejection());
    /// ```
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::NoSuchRestaurant { .. }
                | Self::OutsideBookingWindow { .. }
                | Self::GroupSizeOutOfRange { .. }
                | Self::ClosedAtRequestedTime { .. }
                | Self::TemporarilyClosed { .. }
                | Self::NotFound { .. }
                | Self::AlreadyTerminal { .. }
                | Self::PastReservation { .. }
                | Self::ContactRestaurantRequired { .. }
                | Self::PastStopDate { .. }
                | Self::StopSlotUnavailable { .. }
        )
    }

    /// Stable snake-case identifier for the error kind.
    ///
    /// Used by machine-readable output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoSuchRestaurant { .. } => "no_such_restaurant",
            Self::OutsideBookingWindow { .. } => "outside_booking_window",
            Self::GroupSizeOutOfRange { .. } => "group_size_out_of_range",
            Self::ClosedAtRequestedTime { .. } => "closed_at_requested_time",
            Self::TemporarilyClosed { .. } => "temporarily_closed",
            Self::NotFound { .. } => "not_found",
            Self::AlreadyTerminal { .. } => "already_terminal",
            Self::PastReservation { .. } => "past_reservation",
            Self::ContactRestaurantRequired { .. } => "contact_restaurant_required",
            Self::PastStopDate { .. } => "past_stop_date",
            Self::StopSlotUnavailable { .. } => "stop_slot_unavailable",
            Self::InvalidQuery { .. } => "invalid_query",
            Self::Parse { .. } => "parse",
            Self::Validation { .. } => "validation",
            Self::InvalidPath { .. } => "invalid_path",
            Self::Configuration(_) => "configuration",
            Self::Json(_) => "json",
            Self::Io(_) => "io",
        }
    }
}
