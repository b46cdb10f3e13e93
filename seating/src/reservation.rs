//! Reservation types.
//!
//! A reservation is created `PENDING` and moves at most once, to one of
//! the terminal statuses `CONFIRMED`, `REJECTED` or `CANCELLED`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hours::Day;

/// Lifecycle status of a reservation.
///
/// # Examples
///
/// ```
/// use seating::ReservationStatus;
///
/// assert!(!ReservationStatus::Pending.is_terminal());
/// assert!(ReservationStatus::Cancelled.is_terminal());
/// assert_eq!(ReservationStatus::Confirmed.to_string(), "CONFIRMED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Waiting for the restaurant.
    Pending,
    /// Accepted by the restaurant.
    Confirmed,
    /// Declined by the restaurant or auto-rejected at a day boundary.
    Rejected,
    /// Withdrawn by the user.
    Cancelled,
}

impl ReservationStatus {
    /// Returns `true` for statuses with no outgoing transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Confirmed => write!(f, "CONFIRMED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// The fields of a `REQUEST` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Requester-assigned reservation ID.
    pub rid: String,
    /// Requesting user.
    pub uid: String,
    /// Target restaurant.
    pub sid: String,
    /// Requested absolute day.
    pub date: Day,
    /// Requested time, `"hh:mm"`.
    pub time: String,
    /// Party size.
    pub group_size: i64,
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    rid: String,
    uid: String,
    sid: String,
    date: Day,
    time: String,
    group_size: i64,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a pending reservation from an accepted request.
    #[must_use]
    pub fn pending(request: ReservationRequest) -> Self {
        Self {
            rid: request.rid,
            uid: request.uid,
            sid: request.sid,
            date: request.date,
            time: request.time,
            group_size: request.group_size,
            status: ReservationStatus::Pending,
        }
    }

    /// Returns the reservation ID.
    #[must_use]
    pub fn rid(&self) -> &str {
        &self.rid
    }

    /// Returns the requesting user.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the restaurant ID.
    #[must_use]
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// Returns the reserved day.
    #[must_use]
    pub const fn date(&self) -> Day {
        self.date
    }

    /// Returns the reserved time as it was requested.
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the party size.
    #[must_use]
    pub const fn group_size(&self) -> i64 {
        self.group_size
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
    }
}
