//! The reservation ledger.
//!
//! The ledger owns every reservation, keyed by reservation ID, together with
//! the current simulated day. It validates commands against the restaurant
//! registry and applies the resulting status transitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Operation, Result};
use crate::hours::{weekday_for, ClockTime, Day};
use crate::notice::{Notice, NoticeKind};
use crate::registry::Registry;
use crate::reservation::{Reservation, ReservationRequest, ReservationStatus};
use crate::restaurant::BookingWindow;

#[cfg(test)]
mod proptests;

/// How self-service cancellation decides whether the user must contact the
/// restaurant instead.
///
/// # Examples
///
/// ```
/// use seating::{BookingWindow, CancellationWindow};
///
/// let window = BookingWindow::new(7, 1);
/// assert!(CancellationWindow::PeriodMax.allows(window, 7));
/// assert!(!CancellationWindow::PeriodMax.allows(window, 3));
/// assert!(CancellationWindow::BookingWindow.allows(window, 3));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CancellationWindow {
    /// Cancellation is allowed only when the reservation is exactly
    /// `period_max` days ahead.
    #[default]
    PeriodMax,
    /// Cancellation is allowed anywhere inside `[period_min, period_max]`.
    BookingWindow,
}

impl CancellationWindow {
    /// Returns `true` if a reservation `offset` days ahead may be cancelled
    /// by the user.
    #[must_use]
    pub const fn allows(self, window: BookingWindow, offset: Day) -> bool {
        match self {
            Self::PeriodMax => offset == window.max,
            Self::BookingWindow => window.contains(offset),
        }
    }
}

/// Reservations and the current day.
///
/// # Examples
///
/// ```
/// use seating::hours::WeeklyHours;
/// use seating::{Ledger, Registry, ReservationRequest, ReservationStatus, Restaurant};
///
/// let mut registry = Registry::new();
/// registry.register(
///     Restaurant::builder("R1", "555-0100")
///         .booking_window(7, 1)
///         .group_size(2, 6)
///         .hours(WeeklyHours::every_day(&["10:00-14:00"]))
///         .build(),
/// );
///
/// let mut ledger = Ledger::new(1);
/// let notice = ledger
///     .request(&registry, ReservationRequest {
///         rid: "X1".to_string(),
///         uid: "U1".to_string(),
///         sid: "R1".to_string(),
///         date: 3,
///         time: "11:00".to_string(),
///         group_size: 4,
///     })
///     .unwrap();
/// assert_eq!(notice.to, "R1");
///
/// let swept = ledger.advance_day();
/// assert_eq!(swept.len(), 1);
/// assert_eq!(ledger.get("X1").unwrap().status(), ReservationStatus::Rejected);
/// ```
#[derive(Debug, Clone)]
pub struct Ledger {
    today: Day,
    reservations: BTreeMap<String, Reservation>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Ledger {
    /// Creates an empty ledger starting at `start_day`.
    #[must_use]
    pub const fn new(start_day: Day) -> Self {
        Self {
            today: start_day,
            reservations: BTreeMap::new(),
        }
    }

    /// The current simulated day.
    #[must_use]
    pub const fn today(&self) -> Day {
        self.today
    }

    /// Looks up a reservation.
    #[must_use]
    pub fn get(&self, rid: &str) -> Option<&Reservation> {
        self.reservations.get(rid)
    }

    /// All reservations in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    /// Number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Number of reservations in `status`.
    #[must_use]
    pub fn count(&self, status: ReservationStatus) -> usize {
        self.iter().filter(|r| r.status() == status).count()
    }

    /// Validates a reservation request and stores it as pending.
    ///
    /// Checks run in order and stop at the first failure: restaurant
    /// exists, booking window, group size, opening hours, temporary stop.
    /// A rejected request leaves the ledger untouched. An accepted request
    /// with an existing ID replaces the earlier reservation.
    ///
    /// # Errors
    ///
    /// Returns the rejection for the first failed check.
    pub fn request(&mut self, registry: &Registry, request: ReservationRequest) -> Result<Notice> {
        let restaurant = registry
            .get(&request.sid)
            .ok_or_else(|| Error::NoSuchRestaurant {
                id: request.sid.clone(),
            })?;

        let window = restaurant.window();
        if !window.admits(request.date, self.today) {
            return Err(Error::OutsideBookingWindow {
                operation: Operation::Request,
                offset: request.date.saturating_sub(self.today),
                min: window.min,
                max: window.max,
            });
        }

        let bounds = restaurant.group_size();
        if !bounds.contains(request.group_size) {
            return Err(Error::GroupSizeOutOfRange {
                size: request.group_size,
                min: bounds.min,
                max: bounds.max,
            });
        }

        let time = match request.time.parse::<ClockTime>() {
            Ok(time) => Some(time),
            Err(e) => {
                log::warn!("reservation {}: {e}", request.rid);
                None
            }
        };

        let weekday = weekday_for(request.date);
        if !time.is_some_and(|t| restaurant.hours().is_open(weekday, t)) {
            return Err(Error::ClosedAtRequestedTime {
                sid: request.sid,
                date: request.date,
                time: request.time,
            });
        }

        if time.is_some_and(|t| restaurant.stops().blocks(request.date, t)) {
            return Err(Error::TemporarilyClosed {
                sid: request.sid,
                date: request.date,
                time: request.time,
            });
        }

        let notice = Notice::new(
            request.sid.clone(),
            NoticeKind::RequestReceived {
                rid: request.rid.clone(),
                uid: request.uid.clone(),
                date: request.date,
                time: request.time.clone(),
                group_size: request.group_size,
            },
        );

        let reservation = Reservation::pending(request);
        if let Some(previous) = self
            .reservations
            .insert(reservation.rid().to_string(), reservation)
        {
            log::debug!(
                "reservation {} replaced an entry in status {}",
                previous.rid(),
                previous.status()
            );
        }

        Ok(notice)
    }

    /// Cancels a reservation on behalf of the user who made it.
    ///
    /// Pending and confirmed reservations can be cancelled as long as they
    /// are not in the past and `policy` allows self-service cancellation.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the reservation is unknown or belongs to a
    /// different user, its restaurant is gone, it is already rejected or
    /// cancelled, it is in the past, or the user has to contact the
    /// restaurant.
    pub fn cancel(
        &mut self,
        registry: &Registry,
        policy: CancellationWindow,
        uid: &str,
        rid: &str,
    ) -> Result<Notice> {
        let today = self.today;
        let reservation = self
            .reservations
            .get_mut(rid)
            .filter(|r| r.uid() == uid)
            .ok_or_else(|| Error::NotFound {
                operation: Operation::Cancel,
                rid: rid.to_string(),
            })?;

        let restaurant = registry
            .get(reservation.sid())
            .ok_or_else(|| Error::NoSuchRestaurant {
                id: reservation.sid().to_string(),
            })?;

        let status = reservation.status();
        if matches!(
            status,
            ReservationStatus::Rejected | ReservationStatus::Cancelled
        ) {
            return Err(Error::AlreadyTerminal {
                operation: Operation::Cancel,
                rid: rid.to_string(),
                status,
            });
        }

        if reservation.date() < today {
            return Err(Error::PastReservation {
                operation: Operation::Cancel,
                rid: rid.to_string(),
                date: reservation.date(),
            });
        }

        let cancellable = reservation
            .date()
            .checked_sub(today)
            .is_some_and(|offset| policy.allows(restaurant.window(), offset));
        if !cancellable {
            return Err(Error::ContactRestaurantRequired {
                rid: rid.to_string(),
                contact: restaurant.contact().to_string(),
            });
        }

        reservation.set_status(ReservationStatus::Cancelled);
        Ok(Notice::new(
            reservation.sid(),
            NoticeKind::Cancelled {
                rid: rid.to_string(),
            },
        ))
    }

    /// Confirms a pending reservation on behalf of its restaurant.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the reservation is unknown or belongs to a
    /// different restaurant, the restaurant is gone, the reservation is no
    /// longer pending, or its date is in the past.
    pub fn confirm(&mut self, registry: &Registry, sid: &str, rid: &str) -> Result<Notice> {
        self.resolve(registry, Operation::Confirm, sid, rid)
    }

    /// Rejects a pending reservation on behalf of its restaurant.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the reservation is unknown or belongs to a
    /// different restaurant, the restaurant is gone, or the reservation is
    /// no longer pending.
    pub fn reject(&mut self, registry: &Registry, sid: &str, rid: &str) -> Result<Notice> {
        self.resolve(registry, Operation::Reject, sid, rid)
    }

    fn resolve(
        &mut self,
        registry: &Registry,
        operation: Operation,
        sid: &str,
        rid: &str,
    ) -> Result<Notice> {
        let today = self.today;
        let reservation = self
            .reservations
            .get_mut(rid)
            .filter(|r| r.sid() == sid)
            .ok_or_else(|| Error::NotFound {
                operation,
                rid: rid.to_string(),
            })?;

        if !registry.contains(sid) {
            return Err(Error::NoSuchRestaurant { id: sid.to_string() });
        }

        let status = reservation.status();
        if status.is_terminal() {
            return Err(Error::AlreadyTerminal {
                operation,
                rid: rid.to_string(),
                status,
            });
        }

        let (target, kind) = match operation {
            Operation::Confirm => {
                if reservation.date() < today {
                    return Err(Error::PastReservation {
                        operation,
                        rid: rid.to_string(),
                        date: reservation.date(),
                    });
                }
                (
                    ReservationStatus::Confirmed,
                    NoticeKind::Confirmed {
                        rid: rid.to_string(),
                    },
                )
            }
            _ => (
                ReservationStatus::Rejected,
                NoticeKind::Rejected {
                    rid: rid.to_string(),
                },
            ),
        };

        reservation.set_status(target);
        Ok(Notice::new(reservation.uid(), kind))
    }

    /// Moves to the next day and auto-rejects every pending reservation.
    ///
    /// Reservations are visited in ascending ID order; the returned notices
    /// follow that order.
    pub fn advance_day(&mut self) -> Vec<Notice> {
        self.today = self.today.saturating_add(1);
        log::debug!("advanced to day {}", self.today);

        self.reservations
            .values_mut()
            .filter(|r| r.status() == ReservationStatus::Pending)
            .map(|reservation| {
                reservation.set_status(ReservationStatus::Rejected);
                Notice::new(
                    reservation.uid(),
                    NoticeKind::AutoRejected {
                        rid: reservation.rid().to_string(),
                    },
                )
            })
            .collect()
    }
}
