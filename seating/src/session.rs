//! The session context.
//!
//! A [`Session`] bundles the registry, the ledger (which carries the current
//! day) and the cancellation policy. It is owned by whoever drives the
//! command stream and is passed by reference into every operation.

use crate::config::Config;
use crate::error::Result;
use crate::hours::Day;
use crate::ledger::{CancellationWindow, Ledger};
use crate::notice::Notice;
use crate::registry::Registry;
use crate::reservation::ReservationRequest;
use crate::Restaurant;

/// All mutable state of one simulation run.
///
/// # Examples
///
/// ```
/// use seating::hours::WeeklyHours;
/// use seating::{ReservationRequest, Restaurant, Session};
///
/// let mut session = Session::default();
/// session.register(
///     Restaurant::builder("R1", "555-0100")
///         .booking_window(7, 1)
///         .group_size(2, 6)
///         .hours(WeeklyHours::every_day(&["10:00-14:00"]))
///         .build(),
/// );
///
/// session
///     .request(ReservationRequest {
///         rid: "X1".to_string(),
///         uid: "U1".to_string(),
///         sid: "R1".to_string(),
///         date: 3,
///         time: "11:00".to_string(),
///         group_size: 4,
///     })
///     .unwrap();
///
/// let notice = session.confirm("R1", "X1").unwrap();
/// assert_eq!(notice.to_string(), "to:U1 X1 has been confirmed");
/// assert!(session.confirm("R1", "X1").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    ledger: Ledger,
    policy: CancellationWindow,
}

impl Session {
    /// Creates an empty session starting at `start_day`.
    #[must_use]
    pub fn new(start_day: Day, policy: CancellationWindow) -> Self {
        Self {
            registry: Registry::new(),
            ledger: Ledger::new(start_day),
            policy,
        }
    }

    /// Creates an empty session from resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.start_day(), config.cancellation_window())
    }

    /// The current simulated day.
    #[must_use]
    pub const fn today(&self) -> Day {
        self.ledger.today()
    }

    /// The active cancellation policy.
    #[must_use]
    pub const fn policy(&self) -> CancellationWindow {
        self.policy
    }

    /// Read access to the registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read access to the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Registers or replaces a restaurant.
    pub fn register(&mut self, restaurant: Restaurant) {
        self.registry.register(restaurant);
    }

    /// Removes a restaurant; its reservations stay in the ledger.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoSuchRestaurant`] if the ID is unknown.
    pub fn remove(&mut self, sid: &str) -> Result<()> {
        self.registry.remove(sid).map(|_| ())
    }

    /// Stops reservations for `sid` on `date` during `range`.
    ///
    /// # Errors
    ///
    /// See [`Registry::set_temporary_stop`].
    pub fn stop(&mut self, sid: &str, date: Day, range: &str) -> Result<()> {
        let today = self.ledger.today();
        self.registry.set_temporary_stop(sid, date, range, today)
    }

    /// Requests a reservation.
    ///
    /// # Errors
    ///
    /// See [`Ledger::request`].
    pub fn request(&mut self, request: ReservationRequest) -> Result<Notice> {
        self.ledger.request(&self.registry, request)
    }

    /// Cancels a reservation on behalf of `uid`.
    ///
    /// # Errors
    ///
    /// See [`Ledger::cancel`].
    pub fn cancel(&mut self, uid: &str, rid: &str) -> Result<Notice> {
        self.ledger.cancel(&self.registry, self.policy, uid, rid)
    }

    /// Confirms a reservation on behalf of restaurant `sid`.
    ///
    /// # Errors
    ///
    /// See [`Ledger::confirm`].
    pub fn confirm(&mut self, sid: &str, rid: &str) -> Result<Notice> {
        self.ledger.confirm(&self.registry, sid, rid)
    }

    /// Rejects a reservation on behalf of restaurant `sid`.
    ///
    /// # Errors
    ///
    /// See [`Ledger::reject`].
    pub fn reject(&mut self, sid: &str, rid: &str) -> Result<Notice> {
        self.ledger.reject(&self.registry, sid, rid)
    }

    /// Advances to the next day, auto-rejecting pending reservations.
    pub fn next_day(&mut self) -> Vec<Notice> {
        self.ledger.advance_day()
    }
}
