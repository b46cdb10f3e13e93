#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # seating
//!
//! A library for simulating restaurant reservation workflows.
//!
//! Restaurants publish weekly opening hours, a booking window and group-size
//! bounds. Users request reservations; restaurants confirm or reject them;
//! users may cancel. At the end of each simulated day every reservation that
//! is still pending is rejected automatically.
//!
//! ## Core Types
//!
//! - [`Restaurant`] and [`Registry`]: restaurant definitions and lookup
//! - [`Reservation`] and [`Ledger`]: reservation records and their lifecycle
//! - [`Session`]: the state of one simulation run
//! - [`batch`] and [`dispatch`]: the line-oriented batch protocol
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use seating::hours::WeeklyHours;
//! use seating::{ReservationRequest, ReservationStatus, Restaurant, Session};
//!
//! let mut session = Session::default();
//! session.register(
//!     Restaurant::builder("R1", "555-0100")
//!         .booking_window(7, 1)
//!         .group_size(2, 6)
//!         .hours(WeeklyHours::every_day(&["10:00-14:00"]))
//!         .build(),
//! );
//!
//! let notice = session
//!     .request(ReservationRequest {
//!         rid: "X1".to_string(),
//!         uid: "U1".to_string(),
//!         sid: "R1".to_string(),
//!         date: 3,
//!         time: "11:00".to_string(),
//!         group_size: 4,
//!     })
//!     .unwrap();
//! assert_eq!(notice.to.as_str(), "R1");
//!
//! let swept = session.next_day();
//! assert_eq!(swept[0].to_string(), "to:U1 X1 has been auto-rejected");
//! assert_eq!(
//!     session.ledger().get("X1").unwrap().status(),
//!     ReservationStatus::Rejected
//! );
//! ```

pub mod batch;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hours;
pub mod ledger;
pub mod logging;
pub mod notice;
pub mod output;
pub mod registry;
pub mod reservation;
pub mod restaurant;
pub mod session;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Operation, Result};
pub use ledger::{CancellationWindow, Ledger};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use notice::{Notice, NoticeKind};
pub use registry::Registry;
pub use reservation::{Reservation, ReservationRequest, ReservationStatus};
pub use restaurant::{BookingWindow, GroupSizeBounds, Restaurant, RestaurantBuilder};
pub use session::Session;
