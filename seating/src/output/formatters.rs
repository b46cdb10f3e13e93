//! Output formatter implementations.

use serde::Serialize;

use crate::dispatch::Event;
use crate::error::{Error, Operation};
use crate::notice::Notice;
use crate::reservation::ReservationStatus;
use crate::Result;

use super::OutputFormatter;

/// The line printed for a rejected command.
///
/// Most rejections read `Error: <reason>`. Some depend on the operation
/// that raised them, and a cancellation that has to go through the
/// restaurant prints the restaurant's contact instead.
///
/// # Examples
///
/// ```
/// use seating::output::legacy_message;
/// use seating::Error;
///
/// let err = Error::NoSuchRestaurant { id: "R9".to_string() };
/// assert_eq!(legacy_message(&err), "Error: No such restaurant");
/// ```
#[must_use]
pub fn legacy_message(error: &Error) -> String {
    let text = match error {
        Error::NoSuchRestaurant { .. } => "Error: No such restaurant",
        Error::OutsideBookingWindow {
            operation: Operation::Stop,
            ..
        } => "Error: Cannot make a reservation already due to being outside the reservation period",
        Error::OutsideBookingWindow { .. } => "Error: Outside of reservation period",
        Error::GroupSizeOutOfRange { .. } => "Error: Too many or too few people",
        Error::ClosedAtRequestedTime { .. } => "Error: Closed",
        Error::TemporarilyClosed { .. } => "Error: Reservations temporarily closed",
        Error::NotFound {
            operation: Operation::Cancel,
            ..
        } => "Error: Not found",
        Error::NotFound { .. } => "Error: No such reservation ID",
        Error::AlreadyTerminal {
            operation, status, ..
        } => match (operation, status) {
            (Operation::Cancel, ReservationStatus::Rejected) => "Error: Rejected",
            (Operation::Cancel, ReservationStatus::Cancelled) => "Error: CANCELLED",
            (_, ReservationStatus::Rejected) => "Error: Already rejected",
            (_, ReservationStatus::Confirmed) => "Error: Already confirmed",
            (_, ReservationStatus::Cancelled) => "Error: Already cancelled",
            (_, ReservationStatus::Pending) => return format!("Error: {error}"),
        },
        Error::PastReservation { .. } => "Error: Past reservation",
        Error::ContactRestaurantRequired { contact, .. } => {
            return format!("Please contact Restaurant {contact}");
        }
        Error::PastStopDate { .. } => "Error: Specify a date today or after today",
        Error::StopSlotUnavailable { .. } => {
            "Error: Temporary stops are only available for days 1-7"
        }
        Error::InvalidQuery { .. } => "Invalid Query",
        Error::Parse { .. }
        | Error::Validation { .. }
        | Error::InvalidPath { .. }
        | Error::Configuration(_)
        | Error::Json(_)
        | Error::Io(_) => return format!("Error: {error}"),
    };
    text.to_string()
}

/// Formatter for the plain text protocol.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, event: &Event) -> Result<String> {
        Ok(match event {
            Event::Notice(notice) => notice.to_string(),
            Event::Error(error) => legacy_message(error),
        })
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum JsonEvent<'a> {
    Notice {
        message: String,
        #[serde(flatten)]
        notice: &'a Notice,
    },
    Error {
        error: &'static str,
        message: String,
        detail: String,
    },
    InvalidQuery {
        message: String,
        line: usize,
        reason: &'a str,
    },
}

/// Formatter for JSON lines output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, event: &Event) -> Result<String> {
        let json = match event {
            Event::Notice(notice) => JsonEvent::Notice {
                message: notice.kind.to_string(),
                notice,
            },
            Event::Error(error @ Error::InvalidQuery { line, reason }) => JsonEvent::InvalidQuery {
                message: legacy_message(error),
                line: *line,
                reason,
            },
            Event::Error(error) => JsonEvent::Error {
                error: error.kind(),
                message: legacy_message(error),
                detail: error.to_string(),
            },
        };
        Ok(serde_json::to_string(&json)?)
    }
}
