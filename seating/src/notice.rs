//! Acknowledgments emitted by successful operations.

use std::fmt;

use serde::Serialize;

use crate::hours::Day;

/// What happened, from the recipient's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NoticeKind {
    /// A new reservation request reached the restaurant.
    RequestReceived {
        /// Reservation ID.
        rid: String,
        /// Requesting user.
        uid: String,
        /// Requested day.
        date: Day,
        /// Requested time.
        time: String,
        /// Party size.
        group_size: i64,
    },
    /// The user cancelled.
    Cancelled {
        /// Reservation ID.
        rid: String,
    },
    /// The restaurant confirmed.
    Confirmed {
        /// Reservation ID.
        rid: String,
    },
    /// The restaurant rejected.
    Rejected {
        /// Reservation ID.
        rid: String,
    },
    /// The reservation was still pending when the day ended.
    AutoRejected {
        /// Reservation ID.
        rid: String,
    },
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestReceived {
                rid,
                uid,
                date,
                time,
                group_size,
            } => write!(
                f,
                "Received a reservation request: {rid} {uid} {date} {time} {group_size}"
            ),
            Self::Cancelled { rid } => write!(f, "{rid} has been cancelled"),
            Self::Confirmed { rid } => write!(f, "{rid} has been confirmed"),
            Self::Rejected { rid } => write!(f, "{rid} has been rejected"),
            Self::AutoRejected { rid } => write!(f, "{rid} has been auto-rejected"),
        }
    }
}

/// An acknowledgment addressed to a restaurant or user.
///
/// # Examples
///
/// ```
/// use seating::{Notice, NoticeKind};
///
/// let notice = Notice::new("U1", NoticeKind::Confirmed { rid: "X1".to_string() });
/// assert_eq!(notice.to_string(), "to:U1 X1 has been confirmed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    /// Restaurant or user ID that receives the notice.
    pub to: String,
    /// What happened.
    #[serde(flatten)]
    pub kind: NoticeKind,
}

impl Notice {
    /// Creates a notice for `to`.
    #[must_use]
    pub fn new(to: impl Into<String>, kind: NoticeKind) -> Self {
        Self { to: to.into(), kind }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "to:{} {}", self.to, self.kind)
    }
}
