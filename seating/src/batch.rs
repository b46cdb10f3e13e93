//! Batch input parsing.
//!
//! A batch starts with the number of restaurants, followed by one 8-line
//! block per restaurant and then one command per line. A block is a header
//! line `id contact period_max period_min min_group max_group` followed by
//! seven lines of opening-hour tokens, Monday first.
//!
//! Structural problems in the leading part of the batch (count and initial
//! blocks) are fatal. Problems with a single command line only invalidate
//! that command.

use crate::error::{Error, Result};
use crate::hours::{weekday_for, Day, WeeklyHours};
use crate::reservation::ReservationRequest;
use crate::Restaurant;

/// Lines in a restaurant block: header plus one per weekday.
pub const BLOCK_LINES: usize = 8;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `REQUEST rid uid sid date time groupSize`
    Request(ReservationRequest),
    /// `CANCEL uid rid`
    Cancel {
        /// Requesting user.
        uid: String,
        /// Reservation ID.
        rid: String,
    },
    /// `CONFIRM sid rid`
    Confirm {
        /// Restaurant ID.
        sid: String,
        /// Reservation ID.
        rid: String,
    },
    /// `REJECT sid rid`
    Reject {
        /// Restaurant ID.
        sid: String,
        /// Reservation ID.
        rid: String,
    },
    /// `STOP sid date timeRange`
    Stop {
        /// Restaurant ID.
        sid: String,
        /// Day to stop.
        date: Day,
        /// Raw range token.
        range: String,
    },
    /// `NEXT_DAY`
    NextDay,
    /// `LIST` followed by a restaurant block.
    List(Restaurant),
    /// `REMOVE sid`
    Remove {
        /// Restaurant ID.
        sid: String,
    },
    /// A line that could not be interpreted.
    Invalid {
        /// Why the line was rejected.
        reason: String,
    },
}

impl Command {
    /// The command keyword, or `"INVALID"`.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Request(_) => "REQUEST",
            Self::Cancel { .. } => "CANCEL",
            Self::Confirm { .. } => "CONFIRM",
            Self::Reject { .. } => "REJECT",
            Self::Stop { .. } => "STOP",
            Self::NextDay => "NEXT_DAY",
            Self::List(_) => "LIST",
            Self::Remove { .. } => "REMOVE",
            Self::Invalid { .. } => "INVALID",
        }
    }
}

/// A command with the 1-based line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Input line number.
    pub line: usize,
    /// The command.
    pub command: Command,
}

/// A fully parsed batch.
///
/// # Examples
///
/// ```
/// use seating::batch::{Batch, Command};
///
/// let input = "1\nR1 555-0100 7 1 2 6\n10:00-14:00\n-\n-\n-\n-\n-\n-\nNEXT_DAY\nDANCE\n";
/// let batch = Batch::parse(input).unwrap();
/// assert_eq!(batch.restaurants.len(), 1);
/// assert_eq!(batch.commands[0].command, Command::NextDay);
/// assert!(matches!(batch.commands[1].command, Command::Invalid { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Batch {
    /// Restaurants registered before the first command.
    pub restaurants: Vec<Restaurant>,
    /// Commands in input order.
    pub commands: Vec<ParsedCommand>,
}

impl Batch {
    /// Parses a complete batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the restaurant count is missing or not a
    /// number, or if one of the initial restaurant blocks is truncated or
    /// has a malformed header.
    pub fn parse(input: &str) -> Result<Self> {
        let mut cursor = LineCursor::new(input);
        cursor.skip_blank();

        let count_line = cursor.line_number();
        let count = cursor.next().ok_or_else(|| Error::Parse {
            line: count_line,
            message: "missing restaurant count".into(),
        })?;
        let count: usize = count.trim().parse().map_err(|e| Error::Parse {
            line: count_line,
            message: format!("invalid number of restaurants {:?}: {e}", count.trim()),
        })?;

        let mut restaurants = Vec::with_capacity(count);
        for _ in 0..count {
            restaurants.push(parse_block(&mut cursor)?);
        }

        let mut commands = Vec::new();
        while let Some(text) = cursor.next() {
            let line = cursor.line_number() - 1;
            let fields: Vec<&str> = text.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }

            let command = parse_command(&fields, &mut cursor)
                .unwrap_or_else(|reason| Command::Invalid { reason });
            commands.push(ParsedCommand { line, command });
        }

        log::debug!(
            "parsed {} restaurant(s) and {} command(s)",
            restaurants.len(),
            commands.len()
        );

        Ok(Self {
            restaurants,
            commands,
        })
    }
}

struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().collect(),
            pos: 0,
        }
    }

    /// 1-based number of the line `next` would return.
    const fn line_number(&self) -> usize {
        self.pos + 1
    }

    fn skip_blank(&mut self) {
        while self
            .lines
            .get(self.pos)
            .is_some_and(|line| line.trim().is_empty())
        {
            self.pos += 1;
        }
    }

    fn next(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }
}

fn parse_block(cursor: &mut LineCursor<'_>) -> Result<Restaurant> {
    let start = cursor.line_number();
    let header = cursor.next().ok_or_else(|| Error::Parse {
        line: start,
        message: "expected restaurant header".into(),
    })?;

    let mut days: [Vec<String>; 7] = Default::default();
    for (offset, day) in (1..).zip(days.iter_mut()) {
        let line = cursor.next().ok_or_else(|| Error::Parse {
            line: start + offset,
            message: format!(
                "truncated restaurant block: expected opening hours for {}",
                weekday_for(Day::try_from(offset).unwrap_or(1))
            ),
        })?;
        *day = line.split_whitespace().map(str::to_string).collect();
    }

    parse_header(header, WeeklyHours::new(days)).map_err(|message| Error::Parse {
        line: start,
        message,
    })
}

fn parse_header(header: &str, hours: WeeklyHours) -> std::result::Result<Restaurant, String> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [id, contact, period_max, period_min, min_group, max_group, ..] = fields[..] else {
        return Err(format!(
            "restaurant header needs 6 fields (id contact period_max period_min min_group max_group), found {}",
            fields.len()
        ));
    };

    Ok(Restaurant::builder(id, contact)
        .booking_window(
            number(period_max, "period_max")?,
            number(period_min, "period_min")?,
        )
        .group_size(number(min_group, "min_group")?, number(max_group, "max_group")?)
        .hours(hours)
        .build())
}

fn number(value: &str, name: &str) -> std::result::Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("{name} must be an integer, found {value:?}"))
}

fn fields<'a, const N: usize>(
    fields: &[&'a str],
    usage: &str,
) -> std::result::Result<[&'a str; N], String> {
    fields
        .get(1..=N)
        .and_then(|args| <[&str; N]>::try_from(args).ok())
        .ok_or_else(|| format!("usage: {usage}"))
}

fn parse_command(
    parts: &[&str],
    cursor: &mut LineCursor<'_>,
) -> std::result::Result<Command, String> {
    match parts[0] {
        "REQUEST" => {
            let [rid, uid, sid, date, time, group_size] =
                fields(parts, "REQUEST rid uid sid date time groupSize")?;
            Ok(Command::Request(ReservationRequest {
                rid: rid.to_string(),
                uid: uid.to_string(),
                sid: sid.to_string(),
                date: number(date, "date")?,
                time: time.to_string(),
                group_size: number(group_size, "groupSize")?,
            }))
        }
        "CANCEL" => {
            let [uid, rid] = fields(parts, "CANCEL uid rid")?;
            Ok(Command::Cancel {
                uid: uid.to_string(),
                rid: rid.to_string(),
            })
        }
        "CONFIRM" => {
            let [sid, rid] = fields(parts, "CONFIRM sid rid")?;
            Ok(Command::Confirm {
                sid: sid.to_string(),
                rid: rid.to_string(),
            })
        }
        "REJECT" => {
            let [sid, rid] = fields(parts, "REJECT sid rid")?;
            Ok(Command::Reject {
                sid: sid.to_string(),
                rid: rid.to_string(),
            })
        }
        "STOP" => {
            let [sid, date, range] = fields(parts, "STOP sid date timeRange")?;
            Ok(Command::Stop {
                sid: sid.to_string(),
                date: number(date, "date")?,
                range: range.to_string(),
            })
        }
        "NEXT_DAY" => Ok(Command::NextDay),
        // The block is consumed even when it turns out to be malformed
        "LIST" => parse_block(cursor)
            .map(Command::List)
            .map_err(|e| e.to_string()),
        "REMOVE" => {
            let [sid] = fields(parts, "REMOVE sid")?;
            Ok(Command::Remove {
                sid: sid.to_string(),
            })
        }
        other => Err(format!("unknown command {other:?}")),
    }
}
