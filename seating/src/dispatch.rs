//! Command dispatch and batch replay.

use std::io::Write;

use crate::batch::{Batch, Command, ParsedCommand};
use crate::error::{Error, Result};
use crate::notice::Notice;
use crate::output::OutputFormatter;
use crate::session::Session;

/// One line of output.
#[derive(Debug)]
pub enum Event {
    /// A successful operation's acknowledgment.
    Notice(Notice),
    /// A rejected command or an uninterpretable line.
    Error(Error),
}

impl From<Notice> for Event {
    fn from(notice: Notice) -> Self {
        Self::Notice(notice)
    }
}

/// Applies one command to the session and returns the events it produced.
///
/// Rejections never abort: they come back as [`Event::Error`] and the
/// session is left unchanged.
pub fn dispatch(session: &mut Session, parsed: ParsedCommand) -> Vec<Event> {
    let ParsedCommand { line, command } = parsed;
    let keyword = command.keyword();

    let outcome = match command {
        Command::Request(request) => session.request(request).map(|n| vec![n.into()]),
        Command::Cancel { uid, rid } => session.cancel(&uid, &rid).map(|n| vec![n.into()]),
        Command::Confirm { sid, rid } => session.confirm(&sid, &rid).map(|n| vec![n.into()]),
        Command::Reject { sid, rid } => session.reject(&sid, &rid).map(|n| vec![n.into()]),
        Command::Stop { sid, date, range } => session.stop(&sid, date, &range).map(|()| Vec::new()),
        Command::NextDay => Ok(session.next_day().into_iter().map(Event::from).collect()),
        Command::List(restaurant) => {
            session.register(restaurant);
            Ok(Vec::new())
        }
        Command::Remove { sid } => session.remove(&sid).map(|()| Vec::new()),
        Command::Invalid { reason } => {
            log::warn!("line {line}: {reason}");
            Err(Error::InvalidQuery { line, reason })
        }
    };

    outcome.unwrap_or_else(|err| {
        if err.is_rejection() {
            log::debug!("line {line}: {keyword} rejected: {err}");
        }
        vec![Event::Error(err)]
    })
}

/// Counts gathered while replaying a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Restaurants registered from the leading blocks.
    pub restaurants: usize,
    /// Commands processed, including invalid ones.
    pub commands: usize,
    /// Acknowledgment lines written.
    pub notices: usize,
    /// Rejection and invalid-query lines written.
    pub errors: usize,
}

/// Parses `input`, replays it against `session` and writes one formatted
/// line per event to `out`.
///
/// # Errors
///
/// Returns an error if the batch is structurally malformed, an event cannot
/// be formatted, or writing to `out` fails.
///
/// # Examples
///
/// ```
/// use seating::dispatch::run;
/// use seating::output::OutputFormat;
/// use seating::Session;
///
/// let input = "1\nR1 555-0100 7 1 2 6\n10:00-14:00\n-\n-\n-\n-\n-\n-\n\
///              REQUEST X1 U1 R1 3 11:00 4\nNEXT_DAY\n";
/// let mut out = Vec::new();
/// let formatter = OutputFormat::Text.create_formatter();
/// run(input, &mut Session::default(), formatter.as_ref(), &mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "to:R1 Received a reservation request: X1 U1 3 11:00 4\n\
///      to:U1 X1 has been auto-rejected\n"
/// );
/// ```
pub fn run<W: Write>(
    input: &str,
    session: &mut Session,
    formatter: &dyn OutputFormatter,
    out: &mut W,
) -> Result<RunSummary> {
    let batch = Batch::parse(input)?;
    let mut summary = RunSummary {
        restaurants: batch.restaurants.len(),
        ..RunSummary::default()
    };

    for restaurant in batch.restaurants {
        session.register(restaurant);
    }

    for command in batch.commands {
        summary.commands += 1;
        for event in dispatch(session, command) {
            match event {
                Event::Notice(_) => summary.notices += 1,
                Event::Error(_) => summary.errors += 1,
            }
            writeln!(out, "{}", formatter.format(&event)?)?;
        }
    }

    out.flush()?;
    Ok(summary)
}
