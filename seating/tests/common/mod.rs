//! Common test utilities for integration tests.
//!
//! Helpers for assembling batch input and replaying it through the library.

use seating::dispatch::{run, RunSummary};
use seating::output::OutputFormat;
use seating::{CancellationWindow, Session};

/// Builder for batch input text.
///
/// Restaurants added with [`BatchBuilder::restaurant`] form the leading
/// blocks; commands follow in the order they were added.
#[derive(Default)]
pub struct BatchBuilder {
    restaurants: Vec<String>,
    commands: Vec<String>,
}

#[allow(dead_code)]
impl BatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a restaurant open during `hours` on every weekday.
    pub fn restaurant(self, header: &str, hours: &str) -> Self {
        self.restaurant_week(header, [hours; 7])
    }

    /// Adds a restaurant with per-weekday hours, Monday first.
    pub fn restaurant_week(mut self, header: &str, week: [&str; 7]) -> Self {
        self.restaurants.push(block(header, week));
        self
    }

    /// Appends a raw command line.
    pub fn command(mut self, line: &str) -> Self {
        self.commands.push(line.to_string());
        self
    }

    /// Appends `LIST` followed by a restaurant block.
    pub fn list(mut self, header: &str, hours: &str) -> Self {
        self.commands.push(format!("LIST\n{}", block(header, [hours; 7])));
        self
    }

    pub fn build(&self) -> String {
        let mut text = format!("{}\n", self.restaurants.len());
        for restaurant in &self.restaurants {
            text.push_str(restaurant);
        }
        for command in &self.commands {
            text.push_str(command);
            if !command.ends_with('\n') {
                text.push('\n');
            }
        }
        text
    }
}

fn block(header: &str, week: [&str; 7]) -> String {
    let mut text = format!("{header}\n");
    for day in week {
        text.push_str(day);
        text.push('\n');
    }
    text
}

/// Replays `input` in text format and returns the output lines.
#[allow(dead_code)]
pub fn replay(input: &str) -> Vec<String> {
    replay_with(input, Session::default(), OutputFormat::Text).0
}

/// Replays `input` with an explicit session and format.
#[allow(dead_code)]
pub fn replay_with(
    input: &str,
    mut session: Session,
    format: OutputFormat,
) -> (Vec<String>, RunSummary, Session) {
    let mut out = Vec::new();
    let formatter = format.create_formatter();
    let summary = run(input, &mut session, formatter.as_ref(), &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, summary, session)
}

/// A session whose users may cancel anywhere inside the booking window.
#[allow(dead_code)]
pub fn lenient_session() -> Session {
    Session::new(1, CancellationWindow::BookingWindow)
}
