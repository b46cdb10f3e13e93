//! Command to replay a reservation batch.

use crate::error::CliError;
use crate::utils::{load_configuration, read_input, GlobalOptions};
use clap::Args;
use seating::dispatch::run;
use seating::{CancellationWindow, Config, Session};
use std::io;
use std::path::PathBuf;

/// Replay a batch and print one line per event.
#[derive(Args)]
pub struct RunCommand {
    /// Batch file to read (stdin if omitted or `-`)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Simulated day the batch starts on
    #[arg(long, value_name = "DAY")]
    pub start_day: Option<i64>,

    /// Which offsets allow users to cancel without contacting the restaurant
    #[arg(long, value_enum, value_name = "POLICY")]
    pub cancellation_window: Option<CancellationWindow>,
}

impl RunCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(day) = self.start_day {
            if day < 1 {
                return Err(CliError::InvalidArguments(format!(
                    "--start-day must be at least 1, got {day}"
                )));
            }
        }

        let config = load_configuration(
            global,
            Config {
                start_day: self.start_day,
                cancellation_window: self.cancellation_window,
                ..Config::default()
            },
        )?;
        log::debug!(
            "starting on day {} with {:?} cancellation, {} output",
            config.start_day(),
            config.cancellation_window(),
            config.output_format()
        );

        let input = read_input(self.file.as_deref())?;
        let mut session = Session::from_config(&config);
        let formatter = config.output_format().create_formatter();

        let stdout = io::stdout();
        let summary = run(&input, &mut session, formatter.as_ref(), &mut stdout.lock())?;

        log::info!(
            "processed {} command(s) for {} restaurant(s): {} notice(s), {} error(s); ended on day {}",
            summary.commands,
            summary.restaurants,
            summary.notices,
            summary.errors,
            session.today()
        );

        Ok(())
    }
}
