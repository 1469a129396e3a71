//! History command implementation.
//!
//! This module implements the `history` command, which lists closed
//! parking sessions, newest first.

use std::io::Write;

use clap::Parser;
use lotkeeper::operations::history;

use crate::error::CliError;
use crate::utils::{format_timestamp, load_configuration, open_database, parse_plate, GlobalOptions};

/// List closed parking sessions.
#[derive(Parser)]
#[command(about = "List closed parking sessions, newest first")]
pub struct HistoryCommand {
    /// Restrict the listing to one plate
    #[arg(long, value_name = "PLATE")]
    pub plate: Option<String>,
}

impl HistoryCommand {
    /// Execute the history command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let plate = self.plate.as_deref().map(parse_plate).transpose()?;
        let entries = history(&db, plate.as_ref()).map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        if entries.is_empty() {
            if !global.quiet {
                writeln!(handle, "No closed sessions")?;
            }
            return Ok(());
        }

        writeln!(
            handle,
            "{:<12} {:<8} {:<20} {:<20} {:>7} {:>8}",
            "PLATE", "ZONE", "ENTERED", "EXITED", "MINUTES", "AMOUNT"
        )?;
        for entry in entries {
            let session = &entry.session;
            writeln!(
                handle,
                "{:<12} {:<8} {:<20} {:<20} {:>7} {:>8}",
                entry.plate.as_str(),
                session.zone.as_str(),
                format_timestamp(session.entered_at),
                session.exited_at.map(format_timestamp).unwrap_or_default(),
                session.elapsed_minutes.unwrap_or(0),
                session.amount.unwrap_or(0)
            )?;
        }

        Ok(())
    }
}
