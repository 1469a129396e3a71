//! Sweep command implementation.
//!
//! This module implements the `sweep` command, which deactivates expired
//! reservations in a single pass.

use clap::Parser;
use lotkeeper::operations::expire_stale_reservations;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Deactivate expired reservations.
#[derive(Parser)]
#[command(about = "Deactivate expired reservations")]
pub struct SweepCommand {
    /// Count stale reservations without deactivating them
    #[arg(long)]
    pub dry_run: bool,
}

impl SweepCommand {
    /// Execute the sweep command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let result = expire_stale_reservations(&mut db, self.dry_run).map_err(CliError::from)?;

        if global.quiet {
            println!("{}", result.deactivated);
        } else if result.dry_run {
            println!(
                "[DRY RUN] Would deactivate {} expired reservation(s)",
                result.deactivated
            );
        } else {
            println!("Deactivated {} expired reservation(s)", result.deactivated);
        }

        Ok(())
    }
}
