//! Revenue command implementation.
//!
//! This module implements the `revenue` command, which sums fees over a
//! calendar month, attributed by exit time.

use clap::Parser;
use lotkeeper::operations::monthly_revenue;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Report revenue for a calendar month.
#[derive(Parser)]
#[command(about = "Report revenue for a calendar month")]
pub struct RevenueCommand {
    /// Report year
    pub year: i32,

    /// Report month (1 through 12)
    pub month: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RevenueCommand {
    /// Execute the revenue command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let report = monthly_revenue(&db, self.year, self.month).map_err(CliError::from)?;

        if self.json {
            let by_plate: Vec<serde_json::Value> = report
                .by_plate
                .iter()
                .map(|(plate, total)| {
                    serde_json::json!({ "plate": plate.as_str(), "total": total })
                })
                .collect();
            let value = serde_json::json!({
                "year": report.year,
                "month": report.month,
                "total": report.total,
                "by_plate": by_plate,
            });
            match serde_json::to_string_pretty(&value) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => return Err(CliError::Io(std::io::Error::other(e))),
            }
            return Ok(());
        }

        if global.quiet {
            println!("{}", report.total);
            return Ok(());
        }

        println!(
            "Revenue for {}-{:02}: {}",
            report.year, report.month, report.total
        );
        for (plate, total) in &report.by_plate {
            println!("  {:<12} {}", plate.as_str(), total);
        }

        Ok(())
    }
}
