//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the lotkeeper data directory and database.

use std::path::PathBuf;

use clap::Parser;
use lotkeeper::database::default_data_dir;
use lotkeeper::operations::init::{init_database, InitOptions};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Initialize lotkeeper data directory and database.
#[derive(Parser)]
#[command(about = "Initialize lotkeeper data directory and database")]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// The --data-dir flag has a different meaning here (where to create,
    /// not where to find).
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        let result = init_database(&options).map_err(CliError::from)?;

        println!("Initialized lotkeeper in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
