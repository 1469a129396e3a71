//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AdmitCommand, DepartCommand, HistoryCommand, InitCommand, OccupancyCommand, RegisterCommand,
    ReserveCommand, RevenueCommand, SweepCommand, VehiclesCommand,
};

/// Command-line tool for managing parking lot slot allocation.
#[derive(Parser)]
#[command(name = "lotkeeper")]
#[command(version, about = "Manage parking lot admissions and reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "LOTKEEPER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "LOTKEEPER_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "LOTKEEPER_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Register a vehicle
    Register(RegisterCommand),

    /// List registered vehicles
    Vehicles(VehiclesCommand),

    /// Admit a vehicle into the lot
    Admit(AdmitCommand),

    /// Register a vehicle's exit and print the fee
    Depart(DepartCommand),

    /// Reserve an inside slot for a resident's vehicle
    Reserve(ReserveCommand),

    /// Deactivate expired reservations
    Sweep(SweepCommand),

    /// Show current lot occupancy
    Occupancy(OccupancyCommand),

    /// List closed parking sessions
    History(HistoryCommand),

    /// Report revenue for a calendar month
    Revenue(RevenueCommand),
}
