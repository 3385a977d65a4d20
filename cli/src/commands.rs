pub mod dependency_inversion;
pub mod liskov;
pub mod open_closed;

use clap::{Parser, Subcommand};
use solid_common::money::Amount;

#[derive(Parser)]
#[command(name = "solid")]
#[command(about = "Before-and-after walkthroughs of SOLID design principles.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Only print warnings and the summary line
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print every balance mutation and payslip calculation
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Accounts that can and cannot withdraw (Liskov Substitution)
    #[command(alias = "l")]
    Liskov {
        /// Amount deposited into and withdrawn from every account
        #[arg(long, default_value = "100")]
        amount: Amount,
    },
    /// Payslips for several contract kinds (Open/Closed)
    #[command(alias = "o")]
    OpenClosed {
        /// Base salary; the other contract kinds are derived from it
        #[arg(long, default_value = "3000")]
        salary: Amount,
    },
    /// Password reminders and their database connection (Dependency Inversion)
    #[command(alias = "d")]
    DependencyInversion {
        /// Data source handed to the connection
        #[arg(long)]
        data_source: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
