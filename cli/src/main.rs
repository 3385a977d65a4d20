mod commands;
mod terminal;

use commands::{CommandLine, Commands, dependency_inversion, liskov, open_closed};
use solid_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        verbose: commands.verbose,
    };

    logging::init_logging(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Liskov { amount } => liskov::liskov(amount, &cfg)?,
        Commands::OpenClosed { salary } => open_closed::open_closed(salary, &cfg)?,
        Commands::DependencyInversion { data_source } => {
            dependency_inversion::dependency_inversion(data_source, &cfg)?
        }
    }

    print::end_of_program(&cfg);
    Ok(())
}
