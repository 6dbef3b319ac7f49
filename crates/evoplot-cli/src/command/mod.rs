use clap::{Parser, Subcommand};

use self::{diversity::DiversityArg, generations::GenerationsArg};

mod diversity;
mod generations;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to aggregate and chart
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Aggregate generation logs across runs and chart each metric over time
    Generations(#[clap(flatten)] GenerationsArg),
    /// Compare pooled diversity scores across experiment variants
    Diversity(#[clap(flatten)] DiversityArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Generations(arg) => generations::run(&arg),
        Mode::Diversity(arg) => diversity::run(&arg),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_args_are_well_formed() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_generations_requires_input_dir() {
        let parsed = CommandArgs::try_parse_from(["evoplot", "generations"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_diversity_parses_with_defaults() {
        let parsed = CommandArgs::try_parse_from(["evoplot", "diversity"]);
        assert!(parsed.is_ok());
    }
}
