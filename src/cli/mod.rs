pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "biztime")]
#[command(about = "Biztime CLI - database administration for the Biztime API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending schema migrations")]
    Migrate,

    #[command(about = "Insert the sample companies, industries and invoices")]
    Seed,

    #[command(about = "Check database connectivity")]
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = crate::config::config();

    match cli.command {
        Commands::Migrate => commands::database::migrate(config, output_format).await,
        Commands::Seed => commands::database::seed(config, output_format).await,
        Commands::Health => commands::database::health(config, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_json_flag() {
        let cli = Cli::try_parse_from(["biztime", "seed", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Seed));
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Json);

        let cli = Cli::try_parse_from(["biztime", "migrate"]).unwrap();
        assert!(matches!(cli.command, Commands::Migrate));
        assert_eq!(OutputFormat::from_cli(&cli), OutputFormat::Text);
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["biztime", "drop-everything"]).is_err());
    }
}
