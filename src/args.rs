use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// The Discord bot scaffolder CLI.
#[derive(Parser, Debug)]
#[command(name = "botforge")]
#[command(about = "Scaffolds a discord.js bot project", long_about = None)]
pub struct Cli {
    /// Name of the bot folder to create.
    #[arg(short, long, default_value = "new_bot")]
    pub name: String,

    /// Path where to create the project (default: current directory).
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Database library to wire into the generated bot.
    #[arg(short = 'd', long = "dblib", value_enum, default_value = "none")]
    pub dblib: DbLibrary,

    /// Environment-variable loader to wire into the generated bot.
    #[arg(short = 'e', long = "varenv", value_enum, default_value = "none")]
    pub varenv: EnvLoader,
}

/// Database driver baked into the generated entry point.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbLibrary {
    /// Emit a mysql connection block and install the driver.
    Mysql,
    /// No database code in the generated bot.
    None,
}

/// Environment-variable loader baked into the generated entry point.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvLoader {
    /// Bootstrap dotenv before anything else in the generated bot.
    Dotenv,
    /// No loader; the bot reads the raw process environment.
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["botforge"]).unwrap();
        assert_eq!(cli.name, "new_bot");
        assert_eq!(cli.path, PathBuf::from("."));
        assert_eq!(cli.dblib, DbLibrary::None);
        assert_eq!(cli.varenv, EnvLoader::None);
    }

    #[test]
    fn test_short_aliases() {
        let cli =
            Cli::try_parse_from(["botforge", "-n", "bot1", "-p", "/tmp", "-d", "mysql", "-e", "dotenv"])
                .unwrap();
        assert_eq!(cli.name, "bot1");
        assert_eq!(cli.path, PathBuf::from("/tmp"));
        assert_eq!(cli.dblib, DbLibrary::Mysql);
        assert_eq!(cli.varenv, EnvLoader::Dotenv);
    }

    #[test]
    fn test_invalid_enum_values_rejected() {
        assert!(Cli::try_parse_from(["botforge", "--dblib", "postgres"]).is_err());
        assert!(Cli::try_parse_from(["botforge", "--varenv", "direnv"]).is_err());
    }
}
