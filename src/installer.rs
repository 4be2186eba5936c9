//! Dependency installation for the generated project.
//!
//! The package manager is invoked with a discrete argument vector, never a
//! shell string, so dependency names are not subject to shell interpretation.

use crate::error::{Result, ScaffoldError};
use log::info;
use std::path::Path;
use std::process::Command;

const PACKAGE_MANAGER: &str = "npm";
const INSTALL_SUBCOMMAND: &str = "install";

/// Argument vector for the install invocation.
fn install_args(dependencies: &[&str]) -> Vec<String> {
    let mut args = vec![INSTALL_SUBCOMMAND.to_string()];
    args.extend(dependencies.iter().map(|dep| dep.to_string()));
    args
}

/// Human-readable command line, used in log and error messages only.
fn render_command_line(args: &[String]) -> String {
    format!("{} {}", PACKAGE_MANAGER, args.join(" "))
}

/// Installs `dependencies` into `project_root`, blocking until completion.
///
/// Standard streams are inherited so the package manager's own output is
/// visible. A non-zero exit status is an error, not a warning.
pub fn install(project_root: &Path, dependencies: &[&str]) -> Result<()> {
    let args = install_args(dependencies);
    let command_line = render_command_line(&args);

    info!("Installing necessary dependencies...");
    let status = Command::new(PACKAGE_MANAGER)
        .args(&args)
        .current_dir(project_root)
        .status()
        .map_err(|source| ScaffoldError::InstallSpawn {
            command: command_line.clone(),
            source,
        })?;

    if !status.success() {
        return Err(ScaffoldError::InstallFailed {
            command: command_line,
            status,
        });
    }

    info!("Dependencies installed: {}", dependencies.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_args_are_a_discrete_vector() {
        let args = install_args(&["discord.js", "mysql", "dotenv"]);
        assert_eq!(args, vec!["install", "discord.js", "mysql", "dotenv"]);
    }

    #[test]
    fn test_command_line_rendering() {
        let args = install_args(&["discord.js"]);
        assert_eq!(render_command_line(&args), "npm install discord.js");
    }
}
