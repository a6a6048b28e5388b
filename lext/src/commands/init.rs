//! Init command implementation.
//!
//! This module writes a default `lext.toml` into a directory so report
//! settings can be kept alongside the sources being analyzed.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::commands::common::error_messages;
use crate::commands::traits::{dispatch, Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{LextError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    pub force: bool,
    /// Target directory (default: current directory)
    pub path: Option<PathBuf>,
}

/// Init command executor.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// # Returns
    ///
    /// The path of the configuration file, whether it was written or kept.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self.get_target_path()?;

        self.validate_directory(&target_path)?;
        self.create_config_file(&target_path)
    }

    fn get_target_path(&self) -> Result<PathBuf> {
        match &self.args.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!("Creating directory: {}", path.display());
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(LextError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    fn create_config_file(&self, path: &Path) -> Result<PathBuf> {
        let config_path = path.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.args.force {
            warn!(
                "Configuration file already exists, skipping (use --force to overwrite): {}",
                config_path.display()
            );
            return Ok(config_path);
        }

        Config::default().save_to_path(&config_path)?;
        info!("Created file: {}", config_path.display());

        Ok(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default lext.toml"
    }

    fn help() -> &'static str {
        "Creates a lext.toml with the default report settings in the \
         specified or current directory."
    }
}

/// Run the init command with the given arguments.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    dispatch::<InitCommand>(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_default() {
        let args = InitArgs::default();
        assert!(!args.force);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = run_init(InitArgs {
            force: false,
            path: Some(temp_dir.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(config_path, temp_dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a").join("b");
        let config_path = run_init(InitArgs {
            force: false,
            path: Some(target.clone()),
        })
        .unwrap();
        assert!(target.is_dir());
        assert!(config_path.exists());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "verbose = true\n").unwrap();

        run_init(InitArgs {
            force: false,
            path: Some(temp_dir.path().to_path_buf()),
        })
        .unwrap();
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "verbose = true\n");

        run_init(InitArgs {
            force: true,
            path: Some(temp_dir.path().to_path_buf()),
        })
        .unwrap();
        assert_eq!(Config::load_from_path(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_rejects_file_target() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not_a_dir");
        std::fs::write(&file, "").unwrap();

        let result = run_init(InitArgs {
            force: false,
            path: Some(file),
        });
        assert!(matches!(result, Err(LextError::Validation(_))));
    }

    #[test]
    fn test_command_metadata() {
        assert_eq!(InitCommand::name(), "init");
        assert!(InitCommand::help().contains("lext.toml"));
    }
}
