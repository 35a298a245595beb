use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        } else {
            warning("No configuration file yet, showing defaults");
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Report keys missing from the file. Returns how many are missing.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            warning(format!("Configuration file {} not found", path.display()));
            return Ok(0);
        }
        let missing = migrate::missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete");
        } else {
            for field in &missing {
                warning(format!("Missing field: {field}"));
            }
        }
        Ok(missing.len())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!("Configuration file {} not found", path.display()));
            return Ok(());
        }
        let added = migrate::complete_missing(path)?;
        if added.is_empty() {
            info("Nothing to migrate");
        } else {
            success(format!("Added default values for: {}", added.join(", ")));
        }
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited successfully using '{ed}'"));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{ed}' not available, falling back to '{default_editor}'"
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{ed}' exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
