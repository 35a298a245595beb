//! Configuration file checks: detect keys missing from an older file and
//! fill them in with defaults without touching the values already there.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_as_yaml() -> AppResult<Value> {
    Ok(serde_yaml::to_value(Config::default())?)
}

/// Walk `defaults` and collect the dotted paths absent from `current`.
fn collect_missing(defaults: &Mapping, current: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, default_val) in defaults {
        let Some(name) = key.as_str() else { continue };
        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match (current.get(key), default_val.as_mapping()) {
            (None, _) => out.push(path),
            (Some(Value::Mapping(inner)), Some(default_inner)) => {
                collect_missing(default_inner, inner, &path, out)
            }
            _ => {}
        }
    }
}

/// Insert missing keys (recursively) from `defaults` into `current`.
fn fill_missing(defaults: &Mapping, current: &mut Mapping) {
    for (key, default_val) in defaults {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), default_val.clone());
            }
            Some(Value::Mapping(inner)) => {
                if let Some(default_inner) = default_val.as_mapping() {
                    fill_missing(default_inner, inner);
                }
            }
            Some(_) => {}
        }
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
    }
}

/// Dotted names of the keys the file at `path` does not define.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = defaults_as_yaml()?;
    let mut out = Vec::new();
    if let Some(defaults) = defaults.as_mapping() {
        collect_missing(defaults, &current, "", &mut out);
    }
    Ok(out)
}

/// Add every missing key with its default value. Returns what was added.
pub fn complete_missing(path: &Path) -> AppResult<Vec<String>> {
    let added = missing_fields(path)?;
    if added.is_empty() {
        return Ok(added);
    }

    let mut current = read_mapping(path)?;
    if let Some(defaults) = defaults_as_yaml()?.as_mapping() {
        fill_missing(defaults, &mut current);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current))?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    Ok(added)
}
