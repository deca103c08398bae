use crate::config::Config;
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::io;

/// Keys the current config schema expects.
const EXPECTED_KEYS: [&str; 6] = [
    "database",
    "goal_hours",
    "hours_per_day",
    "default_start_time",
    "default_end_time",
    "default_lunch_break",
];

/// Return the keys missing from the on-disk config file, if any.
/// Older releases wrote fewer keys; serde fills the defaults at load
/// time, but `--check` should still report the file as incomplete.
pub fn missing_keys() -> io::Result<Vec<&'static str>> {
    let path = Config::config_file();
    let content = fs::read_to_string(&path)?;

    let yaml: Value = serde_yaml::from_str(&content).map_err(io::Error::other)?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for key in EXPECTED_KEYS {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key);
            }
        }
    }

    Ok(missing)
}

/// Rewrite the config file with the full current schema, preserving
/// every value already present (defaults fill the gaps).
pub fn migrate_config() -> io::Result<bool> {
    let missing = missing_keys()?;

    if missing.is_empty() {
        info("Configuration file is already up to date.");
        return Ok(false);
    }

    info(format!("Adding missing configuration keys: {:?}", missing));

    // Load through serde so defaults apply, then write back complete.
    let cfg = Config::load();
    cfg.save()?;

    success("Configuration file migrated.");
    Ok(true)
}
