use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Total hours to render before the goal is met.
    #[serde(default = "default_goal_hours")]
    pub goal_hours: f64,

    /// Assumed length of one workday, used for day counts and the
    /// projected end date.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,

    /// Defaults applied by `checkin`.
    #[serde(default = "default_start_time")]
    pub default_start_time: String,
    #[serde(default = "default_end_time")]
    pub default_end_time: String,
    #[serde(default = "default_lunch_break")]
    pub default_lunch_break: i64,
}

fn default_goal_hours() -> f64 {
    300.0
}
fn default_hours_per_day() -> f64 {
    8.0
}
fn default_start_time() -> String {
    "08:00".to_string()
}
fn default_end_time() -> String {
    "17:00".to_string()
}
fn default_lunch_break() -> i64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            goal_hours: default_goal_hours(),
            hours_per_day: default_hours_per_day(),
            default_start_time: default_start_time(),
            default_end_time: default_end_time(),
            default_lunch_break: default_lunch_break(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (skipped in test mode so test runs never
        // touch the user's real configuration)
        if !is_test {
            config.save()?;
        }

        Ok(())
    }

    pub fn save(&self) -> io::Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(io::Error::other)?;
        fs::write(Self::config_file(), yaml)
    }
}
