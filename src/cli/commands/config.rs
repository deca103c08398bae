use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::env;
use std::fs;
use std::process::Command;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if !path.exists() {
            warning("No configuration file found. Run `worklog init` first.");
            return Ok(());
        }

        if *print_config {
            let content = fs::read_to_string(&path)?;
            println!("📄 {}\n", path.display());
            println!("{}", content);
        }

        if *check {
            let missing = migrate::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing configuration keys: {:?}", missing));
                info("Run `worklog config --migrate` to add them.");
            }
        }

        if *do_migrate {
            migrate::migrate_config()?;
        }

        if *edit_config {
            let editor_cmd = resolve_editor(editor.as_deref());
            info(format!("Opening {} with {}", path.display(), editor_cmd));

            let status = Command::new(&editor_cmd).arg(&path).status()?;
            if !status.success() {
                return Err(AppError::Config(format!(
                    "Editor '{}' exited with an error",
                    editor_cmd
                )));
            }
        }
    }

    Ok(())
}

/// Pick the editor: explicit flag, then $EDITOR/$VISUAL, then a
/// platform default.
fn resolve_editor(flag: Option<&str>) -> String {
    if let Some(e) = flag {
        return e.to_string();
    }
    if let Ok(e) = env::var("EDITOR") {
        return e;
    }
    if let Ok(e) = env::var("VISUAL") {
        return e;
    }
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}
