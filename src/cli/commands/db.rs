use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{check_integrity, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Database migrations completed.");
        }

        if *check {
            if check_integrity(&pool.conn)? {
                success("Database integrity check passed.");
            } else {
                error("Database integrity check FAILED.");
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database vacuum completed.");
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }

    Ok(())
}
