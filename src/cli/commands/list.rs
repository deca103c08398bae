use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::duration::{total_display, worked_minutes};
use crate::core::calculator::weeks::WeekGroup;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::{load_entries, load_entries_between};
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::utils::colors::{RESET, color_for_total};
use crate::utils::date;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let entries = match period {
            Some(p) if !p.eq_ignore_ascii_case("all") => {
                let (start, end) = parse_range(p)?;
                load_entries_between(&mut pool, &start, &end)?
            }
            _ => load_entries(&mut pool)?,
        };

        if entries.is_empty() {
            println!("No entries found.");
            return Ok(());
        }

        let dashboard = Core::build_dashboard(
            &entries,
            date::today(),
            cfg.goal_hours,
            cfg.hours_per_day,
        );

        // Most recent week first; rows inside a week stay date-ascending.
        for group in dashboard.weeks.iter().rev() {
            print_week(group);
        }

        println!("Run `worklog report` for goal progress.");
    }
    Ok(())
}

fn print_week(group: &WeekGroup) {
    println!("{}", bold(&format!("Week {}", group.key)));

    let mut table = Table::new(vec![
        Column::left("date", 10),
        Column::left("in", 5),
        Column::left("out", 5),
        Column::right("lunch", 7),
        Column::right("total", 7),
        Column::left("holiday", 18),
    ]);

    for entry in &group.entries {
        table.add_row(vec![
            entry.date_str(),
            entry.start_display(),
            entry.end_display(),
            entry.lunch_display(),
            total_display(entry),
            entry.holiday_display(),
        ]);
    }

    print!("{}", table.render());

    println!(
        "Weekly total: {}{:.2} hrs{}\n",
        color_for_total(group.total_minutes),
        group.total_hours(),
        RESET
    );

    // Negative rows are never silently hidden; flag them once per week.
    if group.entries.iter().any(|e| worked_minutes(e) < 0) {
        println!("⚠️  This week contains entries with negative duration.\n");
    }
}
