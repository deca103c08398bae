use crate::core::calculator::projection::GoalProjection;
use crate::utils::colors::{CYAN, GREEN, RESET, color_for_remaining};

/// Renders the goal summary block shown by the `report` command.
pub struct ReportLogic;

const BAR_WIDTH: usize = 30;

impl ReportLogic {
    pub fn print_summary(p: &GoalProjection, goal_hours: f64) {
        println!("📊 Goal progress ({:.0} h target)\n", goal_hours);

        println!(
            "{}• Total hours worked:{} {:.2} hrs",
            CYAN, RESET, p.total_hours_worked
        );
        println!(
            "{}• Remaining hours:{} {}{:.2} hrs{}",
            CYAN,
            RESET,
            color_for_remaining(p.remaining_hours),
            p.remaining_hours,
            RESET
        );
        println!("{}• Days rendered:{} {} days", CYAN, RESET, p.days_rendered);
        println!("{}• Days left:{} {} days", CYAN, RESET, p.days_left);
        println!(
            "{}• Expected end date:{} {}{}{}",
            CYAN,
            RESET,
            GREEN,
            p.expected_end_date.format("%a, %b %d, %Y"),
            RESET
        );
        println!("{}• Leave days:{} {}", CYAN, RESET, p.leave_days);

        match p.first_day_worked {
            Some(d) => println!("{}• First day worked:{} {}", CYAN, RESET, d.format("%Y-%m-%d")),
            None => println!("{}• First day worked:{} --", CYAN, RESET),
        }

        println!("\n{}", Self::render_bar(p.progress));
    }

    /// Progress bar over the raw fraction; display clamps to 0..=100 %,
    /// the underlying projection value stays unclamped.
    fn render_bar(progress: f64) -> String {
        let pct = (progress * 100.0).clamp(0.0, 100.0);
        let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;

        let mut bar = String::with_capacity(BAR_WIDTH + 16);
        bar.push('[');
        bar.push_str(GREEN);
        for _ in 0..filled {
            bar.push('█');
        }
        bar.push_str(RESET);
        for _ in filled..BAR_WIDTH {
            bar.push('░');
        }
        bar.push(']');
        bar.push_str(&format!(" {:.0}%", pct));
        bar
    }
}
