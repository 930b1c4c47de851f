use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::errors::AppResult;
use crate::models::{CategoryStat, WeeklyStat};
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table, display_width};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { weekly, categories } = cmd {
        let store = LogStore::open(&cfg.database, 1, cfg.week_start)?;

        // Neither flag: show both
        let show_all = !*weekly && !*categories;

        if *weekly || show_all {
            print_weekly(&store.weekly_stats()?);
        }
        if *categories || show_all {
            print_categories(&store.category_stats()?);
        }
    }
    Ok(())
}

fn print_weekly(rows: &[WeeklyStat]) {
    if rows.is_empty() {
        warning("No entries recorded yet.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("WEEK", 9),
        Column::new("TOTAL", 8),
        Column::new("LOGS", 6),
        Column::new("AVG", 6),
    ]);
    for r in rows {
        table.add_row(vec![
            r.week.clone(),
            format!("{:.1}", r.total_hours),
            r.log_count.to_string(),
            format!("{:.1}", r.avg_hours),
        ]);
    }
    println!("{}", table.render());
}

fn print_categories(rows: &[CategoryStat]) {
    if rows.is_empty() {
        warning("No categories recorded yet.");
        return;
    }

    let width = rows
        .iter()
        .map(|r| display_width(&r.category))
        .max()
        .unwrap_or(0)
        .max("CATEGORY".len());

    let mut table = Table::new(vec![
        Column::new("CATEGORY", width + 1),
        Column::new("TOTAL", 8),
        Column::new("LOGS", 6),
        Column::new("AVG", 6),
    ]);
    for r in rows {
        table.add_row(vec![
            r.category.clone(),
            format!("{:.1}", r.total_hours),
            r.log_count.to_string(),
            format!("{:.1}", r.avg_hours),
        ]);
    }
    println!("{}", table.render());
}
