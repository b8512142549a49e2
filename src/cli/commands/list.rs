use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::store::{NO_LOGS, SessionLogStore};
use crate::ui::messages::{header, info};
use crate::utils::formatting::{bold, or_placeholder};
use crate::utils::path::resolve_log_file;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { raw } = cmd {
        let store = SessionLogStore::open(resolve_log_file(&cfg.log_file))?;

        if *raw {
            println!("{}", store.render_log());
            return Ok(());
        }

        if store.is_empty() {
            info(NO_LOGS);
            return Ok(());
        }

        header(format!("Session log: {}", store.path().display()));
        print!("{}", build_table(store.entries()).render());
        println!("\n{} {}", bold("Sessions:"), store.len());
    }
    Ok(())
}

fn build_table(entries: &[SessionEntry]) -> Table {
    let mut table = Table::with_headers(&["Date", "Clock In", "Clock Out", "Total", "Task"]);

    for e in entries {
        // old single-punch rows carry their whole story in one line
        let task = if e.is_legacy() {
            e.describe()
        } else {
            e.task.clone()
        };

        table.add_row(vec![
            or_placeholder(&e.date),
            or_placeholder(&e.clock_in),
            or_placeholder(&e.clock_out),
            or_placeholder(&e.total_time),
            task,
        ]);
    }

    table
}
