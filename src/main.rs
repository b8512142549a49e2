//! rClockInOut main entrypoint.

use rclockinout::run;
use rclockinout::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
