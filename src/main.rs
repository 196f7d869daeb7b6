//! timeshortcuts main entrypoint.

use timeshortcuts::run;
use timeshortcuts::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
