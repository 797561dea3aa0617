//! hourgrid main entrypoint.

use hourgrid::run;
use hourgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
