//! activitylog main entrypoint.

use activitylog::errors::AppError;
use activitylog::run;
use activitylog::ui::messages::warning;

fn main() {
    match run() {
        Ok(()) => {}
        Err(AppError::Validation(e)) => {
            warning(e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
