//! bikeshare main entrypoint.

use bikeshare::errors::AppError;
use bikeshare::run;

fn main() {
    match run() {
        Ok(()) => {}
        // the notice was already printed at the prompt
        Err(AppError::Cancelled) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
