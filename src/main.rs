use std::process::ExitCode;

use unidump::{init_tracing, unidump, USAGE};

fn main() -> ExitCode {
    init_tracing();
    match unidump(std::env::args_os().skip(1).collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("unidump: {error}");
            if error.is_usage() {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}
