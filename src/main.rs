use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    // File logger - the TUI owns the screen, so logs go to splitpane.log
    // in the current directory. A failed logger init is not fatal.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("splitpane.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("splitpane starting up");

    match splitpane::tui::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The terminal is already restored by the time run() returns.
            eprintln!("splitpane: {e}");
            ExitCode::FAILURE
        }
    }
}
