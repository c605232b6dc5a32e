mod config;
mod error;
mod page;
mod paths;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::page::Page;
use crate::terminal::Terminal;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn init_logging() {
    paths::rotate_logs();
    let path = paths::log_file()
        .filter(|path| path.parent().is_none_or(|dir| fs::create_dir_all(dir).is_ok()))
        .unwrap_or_else(|| PathBuf::from(paths::FALLBACK_LOG));

    let log_file = File::create(&path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
    log::info!("Logging to {}", path.display());
}

fn run() -> Result<(), DemoError> {
    let config = DemoConfig::load(std::env::args_os().nth(1).map(PathBuf::from))?;
    let mut page = Page::new(&config);
    let mut terminal = Terminal::new()?;

    while !page.should_quit() {
        terminal.draw(|buf| page.render(buf))?;
        for event in terminal.poll(Some(POLL_INTERVAL))? {
            page.handle(&event);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
