use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use clap::Parser;
use dashboard::config::Cli;
use dashboard::paths;
use log::{LevelFilter, debug, error, info, warn};
use relay::Server;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use tokio_util::sync::CancellationToken;

fn open_log_file() -> io::Result<File> {
    let path = paths::log_file()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;
    File::create(path)
}

/// Archive the previous run's log in the cache directory.
fn rotate_logs() -> io::Result<Option<PathBuf>> {
    let Some(dir) = paths::cache_dir() else {
        return Ok(None);
    };
    fs::create_dir_all(&dir)?;
    paths::rotate_logs(&dir, paths::KEPT_LOGS)
}

/// Terminal logger, plus the log file when the cache directory is usable.
fn init_logging(level: LevelFilter) {
    let rotated = rotate_logs();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    match open_log_file() {
        Ok(file) => loggers.push(WriteLogger::new(level, Config::default(), file)),
        Err(e) => eprintln!("Logging to terminal only: {}", e),
    }

    if let Err(e) = CombinedLogger::init(loggers) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match rotated {
        Ok(Some(archive)) => debug!("Previous log archived as {}", archive.display()),
        Ok(None) => {}
        Err(e) => warn!("Log rotation failed: {}", e),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let app = match cli.app.build() {
        Ok(app) => app,
        Err(e) => {
            error!("Invalid dashboard definition: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let server = match Server::new(app, cli.server_config()).bind().await {
        Ok(server) => server,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    println!("Dashboard running on http://{}", server.local_addr());

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received");
                shutdown.cancel();
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
        }
    });

    if let Err(e) = server.serve(cancel).await {
        eprintln!("Error: {}", e);
    }
}
