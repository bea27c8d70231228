use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod classify;
mod client;
mod config;
mod error;
mod import;
mod input;
mod progress;
mod stats;
#[cfg(test)]
mod test_utils;
mod theme;

use app::{App, Phase};
use client::ClientOptions;
use error::SqlpvError;
use import::ImportHandle;

/// Pipe a SQL dump into the mysql client with live import progress
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pipe a SQL dump into the mysql client with live import progress",
    disable_help_flag = true
)]
struct Args {
    /// Target database
    target: String,

    /// MySQL host
    #[arg(short = 'h', long)]
    host: Option<String>,

    /// MySQL username
    #[arg(short, long)]
    user: Option<String>,

    /// MySQL password
    #[arg(short, long)]
    password: Option<String>,

    /// Continue even if we get an SQL error
    #[arg(short, long)]
    force: bool,

    /// Client binary to run instead of the configured one
    #[arg(long, value_name = "PROGRAM")]
    client: Option<String>,

    /// Expected input size in bytes, for piped input
    #[arg(long, value_name = "BYTES")]
    size: Option<u64>,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

fn main() -> Result<()> {
    // Writes to /tmp/sqlpv-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    // Load config early so CLI flags can override it
    let config_result = config::load_config();

    let args = Args::parse();

    let options = ClientOptions::new(args.target, &config_result.config.client)
        .with_program(args.client)
        .with_host(args.host)
        .with_user(args.user)
        .with_password(args.password)
        .with_force(args.force);

    client::validate_client_exists(&options.program)?;

    let total_bytes = match args.size {
        Some(size) => size,
        None => input::stdin_size()?,
    };

    let (mut child, sink) = options.spawn()?;

    let terminal = match init_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Closing the pipe lets the client exit on its own
            drop(sink);
            let _ = child.wait();
            return Err(e);
        }
    };

    let importer = ImportHandle::spawn(std::io::stdin(), sink, total_bytes);
    let app = App::new(importer, options.target.clone(), config_result.warning);
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    let phase = app.finish()?;
    let status = child.wait()?;
    log::debug!("{} exited with {} after phase {:?}", options.program, status, phase);

    if !status.success() && phase != Phase::Interrupted {
        return Err(SqlpvError::ClientFailed(status).into());
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SQLPV DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/sqlpv-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SQLPV DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        // Poll before render to pick up progress from the import thread
        app.poll_import();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
