//! Terminal host for the accessible combobox.
//!
//! Loads options from a JSON file (or inline JSON), shows the widget, and
//! prints the selected values on exit.

use std::fs::File;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use combobox::{ComboOption, Combobox, ComboboxConfig, OptionSource, DEFAULT_LABEL, DEFAULT_PLACEHOLDER};
use simplelog::{Config, LevelFilter, WriteLogger};

mod app;
mod error;
mod page;
mod terminal;

use app::App;
use error::AppError;
use terminal::Terminal;

/// Multi-select combobox in the terminal.
#[derive(Parser, Debug)]
#[command(name = "combobox-tui", version, about, long_about = None)]
struct Cli {
    /// JSON file with an array of {"label", "value"} options.
    #[arg(conflicts_with = "json")]
    options: Option<PathBuf>,

    /// Options as inline JSON instead of a file.
    #[arg(long)]
    json: Option<String>,

    /// Text shown while nothing is selected.
    #[arg(long, default_value = DEFAULT_PLACEHOLDER)]
    placeholder: String,

    /// Heading that labels the widget.
    #[arg(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// Options visible at once before the list scrolls (0 shows all).
    #[arg(long, default_value_t = 5)]
    list_height: u16,

    /// Print the widget's markup and exit instead of starting the UI.
    #[arg(long)]
    dump: bool,

    /// Where to write the log (stdout belongs to the UI).
    #[arg(long, default_value = "combobox.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("combobox-tui: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    init_logging(&cli)?;

    let source = load_options(&cli)?;
    let config = ComboboxConfig::new()
        .placeholder(cli.placeholder)
        .label(cli.label);
    let combobox = Combobox::with_options(config, source);
    log::info!("loaded {} options", combobox.options().len());

    if cli.dump {
        println!("{}", ariadom::to_markup(&combobox.render()));
        return Ok(());
    }

    let mut app = App::new(combobox, cli.list_height);
    {
        let mut term = Terminal::new()?;
        while !app.should_quit() {
            let (width, _) = term.size()?;
            let lines = app.lines(width);
            term.draw(&lines)?;

            let raw_events = term.poll(None)?;
            app.process(&raw_events);
        }
    }

    // Terminal restored; hand the selection to the caller
    for value in app.combobox.selected_values() {
        println!("{value}");
    }
    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let level = LevelFilter::from(cli.log_level);
    if level == LevelFilter::Off {
        return Ok(());
    }
    let log_file = File::create(&cli.log_file).map_err(|source| AppError::CreateLog {
        path: cli.log_file.clone(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}

fn load_options(cli: &Cli) -> Result<OptionSource, AppError> {
    if let Some(json) = &cli.json {
        return Ok(OptionSource::Json(json.clone()));
    }
    match &cli.options {
        Some(path) => std::fs::read_to_string(path)
            .map(OptionSource::Json)
            .map_err(|source| AppError::ReadOptions {
                path: path.clone(),
                source,
            }),
        None => Ok(OptionSource::Structured(sample_options())),
    }
}

fn sample_options() -> Vec<ComboOption> {
    [
        "Europe",
        "Asia",
        "Africa",
        "Australia",
        "North America",
        "South America",
    ]
    .into_iter()
    .map(ComboOption::simple)
    .collect()
}
