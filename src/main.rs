mod config;
mod gradebook;
mod tui;

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{generate, Generator, Shell};
use config::{Config, ConfigError, KEYS};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gradebook::{parser, report, Gradebook};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::PathBuf;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Track student grades with undo and an activity log")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Run a command script and print the results")]
    Run {
        #[arg(help = "Script file to run (reads stdin when omitted)", value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value ('none' clears optional keys)")]
    Set {
        #[arg(help = "Configuration key", value_parser = KEYS)]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key", value_parser = KEYS)]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Config { action }) => {
            handle_config_command(action).map_err(anyhow::Error::from)
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
        Some(Commands::Run { file }) => run_script(file),
        None => run_main_app(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
    }
    Ok(())
}

/// Installs the diagnostic logger. Records go to the configured log file when
/// there is one; otherwise only warnings reach stderr, and only when the
/// terminal is not owned by the TUI.
fn init_logging(config: &Config, allow_stderr: bool) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path))?;
        env_logger::Builder::from_env(env)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if allow_stderr {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .target(env_logger::Target::Stderr)
            .init();
    }

    Ok(())
}

fn new_gradebook(config: &Config) -> Gradebook {
    Gradebook::bounded(config.log_capacity, config.undo_limit)
}

fn load_config() -> Result<Config> {
    Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))
}

fn run_script(file: Option<PathBuf>) -> Result<()> {
    let config = load_config()?;
    init_logging(&config, true)?;

    let content = match &file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?,
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read script from stdin")?;
            content
        }
    };

    let commands = parser::parse_script(&content)?;
    log::info!("running {} commands", commands.len());

    let mut book = new_gradebook(&config);
    for command in &commands {
        for line in report::execute(&mut book, command, config.log_lines) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn run_main_app() -> Result<()> {
    let config = load_config()?;
    init_logging(&config, false)?;

    let mut app = App::new(new_gradebook(&config), config.log_lines);
    log::info!("starting gradebook ui");

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
