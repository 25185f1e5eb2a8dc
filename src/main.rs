use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use jackpot::core::config::{default_save_path, jackpot_dir};
use jackpot::ui::draw_ui;
use jackpot::utils::build_info::version_line;
use jackpot::utils::logging::init_file_logging;
use jackpot::{Directive, GameConfig, Intent, Session, LOG_FILE_NAME};

/// How long to wait for a key when no tick is pending.
const IDLE_POLL_MS: u64 = 250;

enum Command {
    Play(GameConfig),
    Version,
    Help,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args) {
        Ok(Command::Play(config)) => config,
        Ok(Command::Version) => {
            println!("{}", version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'jackpot --help' for usage.");
            std::process::exit(1);
        }
    };

    let log_dir = match &config.save_path {
        Some(path) => path.parent().map(PathBuf::from),
        None => jackpot_dir().ok(),
    };
    if let Some(dir) = log_dir {
        if let Err(e) = init_file_logging(&dir.join(LOG_FILE_NAME)) {
            eprintln!("Warning: could not open log file: {}", e);
        }
    }
    info!(save_path = ?config.save_path, "starting jackpot");

    let mut session = Session::open(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result?;
    println!("Goodbye!");
    Ok(())
}

/// Event loop: draw, wait for a key or the next tick, dispatch.
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut next_tick: Option<Instant> = session
        .resume_directive()
        .map(|Directive::ScheduleTick(delay)| Instant::now() + delay);

    loop {
        terminal.draw(|frame| draw_ui(frame, session))?;

        let timeout = match next_tick {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::from_millis(IDLE_POLL_MS),
        };

        let mut intents = Vec::with_capacity(2);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => intents.extend(key_intent(key)),
                Event::Resize(width, height) => intents.push(Intent::Resize { width, height }),
                _ => {}
            }
        }
        if next_tick.is_some_and(|deadline| Instant::now() >= deadline) {
            next_tick = None;
            intents.push(Intent::Tick);
        }

        for intent in intents {
            match session.handle(intent, &mut rng) {
                Ok(outcome) => {
                    if let Some(Directive::ScheduleTick(delay)) = outcome.directive {
                        next_tick = Some(Instant::now() + delay);
                    }
                    if outcome.quit {
                        return Ok(());
                    }
                }
                Err(err) => {
                    error!(%err, ?intent, "intent failed");
                    next_tick = None;
                }
            }
        }
    }
}

fn key_intent(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Char(' ') => Some(Intent::Spin),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::PurchaseTokens),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config = GameConfig::default();
    let mut save_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--save-file" | "-f" => {
                let path = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} needs a path", args[i]))?;
                save_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--no-fever" => config.features.fever = false,
            "--no-free-spins" => config.features.free_spins = false,
            "--no-penalty" => config.features.penalty = false,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config.save_path = match save_path {
        Some(path) => Some(path),
        None => match default_save_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(%e, "no save directory, progress will not be kept");
                eprintln!("Warning: {}. Progress will not be saved.", e);
                None
            }
        },
    };

    Ok(Command::Play(config))
}

fn print_help() {
    println!("Jackpot - Terminal Slot Machine\n");
    println!("Usage: jackpot [options]\n");
    println!("Options:");
    println!("  -f, --save-file PATH  Use PATH instead of ~/.jackpot/save.json");
    println!("  --no-fever            Remove the fever symbol from the reels");
    println!("  --no-free-spins       Remove the free spin symbol from the reels");
    println!("  --no-penalty          Remove the nighttime skull from the reels");
    println!("  -v, --version         Show version information");
    println!("  -h, --help            Show this help message");
    println!("\nKeys: space = spin, x = buy tokens, q = quit");
}
