//! Terminal runtime and entry point.
//!
//! A thin loop around the library: a reader thread turns stdin lines into
//! [`Event`]s, and the main thread drains them, advances the frame clock and
//! redraws the screen.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐   mpsc    ┌──────────────────────────┐
//! │ stdin reader thread│ ────────▶ │ main thread              │
//! │ (blocking lines)   │  Command  │ Controller + frame loop  │
//! └────────────────────┘           └──────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `~/.config/gesture-ring/config.toml` is read first, then `key=value`
//! arguments override it:
//!
//! ```text
//! gesture-ring theme=lavender-day initial_context=media seed=7
//! ```
//!
//! # Commands
//!
//! One per line:
//!
//! - `enter`: Enter the main section
//! - `back`: Return to the landing section
//! - `left` / `swipe-left`, `right` / `swipe-right`, `tap`, `rotate`, `idle`
//! - `view <name>`: Switch tab
//! - `context <label>`: Switch context
//! - `dump [path]`: Write the session as JSON to `path`, or to stderr
//! - `quit`: Exit (end of input exits too)

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use gesture_ring::app::{Controller, Event};
use gesture_ring::scene::HeadlessFactory;
use gesture_ring::{Action, Config, GestureKind};

/// Ambient motion redraw period, in frames, when nothing else changed.
const AMBIENT_REDRAW_FRAMES: u64 = 6;

/// Fallback terminal height.
const DEFAULT_ROWS: usize = 24;
/// Fallback terminal width.
const DEFAULT_COLS: usize = 80;

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// A command that maps directly to an [`Event`].
    Event(Event),
    /// A word that is not a known command, dispatched as a gesture name.
    Gesture(String),
    /// Session dump, to a file or stderr.
    Dump(Option<PathBuf>),
}

/// Parses one stdin line.
///
/// The first word picks the command, case-insensitively; the rest of the line
/// is its argument. Words that are not commands are passed on as gesture
/// names, so `tap`, `rotate`, `idle` and `swipe-left` need no entry here.
///
/// # Returns
///
/// `None` for a blank line.
fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let event = match word.to_ascii_lowercase().as_str() {
        "" => return None,
        "enter" => Event::EnterExperience,
        "back" => Event::BackToLanding,
        "left" => Event::SimulateGesture(GestureKind::SwipeLeft),
        "right" => Event::SimulateGesture(GestureKind::SwipeRight),
        "view" => Event::SwitchView(rest.to_string()),
        "context" => Event::SwitchContext(rest.to_string()),
        "quit" | "q" => Event::Quit,
        "dump" => return Some(Command::Dump((!rest.is_empty()).then(|| PathBuf::from(rest)))),
        _ => return Some(Command::Gesture(word.to_string())),
    };
    Some(Command::Event(event))
}

/// Spawns the blocking stdin reader. The channel closes at end of input.
fn spawn_command_reader() -> Receiver<Command> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if tx.send(command).is_err() {
                    break;
                }
            }
        }
    });
    rx
}

/// Collects `key=value` arguments.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> BTreeMap<String, String> {
    args.into_iter()
        .filter_map(|arg| {
            let (key, value) = arg.split_once('=')?;
            Some((key.trim().to_string(), value.to_string()))
        })
        .collect()
}

/// User config file, then `key=value` arguments.
///
/// Runs before tracing is installed, so a broken config file is reported on
/// stderr and replaced by the defaults.
fn load_config() -> Config {
    let overrides = parse_args(std::env::args().skip(1));
    let mut config = Config::load_user().unwrap_or_else(|e| {
        eprintln!("gesture-ring: {e}, using defaults");
        Config::default()
    });
    config.apply_overrides(&overrides);
    config
}

/// Terminal size from `LINES` / `COLUMNS`, or 80x24.
fn terminal_size() -> (usize, usize) {
    let read = |name: &str, default: usize| {
        std::env::var(name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(default)
    };
    (read("LINES", DEFAULT_ROWS), read("COLUMNS", DEFAULT_COLS))
}

/// Writes the session dump to `target`, or to stderr.
fn write_dump(controller: &Controller<HeadlessFactory>, target: Option<&PathBuf>) -> gesture_ring::Result<()> {
    let json = controller.session_dump().to_json()?;
    match target {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            tracing::info!(path = %path.display(), "session dumped");
        }
        None => eprintln!("{json}"),
    }
    Ok(())
}

/// Feeds one command to the controller. Returns `Some(actions)` on success.
fn dispatch(controller: &mut Controller<HeadlessFactory>, command: Command) -> Option<(bool, Vec<Action>)> {
    let result = match command {
        Command::Event(event) => controller.handle_event(&event),
        Command::Gesture(name) => controller.simulate_gesture_named(&name),
        Command::Dump(target) => write_dump(controller, target.as_ref()).map(|()| (false, vec![])),
    };
    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            tracing::warn!(error = %e, "command rejected");
            None
        }
    }
}

/// Runs the session.
///
/// # Lifecycle
///
/// 1. Load configuration and install tracing
/// 2. Build the controller and start the stdin reader
/// 3. Each frame: drain commands, advance the clock, redraw if needed, sleep
/// 4. Exit on `quit` or end of input
fn main() {
    let config = load_config();
    let trace_file = gesture_ring::observability::init_tracing(&config);

    let span = tracing::info_span!("session");
    let _guard = span.entered();
    tracing::info!(trace_file = ?trace_file, seed = ?config.seed, "session started");

    let mut controller = gesture_ring::initialize(&config);
    let commands = spawn_command_reader();
    let frame_interval = config.frame_interval();
    let started = Instant::now();
    let mut frames: u64 = 0;
    let mut dirty = true;

    'session: loop {
        loop {
            match commands.try_recv() {
                Ok(command) => {
                    tracing::debug!(command = ?command, "command received");
                    if let Some((changed, actions)) = dispatch(&mut controller, command) {
                        dirty |= changed;
                        if actions.contains(&Action::Quit) {
                            break 'session;
                        }
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break 'session,
            }
        }

        let now = started.elapsed();
        match controller.handle_event(&Event::Frame { now }) {
            Ok((changed, actions)) => {
                dirty |= changed;
                for action in actions {
                    tracing::trace!(action = ?action, "frame action");
                }
            }
            Err(e) => tracing::error!(error = %e, "frame failed"),
        }

        frames += 1;
        if dirty || frames % AMBIENT_REDRAW_FRAMES == 0 {
            let (rows, cols) = terminal_size();
            let snapshot = controller.visible_snapshot();
            if let Err(e) = gesture_ring::ui::render(controller.state(), snapshot.as_ref(), rows, cols) {
                tracing::error!(error = %e, "render failed");
            }
            dirty = false;
        }

        thread::sleep(frame_interval.saturating_sub(started.elapsed().saturating_sub(now)));
    }

    tracing::info!(frames, uptime = ?started.elapsed(), "session ended");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("  enter "), Some(Command::Event(Event::EnterExperience)));
        assert_eq!(
            parse_command("left"),
            Some(Command::Event(Event::SimulateGesture(GestureKind::SwipeLeft)))
        );
        assert_eq!(
            parse_command("context  media "),
            Some(Command::Event(Event::SwitchContext("media".to_string())))
        );
        assert_eq!(parse_command("swipe-right"), Some(Command::Gesture("swipe-right".to_string())));
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn parses_dump_target() {
        assert_eq!(parse_command("dump"), Some(Command::Dump(None)));
        assert_eq!(
            parse_command("dump  /tmp/session.json "),
            Some(Command::Dump(Some(PathBuf::from("/tmp/session.json"))))
        );
    }

    #[test]
    fn dump_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut controller = gesture_ring::initialize(&Config::default());
        controller.simulate_gesture(GestureKind::Rotate);

        assert_eq!(dispatch(&mut controller, Command::Dump(Some(path.clone()))), Some((false, vec![])));
        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["gesture"], "rotate");
        assert_eq!(value["scene"]["kind"], "hero");
        assert_eq!(value["scene"]["ring_color"], "#6366f1");
    }

    #[test]
    fn parses_key_value_args() {
        let map = parse_args(["seed=3".to_string(), "verbose".to_string(), "theme=a=b".to_string()]);
        assert_eq!(map.get("seed").map(String::as_str), Some("3"));
        assert_eq!(map.get("theme").map(String::as_str), Some("a=b"));
        assert_eq!(map.len(), 2);
    }
}
