mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use pop_my_balloons::compute::{init_state, tick, FrameInput};
use pop_my_balloons::config::GameConfig;
use pop_my_balloons::entities::{GameState, GameStatus};
use pop_my_balloons::error::GameError;
use pop_my_balloons::input::{
    dismisses_game_over, is_quit, HeldKeys, FIRE_KEY, LEFT_KEYS, RIGHT_KEYS,
};

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    GameOver,
}

/// Fixed-rate frame driver: poll input → tick → render → sleep.
///
/// Movement keys go through `HeldKeys`, which remembers when each key was
/// last pressed or repeated, so Left/Right stay live while held even on
/// terminals without release events.  Fire is edge-triggered on Space
/// presses only.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();
    let started = Instant::now();
    let mut held = HeldKeys::new();

    loop {
        let frame_start = Instant::now();
        let now_ms = started.elapsed().as_millis() as u64;
        let mut fire = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else {
                continue;
            };
            if is_quit(&key) {
                return Ok(LoopExit::Quit);
            }
            match key.kind {
                KeyEventKind::Press => {
                    held.seen(key.code, now_ms);
                    if key.code == FIRE_KEY {
                        fire = true;
                    }
                }
                KeyEventKind::Repeat => held.seen(key.code, now_ms),
                KeyEventKind::Release => held.released(key.code),
            }
        }

        let input = FrameInput {
            left: held.any_held(&LEFT_KEYS, now_ms),
            right: held.any_held(&RIGHT_KEYS, now_ms),
            fire,
            elapsed_ms: now_ms,
        };
        *state = tick(state, &input, &mut rng);

        display::render(out, state)?;

        if state.status == GameStatus::GameOver {
            return Ok(LoopExit::GameOver);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

/// Keep the game-over overlay up until Enter or a quit key is pressed.
/// Anything already queued from play is discarded first.
fn wait_for_dismiss(rx: &mpsc::Receiver<Event>) {
    while rx.try_recv().is_ok() {}
    while let Ok(ev) = rx.recv() {
        if let Event::Key(key) = ev {
            if dismisses_game_over(&key) {
                break;
            }
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let (config, config_path) = GameConfig::load()?;
    let log_path = config.display.log_path();
    if let Err(e) = init_logging(&log_path) {
        eprintln!("logging disabled: cannot open {}: {e}", log_path.display());
    }
    info!("starting with config from {}", config_path.display());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal lacks key-release events; using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("shutting down");
    result.map_err(GameError::from)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> std::io::Result<()> {
    let frame_time = Duration::from_secs(1) / config.display.framerate;
    let mut state = init_state(config.rules);

    match game_loop(out, &mut state, rx, frame_time)? {
        LoopExit::Quit => info!("quit after {} frames", state.frame),
        LoopExit::GameOver => wait_for_dismiss(rx),
    }
    Ok(())
}
