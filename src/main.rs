//! Terminal tile grid runner.
//!
//! Draws a fixed grid of outlined tiles with one highlighted cell and walks
//! that cell with the arrow keys. The grid re-centers and rescales once the
//! terminal settles at a new size; resize bursts are debounced so a
//! drag-resize triggers a single rebuild.

use std::env;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_tilegrid::cli;
use tui_tilegrid::core::Viewport;
use tui_tilegrid::input::{handle_key_event, is_move_kind, should_quit};
use tui_tilegrid::term::{FrameBuffer, GridScene, TerminalRenderer};
use tui_tilegrid::types::{GridConfig, FRAME_POLL_MS};

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = match cli::parse_args(&args)? {
        Some(config) => config,
        None => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route log records to the file named by `TILEGRID_LOG`.
///
/// Writing to the raw-mode terminal would scramble the screen, so without
/// that variable nothing is logged. `RUST_LOG` selects levels as usual.
fn init_logging() {
    let Ok(path) = env::var("TILEGRID_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("warning: cannot open log file {}", path);
        return;
    };
    let _ = env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

fn run(term: &mut TerminalRenderer, config: GridConfig) -> Result<()> {
    let started = Instant::now();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));

    let mut scene = GridScene::new(config, Viewport::new(w, h));
    let mut fb = FrameBuffer::new(w, h);
    let mut dirty = true;

    loop {
        if dirty {
            scene.render_into(&mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with a frame-length timeout; nothing else runs per frame.
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_move_kind(key.kind) {
                        if let Some(direction) = handle_key_event(key) {
                            dirty |= scene.on_direction(direction);
                        }
                    }
                }
                Event::Resize(w, h) => {
                    scene.on_resize(now_ms(started), Viewport::new(w, h));
                }
                _ => {}
            }
        }

        if scene.poll_rebuild(now_ms(started)) {
            term.invalidate();
            dirty = true;
        }
    }
}

fn now_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
