//! Terminal falling-blocks runner.
//!
//! Uses crossterm for input and the framebuffer renderer from the `term` crate.

use std::fs::File;
use std::io::BufWriter;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use falling_blocks::config::GameConfig;
use falling_blocks::core::{GameSession, GameSnapshot};
use falling_blocks::input::{handle_key_event, should_quit};
use falling_blocks::journal::Journal;
use falling_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use falling_blocks::types::FRAME_MS;

type FileJournal = Journal<BufWriter<File>>;

fn main() -> Result<()> {
    let config = GameConfig::from_env();

    let mut journal = config
        .log_path
        .as_deref()
        .and_then(|path| match Journal::open_file(path) {
            Ok(j) => Some(j),
            Err(e) => {
                eprintln!("[falling-blocks] journal disabled: {e:#}");
                None
            }
        });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut journal_error = None;
    let result = run(&mut term, &config, &mut journal, &mut journal_error);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(e) = journal_error {
        eprintln!("[falling-blocks] journal stopped: {e:#}");
    }
    if let Some(mut j) = journal {
        if let Err(e) = j.flush() {
            eprintln!("[falling-blocks] {e:#}");
        }
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    journal: &mut Option<FileJournal>,
    journal_error: &mut Option<anyhow::Error>,
) -> Result<()> {
    let mut session = GameSession::with_timing(config.seed, config.timing());

    let view = GameView;
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let mut last_tick = started;
    let frame = Duration::from_millis(FRAME_MS as u64);

    loop {
        write_events(&mut session, journal, journal_error, started);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Feed whole elapsed milliseconds to the clock, keeping the remainder.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        if elapsed_ms > 0 {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            session.tick(elapsed_ms);
        }
    }
}

fn write_events(
    session: &mut GameSession,
    journal: &mut Option<FileJournal>,
    journal_error: &mut Option<anyhow::Error>,
    started: Instant,
) {
    let Some(j) = journal.as_mut() else {
        session.drain_events().for_each(drop);
        return;
    };

    let ts = started.elapsed().as_millis() as u64;
    for event in session.drain_events() {
        if let Err(e) = j.record(&event, ts) {
            // Keep playing without the journal.
            *journal_error = Some(e);
            *journal = None;
            return;
        }
    }
}
