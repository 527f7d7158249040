//! Rotating ASCII cube (default binary).
//!
//! Renders frames until interrupted with Ctrl-C, then restores the terminal.
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};

use ascii_cube::core::FrameRenderer;
use ascii_cube::term::{FramePacer, TerminalSink};
use ascii_cube::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Frames between debug statistics lines (~10s at 60 FPS).
const STATS_EVERY: u64 = 600;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))?;
    }

    match crossterm::terminal::size() {
        Ok((w, h)) if (w as usize) < SCREEN_WIDTH || (h as usize) < SCREEN_HEIGHT => {
            warn!("terminal is {w}x{h}, frames need {SCREEN_WIDTH}x{SCREEN_HEIGHT}");
        }
        Ok(_) => {}
        Err(e) => debug!("could not query terminal size: {e}"),
    }

    info!("rendering {SCREEN_WIDTH}x{SCREEN_HEIGHT} frames, Ctrl-C to quit");

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let mut renderer = FrameRenderer::default();
    let result = run(&mut renderer, &mut sink, &running);

    // Always try to restore terminal state.
    let _ = sink.exit();
    info!("stopped after {} frames", renderer.frames_rendered());
    result
}

fn run(
    renderer: &mut FrameRenderer,
    sink: &mut TerminalSink,
    running: &AtomicBool,
) -> Result<()> {
    let pacer = FramePacer::default();
    let mut window_start = Instant::now();
    let mut overruns = 0u32;

    while running.load(Ordering::SeqCst) {
        let frame_started = Instant::now();
        renderer.step(sink)?;

        if pacer.overran(frame_started.elapsed()) {
            overruns += 1;
        }
        pacer.wait(frame_started);

        let frames = renderer.frames_rendered();
        if frames % STATS_EVERY == 0 {
            let secs = window_start.elapsed().as_secs_f64().max(f64::EPSILON);
            debug!(
                "frame {frames}: {:.1} fps, {overruns} overruns",
                STATS_EVERY as f64 / secs
            );
            window_start = Instant::now();
            overruns = 0;
        }
    }

    Ok(())
}

