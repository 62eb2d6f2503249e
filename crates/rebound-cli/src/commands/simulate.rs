//! Headless replay: drags, release, and every return-animation frame

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use rebound_core::{
    rest::resolve, timing::as_millis_f64, AppConfig, Delta, ElasticPanel, Extents, Frame,
    FrameQueue, Size,
};

/// Frame rates above this are capped
const MAX_FPS: u32 = 1000;

pub struct Options {
    pub container: Size,
    pub content: Size,
    pub drags: Vec<Delta>,
    pub fps: u32,
}

pub fn run<W: Write>(config: &AppConfig, options: &Options, out: &mut W) -> Result<()> {
    if options.fps == 0 {
        bail!("--fps must be greater than zero");
    }
    let fps = if options.fps > MAX_FPS {
        tracing::warn!(requested = options.fps, max = MAX_FPS, "Frame rate capped");
        MAX_FPS
    } else {
        options.fps
    };
    let interval = Duration::from_secs(1) / fps;

    let extents = Extents::from_sizes(options.container, options.content);
    let mut panel = ElasticPanel::new(config.panel.clone());
    let mut queue = FrameQueue::new();

    writeln!(
        out,
        "container {}x{}  content {}x{}  rest x [{:.2}, 0]  y [{:.2}, 0]",
        options.container.width,
        options.container.height,
        options.content.width,
        options.content.height,
        extents.min_x(),
        extents.min_y(),
    )?;

    panel.drag_start(&mut queue);
    for (i, delta) in options.drags.iter().enumerate() {
        let position = panel.drag_move(*delta, &extents, &mut queue);
        writeln!(
            out,
            "drag  {:>3}  {:>+9.2} {:>+9.2}  -> {}",
            i + 1,
            delta.dx,
            delta.dy,
            position
        )?;
    }

    let target = resolve(panel.position(), &extents);
    let t0 = Instant::now();
    let Some(first) = panel.drag_end(&extents, t0, &mut queue) else {
        writeln!(out, "release at rest {}", panel.position())?;
        return Ok(());
    };
    writeln!(out, "release -> {}", target)?;
    write_frame(out, Duration::ZERO, &first)?;

    let mut frames = 1;
    let mut now = t0;
    while queue.has_pending() {
        now += interval;
        for handle in queue.take_due() {
            if let Some(frame) = panel.on_frame(handle, now, &extents, &mut queue) {
                write_frame(out, now - t0, &frame)?;
                frames += 1;
            }
        }
    }

    writeln!(out, "rest {} after {} frames", panel.position(), frames)?;
    Ok(())
}

fn write_frame<W: Write>(out: &mut W, elapsed: Duration, frame: &Frame) -> Result<()> {
    let marker = if frame.is_last() { "done" } else { "" };
    writeln!(
        out,
        "frame {:>8.2}ms  {}  {}",
        as_millis_f64(elapsed),
        frame.position,
        marker
    )?;
    Ok(())
}
