use std::time::{Duration, Instant};

use rebound_core::{
    clamp::clamp, rest::resolve, Delta, ElasticPanel, Extents, Frame, FrameQueue, PanelConfig,
    Position,
};

fn extents() -> Extents {
    Extents::new(300.0, 300.0, 500.0, 300.0)
}

/// Fire frames every 16ms until the panel stops animating
fn run_until_idle(
    panel: &mut ElasticPanel,
    queue: &mut FrameQueue,
    start: Instant,
) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut now = start;
    while queue.has_pending() {
        now += Duration::from_millis(16);
        for handle in queue.take_due() {
            if let Some(frame) = panel.on_frame(handle, now, &extents(), queue) {
                frames.push(frame);
            }
        }
        assert!(now - start < Duration::from_secs(10), "animation never finished");
    }
    frames
}

#[test]
fn release_out_of_bounds_lands_on_rest_position() {
    let mut panel = ElasticPanel::with_defaults();
    let mut queue = FrameQueue::new();
    let t0 = Instant::now();

    panel.set_position(Position::new(-400.0, 0.0), &mut queue);
    panel.drag_end(&extents(), t0, &mut queue);
    let frames = run_until_idle(&mut panel, &mut queue, t0);

    let last = frames.last().copied().unwrap();
    assert!(last.is_last());
    assert_eq!(last.position, Position::new(-200.0, 0.0));
    assert_eq!(panel.pending_frame(), None);
    assert!(!queue.has_pending());
    // Every frame before the last was still running
    assert!(frames[..frames.len() - 1].iter().all(|f| !f.is_last()));
}

#[test]
fn drag_over_edge_and_release() {
    let mut panel = ElasticPanel::with_defaults();
    let mut queue = FrameQueue::new();

    panel.drag_start(&mut queue);
    for _ in 0..10 {
        panel.drag_move(Delta::new(-40.0, 0.0), &extents(), &mut queue);
    }
    // Dragging 400px left stops at the far hard stop
    assert_eq!(panel.position().x, -250.0);

    let t0 = Instant::now();
    panel.drag_end(&extents(), t0, &mut queue);
    run_until_idle(&mut panel, &mut queue, t0);
    assert_eq!(panel.position(), Position::new(-200.0, 0.0));
}

#[test]
fn drag_start_during_animation_hands_over_position() {
    let mut panel = ElasticPanel::with_defaults();
    let mut queue = FrameQueue::new();
    let t0 = Instant::now();

    panel.set_position(Position::new(-240.0, 0.0), &mut queue);
    panel.drag_end(&extents(), t0, &mut queue);

    // Two frames in, the user grabs the panel again
    let mut last_reported = None;
    for ms in [16, 32] {
        for handle in queue.take_due() {
            last_reported = panel
                .on_frame(handle, t0 + Duration::from_millis(ms), &extents(), &mut queue)
                .or(last_reported);
        }
    }
    let last_reported = last_reported.unwrap();
    let cancelled = queue.pending().to_vec();
    assert_eq!(cancelled.len(), 1);

    panel.drag_start(&mut queue);
    assert!(!queue.has_pending());

    let moved = panel.drag_move(Delta::new(0.0, 0.0), &extents(), &mut queue);
    assert_eq!(moved.x, last_reported.position.x);

    // A late callback for the cancelled frame does nothing
    assert!(panel
        .on_frame(cancelled[0], t0 + Duration::from_millis(48), &extents(), &mut queue)
        .is_none());
    assert_eq!(panel.position().x, last_reported.position.x);
    assert!(!queue.has_pending());
}

#[test]
fn resized_content_is_read_every_frame() {
    let mut panel = ElasticPanel::with_defaults();
    let mut queue = FrameQueue::new();
    let t0 = Instant::now();

    panel.set_position(Position::new(-230.0, 0.0), &mut queue);
    panel.drag_end(&extents(), t0, &mut queue);

    // Content grows mid-animation; the final frame still applies the original delta
    let grown = Extents::new(300.0, 300.0, 900.0, 300.0);
    let handle = queue.take_due()[0];
    let frame = panel
        .on_frame(handle, t0 + Duration::from_millis(600), &grown, &mut queue)
        .unwrap();
    assert!(frame.is_last());
    assert_eq!(frame.position.x, -200.0);
}

#[test]
fn clamp_and_resolve_agree_on_bounds() {
    let config = PanelConfig::default();
    let extents = extents();
    let mut position = Position::ORIGIN;
    for delta in [-90.0, -90.0, -90.0, -90.0, 300.0, 300.0] {
        position = clamp(
            position,
            Delta::new(delta, 0.0),
            &extents,
            config.tolerance,
            config.damping,
        );
        let rest = resolve(position, &extents);
        assert!((-200.0..=0.0).contains(&rest.x));
        assert!((rest.x - position.x).abs() <= config.tolerance);
    }
}
