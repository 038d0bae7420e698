// Host-side tests for the frame scheduler: pause/resume, resize and input.

use backdrop_core::constants::*;
use backdrop_core::*;

fn scheduler(w: f32, h: f32, dpr: f32) -> FrameScheduler<RecordingSurface> {
    let _ = env_logger::builder().is_test(true).try_init();
    FrameScheduler::new(
        RecordingSurface::new(true),
        Viewport::new(w, h, dpr),
        EngineConfig::default().with_seed(5),
    )
    .unwrap()
}

#[test]
fn startup_sizes_backing_store_and_transform() {
    let s = scheduler(800.0, 600.0, 1.5);
    assert_eq!(s.surface().backing, (1200, 900));
    assert!(s
        .surface()
        .ops
        .contains(&DrawOp::SetTransform([1.5, 0.0, 0.0, 1.5, 0.0, 0.0])));
}

#[test]
fn pixel_ratio_is_capped() {
    let mut s = scheduler(100.0, 100.0, 3.0);
    assert_eq!(s.viewport().dpr, DPR_MAX);
    assert_eq!(s.surface().backing, (200, 200));
    s.resize(100.0, 100.0, 1.0);
    assert_eq!(s.surface().backing, (100, 100));
}

#[test]
fn paused_ticks_do_nothing() {
    let mut s = scheduler(800.0, 600.0, 1.0);
    assert!(s.tick(0.0));
    s.set_paused(true);
    s.surface_mut().take_ops();
    let wheels = s.backdrop.wheels;
    for i in 1..10 {
        assert!(!s.tick(i as f64 * 16.0));
    }
    assert!(s.surface().ops.is_empty());
    assert_eq!(s.backdrop.wheels, wheels);

    s.set_paused(false);
    assert!(s.tick(10_000.0));
    // Resume takes a nominal step, not a jump for the hidden interval.
    let step = s.backdrop.wheels.cw - wheels.cw;
    assert!(step <= WHEEL_DELTA_CW * (FRAME_MS_CAP / FRAME_MS_NOMINAL) as f32 + 1e-6);
}

#[test]
fn long_gaps_are_capped() {
    let mut s = scheduler(800.0, 600.0, 1.0);
    s.tick(0.0);
    let before = s.backdrop.wheels.cw;
    s.tick(5_000.0);
    let step = s.backdrop.wheels.cw - before;
    let max = WHEEL_DELTA_CW * (FRAME_MS_CAP / FRAME_MS_NOMINAL) as f32;
    assert!((step - max).abs() < 1e-6);
}

#[test]
fn resize_updates_wrap_bounds() {
    let mut s = scheduler(800.0, 600.0, 1.0);
    s.resize(1920.0, 1080.0, 1.0);
    assert_eq!(s.viewport().width, 1920.0);
    assert_eq!(s.viewport().height, 1080.0);

    // A token parked beyond the old right edge must survive the new bounds.
    {
        let t = &mut s.backdrop.store.tokens[0];
        t.pos = glam::Vec2::new(1500.0, 900.0);
        t.vel = glam::Vec2::ZERO;
    }
    let mut ts = 0.0;
    for _ in 0..50 {
        ts += 16.67;
        s.tick(ts);
        for t in &s.backdrop.store.tokens {
            assert!(t.pos.x <= 1920.0 + WRAP_MARGIN);
            assert!(t.pos.y <= 1080.0 + WRAP_MARGIN);
        }
    }
    assert_eq!(s.backdrop.store.tokens[0].pos, glam::Vec2::new(1500.0, 900.0));
}

#[test]
fn shrinking_viewport_rewraps_tokens() {
    let mut s = scheduler(1920.0, 1080.0, 1.0);
    {
        let t = &mut s.backdrop.store.tokens[0];
        t.pos = glam::Vec2::new(1500.0, 200.0);
        t.vel = glam::Vec2::ZERO;
    }
    s.resize(800.0, 600.0, 1.0);
    s.tick(0.0);
    assert_eq!(s.backdrop.store.tokens[0].pos.x, -WRAP_MARGIN);
}

#[test]
fn input_only_mutates_state() {
    let mut s = scheduler(800.0, 600.0, 1.0);
    s.surface_mut().take_ops();
    s.pointer_move(12.0, 34.0);
    s.pointer_down(12.0, 34.0);
    assert!(s.surface().ops.is_empty());
    assert_eq!(s.backdrop.pointer.pos, glam::Vec2::new(12.0, 34.0));
    assert_eq!(s.backdrop.pointer.repel, 1.0);
    assert_eq!(s.backdrop.store.sparkles.len(), SPARKLE_BURST);
}

#[test]
fn invalid_config_refuses_to_start() {
    let cfg = EngineConfig {
        sparkle_burst: 0,
        ..EngineConfig::default()
    };
    let res = FrameScheduler::new(RecordingSurface::new(true), Viewport::default(), cfg);
    assert!(matches!(res, Err(BackdropError::Config(_))));
}

#[test]
fn teardown_empties_and_pauses() {
    let mut s = scheduler(800.0, 600.0, 1.0);
    s.pointer_down(1.0, 1.0);
    s.teardown();
    assert!(s.is_paused());
    assert!(s.backdrop.store.tokens.is_empty());
    assert!(s.backdrop.store.sparkles.is_empty());
    assert!(!s.tick(100.0));
}
