use super::*;
use crate::encode::sink::{InMemorySink, NullSink};
use crate::foundation::error::RasterError;
use crate::host::lifecycle::ScriptedEvents;
use crate::host::surface::OffscreenSurface;
use crate::surface::frame::FrameRGBA;

fn offline(max: u64) -> RunOpts {
    RunOpts {
        max_frames: Some(max),
        paced: false,
        ..RunOpts::default()
    }
}

fn created(width: u32, height: u32) -> LifecycleEvent {
    LifecycleEvent::WindowCreated { width, height }
}

#[test]
fn ticks_without_window_are_skipped() {
    let mut surface = OffscreenSurface::new(0);
    let mut events = ScriptedEvents::new([(3, created(16, 12))]);
    let stats = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::new(),
        &offline(5),
        &mut NullSink,
    )
    .unwrap();

    assert_eq!(stats.ticks, 5);
    assert_eq!(stats.frames_skipped, 3);
    assert_eq!(stats.frames_rendered, 2);
    assert_eq!(stats.final_state.frame, 2);
    assert!(!stats.destroy_requested);
    assert_eq!(surface.presented_frames(), 2);
}

#[test]
fn destroy_requested_stops_before_rendering() {
    let mut surface = OffscreenSurface::new(2);
    let mut events = ScriptedEvents::new([
        (0, created(8, 8)),
        (2, LifecycleEvent::DestroyRequested),
    ]);
    let stats = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::new(),
        &offline(100),
        &mut NullSink,
    )
    .unwrap();

    assert!(stats.destroy_requested);
    assert_eq!(stats.ticks, 2);
    assert_eq!(stats.frames_rendered, 2);
}

#[test]
fn sink_receives_each_presented_frame() {
    let mut surface = OffscreenSurface::new(3);
    let mut events = ScriptedEvents::new([
        (0, created(20, 10)),
        (2, LifecycleEvent::WindowDestroyed),
        (3, created(20, 10)),
    ]);
    let mut sink = InMemorySink::new();
    let stats = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::new(),
        &offline(4),
        &mut sink,
    )
    .unwrap();

    assert_eq!(stats.frames_rendered, 3);
    assert_eq!(stats.frames_skipped, 1);
    assert!(sink.is_ended());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (20, 10));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert!(sink.frames().iter().all(|(_, f)| f.data.len() == 20 * 10 * 4));
}

#[test]
fn sink_is_untouched_when_nothing_renders() {
    let mut surface = OffscreenSurface::new(0);
    let mut events = ScriptedEvents::default();
    let mut sink = InMemorySink::new();
    let stats = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::with_angle(1.0),
        &offline(3),
        &mut sink,
    )
    .unwrap();

    assert_eq!(stats.frames_skipped, 3);
    assert_eq!(stats.final_state, AnimationState::with_angle(1.0));
    assert!(sink.config().is_none());
    assert!(!sink.is_ended());
}

#[test]
fn zero_max_frames_runs_no_ticks() {
    let mut surface = OffscreenSurface::new(0);
    let mut events = ScriptedEvents::new([(0, created(4, 4))]);
    let stats = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::new(),
        &offline(0),
        &mut NullSink,
    )
    .unwrap();
    assert_eq!(stats, RunStats::default());
}

#[derive(Default)]
struct FailingSink {
    pushed: usize,
    ended: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> RasterResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> RasterResult<()> {
        self.pushed += 1;
        if self.pushed == 2 {
            return Err(RasterError::encode("disk full"));
        }
        Ok(())
    }

    fn end(&mut self) -> RasterResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[test]
fn sink_is_closed_when_a_push_fails() {
    let mut surface = OffscreenSurface::new(0);
    let mut events = ScriptedEvents::new([(0, created(8, 8))]);
    let mut sink = FailingSink::default();
    let err = run(
        &mut surface,
        &mut events,
        &FrameCompositor::default(),
        AnimationState::new(),
        &offline(5),
        &mut sink,
    )
    .unwrap_err();

    assert!(matches!(err, RasterError::Encode(_)));
    assert_eq!(sink.pushed, 2);
    assert!(sink.ended);
}
