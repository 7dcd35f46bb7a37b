use std::time::{Duration, Instant};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::RasterResult;
use crate::frame::animation::AnimationState;
use crate::frame::compositor::FrameCompositor;
use crate::host::lifecycle::{EventSource, LifecycleEvent, LifecycleHandler};
use crate::host::surface::Surface;

/// Host loop settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunOpts {
    /// Target tick rate when `paced`.
    pub fps: Fps,
    /// Stop after this many ticks. `None` runs until `DestroyRequested`.
    pub max_frames: Option<u64>,
    /// Sleep between ticks to hold `fps`. Off for offline runs and tests.
    pub paced: bool,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            max_frames: None,
            paced: true,
        }
    }
}

/// Summary returned by [`run`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Ticks executed, rendered or not.
    pub ticks: u64,
    pub frames_rendered: u64,
    /// Ticks where the surface had no buffer to lend.
    pub frames_skipped: u64,
    /// State to feed into the next frame.
    pub final_state: AnimationState,
    /// True when the loop ended on `DestroyRequested`.
    pub destroy_requested: bool,
}

/// Drive `surface` one tick at a time until `opts.max_frames` or `DestroyRequested`.
///
/// Every tick drains the due events into the surface, then locks, renders and presents. A tick
/// with no buffer is counted as skipped and the animation does not advance. Each presented
/// frame is forwarded to `sink`; `begin` is called lazily with the first frame's size and `end`
/// once the loop exits, on the error path as well. When both the loop and `end` fail, the loop's
/// error is returned and the `end` failure is logged.
pub fn run<S, E, K>(
    surface: &mut S,
    events: &mut E,
    compositor: &FrameCompositor,
    state: AnimationState,
    opts: &RunOpts,
    sink: &mut K,
) -> RasterResult<RunStats>
where
    S: Surface + LifecycleHandler + ?Sized,
    E: EventSource + ?Sized,
    K: FrameSink + ?Sized,
{
    let mut sink_open = false;
    let result = run_ticks(surface, events, compositor, state, opts, sink, &mut sink_open);
    if !sink_open {
        return result;
    }
    let ended = sink.end();
    match result {
        Ok(stats) => ended.map(|()| stats),
        Err(e) => {
            if let Err(end_err) = ended {
                tracing::warn!(error = %end_err, "failed to close sink after error");
            }
            Err(e)
        }
    }
}

fn run_ticks<S, E, K>(
    surface: &mut S,
    events: &mut E,
    compositor: &FrameCompositor,
    state: AnimationState,
    opts: &RunOpts,
    sink: &mut K,
    sink_open: &mut bool,
) -> RasterResult<RunStats>
where
    S: Surface + LifecycleHandler + ?Sized,
    E: EventSource + ?Sized,
    K: FrameSink + ?Sized,
{
    let interval = opts.fps.frame_duration();
    let start = Instant::now();
    let mut stats = RunStats {
        final_state: state,
        ..RunStats::default()
    };
    let mut skipping = false;

    'ticks: while opts.max_frames.is_none_or(|max| stats.ticks < max) {
        let tick = stats.ticks;
        while let Some(event) = events.poll(tick) {
            if event == LifecycleEvent::DestroyRequested {
                tracing::info!(tick, "destroy requested");
                stats.destroy_requested = true;
                break 'ticks;
            }
            surface.dispatch(event);
        }

        let rendered = match surface.lock()? {
            Some(mut buf) => {
                tracing::debug!(
                    tick,
                    width = buf.width(),
                    height = buf.height(),
                    stride = buf.stride(),
                    "locked buffer"
                );
                stats.final_state = compositor.render_frame(&mut buf, stats.final_state);
                true
            }
            None => false,
        };

        if rendered {
            surface.present()?;
            if let Some(frame) = surface.snapshot() {
                if !*sink_open {
                    sink.begin(SinkConfig {
                        width: frame.width,
                        height: frame.height,
                        fps: opts.fps,
                    })?;
                    *sink_open = true;
                }
                sink.push_frame(FrameIndex(stats.frames_rendered), &frame)?;
            }
            stats.frames_rendered += 1;
            skipping = false;
        } else {
            if !skipping {
                tracing::warn!(tick, "no drawable buffer, skipping frames");
            }
            skipping = true;
            stats.frames_skipped += 1;
        }

        stats.ticks += 1;
        if opts.paced {
            pace(start, interval, stats.ticks);
        }
    }

    Ok(stats)
}

fn pace(start: Instant, interval: Duration, ticks: u64) {
    let deadline = start + interval.mul_f64(ticks as f64);
    let now = Instant::now();
    if deadline > now {
        std::thread::sleep(deadline - now);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/runner.rs"]
mod tests;
