use std::collections::VecDeque;

/// Window and application events delivered by the host between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A drawable window exists with the given visible size.
    WindowCreated { width: u32, height: u32 },
    /// The window is gone; no buffer can be locked until the next `WindowCreated`.
    WindowDestroyed,
    FocusGained,
    FocusLost,
    /// The application should leave its frame loop.
    DestroyRequested,
}

/// Capability interface for reacting to lifecycle events, one method per event.
///
/// Every method defaults to a no-op so implementors only override what they care about.
pub trait LifecycleHandler {
    fn window_created(&mut self, _width: u32, _height: u32) {}
    fn window_destroyed(&mut self) {}
    fn focus_gained(&mut self) {}
    fn focus_lost(&mut self) {}

    /// Route `event` to the matching method. `DestroyRequested` is left to the loop.
    fn dispatch(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::WindowCreated { width, height } => self.window_created(width, height),
            LifecycleEvent::WindowDestroyed => self.window_destroyed(),
            LifecycleEvent::FocusGained => self.focus_gained(),
            LifecycleEvent::FocusLost => self.focus_lost(),
            LifecycleEvent::DestroyRequested => {}
        }
    }
}

/// Non-blocking source of lifecycle events.
pub trait EventSource {
    /// Next event due at or before `tick`, if any. Must not block.
    fn poll(&mut self, tick: u64) -> Option<LifecycleEvent>;
}

/// Deterministic event source: each event fires on a fixed tick.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    pending: VecDeque<(u64, LifecycleEvent)>,
}

impl ScriptedEvents {
    /// Events are delivered in tick order; ties keep their given order.
    pub fn new(events: impl IntoIterator<Item = (u64, LifecycleEvent)>) -> Self {
        let mut pending: Vec<_> = events.into_iter().collect();
        pending.sort_by_key(|&(tick, _)| tick);
        Self {
            pending: pending.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, tick: u64) -> Option<LifecycleEvent> {
        match self.pending.front() {
            Some(&(due, _)) if due <= tick => self.pending.pop_front().map(|(_, ev)| ev),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/lifecycle.rs"]
mod tests;
