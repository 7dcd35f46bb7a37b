use super::*;

#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
    size: Option<(u32, u32)>,
}

impl LifecycleHandler for Recorder {
    fn window_created(&mut self, width: u32, height: u32) {
        self.calls.push("window_created");
        self.size = Some((width, height));
    }

    fn window_destroyed(&mut self) {
        self.calls.push("window_destroyed");
    }

    fn focus_lost(&mut self) {
        self.calls.push("focus_lost");
    }
}

#[test]
fn dispatch_routes_each_event_to_its_method() {
    let mut rec = Recorder::default();
    for ev in [
        LifecycleEvent::WindowCreated {
            width: 10,
            height: 20,
        },
        LifecycleEvent::FocusGained,
        LifecycleEvent::FocusLost,
        LifecycleEvent::WindowDestroyed,
        LifecycleEvent::DestroyRequested,
    ] {
        rec.dispatch(ev);
    }
    assert_eq!(
        rec.calls,
        vec!["window_created", "focus_lost", "window_destroyed"]
    );
    assert_eq!(rec.size, Some((10, 20)));
}

#[test]
fn scripted_events_release_in_tick_order() {
    let mut src = ScriptedEvents::new([
        (3, LifecycleEvent::FocusLost),
        (0, LifecycleEvent::FocusGained),
        (3, LifecycleEvent::DestroyRequested),
    ]);
    assert_eq!(src.poll(0), Some(LifecycleEvent::FocusGained));
    assert_eq!(src.poll(0), None);
    assert_eq!(src.poll(2), None);
    assert_eq!(src.poll(5), Some(LifecycleEvent::FocusLost));
    assert_eq!(src.poll(5), Some(LifecycleEvent::DestroyRequested));
    assert_eq!(src.poll(6), None);
    assert!(src.is_empty());
}

#[test]
fn events_use_snake_case_json() {
    let ev: LifecycleEvent =
        serde_json::from_str(r#"{"window_created":{"width":4,"height":2}}"#).unwrap();
    assert_eq!(
        ev,
        LifecycleEvent::WindowCreated {
            width: 4,
            height: 2
        }
    );
    let ev: LifecycleEvent = serde_json::from_str(r#""focus_lost""#).unwrap();
    assert_eq!(ev, LifecycleEvent::FocusLost);
}
