use super::*;
use crate::host::lifecycle::LifecycleEvent;

#[test]
fn lock_is_none_until_attached() {
    let mut s = OffscreenSurface::new(4);
    assert!(s.lock().unwrap().is_none());
    assert!(s.snapshot().is_none());
    assert!(s.present().is_err());

    s.attach(8, 3, 12).unwrap();
    let buf = s.lock().unwrap().unwrap();
    assert_eq!((buf.width(), buf.height(), buf.stride()), (8, 3, 12));
}

#[test]
fn attach_rejects_short_stride() {
    let mut s = OffscreenSurface::default();
    let err = s.attach(10, 2, 9).unwrap_err();
    assert!(matches!(err, RasterError::Surface(_)));
    assert!(!s.is_attached());
}

#[test]
fn zero_area_window_locks_nothing() {
    let mut s = OffscreenSurface::new(2);
    s.attach(0, 5, 2).unwrap();
    assert!(s.lock().unwrap().is_none());
    assert!(s.snapshot().is_none());
}

#[test]
fn padding_keeps_initial_fill_through_drawing() {
    let fill = Color(0xDEAD_BEEF);
    let mut s = OffscreenSurface::new(3).with_initial_fill(fill);
    s.dispatch(LifecycleEvent::WindowCreated {
        width: 5,
        height: 4,
    });
    assert_eq!(s.geometry(), Some((5, 4, 8)));

    {
        let mut buf = s.lock().unwrap().unwrap();
        buf.fill(Color::WHITE);
    }
    s.present().unwrap();

    let pad = s.padding_cells();
    assert_eq!(pad.len(), 3 * 4);
    assert!(pad.iter().all(|&c| c == fill.0));

    let snap = s.snapshot().unwrap();
    assert_eq!((snap.width, snap.height), (5, 4));
    assert_eq!(snap.data.len(), 5 * 4 * 4);
    assert!(snap.data.iter().all(|&b| b == 0xFF));
    assert_eq!(s.presented_frames(), 1);
}

#[test]
fn window_destroyed_detaches() {
    let mut s = OffscreenSurface::new(0);
    s.dispatch(LifecycleEvent::WindowCreated {
        width: 2,
        height: 2,
    });
    assert!(s.is_attached());
    s.dispatch(LifecycleEvent::FocusLost);
    assert!(s.is_attached());
    s.dispatch(LifecycleEvent::WindowDestroyed);
    assert!(!s.is_attached());
    assert!(s.padding_cells().is_empty());
    assert!(s.lock().unwrap().is_none());
}
