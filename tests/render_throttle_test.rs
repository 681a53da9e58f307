use tui_memory::term::{frame_fingerprint, RenderThrottle};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
}

#[test]
fn render_throttle_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(t.should_render(1, 2));
}

#[test]
fn render_throttle_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    assert!(!t.should_render(10, 1));
    assert!(!t.should_render(249, 1));
    assert!(t.should_render(250, 1));
}

#[test]
fn render_throttle_mark_dirty_forces_render() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1));
    t.mark_dirty();
    assert!(t.should_render(5, 1));
    assert!(!t.should_render(6, 1));
}

#[test]
fn frame_fingerprint_tracks_revision_cursor_and_size() {
    let base = frame_fingerprint(3, 0, (80, 24));
    assert_ne!(base, frame_fingerprint(4, 0, (80, 24)));
    assert_ne!(base, frame_fingerprint(3, 1, (80, 24)));
    assert_ne!(base, frame_fingerprint(3, 0, (81, 24)));
    assert_eq!(base, frame_fingerprint(3, 0, (80, 24)));
}
