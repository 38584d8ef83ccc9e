use agro_assist_ui::state::request::RequestTracker;

#[test]
fn test_latest_token_is_current() {
    let tracker = RequestTracker::default();
    let first = tracker.issue();
    assert!(tracker.is_current(first));

    let second = tracker.issue();
    assert!(!tracker.is_current(first));
    assert!(tracker.is_current(second));
    assert_ne!(first, second);
}

#[test]
fn test_clones_share_generation() {
    let tracker = RequestTracker::default();
    let handle = tracker.clone();
    let token = tracker.issue();
    handle.issue();
    assert!(!tracker.is_current(token));
}

#[test]
fn test_retired_tracker_rejects_everything() {
    let tracker = RequestTracker::default();
    let token = tracker.issue();
    tracker.retire();
    assert!(!tracker.is_current(token));
    let late = tracker.issue();
    assert!(!tracker.is_current(late));
}
