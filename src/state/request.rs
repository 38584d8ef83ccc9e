use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

/// Identifies one outstanding request of a given kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct TrackerState {
    latest: Cell<u64>,
    retired: Cell<bool>,
}

/// Hands out request tokens and tells whether a completion may still write
/// to its view: only the latest token of a live view is current.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    inner: Rc<TrackerState>,
}

impl RequestTracker {
    pub fn issue(&self) -> RequestToken {
        let next = self.inner.latest.get() + 1;
        self.inner.latest.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        !self.inner.retired.get() && self.inner.latest.get() == token.0
    }

    /// Called when the owning view is torn down.
    pub fn retire(&self) {
        self.inner.retired.set(true);
    }
}

/// Tracker bound to the lifetime of the calling component.
#[hook]
pub fn use_request_tracker() -> RequestTracker {
    let tracker = (*use_memo((), |_| RequestTracker::default())).clone();
    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| move || tracker.retire());
    }
    tracker
}
