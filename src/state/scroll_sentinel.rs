//! Visibility watcher for the marker row below the last card.

/// Fires a callback each time the marker scrolls into view.
///
/// The watcher only reacts while attached, and it is attached only while the
/// marker is part of the rendered list. Every hidden-to-visible transition
/// fires once; there is no debounce, so two transitions in quick succession
/// fire twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollSentinel {
    attached: bool,
    visible: bool,
    fired: u64,
}

impl ScrollSentinel {
    /// Detached watcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the watcher is attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the marker was visible at the last observation.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of times the callback has fired.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Attach or detach to match whether the marker is rendered.
    ///
    /// Detaching forgets the last visibility, so the marker counts as newly
    /// visible when it comes back.
    pub fn sync_marker(&mut self, marker_present: bool) {
        if marker_present {
            self.attached = true;
        } else {
            self.detach();
        }
    }

    /// Stop reacting to observations.
    pub fn detach(&mut self) {
        self.attached = false;
        self.visible = false;
    }

    /// Report the fraction of the marker currently on screen.
    ///
    /// Calls `on_visible` when the marker goes from hidden to visible.
    /// Returns whether it fired.
    pub fn observe<F: FnOnce()>(&mut self, intersection_ratio: f32, on_visible: F) -> bool {
        if !self.attached {
            return false;
        }

        let now_visible = intersection_ratio > 0.0;
        let entered = now_visible && !self.visible;
        self.visible = now_visible;

        if entered {
            self.fired += 1;
            on_visible();
        }
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> ScrollSentinel {
        let mut sentinel = ScrollSentinel::new();
        sentinel.sync_marker(true);
        sentinel
    }

    #[test]
    fn detached_watcher_never_fires() {
        let mut sentinel = ScrollSentinel::new();
        let mut calls = 0;
        sentinel.observe(1.0, || calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn fires_on_entering_view() {
        let mut sentinel = attached();
        let mut calls = 0;
        assert!(sentinel.observe(0.5, || calls += 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn staying_visible_does_not_refire() {
        let mut sentinel = attached();
        let mut calls = 0;
        sentinel.observe(1.0, || calls += 1);
        sentinel.observe(1.0, || calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn each_transition_fires_without_debounce() {
        let mut sentinel = attached();
        let mut calls = 0;
        sentinel.observe(1.0, || calls += 1);
        sentinel.observe(0.0, || calls += 1);
        sentinel.observe(1.0, || calls += 1);
        assert_eq!(calls, 2);
        assert_eq!(sentinel.fired(), 2);
    }

    #[test]
    fn zero_ratio_is_hidden() {
        let mut sentinel = attached();
        let mut calls = 0;
        sentinel.observe(0.0, || calls += 1);
        assert_eq!(calls, 0);
        assert!(!sentinel.is_visible());
    }

    #[test]
    fn detach_resets_visibility() {
        let mut sentinel = attached();
        let mut calls = 0;
        sentinel.observe(1.0, || calls += 1);

        sentinel.sync_marker(false);
        assert!(!sentinel.is_attached());
        sentinel.observe(1.0, || calls += 1);

        sentinel.sync_marker(true);
        sentinel.observe(1.0, || calls += 1);
        assert_eq!(calls, 2, "marker coming back counts as entering view");
    }
}
