//! The lightbox: a fullscreen viewer over the images currently visible in
//! the gallery.
//!
//! The navigable sequence is a snapshot taken when the lightbox opens; it is
//! not updated while the lightbox stays open. Navigation is circular in both
//! directions. While open, the page behind the overlay does not scroll; the
//! lock is a single flag, so opening twice still takes only one close to
//! restore it.

use crate::state::gallery::VisibleImage;

/// Minimum horizontal travel, in pixels, for a touch gesture to count as a
/// swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Everything the overlay needs to draw one frame of the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxFrame {
    pub source: String,
    pub caption: String,
    /// Prev/next controls are omitted entirely for single-image views.
    pub show_nav: bool,
    /// 1-based position readout, e.g. "3 / 8".
    pub position: usize,
    pub total: usize,
}

/// Direction resolved from a completed swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger travelled left: advance.
    Next,
    /// Finger travelled right: go back.
    Prev,
}

/// Tracks one horizontal touch gesture at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    /// Records where the finger went down. A new press replaces any gesture
    /// still in flight.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Resolves the gesture when the finger lifts. Travel below the
    /// threshold, or a lift without a matching press, resolves to nothing.
    pub fn end(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta < -SWIPE_THRESHOLD {
            Some(Swipe::Next)
        } else if delta > SWIPE_THRESHOLD {
            Some(Swipe::Prev)
        } else {
            None
        }
    }
}

/// Lightbox state: the open flag, the snapshot of visible images, and the
/// cursor into it.
///
/// Invariant: whenever the lightbox is open the view is non-empty and
/// `cursor < view.len()`. `open` refuses source keys that are not in the
/// snapshot instead of proceeding with an out-of-range cursor.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    open: bool,
    cursor: usize,
    view: Vec<VisibleImage>,
    swipe: SwipeTracker,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    /// Whether the page behind the overlay is allowed to scroll.
    pub fn scroll_enabled(&self) -> bool {
        !self.open
    }

    /// Opens the lightbox on `source`, adopting `view` as the navigable
    /// sequence. Returns `false` (and stays closed) when the view is empty
    /// or the source is not part of it.
    pub fn open(&mut self, view: Vec<VisibleImage>, source: &str) -> bool {
        let Some(index) = view.iter().position(|image| image.source == source) else {
            return false;
        };
        self.view = view;
        self.cursor = index;
        self.open = true;
        self.swipe = SwipeTracker::default();
        true
    }

    /// Closes the overlay and re-enables background scroll.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advances circularly. No-op on an empty view.
    pub fn next(&mut self) {
        let n = self.view.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % n;
    }

    /// Goes back circularly. No-op on an empty view.
    pub fn prev(&mut self) {
        let n = self.view.len();
        if n == 0 {
            return;
        }
        self.cursor = (self.cursor + n - 1) % n;
    }

    /// Feeds a finger-down position into the gesture tracker.
    pub fn touch_started(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Feeds a finger-up position; applies the resolved swipe, if any.
    pub fn touch_ended(&mut self, x: f32) -> Option<Swipe> {
        let swipe = self.swipe.end(x)?;
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
        }
        Some(swipe)
    }

    /// The current frame, or `None` while closed.
    pub fn frame(&self) -> Option<LightboxFrame> {
        if !self.open {
            return None;
        }
        let image = self.view.get(self.cursor())?;
        Some(LightboxFrame {
            source: image.source.clone(),
            caption: image.caption.clone(),
            show_nav: self.len() > 1,
            position: self.cursor() + 1,
            total: self.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(sources: &[&str]) -> Vec<VisibleImage> {
        sources
            .iter()
            .map(|s| VisibleImage {
                source: (*s).to_string(),
                caption: s.to_uppercase(),
            })
            .collect()
    }

    #[test]
    fn test_open_places_cursor_on_source() {
        let mut lightbox = Lightbox::new();
        assert!(lightbox.open(view(&["a.jpg", "c.jpg"]), "c.jpg"));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.cursor(), 1);
        assert_eq!(lightbox.frame().unwrap().caption, "C.JPG");
    }

    #[test]
    fn test_open_on_unknown_source_is_a_no_op() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(view(&["a.jpg"]), "missing.jpg"));
        assert!(!lightbox.is_open());
        assert!(lightbox.frame().is_none());
    }

    #[test]
    fn test_open_on_empty_view_is_a_no_op() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(Vec::new(), "a.jpg"));
        assert!(!lightbox.is_open());
        // Navigation on the empty view must not divide by zero.
        lightbox.next();
        lightbox.prev();
        assert_eq!(lightbox.cursor(), 0);
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let mut lightbox = Lightbox::new();
        // Filtered view [A, C]; opened on C.
        lightbox.open(view(&["a.jpg", "c.jpg"]), "c.jpg");
        assert_eq!(lightbox.cursor(), 1);
        lightbox.next();
        assert_eq!(lightbox.cursor(), 0);
        lightbox.prev();
        assert_eq!(lightbox.cursor(), 1);
    }

    #[test]
    fn test_next_then_prev_is_identity() {
        let mut lightbox = Lightbox::new();
        lightbox.open(view(&["a.jpg", "b.jpg", "c.jpg"]), "b.jpg");
        for _ in 0..5 {
            let before = lightbox.cursor();
            lightbox.next();
            lightbox.prev();
            assert_eq!(lightbox.cursor(), before);
            lightbox.prev();
            lightbox.next();
            assert_eq!(lightbox.cursor(), before);
            assert!(lightbox.cursor() < lightbox.len());
            lightbox.next();
        }
    }

    #[test]
    fn test_nav_controls_hidden_for_single_image() {
        let mut lightbox = Lightbox::new();
        lightbox.open(view(&["a.jpg"]), "a.jpg");
        assert!(!lightbox.frame().unwrap().show_nav);

        lightbox.open(view(&["a.jpg", "b.jpg"]), "a.jpg");
        assert!(lightbox.frame().unwrap().show_nav);
    }

    #[test]
    fn test_swipe_thresholds() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(200.0);
        assert_eq!(tracker.end(140.0), Some(Swipe::Next));

        tracker.begin(200.0);
        assert_eq!(tracker.end(260.0), Some(Swipe::Prev));

        tracker.begin(200.0);
        assert_eq!(tracker.end(220.0), None);
        tracker.begin(200.0);
        assert_eq!(tracker.end(180.0), None);

        // A lift without a press resolves to nothing.
        assert_eq!(tracker.end(0.0), None);
    }

    #[test]
    fn test_swipe_drives_navigation() {
        let mut lightbox = Lightbox::new();
        lightbox.open(view(&["a.jpg", "b.jpg"]), "a.jpg");

        lightbox.touch_started(300.0);
        assert_eq!(lightbox.touch_ended(230.0), Some(Swipe::Next));
        assert_eq!(lightbox.cursor(), 1);

        lightbox.touch_started(300.0);
        assert_eq!(lightbox.touch_ended(370.0), Some(Swipe::Prev));
        assert_eq!(lightbox.cursor(), 0);
    }

    #[test]
    fn test_scroll_lock_is_idempotent() {
        let mut lightbox = Lightbox::new();
        let v = view(&["a.jpg", "b.jpg"]);
        lightbox.open(v.clone(), "a.jpg");
        lightbox.open(v, "b.jpg");
        assert!(!lightbox.scroll_enabled());
        // One close restores scrolling even after two opens.
        lightbox.close();
        assert!(lightbox.scroll_enabled());
    }
}
