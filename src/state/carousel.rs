//! Testimonial reel: circular slide rotation with pause-on-hover auto-play.

/// Auto-play advance interval.
pub const AUTOPLAY_INTERVAL_SECS: u64 = 5;

/// Current slide plus auto-play bookkeeping. Slide content lives with the
/// site data; the reel only tracks position.
#[derive(Debug, Clone, Default)]
pub struct TestimonialReel {
    current: usize,
    total: usize,
    hovered: bool,
}

impl TestimonialReel {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            hovered: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether the auto-play timer should be running at all.
    pub fn autoplay_active(&self) -> bool {
        self.total > 1 && !self.hovered
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + 1) % self.total;
    }

    pub fn prev(&mut self) {
        if self.total == 0 {
            return;
        }
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jumps to a dot's slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    /// One auto-play beat. Hovering pauses the reel; leaving re-arms it.
    pub fn tick(&mut self) {
        if self.autoplay_active() {
            self.next();
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
