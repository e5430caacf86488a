//! Page chrome: scroll-position observers, stat counters, and the marquee.
//!
//! These are independent, read-only observers of scroll position or timer
//! ticks; none of them touch gallery or lightbox state.

use std::collections::VecDeque;

/// Scroll offset past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Full counter run, zero to target.
pub const COUNTER_DURATION_MS: f32 = 2_000.0;

/// Counter animation tick cadence.
pub const COUNTER_TICK_MS: u64 = 16;

/// Marquee rotation cadence.
pub const MARQUEE_ROTATE_MS: u64 = 2_800;

/// One animated statistic, counting up from zero and latching at its target.
#[derive(Debug, Clone)]
pub struct StatCounter {
    pub label: String,
    target: u64,
    current: f64,
    done: bool,
}

impl StatCounter {
    pub fn new(label: impl Into<String>, target: u64) -> Self {
        Self {
            label: label.into(),
            target,
            current: 0.0,
            done: target == 0,
        }
    }

    /// The value to display right now.
    pub fn display(&self) -> u64 {
        if self.done {
            self.target
        } else {
            self.current as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    fn tick(&mut self) {
        if self.done {
            return;
        }
        let increment = self.target as f64 / (COUNTER_DURATION_MS / COUNTER_TICK_MS as f32) as f64;
        self.current += increment;
        if self.current >= self.target as f64 {
            self.done = true;
        }
    }
}

/// Scroll tracking and the tick-driven home-screen animations.
#[derive(Debug, Clone, Default)]
pub struct PageChrome {
    scroll_y: f32,
    viewport: Option<(f32, f32)>,
    counters: Vec<StatCounter>,
    counters_started: bool,
    marquee: VecDeque<String>,
}

impl PageChrome {
    pub fn new(counters: Vec<StatCounter>, marquee: Vec<String>) -> Self {
        Self {
            counters,
            marquee: marquee.into(),
            ..Self::default()
        }
    }

    /// Records the latest scroll offset and viewport size.
    pub fn on_scroll(&mut self, offset_y: f32, viewport_width: f32, viewport_height: f32) {
        self.scroll_y = offset_y;
        self.viewport = Some((viewport_width, viewport_height));
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Viewport last reported by the scrollable, or a conservative default
    /// before the first scroll event arrives.
    pub fn viewport_or_default(&self) -> (f32, f32) {
        self.viewport.unwrap_or((1_180.0, 720.0))
    }

    /// The nav bar drops a stronger shadow once the page is scrolled at all.
    pub fn navbar_elevated(&self) -> bool {
        self.scroll_y > 0.0
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll_y > SCROLL_TOP_THRESHOLD
    }

    /// Arms the counters the first time the stats come into view. Latches:
    /// revisiting the screen never restarts a finished count.
    pub fn start_counters(&mut self) {
        self.counters_started = true;
    }

    /// Whether the counter tick subscription should be running.
    pub fn counters_running(&self) -> bool {
        self.counters_started && self.counters.iter().any(|c| !c.is_done())
    }

    pub fn tick_counters(&mut self) {
        if !self.counters_started {
            return;
        }
        for counter in &mut self.counters {
            counter.tick();
        }
    }

    pub fn counters(&self) -> &[StatCounter] {
        &self.counters
    }

    /// Marquee entries in their current rotation order.
    pub fn marquee_entries(&self) -> impl Iterator<Item = &str> {
        self.marquee.iter().map(String::as_str)
    }

    pub fn marquee_is_empty(&self) -> bool {
        self.marquee.is_empty()
    }

    /// Shifts the first marquee entry to the back, producing the endless
    /// ticker effect.
    pub fn rotate_marquee(&mut self) {
        if let Some(front) = self.marquee.pop_front() {
            self.marquee.push_back(front);
        }
    }
}
