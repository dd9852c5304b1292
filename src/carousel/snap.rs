//! Snap-to-item behaviour for the carousel
//!
//! The scrollable reports raw offsets. Once input goes quiet the list is
//! animated to a stride multiple chosen from the offset projected by the
//! remaining velocity, using a "fast" deceleration rate.

use std::time::{Duration, Instant};

use super::layout::CarouselLayout;

/// Quiet period after the last user scroll before snapping
pub const SETTLE_DELAY: Duration = Duration::from_millis(120);

/// Length of the snap animation
pub const SNAP_DURATION: Duration = Duration::from_millis(220);

/// Fraction of velocity kept per millisecond
pub const DECELERATION_RATE: f32 = 0.99;

/// Offsets closer than this are considered equal
const OFFSET_EPSILON: f32 = 0.5;

/// Where a fling at `velocity` (px/s) would come to rest
pub fn projected_offset(offset: f32, velocity: f32) -> f32 {
    let per_ms = velocity / 1000.0;
    offset + per_ms * DECELERATION_RATE / (1.0 - DECELERATION_RATE)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Time-based tween between two offsets
#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: Instant::now(),
            duration: SNAP_DURATION,
        }
    }
}

impl SnapAnimator {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
    }

    /// Offset for `now`, or `None` once finished. The final tick lands
    /// exactly on the target.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }

        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * ease_out_cubic(t))
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Follows user scroll input to estimate velocity and detect when it stops
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f32,
    last_at: Option<Instant>,
    /// px/s, smoothed
    velocity: f32,
    settled: bool,
}

impl ScrollTracker {
    /// Gaps longer than this restart velocity estimation
    const STALE: Duration = Duration::from_millis(100);

    pub fn record(&mut self, offset: f32, now: Instant) {
        if let Some(last_at) = self.last_at {
            let dt = now.saturating_duration_since(last_at);
            if dt >= Self::STALE {
                self.velocity = 0.0;
            } else if !dt.is_zero() {
                let instant = (offset - self.last_offset) / dt.as_secs_f32();
                self.velocity = 0.8 * instant + 0.2 * self.velocity;
            }
        }

        self.last_offset = offset;
        self.last_at = Some(now);
        self.settled = false;
    }

    /// Velocity left after the time spent idle since the last input
    pub fn velocity_at(&self, now: Instant) -> f32 {
        let idle_ms = self.idle_for(now).as_secs_f32() * 1000.0;
        self.velocity * DECELERATION_RATE.powf(idle_ms)
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        self.last_at
            .map(|last_at| now.saturating_duration_since(last_at))
            .unwrap_or_default()
    }

    /// User input arrived that has not been snapped yet
    pub fn is_pending(&self) -> bool {
        self.last_at.is_some() && !self.settled
    }

    fn settle(&mut self) {
        self.settled = true;
        self.velocity = 0.0;
    }
}

/// Decides when and where the carousel snaps
#[derive(Debug, Clone, Default)]
pub struct SnapController {
    tracker: ScrollTracker,
    animator: SnapAnimator,
    /// Offset we last asked the scrollable to move to
    programmatic: Option<f32>,
}

impl SnapController {
    /// Whether frame ticks are needed to make progress
    pub fn needs_frames(&self) -> bool {
        self.animator.is_active() || self.tracker.is_pending()
    }

    /// Feed a scroll report. Returns false for echoes of our own scroll
    /// commands, true for user input.
    pub fn on_scrolled(&mut self, offset: f32, now: Instant) -> bool {
        if let Some(expected) = self.programmatic.take() {
            if (expected - offset).abs() <= OFFSET_EPSILON {
                return false;
            }
        }

        if self.animator.is_active() {
            log::trace!("User scroll interrupted snap animation");
            self.animator.cancel();
        }
        self.tracker.record(offset, now);
        true
    }

    /// Advance on a frame tick. Returns the offset to scroll to, if any.
    pub fn on_frame(
        &mut self,
        now: Instant,
        current: f32,
        layout: &CarouselLayout,
        count: usize,
    ) -> Option<f32> {
        if !self.animator.is_active()
            && self.tracker.is_pending()
            && self.tracker.idle_for(now) >= SETTLE_DELAY
        {
            let projected = projected_offset(current, self.tracker.velocity_at(now));
            let target = layout.nearest_snap(projected, count);
            self.tracker.settle();

            if (target - current).abs() <= OFFSET_EPSILON {
                return None;
            }

            log::trace!("Snapping from {:.1} to {:.1}", current, target);
            self.animator.start(current, target, now);
        }

        let next = self.animator.tick(now)?;
        self.programmatic = Some(next);
        Some(next)
    }

    /// Animate to a neighbouring item (`delta` = -1 or +1)
    pub fn step(&mut self, delta: isize, current: f32, layout: &CarouselLayout, count: usize, now: Instant) {
        if count == 0 {
            return;
        }

        let base = if self.animator.is_active() {
            layout.nearest_index(self.animator.target(), count)
        } else {
            layout.nearest_index(current, count)
        };
        let index = base.saturating_add_signed(delta).min(count - 1);

        self.tracker.settle();
        self.animator.start(current, layout.offset_for_index(index), now);
    }

    /// Record an immediate programmatic jump (e.g. after a resize)
    pub fn jump_to(&mut self, offset: f32) {
        self.animator.cancel();
        self.tracker.settle();
        self.programmatic = Some(offset);
    }
}
