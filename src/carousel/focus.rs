use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared scroll focus (scroll offset in item slots)
///
/// One writer (the scroll handler) and any number of readers (every card
/// and backdrop layer while drawing). The value is stored as the bit
/// pattern of an `f32` in a single atomic word, so a reader always sees a
/// whole value.
#[derive(Debug, Clone, Default)]
pub struct ScrollFocus {
    bits: Arc<AtomicU32>,
}

impl ScrollFocus {
    /// Store a new focus. Non-finite values are ignored.
    pub fn publish(&self, focus: f32) {
        if focus.is_finite() {
            self.bits.store(focus.to_bits(), Ordering::Release);
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }
}
