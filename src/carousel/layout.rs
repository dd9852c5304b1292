//! Carousel geometry derived from the screen width

/// Card width as a fraction of the screen width
pub const ITEM_WIDTH_RATIO: f32 = 0.7;

/// Card height / card width
pub const ITEM_ASPECT: f32 = 1.76;

/// Gap between cards
pub const ITEM_SPACING: f32 = 12.0;

/// Corner radius of a card
pub const ITEM_RADIUS: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub screen_width: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub spacing: f32,
    /// Leading and trailing padding, so the first and last card can be centered
    pub padding: f32,
}

impl CarouselLayout {
    pub fn new(screen_width: f32) -> Self {
        let screen_width = screen_width.max(0.0);
        let item_width = screen_width * ITEM_WIDTH_RATIO;

        Self {
            screen_width,
            item_width,
            item_height: item_width * ITEM_ASPECT,
            spacing: ITEM_SPACING,
            padding: (screen_width - item_width) / 2.0,
        }
    }

    /// Distance between two consecutive snap points
    pub fn stride(&self) -> f32 {
        self.item_width + self.spacing
    }

    /// Continuous focus value for a raw horizontal offset
    pub fn focus_for_offset(&self, offset: f32) -> f32 {
        let stride = self.stride();
        if stride <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        offset / stride
    }

    /// Raw offset that centers item `index`
    pub fn offset_for_index(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    /// Width of the scrolled row including padding
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 2.0 * self.padding;
        }
        2.0 * self.padding + count as f32 * self.item_width + (count - 1) as f32 * self.spacing
    }

    /// Largest reachable offset, which is also the last snap point
    pub fn max_offset(&self, count: usize) -> f32 {
        (self.content_width(count) - self.screen_width).max(0.0)
    }

    /// Nearest snap point to `offset` among `count` items
    pub fn nearest_snap(&self, offset: f32, count: usize) -> f32 {
        let index = self.nearest_index(offset, count);
        self.offset_for_index(index)
    }

    /// Index of the item closest to being centered at `offset`
    pub fn nearest_index(&self, offset: f32, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        // The row cannot scroll past its last card
        let offset = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset(count))
        } else {
            0.0
        };
        let index = self.focus_for_offset(offset).round() as usize;
        index.min(count - 1)
    }
}
