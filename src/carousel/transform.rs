//! Scroll focus to per-item visual transform
//!
//! Every card and backdrop layer derives its look from the shared focus
//! value alone, so this is a pure function that can run from any draw
//! call (or a test) without touching application state.

/// Card scale at `[i - 1, i, i + 1]`. Neighbours are drawn larger than the
/// focused card.
pub const SCALE_STOPS: [f32; 3] = [1.6, 1.0, 1.6];

/// Card rotation in degrees at `[i - 1, i, i + 1]`
pub const ROTATION_STOPS: [f32; 3] = [15.0, 1.0, -15.0];

/// Backdrop opacity at `[i - 1, i, i + 1]`
pub const OPACITY_STOPS: [f32; 3] = [0.0, 1.0, 0.0];

/// How one item is drawn for a given focus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Uniform scale of the card image
    pub scale: f32,
    /// Card image rotation in degrees (clockwise)
    pub rotation: f32,
    /// Opacity of this item's backdrop layer
    pub opacity: f32,
}

impl ItemTransform {
    /// The look of an item more than one slot away from focus
    pub const RECEDED: Self = Self {
        scale: SCALE_STOPS[0],
        rotation: ROTATION_STOPS[0],
        opacity: OPACITY_STOPS[0],
    };
}

/// Piecewise-linear interpolation over three ascending control points,
/// clamped to the end outputs outside `[input[0], input[2]]`.
pub fn interpolate(value: f32, input: [f32; 3], output: [f32; 3]) -> f32 {
    if value <= input[0] {
        return output[0];
    }
    if value >= input[2] {
        return output[2];
    }

    let segment = if value <= input[1] { 0 } else { 1 };
    let (x0, x1) = (input[segment], input[segment + 1]);
    let (y0, y1) = (output[segment], output[segment + 1]);

    if x1 == x0 {
        return y1;
    }

    y0 + (value - x0) / (x1 - x0) * (y1 - y0)
}

/// Transform of item `index` when the scroll focus is `focus`
///
/// A non-finite focus yields [`ItemTransform::RECEDED`].
pub fn transform(focus: f32, index: usize) -> ItemTransform {
    if !focus.is_finite() {
        return ItemTransform::RECEDED;
    }

    let i = index as f32;
    let stops = [i - 1.0, i, i + 1.0];

    ItemTransform {
        scale: interpolate(focus, stops, SCALE_STOPS),
        rotation: interpolate(focus, stops, ROTATION_STOPS),
        opacity: interpolate(focus, stops, OPACITY_STOPS),
    }
}
