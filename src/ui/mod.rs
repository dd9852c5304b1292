/// Screen building blocks
///
/// - `canvas.rs` - a single transformed photo card
/// - `clip.rs` - keeps a card's drawing inside its slot
/// - `carousel.rs` - the horizontal snapping list of cards
/// - `backdrop.rs` - crossfading blurred layers behind the list
/// - `spinner.rs` - loading indicator

pub mod backdrop;
pub mod canvas;
pub mod carousel;
pub mod clip;
pub mod spinner;
