/// Carousel animation and layout math
///
/// Nothing in here depends on iced widgets, so it can be driven from the
/// renderer or from tests alike:
/// - `transform.rs` - focus value to scale / rotation / opacity
/// - `layout.rs` - card sizes, padding, snap points
/// - `focus.rs` - the shared scroll focus scalar
/// - `snap.rs` - settle detection and the snap animation

pub mod focus;
pub mod layout;
pub mod snap;
pub mod transform;

pub use focus::ScrollFocus;
pub use layout::CarouselLayout;
pub use snap::SnapController;
pub use transform::transform;
