use iced::mouse::Cursor;
use iced::widget::canvas::{self, Path, Program};
use iced::widget::image::Handle;
use iced::{Color, Degrees, Point, Radians, Rectangle, Renderer, Size, Theme};

use crate::carousel::layout::ITEM_RADIUS;
use crate::carousel::{transform, ScrollFocus};

/// Canvas renderer for one carousel card
///
/// Reads the shared focus at draw time and applies the item's scale and
/// rotation to the photo. Until the photo arrives the card is filled with
/// its dominant color. The scaled photo is larger than the canvas, so the
/// carousel wraps every card in [`super::clip::clipped`].
#[derive(Debug, Clone)]
pub struct PhotoCard {
    /// Position of the photo in the list
    pub index: usize,
    /// Shared scroll focus
    pub focus: ScrollFocus,
    /// Decoded photo, if loaded
    pub image: Option<Handle>,
    /// Width / height of the photo, used to cover the card
    pub aspect: f32,
    pub placeholder: Color,
}

impl<Message> Program<Message> for PhotoCard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = bounds.size();

        let card = Path::rounded_rectangle(Point::ORIGIN, size, ITEM_RADIUS.into());
        frame.fill(&card, self.placeholder);

        if let Some(handle) = &self.image {
            let item = transform(self.focus.get(), self.index);
            let target = cover_rect(size, self.aspect, item.scale);

            frame.draw_image(
                target,
                canvas::Image::new(handle.clone()).rotation(Radians::from(Degrees(item.rotation))),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Rectangle centered in `card` that covers it at `aspect`, then scaled
fn cover_rect(card: Size, aspect: f32, scale: f32) -> Rectangle {
    let card_aspect = card.width / card.height;

    let covered = if !aspect.is_finite() || aspect <= 0.0 {
        card
    } else if aspect > card_aspect {
        // Wider than the card: match heights, crop the sides
        Size::new(card.height * aspect, card.height)
    } else {
        Size::new(card.width, card.width / aspect)
    };

    let scaled = Size::new(covered.width * scale, covered.height * scale);
    let top_left = Point::new(
        (card.width - scaled.width) / 2.0,
        (card.height - scaled.height) / 2.0,
    );

    Rectangle::new(top_left, scaled)
}
