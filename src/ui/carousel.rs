/// Foreground snapping list of photo cards
use std::collections::HashMap;

use iced::widget::{canvas, scrollable, Row};
use iced::{Color, Element, Length, Padding};

use super::canvas::PhotoCard;
use super::clip::clipped;
use crate::carousel::{CarouselLayout, ScrollFocus};
use crate::imaging::PhotoImages;
use crate::state::data::{Photo, PhotoId};
use crate::Message;

pub fn view<'a>(
    photos: &'a [Photo],
    images: &'a HashMap<PhotoId, PhotoImages>,
    layout: &CarouselLayout,
    focus: &ScrollFocus,
    id: scrollable::Id,
) -> Element<'a, Message> {
    let cards = photos.iter().enumerate().map(|(index, photo)| -> Element<'a, Message> {
        let card = PhotoCard {
            index,
            focus: focus.clone(),
            image: images.get(&photo.id).map(|images| images.card.clone()),
            aspect: aspect_of(photo),
            placeholder: photo.placeholder_color().unwrap_or(Color::from_rgb(0.9, 0.9, 0.9)),
        };

        // Scaled neighbours would otherwise spill over the focused card
        clipped(
            canvas(card)
                .width(Length::Fixed(layout.item_width))
                .height(Length::Fixed(layout.item_height)),
        )
        .into()
    });

    let row = Row::with_children(cards)
        .spacing(layout.spacing)
        .padding(Padding::from([0.0, layout.padding]));

    scrollable(row)
        .id(id)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .into()
}

fn aspect_of(photo: &Photo) -> f32 {
    if photo.height == 0 {
        return 0.0;
    }
    photo.width as f32 / photo.height as f32
}
