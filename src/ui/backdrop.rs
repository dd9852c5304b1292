/// Fullscreen crossfading backdrop
///
/// One blurred layer per photo, stacked in list order. Each layer's
/// opacity comes from the same focus value the cards use, so only the
/// photos within one slot of focus are visible.
use std::collections::HashMap;

use iced::widget::{container, image, Space, Stack};
use iced::{ContentFit, Element, Length};

use crate::carousel::transform;
use crate::imaging::PhotoImages;
use crate::state::data::{Photo, PhotoId};
use crate::Message;

pub fn view<'a>(
    photos: &'a [Photo],
    images: &'a HashMap<PhotoId, PhotoImages>,
    focus: f32,
) -> Element<'a, Message> {
    let layers = photos.iter().enumerate().map(|(index, photo)| {
        let opacity = transform(focus, index).opacity;
        layer(photo, images.get(&photo.id), opacity)
    });

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn layer<'a>(photo: &'a Photo, images: Option<&'a PhotoImages>, opacity: f32) -> Element<'a, Message> {
    match images {
        Some(images) => image(images.backdrop.clone())
            .content_fit(ContentFit::Cover)
            .opacity(opacity)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => {
            let color = photo.placeholder_color().unwrap_or(iced::Color::WHITE);
            container(Space::new(Length::Fill, Length::Fill))
                .style(move |_theme| container::Style {
                    background: Some(color.scale_alpha(opacity).into()),
                    ..container::Style::default()
                })
                .into()
        }
    }
}
