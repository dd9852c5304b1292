/// Clip a widget to its own layout bounds
///
/// Canvas programs can draw images outside the canvas (a scaled-up card
/// photo, for instance). Wrapping the canvas opens a renderer layer bounded
/// by the widget, so nothing it draws leaks into its neighbours.
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{tree, Tree, Widget};
use iced::mouse;
use iced::{Element, Length, Rectangle, Size};

pub struct Clipped<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
}

/// Wrap `content` so everything it draws stays inside its bounds
pub fn clipped<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> Clipped<'a, Message, Theme, Renderer> {
    Clipped {
        content: content.into(),
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Clipped<'a, Message, Theme, Renderer>
where
    Renderer: iced::advanced::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn tag(&self) -> tree::Tag {
        self.content.as_widget().tag()
    }

    fn state(&self) -> tree::State {
        self.content.as_widget().state()
    }

    fn children(&self) -> Vec<Tree> {
        self.content.as_widget().children()
    }

    fn diff(&self, tree: &mut Tree) {
        self.content.as_widget().diff(tree);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content.as_widget().layout(tree, renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        renderer.with_layer(layout.bounds(), |renderer| {
            self.content
                .as_widget()
                .draw(tree, renderer, theme, style, layout, cursor, viewport);
        });
    }
}

impl<'a, Message, Theme, Renderer> From<Clipped<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(clipped: Clipped<'a, Message, Theme, Renderer>) -> Self {
        Element::new(clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::renderer::Quad;
    use iced::widget::Space;
    use iced::{Background, Color, Point, Theme, Transformation};

    /// Renderer that only remembers which layers were opened
    #[derive(Default)]
    struct LayerRecorder {
        layers: Vec<Rectangle>,
        open: usize,
    }

    impl iced::advanced::Renderer for LayerRecorder {
        fn start_layer(&mut self, bounds: Rectangle) {
            self.layers.push(bounds);
            self.open += 1;
        }

        fn end_layer(&mut self) {
            self.open -= 1;
        }

        fn start_transformation(&mut self, _transformation: Transformation) {}

        fn end_transformation(&mut self) {}

        fn fill_quad(&mut self, _quad: Quad, _background: impl Into<Background>) {}

        fn clear(&mut self) {}
    }

    #[test]
    fn test_draw_opens_layer_at_card_bounds() {
        let element: Element<'_, (), Theme, LayerRecorder> =
            clipped(Space::new(Length::Fixed(100.0), Length::Fixed(176.0))).into();

        let mut renderer = LayerRecorder::default();
        let mut tree = Tree::new(&element);
        let limits = layout::Limits::new(Size::ZERO, Size::new(500.0, 500.0));
        let node = element.as_widget().layout(&mut tree, &renderer, &limits);

        element.as_widget().draw(
            &tree,
            &mut renderer,
            &Theme::Light,
            &renderer::Style {
                text_color: Color::BLACK,
            },
            Layout::new(&node),
            mouse::Cursor::Unavailable,
            &Rectangle::new(Point::ORIGIN, Size::new(500.0, 500.0)),
        );

        assert_eq!(
            renderer.layers,
            vec![Rectangle::new(Point::ORIGIN, Size::new(100.0, 176.0))]
        );
        assert_eq!(renderer.open, 0);
    }
}
