/// Indeterminate progress indicator shown while the search is loading
use std::f32::consts::{PI, TAU};

use iced::widget::canvas::{self, path, LineCap, Path, Stroke};
use iced::{Color, Point, Radians, Rectangle};

/// Length of the visible arc
const SWEEP: f32 = 1.5 * PI;

/// Rotations per second
const SPEED: f32 = 1.2;

/// Rotating arc
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Current rotation of the arc start, in radians
    pub phase: f32,
    pub color: Color,
}

impl Spinner {
    /// Spinner rotated for `elapsed` seconds since loading started
    pub fn at(elapsed: f32) -> Self {
        Self {
            phase: (elapsed * SPEED * TAU).rem_euclid(TAU),
            color: Color::BLACK,
        }
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let width = (bounds.width.min(bounds.height) * 0.1).max(2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - width;

        if radius <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center: Point::new(bounds.width / 2.0, bounds.height / 2.0),
                radius,
                start_angle: Radians(self.phase),
                end_angle: Radians(self.phase + SWEEP),
            });
        });

        frame.stroke(
            &arc,
            Stroke::default()
                .with_color(self.color)
                .with_width(width)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
