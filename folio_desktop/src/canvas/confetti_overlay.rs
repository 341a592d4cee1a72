use crate::animation::ConfettiState;
use folio_core::effects::Rgba;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

fn color(rgba: Rgba) -> Color {
    Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Transparent full-window canvas that replays the confetti frame.
pub struct ConfettiOverlay<'a, Message> {
    pub state: &'a ConfettiState,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ConfettiOverlay<'a, Message> {
    pub fn new(state: &'a ConfettiState) -> Self {
        Self {
            state,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ConfettiOverlay<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let pieces = self.state.cache.draw(renderer, bounds.size(), |frame| {
            for quad in self.state.frame.quads() {
                let [first, rest @ ..] = quad.corners;
                let path = Path::new(|builder| {
                    builder.move_to(Point::new(first.0, first.1));
                    for (x, y) in rest {
                        builder.line_to(Point::new(x, y));
                    }
                    builder.close();
                });
                frame.fill(&path, color(quad.color));
            }
            for circle in self.state.frame.circles() {
                frame.fill(&Path::circle(Point::new(circle.x, circle.y), circle.radius), color(circle.color));
            }
        });
        vec![pieces]
    }
}
