use crate::animation::ParticleBackdropState;
use crate::theme::PaletteColors;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};
use std::marker::PhantomData;

/// Canvas program that replays the particle field's last recorded frame
/// over the hero background.
pub struct ParticleBackdrop<'a, Message> {
    pub state: &'a ParticleBackdropState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleBackdrop<'a, Message> {
    pub fn new(state: &'a ParticleBackdropState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleBackdrop<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let backdrop = self.state.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.palette.background);

            for circle in self.state.frame.circles() {
                let color = Color::from_rgba8(circle.color.r, circle.color.g, circle.color.b, circle.color.a);
                frame.fill(&Path::circle(Point::new(circle.x, circle.y), circle.radius), color);
            }
        });
        vec![backdrop]
    }
}
