use crate::animation::TiltCardState;
use crate::constants::{CARD_CANVAS_MARGIN, CARD_HEIGHT, CARD_MEDIA_HEIGHT, CARD_WIDTH};
use crate::theme::PaletteColors;
use folio_core::constants::{TILT_BODY_DEPTH_PX, TILT_MEDIA_DEPTH_PX, TILT_PERSPECTIVE_PX};
use folio_core::content::Project;
use folio_core::TiltRotation;
use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme};
use std::f32::consts::PI;
use std::marker::PhantomData;

const INSET: f32 = 18.0;
const TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 14.0;
const LINE_SPACING: f32 = 20.0;
const BODY_WRAP_CHARS: usize = 48;

/// Splits `text` into lines of at most `max_chars` characters, breaking on
/// whitespace. A single word longer than the limit gets its own line.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Canvas program for a project card that tilts toward the pointer.
///
/// The card plane sits at depth 0, the media block and the text float in
/// front of it, so they shift against the plane as the card rotates.
pub struct TiltCardCanvas<'a, Message> {
    pub state: &'a TiltCardState,
    pub project: &'a Project,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> TiltCardCanvas<'a, Message> {
    pub fn new(state: &'a TiltCardState, project: &'a Project, palette: PaletteColors) -> Self {
        Self {
            state,
            project,
            palette,
            _marker: PhantomData,
        }
    }
}

struct Projector {
    rotation: TiltRotation,
    center: Point,
}

impl Projector {
    fn point(&self, x: f32, y: f32, z: f32) -> Point {
        let (px, py) = self.rotation.project([x, y, z], TILT_PERSPECTIVE_PX);
        Point::new(self.center.x + px, self.center.y + py)
    }

    /// Quad through four card-local corners at depth `z`.
    fn quad(&self, left: f32, top: f32, right: f32, bottom: f32, z: f32) -> Path {
        let corners = [
            self.point(left, top, z),
            self.point(right, top, z),
            self.point(right, bottom, z),
            self.point(left, bottom, z),
        ];
        Path::new(|builder| {
            builder.move_to(corners[0]);
            for corner in &corners[1..] {
                builder.line_to(*corner);
            }
            builder.close();
        })
    }

    fn text(&self, frame: &mut Frame, content: String, x: f32, y: f32, size: f32, color: Color) {
        frame.fill_text(canvas::Text {
            content,
            position: self.point(x, y, TILT_BODY_DEPTH_PX),
            color,
            size: size.into(),
            ..canvas::Text::default()
        });
    }
}

impl<'a, Message> canvas::Program<Message> for TiltCardCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let card = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let projector = Projector {
                rotation: self.state.transform.rotation(),
                center: frame.center(),
            };
            let half_w = CARD_WIDTH / 2.0;
            let half_h = CARD_HEIGHT / 2.0;
            let hovered = self.state.is_hovered();

            let plane = projector.quad(-half_w, -half_h, half_w, half_h, 0.0);
            frame.fill(&plane, self.palette.surface_raised);
            frame.stroke(
                &plane,
                Stroke::default()
                    .with_color(if hovered {
                        Color { a: 0.9, ..self.palette.accent }
                    } else {
                        self.palette.border
                    })
                    .with_width(if hovered { 2.0 } else { 1.0 }),
            );

            // Media block
            let media_top = -half_h + INSET;
            let media_bottom = media_top + CARD_MEDIA_HEIGHT;
            let media = projector.quad(-half_w + INSET, media_top, half_w - INSET, media_bottom, TILT_MEDIA_DEPTH_PX);
            let media_fill = gradient::Linear::new(
                projector.point(-half_w, media_top, TILT_MEDIA_DEPTH_PX),
                projector.point(half_w, media_bottom, TILT_MEDIA_DEPTH_PX),
            )
            .add_stop(0.0, self.palette.accent)
            .add_stop(1.0, self.palette.glow);
            frame.fill(&media, media_fill);

            // Body text
            let left = -half_w + INSET;
            let mut y = media_bottom + INSET;
            projector.text(frame, self.project.title.to_string(), left, y, TITLE_SIZE, self.palette.text);
            y += TITLE_SIZE + 8.0;
            for line in wrap_words(self.project.description, BODY_WRAP_CHARS).into_iter().take(3) {
                projector.text(frame, line, left, y, BODY_SIZE, self.palette.muted);
                y += LINE_SPACING;
            }
            projector.text(
                frame,
                self.project.tech.join(" · "),
                left,
                half_h - INSET - BODY_SIZE,
                BODY_SIZE - 1.0,
                self.palette.accent,
            );

            // Glare follows the smoothed tilt
            if hovered {
                let tilt = self.state.transform.smoothed();
                let center = frame.center();
                let angle = tilt.x + PI / 4.0;
                let glare_len = CARD_WIDTH * 1.5;
                let cx = center.x + tilt.x * 2.0 * CARD_WIDTH * 0.2;
                let cy = center.y + tilt.y * 2.0 * CARD_HEIGHT * 0.2;

                let start = Point::new(cx + angle.cos() * glare_len * 0.5, cy + angle.sin() * glare_len * 0.5);
                let end = Point::new(cx - angle.cos() * glare_len * 0.5, cy - angle.sin() * glare_len * 0.5);

                let glare = gradient::Linear::new(start, end)
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(0.5, Color { a: 0.1, ..Color::WHITE })
                    .add_stop(1.0, Color::TRANSPARENT);
                frame.fill(&plane, glare);
            }
        });
        vec![card]
    }
}

/// Canvas size for one card, with room for the projected corners.
pub fn card_canvas_size() -> (f32, f32) {
    (CARD_WIDTH + 2.0 * CARD_CANVAS_MARGIN, CARD_HEIGHT + 2.0 * CARD_CANVAS_MARGIN)
}
