use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent button style with glow on hover.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: Color::WHITE,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(palette.glow)),
                shadow: Shadow {
                    color: Color { a: 0.6, ..palette.accent },
                    blur_radius: 12.0,
                    offset: Vector::new(0.0, 4.0),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(Color { a: 0.5, ..palette.accent })),
                ..base
            },
            _ => base,
        }
    }
}

/// Navigation entry: accent text when active, muted otherwise.
pub fn nav_link_style(
    palette: PaletteColors,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = match (active, status) {
            (true, _) => palette.accent,
            (false, button::Status::Hovered) => palette.text,
            (false, _) => palette.muted,
        };
        button::Style {
            background: active.then_some(Background::Color(Color { a: 0.12, ..palette.accent })),
            text_color,
            border: Border {
                radius: BUTTON_BORDER_RADIUS.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Round icon button used for the theme toggle and return-to-top.
pub fn icon_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.surface_raised)),
            text_color: palette.text,
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 999.0.into(),
            },
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                border: Border {
                    color: palette.glow,
                    ..base.border
                },
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}
