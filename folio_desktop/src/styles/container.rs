use crate::constants::{CARD_BORDER_RADIUS, NAV_BORDER_RADIUS};
use crate::theme::PaletteColors;
use folio_core::ToastKind;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Full-width section background, alternating between two surfaces.
pub fn section_style(palette: PaletteColors, alternate: bool) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(if alternate {
            palette.surface
        } else {
            palette.background
        })),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

/// Floating navigation bar. Condensed once the page has scrolled.
pub fn nav_bar_style(palette: PaletteColors, condensed: bool) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        if !condensed {
            return container::Style {
                background: None,
                text_color: Some(palette.text),
                ..Default::default()
            };
        }
        container::Style {
            background: Some(Background::Color(Color { a: 0.85, ..palette.surface })),
            text_color: Some(palette.text),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: NAV_BORDER_RADIUS.into(),
            },
            shadow: Shadow {
                color: Color { a: 0.25, ..Color::BLACK },
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..Default::default()
        }
    }
}

/// Raised panel for skill groups, experience entries and the contact form.
pub fn card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(palette.surface_raised)),
        text_color: Some(palette.text),
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn toast_style(palette: PaletteColors, kind: ToastKind) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        let tone = match kind {
            ToastKind::Success => palette.success,
            ToastKind::Error => palette.danger,
        };
        container::Style {
            background: Some(Background::Color(palette.surface_raised)),
            text_color: Some(palette.text),
            border: Border {
                color: tone,
                width: 1.5,
                radius: CARD_BORDER_RADIUS.into(),
            },
            shadow: Shadow {
                color: Color { a: 0.35, ..tone },
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        }
    }
}
