use super::palette::palette_from_mode;
use folio_core::ThemeMode;
use iced::{theme, Theme};

/// Builds the iced theme for the given mode.
pub fn app_theme(mode: ThemeMode) -> Theme {
    let p = palette_from_mode(mode);
    let (name, base) = match mode {
        ThemeMode::Light => ("Folio Light", theme::Palette::LIGHT),
        ThemeMode::Dark => ("Folio Dark", theme::Palette::DARK),
    };
    Theme::custom(
        name.to_string(),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: base.warning,
            danger: p.danger,
        },
    )
}
