use folio_core::ThemeMode;
use iced::Color;

/// Core colour palette for the page.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    /// Light theme palette
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(255, 255, 255),
            surface: Color::from_rgb8(248, 250, 252),     // slate-50
            surface_raised: Color::from_rgb8(241, 245, 249), // slate-100
            border: Color::from_rgb8(226, 232, 240),      // slate-200
            text: Color::from_rgb8(15, 23, 42),           // slate-900
            muted: Color::from_rgb8(71, 85, 105),         // slate-600
            accent: Color::from_rgb8(79, 70, 229),        // indigo-600
            accent_soft: Color::from_rgb8(165, 180, 252), // indigo-300
            success: Color::from_rgb8(22, 163, 74),
            danger: Color::from_rgb8(220, 38, 38),
            glow: Color::from_rgb8(99, 102, 241),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(2, 6, 23),       // slate-950
            surface: Color::from_rgb8(15, 23, 42),        // slate-900
            surface_raised: Color::from_rgb8(30, 41, 59), // slate-800
            border: Color::from_rgb8(51, 65, 85),         // slate-700
            text: Color::from_rgb8(241, 245, 249),
            muted: Color::from_rgb8(148, 163, 184),       // slate-400
            accent: Color::from_rgb8(99, 102, 241),       // indigo-500
            accent_soft: Color::from_rgb8(67, 56, 202),   // indigo-700
            success: Color::from_rgb8(74, 222, 128),
            danger: Color::from_rgb8(248, 113, 113),
            glow: Color::from_rgb8(129, 140, 248),
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns palette for a specific theme mode
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}
