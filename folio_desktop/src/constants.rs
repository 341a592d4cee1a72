// Window
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// Page sections
pub const HERO_HEIGHT: f32 = 720.0;
pub const ABOUT_HEIGHT: f32 = 520.0;
pub const SKILLS_HEIGHT: f32 = 480.0;
pub const EXPERIENCE_HEIGHT: f32 = 520.0;
pub const CONTACT_HEIGHT: f32 = 640.0;
pub const FOOTER_HEIGHT: f32 = 140.0;
pub const SECTION_HEADER_HEIGHT: f32 = 120.0;
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

// Navigation
pub const NAV_HEIGHT: f32 = 64.0;
pub const NAV_BORDER_RADIUS: f32 = 16.0;

// Tilt cards
pub const CARD_WIDTH: f32 = 420.0;
pub const CARD_HEIGHT: f32 = 300.0;
/// Room around the card for the projected corners
pub const CARD_CANVAS_MARGIN: f32 = 28.0;
pub const CARDS_PER_ROW: usize = 2;
pub const CARD_ROW_SPACING: f32 = 24.0;
pub const CARD_MEDIA_HEIGHT: f32 = 110.0;

// Shapes
pub const INPUT_BORDER_RADIUS: f32 = 10.0;
pub const BUTTON_BORDER_RADIUS: f32 = 8.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;
pub const TOAST_WIDTH: f32 = 340.0;
