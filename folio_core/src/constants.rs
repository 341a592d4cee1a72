// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;

// Particle field
pub const PARTICLE_SPACING_PX: u32 = 15;
pub const PARTICLE_MAX_SPEED: f32 = 0.15;
pub const PARTICLE_MIN_RADIUS: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_MIN_OPACITY: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5;
/// Indigo-500
pub const PARTICLE_COLOR_RGB: (u8, u8, u8) = (99, 102, 241);

// Scroll tracking
pub const PROBE_OFFSET_PX: f32 = 150.0;
pub const NAV_CONDENSE_THRESHOLD_PX: f32 = 50.0;
pub const SCROLL_TOP_THRESHOLD_PX: f32 = 400.0;
pub const NAV_SCROLL_OFFSET_PX: f32 = 80.0;

// Pointer tilt
pub const TILT_MAX_ANGLE_DEG: f32 = 12.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_MEDIA_DEPTH_PX: f32 = 50.0;
pub const TILT_BODY_DEPTH_PX: f32 = 20.0;
pub const TILT_SPRING_STIFFNESS: f32 = 150.0;
/// 2 * sqrt(150): critical damping for unit mass
pub const TILT_SPRING_DAMPING: f32 = 24.494_898;

// Spring rest detection
pub const SPRING_THRESHOLD: f32 = 0.0005;

// Text reveal
pub const HERO_GREETING_CHAR_MS: u64 = 100;
pub const HERO_GREETING_DELAY_MS: u64 = 500;

// Confetti burst
pub const CONFETTI_PARTICLE_COUNT: usize = 100;
pub const CONFETTI_SPREAD_DEG: f32 = 70.0;
/// Launch direction, degrees counter-clockwise from the +x axis (90 = up)
pub const CONFETTI_ANGLE_DEG: f32 = 90.0;
pub const CONFETTI_ORIGIN_X: f32 = 0.5;
pub const CONFETTI_ORIGIN_Y: f32 = 0.6;
pub const CONFETTI_START_VELOCITY: f32 = 45.0;
/// Per-tick velocity multiplier
pub const CONFETTI_DECAY: f32 = 0.9;
/// Downward pixels per tick
pub const CONFETTI_GRAVITY: f32 = 3.0;
/// Frames each piece lives
pub const CONFETTI_TICKS: u32 = 200;
pub const CONFETTI_WOBBLE_PX: f32 = 10.0;
pub const CONFETTI_COLORS: [(u8, u8, u8); 7] = [
    (0x26, 0xcc, 0xff),
    (0xa2, 0x5a, 0xfd),
    (0xff, 0x5e, 0x7e),
    (0x88, 0xff, 0x5a),
    (0xfc, 0xff, 0x42),
    (0xff, 0xa6, 0x2d),
    (0xff, 0x36, 0xff),
];

// Transient notifications
pub const TOAST_DURATION_MS: u64 = 3000;

// Shell
pub const LOADING_SCREEN_MS: u64 = 2000;
