use folio_core::constants::{HERO_GREETING_CHAR_MS, HERO_GREETING_DELAY_MS};
use folio_core::content::HERO_GREETING;
use folio_core::{
    ConfettiBurst, DrawList, ElementBounds, ParticleField, PointerTiltTransform, Teardown,
    TextReveal, ViewportMetrics,
};
use iced::widget::canvas;
use iced::Point;
use std::time::Duration;

/// Particle field plus the last recorded frame and its canvas cache.
pub struct ParticleBackdropState {
    pub field: ParticleField,
    pub frame: DrawList,
    pub cache: canvas::Cache,
}

impl Default for ParticleBackdropState {
    fn default() -> Self {
        Self {
            field: ParticleField::new(),
            frame: DrawList::default(),
            cache: canvas::Cache::default(),
        }
    }
}

impl ParticleBackdropState {
    pub fn mount(&mut self, viewport: ViewportMetrics) {
        self.field.mount(viewport);
    }

    pub fn resize(&mut self, viewport: ViewportMetrics) {
        self.field.resize(viewport);
    }

    /// Runs one frame of the field. Returns true if a new frame was recorded.
    pub fn update(&mut self) -> bool {
        let painted = self.field.tick(&mut self.frame);
        if painted {
            self.cache.clear();
        }
        painted
    }

    pub fn is_mounted(&self) -> bool {
        self.field.is_mounted()
    }

    /// Stops the loop and drops the last frame.
    pub fn unmount(&mut self) {
        self.field.teardown();
        self.frame = DrawList::default();
        self.cache.clear();
    }
}

/// Confetti burst over the whole window.
pub struct ConfettiState {
    pub burst: ConfettiBurst,
    pub frame: DrawList,
    pub cache: canvas::Cache,
}

impl Default for ConfettiState {
    fn default() -> Self {
        Self {
            burst: ConfettiBurst::new(),
            frame: DrawList::default(),
            cache: canvas::Cache::default(),
        }
    }
}

impl ConfettiState {
    pub fn fire(&mut self, viewport: ViewportMetrics) {
        self.burst.fire(viewport);
    }

    /// Runs one frame if a burst is in the air.
    pub fn update(&mut self) -> bool {
        let painted = self.burst.tick(&mut self.frame);
        if painted {
            self.cache.clear();
        }
        painted
    }

    /// True while the last frame still has pieces to show.
    pub fn is_visible(&self) -> bool {
        !self.frame.is_empty()
    }
}

/// Tilt transform for one project card.
#[derive(Default)]
pub struct TiltCardState {
    pub transform: PointerTiltTransform,
    pub cache: canvas::Cache,
}

impl TiltCardState {
    /// Advances the springs. Returns true if still animating.
    pub fn update(&mut self, dt: Duration) -> bool {
        let animating = self.transform.step(dt);
        if animating {
            self.cache.clear();
        }
        animating
    }

    /// Pointer position local to the card canvas.
    pub fn pointer_moved(&mut self, position: Point, card: ElementBounds) {
        self.transform.on_pointer_move(position.x, position.y, card);
        self.cache.clear();
    }

    pub fn pointer_left(&mut self) {
        self.transform.on_pointer_leave();
    }

    pub fn is_hovered(&self) -> bool {
        self.transform.is_hovering()
    }
}

/// Typewriter greeting and the hint it reveals when done.
#[derive(Debug)]
pub struct HeroState {
    pub greeting: TextReveal,
    pub show_scroll_hint: bool,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            greeting: TextReveal::new(
                HERO_GREETING,
                Duration::from_millis(HERO_GREETING_CHAR_MS),
                Duration::from_millis(HERO_GREETING_DELAY_MS),
            ),
            show_scroll_hint: false,
        }
    }
}

impl HeroState {
    pub fn start(&mut self, now: Duration) {
        self.greeting.start(now);
    }

    pub fn update(&mut self, now: Duration) {
        if self.greeting.advance(now) {
            self.show_scroll_hint = true;
        }
    }

    /// Greeting text with a blinking caret while typing.
    pub fn display_text(&self, now: Duration) -> String {
        let visible = self.greeting.visible_text();
        if self.greeting.is_complete() || (now.as_millis() / 500) % 2 == 1 {
            visible.to_string()
        } else {
            format!("{visible}|")
        }
    }
}
