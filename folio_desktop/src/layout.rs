//! Page geometry. Every section is rendered at a fixed height, so anchor
//! rectangles follow from the scroll offset alone.

use crate::canvas::card_canvas_size;
use crate::constants::{
    ABOUT_HEIGHT, CARDS_PER_ROW, CARD_ROW_SPACING, CONTACT_HEIGHT, EXPERIENCE_HEIGHT,
    FOOTER_HEIGHT, HERO_HEIGHT, SECTION_HEADER_HEIGHT, SKILLS_HEIGHT,
};
use folio_core::content::PROJECTS;
use folio_core::{AnchorRect, SectionAnchors};

pub const HERO_SECTION: &str = "home";

/// Height of the projects grid for `cards` cards.
pub fn projects_height(cards: usize) -> f32 {
    let rows = cards.div_ceil(CARDS_PER_ROW);
    let (_, card_height) = card_canvas_size();
    SECTION_HEADER_HEIGHT + rows as f32 * (card_height + CARD_ROW_SPACING) + CARD_ROW_SPACING
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSlot {
    pub id: &'static str,
    pub top: f32,
    pub height: f32,
}

/// Vertical stack of page sections in page coordinates.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    slots: Vec<SectionSlot>,
    footer_height: f32,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::new([
            (HERO_SECTION, HERO_HEIGHT),
            ("about", ABOUT_HEIGHT),
            ("skills", SKILLS_HEIGHT),
            ("experience", EXPERIENCE_HEIGHT),
            ("projects", projects_height(PROJECTS.len())),
            ("contact", CONTACT_HEIGHT),
        ])
    }
}

impl SectionLayout {
    pub fn new<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, f32)>,
    {
        let mut top = 0.0;
        let slots = sections
            .into_iter()
            .map(|(id, height)| {
                let slot = SectionSlot { id, top, height };
                top += height;
                slot
            })
            .collect();
        Self {
            slots,
            footer_height: FOOTER_HEIGHT,
        }
    }

    pub fn height_of(&self, id: &str) -> f32 {
        self.slot(id).map_or(0.0, |slot| slot.height)
    }

    fn slot(&self, id: &str) -> Option<&SectionSlot> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    pub fn total_height(&self) -> f32 {
        self.slots.iter().map(|slot| slot.height).sum::<f32>() + self.footer_height
    }

    /// Whether any part of the hero is still on screen at `scroll_y`.
    pub fn hero_visible(&self, scroll_y: f32) -> bool {
        self.slot(HERO_SECTION)
            .is_some_and(|slot| scroll_y < slot.top + slot.height)
    }

    /// Anchor view relative to the viewport top at `scroll_y`.
    pub fn at(&self, scroll_y: f32) -> ScrolledLayout<'_> {
        ScrolledLayout { layout: self, scroll_y }
    }
}

/// A [`SectionLayout`] seen from one scroll position.
#[derive(Debug, Clone, Copy)]
pub struct ScrolledLayout<'a> {
    layout: &'a SectionLayout,
    scroll_y: f32,
}

impl SectionAnchors for ScrolledLayout<'_> {
    fn anchor_rect(&self, id: &str) -> Option<AnchorRect> {
        self.layout.slot(id).map(|slot| {
            let top = slot.top - self.scroll_y;
            AnchorRect::new(top, top + slot.height)
        })
    }
}
