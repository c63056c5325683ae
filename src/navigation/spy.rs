use std::fmt;

use log::debug;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Hero,
    Services,
    About,
    Contact,
}

impl Section {
    /// Page order, top to bottom. Scroll-spy checks sections in this order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Services,
        Section::About,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Services => "services",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Hem",
            Section::Services => "Tjänster",
            Section::About => "Om oss",
            Section::Contact => "Kontakt",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Section::Hero => "Navigera till startsidan",
            Section::Services => "Navigera till tjänster",
            Section::About => "Navigera till om oss",
            Section::Contact => "Navigera till kontakt",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no section with id `{0}`")]
    NotFound(String),
}

/// Viewport-relative vertical extent of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
    fn smooth_scroll_to(&self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub active: Section,
    pub scrolled: bool,
}

impl NavigationState {
    /// Re-evaluates the state from the viewport. Returns true if anything changed.
    pub fn on_scroll<V: Viewport + ?Sized>(&mut self, viewport: &V) -> bool {
        let before = *self;
        self.scrolled = viewport.scroll_offset() > config::SCROLLED_THRESHOLD_PX;

        let current = Section::ALL.into_iter().find(|section| {
            viewport
                .section_bounds(section.id())
                .map_or(false, |bounds| bounds.contains(config::ACTIVATION_LINE_PX))
        });
        // No section on the activation line keeps the previous one active.
        if let Some(section) = current {
            self.active = section;
        }

        *self != before
    }
}

/// Smooth-scrolls so the section's top sits just below the fixed navigation bar.
/// Returns the absolute offset scrolled to.
pub fn scroll_to_section<V: Viewport + ?Sized>(
    viewport: &V,
    section_id: &str,
) -> Result<f64, NavigationError> {
    let bounds = viewport
        .section_bounds(section_id)
        .ok_or_else(|| NavigationError::NotFound(section_id.to_string()))?;
    let target = bounds.top + viewport.scroll_offset() - config::NAV_CLEARANCE_PX;
    viewport.smooth_scroll_to(target);
    Ok(target)
}

/// Same as [`scroll_to_section`] but a missing section is silently ignored.
pub fn navigate<V: Viewport + ?Sized>(viewport: &V, section_id: &str) {
    if let Err(e) = scroll_to_section(viewport, section_id) {
        debug!("Navigation skipped: {}", e);
    }
}
