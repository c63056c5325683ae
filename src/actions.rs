use log::info;
use yew::Callback;

use crate::config;
use crate::navigation::browser::{self, BrowserViewport};
use crate::navigation::spy::{navigate, Section};

/// Things a visitor can ask for from any part of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    RequestQuote,
    CallUs,
    ServiceSelected(String),
    ContactRequested,
    Navigate(String),
    SubmitSucceeded,
}

/// Side effects the page performs when no caller handles an intent.
pub trait PageEffects {
    fn scroll_to_section(&self, section_id: &str);
    fn open_href(&self, href: &str);
}

pub struct BrowserEffects;

impl PageEffects for BrowserEffects {
    fn scroll_to_section(&self, section_id: &str) {
        if let Some(viewport) = BrowserViewport::current() {
            navigate(&viewport, section_id);
        }
    }

    fn open_href(&self, href: &str) {
        browser::open_href(href);
    }
}

impl Intent {
    pub fn perform_default<E: PageEffects + ?Sized>(&self, effects: &E) {
        match self {
            Intent::RequestQuote | Intent::ServiceSelected(_) | Intent::ContactRequested => {
                effects.scroll_to_section(Section::Contact.id())
            }
            Intent::CallUs => effects.open_href(config::PHONE_HREF),
            Intent::Navigate(section_id) => effects.scroll_to_section(section_id),
            Intent::SubmitSucceeded => info!("Form submitted successfully"),
        }
    }
}

/// Emits `callback` when the parent supplied one, otherwise runs the intent's default.
pub fn dispatch<T, E>(callback: Option<&Callback<T>>, payload: T, intent: Intent, effects: &E)
where
    E: PageEffects + ?Sized,
{
    match callback {
        Some(callback) => callback.emit(payload),
        None => intent.perform_default(effects),
    }
}
