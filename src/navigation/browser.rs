use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::navigation::spy::{SectionBounds, Viewport};
use crate::navigation::subscription::ScrollSource;

/// The page viewport, measured through the DOM.
#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Viewport for BrowserViewport {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let element = self.document.get_element_by_id(section_id)?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds {
            top: rect.top(),
            bottom: rect.bottom(),
        })
    }

    fn smooth_scroll_to(&self, top: f64) {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

impl ScrollSource for Window {
    type Listener = Closure<dyn FnMut()>;

    fn attach(&self, handler: Box<dyn FnMut()>) -> Option<Self::Listener> {
        let callback = Closure::wrap(handler);
        match self.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(callback),
            Err(e) => {
                warn!("Failed to add scroll listener: {:?}", e);
                None
            }
        }
    }

    fn detach(&self, listener: &Self::Listener) {
        if let Err(e) =
            self.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", e);
        }
    }
}

/// Follows a `tel:` or `mailto:` link.
pub fn open_href(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            warn!("Failed to open {}: {:?}", href, e);
        }
    }
}
