use log::Level;

pub const COMPANY_NAME: &str = "Malmö Trädgårdsanläggning";

pub const PHONE_DISPLAY: &str = "+46 70 123 45 67";
pub const PHONE_SHORT: &str = "070-123 45 67";
pub const PHONE_HREF: &str = "tel:+46701234567";
pub const EMAIL: &str = "info@malmotradgard.se";
pub const EMAIL_HREF: &str = "mailto:info@malmotradgard.se";
pub const ADDRESS: &str = "Malmö, Skåne";

// Scroll geometry, in CSS pixels.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
pub const ACTIVATION_LINE_PX: f64 = 100.0;
pub const NAV_CLEARANCE_PX: f64 = 80.0;

pub const SUBMIT_LATENCY_MS: u32 = 1_500;
pub const BANNER_DISMISS_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
