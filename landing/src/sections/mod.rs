// Landing page sections
// Developed by the Availio Team (c)2025

mod cursor;
mod footer;
mod header;
mod key_info;
mod plans;
mod scroll_reset;
mod showcase;
mod testimonials;

pub use cursor::DecorativeCursor;
pub use footer::Footer;
pub use header::Header;
pub use key_info::KeyInfo;
pub use plans::PricingPlans;
pub use scroll_reset::ScrollReset;
pub use showcase::Showcase;
pub use testimonials::Testimonials;

/// Public support address, used in the footer and on the contact page.
pub const SUPPORT_EMAIL: &str = "support@availio.com";
/// Public phone number as displayed.
pub const SUPPORT_PHONE: &str = "+1 (234) 567-890";
