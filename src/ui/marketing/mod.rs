//! Marketing page chrome: navbar, hero/CTA and footer.

mod footer;
mod hero;
mod navbar;

pub use footer::Footer;
pub use hero::{CtaSection, Hero};
pub use navbar::{MenuState, NAVBAR_ID, NAVBAR_PARTIAL, Navbar};
