// Reusable pieces shared by the screens and the app shell

pub mod bottom_nav;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod metric_card;

pub use bottom_nav::{BottomNav, BOTTOM_NAV_HEIGHT};
pub use footer::Footer;
pub use header::{Header, HEADER_HEIGHT};
pub use help_overlay::HelpOverlay;
pub use metric_card::MetricCard;
