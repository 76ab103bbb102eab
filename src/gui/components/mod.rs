// GUI Components module
mod header;
mod record_card;
mod status_bar;

pub use header::{Header, HeaderControl, NavEntry, NavItem, NAV_ITEMS};
pub use record_card::{relative_time, RecordCard};
pub use status_bar::StatusBar;
