pub mod theme_announcer;
pub mod theme_toggle;
