pub mod animated_cursor;
pub mod concierge_panel;
pub mod discover_slide;
pub mod frame_loop;
pub mod pages;
pub mod reduced_motion;

pub use animated_cursor::AnimatedCursor;
pub use concierge_panel::ConciergePanel;
pub use discover_slide::DiscoverSlide;
pub use frame_loop::use_discover_sequence;
