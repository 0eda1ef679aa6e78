//! Reduced-motion preference detection via `prefers-reduced-motion`

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::MotionPreference;

/// Media query matched when the user asked the platform to minimise motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Read the platform motion preference
///
/// Falls back to full motion when the query is unavailable (and always on the
/// server, where the first frame is rendered before the preference is known).
pub fn detect_motion_preference() -> MotionPreference {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media(REDUCED_MOTION_QUERY) {
                return MotionPreference::from_reduced(media_query.matches());
            }
        }
    }
    MotionPreference::Full
}
