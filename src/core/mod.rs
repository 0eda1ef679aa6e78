//! Core demo logic: the Discover slide timeline, its sequencer and the
//! simulated concierge

pub mod concierge;
#[cfg(feature = "ssr")]
pub mod config;
mod driver;
mod presentation;
mod sequencer;
#[cfg(test)]
mod tests;
mod timeline;

pub use driver::*;
pub use presentation::*;
pub use sequencer::*;
pub use timeline::*;
