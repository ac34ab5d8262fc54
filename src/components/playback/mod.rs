//! Recording playback modal and its share handling.

mod modal;
mod types;
mod web_media;

pub use modal::*;
pub use types::*;
pub use web_media::*;
