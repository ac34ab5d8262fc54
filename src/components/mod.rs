//! The components module contains all shared components for our app.

mod app;
mod app_view;
mod icons;
mod navigation;
mod playback;
mod sidebar;
mod toast;
mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use navigation::*;
pub use playback::*;
pub use sidebar::*;
pub use toast::*;
// Views are accessed via views::ViewName
