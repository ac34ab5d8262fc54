//! Defines the shared application view state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Live,
    Recordings,
    Cameras,
    Settings,
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::Live => "Live",
        AppView::Recordings => "Recordings",
        AppView::Cameras => "Cameras",
        AppView::Settings => "Settings",
    }
}
