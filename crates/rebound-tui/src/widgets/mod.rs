mod panel_view;
mod status_bar;

pub use panel_view::PanelWidget;
pub use status_bar::StatusBarWidget;
