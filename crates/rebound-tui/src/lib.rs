pub mod app;
pub mod content;
pub mod event;
pub mod frame_clock;
pub mod gesture;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
