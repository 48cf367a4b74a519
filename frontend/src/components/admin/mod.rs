mod dashboard;
mod theme_picker;

pub use dashboard::Dashboard;
pub use theme_picker::ThemePicker;
