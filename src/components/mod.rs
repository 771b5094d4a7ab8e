pub mod chart;
pub mod settings_toggle;
pub mod status;
pub mod summary;

pub use chart::Chart;
pub use settings_toggle::SettingsToggle;
pub use status::Status;
pub use summary::Summary;
