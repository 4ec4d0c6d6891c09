pub mod settings;
pub mod theme;

pub use settings::Settings;
pub use theme::Theme;
