pub mod csv_export;
pub mod raster;

use crate::config::Theme;
use crate::errors::OrbitVizError;
use crate::models::OrbitPath;
use std::path::Path;

pub use csv_export::export_csv;
pub use raster::RasterRenderer;

/// Draws a path as a connected line plus a marker at the origin.
pub trait Renderer {
    fn draw(&mut self, path: &OrbitPath) -> Result<(), OrbitVizError>;

    fn set_theme(&mut self, _theme: Theme) {}
}

/// A renderer whose last figure can be written to disk.
pub trait FigureSink: Renderer {
    fn save(&self, path: &Path) -> Result<(), OrbitVizError>;
}
