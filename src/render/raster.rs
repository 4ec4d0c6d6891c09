//! Headless 3-D line renderer.
//!
//! Points are projected orthographically onto the view plane of a camera at
//! the given elevation and azimuth, scaled so the whole path fits the canvas,
//! and drawn as connected segments. The origin gets a filled disc and each
//! reference axis its own tint. There is no title, axis text or legend.

use super::{FigureSink, Renderer};
use crate::config::{Settings, Theme};
use crate::errors::OrbitVizError;
use crate::models::OrbitPath;
use image::{ImageFormat, Rgb, RgbImage};
use nalgebra as na;
use std::path::Path;

const MARGIN_PX: f64 = 20.0;
const MARKER_RADIUS_PX: i64 = 6;

pub struct RasterRenderer {
    width: u32,
    height: u32,
    /// Screen right and up directions in the reference frame
    right: na::Vector3<f64>,
    up: na::Vector3<f64>,
    theme: Theme,
    canvas: RgbImage,
}

impl RasterRenderer {
    pub fn new(settings: &Settings) -> Self {
        let width = settings.width.max(1);
        let height = settings.height.max(1);
        let (right, up) = view_basis(settings.elevation_deg, settings.azimuth_deg);
        let theme = settings.theme;
        RasterRenderer {
            width,
            height,
            right,
            up,
            theme,
            canvas: RgbImage::from_pixel(width, height, theme.background()),
        }
    }

    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Pixel position of a reference-frame point, or `None` if not finite.
    fn project(&self, p: &na::Vector3<f64>, scale: f64) -> Option<(i64, i64)> {
        if !p.iter().all(|c| c.is_finite()) {
            return None;
        }
        let u = self.right.dot(p) * scale;
        let v = self.up.dot(p) * scale;
        let x = self.width as f64 / 2.0 + u;
        let y = self.height as f64 / 2.0 - v;
        Some((x.round() as i64, y.round() as i64))
    }

    /// Pixels per km so that a cube of half-side `extent` fits inside the margins.
    fn scale_for(&self, extent: f64) -> f64 {
        let half = (self.width.min(self.height) as f64 / 2.0 - MARGIN_PX).max(1.0);
        half / (extent.max(1.0) * 3.0_f64.sqrt())
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            self.canvas.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Bresenham line.
    fn line(&mut self, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.put(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn disc(&mut self, (cx, cy): (i64, i64), radius: i64, color: Rgb<u8>) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

impl Renderer for RasterRenderer {
    fn draw(&mut self, path: &OrbitPath) -> Result<(), OrbitVizError> {
        self.canvas = RgbImage::from_pixel(self.width, self.height, self.theme.background());

        let extent = path.max_extent();
        let scale = self.scale_for(extent);
        let axis_len = extent.max(1.0);

        let axes = [na::Vector3::x(), na::Vector3::y(), na::Vector3::z()];
        for (axis, axis_color) in axes.into_iter().zip(self.theme.axis_colors()) {
            let ends = (
                self.project(&(axis * -axis_len), scale),
                self.project(&(axis * axis_len), scale),
            );
            if let (Some(a), Some(b)) = ends {
                self.line(a, b, axis_color);
            }
        }

        let path_color = self.theme.path_color();
        let projected: Vec<Option<(i64, i64)>> =
            path.iter().map(|p| self.project(p, scale)).collect();
        for pair in projected.windows(2) {
            if let [Some(a), Some(b)] = pair {
                self.line(*a, *b, path_color);
            }
        }

        let marker_color = self.theme.marker_color();
        if let Some(origin) = self.project(&na::Vector3::zeros(), scale) {
            self.disc(origin, MARKER_RADIUS_PX, marker_color);
        }

        tracing::debug!(points = path.len(), extent, scale, "rendered figure");
        Ok(())
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

impl FigureSink for RasterRenderer {
    fn save(&self, path: &Path) -> Result<(), OrbitVizError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        self.canvas.save_with_format(path, ImageFormat::Png)?;
        tracing::info!(path = %path.display(), "figure saved");
        Ok(())
    }
}

/// Screen axes of an orthographic camera looking at the origin from
/// `(cos el cos az, cos el sin az, sin el)`.
fn view_basis(elevation_deg: f64, azimuth_deg: f64) -> (na::Vector3<f64>, na::Vector3<f64>) {
    let (sin_el, cos_el) = elevation_deg.to_radians().sin_cos();
    let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
    let right = na::Vector3::new(-sin_az, cos_az, 0.0);
    let up = na::Vector3::new(-sin_el * cos_az, -sin_el * sin_az, cos_el);
    (right, up)
}
