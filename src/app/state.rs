use crate::config::Theme;
use crate::errors::OrbitVizError;
use crate::input::{ElementForm, Field};
use crate::models::{ConicClass, OrbitPath, OrbitalElements};
use crate::physics::{generate_from_elements, generate_orbit_checked};
use crate::render::FigureSink;
use serde::Serialize;
use std::path::Path;

/// Machine-readable outcome of the last calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitSummary {
    pub elements: OrbitalElements,
    pub class: ConicClass,
    pub points: usize,
    /// Largest absolute coordinate of the path [km]
    pub max_extent_km: f64,
}

/// Everything the front end shows, owned by the front end and passed explicitly.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ElementForm,
    pub theme: Theme,
    pub path: Option<OrbitPath>,
    /// Elements the current path was generated from
    pub elements: Option<OrbitalElements>,
    pub conic_label: Option<ConicClass>,
    pub error: Option<String>,
    pub status: String,
    pub details_enabled: bool,
    /// Reject a <= 0, e < 0 and non-finite elements instead of drawing them
    pub strict: bool,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        AppState {
            theme,
            ..Self::default()
        }
    }

    /// Parses the form and replaces the current path with a freshly generated one.
    pub fn calculate(&mut self) -> Result<&OrbitPath, OrbitVizError> {
        let generated = self.form.parse().and_then(|elements| {
            let path = if self.strict {
                generate_orbit_checked(&elements)?
            } else {
                generate_from_elements(&elements)
            };
            Ok((elements, path))
        });

        match generated {
            Ok((elements, path)) => {
                self.conic_label = Some(elements.display_class());
                self.elements = Some(elements);
                self.error = None;
                self.status = "Calculation completed successfully.".to_owned();
                self.details_enabled = true;
                tracing::info!(class = ?self.conic_label, points = path.len(), "orbit generated");
                let path = self.path.insert(path);
                Ok(&*path)
            }
            Err(e) => {
                tracing::warn!(error = %e, "calculation failed");
                self.error = Some(format!("Error: {}", e));
                self.status = "Calculation failed.".to_owned();
                Err(e)
            }
        }
    }

    /// Renders the current path (or an empty figure) and writes it to `file`.
    /// A failure is reported in the state; the computed path is kept.
    pub fn save<S: FigureSink>(&mut self, sink: &mut S, file: &Path) -> Result<(), OrbitVizError> {
        let empty = OrbitPath::new(Vec::new());
        let path = self.path.as_ref().unwrap_or(&empty);

        sink.set_theme(self.theme);
        let result = sink.draw(path).and_then(|_| sink.save(file));
        match &result {
            Ok(()) => {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.display().to_string());
                self.error = Some(format!("Figure saved as '{}'", name));
                self.status = "Figure saved.".to_owned();
            }
            Err(e) => {
                tracing::warn!(error = %e, path = %file.display(), "save failed");
                self.error = Some(format!("Error: {}", e));
                self.status = "Save failed.".to_owned();
            }
        }
        result
    }

    pub fn reset(&mut self) {
        self.form.clear();
        self.conic_label = None;
        self.elements = None;
        self.error = None;
        self.path = None;
        self.status = "Reset completed.".to_owned();
        self.details_enabled = false;
    }

    pub fn switch_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.status = match self.theme {
            Theme::Dark => "Dark theme active.",
            Theme::Light => "Light theme active.",
        }
        .to_owned();
        self.theme
    }

    /// Element summary for the details dialog. Re-reads the form, so edits made
    /// after the last calculation show up here.
    pub fn details(&self) -> Result<String, OrbitVizError> {
        let elements = self
            .form
            .parse()
            .map_err(|e| OrbitVizError::DetailsUnavailable(e.to_string()))?;
        let label = self.conic_label.map(|c| c.label()).unwrap_or("");

        Ok(format!(
            "{}: {:.2} {}\n\
             {}: {:.4}\n\
             {}: {:.2}{}\n\
             {}: {:.2}{}\n\
             {}: {:.2}{}\n\
             {}: {:.2}{}\n\
             Orbit type: {}",
            Field::SemiMajorAxis,
            elements.a,
            Field::SemiMajorAxis.unit(),
            Field::Eccentricity,
            elements.e,
            Field::Inclination,
            elements.i,
            Field::Inclination.unit(),
            Field::Raan,
            elements.raan,
            Field::Raan.unit(),
            Field::ArgumentOfPerigee,
            elements.argp,
            Field::ArgumentOfPerigee.unit(),
            Field::TrueAnomaly,
            elements.nu,
            Field::TrueAnomaly.unit(),
            label,
        ))
    }

    /// Summary of the last successful calculation, unaffected by later form edits.
    pub fn summary(&self) -> Option<OrbitSummary> {
        let (elements, path) = (self.elements?, self.path.as_ref()?);
        Some(OrbitSummary {
            elements,
            class: elements.display_class(),
            points: path.len(),
            max_extent_km: path.max_extent(),
        })
    }
}
