use crate::errors::OrbitVizError;
use crate::models::OrbitPath;
use csv::Writer;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Writes the path as `x_km,y_km,z_km` rows, in path order.
pub fn write_csv<W: Write>(path: &OrbitPath, out: W) -> Result<(), OrbitVizError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(["x_km", "y_km", "z_km"])?;
    for p in path {
        writer.write_record(&[p.x.to_string(), p.y.to_string(), p.z.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_csv(path: &OrbitPath, file: &Path) -> Result<(), OrbitVizError> {
    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_csv(path, File::create(file)?)?;
    tracing::info!(path = %file.display(), points = path.len(), "points exported");
    Ok(())
}
