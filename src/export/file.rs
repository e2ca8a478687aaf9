//! Saving exported frames to disk.

use super::types::ExportError;
use crate::config::ExportConfig;
use crate::draw::Raster;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
///
/// # Returns
/// Generated filename with a `.png` extension
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the export directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encodes `raster` as PNG and writes it to exactly `path`.
///
/// Parent directories are created as needed. On Unix the file is made readable by
/// the owner only.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), ExportError> {
    let png = raster.to_png()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving drawing to: {} ({}x{}, {} bytes)",
        path.display(),
        raster.width(),
        raster.height(),
        png.len()
    );
    fs::write(path, &png)?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Saves `raster` into the configured export directory under a timestamped name.
///
/// # Returns
/// Path to the saved file
pub fn save_png(raster: &Raster, config: &ExportConfig) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.save_directory))?;
    let file_path = directory.join(generate_filename(&config.filename_template));

    write_png(raster, &file_path)?;
    log::info!("Drawing saved successfully: {}", file_path.display());

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Frame, WHITE, render_frame};

    fn blank_raster() -> Raster {
        let mut surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 6, 4).unwrap();
        render_frame(&surface, WHITE, Frame::new().paths()).unwrap();
        Raster::from_surface(&mut surface).unwrap()
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("drawing_%Y%m%d");
        assert!(filename.starts_with("drawing_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("20"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn save_png_creates_directory_and_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = ExportConfig {
            save_directory: temp.path().join("nested").to_string_lossy().into_owned(),
            filename_template: "frame".to_string(),
        };

        let path = save_png(&blank_raster(), &config).unwrap();
        assert!(path.ends_with("frame.png"));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[cfg(unix)]
    #[test]
    fn write_png_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out.png");
        write_png(&blank_raster(), &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
