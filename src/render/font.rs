use crate::{MapError, Result};
use once_cell::sync::Lazy;
use rusttype::Font;
use std::path::{Path, PathBuf};

/// Bold sans-serif fonts shipped by common Linux, macOS and Windows installs
const BOLD_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

static SYSTEM_BOLD_FONT: Lazy<Option<PathBuf>> = Lazy::new(|| {
    let found = BOLD_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file());
    match &found {
        Some(path) => log::debug!("using caption font {}", path.display()),
        None => log::debug!("no system bold font found"),
    }
    found
});

/// First bold font found at a well-known system location
pub fn system_caption_font() -> Option<&'static Path> {
    SYSTEM_BOLD_FONT.as_deref()
}

/// Loads the caption font from `configured`, or from a known system location
pub fn load_caption_font(configured: Option<&Path>) -> Result<Font<'static>> {
    let path = configured
        .map(Path::to_path_buf)
        .or_else(|| system_caption_font().map(Path::to_path_buf))
        .ok_or_else(|| {
            MapError::Font("no caption font configured and no system bold font found".to_string())
        })?;

    let bytes = std::fs::read(&path)?;
    Font::try_from_vec(bytes)
        .ok_or_else(|| MapError::Font(format!("{} is not a usable font file", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_configured_font_is_io_error() {
        let err = load_caption_font(Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }

    #[test]
    fn test_system_font_is_loadable_when_present() {
        if let Some(path) = system_caption_font() {
            assert!(load_caption_font(Some(path)).is_ok());
            assert!(load_caption_font(None).is_ok());
        }
    }

    #[test]
    fn test_garbage_font_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not a font").unwrap();
        let err = load_caption_font(Some(file.path())).unwrap_err();
        assert!(matches!(err, MapError::Font(_)));
    }
}
