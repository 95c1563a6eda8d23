use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as B64_ENGINE;
use base64::Engine;
use mime::Mime;

use crate::errors::ViewerError;

/// Extensions the viewer can display out of the box.
pub const AVAILABLE_EXTENSIONS: [&str; 5] = ["bmp", "jpg", "jpeg", "png", "gif"];

pub fn mime_for(path: &Path) -> Result<Mime, ViewerError> {
    let ext = path
        .extension()
        .ok_or_else(|| ViewerError::NoExtension(path.to_path_buf()))?
        .to_string_lossy()
        .to_ascii_lowercase();
    match ext.as_str() {
        "bmp" => Ok(mime::IMAGE_BMP),
        "jpg" | "jpeg" => Ok(mime::IMAGE_JPEG),
        "png" => Ok(mime::IMAGE_PNG),
        "gif" => Ok(mime::IMAGE_GIF),
        _ => Err(ViewerError::UnsupportedFile(ext)),
    }
}

/// Read an image into a `data:<mime>;base64,<payload>` URI.
pub fn load_source(path: &Path) -> Result<String, ViewerError> {
    let mimetype = mime_for(path)?;
    let data = fs::read(path).map_err(|source| ViewerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(format!("data:{};base64,{}", mimetype, B64_ENGINE.encode(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_picked_from_extension() {
        assert_eq!(mime_for(Path::new("x.JPG")).unwrap(), mime::IMAGE_JPEG);
        assert_eq!(mime_for(Path::new("x.jpeg")).unwrap(), mime::IMAGE_JPEG);
        assert_eq!(mime_for(Path::new("dir/x.gif")).unwrap(), mime::IMAGE_GIF);
        assert_eq!(mime_for(Path::new("x.bmp")).unwrap(), mime::IMAGE_BMP);
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        assert!(matches!(
            mime_for(Path::new("notes.txt")),
            Err(ViewerError::UnsupportedFile(ext)) if ext == "txt"
        ));
        assert!(matches!(
            mime_for(Path::new("README")),
            Err(ViewerError::NoExtension(_))
        ));
    }

    #[test]
    fn load_source_encodes_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        fs::write(&path, b"hello").unwrap();
        assert_eq!(load_source(&path).unwrap(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn load_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source(&dir.path().join("gone.png")).unwrap_err();
        assert!(matches!(err, ViewerError::Io { .. }));
    }
}
