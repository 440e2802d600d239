use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::error::AppError;

// ---------------------------------------------------------------------------
// Upload constraints
// ---------------------------------------------------------------------------

/// Hard ceiling the backend accepts for one upload (10 MiB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

// ---------------------------------------------------------------------------
// CandidateFile – an acquired file before validation
// ---------------------------------------------------------------------------

/// Raw bytes of a user-chosen file plus its display name, straight from the
/// picker or a window drop, before any validation has happened.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Read a candidate from disk (native picker or a dropped path).
pub fn read_candidate(path: &Path) -> Result<CandidateFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("imagen")
        .to_string();

    Ok(CandidateFile { name, bytes })
}

// ---------------------------------------------------------------------------
// SelectedFile – a validated, in-memory image
// ---------------------------------------------------------------------------

/// A validated image ready for preview and analysis.
///
/// Bytes are shared so the analysis worker can carry them without copying
/// the whole image out of the UI state.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
    /// MIME type sniffed from the content, e.g. `image/jpeg`.
    pub mime: &'static str,
    /// URI the preview is registered under in the egui image loader.
    /// Must be forgotten when the selection is replaced or reset.
    pub preview_uri: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a candidate: the content must sniff as an `image/*` format and
/// fit under [`MAX_FILE_SIZE`]. Returns the sniffed MIME type.
///
/// The type check runs first, so an oversized non-image reports the type
/// problem rather than the size.
pub fn validate(candidate: &CandidateFile) -> Result<&'static str, AppError> {
    let format =
        image::guess_format(&candidate.bytes).map_err(|_| AppError::InvalidFileType)?;
    let mime = format.to_mime_type();
    if !mime.starts_with("image/") {
        return Err(AppError::InvalidFileType);
    }

    let size = candidate.bytes.len() as u64;
    if size > MAX_FILE_SIZE {
        log::warn!("{} is {size} bytes, ceiling is {MAX_FILE_SIZE}", candidate.name);
        return Err(AppError::FileTooLarge);
    }

    Ok(mime)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A buffer of `len` bytes carrying the PNG magic number.
    fn png_bytes(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len.max(8)];
        bytes[..8].copy_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        bytes
    }

    fn candidate(name: &str, bytes: Vec<u8>) -> CandidateFile {
        CandidateFile {
            name: name.to_string(),
            bytes,
        }
    }

    #[test]
    fn accepts_a_small_png() {
        let mime = validate(&candidate("manzana.png", png_bytes(1024))).unwrap();
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn rejects_plain_text() {
        let err = validate(&candidate("notas.txt", b"hola mundo".to_vec())).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType));
    }

    #[test]
    fn rejects_an_image_over_the_ceiling() {
        let err = validate(&candidate("grande.png", png_bytes(11 * 1024 * 1024))).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge));
    }

    #[test]
    fn accepts_exactly_the_ceiling() {
        assert!(validate(&candidate("justo.png", png_bytes(MAX_FILE_SIZE as usize))).is_ok());
    }

    #[test]
    fn oversized_non_image_reports_the_type_first() {
        let err = validate(&candidate("grande.bin", vec![0u8; 11 * 1024 * 1024])).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType));
    }

    #[test]
    fn reads_a_candidate_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruta.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&png_bytes(64)).unwrap();

        let candidate = read_candidate(&path).unwrap();
        assert_eq!(candidate.name, "fruta.png");
        assert_eq!(candidate.bytes.len(), 64);
    }

    #[test]
    fn reading_a_missing_file_fails() {
        assert!(read_candidate(Path::new("/no/existe/fruta.png")).is_err());
    }
}
