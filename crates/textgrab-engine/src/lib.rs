//! Text recognition for textgrab.
//!
//! A [`Recognizer`] turns an image file into an ordered list of text lines.
//! Two backends are provided: the `tesseract` binary and the ocrs engine.

pub mod ocr;

use std::path::Path;

use anyhow::Result;
use textgrab_protocol::{EngineKind, Language, OcrOutput};
use tracing::debug;

pub use ocr::{find_models_dir, OcrsRecognizer, TesseractRecognizer};

/// An OCR engine.
pub trait Recognizer {
    /// Recognize the image at `image_path`, one string per detected text line,
    /// in the engine's detection order.
    fn read_text(&self, image_path: &Path) -> Result<Vec<String>>;
}

/// Run a single recognition and build the output record.
pub fn extract(recognizer: &dyn Recognizer, image_path: &Path) -> Result<OcrOutput> {
    let lines = recognizer.read_text(image_path)?;
    debug!("Recognized {} lines in {:?}", lines.len(), image_path);
    Ok(OcrOutput::from_lines(&lines))
}

/// Construct the configured backend.
///
/// `models_dir` is only consulted by the ocrs backend.
pub fn build_recognizer(
    kind: EngineKind,
    languages: &[Language],
    models_dir: Option<&Path>,
) -> Result<Box<dyn Recognizer>> {
    debug!("Creating {} recognizer for {:?}", kind, languages);
    match kind {
        EngineKind::Tesseract => Ok(Box::new(TesseractRecognizer::new(languages))),
        EngineKind::Ocrs => {
            let models_dir = find_models_dir(models_dir)?;
            Ok(Box::new(OcrsRecognizer::new(&models_dir, languages)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;

    struct FakeRecognizer {
        lines: Vec<String>,
        calls: Cell<usize>,
    }

    impl FakeRecognizer {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl Recognizer for FakeRecognizer {
        fn read_text(&self, _image_path: &Path) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.lines.clone())
        }
    }

    struct FailingRecognizer;

    impl Recognizer for FailingRecognizer {
        fn read_text(&self, image_path: &Path) -> Result<Vec<String>> {
            anyhow::bail!("cannot open {:?}", image_path)
        }
    }

    #[test]
    fn test_extract_joins_lines() {
        let fake = FakeRecognizer::new(&["HELLO", "WORLD"]);
        let out = extract(&fake, Path::new("scan.png")).unwrap();
        assert_eq!(out.text, "HELLO\nWORLD");
    }

    #[test]
    fn test_extract_calls_recognizer_once() {
        let fake = FakeRecognizer::new(&["안녕", "hello"]);
        extract(&fake, Path::new("scan.png")).unwrap();
        assert_eq!(fake.calls.get(), 1);
    }

    #[test]
    fn test_extract_propagates_engine_error() {
        let err = extract(&FailingRecognizer, &PathBuf::from("missing.png")).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_build_ocrs_without_models_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = build_recognizer(EngineKind::Ocrs, &Language::DEFAULT, Some(dir.path()));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_tesseract_is_lazy() {
        // The tesseract binary is only invoked on read_text.
        assert!(build_recognizer(EngineKind::Tesseract, &Language::DEFAULT, None).is_ok());
    }
}
