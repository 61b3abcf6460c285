//! OCR engine wrapper using the ocrs library.

use anyhow::{Context, Result};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use std::path::{Path, PathBuf};
use textgrab_protocol::Language;
use tracing::{debug, trace, warn};

use crate::Recognizer;

const DETECTION_MODEL: &str = "text-detection.rten";
const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// Recognizer backed by the ocrs neural engine.
pub struct OcrsRecognizer {
    engine: OcrEngine,
}

impl OcrsRecognizer {
    /// Create a recognizer by loading models from the given directory.
    ///
    /// The stock ocrs recognition model only covers the Latin alphabet, so
    /// other requested languages are reported and otherwise ignored.
    pub fn new(models_dir: &Path, languages: &[Language]) -> Result<Self> {
        let unsupported: Vec<_> = languages.iter().filter(|l| !l.is_latin()).collect();
        if !unsupported.is_empty() {
            warn!(
                "ocrs models recognize Latin script only; {:?} will not be read",
                unsupported
            );
        }

        let detection_path = models_dir.join(DETECTION_MODEL);
        let recognition_path = models_dir.join(RECOGNITION_MODEL);

        debug!("Loading OCR detection model from {:?}", detection_path);
        let detection_model = Model::load_file(&detection_path)
            .with_context(|| {
                format!("Failed to load detection model from {:?}", detection_path)
            })?;

        debug!("Loading OCR recognition model from {:?}", recognition_path);
        let recognition_model = Model::load_file(&recognition_path)
            .with_context(|| {
                format!("Failed to load recognition model from {:?}", recognition_path)
            })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .context("Failed to create OCR engine")?;

        debug!("OCR engine initialized successfully");
        Ok(Self { engine })
    }
}

impl Recognizer for OcrsRecognizer {
    fn read_text(&self, image_path: &Path) -> Result<Vec<String>> {
        let img = image::open(image_path)
            .with_context(|| format!("Failed to decode image {:?}", image_path))?
            .into_rgb8();

        let (width, height) = (img.width(), img.height());
        trace!("Image loaded: {}x{}", width, height);

        let img_source = ImageSource::from_bytes(img.as_raw(), (width, height))
            .context("Failed to create image source")?;

        let ocr_input = self
            .engine
            .prepare_input(img_source)
            .context("Failed to prepare OCR input")?;

        let word_rects = self
            .engine
            .detect_words(&ocr_input)
            .context("Failed to detect words")?;

        trace!("Detected {} word regions", word_rects.len());

        let line_rects = self.engine.find_text_lines(&ocr_input, &word_rects);

        let line_texts = self
            .engine
            .recognize_text(&ocr_input, &line_rects)
            .context("Failed to recognize text")?;

        let lines: Vec<String> = line_texts
            .iter()
            .flatten()
            .map(|line| line.to_string())
            .filter(|text| !text.trim().is_empty())
            .collect();

        debug!("Detected {} text lines", lines.len());
        Ok(lines)
    }
}

fn has_models(dir: &Path) -> bool {
    dir.join(DETECTION_MODEL).exists() && dir.join(RECOGNITION_MODEL).exists()
}

/// Find the ocrs models directory.
///
/// An explicit `override_dir` must contain both model files. Otherwise models
/// are looked up at `bin/../models` relative to the executable.
pub fn find_models_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        if has_models(dir) {
            debug!("Using models directory {:?}", dir);
            return Ok(dir.to_path_buf());
        }
        anyhow::bail!(
            "Could not find {} and {} in {:?}",
            DETECTION_MODEL,
            RECOGNITION_MODEL,
            dir
        );
    }

    let exe_path = std::env::current_exe().context("Failed to get executable path")?;

    let models_dir = exe_path
        .parent() // bin/
        .and_then(|p| p.parent())
        .map(|p| p.join("models"))
        .context("Failed to compute models directory path")?;

    if has_models(&models_dir) {
        debug!("Found models directory at {:?}", models_dir);
        return Ok(models_dir);
    }

    anyhow::bail!(
        "Could not find OCR models at {:?}. Set TEXTGRAB_MODELS_DIR or pass --models-dir.",
        models_dir
    )
}
