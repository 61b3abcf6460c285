//! OCR (Optical Character Recognition) backends.
//!
//! Provides text recognition from image files using either the ocrs library
//! or the `tesseract` binary.

mod engine;
mod tesseract;

pub use engine::{find_models_dir, OcrsRecognizer};
pub use tesseract::TesseractRecognizer;
