//! CLI definition using clap.

use std::path::PathBuf;

use clap::Parser;
use textgrab_protocol::{EngineKind, Language};

/// Recognize the text in an image and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "textgrab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the image to read
    #[arg(value_name = "IMAGE_PATH")]
    pub image_path: PathBuf,

    /// OCR backend (tesseract or ocrs)
    #[arg(long, default_value = "tesseract", env = "TEXTGRAB_ENGINE")]
    pub engine: EngineKind,

    /// Comma separated languages to recognize
    #[arg(long, default_value = "ko,en", value_delimiter = ',', env = "TEXTGRAB_LANG")]
    pub lang: Vec<Language>,

    /// Directory holding text-detection.rten and text-recognition.rten (ocrs only)
    #[arg(long, env = "TEXTGRAB_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["textgrab", "scan.png"]).unwrap();
        assert_eq!(cli.image_path, PathBuf::from("scan.png"));
        assert_eq!(cli.engine, EngineKind::Tesseract);
        assert_eq!(cli.lang, Language::DEFAULT);
        assert!(cli.models_dir.is_none());
    }

    #[test]
    fn test_missing_image_path_is_rejected() {
        assert!(Cli::try_parse_from(["textgrab"]).is_err());
    }

    #[test]
    fn test_engine_and_lang_flags() {
        let cli = Cli::try_parse_from([
            "textgrab",
            "--engine",
            "ocrs",
            "--lang",
            "en,ja",
            "--models-dir",
            "/opt/models",
            "scan.png",
        ])
        .unwrap();
        assert_eq!(cli.engine, EngineKind::Ocrs);
        assert_eq!(cli.lang, [Language::English, Language::Japanese]);
        assert_eq!(cli.models_dir, Some(PathBuf::from("/opt/models")));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["textgrab", "--lang", "xx", "scan.png"]).is_err());
    }
}
