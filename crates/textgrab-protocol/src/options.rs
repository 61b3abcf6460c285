//! Engine configuration types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing option values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Language code is not known.
    #[error("unknown language '{0}' (expected one of: ko, en, ja, ch_sim, ch_tra)")]
    UnknownLanguage(String),

    /// Engine name is not known.
    #[error("unknown engine '{0}' (expected 'tesseract' or 'ocrs')")]
    UnknownEngine(String),
}

/// Recognition target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Korean,
    English,
    Japanese,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    /// Languages used when none are configured.
    pub const DEFAULT: [Language; 2] = [Language::Korean, Language::English];

    /// Short code, as accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::ChineseSimplified => "ch_sim",
            Language::ChineseTraditional => "ch_tra",
        }
    }

    /// Tesseract traineddata name.
    pub fn tesseract_code(self) -> &'static str {
        match self {
            Language::Korean => "kor",
            Language::English => "eng",
            Language::Japanese => "jpn",
            Language::ChineseSimplified => "chi_sim",
            Language::ChineseTraditional => "chi_tra",
        }
    }

    /// Whether the language is written in the Latin alphabet.
    pub fn is_latin(self) -> bool {
        matches!(self, Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kor" => Ok(Language::Korean),
            "en" | "eng" => Ok(Language::English),
            "ja" | "jpn" => Ok(Language::Japanese),
            "ch_sim" | "chi_sim" => Ok(Language::ChineseSimplified),
            "ch_tra" | "chi_tra" => Ok(Language::ChineseTraditional),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Which OCR backend to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// The `tesseract` binary.
    #[default]
    Tesseract,
    /// The ocrs neural engine with local `.rten` models.
    Ocrs,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Tesseract => f.write_str("tesseract"),
            EngineKind::Ocrs => f.write_str("ocrs"),
        }
    }
}

impl FromStr for EngineKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tesseract" => Ok(EngineKind::Tesseract),
            "ocrs" => Ok(EngineKind::Ocrs),
            _ => Err(ParseError::UnknownEngine(s.to_string())),
        }
    }
}
