//! The record printed on stdout.

use serde::{Deserialize, Serialize};

/// Recognized text of a single image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Recognized lines joined with `\n`.
    pub text: String,
}

impl OcrOutput {
    /// Build the record from recognized lines, keeping their order.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let text = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }

    /// Encode as a single line of JSON. Non-ASCII characters are kept literal.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
