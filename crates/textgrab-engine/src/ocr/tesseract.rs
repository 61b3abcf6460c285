//! Recognizer that shells out to the `tesseract` binary.

use std::path::Path;

use anyhow::{Context, Result};
use rusty_tesseract::{Args, Data, Image};
use textgrab_protocol::Language;
use tracing::{debug, trace};

use crate::Recognizer;

/// Tesseract TSV level for word rows.
const WORD_LEVEL: i32 = 5;

/// Recognizer backed by the `tesseract` command-line tool.
pub struct TesseractRecognizer {
    lang: String,
}

impl TesseractRecognizer {
    /// Create a recognizer for the given languages, e.g. `kor+eng`.
    pub fn new(languages: &[Language]) -> Self {
        let lang = tesseract_lang(languages);
        debug!("Tesseract language set: {}", lang);
        Self { lang }
    }

    fn args(&self) -> Args {
        Args {
            lang: self.lang.clone(),
            ..Args::default()
        }
    }
}

impl Recognizer for TesseractRecognizer {
    fn read_text(&self, image_path: &Path) -> Result<Vec<String>> {
        let image = Image::from_path(image_path)
            .with_context(|| format!("Failed to open image {:?}", image_path))?;

        let output = rusty_tesseract::image_to_data(&image, &self.args())
            .with_context(|| format!("Tesseract failed on {:?}", image_path))?;

        trace!("Tesseract returned {} rows", output.data.len());

        Ok(group_lines(words_from_rows(output.data)))
    }
}

/// Keep the word rows of tesseract's TSV output, keyed by their line.
fn words_from_rows(rows: Vec<Data>) -> impl Iterator<Item = Word> {
    rows.into_iter()
        .filter(|row| row.level == WORD_LEVEL)
        .map(|row| Word {
            line: (row.page_num, row.block_num, row.par_num, row.line_num),
            text: row.text,
        })
}

/// Join language codes the way tesseract's `-l` flag expects.
fn tesseract_lang(languages: &[Language]) -> String {
    let langs = if languages.is_empty() {
        &Language::DEFAULT[..]
    } else {
        languages
    };

    langs
        .iter()
        .map(|l| l.tesseract_code())
        .collect::<Vec<_>>()
        .join("+")
}

/// A recognized word and the line it belongs to.
struct Word {
    /// (page, block, paragraph, line)
    line: (i32, i32, i32, i32),
    text: String,
}

/// Group words into lines, keeping the order tesseract emitted them in.
fn group_lines(words: impl IntoIterator<Item = Word>) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current: Option<(i32, i32, i32, i32)> = None;

    for word in words {
        let text = word.text.trim();
        if text.is_empty() {
            continue;
        }

        if current == Some(word.line) {
            if let Some(line) = lines.last_mut() {
                line.push(' ');
                line.push_str(text);
            }
        } else {
            lines.push(text.to_string());
            current = Some(word.line);
        }
    }

    lines
}
