//! Boundaries to the text-recognition collaborators.
//!
//! The extraction core does not run OCR, render pages, or read PDFs; it
//! consumes the final (text, confidence) pair these traits produce.
//! Engine lifecycle, timeouts, and progress reporting stay on the
//! collaborator's side of the seam.

use serde::{Deserialize, Serialize};

use crate::error::RecognitionError;
use crate::models::receipt::Language;

/// Final output of a recognition run over one image or page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedText {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence (0-100).
    pub confidence: f64,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// What a recognition run hands to the orchestrator: the final pair, or
/// the failure signal.
pub type RecognitionOutcome = std::result::Result<RecognizedText, RecognitionError>;

/// Incremental recognition progress callback (percent, 0-100).
pub type ProgressFn<'a> = &'a mut dyn FnMut(u8);

/// An OCR engine capable of recognizing receipt text in an image.
pub trait TextRecognizer {
    /// Recognize text in the given encoded image.
    fn recognize(&self, image: &[u8], language: Language) -> RecognitionOutcome;

    /// Recognize text, reporting incremental progress.
    fn recognize_with_progress(
        &self,
        image: &[u8],
        language: Language,
        _progress: ProgressFn<'_>,
    ) -> RecognitionOutcome {
        self.recognize(image, language)
    }
}

/// Text content extracted from a paged digital document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentText {
    /// Per-page text, in page order.
    pub pages: Vec<String>,
}

impl DocumentText {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All pages joined in order.
    pub fn combined(&self) -> String {
        self.pages.join("\n")
    }

    /// Whether an extractable text layer is present. Short fragments do
    /// not count; scanned documents often carry a few stray glyphs.
    pub fn has_text(&self, min_len: usize) -> bool {
        self.combined().trim().len() > min_len
    }
}

/// A paged document whose text layer may be extractable.
pub trait DocumentTextSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the document's text layer.
    fn extract_text(&self) -> std::result::Result<DocumentText, RecognitionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn combined_joins_pages_in_order() {
        let doc = DocumentText::new(vec!["page one".to_string(), "page two".to_string()]);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.combined(), "page one\npage two");
    }

    #[test]
    fn short_text_layer_does_not_count() {
        let doc = DocumentText::new(vec!["   stray   ".to_string()]);
        assert!(!doc.has_text(50));

        let doc = DocumentText::new(vec!["x".repeat(60)]);
        assert!(doc.has_text(50));
    }
}
