//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::ReceiptParser;

use crate::models::receipt::{Language, ParsedReceipt};
use crate::recognize::RecognitionOutcome;

/// Trait for receipt extraction front-ends.
pub trait ReceiptExtractor {
    /// Interpret the outcome of a recognition run. Upstream failure
    /// becomes a fully-defaulted receipt, never an error.
    fn extract(&self, outcome: RecognitionOutcome, language: Language) -> ParsedReceipt;

    /// Interpret already-recognized plain text.
    fn extract_from_text(
        &self,
        text: &str,
        confidence: f64,
        language: Language,
    ) -> ParsedReceipt;
}
