//! Core library for multilingual receipt interpretation.
//!
//! This crate turns noisy recognized text (OCR output or a digital
//! document's text layer) into a structured expense record:
//! - Locale-tiered amount extraction (English, Simplified Chinese, German)
//! - Locale-aware date parsing with a deterministic today-fallback
//! - Merchant/description heuristics over the leading receipt lines
//! - Keyword-weighted spend categorization
//! - Boundary traits for the OCR and document-text collaborators

pub mod error;
pub mod models;
pub mod receipt;
pub mod recognize;

pub use error::{RecognitionError, Result, ScanError};
pub use models::config::ScanConfig;
pub use models::expense::ExpenseDraft;
pub use models::receipt::{Category, CurrencyInfo, Language, ParsedReceipt};
pub use receipt::{ReceiptExtractor, ReceiptParser};
pub use recognize::{
    DocumentText, DocumentTextSource, RecognitionOutcome, RecognizedText, TextRecognizer,
};
