//! Receipt text interpretation orchestrator.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::models::receipt::{Language, ParsedReceipt};
use crate::recognize::{DocumentText, RecognitionOutcome, RecognizedText};

use super::ReceiptExtractor;
use super::rules::{classify, extract_amount, extract_date, extract_description};

/// Locale-aware receipt parser.
///
/// Stateless apart from an optional pinned reference date, so one
/// instance can be shared across threads and reused for any number of
/// receipts. Every entry point is a total function: per-field extraction
/// misses degrade to data-state defaults and are never escalated.
pub struct ReceiptParser {
    reference_date: Option<NaiveDate>,
}

impl ReceiptParser {
    pub fn new() -> Self {
        Self {
            reference_date: None,
        }
    }

    /// Pin the "today" used for date fallback and default years. Without
    /// this, the local calendar date is used.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Interpret recognized text into a structured receipt.
    ///
    /// The four extractors are independent and each read the raw text;
    /// the confidence is the caller's measurement, clamped into [0, 100].
    pub fn parse(&self, text: &str, confidence: f64, language: Language) -> ParsedReceipt {
        info!(
            "parsing {} chars of {} receipt text",
            text.len(),
            language.code()
        );

        let amount = extract_amount(text, language);
        let date = extract_date(text, language, self.today());
        let description = extract_description(text);
        let category = classify(text);

        debug!(
            "extracted amount={:?} date={} category={:?}",
            amount, date, category
        );

        let currency = language.currency();
        ParsedReceipt {
            amount,
            date,
            description,
            category,
            raw_text: text.to_string(),
            confidence: confidence.clamp(0.0, 100.0),
            currency: currency.code.to_string(),
            currency_symbol: currency.symbol.to_string(),
        }
    }

    /// Combine per-page recognition results: texts concatenated, page
    /// confidences averaged, one extraction pass over the whole.
    pub fn parse_pages(&self, pages: &[RecognizedText], language: Language) -> ParsedReceipt {
        if pages.is_empty() {
            return ParsedReceipt::empty(language, self.today());
        }

        let combined = pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let confidence =
            pages.iter().map(|page| page.confidence).sum::<f64>() / pages.len() as f64;

        self.parse(&combined, confidence, language)
    }

    /// Interpret a digital document's text layer under a caller-chosen
    /// synthetic confidence.
    pub fn parse_document(
        &self,
        document: &DocumentText,
        language: Language,
        confidence: f64,
    ) -> ParsedReceipt {
        self.parse(&document.combined(), confidence, language)
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptExtractor for ReceiptParser {
    fn extract(&self, outcome: RecognitionOutcome, language: Language) -> ParsedReceipt {
        match outcome {
            Ok(recognized) => self.parse(&recognized.text, recognized.confidence, language),
            Err(err) => {
                warn!("recognition failed, returning defaulted receipt: {err}");
                ParsedReceipt::empty(language, self.today())
            }
        }
    }

    fn extract_from_text(
        &self,
        text: &str,
        confidence: f64,
        language: Language,
    ) -> ParsedReceipt {
        self.parse(text, confidence, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognitionError;
    use crate::models::receipt::Category;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn parser() -> ReceiptParser {
        ReceiptParser::new().with_reference_date(date(2024, 6, 1))
    }

    #[test]
    fn english_receipt() {
        let receipt = parser().parse(
            "TOTAL: $42.50\nStarbucks\n01/15/2024",
            87.5,
            Language::English,
        );

        assert_eq!(receipt.amount, Some(dec("42.50")));
        assert_eq!(receipt.date, date(2024, 1, 15));
        assert_eq!(receipt.category, Category::DiningOut);
        assert_eq!(receipt.description.as_deref(), Some("Total: $42.50"));
        assert_eq!(receipt.confidence, 87.5);
        assert_eq!(receipt.currency, "USD");
        assert_eq!(receipt.currency_symbol, "$");
        assert_eq!(receipt.raw_text, "TOTAL: $42.50\nStarbucks\n01/15/2024");
    }

    #[test]
    fn chinese_invoice_compound_total() {
        let text = "价税合计（大写）肆佰零壹圆整（小写）¥401.00";
        let receipt = parser().parse(text, 90.0, Language::ChineseSimplified);

        assert_eq!(receipt.amount, Some(dec("401.00")));
        assert_eq!(receipt.date, date(2024, 6, 1));
        assert_eq!(receipt.category, Category::Miscellaneous);
        assert_eq!(receipt.description.as_deref(), Some(text));
        assert_eq!(receipt.currency, "CNY");
        assert_eq!(receipt.currency_symbol, "¥");
    }

    #[test]
    fn german_receipt() {
        let receipt = parser().parse(
            "Gesamtbetrag: 15,50€\nEDEKA\n12.03.2024",
            92.0,
            Language::German,
        );

        assert_eq!(receipt.amount, Some(dec("15.50")));
        assert_eq!(receipt.date, date(2024, 3, 12));
        assert_eq!(receipt.category, Category::Groceries);
        assert_eq!(receipt.currency, "EUR");
        assert_eq!(receipt.currency_symbol, "€");
    }

    #[test]
    fn text_without_signals_degrades_to_defaults() {
        let receipt = parser().parse("nothing useful here", 33.0, Language::English);

        assert_eq!(receipt.amount, None);
        assert_eq!(receipt.date, date(2024, 6, 1));
        assert_eq!(receipt.category, Category::Miscellaneous);
    }

    #[test]
    fn recognition_failure_yields_defaulted_receipt() {
        let receipt = parser().extract(
            Err(RecognitionError::Engine("model crashed".into())),
            Language::English,
        );

        assert_eq!(receipt.amount, None);
        assert_eq!(receipt.date, date(2024, 6, 1));
        assert_eq!(receipt.description, None);
        assert_eq!(receipt.category, Category::Miscellaneous);
        assert_eq!(receipt.confidence, 0.0);
        assert_eq!(receipt.raw_text, "");
        assert_eq!(receipt.currency, "USD");
        assert_eq!(receipt.currency_symbol, "$");
    }

    #[test]
    fn identical_inputs_yield_identical_outputs() {
        let text = "TOTAL: $42.50\nStarbucks\n01/15/2024";
        let first = parser().parse(text, 87.5, Language::English);
        let second = parser().parse(text, 87.5, Language::English);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn confidence_is_clamped() {
        let receipt = parser().parse("x", 150.0, Language::English);
        assert_eq!(receipt.confidence, 100.0);

        let receipt = parser().parse("x", -3.0, Language::English);
        assert_eq!(receipt.confidence, 0.0);
    }

    #[test]
    fn pages_are_concatenated_and_confidence_averaged() {
        let pages = vec![
            RecognizedText::new("Starbucks", 80.0),
            RecognizedText::new("TOTAL: $10.00", 60.0),
        ];
        let receipt = parser().parse_pages(&pages, Language::English);

        assert_eq!(receipt.amount, Some(dec("10.00")));
        assert_eq!(receipt.category, Category::DiningOut);
        assert_eq!(receipt.confidence, 70.0);
        assert_eq!(receipt.raw_text, "Starbucks\nTOTAL: $10.00");
    }

    #[test]
    fn empty_page_set_is_a_failed_scan() {
        let receipt = parser().parse_pages(&[], Language::German);
        assert_eq!(receipt, ParsedReceipt::empty(Language::German, date(2024, 6, 1)));
    }

    #[test]
    fn document_text_uses_synthetic_confidence() {
        let doc = DocumentText::new(vec!["INVOICE".into(), "Balance Due: 12.00".into()]);
        let receipt = parser().parse_document(&doc, Language::English, 95.0);

        assert_eq!(receipt.amount, Some(dec("12.00")));
        assert_eq!(receipt.confidence, 95.0);
    }
}
