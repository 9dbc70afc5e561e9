//! Receipt data models shared across the extraction pipeline.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spend category assigned to a parsed receipt.
///
/// Serialized names match the persisted expense record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Utilities,
    Groceries,
    Transportation,
    #[serde(rename = "Dining Out")]
    DiningOut,
    Entertainment,
    Travel,
    #[serde(rename = "Clothing & Personal Care")]
    ClothingAndPersonalCare,
    Miscellaneous,
}

impl Category {
    /// All categories, in classifier evaluation order.
    pub const ALL: [Category; 9] = [
        Category::Housing,
        Category::Utilities,
        Category::Groceries,
        Category::Transportation,
        Category::DiningOut,
        Category::Entertainment,
        Category::Travel,
        Category::ClothingAndPersonalCare,
        Category::Miscellaneous,
    ];

    /// Human-readable name, identical to the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Groceries => "Groceries",
            Category::Transportation => "Transportation",
            Category::DiningOut => "Dining Out",
            Category::Entertainment => "Entertainment",
            Category::Travel => "Travel",
            Category::ClothingAndPersonalCare => "Clothing & Personal Care",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// One-line description of what the category covers. Doubles as the
    /// default expense description when extraction yields none.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Housing => "Rent/mortgage, property tax, insurance, HOA fees",
            Category::Utilities => "Electricity, gas, water, internet, phone",
            Category::Groceries => "Food and household supplies",
            Category::Transportation => {
                "Car payments, insurance, gas, maintenance, public transit"
            }
            Category::DiningOut => "Restaurants, bars, coffee shops",
            Category::Entertainment => "Movies, concerts, events, hobbies",
            Category::Travel => "Vacations, trips, accommodations",
            Category::ClothingAndPersonalCare => {
                "Clothes, shoes, haircuts, grooming, toiletries"
            }
            Category::Miscellaneous => "Everything else not covered above",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Miscellaneous
    }
}

/// Recognition language for a scanned receipt.
///
/// The closed language set selects which pattern tiers are active and
/// maps 1:1 to a billing currency. Serialized names are the recognition
/// engine's language codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "eng")]
    English,
    #[serde(rename = "chi_sim")]
    ChineseSimplified,
    #[serde(rename = "deu")]
    German,
}

/// Currency code and symbol pair derived from the scan language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [
        Language::ChineseSimplified,
        Language::English,
        Language::German,
    ];

    /// Recognition engine code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::ChineseSimplified => "chi_sim",
            Language::German => "deu",
        }
    }

    /// Look up a language by its engine code.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "eng" => Some(Language::English),
            "chi_sim" => Some(Language::ChineseSimplified),
            "deu" => Some(Language::German),
            _ => None,
        }
    }

    /// Billing currency for receipts scanned in this language. A
    /// function of the language alone, never of extracted content.
    pub fn currency(&self) -> CurrencyInfo {
        match self {
            Language::English => CurrencyInfo {
                code: "USD",
                symbol: "$",
            },
            Language::ChineseSimplified => CurrencyInfo {
                code: "CNY",
                symbol: "¥",
            },
            Language::German => CurrencyInfo {
                code: "EUR",
                symbol: "€",
            },
        }
    }
}

/// Structured result of interpreting one receipt's recognized text.
///
/// Created once per extraction and immutable afterwards. Every field is
/// best-effort: a missing amount or description is a data state, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedReceipt {
    /// Extracted total, when one was found. Strictly positive.
    pub amount: Option<Decimal>,

    /// Receipt date; the reference date when nothing parseable was found.
    pub date: NaiveDate,

    /// Merchant or title candidate from the leading lines.
    pub description: Option<String>,

    /// Classified spend category.
    pub category: Category,

    /// The recognized input text, unmodified.
    pub raw_text: String,

    /// Recognition confidence, 0-100.
    pub confidence: f64,

    /// Currency code derived from the scan language.
    pub currency: String,

    /// Currency symbol derived from the scan language.
    pub currency_symbol: String,
}

impl ParsedReceipt {
    /// Fully-defaulted receipt for a failed recognition run.
    pub fn empty(language: Language, today: NaiveDate) -> Self {
        let currency = language.currency();
        Self {
            amount: None,
            date: today,
            description: None,
            category: Category::Miscellaneous,
            raw_text: String::new(),
            confidence: 0.0,
            currency: currency.code.to_string(),
            currency_symbol: currency.symbol.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn currency_follows_language() {
        assert_eq!(Language::English.currency().code, "USD");
        assert_eq!(Language::English.currency().symbol, "$");
        assert_eq!(Language::ChineseSimplified.currency().code, "CNY");
        assert_eq!(Language::ChineseSimplified.currency().symbol, "¥");
        assert_eq!(Language::German.currency().code, "EUR");
        assert_eq!(Language::German.currency().symbol, "€");
    }

    #[test]
    fn language_code_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("pol"), None);
    }

    #[test]
    fn empty_receipt_is_fully_defaulted() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let receipt = ParsedReceipt::empty(Language::German, today);

        assert_eq!(receipt.amount, None);
        assert_eq!(receipt.date, today);
        assert_eq!(receipt.description, None);
        assert_eq!(receipt.category, Category::Miscellaneous);
        assert_eq!(receipt.raw_text, "");
        assert_eq!(receipt.confidence, 0.0);
        assert_eq!(receipt.currency, "EUR");
        assert_eq!(receipt.currency_symbol, "€");
    }

    #[test]
    fn serialized_field_names_match_record_format() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut receipt = ParsedReceipt::empty(Language::English, today);
        receipt.category = Category::DiningOut;

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"rawText\""));
        assert!(json.contains("\"currencySymbol\""));
        assert!(json.contains("\"Dining Out\""));
        assert!(json.contains("\"2024-01-15\""));
    }
}
