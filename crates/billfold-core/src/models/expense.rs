//! Downstream expense record assembly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::receipt::{Category, ParsedReceipt};

/// Pre-filled expense entry handed to the form/persistence layer.
///
/// A missing amount becomes zero for the user to correct; a missing
/// description is substituted with the category's stock description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub amount: Decimal,
    pub category: Category,
    pub description: String,
    pub date: NaiveDate,
    pub currency: String,
    pub currency_symbol: String,
}

impl ExpenseDraft {
    /// Build a draft expense entry from a parsed receipt.
    pub fn from_receipt(receipt: &ParsedReceipt) -> Self {
        Self {
            amount: receipt.amount.unwrap_or(Decimal::ZERO),
            category: receipt.category,
            description: receipt
                .description
                .clone()
                .unwrap_or_else(|| receipt.category.description().to_string()),
            date: receipt.date,
            currency: receipt.currency.clone(),
            currency_symbol: receipt.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::Language;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn base_receipt() -> ParsedReceipt {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        ParsedReceipt::empty(Language::English, today)
    }

    #[test]
    fn keeps_extracted_description() {
        let mut receipt = base_receipt();
        receipt.description = Some("Starbucks".to_string());
        receipt.amount = Some(Decimal::from_str("12.40").unwrap());
        receipt.category = Category::DiningOut;

        let draft = ExpenseDraft::from_receipt(&receipt);
        assert_eq!(draft.description, "Starbucks");
        assert_eq!(draft.amount, Decimal::from_str("12.40").unwrap());
        assert_eq!(draft.category, Category::DiningOut);
    }

    #[test]
    fn substitutes_category_description_when_missing() {
        let mut receipt = base_receipt();
        receipt.category = Category::Groceries;

        let draft = ExpenseDraft::from_receipt(&receipt);
        assert_eq!(draft.description, "Food and household supplies");
        assert_eq!(draft.amount, Decimal::ZERO);
    }
}
