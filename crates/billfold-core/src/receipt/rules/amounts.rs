//! Amount extraction over recognized receipt text.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT_TIERS, BARE_DECIMAL};
use crate::models::receipt::Language;

/// Extract the most probable grand total from receipt text.
///
/// Tiers are evaluated top-down and the first validated candidate wins.
/// Within a pattern only the first match in the text is considered; a
/// candidate failing validation falls through to the next pattern.
pub fn extract_amount(text: &str, language: Language) -> Option<Decimal> {
    for tier in AMOUNT_TIERS.iter().filter(|t| t.scope.applies(language)) {
        for pattern in &tier.patterns {
            let Some(caps) = pattern.regex.captures(text) else {
                continue;
            };
            let Some(amount) = parse_amount(&caps[1]) else {
                continue;
            };
            if amount > Decimal::ZERO && pattern.ceiling.is_none_or(|c| amount < c) {
                return Some(amount);
            }
        }
    }

    largest_bare_amount(text)
}

/// Parse a numeric amount, normalizing a comma decimal separator.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    Decimal::from_str(&s.replace(',', ".")).ok()
}

/// Last resort: receipts enumerate many sub-amounts and the largest is
/// the most probable grand total. Item counts, phone fragments, and
/// loyalty IDs can win here; callers get the policy as-is.
fn largest_bare_amount(text: &str) -> Option<Decimal> {
    let cap = Decimal::from(100_000);
    BARE_DECIMAL
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps[1]))
        .filter(|amount| *amount > Decimal::ZERO && *amount < cap)
        .max()
}
