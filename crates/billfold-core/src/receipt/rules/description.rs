//! Merchant/title extraction from the leading lines of a receipt.

use super::patterns::{
    CJK_IDEOGRAPH, DIGITS_ONLY, SEPARATORS_ONLY, STRAY_PUNCTUATION, WHITESPACE_RUN,
};

/// Pick a description candidate from the first lines of the receipt.
///
/// Store names sit at the top of receipts. The first five non-empty
/// lines are scanned; purely numeric and decorative separator lines are
/// skipped, stray punctuation is stripped and whitespace collapsed.
/// CJK text keeps its original form, everything else is title-cased.
pub fn extract_description(text: &str) -> Option<String> {
    let lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

    for line in lines.take(5) {
        if line.chars().count() < 2
            || DIGITS_ONLY.is_match(line)
            || SEPARATORS_ONLY.is_match(line)
        {
            continue;
        }

        let stripped = STRAY_PUNCTUATION.replace_all(line, "");
        let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
        let cleaned = collapsed.trim();

        if cleaned.chars().count() < 2 {
            continue;
        }

        if CJK_IDEOGRAPH.is_match(cleaned) {
            return Some(cleaned.to_string());
        }
        return Some(title_case(cleaned));
    }

    None
}

/// Capitalize the first letter of each whitespace-delimited word,
/// lowercasing the rest.
fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
