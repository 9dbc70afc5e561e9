//! Keyword-weighted category classification.

use super::keywords::CATEGORY_KEYWORDS;
use crate::models::receipt::Category;

/// Classify receipt text into a spend category.
///
/// Scores are additive over matched keywords, weighted by keyword
/// character length so longer, more specific matches dominate short
/// incidental collisions. A strictly greater score is required to
/// displace an earlier-enumerated category; nothing scoring means
/// Miscellaneous.
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();

    let mut best = Category::Miscellaneous;
    let mut best_score = 0usize;

    for entry in &CATEGORY_KEYWORDS {
        let score: usize = entry
            .keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.chars().count())
            .sum();

        if score > best_score {
            best_score = score;
            best = entry.category;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn brand_names_classify() {
        assert_eq!(classify("STARBUCKS COFFEE #1234"), Category::DiningOut);
        assert_eq!(classify("EDEKA Markt GmbH"), Category::Groceries);
        assert_eq!(classify("星巴克(北京)有限公司"), Category::DiningOut);
    }

    #[test]
    fn longer_matches_outweigh_short_collisions() {
        // "supermarket" (11) beats the incidental "bar" (3) hit.
        assert_eq!(classify("bar code supermarket"), Category::Groceries);
    }

    #[test]
    fn score_accumulates_over_keywords() {
        // uber (4) + gas (3) + parking (7) pile onto Transportation.
        assert_eq!(classify("uber ride, gas and parking"), Category::Transportation);
    }

    #[test]
    fn tie_keeps_the_earlier_category() {
        // rent (Housing, 4) ties wifi (Utilities, 4); Housing is
        // enumerated first and a tie must not displace it.
        assert_eq!(classify("rent wifi"), Category::Housing);
    }

    #[test]
    fn no_keywords_means_miscellaneous() {
        assert_eq!(classify("zzzz qqqq"), Category::Miscellaneous);
        assert_eq!(classify(""), Category::Miscellaneous);
    }

    #[test]
    fn adding_keywords_never_flips_a_strict_winner() {
        let base = "uber gas parking transit";
        let winner = classify(base);
        assert_eq!(winner, Category::Transportation);

        // Strengthening the winning category keeps it winning.
        let stronger = format!("{base} taxi fuel toll");
        assert_eq!(classify(&stronger), Category::Transportation);
    }

    #[test]
    fn uppercase_input_is_normalized() {
        assert_eq!(classify("NETFLIX SUBSCRIPTION"), Category::Entertainment);
    }
}
