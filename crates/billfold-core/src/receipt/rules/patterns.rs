//! Pattern tables for receipt field extraction.
//!
//! Every regex lives here, declared next to a descriptor carrying its
//! language scope and, for dates, the capture-group layout. Extractors
//! interpret matches from the descriptor, never from the pattern text.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::PatternScope;
use crate::models::receipt::Language;

/// A prioritized amount pattern. Group 1 captures the numeric amount.
pub struct AmountPattern {
    pub regex: Regex,
    /// Exclusive upper bound for a valid candidate, when the tier has one.
    pub ceiling: Option<Decimal>,
}

impl AmountPattern {
    fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            ceiling: None,
        }
    }

    fn bounded(pattern: &str, ceiling: i64) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            ceiling: Some(Decimal::from(ceiling)),
        }
    }
}

/// A priority group of amount patterns sharing one language scope.
pub struct AmountTier {
    pub scope: PatternScope,
    pub patterns: Vec<AmountPattern>,
}

/// How a date pattern's capture groups map to calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// Groups: year, month, day.
    YearMonthDay,
    /// Groups: month, day, year (US order; two-digit years expanded).
    MonthDayYear,
    /// Groups: month abbreviation, day, year.
    MonthNameDayYear,
    /// Groups: day, month, year (German order; two-digit years expanded).
    DayMonthYear,
    /// Groups: year, month, day with CJK unit characters.
    ChineseFull,
    /// Groups: month, day; the year defaults to the reference date's.
    ChineseMonthDay,
}

/// A date pattern with its group layout and language scope.
pub struct DatePattern {
    pub regex: Regex,
    pub layout: DateLayout,
    pub scope: PatternScope,
}

impl DatePattern {
    fn new(pattern: &str, layout: DateLayout, scope: PatternScope) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            layout,
            scope,
        }
    }
}

lazy_static! {
    /// Amount tiers in evaluation order. Within a tier, patterns are
    /// tried in declared order and only the first match in the text is
    /// considered per pattern.
    pub static ref AMOUNT_TIERS: Vec<AmountTier> = vec![
        // Chinese tax-inclusive invoice totals. The capitalized-numeral
        // phrase is printed right before the machine amount, e.g.
        // 肆佰零壹圆整 ¥401.00.
        AmountTier {
            scope: PatternScope::Only(Language::ChineseSimplified),
            patterns: vec![
                AmountPattern::bounded(
                    r"[零壹贰叁肆伍陆柒捌玖拾佰仟万亿]+[圆元]整?\s*[¥￥]\s*(\d{1,8}(?:[.,]\d{1,2})?)",
                    10_000_000,
                ),
                AmountPattern::bounded(
                    r"价税合计[^0-9]*[¥￥]\s*(\d{1,8}(?:[.,]\d{1,2})?)",
                    10_000_000,
                ),
            ],
        },
        // Explicit paid / actual-payment / payable-total phrases.
        AmountTier {
            scope: PatternScope::Only(Language::ChineseSimplified),
            patterns: vec![
                AmountPattern::new(r"实付[款金额：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"实际支付[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"支付金额[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"含税合计[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"应付总额[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"总\s*计[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"总\s*额[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
            ],
        },
        // Lower-confidence totals: sums, subtotals, bare yen amounts.
        AmountTier {
            scope: PatternScope::Only(Language::ChineseSimplified),
            patterns: vec![
                AmountPattern::new(r"合\s*计[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"应付[金额：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"总价[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"金额[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"小计[：:\s]*[¥￥元]?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"[¥￥]\s*(\d+(?:[.,]\d{1,2})?)"),
            ],
        },
        // English total keywords. Receipts in any language carry these.
        AmountTier {
            scope: PatternScope::Universal,
            patterns: vec![
                AmountPattern::new(r"(?i)total[:\s]*\$?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)grand\s*total[:\s]*\$?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)amount\s*due[:\s]*\$?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)balance\s*due[:\s]*\$?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)total\s*amount[:\s]*\$?\s*(\d+(?:[.,]\d{1,2})?)"),
            ],
        },
        // German total keywords; comma decimals are normalized at parse
        // time.
        AmountTier {
            scope: PatternScope::Only(Language::German),
            patterns: vec![
                AmountPattern::new(r"(?i)summe[:\s]*€?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)gesamt[:\s]*€?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)gesamtbetrag[:\s]*€?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)zu\s*zahlen[:\s]*€?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"(?i)betrag[:\s]*€?\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"€\s*(\d+(?:[.,]\d{1,2})?)"),
            ],
        },
        // Bare currency-symbol amounts.
        AmountTier {
            scope: PatternScope::Universal,
            patterns: vec![
                AmountPattern::new(r"\$\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"€\s*(\d+(?:[.,]\d{1,2})?)"),
                AmountPattern::new(r"¥\s*(\d+(?:[.,]\d{1,2})?)"),
            ],
        },
    ];

    /// Every decimal-looking substring, for the last-resort scan.
    pub static ref BARE_DECIMAL: Regex = Regex::new(r"(\d+[.,]\d{1,2})").unwrap();

    /// Date patterns in evaluation order. First valid match wins; a
    /// match failing validation does not block later patterns.
    pub static ref DATE_PATTERNS: Vec<DatePattern> = vec![
        DatePattern::new(
            r"(\d{4})-(\d{1,2})-(\d{1,2})",
            DateLayout::YearMonthDay,
            PatternScope::Universal,
        ),
        DatePattern::new(
            r"(\d{4})/(\d{1,2})/(\d{1,2})",
            DateLayout::YearMonthDay,
            PatternScope::Universal,
        ),
        DatePattern::new(
            r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{4})",
            DateLayout::MonthDayYear,
            PatternScope::Universal,
        ),
        DatePattern::new(
            r"(\d{1,2})[/\-](\d{1,2})[/\-](\d{2})",
            DateLayout::MonthDayYear,
            PatternScope::Universal,
        ),
        DatePattern::new(
            r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{1,2}),?\s*(\d{4})",
            DateLayout::MonthNameDayYear,
            PatternScope::Universal,
        ),
        DatePattern::new(
            r"(\d{1,2})\.(\d{1,2})\.(\d{4})",
            DateLayout::DayMonthYear,
            PatternScope::Only(Language::German),
        ),
        DatePattern::new(
            r"(\d{1,2})\.(\d{1,2})\.(\d{2})",
            DateLayout::DayMonthYear,
            PatternScope::Only(Language::German),
        ),
        DatePattern::new(
            r"(\d{4})年(\d{1,2})月(\d{1,2})日",
            DateLayout::ChineseFull,
            PatternScope::Only(Language::ChineseSimplified),
        ),
        DatePattern::new(
            r"(\d{1,2})月(\d{1,2})日",
            DateLayout::ChineseMonthDay,
            PatternScope::Only(Language::ChineseSimplified),
        ),
    ];

    // Description line filters.
    pub static ref DIGITS_ONLY: Regex = Regex::new(r"^\d+$").unwrap();
    pub static ref SEPARATORS_ONLY: Regex = Regex::new(r"^[#\-*=]+$").unwrap();
    pub static ref STRAY_PUNCTUATION: Regex = Regex::new(r"[*#=\-]+").unwrap();
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    pub static ref CJK_IDEOGRAPH: Regex = Regex::new(r"[\u{4e00}-\u{9fa5}]").unwrap();
}
