//! CLI subcommand implementations.

pub mod batch;
pub mod categories;
pub mod config;
pub mod parse;

use billfold_core::Language;

/// Parse a language-code argument.
pub(crate) fn parse_language(code: &str) -> Result<Language, String> {
    Language::from_code(code)
        .ok_or_else(|| format!("unknown language code: {code} (expected eng, chi_sim, or deu)"))
}
