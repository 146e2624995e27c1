//! Keyword tables and regex patterns used by field detection

use lazy_static::lazy_static;
use regex::Regex;

/// Style-name fragments that mark emphasized / optional content.
/// Matched as case-insensitive substrings of paragraph and run style ids.
pub const STYLE_KEYWORDS: &[&str] = &[
    "VERMELHO",
    "RED",
    "COLORIDO",
    "DESTAQUE",
    "EMPHASIS",
    "OPCIONAL",
    "ALERT",
    "OBSERVAÇÃO",
];

/// Standalone words that introduce an alternative between two fill-ins
pub const ALTERNATIVE_WORDS: &[&str] = &["OU"];

/// Run colors that count as "no color"
pub const NEUTRAL_COLORS: &[&str] = &["000000", "auto"];

/// Shading fills that count as "no background"
pub const NEUTRAL_FILLS: &[&str] = &["auto", "ffffff", "000000"];

/// Highlight value meaning "no highlight"
pub const NO_HIGHLIGHT: &str = "none";

lazy_static! {
    /// Fill-in markers: `[...]`, `XX`, `<...>`, `(...)`
    pub static ref PLACEHOLDER_PATTERN: Regex =
        Regex::new(r"\[.*?\]|XX|<.*?>|\(\.\.\.\)").unwrap();

    /// "1.1 Label", "2.3.- Label", "4) Label"
    pub static ref LOCATOR_LINE_PATTERN: Regex =
        Regex::new(r"^(\d[\d.]*)[\s.\-)]+(.*)").unwrap();

    /// Anything that is not a Unicode word character
    pub static ref NON_WORD_PATTERN: Regex = Regex::new(r"\W").unwrap();

    pub static ref DEFAULT_ALTERNATIVE_PATTERN: Regex =
        alternative_pattern(ALTERNATIVE_WORDS).unwrap();
}

/// Whole-word, case-sensitive alternation of the given words
pub fn alternative_pattern<S: AsRef<str>>(words: &[S]) -> Result<Regex, regex::Error> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation))
}

/// Split a "locator + separator + label" line.
///
/// Returns the locator and the trimmed label, or `None` when the line does
/// not start with a locator.
pub fn parse_locator_line(line: &str) -> Option<(&str, &str)> {
    let caps = LOCATOR_LINE_PATTERN.captures(line.trim())?;
    let locator = caps.get(1)?.as_str();
    let label = caps.get(2).map_or("", |m| m.as_str()).trim();
    Some((locator, label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locator_line() {
        assert_eq!(
            parse_locator_line("1.1 Nome completo: [____]"),
            Some(("1.1", "Nome completo: [____]"))
        );
        assert_eq!(parse_locator_line("2.3.- Endereço"), Some(("2.3.", "Endereço")));
        assert_eq!(parse_locator_line("4) Telefone"), Some(("4", "Telefone")));
        assert_eq!(parse_locator_line("  10.2   Cargo  "), Some(("10.2", "Cargo")));
    }

    #[test]
    fn test_lines_without_locator() {
        assert_eq!(parse_locator_line("Nome completo"), None);
        assert_eq!(parse_locator_line("... reticências"), None);
        assert_eq!(parse_locator_line(""), None);
    }

    #[test]
    fn test_locator_with_empty_label() {
        assert_eq!(parse_locator_line("3. "), Some(("3", "")));
    }

    #[test]
    fn test_placeholder_shapes() {
        for text in ["[____]", "CPF XX", "<nome>", "Descrever (...)"] {
            assert!(PLACEHOLDER_PATTERN.is_match(text), "{}", text);
        }
        assert!(!PLACEHOLDER_PATTERN.is_match("Texto (fixo)"));
    }

    #[test]
    fn test_alternative_pattern_is_whole_word() {
        let re = alternative_pattern(&["OU"]).unwrap();
        assert!(re.is_match("Data OU idade"));
        assert!(!re.is_match("OUTROS dados"));
        assert!(!re.is_match("data ou idade"));
    }
}
