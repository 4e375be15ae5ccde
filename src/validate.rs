//! Advisory output checks. They log and report, never alter text or abort
//! a conversion.

use std::sync::LazyLock;

use regex::Regex;

use tracing::warn;

// A virama directly before an independent vowel: read back from Roman, the
// vowel is indistinguishable from one attached to the consonant.
static VIRAMA_BEFORE_INDEPENDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{0DCA}[අ-ඔ]").unwrap());

// A stopped consonant followed by h: the Roman spelling collides with the
// aspirated letter (d + h reads as dh).
static STOP_BEFORE_H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[කගචපජබතදටඩ]\u{0DCA}හ\u{0DCA}").unwrap());

/// Flag canonical-side patterns whose Roman rendering is ambiguous on the
/// way back. Checked before converting toward Roman.
pub fn check_roman_convert(text: &str) -> bool {
    let mut ambiguous = false;
    if VIRAMA_BEFORE_INDEPENDENT.is_match(text) {
        warn!(text, "virama followed by an independent vowel is ambiguous in Roman");
        ambiguous = true;
    }
    if STOP_BEFORE_H.is_match(text) {
        warn!(text, "stopped consonant before h collides with an aspirated letter in Roman");
        ambiguous = true;
    }
    ambiguous
}

/// Flag canonical-script characters that survived conversion, which points
/// at a gap in the target script's mapping column.
pub fn check_unconverted(text: &str) -> bool {
    if text.chars().any(|c| ('\u{0D80}'..='\u{0DFF}').contains(&c)) {
        warn!(text, "unconverted canonical characters in output");
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virama_vowel_ambiguity() {
        // ක්අ would read back as ක
        assert!(check_roman_convert("ක\u{0DCA}අ"));
        assert!(!check_roman_convert("ක\u{0DCA}ත"));
    }

    #[test]
    fn test_aspiration_collision() {
        // ද්හ් renders as "dh", the spelling of ධ්
        assert!(check_roman_convert("ද\u{0DCA}හ\u{0DCA}"));
        // ළ is not a stop; no collision
        assert!(!check_roman_convert("ළ\u{0DCA}හ\u{0DCA}"));
    }

    #[test]
    fn test_unconverted_detection() {
        assert!(check_unconverted("dhammaක"));
        assert!(!check_unconverted("dhamma"));
    }
}
