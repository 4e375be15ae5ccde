//! Inherent-vowel bridge between the abugida scripts and the alphabetic
//! ones (Roman, Cyrillic).
//!
//! Abugida consonants carry an implicit "a"; alphabetic scripts spell every
//! vowel out. Both transforms below run on canonical Sinhala text: the
//! inherent vowel is inserted just before converting out to an alphabetic
//! script, and reconstructed as virama/dependent signs just after
//! converting in from one.

use std::sync::LazyLock;

use regex::Regex;

use crate::script::Script;

/// Canonical consonant block, ක..ෆ.
pub(crate) fn is_consonant(c: char) -> bool {
    ('\u{0D9A}'..='\u{0DC6}').contains(&c)
}

// A consonant not followed by a dependent vowel sign, the virama or the
// inherent-vowel letter itself.
static BARE_CONSO_LATN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([ක-ෆ])([^\u{0DCF}-\u{0DDF}\u{0DCA}a])").unwrap());
static BARE_CONSO_CYRL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([ක-ෆ])([^\u{0DCF}-\u{0DDF}\u{0DCA}а])").unwrap());
static TRAILING_CONSO: LazyLock<Regex> = LazyLock::new(|| Regex::new("([ක-ෆ])$").unwrap());

// A consonant not followed by an independent vowel or an existing virama.
static UNMARKED_CONSO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([ක-ෆ])([^අආඉඊඋඌඑඔ\u{0DCA}])").unwrap());

/// Insert the script's inherent-vowel letter after every bare consonant.
/// Two sweeps because regex matches cannot overlap (consecutive consonants
/// share the boundary character), plus one for a consonant at end of input.
pub(crate) fn insert_inherent(text: &str, script: Script) -> String {
    let (re, mid, end) = match script {
        Script::Cyrl => (&BARE_CONSO_CYRL, "${1}а${2}", "${1}а"),
        _ => (&BARE_CONSO_LATN, "${1}a${2}", "${1}a"),
    };
    let text = re.replace_all(text, mid);
    let text = re.replace_all(&text, mid);
    TRAILING_CONSO.replace_all(&text, end).into_owned()
}

/// Inverse of [`insert_inherent`]: mark every vowel-less consonant with the
/// virama, then collapse consonant + independent vowel into consonant +
/// dependent sign ("a" collapses to nothing).
pub(crate) fn remove_inherent(text: &str) -> String {
    let text = UNMARKED_CONSO.replace_all(text, "${1}\u{0DCA}${2}");
    let text = UNMARKED_CONSO.replace_all(&text, "${1}\u{0DCA}${2}");
    let text = TRAILING_CONSO.replace_all(&text, "${1}\u{0DCA}");

    let mut out = String::with_capacity(text.len());
    let mut after_consonant = false;
    for c in text.chars() {
        if after_consonant {
            if let Some(sign) = dependent_sign(c) {
                out.push_str(sign);
                after_consonant = false;
                continue;
            }
        }
        after_consonant = is_consonant(c);
        out.push(c);
    }
    out
}

/// Dependent sign for an independent vowel letter.
fn dependent_sign(independent: char) -> Option<&'static str> {
    match independent {
        'අ' => Some(""),
        'ආ' => Some("\u{0DCF}"),
        'ඉ' => Some("\u{0DD2}"),
        'ඊ' => Some("\u{0DD3}"),
        'උ' => Some("\u{0DD4}"),
        'ඌ' => Some("\u{0DD6}"),
        'එ' => Some("\u{0DD9}"),
        'ඔ' => Some("\u{0DDC}"),
        _ => None,
    }
}

/// Canonicalize the alternate Roman nasalization spelling (ṁ) to the
/// niggahita before vowel removal, so downstream logic sees one form.
pub(crate) fn fix_nasalization(text: &str) -> String {
    text.replace('\u{1E41}', "\u{0D82}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_after_bare_consonant() {
        assert_eq!(insert_inherent("ක", Script::Latn), "කa");
        assert_eq!(insert_inherent("කත", Script::Latn), "කaතa");
    }

    #[test]
    fn test_insert_skips_marked_consonants() {
        // Dependent sign and virama both suppress insertion.
        assert_eq!(insert_inherent("කි", Script::Latn), "කි");
        assert_eq!(insert_inherent("ක\u{0DCA}", Script::Latn), "ක\u{0DCA}");
    }

    #[test]
    fn test_insert_consecutive_cluster() {
        // Four consonants need the second sweep.
        assert_eq!(insert_inherent("කතපබ", Script::Latn), "කaතaපaබa");
    }

    #[test]
    fn test_insert_cyrillic_letter() {
        assert_eq!(insert_inherent("ක", Script::Cyrl), "ක\u{0430}");
    }

    #[test]
    fn test_remove_marks_cluster() {
        // "kta" spelled with independent vowels collapses to a conjunct.
        assert_eq!(remove_inherent("කතඅ"), "ක\u{0DCA}ත");
    }

    #[test]
    fn test_remove_collapses_independent_vowels() {
        assert_eq!(remove_inherent("කඅතඔ"), "කතො");
        assert_eq!(remove_inherent("බඋද\u{0DCA}ධඅං"), "බුද\u{0DCA}ධං");
    }

    #[test]
    fn test_remove_trailing_consonant() {
        assert_eq!(remove_inherent("ක"), "ක\u{0DCA}");
    }

    #[test]
    fn test_round_trip() {
        // Between the two transforms the conversion step turns the inserted
        // Roman letter into the canonical vowel; model that with a plain
        // substitution here.
        for canonical in ["ධම\u{0DCA}ම", "කතපබ", "ක\u{0DCA}", "සං"] {
            let inserted = insert_inherent(canonical, Script::Latn).replace('a', "අ");
            assert_eq!(remove_inherent(&inserted), canonical, "for {canonical}");
        }
    }

    #[test]
    fn test_fix_nasalization() {
        assert_eq!(fix_nasalization("සṁ"), "සං");
    }
}
