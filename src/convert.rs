//! Conversion pipelines: canonical-direction conversion, mixed-script
//! segmentation, and the public convert operations.

use tracing::debug_span;

use crate::beautify::{self, RenderContext};
use crate::lookup::{Direction, LookupTable};
use crate::script::{script_for_char, Script};
use crate::validate;
use crate::vowel;

/// Advisory checks around a conversion. They log findings and never change
/// the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Flag canonical-side patterns that read back ambiguously from Roman.
    pub check_roman_convert: bool,
    /// Flag canonical characters left unconverted in the output.
    pub check_unconverted: bool,
}

/// Canonical text into `script`, without beautification.
///
/// The alphabetic scripts get the inherent vowel spelled out before the
/// character mapping runs; everything else is a plain longest-match pass.
pub fn from_canonical(text: &str, script: Script) -> String {
    match script {
        Script::Sinh => text.to_string(),
        Script::Latn | Script::Cyrl => {
            let text = vowel::insert_inherent(text, script);
            LookupTable::get(Direction::FromCanonical, script, true).apply(&text)
        }
        _ => LookupTable::get(Direction::FromCanonical, script, true).apply(text),
    }
}

/// Text in `script` into canonical form, without un-beautification.
///
/// The alphabetic scripts convert without the dependent-vowel rows (they
/// have no dependent signs); the vowel transform then rebuilds virama and
/// dependent signs from the spelled-out vowels.
pub fn to_canonical(text: &str, script: Script) -> String {
    match script {
        Script::Sinh => text.to_string(),
        Script::Latn => {
            let text = LookupTable::get(Direction::ToCanonical, script, false).apply(text);
            let text = vowel::fix_nasalization(&text);
            vowel::remove_inherent(&text)
        }
        Script::Cyrl => {
            let text = LookupTable::get(Direction::ToCanonical, script, false).apply(text);
            vowel::remove_inherent(&text)
        }
        _ => LookupTable::get(Direction::ToCanonical, script, true).apply(text),
    }
}

/// Mixed-script text into canonical form.
///
/// Joiners are stripped first so they cannot bisect a run. Each maximal
/// same-classification run is un-beautified and converted on its own;
/// unclassified runs pass through untouched.
pub fn mixed_to_canonical(text: &str) -> String {
    let text = beautify::strip_joiners(text);
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_script: Option<Script> = None;
    for c in text.chars() {
        let script = script_for_char(c);
        if script != run_script && !run.is_empty() {
            flush_run(&mut out, &run, run_script);
            run.clear();
        }
        run_script = script;
        run.push(c);
    }
    if !run.is_empty() {
        flush_run(&mut out, &run, run_script);
    }
    out
}

fn flush_run(out: &mut String, run: &str, script: Option<Script>) {
    match script {
        Some(script) => {
            let text = beautify::un_beautify(run, script);
            out.push_str(&to_canonical(&text, script));
        }
        None => out.push_str(run),
    }
}

/// Convert text written in `from` into `to`.
pub fn convert(text: &str, to: Script, from: Script, options: ConvertOptions) -> String {
    let _span = debug_span!("convert", %from, %to).entered();
    let text = beautify::un_beautify(text, from);
    let canonical = to_canonical(&text, from);
    finish(&canonical, to, options)
}

/// Convert text of one or several auto-detected scripts into `to`.
pub fn convert_mixed(text: &str, to: Script, options: ConvertOptions) -> String {
    let _span = debug_span!("convert_mixed", %to).entered();
    let canonical = mixed_to_canonical(text);
    finish(&canonical, to, options)
}

fn finish(canonical: &str, to: Script, options: ConvertOptions) -> String {
    if options.check_roman_convert {
        validate::check_roman_convert(canonical);
    }
    let text = from_canonical(canonical, to);
    if options.check_unconverted {
        validate::check_unconverted(&text);
    }
    beautify::beautify(&text, to, RenderContext::Prose)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn opts() -> ConvertOptions {
        ConvertOptions::default()
    }

    #[test]
    fn test_bare_consonant_carries_inherent_vowel() {
        assert_eq!(from_canonical("ක", Script::Latn), "ka");
    }

    #[test]
    fn test_virama_suppresses_inherent_vowel() {
        assert_eq!(from_canonical("ක\u{0DCA}", Script::Latn), "k");
    }

    #[test]
    fn test_longest_match_over_digraph() {
        // "kha" is the aspirated letter, not k + ha
        assert_eq!(convert("kha", Script::Sinh, Script::Latn, opts()), "ඛ");
        assert_eq!(convert("ඛ", Script::Latn, Script::Sinh, opts()), "Kha");
    }

    #[test]
    fn test_roman_to_sinhala_words() {
        assert_eq!(convert("dhamma", Script::Sinh, Script::Latn, opts()), "ධම\u{0DCA}ම");
        assert_eq!(
            convert("buddhaṃ", Script::Sinh, Script::Latn, opts()),
            "බුද\u{0DCA}ධං"
        );
        // the alternate nasalization spelling normalizes first
        assert_eq!(convert("saṁgha", Script::Sinh, Script::Latn, opts()), "සංඝ");
    }

    #[test]
    fn test_roman_to_devanagari() {
        assert_eq!(convert("namo", Script::Deva, Script::Latn, opts()), "नमो");
        assert_eq!(convert("dhamma", Script::Deva, Script::Latn, opts()), "धम\u{094D}म");
    }

    #[test]
    fn test_roman_to_thai_with_reorder() {
        assert_eq!(
            convert("namo tassa", Script::Thai, Script::Latn, opts()),
            "นโม ตส\u{0E3A}ส"
        );
    }

    #[test]
    fn test_leading_vowel_reorder_from_canonical_order() {
        // Sinhala writes consonant then e; Thai displays the e sign first.
        assert_eq!(convert("කෙ", Script::Thai, Script::Sinh, opts()), "เก");
        assert_eq!(convert("เก", Script::Sinh, Script::Thai, opts()), "කෙ");
    }

    #[test]
    fn test_cyrillic_round() {
        assert_eq!(convert("дхамма", Script::Sinh, Script::Cyrl, opts()), "ධම\u{0DCA}ම");
        assert_eq!(
            convert("ධම\u{0DCA}ම", Script::Cyrl, Script::Sinh, opts()),
            "дхамма"
        );
    }

    #[test]
    fn test_myanmar_round() {
        let mymr = convert("buddhaṃ", Script::Mymr, Script::Latn, opts());
        assert_eq!(mymr, "ဗ\u{102F}ဒ\u{1039}ဓ\u{1036}");
        assert_eq!(
            convert(&mymr, Script::Latn, Script::Mymr, opts()),
            "Buddhaṃ"
        );
    }

    #[test]
    fn test_sinhala_identity_with_joiners() {
        // Sinhala to Sinhala still strips joiners and folds long vowels.
        let text = "ධම\u{0DCA}\u{200D}මෝ";
        assert_eq!(convert(text, Script::Sinh, Script::Sinh, opts()), "ධම\u{0DCA}මො");
    }

    #[test]
    fn test_unknown_codepoints_pass_through() {
        assert_eq!(convert_mixed("☃ 中", Script::Deva, opts()), "☃ 中");
    }

    #[test]
    fn test_mixed_runs_equal_separate_conversions() {
        let mixed = convert_mixed("janakaကေ", Script::Deva, opts());
        let separate = format!(
            "{}{}",
            convert("janaka", Script::Deva, Script::Latn, opts()),
            convert("ကေ", Script::Deva, Script::Mymr, opts())
        );
        assert_eq!(mixed, separate);
    }

    #[test]
    fn test_mixed_spaces_split_runs_harmlessly() {
        assert_eq!(
            convert_mixed("නමො tassa", Script::Deva, opts()),
            "नमो तस\u{094D}स"
        );
    }

    #[test]
    fn test_advisory_options_do_not_change_output() {
        let checked = ConvertOptions {
            check_roman_convert: true,
            check_unconverted: true,
        };
        // ඓ has no Thai column and stays unconverted; the check only logs.
        assert_eq!(
            convert("ඓක", Script::Thai, Script::Sinh, checked),
            convert("ඓක", Script::Thai, Script::Sinh, opts())
        );
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn arb_roman_word() -> impl Strategy<Value = String> {
        let conso = prop::sample::select(vec![
            "k", "kh", "g", "gh", "c", "ch", "j", "jh", "ñ", "ṭ", "ḍ", "ṇ", "t", "th", "d", "dh",
            "n", "p", "ph", "b", "bh", "m", "y", "r", "l", "v", "s", "h",
        ]);
        let vowel = prop::sample::select(vec!["a", "ā", "i", "ī", "u", "ū", "e", "o"]);
        let syllable = (conso, vowel).prop_map(|(c, v)| format!("{c}{v}"));
        prop::collection::vec(syllable, 1..6).prop_map(|s| s.concat())
    }

    /// Canonical consonant + optional mark units. Leaves out හ: a stop +
    /// virama before it romanizes to the aspirated digraph, the documented
    /// ambiguity the advisory check exists for.
    fn arb_canonical_word() -> impl Strategy<Value = String> {
        let conso = prop::sample::select(vec![
            'ක', 'ඛ', 'ග', 'ඝ', 'ච', 'ජ', 'ඣ', 'ට', 'ඨ', 'ණ', 'ත', 'ථ', 'ද', 'ධ', 'න', 'ප',
            'බ', 'භ', 'ම', 'ය', 'ර', 'ල', 'ව', 'ස',
        ]);
        let mark = prop::sample::select(vec![
            "", "ා", "ි", "ී", "ු", "ූ", "ෙ", "ො", "\u{0DCA}", "ං",
        ]);
        let unit = (conso, mark).prop_map(|(c, m)| format!("{c}{m}"));
        prop::collection::vec(unit, 1..6).prop_map(|u| u.concat())
    }

    proptest! {
        #[test]
        fn prop_roman_round_trip(word in arb_roman_word()) {
            let canonical = to_canonical(&word, Script::Latn);
            prop_assert_eq!(from_canonical(&canonical, Script::Latn), word);
        }

        #[test]
        fn prop_canonical_round_trip(word in arb_canonical_word()) {
            // the vowel transform is an exact inverse pair over unambiguous
            // canonical text
            let roman = from_canonical(&word, Script::Latn);
            prop_assert_eq!(to_canonical(&roman, Script::Latn), word);
        }

        #[test]
        fn prop_mixed_equals_concatenation(
            left in arb_roman_word(),
            right in prop::collection::vec(
                prop::sample::select(vec!['ක', 'ත', 'ම', 'ස', 'ි', 'ා']), 1..5
            )
        ) {
            let right: String = right.into_iter().collect();
            let mixed = convert_mixed(&format!("{left}{right}"), Script::Deva, ConvertOptions::default());
            let separate = format!(
                "{}{}",
                convert(&left, Script::Deva, Script::Latn, ConvertOptions::default()),
                convert(&right, Script::Deva, Script::Sinh, ConvertOptions::default())
            );
            prop_assert_eq!(mixed, separate);
        }
    }
}
