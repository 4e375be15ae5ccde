//! Longest-match lookup tables and the greedy replacer.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::mapping::{self, CONSONANTS, SPECIALS, VOWELS};
use crate::script::{Script, ALL_SCRIPTS};

/// Conversion direction relative to the canonical script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Canonical Sinhala into the target script.
    FromCanonical,
    /// A source script into canonical Sinhala.
    ToCanonical,
}

/// A substitution table grouped by key length, longest first.
///
/// Keys are never empty; a value may be (the Roman and Cyrillic virama
/// deletes). Built once per (direction, script, include_vowels) and cached
/// for the life of the process.
pub struct LookupTable {
    groups: Vec<(usize, HashMap<&'static str, &'static str>)>,
}

const SLOT_COUNT: usize = 2 * ALL_SCRIPTS.len() * 2;

fn slot(direction: Direction, script: Script, include_vowels: bool) -> usize {
    let d = match direction {
        Direction::FromCanonical => 0,
        Direction::ToCanonical => 1,
    };
    (d * ALL_SCRIPTS.len() + script as usize) * 2 + include_vowels as usize
}

impl LookupTable {
    /// The cached table for this combination, building it on first use.
    ///
    /// `include_vowels` is false only when converting to canonical from the
    /// alphabetic scripts, which carry no dependent vowel signs; their
    /// vowel letters go through the specials rows and the vowel transform.
    pub(crate) fn get(
        direction: Direction,
        script: Script,
        include_vowels: bool,
    ) -> &'static LookupTable {
        const EMPTY: OnceLock<LookupTable> = OnceLock::new();
        static SLOTS: [OnceLock<LookupTable>; SLOT_COUNT] = [EMPTY; SLOT_COUNT];
        SLOTS[slot(direction, script, include_vowels)]
            .get_or_init(|| LookupTable::build(direction, script, include_vowels))
    }

    fn build(direction: Direction, script: Script, include_vowels: bool) -> LookupTable {
        let (src_script, dst_script) = match direction {
            Direction::FromCanonical => (Script::Sinh, script),
            Direction::ToCanonical => (script, Script::Sinh),
        };

        let mut by_len: HashMap<usize, HashMap<&'static str, &'static str>> = HashMap::new();
        let rows = CONSONANTS
            .iter()
            .chain(SPECIALS)
            .chain(if include_vowels { VOWELS } else { &[] });
        for &row in rows {
            let Some(src) = mapping::cell(row, src_script) else {
                continue;
            };
            if src.is_empty() {
                continue;
            }
            // A short Sanskrit row has no cell for most scripts; skipping it
            // leaves the character unconverted rather than mapping it to
            // garbage.
            let Some(dst) = mapping::cell(row, dst_script) else {
                continue;
            };
            by_len
                .entry(src.chars().count())
                .or_default()
                .insert(src, dst);
        }

        let mut groups: Vec<_> = by_len.into_iter().collect();
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        LookupTable { groups }
    }

    /// Greedy longest-prefix substitution: at every position try the length
    /// groups longest first, emit the mapped string on the first hit, and
    /// pass the character through unchanged when nothing matches.
    pub(crate) fn apply(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut key = String::new();
        let mut i = 0;
        while i < chars.len() {
            let mut matched = false;
            for (len, map) in &self.groups {
                if i + len > chars.len() {
                    continue;
                }
                key.clear();
                key.extend(&chars[i..i + len]);
                if let Some(&rep) = map.get(key.as_str()) {
                    out.push_str(rep);
                    i += len;
                    matched = true;
                    break;
                }
            }
            if !matched {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_ordered_longest_first() {
        let table = LookupTable::get(Direction::ToCanonical, Script::Latn, false);
        let lens: Vec<usize> = table.groups.iter().map(|(len, _)| *len).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted);
        assert!(!lens.contains(&0));
    }

    #[test]
    fn test_longest_match_wins() {
        // "kh" must hit the aspirated row, not decompose into "k" + "h".
        let table = LookupTable::get(Direction::ToCanonical, Script::Latn, false);
        assert_eq!(table.apply("kh"), "ඛ");
        assert_eq!(table.apply("k"), "ක");
        assert_eq!(table.apply("dh"), "ධ");
    }

    #[test]
    fn test_three_char_cyrillic_keys() {
        let table = LookupTable::get(Direction::ToCanonical, Script::Cyrl, false);
        assert_eq!(table.apply("джх"), "ඣ");
        assert_eq!(table.apply("дж"), "ජ");
    }

    #[test]
    fn test_virama_deletes_in_roman_output() {
        let table = LookupTable::get(Direction::FromCanonical, Script::Latn, true);
        assert_eq!(table.apply("ක\u{0DCA}"), "k");
    }

    #[test]
    fn test_unmatched_chars_pass_through() {
        let table = LookupTable::get(Direction::FromCanonical, Script::Deva, true);
        assert_eq!(table.apply("ක?ත x"), "क?त x");
    }

    #[test]
    fn test_supplementary_plane_keys() {
        // Brahmi sits outside the BMP; grouping is by chars, not code units.
        let table = LookupTable::get(Direction::ToCanonical, Script::Brah, true);
        assert_eq!(table.apply("𑀓𑀸"), "කා");
    }

    #[test]
    fn test_chakma_multi_char_independent_vowels() {
        // The aa row is two codepoints in Chakma.
        let table = LookupTable::get(Direction::ToCanonical, Script::Cakm, true);
        assert_eq!(table.apply("𑄃𑄂"), "ආ");
    }

    #[test]
    fn test_sanskrit_rows_skipped_without_target_column() {
        // ඓ has no Thai cell; it must survive unconverted.
        let table = LookupTable::get(Direction::FromCanonical, Script::Thai, true);
        assert_eq!(table.apply("ඓක"), "ඓก");
    }

    #[test]
    fn test_digits_convert() {
        let table = LookupTable::get(Direction::FromCanonical, Script::Mymr, true);
        assert_eq!(table.apply("108"), "၁၀၈");
    }
}
