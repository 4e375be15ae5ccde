//! Script registry and codepoint classification.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A writing system the engine can convert between.
///
/// Codes follow ISO 15924 where one exists. Variant order is the
/// classification scan order used by [`script_for_char`] and is a fixed
/// contract: when two registered ranges overlap, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Sinhala, the canonical intermediate script.
    Sinh,
    Deva,
    /// Roman (Latin with Pali diacritics).
    Latn,
    Thai,
    Mymr,
    Khmr,
    Laoo,
    Beng,
    Tibt,
    Cyrl,
    Guru,
    Gujr,
    Telu,
    Knda,
    Mlym,
    /// Tamil extended. Shares the Malayalam mapping column and range-less
    /// registry entry; rendered with a different font downstream.
    Taml,
    /// Assamese. Shares the Bengali Unicode block and mapping column.
    Asse,
    /// Tai Tham (Lanna).
    Lana,
    Cakm,
    Java,
    Bali,
    Brah,
}

pub const ALL_SCRIPTS: [Script; 22] = [
    Script::Sinh,
    Script::Deva,
    Script::Latn,
    Script::Thai,
    Script::Mymr,
    Script::Khmr,
    Script::Laoo,
    Script::Beng,
    Script::Tibt,
    Script::Cyrl,
    Script::Guru,
    Script::Gujr,
    Script::Telu,
    Script::Knda,
    Script::Mlym,
    Script::Taml,
    Script::Asse,
    Script::Lana,
    Script::Cakm,
    Script::Java,
    Script::Bali,
    Script::Brah,
];

impl Script {
    pub fn as_str(self) -> &'static str {
        match self {
            Script::Sinh => "sinh",
            Script::Deva => "deva",
            Script::Latn => "latn",
            Script::Thai => "thai",
            Script::Mymr => "mymr",
            Script::Khmr => "khmr",
            Script::Laoo => "laoo",
            Script::Beng => "beng",
            Script::Tibt => "tibt",
            Script::Cyrl => "cyrl",
            Script::Guru => "guru",
            Script::Gujr => "gujr",
            Script::Telu => "telu",
            Script::Knda => "knda",
            Script::Mlym => "mlym",
            Script::Taml => "taml",
            Script::Asse => "asse",
            Script::Lana => "lana",
            Script::Cakm => "cakm",
            Script::Java => "java",
            Script::Bali => "bali",
            Script::Brah => "brah",
        }
    }

    /// Registry metadata for this script.
    pub fn info(self) -> &'static ScriptInfo {
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Script {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SCRIPTS
            .iter()
            .find(|sc| sc.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| EngineError::UnknownScript(s.to_string()))
    }
}

/// Static metadata for one script.
pub struct ScriptInfo {
    pub script: Script,
    pub display_name: &'static str,
    pub native_name: &'static str,
    /// Unicode codepoint ranges owned by this script, in priority order.
    /// Empty for mapping-only aliases (Tamil extended, Assamese) that reuse
    /// another script's block.
    pub ranges: &'static [RangeInclusive<char>],
    /// Presentation asset reference, carried verbatim for UI consumers.
    pub asset: &'static str,
}

/// One entry per [`Script`], indexed by discriminant.
static REGISTRY: [ScriptInfo; 22] = [
    ScriptInfo {
        script: Script::Sinh,
        display_name: "Sinhala",
        native_name: "සිංහල",
        ranges: &['\u{0D80}'..='\u{0DFF}'],
        asset: "sri-lanka.svg",
    },
    ScriptInfo {
        script: Script::Deva,
        display_name: "Devanagari",
        native_name: "देवनागरी",
        ranges: &['\u{0900}'..='\u{097F}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Latn,
        display_name: "Roman",
        native_name: "Roman",
        // Basic Latin + Latin-1 + Extended-A, and Latin Extended Additional
        // for the Pali diacritics.
        ranges: &['\u{0000}'..='\u{017F}', '\u{1E00}'..='\u{1EFF}'],
        asset: "uk.svg",
    },
    ScriptInfo {
        script: Script::Thai,
        display_name: "Thai",
        native_name: "ไทย",
        ranges: &['\u{0E00}'..='\u{0E7F}'],
        asset: "thailand.svg",
    },
    ScriptInfo {
        script: Script::Mymr,
        display_name: "Myanmar",
        native_name: "ဗမာစာ",
        ranges: &['\u{1000}'..='\u{107F}'],
        asset: "myanmar.svg",
    },
    ScriptInfo {
        script: Script::Khmr,
        display_name: "Khmer",
        native_name: "ភាសាខ្មែរ",
        ranges: &['\u{1780}'..='\u{17FF}'],
        asset: "cambodia.svg",
    },
    ScriptInfo {
        script: Script::Laoo,
        display_name: "Lao",
        native_name: "ລາວ",
        ranges: &['\u{0E80}'..='\u{0EFF}'],
        asset: "laos.svg",
    },
    ScriptInfo {
        script: Script::Beng,
        display_name: "Bengali",
        native_name: "বাংলা",
        ranges: &['\u{0980}'..='\u{09FF}'],
        asset: "bangladesh.svg",
    },
    ScriptInfo {
        script: Script::Tibt,
        display_name: "Tibetan",
        native_name: "བོད་སྐད།",
        ranges: &['\u{0F00}'..='\u{0FFF}'],
        asset: "tibet.svg",
    },
    ScriptInfo {
        script: Script::Cyrl,
        display_name: "Cyrillic",
        native_name: "кириллица",
        // The combining diacritical marks block carries the length and
        // retroflex marks of the Cyrillic romanization.
        ranges: &['\u{0400}'..='\u{04FF}', '\u{0300}'..='\u{036F}'],
        asset: "russia.svg",
    },
    ScriptInfo {
        script: Script::Guru,
        display_name: "Gurmukhi",
        native_name: "ਗੁਰਮੁਖੀ",
        ranges: &['\u{0A00}'..='\u{0A7F}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Gujr,
        display_name: "Gujarati",
        native_name: "ગુજરાતી",
        ranges: &['\u{0A80}'..='\u{0AFF}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Telu,
        display_name: "Telugu",
        native_name: "తెలుగు",
        ranges: &['\u{0C00}'..='\u{0C7F}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Knda,
        display_name: "Kannada",
        native_name: "ಕನ್ನಡ",
        ranges: &['\u{0C80}'..='\u{0CFF}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Mlym,
        display_name: "Malayalam",
        native_name: "മലയാളം",
        ranges: &['\u{0D00}'..='\u{0D7F}'],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Taml,
        display_name: "Tamil",
        native_name: "தமிழ்",
        ranges: &[],
        asset: "india.svg",
    },
    ScriptInfo {
        script: Script::Asse,
        display_name: "Assamese",
        native_name: "অসমীয়া",
        ranges: &[],
        asset: "bangladesh.svg",
    },
    ScriptInfo {
        script: Script::Lana,
        display_name: "Tai Tham",
        native_name: "ᨲ᩠ᩅᩫᨵᩢᨾ᩠ᨾ᩼",
        ranges: &['\u{1A20}'..='\u{1AAF}'],
        asset: "thailand.svg",
    },
    ScriptInfo {
        script: Script::Cakm,
        display_name: "Chakma",
        native_name: "𑄌𑄋𑄴𑄟𑄳𑄦",
        ranges: &['\u{11100}'..='\u{1114F}'],
        asset: "bangladesh.svg",
    },
    ScriptInfo {
        script: Script::Java,
        display_name: "Javanese",
        native_name: "ꦗꦮ",
        ranges: &['\u{A980}'..='\u{A9DF}'],
        asset: "indonesia.svg",
    },
    ScriptInfo {
        script: Script::Bali,
        display_name: "Balinese",
        native_name: "ᬩᬮᬶ",
        ranges: &['\u{1B00}'..='\u{1B7F}'],
        asset: "indonesia.svg",
    },
    ScriptInfo {
        script: Script::Brah,
        display_name: "Brahmi",
        native_name: "Brāhmī",
        ranges: &['\u{11000}'..='\u{1107F}'],
        asset: "empty.svg",
    },
];

/// Classify a codepoint to the first script whose registered range contains
/// it, or `None` for a codepoint no script claims.
pub fn script_for_char(c: char) -> Option<Script> {
    REGISTRY
        .iter()
        .find(|info| info.ranges.iter().any(|r| r.contains(&c)))
        .map(|info| info.script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_core_scripts() {
        assert_eq!(script_for_char('ක'), Some(Script::Sinh));
        assert_eq!(script_for_char('क'), Some(Script::Deva));
        assert_eq!(script_for_char('k'), Some(Script::Latn));
        assert_eq!(script_for_char('ก'), Some(Script::Thai));
        assert_eq!(script_for_char('က'), Some(Script::Mymr));
        assert_eq!(script_for_char('ᨠ'), Some(Script::Lana));
    }

    #[test]
    fn test_classify_supplementary_plane() {
        // Brahmi and Chakma sit outside the BMP; classification is by
        // decoded codepoint, not UTF-16 code units.
        assert_eq!(script_for_char('𑀓'), Some(Script::Brah));
        assert_eq!(script_for_char('𑄇'), Some(Script::Cakm));
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(script_for_char('☃'), None);
        assert_eq!(script_for_char('中'), None);
    }

    #[test]
    fn test_ascii_belongs_to_roman() {
        // Spaces and digits fall in the Basic Latin range on purpose: they
        // segment into Roman runs and pass through the digit mappings.
        assert_eq!(script_for_char(' '), Some(Script::Latn));
        assert_eq!(script_for_char('7'), Some(Script::Latn));
    }

    #[test]
    fn test_combining_marks_classify_cyrillic() {
        assert_eq!(script_for_char('\u{0304}'), Some(Script::Cyrl));
    }

    #[test]
    fn test_aliases_have_no_ranges() {
        assert!(Script::Taml.info().ranges.is_empty());
        assert!(Script::Asse.info().ranges.is_empty());
    }

    #[test]
    fn test_registry_indexed_by_discriminant() {
        for script in ALL_SCRIPTS {
            assert_eq!(script.info().script, script);
        }
    }

    #[test]
    fn test_code_round_trip() {
        for script in ALL_SCRIPTS {
            assert_eq!(script.as_str().parse::<Script>().unwrap(), script);
        }
        assert_eq!("MYMR".parse::<Script>().unwrap(), Script::Mymr);
        assert!("xxxx".parse::<Script>().is_err());
    }
}
