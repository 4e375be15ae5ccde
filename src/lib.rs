//! Transliteration engine for Pali text across the scripts the tipitaka is
//! printed in.
//!
//! Every conversion is routed through a canonical intermediate script
//! (Sinhala): the source text is un-beautified and mapped to canonical
//! form, then mapped out to the target script and beautified with the
//! target's display rules. Character equivalences live in static tables;
//! longest-match lookup keeps aspirated digraphs and multi-codepoint signs
//! intact; a vowel transform bridges the abugida scripts and the
//! alphabetic ones (Roman, Cyrillic), which spell the inherent vowel out.
//!
//! Arbitrary input never fails: characters with no mapping pass through
//! unchanged, and the advisory checks in [`ConvertOptions`] only log.
//!
//! ```
//! use pali_engine::{convert, convert_mixed, ConvertOptions, Script};
//!
//! let thai = convert("namo tassa", Script::Thai, Script::Latn, ConvertOptions::default());
//! assert_eq!(thai, "นโม ตส\u{0E3A}ส");
//!
//! // mixed input detects the script of each run
//! let deva = convert_mixed("නමො tassa", Script::Deva, ConvertOptions::default());
//! assert_eq!(deva, "नमो तस\u{094D}स");
//! ```

pub mod beautify;
pub mod convert;
mod error;
mod lookup;
pub mod mapping;
pub mod script;
mod trace_init;
pub mod validate;
mod vowel;

pub use beautify::{beautify, reorder_preposed, restore_preposed, un_beautify, RenderContext};
pub use convert::{
    convert, convert_mixed, from_canonical, mixed_to_canonical, to_canonical, ConvertOptions,
};
pub use error::EngineError;
pub use mapping::validate_mappings;
pub use script::{script_for_char, Script, ScriptInfo, ALL_SCRIPTS};
pub use trace_init::init_tracing;
pub use validate::{check_roman_convert, check_unconverted};
