//! Per-script display correction and its inverse.
//!
//! Beautification runs after converting out of the canonical script and
//! corrects for conventions a literal character mapping cannot express:
//! ligatures and conjunct forms, pre-posed vowel signs, consonant
//! subjoining, punctuation, capitalization. Un-beautification runs before
//! converting in and folds script-specific spelling variants back to the
//! canonical form. The two are not exact inverses for every rule; the
//! one-way rules are marked where they are defined.

mod common;
mod scripts;

pub(crate) use common::strip_joiners;

use crate::error::EngineError;
use crate::script::Script;

/// Rendering context of the output, altering how danda punctuation is
/// rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderContext {
    /// Running prose.
    #[default]
    Prose,
    /// A centered heading line; closing double dandas are stripped.
    Centered,
    /// Verse; a danda pauses as semicolon, a double danda ends as period.
    Verse,
}

type Step = fn(String, Script, RenderContext) -> String;

/// Ordered beautification steps per script. Scripts without an entry
/// render the plain character conversion.
fn beautify_steps(script: Script) -> &'static [Step] {
    match script {
        Script::Sinh => &[scripts::sinhala_joiners, common::beautify_common],
        Script::Latn => &[common::beautify_common, common::capitalize],
        Script::Thai => &[scripts::reorder_thai, common::beautify_common],
        Script::Laoo => &[scripts::reorder_lao, common::beautify_common],
        Script::Mymr => &[scripts::myanmar, common::beautify_common],
        Script::Khmr | Script::Gujr | Script::Telu | Script::Mlym | Script::Cyrl => {
            &[common::beautify_common]
        }
        Script::Lana => &[scripts::tai_tham],
        Script::Brah => &[scripts::brahmi, common::beautify_common],
        Script::Tibt => &[scripts::tibetan],
        Script::Asse => &[scripts::assamese],
        Script::Deva
        | Script::Beng
        | Script::Guru
        | Script::Knda
        | Script::Taml
        | Script::Cakm
        | Script::Java
        | Script::Bali => &[],
    }
}

/// Ordered un-beautification steps per script.
fn un_beautify_steps(script: Script) -> &'static [Step] {
    match script {
        Script::Sinh => &[common::strip_joiners_step, scripts::sinhala_fold_long_vowels],
        // Devanagari source texts (tipitaka.org) carry shaping ZWJs.
        Script::Deva => &[common::strip_joiners_step],
        Script::Latn => &[common::un_capitalize],
        Script::Thai => &[scripts::un_thai, scripts::restore_thai],
        Script::Laoo => &[scripts::restore_lao],
        Script::Khmr => &[scripts::un_khmer],
        Script::Lana => &[scripts::un_tai_tham],
        Script::Mymr => &[scripts::un_myanmar],
        Script::Tibt => &[scripts::un_tibetan],
        Script::Beng
        | Script::Cyrl
        | Script::Guru
        | Script::Gujr
        | Script::Telu
        | Script::Knda
        | Script::Mlym
        | Script::Taml
        | Script::Asse
        | Script::Cakm
        | Script::Java
        | Script::Bali
        | Script::Brah => &[],
    }
}

/// Apply the script's display rules to converted text.
pub fn beautify(text: &str, script: Script, ctx: RenderContext) -> String {
    let mut text = text.to_string();
    for step in beautify_steps(script) {
        text = step(text, script, ctx);
    }
    text
}

/// Fold script-specific spelling variants back to the form the conversion
/// tables expect.
pub fn un_beautify(text: &str, script: Script) -> String {
    let mut text = text.to_string();
    for step in un_beautify_steps(script) {
        text = step(text, script, RenderContext::Prose);
    }
    text
}

/// Move the pre-posed e/o vowel signs in front of the consonant they
/// modify. Only Thai and Lao write these signs first; calling this for any
/// other script is a programmer error.
pub fn reorder_preposed(text: &str, script: Script) -> Result<String, EngineError> {
    match script {
        Script::Thai => Ok(scripts::reorder_thai(
            text.to_string(),
            script,
            RenderContext::Prose,
        )),
        Script::Laoo => Ok(scripts::reorder_lao(
            text.to_string(),
            script,
            RenderContext::Prose,
        )),
        _ => Err(EngineError::UnsupportedTransform {
            transform: "reorder_preposed",
            script,
        }),
    }
}

/// Inverse of [`reorder_preposed`], used before converting Thai or Lao
/// text toward the canonical script.
pub fn restore_preposed(text: &str, script: Script) -> Result<String, EngineError> {
    match script {
        Script::Thai => Ok(scripts::restore_thai(
            text.to_string(),
            script,
            RenderContext::Prose,
        )),
        Script::Laoo => Ok(scripts::restore_lao(
            text.to_string(),
            script,
            RenderContext::Prose,
        )),
        _ => Err(EngineError::UnsupportedTransform {
            transform: "restore_preposed",
            script,
        }),
    }
}
