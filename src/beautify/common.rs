//! Rules shared across scripts: punctuation cleanup, Roman capitalization,
//! zero-width joiner handling.

use std::sync::LazyLock;

use regex::Regex;

use super::RenderContext;
use crate::script::Script;

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s([\s,!;?.])").unwrap());

pub(super) fn beautify_common(text: String, _script: Script, ctx: RenderContext) -> String {
    let mut text = match ctx {
        // Centered heading lines drop the closing double dandas.
        RenderContext::Centered => text.replace('॥', ""),
        // In verse a danda pauses, a double danda ends the stanza.
        RenderContext::Verse => text.replace('।', ";").replace('॥', "."),
        RenderContext::Prose => text,
    };

    // An abbreviation sign directly before an ellipsis would render as a
    // fourth dot.
    text = text.replace("॰…", "…");
    // Midpoint for the abbreviation sign, so notes do not read as sentence
    // ends and get capitalized.
    text = text.replace('॰', "·");
    // Residual dandas become periods.
    text = text.replace(['।', '॥'], ".");
    // No whitespace before punctuation; double spaces collapse.
    SPACE_BEFORE_PUNCT.replace_all(&text, "$1").into_owned()
}

static LINE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\S").unwrap());
static SENTENCE_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([.?]\s)(\S)").unwrap());
static QUOTE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([\u{201C}\u{2018}])(\\S)").unwrap());

/// Line-, sentence- and quote-initial capitalization for Roman output.
pub(super) fn capitalize(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = LINE_START.replace_all(&text, |caps: &regex::Captures| caps[0].to_uppercase());
    let text = SENTENCE_START.replace_all(&text, |caps: &regex::Captures| {
        format!("{}{}", &caps[1], caps[2].to_uppercase())
    });
    QUOTE_START
        .replace_all(&text, |caps: &regex::Captures| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

/// Case is presentation-only in Roman Pali; folding it is lossy by design.
pub(super) fn un_capitalize(text: String, _script: Script, _ctx: RenderContext) -> String {
    text.to_lowercase()
}

/// Remove ZWJ/ZWNJ. They only shape glyphs and would otherwise split
/// same-script runs and defeat the lookup keys.
pub(crate) fn strip_joiners(text: &str) -> String {
    text.replace(['\u{200C}', '\u{200D}'], "")
}

pub(super) fn strip_joiners_step(text: String, _script: Script, _ctx: RenderContext) -> String {
    strip_joiners(&text)
}
