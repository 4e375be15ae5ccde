//! Per-script display rules.
//!
//! Where a rule is a one-way normalization of real-world spelling variance
//! rather than an exact inverse, the comment on the un-rule says so.

use std::sync::LazyLock;

use regex::Regex;

use super::RenderContext;
use crate::script::Script;

// ---------------------------------------------------------------------------
// Sinhala
// ---------------------------------------------------------------------------

static YA_RA_AFTER_VIRAMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{0DCA}([\u{0DBA}\u{0DBB}])").unwrap());

/// Yansaya/rakaransaya ligatures need a ZWJ between the virama and the
/// following yayanna/rayanna.
pub(super) fn sinhala_joiners(text: String, _script: Script, _ctx: RenderContext) -> String {
    YA_RA_AFTER_VIRAMA
        .replace_all(&text, "\u{0DCA}\u{200D}$1")
        .into_owned()
}

/// Long e/o are typed for short e/o often enough that input is folded to
/// the short letters. One-way: the long spellings do not come back.
pub(super) fn sinhala_fold_long_vowels(
    text: String,
    _script: Script,
    _ctx: RenderContext,
) -> String {
    text.replace('ඒ', "එ")
        .replace('ඕ', "ඔ")
        .replace('\u{0DDA}', "\u{0DD9}")
        .replace('\u{0DDD}', "\u{0DDC}")
}

// ---------------------------------------------------------------------------
// Thai / Lao: pre-posed vowels
// ---------------------------------------------------------------------------

static THAI_E_O_AFTER: LazyLock<Regex> = LazyLock::new(|| Regex::new("([ก-ฮ])([เโ])").unwrap());
static THAI_E_O_BEFORE: LazyLock<Regex> = LazyLock::new(|| Regex::new("([เโ])([ก-ฮ])").unwrap());
static LAO_E_O_AFTER: LazyLock<Regex> = LazyLock::new(|| Regex::new("([ກ-ຮ])([ເໂ])").unwrap());
static LAO_E_O_BEFORE: LazyLock<Regex> = LazyLock::new(|| Regex::new("([ເໂ])([ກ-ຮ])").unwrap());

/// The e and o signs are written in front of the consonant they modify.
pub(super) fn reorder_thai(text: String, _script: Script, _ctx: RenderContext) -> String {
    THAI_E_O_AFTER.replace_all(&text, "$2$1").into_owned()
}

pub(super) fn reorder_lao(text: String, _script: Script, _ctx: RenderContext) -> String {
    LAO_E_O_AFTER.replace_all(&text, "$2$1").into_owned()
}

pub(super) fn restore_thai(text: String, _script: Script, _ctx: RenderContext) -> String {
    THAI_E_O_BEFORE.replace_all(&text, "$2$1").into_owned()
}

pub(super) fn restore_lao(text: String, _script: Script, _ctx: RenderContext) -> String {
    LAO_E_O_BEFORE.replace_all(&text, "$2$1").into_owned()
}

/// Thai input variants: ฎ typed for the ฏ used in the tipitaka (one-way),
/// the composed iṃ sign split back into its parts, and two legacy
/// private-use glyphs mapped back to their letters.
pub(super) fn un_thai(text: String, _script: Script, _ctx: RenderContext) -> String {
    text.replace('ฎ', "ฏ")
        .replace('\u{0E36}', "\u{0E34}\u{0E4D}")
        .replace('\u{F70F}', "ญ")
        .replace('\u{F700}', "ฐ")
}

// ---------------------------------------------------------------------------
// Khmer
// ---------------------------------------------------------------------------

/// Composed iṃ sign split into its parts; the word-final virama variant
/// folded to the regular sign.
pub(super) fn un_khmer(text: String, _script: Script, _ctx: RenderContext) -> String {
    text.replace('\u{17B9}', "\u{17B7}\u{17C6}")
        .replace('\u{17D1}', "\u{17D2}")
}

// ---------------------------------------------------------------------------
// Myanmar
// ---------------------------------------------------------------------------

static MYMR_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[\u{2026}\u{0964}\u{0965}]+").unwrap());
static MYMR_KINZI: LazyLock<Regex> = LazyLock::new(|| Regex::new("င\u{1039}([က-ဠ])").unwrap());
static MYMR_TALL_AA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([ခဂငဒပဝ]ေ?)\u{102C}").unwrap());
static MYMR_TALL_AA_EXCEPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(က္ခ|န္ဒ|ပ္ပ|မ္ပ)(ေ?)\u{102B}").unwrap());
static MYMR_TALL_AA_FORCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("(ဒ္ဓ|ဒွ)(ေ?)\u{102C}").unwrap());

/// Myanmar orthography per the Unicode 5.1 model: section marks, the
/// dedicated ññ/ss letters, kinzi, the medial consonant signs, and the
/// tall-aa rules with their fixed cluster exceptions.
pub(super) fn myanmar(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = text.replace([',', ';'], "၊");
    let text = MYMR_SECTION.replace_all(&text, "။");

    let text = text.replace("ဉ\u{1039}ဉ", "ည");
    let text = text.replace("သ\u{1039}သ", "ဿ");
    let text = MYMR_KINZI.replace_all(&text, "င\u{103A}\u{1039}$1");
    let text = text.replace("\u{1039}ယ", "ျ");
    let text = text.replace("\u{1039}ရ", "ြ");
    let text = text.replace("\u{1039}ဝ", "ွ");
    let text = text.replace("\u{1039}ဟ", "ှ");

    // aa widens to tall aa after the round letters, except inside a few
    // clusters; ddha and dva take tall aa regardless.
    let text = MYMR_TALL_AA.replace_all(&text, "${1}\u{102B}");
    let text = MYMR_TALL_AA_EXCEPT.replace_all(&text, "${1}${2}\u{102C}");
    MYMR_TALL_AA_FORCE
        .replace_all(&text, "${1}${2}\u{102B}")
        .into_owned()
}

pub(super) fn un_myanmar(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = text.replace('\u{102B}', "\u{102C}");
    let text = text.replace('ှ', "\u{1039}ဟ");
    let text = text.replace('ွ', "\u{1039}ဝ");
    let text = text.replace('ြ', "\u{1039}ရ");
    let text = text.replace('ျ', "\u{1039}ယ");
    let text = text.replace('\u{103A}', "");
    let text = text.replace('ဿ', "သ\u{1039}သ");
    let text = text.replace('ည', "ဉ\u{1039}ဉ");
    // saṅgha spelled with niggahita is normalized to the ṅ spelling so
    // searches find it. One-way on purpose.
    let text = text.replace("သံဃ", "သင\u{1039}ဃ");

    let text = text.replace('၊', ",");
    text.replace('။', ".")
}

// ---------------------------------------------------------------------------
// Tai Tham
// ---------------------------------------------------------------------------

/// Medial ra and the great sa have dedicated characters; dandas map to the
/// script's own section marks.
pub(super) fn tai_tham(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = text.replace("\u{1A60}\u{1A41}", "\u{1A55}");
    let text = text.replace("\u{1A48}\u{1A60}\u{1A48}", "\u{1A54}");
    text.replace('।', "\u{1AA8}").replace('॥', "\u{1AA9}")
}

/// Tall aa folds to aa. One-way: which spelling a source used is not
/// recoverable.
pub(super) fn un_tai_tham(text: String, _script: Script, _ctx: RenderContext) -> String {
    text.replace('\u{1A64}', "\u{1A63}")
}

// ---------------------------------------------------------------------------
// Tibetan
// ---------------------------------------------------------------------------

/// Subjoined form of a base letter; the subjoined block mirrors the base
/// block 0x50 above.
fn subjoined(base: char) -> Option<char> {
    if ('\u{0F40}'..='\u{0F67}').contains(&base) {
        char::from_u32(base as u32 + 0x50)
    } else {
        None
    }
}

/// Consonant stacks subjoin: halant + base letter collapses to the
/// subjoined letter, with the fixed-form and visible-halant exceptions.
pub(super) fn tibetan(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = text.replace('।', "\u{0F0D}").replace('॥', "\u{0F0E}");

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{0F84}' {
            if let Some(sub) = chars.peek().copied().and_then(subjoined) {
                out.push(sub);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    // yya and vva take the fixed-form second letter
    let out = out.replace("\u{0F61}\u{0FB1}", "\u{0F61}\u{0FBB}");
    let out = out.replace("\u{0F5D}\u{0FAD}", "\u{0F5D}\u{0FBA}");
    // jjha, yha and vha keep a visible halant
    let out = out.replace("\u{0F5B}\u{0FAC}", "\u{0F5B}\u{0F84}\u{0F5C}");
    let out = out.replace("\u{0F61}\u{0FB7}", "\u{0F61}\u{0F84}\u{0F67}");
    out.replace("\u{0F5D}\u{0FB7}", "\u{0F5D}\u{0F84}\u{0F67}")
}

/// Exact inverse of [`tibetan`]: subjoined letters open back up to halant +
/// base so the lookup sees canonical stacks.
pub(super) fn un_tibetan(text: String, _script: Script, _ctx: RenderContext) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{0F90}'..='\u{0FB7}' => {
                out.push('\u{0F84}');
                if let Some(base) = char::from_u32(c as u32 - 0x50) {
                    out.push(base);
                }
            }
            // fixed-form subjoined ya / wa
            '\u{0FBB}' => out.push_str("\u{0F84}\u{0F61}"),
            '\u{0FBA}' => out.push_str("\u{0F84}\u{0F5D}"),
            '\u{0F0D}' => out.push('।'),
            '\u{0F0E}' => out.push('॥'),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Brahmi
// ---------------------------------------------------------------------------

pub(super) fn brahmi(text: String, _script: Script, _ctx: RenderContext) -> String {
    text.replace('।', "𑁇")
        .replace('॥', "𑁈")
        .replace('\u{2013}', "𑁋")
}

// ---------------------------------------------------------------------------
// Assamese
// ---------------------------------------------------------------------------

/// Assamese prefers different letterforms for va/ra/ḷa within the shared
/// Bengali block. Ordered: va must move aside before ra takes its slot.
/// One-way: the output is indistinguishable from Bengali by range, so
/// there is no un-beautify.
pub(super) fn assamese(text: String, _script: Script, _ctx: RenderContext) -> String {
    let text = text.replace('\u{09F0}', "\u{09F1}");
    let text = text.replace('\u{09B0}', "\u{09F0}");
    text.replace("\u{09B2}\u{09BC}", "\u{09A1}\u{09BC}")
}
