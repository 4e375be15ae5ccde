//! Static character-mapping tables and their integrity check.

mod table;

pub(crate) use table::{Row, CONSONANTS, SPECIALS, VOWELS};

use crate::error::EngineError;
use crate::script::Script;

/// Column order of the full mapping rows. This is the single source of
/// truth for positional access; every cell read goes through [`column`],
/// and [`validate_mappings`] cross-checks each column's characters against
/// the script's registered codepoint ranges, so a misaligned or reordered
/// column fails at load instead of corrupting conversions silently.
pub(crate) const COLUMNS: [Script; 20] = [
    Script::Sinh,
    Script::Deva,
    Script::Latn,
    Script::Thai,
    Script::Laoo,
    Script::Mymr,
    Script::Khmr,
    Script::Beng,
    Script::Guru,
    Script::Lana,
    Script::Gujr,
    Script::Telu,
    Script::Knda,
    Script::Mlym,
    Script::Brah,
    Script::Tibt,
    Script::Cakm,
    Script::Java,
    Script::Bali,
    Script::Cyrl,
];

/// Number of cells in a Sanskrit-extension row (Sinhala/Devanagari/Roman).
const SANSKRIT_COLS: usize = 3;

/// Mapping column for a script. Assamese and Tamil extended are aliases:
/// they convert through the Bengali and Malayalam columns respectively.
pub(crate) fn column(script: Script) -> usize {
    match script {
        Script::Sinh => 0,
        Script::Deva => 1,
        Script::Latn => 2,
        Script::Thai => 3,
        Script::Laoo => 4,
        Script::Mymr => 5,
        Script::Khmr => 6,
        Script::Beng | Script::Asse => 7,
        Script::Guru => 8,
        Script::Lana => 9,
        Script::Gujr => 10,
        Script::Telu => 11,
        Script::Knda => 12,
        Script::Mlym | Script::Taml => 13,
        Script::Brah => 14,
        Script::Tibt => 15,
        Script::Cakm => 16,
        Script::Java => 17,
        Script::Bali => 18,
        Script::Cyrl => 19,
    }
}

/// Cell of `row` for `script`, or `None` when the row is a short
/// Sanskrit-extension row without that column. A present-but-empty cell
/// (`Some("")`) is meaningful: it maps to deletion in the lookup tables.
pub(crate) fn cell(row: Row, script: Script) -> Option<&'static str> {
    row.get(column(script)).copied()
}

/// Startup self-check over all mapping rows. Violations are configuration
/// errors in the static tables, never runtime input errors.
pub fn validate_mappings() -> Result<(), EngineError> {
    let mut violations = Vec::new();
    for (category, rows) in [
        ("specials", SPECIALS),
        ("consonants", CONSONANTS),
        ("vowels", VOWELS),
    ] {
        for (index, &row) in rows.iter().enumerate() {
            check_row(category, index, row, &mut violations);
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(EngineError::MappingIntegrity { violations })
    }
}

/// Row-level integrity rules: expected cardinality, every cell inside its
/// column's registered ranges, no duplicate cells.
fn check_row(category: &str, index: usize, row: Row, violations: &mut Vec<String>) {
    if row.len() != COLUMNS.len() && row.len() != SANSKRIT_COLS {
        violations.push(format!(
            "{category}[{index}]: row has {} cells, expected {} or {SANSKRIT_COLS}",
            row.len(),
            COLUMNS.len(),
        ));
        return;
    }

    let digit_row = row[0].chars().all(|c| c.is_ascii_digit()) && !row[0].is_empty();

    for (col, &text) in row.iter().enumerate() {
        let Some(first) = text.chars().next() else {
            continue;
        };
        // Digit cells are exempt: Sinhala and Roman both spell digits with
        // ASCII, outside the Sinhala block.
        if first.is_ascii_digit() {
            continue;
        }
        let script = COLUMNS[col];
        let in_range = script.info().ranges.iter().any(|r| r.contains(&first));
        if !in_range {
            violations.push(format!(
                "{category}[{index}]: {text:?} (U+{:04X}) outside the {script} ranges",
                first as u32,
            ));
        }
    }

    if !digit_row {
        for (i, &a) in row.iter().enumerate() {
            if !a.is_empty() && row[..i].contains(&a) {
                violations.push(format!("{category}[{index}]: duplicate cell {a:?}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_pass_integrity_check() {
        if let Err(EngineError::MappingIntegrity { violations }) = validate_mappings() {
            panic!("integrity violations: {violations:#?}");
        }
    }

    #[test]
    fn test_out_of_range_cell_is_reported() {
        // A Devanagari letter planted in the Thai column.
        let corrupted: Row = &[
            "ක", "क", "k", "ख", "ກ", "က", "ក", "ক", "ਕ", "ᨠ", "ક", "క", "ಕ", "ക", "𑀓", "ཀ",
            "𑄇", "ꦏ", "ᬓ", "к",
        ];
        let mut violations = Vec::new();
        check_row("consonants", 0, corrupted, &mut violations);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("thai"), "{}", violations[0]);
    }

    #[test]
    fn test_wrong_cardinality_is_reported() {
        let mut violations = Vec::new();
        check_row("specials", 3, &["අ", "अ"], &mut violations);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("2 cells"));
    }

    #[test]
    fn test_duplicate_cell_is_reported() {
        let mut violations = Vec::new();
        check_row("consonants", 9, &["ක", "ක", "k"], &mut violations);
        assert!(violations.iter().any(|v| v.contains("duplicate")));
    }

    #[test]
    fn test_alias_columns() {
        assert_eq!(column(Script::Asse), column(Script::Beng));
        assert_eq!(column(Script::Taml), column(Script::Mlym));
    }

    #[test]
    fn test_sanskrit_rows_have_no_thai_cell() {
        let row = *SPECIALS.last().unwrap();
        assert_eq!(cell(row, Script::Thai), None);
        assert!(cell(row, Script::Latn).is_some());
    }

    #[test]
    fn test_virama_maps_to_deletion_for_roman() {
        let virama = SPECIALS[10];
        assert_eq!(cell(virama, Script::Sinh), Some("\u{0DCA}"));
        assert_eq!(cell(virama, Script::Latn), Some(""));
        assert_eq!(cell(virama, Script::Cyrl), Some(""));
    }
}
