// JSON export

use std::io::Write;

use cellgrid_engine::Spreadsheet;

use crate::error::DocumentError;

/// Export the non-empty cells as a JSON object keyed by cell name.
/// Each entry carries the textual contents and the display value:
///
/// ```json
/// { "A1": { "contents": "=B1*2", "value": "6" } }
/// ```
///
/// Read-only: the sheet's modified flag is untouched.
pub fn export<W: Write>(sheet: &Spreadsheet, dest: W) -> Result<(), DocumentError> {
    let mut cells: Vec<_> = sheet.cells().collect();
    cells.sort_by_key(|(name, _)| *name);

    let mut root = serde_json::Map::new();
    for (name, cell) in cells {
        let mut entry = serde_json::Map::new();
        entry.insert("contents".to_string(), cell.content.raw_text().into());
        entry.insert("value".to_string(), cell.value.to_string().into());
        root.insert(name.to_string(), serde_json::Value::Object(entry));
    }

    serde_json::to_writer_pretty(dest, &serde_json::Value::Object(root))
        .map_err(std::io::Error::from)?;
    Ok(())
}
