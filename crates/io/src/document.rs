//! The XML document format.
//!
//! ```xml
//! <spreadsheet IsValid="^[A-Z]+[1-9][0-9]*$">
//!   <cell name="A1" contents="=B1*2"/>
//!   <cell name="B1" contents="3"/>
//! </spreadsheet>
//! ```
//!
//! The root element records the pattern of the name validator that was in
//! effect when the document was written. One `<cell>` per non-empty cell:
//! numbers in canonical text, formulas as `=` plus the canonical (upper-case)
//! formula rendering, text verbatim. Loading replays every cell through a
//! fresh engine, so values are recomputed rather than trusted.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use regex::Regex;

use cellgrid_engine::cell_name;
use cellgrid_engine::{Spreadsheet, SpreadsheetError};

use crate::error::DocumentError;

/// Serialize `sheet` as an XML document. Pure: the modified flag is left
/// alone; use [`save`] for the save-and-mark flow.
pub fn write<W: Write>(sheet: &Spreadsheet, dest: W) -> Result<(), DocumentError> {
    let mut writer = Writer::new_with_indent(dest, b' ', 2);

    let mut root = BytesStart::new("spreadsheet");
    root.push_attribute(("IsValid", sheet.validator().as_str()));
    writer.write_event(Event::Start(root))?;

    // Sorted for stable output.
    let mut cells: Vec<_> = sheet.cells().collect();
    cells.sort_by_key(|(name, _)| *name);

    for (name, cell) in cells {
        let mut element = BytesStart::new("cell");
        element.push_attribute(("name", name));
        let contents = cell.content.raw_text();
        element.push_attribute(("contents", contents.as_str()));
        writer.write_event(Event::Empty(element))?;
    }

    writer.write_event(Event::End(BytesEnd::new("spreadsheet")))?;
    Ok(())
}

/// Write `sheet` to `path` and clear its modified flag.
pub fn save(sheet: &mut Spreadsheet, path: &Path) -> Result<(), DocumentError> {
    let file = File::create(path)?;
    let mut dest = BufWriter::new(file);
    write(sheet, &mut dest)?;
    dest.flush()?;
    sheet.mark_saved();
    log::debug!("saved {} cell(s) to {}", sheet.cell_names().count(), path.display());
    Ok(())
}

/// Parse a document into a fresh spreadsheet configured with `validator`.
///
/// Every cell name must pass the validator recorded in the document (else
/// the document is malformed) and the new `validator` (else the document is
/// from an incompatible configuration). Duplicate names, case-insensitively,
/// are malformed. Formulas are replayed through the engine; a replay that
/// would create a cycle makes the document malformed rather than surfacing
/// the engine's cycle error. The loaded sheet is not modified.
pub fn read<R: BufRead>(source: R, validator: Regex) -> Result<Spreadsheet, DocumentError> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut sheet: Option<Spreadsheet> = None;
    let mut recorded: Option<Regex> = None;
    let mut seen: HashSet<String> = HashSet::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"spreadsheet" => {
                    let pattern = required_attr(e, "IsValid")?;
                    let old = Regex::new(&pattern).map_err(|_| {
                        DocumentError::Read(format!("unreadable validator pattern {pattern:?}"))
                    })?;
                    recorded = Some(old);
                    sheet = Some(Spreadsheet::with_validator(validator.clone()));
                }
                b"cell" => {
                    let (Some(sheet), Some(recorded)) = (sheet.as_mut(), recorded.as_ref()) else {
                        return Err(DocumentError::Read(
                            "cell element outside a spreadsheet element".to_string(),
                        ));
                    };

                    let name = required_attr(e, "name")?;
                    let contents = required_attr(e, "contents")?;

                    if !cell_name::conforms(&name, recorded) {
                        return Err(DocumentError::Read(format!(
                            "cell name {name:?} fails the document's own validator"
                        )));
                    }
                    if !seen.insert(cell_name::normalize(&name)) {
                        return Err(DocumentError::Read(format!(
                            "cell name {name:?} appears more than once"
                        )));
                    }
                    if !sheet.is_valid_name(&name) {
                        return Err(DocumentError::Version(name));
                    }

                    sheet
                        .set_contents_of_cell(&name, &contents)
                        .map_err(|err| match err {
                            SpreadsheetError::Circular(_) => DocumentError::Read(
                                "a formula in the document creates a circular dependency"
                                    .to_string(),
                            ),
                            other => DocumentError::Read(other.to_string()),
                        })?;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    let mut sheet =
        sheet.ok_or_else(|| DocumentError::Read("missing spreadsheet element".to_string()))?;
    sheet.mark_saved();
    Ok(sheet)
}

/// Open and parse the document at `path`.
pub fn open(path: &Path, validator: Regex) -> Result<Spreadsheet, DocumentError> {
    let file = File::open(path)?;
    read(BufReader::new(file), validator)
}

/// The validator pattern recorded in the document at `path`, compiled.
///
/// Lets a caller reopen a document under its own validator instead of
/// supplying a new one (the two load-time checks then coincide).
pub fn recorded_validator(path: &Path) -> Result<Regex, DocumentError> {
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(BufReader::new(file));
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if e.name().as_ref() == b"spreadsheet" =>
            {
                let pattern = required_attr(e, "IsValid")?;
                return Regex::new(&pattern).map_err(|_| {
                    DocumentError::Read(format!("unreadable validator pattern {pattern:?}"))
                });
            }
            Ok(Event::Eof) => {
                return Err(DocumentError::Read("missing spreadsheet element".to_string()))
            }
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }
}

fn required_attr(element: &BytesStart, key: &str) -> Result<String, DocumentError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| DocumentError::Read(e.to_string()))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|e| DocumentError::Read(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    Err(DocumentError::Read(format!("missing {key:?} attribute")))
}
