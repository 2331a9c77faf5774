//! Reads back a package written by [`crate::workbook::Workbook`]: sheet order,
//! cell values and formulas, merges, frozen pane and column widths.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use quick_xml::Reader as XmlReader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::{
    Result,
    error::TrackerError,
    workbook::address::{CellRange, parse_cell_ref},
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadCell {
    /// Literal text or number as stored; `None` for formula or blank cells.
    pub value: Option<String>,
    /// Formula text without the leading `=`.
    pub formula: Option<String>,
    pub style: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SheetContents {
    pub cells: BTreeMap<(u32, u32), ReadCell>,
    pub merges: Vec<CellRange>,
    pub frozen_at: Option<(u32, u32)>,
    pub column_widths: BTreeMap<u32, f64>,
}

impl SheetContents {
    pub fn get(&self, cell_ref: &str) -> Option<&ReadCell> {
        parse_cell_ref(cell_ref).and_then(|key| self.cells.get(&key))
    }

    pub fn value(&self, cell_ref: &str) -> Option<&str> {
        self.get(cell_ref).and_then(|c| c.value.as_deref())
    }

    pub fn formula(&self, cell_ref: &str) -> Option<&str> {
        self.get(cell_ref).and_then(|c| c.formula.as_deref())
    }

    /// Non-empty cells of one row, left to right.
    pub fn row(&self, row: u32) -> impl Iterator<Item = (u32, &ReadCell)> {
        self.cells
            .range((row, 0)..=(row, u32::MAX))
            .filter(|(_, c)| c.value.is_some() || c.formula.is_some())
            .map(|(&(_, col), c)| (col, c))
    }
}

pub struct XlsxReader {
    archive: ZipArchive<File>,
    sheet_paths: HashMap<String, String>,
    sheet_order: Vec<String>,
}

#[inline]
fn attr_val(attr: &quick_xml::events::attributes::Attribute) -> String {
    let raw = std::str::from_utf8(attr.value.as_ref()).unwrap_or("");
    quick_xml::escape::unescape(raw)
        .unwrap_or_default()
        .into_owned()
}

#[inline]
fn text_val(e: &quick_xml::events::BytesText) -> String {
    let raw = std::str::from_utf8(e.as_ref()).unwrap_or("");
    quick_xml::escape::unescape(raw)
        .unwrap_or_default()
        .into_owned()
}

fn attrs(e: &BytesStart) -> HashMap<Vec<u8>, String> {
    e.attributes()
        .flatten()
        .map(|a| (a.key.as_ref().to_vec(), attr_val(&a)))
        .collect()
}

impl XlsxReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let (sheet_order, rid_to_name) = parse_workbook(&mut archive)?;
        let rid_to_path = parse_workbook_rels(&mut archive)?;

        let sheet_paths: HashMap<String, String> = rid_to_name
            .into_iter()
            .filter_map(|(rid, name)| rid_to_path.get(&rid).map(|p| (name, p.clone())))
            .collect();

        Ok(XlsxReader {
            archive,
            sheet_paths,
            sheet_order,
        })
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_order
    }

    pub fn read_sheet(&mut self, sheet_name: &str) -> Result<SheetContents> {
        let zip_path = self
            .sheet_paths
            .get(sheet_name)
            .ok_or_else(|| TrackerError::NotFound(format!("sheet '{sheet_name}'")))?
            .clone();
        let bytes = slurp_entry(&mut self.archive, &zip_path)?;
        parse_sheet(&bytes)
    }
}

#[derive(Default)]
struct CellState {
    key: Option<(u32, u32)>,
    cell: ReadCell,
    in_v: bool,
    in_f: bool,
    in_t: bool,
}

fn parse_sheet(bytes: &[u8]) -> Result<SheetContents> {
    let mut xml = XmlReader::from_reader(bytes);
    xml.config_mut().trim_text(false);

    let mut contents = SheetContents::default();
    let mut state = CellState::default();
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == b"c" => {
                state = start_cell(e);
            }
            Event::Empty(ref e) if e.name().as_ref() == b"c" => {
                let state = start_cell(e);
                if let Some(key) = state.key {
                    contents.cells.insert(key, state.cell);
                }
            }
            Event::Start(ref e) => match e.name().as_ref() {
                b"v" => state.in_v = true,
                b"f" => state.in_f = true,
                b"t" => state.in_t = true,
                _ => {}
            },
            Event::Empty(ref e) => match e.name().as_ref() {
                b"pane" => {
                    let a = attrs(e);
                    if a.get(b"state".as_slice()).map(String::as_str) == Some("frozen") {
                        contents.frozen_at = a
                            .get(b"topLeftCell".as_slice())
                            .and_then(|r| parse_cell_ref(r));
                    }
                }
                b"mergeCell" => {
                    if let Some(range) = attrs(e)
                        .get(b"ref".as_slice())
                        .and_then(|r| CellRange::parse(r))
                    {
                        contents.merges.push(range);
                    }
                }
                b"col" => {
                    let a = attrs(e);
                    let min = a.get(b"min".as_slice()).and_then(|v| v.parse::<u32>().ok());
                    let max = a.get(b"max".as_slice()).and_then(|v| v.parse::<u32>().ok());
                    let width = a.get(b"width".as_slice()).and_then(|v| v.parse::<f64>().ok());
                    if let (Some(min), Some(max), Some(width)) = (min, max, width) {
                        for col in min..=max {
                            contents.column_widths.insert(col, width);
                        }
                    }
                }
                b"f" => {
                    state.cell.formula.get_or_insert_with(String::new);
                }
                _ => {}
            },
            Event::Text(ref e) => {
                if state.in_f {
                    state
                        .cell
                        .formula
                        .get_or_insert_with(String::new)
                        .push_str(&text_val(e));
                } else if state.in_v || state.in_t {
                    state
                        .cell
                        .value
                        .get_or_insert_with(String::new)
                        .push_str(&text_val(e));
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"v" => state.in_v = false,
                b"f" => state.in_f = false,
                b"t" => state.in_t = false,
                b"c" => {
                    let done = std::mem::take(&mut state);
                    if let Some(key) = done.key {
                        contents.cells.insert(key, done.cell);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(contents)
}

fn start_cell(e: &BytesStart) -> CellState {
    let a = attrs(e);
    CellState {
        key: a.get(b"r".as_slice()).and_then(|r| parse_cell_ref(r)),
        cell: ReadCell {
            style: a
                .get(b"s".as_slice())
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            ..ReadCell::default()
        },
        ..CellState::default()
    }
}

fn parse_workbook(
    archive: &mut ZipArchive<File>,
) -> Result<(Vec<String>, HashMap<String, String>)> {
    let bytes = slurp_entry(archive, "xl/workbook.xml")?;
    let mut xml = XmlReader::from_reader(bytes.as_slice());
    xml.config_mut().trim_text(true);

    let mut order = Vec::new();
    let mut rid_map = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Empty(ref e) | Event::Start(ref e) if e.name().as_ref() == b"sheet" => {
                let (mut name, mut rid) = (String::new(), String::new());
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"name" => name = attr_val(&attr),
                        b"r:id" | b"id" => rid = attr_val(&attr),
                        _ => {}
                    }
                }
                if !name.is_empty() && !rid.is_empty() {
                    order.push(name.clone());
                    rid_map.insert(rid, name);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok((order, rid_map))
}

fn parse_workbook_rels(archive: &mut ZipArchive<File>) -> Result<HashMap<String, String>> {
    let bytes = slurp_entry(archive, "xl/_rels/workbook.xml.rels")?;
    let mut xml = XmlReader::from_reader(bytes.as_slice());
    xml.config_mut().trim_text(true);

    let mut map = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Empty(ref e) | Event::Start(ref e) if e.name().as_ref() == b"Relationship" => {
                let (mut id, mut target, mut is_sheet) = (String::new(), String::new(), false);
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Id" => id = attr_val(&attr),
                        b"Target" => target = attr_val(&attr),
                        b"Type" => is_sheet = attr_val(&attr).contains("worksheet"),
                        _ => {}
                    }
                }
                if is_sheet && !id.is_empty() {
                    map.insert(id, normalize_path(&target));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(map)
}

fn slurp_entry(archive: &mut ZipArchive<File>, path: &str) -> Result<Vec<u8>> {
    let mut entry = archive.by_name(path)?;
    let mut buf = Vec::with_capacity(entry.size() as usize);
    io::copy(&mut entry, &mut buf)?;
    Ok(buf)
}

/// Reads one raw part of the package, e.g. `xl/styles.xml`.
pub fn read_part(path: impl AsRef<Path>, part: &str) -> Result<String> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let mut entry = archive.by_name(part)?;
    let mut out = String::new();
    entry.read_to_string(&mut out)?;
    Ok(out)
}

fn normalize_path(target: &str) -> String {
    let t = target.trim_start_matches('/');
    if t.starts_with("xl/") {
        t.to_string()
    } else {
        format!("xl/{t}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet_cells_and_layout() {
        let xml = concat!(
            r#"<worksheet><sheetViews><sheetView workbookViewId="0">"#,
            r#"<pane ySplit="1" topLeftCell="A2" activePane="bottomLeft" state="frozen"/>"#,
            r#"</sheetView></sheetViews>"#,
            r#"<cols><col min="1" max="2" width="12" customWidth="1"/></cols>"#,
            r#"<sheetData><row r="1">"#,
            r#"<c r="A1" s="2" t="inlineStr"><is><t>Tom &amp; Jerry</t></is></c>"#,
            r#"<c r="B1"><f>AVERAGE(AC2:AH2)</f></c>"#,
            r#"<c r="C1"><v>5</v></c><c r="D1" s="4"/>"#,
            r#"</row></sheetData>"#,
            r#"<mergeCells count="1"><mergeCell ref="B2:D2"/></mergeCells></worksheet>"#,
        );
        let sheet = parse_sheet(xml.as_bytes()).unwrap();

        assert_eq!(sheet.value("A1"), Some("Tom & Jerry"));
        assert_eq!(sheet.get("A1").unwrap().style, 2);
        assert_eq!(sheet.formula("B1"), Some("AVERAGE(AC2:AH2)"));
        assert_eq!(sheet.value("B1"), None);
        assert_eq!(sheet.value("C1"), Some("5"));
        assert_eq!(sheet.get("D1").unwrap().style, 4);
        assert_eq!(sheet.row(1).count(), 3);
        assert_eq!(sheet.frozen_at, Some((2, 1)));
        assert_eq!(sheet.merges, vec![CellRange::row(2, 2, 4)]);
        assert_eq!(sheet.column_widths.get(&2), Some(&12.0));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
        assert_eq!(normalize_path("/xl/worksheets/sheet1.xml"), "xl/worksheets/sheet1.xml");
    }
}
