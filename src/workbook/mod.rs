use std::{
    collections::HashMap,
    io::{BufWriter, Seek, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use zip::{DateTime, ZipWriter, write::SimpleFileOptions};

use crate::{
    Result,
    error::TrackerError,
    workbook::{
        cell::{CellValue, excel_serial},
        sheet::{Sheet, is_valid_sheet_name},
        style::StyleRegistry,
    },
};
pub mod address;
pub mod builder;
pub mod cell;
pub mod sheet;
pub mod style;

const RELS_DOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

fn workbook_xml(order: &[String]) -> String {
    let mut sheets = String::new();
    for (i, name) in order.iter().enumerate() {
        let sheet_id = i + 1;
        let r_id = format!("rId{}", i + 1);
        let escaped_name = xml_escape(name);
        sheets.push_str(&format!(
            r#"<sheet name="{escaped_name}" sheetId="{sheet_id}" r:id="{r_id}"/>"#
        ));
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<bookViews><workbookView activeTab="0"/></bookViews>"#,
            r#"<sheets>{}</sheets>"#,
            r#"<calcPr fullCalcOnLoad="1"/>"#,
            r#"</workbook>"#,
        ),
        sheets
    )
}

fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut rels = String::new();

    for i in 1..=sheet_count {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
        ));
    }

    let styles_id = sheet_count + 1;
    rels.push_str(&format!(
        r#"<Relationship Id="rId{styles_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#
    ));

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
            r#"{}"#,
            r#"</Relationships>"#,
        ),
        rels
    )
}

fn content_types_xml(sheet_count: usize) -> String {
    let mut overrides = String::new();

    for i in 1..=sheet_count {
        overrides.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
            r#"{}"#,
            r#"</Types>"#,
        ),
        overrides
    )
}

/// Ordered set of sheets plus the path the package is written to. The first
/// sheet is the active one.
pub struct Workbook {
    output_path: PathBuf,
    sheets: HashMap<String, Sheet>,
    insertion_order: Vec<String>,
}

impl Workbook {
    pub(crate) fn new_with_builder(path: PathBuf, sheets: Vec<String>) -> Result<Self> {
        let mut wb = Workbook {
            output_path: path,
            sheets: HashMap::new(),
            insertion_order: vec![],
        };
        sheets
            .into_iter()
            .try_for_each(|name| wb.add_sheet(&name).map(|_| ()))?;
        Ok(wb)
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn sheet_names(&self) -> &[String] {
        &self.insertion_order
    }

    pub fn get_sheet(&mut self, name: &str) -> Option<&mut Sheet> {
        self.sheets.get_mut(name)
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.get(name)
    }

    pub fn add_sheet(&mut self, name: &str) -> Result<&mut Sheet> {
        if !is_valid_sheet_name(name) {
            return Err(TrackerError::InvalidSheetName(name.to_string()));
        }
        // Excel compares sheet names case-insensitively.
        let lowered = name.to_lowercase();
        if self
            .insertion_order
            .iter()
            .any(|s| s.to_lowercase() == lowered)
        {
            return Err(TrackerError::AlreadyExists(format!(
                "Sheet '{name}' already exists"
            )));
        }
        self.insertion_order.push(name.to_string());
        Ok(self
            .sheets
            .entry(name.to_string())
            .or_insert_with(|| Sheet::new(name)))
    }

    /// Writes the package next to the target, then renames it into place. The
    /// target is either fully replaced or left untouched.
    pub fn finish(self) -> Result<PathBuf> {
        let target = self.output_path.clone();
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let persist_err = |source: std::io::Error| TrackerError::Persist {
            path: target.clone(),
            source,
        };

        let temp = NamedTempFile::new_in(&dir).map_err(persist_err)?;
        let mut zip = ZipWriter::new(temp);
        self.write_package(&mut zip)?;
        let temp = zip.finish()?;
        temp.as_file().sync_all().map_err(persist_err)?;
        temp.persist(&target).map_err(|e| persist_err(e.error))?;

        tracing::debug!(path = %target.display(), "workbook persisted");
        Ok(target)
    }

    fn write_package<W: Write + Seek>(&self, zip: &mut ZipWriter<W>) -> Result<()> {
        // Fixed entry timestamps keep repeated runs byte-comparable.
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        let sheet_count = self.insertion_order.len();

        zip_write_str(
            zip,
            "[Content_Types].xml",
            &content_types_xml(sheet_count),
            options,
        )?;
        zip_write_str(zip, "_rels/.rels", RELS_DOT_RELS, options)?;
        zip_write_str(
            zip,
            "xl/workbook.xml",
            &workbook_xml(&self.insertion_order),
            options,
        )?;
        zip_write_str(
            zip,
            "xl/_rels/workbook.xml.rels",
            &workbook_rels_xml(sheet_count),
            options,
        )?;

        let mut style_reg = StyleRegistry::new();
        for (i, name) in self.insertion_order.iter().enumerate() {
            let sheet = self
                .sheets
                .get(name)
                .ok_or_else(|| TrackerError::NotFound(format!("Sheet name : {name}")))?;
            let zip_path = format!("xl/worksheets/sheet{}.xml", i + 1);

            zip.start_file(zip_path.as_str(), options)?;
            let mut out = BufWriter::with_capacity(64 * 1024, &mut *zip);
            sheet.write_xml(&mut out, &mut style_reg, i == 0)?;
            out.flush()?;
        }

        // Registered while the sheets were rendered, so it goes last.
        zip_write_str(zip, "xl/styles.xml", &style_reg.to_xml(), options)?;
        Ok(())
    }
}

pub(crate) fn xml_escape(s: &str) -> String {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

pub(crate) fn write_cell<W: Write>(
    w: &mut W,
    cell_ref: &str,
    value: &CellValue,
    style_idx: Option<usize>,
) -> Result<()> {
    let s = match style_idx {
        Some(0) | None => String::new(),
        Some(n) => format!(" s=\"{n}\""),
    };

    match value {
        CellValue::Blank => {
            write!(w, "<c r=\"{cell_ref}\"{s}/>")?;
        }
        CellValue::Number(n) => {
            write!(w, "<c r=\"{cell_ref}\"{s}><v>{n}</v></c>")?;
        }
        CellValue::Date(d) => {
            let serial = excel_serial(*d);
            write!(w, "<c r=\"{cell_ref}\"{s}><v>{serial}</v></c>")?;
        }
        CellValue::Text(text) => {
            let escaped = xml_escape(text);
            let space = if text.trim() != text {
                " xml:space=\"preserve\""
            } else {
                ""
            };
            write!(
                w,
                "<c r=\"{cell_ref}\"{s} t=\"inlineStr\"><is><t{space}>{escaped}</t></is></c>"
            )?;
        }
        CellValue::Bool(b) => {
            write!(w, "<c r=\"{cell_ref}\"{s} t=\"b\"><v>{}</v></c>", u8::from(*b))?;
        }
        CellValue::Formula(_) => {
            let escaped = xml_escape(value.formula_body().unwrap_or_default());
            write!(w, "<c r=\"{cell_ref}\"{s}><f>{escaped}</f></c>")?;
        }
    }
    Ok(())
}

pub(crate) fn zip_write_str<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    path: &str,
    content: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}
