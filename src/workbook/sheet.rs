use std::{
    collections::{BTreeMap, BTreeSet},
    io::Write,
};

use crate::{
    Result,
    workbook::{
        address::{CellRange, cell_ref},
        cell::CellValue,
        style::{Style, StyleRegistry, border::Border, fill::Fill, number::NumberFormat},
        write_cell,
    },
};

/// Format applied to date cells that carry no date format of their own.
const DEFAULT_DATE_FORMAT: &str = "yyyy-mm-dd";

/// In-memory worksheet: values, styles, widths, merges and the frozen pane.
/// Coordinates are 1-based (row, col).
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u32), CellValue>,
    styles: BTreeMap<(u32, u32), Style>,
    column_widths: BTreeMap<u32, f64>,
    merges: Vec<CellRange>,
    freeze: Option<(u32, u32)>,
}

impl Sheet {
    pub(crate) fn new(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            cells: BTreeMap::new(),
            styles: BTreeMap::new(),
            column_widths: BTreeMap::new(),
            merges: Vec::new(),
            freeze: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets a value. An existing value at the same coordinate is replaced; its
    /// style is kept.
    pub fn write(&mut self, row: u32, col: u32, value: impl Into<CellValue>) {
        debug_assert_in_grid(row, col);
        self.cells.insert((row, col), value.into());
    }

    pub fn write_with_style(
        &mut self,
        row: u32,
        col: u32,
        value: impl Into<CellValue>,
        style: &Style,
    ) {
        self.write(row, col, value);
        self.set_style(row, col, style);
    }

    pub fn set_style(&mut self, row: u32, col: u32, style: &Style) {
        debug_assert_in_grid(row, col);
        self.styles.insert((row, col), style.clone());
    }

    /// Applies `fill` over every cell of `range`, keeping fonts and borders
    /// already set there.
    pub fn fill_range(&mut self, range: CellRange, fill: &Fill) {
        debug_assert_in_grid(range.first_row, range.first_col);
        for key in range.cells() {
            self.styles.entry(key).or_default().fill = fill.clone();
        }
    }

    /// Outlines every cell of `range` with `border`, keeping fonts and fills.
    pub fn border_range(&mut self, range: CellRange, border: &Border) {
        debug_assert_in_grid(range.first_row, range.first_col);
        for key in range.cells() {
            self.styles.entry(key).or_default().border = border.clone();
        }
    }

    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Merges `range`. A range overlapping an earlier merge replaces it.
    pub fn merge(&mut self, range: CellRange) {
        self.merges.retain(|m| !m.overlaps(&range));
        self.merges.push(range);
    }

    /// Freezes rows above and columns left of (row, col). (1, 1) clears it.
    pub fn freeze_panes(&mut self, row: u32, col: u32) {
        let (row, col) = (row.max(1), col.max(1));
        self.freeze = (row > 1 || col > 1).then_some((row, col));
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    pub fn style_at(&self, row: u32, col: u32) -> Option<&Style> {
        self.styles.get(&(row, col))
    }

    pub fn column_width(&self, col: u32) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn merges(&self) -> &[CellRange] {
        &self.merges
    }

    pub fn frozen_at(&self) -> Option<(u32, u32)> {
        self.freeze
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Smallest range covering every value and every styled cell.
    pub fn used_range(&self) -> Option<CellRange> {
        let mut keys = self.cells.keys().chain(self.styles.keys());
        let &(r, c) = keys.next()?;
        let init = CellRange::new(r, c, r, c);
        Some(keys.fold(init, |acc, &(r, c)| {
            CellRange::new(
                acc.first_row.min(r),
                acc.first_col.min(c),
                acc.last_row.max(r),
                acc.last_col.max(c),
            )
        }))
    }

    pub(crate) fn write_xml<W: Write>(
        &self,
        w: &mut W,
        reg: &mut StyleRegistry,
        selected: bool,
    ) -> Result<()> {
        write!(
            w,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" "#,
                r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            )
        )?;

        let dimension = self
            .used_range()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "A1".to_string());
        write!(w, "<dimension ref=\"{dimension}\"/>")?;

        self.write_sheet_views(w, selected)?;
        write!(w, "<sheetFormatPr defaultRowHeight=\"15\"/>")?;

        if !self.column_widths.is_empty() {
            write!(w, "<cols>")?;
            for (col, width) in &self.column_widths {
                write!(
                    w,
                    "<col min=\"{col}\" max=\"{col}\" width=\"{width}\" customWidth=\"1\"/>"
                )?;
            }
            write!(w, "</cols>")?;
        }

        write!(w, "<sheetData>")?;
        let keys: BTreeSet<(u32, u32)> = self
            .cells
            .keys()
            .chain(self.styles.keys())
            .copied()
            .collect();
        let mut open_row = None;
        for (row, col) in keys {
            if open_row != Some(row) {
                if open_row.is_some() {
                    write!(w, "</row>")?;
                }
                write!(w, "<row r=\"{row}\">")?;
                open_row = Some(row);
            }
            let value = self.cells.get(&(row, col)).unwrap_or(&CellValue::Blank);
            let style_idx = self.style_index(row, col, value, reg);
            write_cell(w, &cell_ref(row, col), value, style_idx)?;
        }
        if open_row.is_some() {
            write!(w, "</row>")?;
        }
        write!(w, "</sheetData>")?;

        if !self.merges.is_empty() {
            write!(w, "<mergeCells count=\"{}\">", self.merges.len())?;
            for range in &self.merges {
                write!(w, "<mergeCell ref=\"{range}\"/>")?;
            }
            write!(w, "</mergeCells>")?;
        }

        write!(
            w,
            "<pageMargins left=\"0.75\" right=\"0.75\" top=\"1\" bottom=\"1\" header=\"0.5\" footer=\"0.5\"/>\
             </worksheet>"
        )?;
        Ok(())
    }

    fn write_sheet_views<W: Write>(&self, w: &mut W, selected: bool) -> Result<()> {
        let tab = if selected { " tabSelected=\"1\"" } else { "" };
        write!(w, "<sheetViews><sheetView{tab} workbookViewId=\"0\"")?;

        match self.freeze {
            None => write!(w, "/></sheetViews>")?,
            Some((row, col)) => {
                let (x_split, y_split) = (col - 1, row - 1);
                let pane = match (x_split > 0, y_split > 0) {
                    (true, true) => "bottomRight",
                    (false, true) => "bottomLeft",
                    _ => "topRight",
                };
                let top_left = cell_ref(row, col);
                write!(w, "><pane")?;
                if x_split > 0 {
                    write!(w, " xSplit=\"{x_split}\"")?;
                }
                if y_split > 0 {
                    write!(w, " ySplit=\"{y_split}\"")?;
                }
                write!(
                    w,
                    " topLeftCell=\"{top_left}\" activePane=\"{pane}\" state=\"frozen\"/>\
                     <selection pane=\"{pane}\" activeCell=\"{top_left}\" sqref=\"{top_left}\"/>\
                     </sheetView></sheetViews>"
                )?;
            }
        }
        Ok(())
    }

    fn style_index(
        &self,
        row: u32,
        col: u32,
        value: &CellValue,
        reg: &mut StyleRegistry,
    ) -> Option<usize> {
        let style = self.styles.get(&(row, col));
        match value {
            CellValue::Date(_) if !style.is_some_and(|s| s.number_format.is_date()) => {
                let dated = style
                    .cloned()
                    .unwrap_or_default()
                    .format(NumberFormat::Custom(DEFAULT_DATE_FORMAT.into()));
                Some(reg.register(&dated))
            }
            _ => style.map(|s| reg.register(s)),
        }
    }
}

/// Row 0 and column 0 have no A1 reference.
fn debug_assert_in_grid(row: u32, col: u32) {
    debug_assert!(row > 0 && col > 0, "cell ({row}, {col}) is outside the 1-based grid");
}

/// Sheet names Excel accepts: 1..=31 chars, none of `[]:*?/\`, no leading or
/// trailing apostrophe.
pub(crate) fn is_valid_sheet_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=31).contains(&len)
        && !name.contains(['[', ']', ':', '*', '?', '/', '\\'])
        && !name.starts_with('\'')
        && !name.ends_with('\'')
}
