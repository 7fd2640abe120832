//! XLSX sink that renders tabular documents into workbook bytes.

use std::collections::HashMap;

use chrono::Utc;
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, Workbook, Worksheet,
    utility::row_col_to_cell,
};

use crate::conf::C_SHEET_NAME_DEFAULT;
use crate::document::{TabularDocument, TabularSink};
use crate::spec::{
    EnumCellValue, SpecCellFormat, SpecDocumentMetadata, SpecMergeRange, XlsxSinkError,
};
use crate::util::{cast_col_num, cast_row_num, validate_cell_address};

/// Single-sheet workbook writer.
///
/// The workbook is buffered in memory until [`Self::finish`] is called.
pub struct XlsxWriter {
    workbook: Workbook,
    worksheet: Worksheet,
    dict_fmt_cache: HashMap<SpecCellFormat, Format>,
}

impl XlsxWriter {
    /// Create a writer whose only sheet is named `sheet_name`.
    pub fn new(sheet_name: &str) -> Result<Self, XlsxSinkError> {
        let mut worksheet = Worksheet::new();
        worksheet.set_name(sheet_name)?;
        Ok(Self {
            workbook: Workbook::new(),
            worksheet,
            dict_fmt_cache: HashMap::new(),
        })
    }

    /// Render `document` on a fresh default-named sheet and return the bytes.
    pub fn render_document(document: &TabularDocument) -> Result<Vec<u8>, XlsxSinkError> {
        let mut writer = Self::new(C_SHEET_NAME_DEFAULT)?;
        document.replay_into(&mut writer)?;
        writer.finish()
    }

    /// Attach the sheet and serialize the workbook.
    pub fn finish(self) -> Result<Vec<u8>, XlsxSinkError> {
        let Self {
            mut workbook,
            worksheet,
            ..
        } = self;
        workbook.push_worksheet(worksheet);
        let v_bytes = workbook.save_to_buffer()?;
        tracing::debug!(n_bytes = v_bytes.len(), "workbook serialized");
        Ok(v_bytes)
    }

    fn derive_format(&mut self, spec: &SpecCellFormat) -> Format {
        self.dict_fmt_cache
            .entry(spec.clone())
            .or_insert_with(|| derive_rust_xlsx_format(spec))
            .clone()
    }
}

impl TabularSink for XlsxWriter {
    fn set_value(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: EnumCellValue,
        format: &SpecCellFormat,
    ) -> Result<(), XlsxSinkError> {
        validate_cell_address(row_idx, col_idx)?;
        let fmt = self.derive_format(format);
        let n_row = cast_row_num(row_idx)?;
        let n_col = cast_col_num(col_idx)?;
        match value {
            EnumCellValue::String(val) => {
                self.worksheet
                    .write_string_with_format(n_row, n_col, &val, &fmt)?;
            }
            EnumCellValue::Integer(val) => {
                self.worksheet
                    .write_number_with_format(n_row, n_col, val as f64, &fmt)?;
            }
        }
        tracing::trace!(cell = %row_col_to_cell(n_row, n_col), "value written");
        Ok(())
    }

    fn merge_range(&mut self, merge: &SpecMergeRange) -> Result<(), XlsxSinkError> {
        if merge.col_idx_end <= merge.col_idx_start {
            return Err(XlsxSinkError::InvalidMergeRange {
                row_idx: merge.row_idx,
                col_idx_start: merge.col_idx_start,
                col_idx_end: merge.col_idx_end,
            });
        }
        validate_cell_address(merge.row_idx, merge.col_idx_end)?;
        let fmt = self.derive_format(&merge.format);
        let n_row = cast_row_num(merge.row_idx)?;
        self.worksheet.merge_range(
            n_row,
            cast_col_num(merge.col_idx_start)?,
            n_row,
            cast_col_num(merge.col_idx_end)?,
            &merge.text,
            &fmt,
        )?;
        tracing::trace!(%merge, "merge written");
        Ok(())
    }

    fn set_column_width(&mut self, col_idx: usize, width: f64) -> Result<(), XlsxSinkError> {
        validate_cell_address(0, col_idx)?;
        self.worksheet
            .set_column_width(cast_col_num(col_idx)?, width)?;
        Ok(())
    }

    fn set_metadata(&mut self, metadata: &SpecDocumentMetadata) -> Result<(), XlsxSinkError> {
        // The container stores a single UTC instant for both created and modified.
        let c_created_utc = metadata
            .created_at
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        let dt_created = ExcelDateTime::parse_from_str(&c_created_utc)?;
        let properties = DocProperties::new()
            .set_author(&metadata.author)
            .set_comment(&metadata.description)
            .set_creation_datetime(&dt_created);
        self.workbook.set_properties(&properties);
        Ok(())
    }
}

fn derive_rust_xlsx_format(spec: &SpecCellFormat) -> Format {
    let mut format = Format::new();

    if let Some(val) = spec.font_size {
        format = format.set_font_size(val as f64);
    }
    if spec.bold.unwrap_or(false) {
        format = format.set_bold();
    }
    for val in [&spec.align, &spec.valign].into_iter().flatten() {
        match derive_format_align(val) {
            Some(align) => format = format.set_align(align),
            None => tracing::warn!(align = %val, "unknown alignment ignored"),
        }
    }

    format
}

fn derive_format_align(align: &str) -> Option<FormatAlign> {
    match align.trim().to_ascii_lowercase().as_str() {
        "left" => Some(FormatAlign::Left),
        "center" => Some(FormatAlign::Center),
        "vcenter" => Some(FormatAlign::VerticalCenter),
        _ => None,
    }
}
